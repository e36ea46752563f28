//! Walk the signature-capture flow end to end: a blocked submit, a drawn
//! signature, and the simulated submission with its reset.
//!
//! Run with: cargo run --example capture_flow

use atelier::capture::{CaptureMethod, CustomizationForm, JewelryKind, Material, SimulatedSubmission};
use atelier::SiteConfig;

fn main() {
    let config = SiteConfig::default();
    let mut form = CustomizationForm::new(&config);
    let service = SimulatedSubmission::from_config(&config);

    // Submitting with no signature is blocked
    match form.submit(&service) {
        Err(e) => println!("blocked as expected: {}", e),
        Ok(_) => unreachable!("empty form must not submit"),
    }

    // Draw a signature
    form.set_method(CaptureMethod::Draw);
    form.pad().begin_stroke(12.0, 110.0);
    for i in 1..40 {
        let x = 12.0 + i as f64 * 6.0;
        let y = 110.0 + (i as f64 * 0.6).sin() * 18.0;
        form.pad().extend_stroke(x, y);
    }
    form.pad().end_stroke();
    form.save_drawn_signature();

    form.set_jewelry_type(JewelryKind::Ring);
    form.set_material(Material::RoseGold);
    form.set_contact("A. Customer", "a@example.com", "");

    let receipt = form.submit(&service).expect("simulated submission succeeds");
    println!("submitted, reference: {}", receipt.reference);
    println!("state after submit: {:?}", form.state());

    form.finish_success();
    println!("state after reset: {:?}", form.state());
    println!("signature cleared: {}", form.signature().is_none());
}

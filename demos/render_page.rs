//! Render the full landing page to stdout, once for a desktop probe and
//! once as an older low-memory Android device would see it.
//!
//! Run with: cargo run --example render_page

use atelier::platform::{DeviceProfile, FixedProbe, HeadlessProbe, RuntimeProbe};
use atelier::rendering::Page;
use atelier::SiteConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::default();
    config.validate()?;

    let page = Page::new(config);

    let headless = HeadlessProbe::new();
    println!("quality (no browser): {}", headless.quality());

    let old_android = FixedProbe::new(DeviceProfile::modern(
        "Mozilla/5.0 (Linux; Android 4.4.2; GT-I9505)",
    ));
    println!("quality (old Android): {}", old_android.quality());

    let html = page.render(&headless);
    println!("{}", html);

    Ok(())
}

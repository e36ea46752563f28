//! Customization form: the flow that turns a captured signature plus design
//! preferences into a submission
//!
//! Submission goes through the [`SubmissionService`] trait. The shipped
//! behavior (a fixed delay, then unconditional success) lives in
//! [`SimulatedSubmission`], which is a stub: the trait returns `Result` so a
//! real backend with a failure path drops in without touching the machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, SiteConfig};

use super::dropzone::{DroppedFile, Dropzone};
use super::pad::SignaturePad;
use super::SignatureImage;

/// How the signature is being acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMethod {
    Draw,
    Upload,
}

/// Jewelry types offered by the customization form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JewelryKind {
    Ring,
    Necklace,
    Bracelet,
    Earrings,
    Cufflinks,
}

impl JewelryKind {
    pub fn label(&self) -> &'static str {
        match self {
            JewelryKind::Ring => "Ring",
            JewelryKind::Necklace => "Necklace",
            JewelryKind::Bracelet => "Bracelet",
            JewelryKind::Earrings => "Earrings",
            JewelryKind::Cufflinks => "Cufflinks",
        }
    }
}

/// Materials offered by the customization form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    YellowGold,
    WhiteGold,
    RoseGold,
    Silver,
    Platinum,
}

impl Material {
    pub fn label(&self) -> &'static str {
        match self {
            Material::YellowGold => "Yellow Gold",
            Material::WhiteGold => "White Gold",
            Material::RoseGold => "Rose Gold",
            Material::Silver => "Sterling Silver",
            Material::Platinum => "Platinum",
        }
    }
}

/// Form flow states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Success,
}

/// Payload handed to the submission service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationRequest {
    pub signature_data_url: String,
    pub jewelry_type: Option<JewelryKind>,
    pub material: Option<Material>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub special_requests: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub phone: String,
}

/// Acknowledgement from the submission service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
}

/// Seam between the form machine and whatever receives submissions
pub trait SubmissionService: Send + Sync {
    fn submit(&self, request: &CustomizationRequest) -> Result<SubmissionReceipt>;
}

/// Stand-in service: waits the configured delay and always succeeds.
///
/// This reproduces the shipped site's timer-driven fake. It never exercises
/// the failure path; anything real should implement [`SubmissionService`]
/// directly.
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        SimulatedSubmission { delay }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(Duration::from_millis(config.submit_delay_ms))
    }

    /// Instant variant for tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl SubmissionService for SimulatedSubmission {
    fn submit(&self, _request: &CustomizationRequest) -> Result<SubmissionReceipt> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(SubmissionReceipt {
            reference: "simulated".to_string(),
        })
    }
}

/// The customization form flow.
///
/// Owns both acquisition surfaces. Each mode keeps its own signature;
/// entering a mode starts from that mode's prior state, never from the
/// other's.
pub struct CustomizationForm {
    method: CaptureMethod,
    pad: SignaturePad,
    dropzone: Dropzone,
    pad_signature: Option<SignatureImage>,
    jewelry_type: Option<JewelryKind>,
    material: Option<Material>,
    special_requests: String,
    name: String,
    email: String,
    phone: String,
    state: FormState,
    last_error: Option<String>,
}

impl CustomizationForm {
    pub fn new(config: &SiteConfig) -> Self {
        CustomizationForm {
            // The shipped form opens on upload, not draw
            method: CaptureMethod::Upload,
            pad: SignaturePad::new(config.viewport.width, config.pad_height),
            dropzone: Dropzone::new(config.max_signature_bytes),
            pad_signature: None,
            jewelry_type: None,
            material: None,
            special_requests: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            state: FormState::Editing,
            last_error: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn method(&self) -> CaptureMethod {
        self.method
    }

    pub fn jewelry_type(&self) -> Option<JewelryKind> {
        self.jewelry_type
    }

    pub fn material(&self) -> Option<Material> {
        self.material
    }

    /// Error from the most recent rejected action, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The signature belonging to the active mode, if one exists
    pub fn signature(&self) -> Option<&SignatureImage> {
        match self.method {
            CaptureMethod::Draw => self.pad_signature.as_ref(),
            CaptureMethod::Upload => self.dropzone.image(),
        }
    }

    /// Switch acquisition mode. Nothing transfers across; each mode resumes
    /// from its own prior state.
    pub fn set_method(&mut self, method: CaptureMethod) {
        self.method = method;
    }

    pub fn set_jewelry_type(&mut self, kind: JewelryKind) {
        self.jewelry_type = Some(kind);
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = Some(material);
    }

    pub fn set_special_requests(&mut self, text: &str) {
        self.special_requests = text.to_string();
    }

    pub fn set_contact(&mut self, name: &str, email: &str, phone: &str) {
        self.name = name.to_string();
        self.email = email.to_string();
        self.phone = phone.to_string();
    }

    // --- Draw mode ---

    pub fn pad(&mut self) -> &mut SignaturePad {
        &mut self.pad
    }

    /// Serialize the pad strokes into the draw-mode signature
    pub fn save_drawn_signature(&mut self) {
        if let Some(sig) = self.pad.save() {
            self.pad_signature = Some(sig);
        }
    }

    /// Clear the pad and drop the draw-mode signature
    pub fn clear_drawn_signature(&mut self) {
        self.pad.clear();
        self.pad_signature = None;
    }

    // --- Upload mode ---

    pub fn dropzone(&mut self) -> &mut Dropzone {
        &mut self.dropzone
    }

    /// Convenience wrapper for tests and synchronous callers: drop files and
    /// immediately complete the read with the given bytes
    pub fn drop_and_read(&mut self, file: DroppedFile, bytes: Vec<u8>) -> Result<()> {
        let gen = self
            .dropzone
            .drop_files(vec![file])
            .map_err(|r| Error::Validation(format!("drop rejected: {:?}", r)))?;
        self.dropzone.complete_read(gen, bytes);
        Ok(())
    }

    // --- Submission ---

    /// Submit the form through the given service.
    ///
    /// Blocked while no signature exists for the active mode: the state does
    /// not change and the validation notice is surfaced. On service success
    /// the form reaches `Success`; a service failure returns the form to
    /// `Editing` with the error recorded.
    pub fn submit(&mut self, service: &dyn SubmissionService) -> Result<SubmissionReceipt> {
        if self.state != FormState::Editing {
            return Err(Error::Validation("a submission is already in progress".into()));
        }

        let signature_data_url = match self.signature() {
            Some(signature) => signature.to_data_url(),
            None => {
                let notice = "Please provide your signature before submitting";
                self.last_error = Some(notice.to_string());
                return Err(Error::Validation(notice.into()));
            }
        };

        let request = CustomizationRequest {
            signature_data_url,
            jewelry_type: self.jewelry_type,
            material: self.material,
            special_requests: self.special_requests.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        };

        self.state = FormState::Submitting;
        self.last_error = None;

        match service.submit(&request) {
            Ok(receipt) => {
                self.state = FormState::Success;
                Ok(receipt)
            }
            Err(e) => {
                self.state = FormState::Editing;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Called when the success notice has been displayed for its fixed
    /// duration: revert to the initial empty form
    pub fn finish_success(&mut self) {
        if self.state != FormState::Success {
            return;
        }
        self.clear_drawn_signature();
        self.dropzone.replace();
        self.jewelry_type = None;
        self.material = None;
        self.special_requests.clear();
        self.state = FormState::Editing;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::DropzoneState;

    fn form() -> CustomizationForm {
        CustomizationForm::new(&SiteConfig::default())
    }

    fn png_file(size: u64) -> DroppedFile {
        DroppedFile {
            name: "sig.png".into(),
            mime: "image/png".into(),
            size,
        }
    }

    #[test]
    fn default_method_is_upload() {
        assert_eq!(form().method(), CaptureMethod::Upload);
    }

    #[test]
    fn submit_without_signature_is_blocked() {
        let mut f = form();
        let svc = SimulatedSubmission::instant();
        let err = f.submit(&svc).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(f.state(), FormState::Editing);
        assert!(f.last_error().unwrap().contains("signature"));
    }

    #[test]
    fn dropped_file_enables_submission_and_success_resets() {
        let mut f = form();
        f.set_jewelry_type(JewelryKind::Ring);
        f.set_material(Material::RoseGold);
        f.drop_and_read(png_file(2 * 1024 * 1024), vec![0; 64]).unwrap();

        let svc = SimulatedSubmission::instant();
        let receipt = f.submit(&svc).expect("submission should succeed");
        assert_eq!(receipt.reference, "simulated");
        assert_eq!(f.state(), FormState::Success);

        f.finish_success();
        assert_eq!(f.state(), FormState::Editing);
        assert!(f.signature().is_none());
        assert!(f.jewelry_type().is_none());
        assert!(f.material().is_none());
        assert_eq!(f.dropzone().state(), DropzoneState::Idle);
    }

    #[test]
    fn drawn_signature_enables_submission() {
        let mut f = form();
        f.set_method(CaptureMethod::Draw);
        f.pad().begin_stroke(10.0, 80.0);
        f.pad().extend_stroke(60.0, 90.0);
        f.pad().end_stroke();
        f.save_drawn_signature();
        assert!(f.signature().is_some());

        let svc = SimulatedSubmission::instant();
        assert!(f.submit(&svc).is_ok());
    }

    #[test]
    fn switching_modes_does_not_transfer_signatures() {
        let mut f = form();
        f.drop_and_read(png_file(10), vec![1, 2, 3]).unwrap();
        assert!(f.signature().is_some());

        f.set_method(CaptureMethod::Draw);
        assert!(f.signature().is_none(), "draw mode starts empty");

        // Upload mode's own image survives the round trip
        f.set_method(CaptureMethod::Upload);
        assert!(f.signature().is_some());
    }

    #[test]
    fn service_failure_returns_to_editing() {
        struct FailingService;
        impl SubmissionService for FailingService {
            fn submit(&self, _request: &CustomizationRequest) -> Result<SubmissionReceipt> {
                Err(Error::Network("backend unreachable".into()))
            }
        }

        let mut f = form();
        f.drop_and_read(png_file(10), vec![1]).unwrap();
        let err = f.submit(&FailingService).unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert_eq!(f.state(), FormState::Editing);
        assert!(f.last_error().unwrap().contains("unreachable"));
        // Signature survives a failed submission
        assert!(f.signature().is_some());
    }

    #[test]
    fn request_payload_serializes() {
        let request = CustomizationRequest {
            signature_data_url: "data:image/png;base64,AA==".into(),
            jewelry_type: Some(JewelryKind::Necklace),
            material: Some(Material::WhiteGold),
            special_requests: String::new(),
            name: "A. Customer".into(),
            email: "a@example.com".into(),
            phone: String::new(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""jewelry_type":"necklace""#));
        assert!(json.contains(r#""material":"white-gold""#));
        assert!(!json.contains("special_requests"));
    }
}

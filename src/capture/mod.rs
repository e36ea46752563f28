//! Signature capture: the drawing pad, the file dropzone, and the
//! customization-form state machine they feed
//!
//! The two acquisition modes are mutually exclusive and each owns its own
//! signature; switching modes never transfers one across.

pub mod dropzone;
pub mod form;
pub mod pad;

pub use dropzone::{DropRejection, Dropzone, DroppedFile, DropzoneState};
pub use form::{
    CaptureMethod, CustomizationForm, CustomizationRequest, FormState, JewelryKind, Material,
    SimulatedSubmission, SubmissionReceipt, SubmissionService,
};
pub use pad::{SignaturePad, TouchGuard};

use base64::Engine as _;

/// An in-memory encoded signature image, produced by pad-save or file-drop.
///
/// Held in component-local state only; it is discarded on form reset and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureImage {
    mime: String,
    bytes: Vec<u8>,
}

impl SignatureImage {
    pub fn new(mime: &str, bytes: Vec<u8>) -> Self {
        SignatureImage {
            mime: mime.to_string(),
            bytes,
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Encode as a `data:` URL, the representation the form previews and
    /// submits
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime, encoded)
    }
}

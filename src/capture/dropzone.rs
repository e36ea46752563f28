//! Signature upload dropzone
//!
//! Accepts image MIME types up to 5 MiB. File reads complete asynchronously
//! in the browser, so each accepted drop is tagged with a generation; a
//! completion carrying a stale generation is discarded instead of
//! overwriting state produced by a later drop.

use log::warn;

use super::SignatureImage;

/// A file handed to the dropzone by drag-and-drop or the picker
#[derive(Debug, Clone)]
pub struct DroppedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Why a drop was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropRejection {
    /// No files in the drop
    Empty,
    /// MIME type is not `image/*`
    NotAnImage,
    /// File exceeds the configured size bound
    TooLarge,
}

/// Observable dropzone state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropzoneState {
    /// Empty target, waiting for a drop
    Idle,
    /// A file was accepted and its read is in flight
    Reading,
    /// A signature image is stored
    Holding,
}

/// Drop target / file picker that produces a [`SignatureImage`]
#[derive(Debug)]
pub struct Dropzone {
    max_bytes: u64,
    state: DropzoneState,
    generation: u64,
    pending: Option<DroppedFile>,
    image: Option<SignatureImage>,
}

impl Dropzone {
    pub fn new(max_bytes: u64) -> Self {
        Dropzone {
            max_bytes,
            state: DropzoneState::Idle,
            generation: 0,
            pending: None,
            image: None,
        }
    }

    pub fn state(&self) -> DropzoneState {
        self.state
    }

    pub fn image(&self) -> Option<&SignatureImage> {
        self.image.as_ref()
    }

    /// Validate a drop and start reading the first accepted file.
    ///
    /// Returns the generation token the eventual [`Self::complete_read`]
    /// must carry. Later files in a multi-file drop are ignored, as in the
    /// live dropzone.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>) -> Result<u64, DropRejection> {
        let file = files.into_iter().next().ok_or(DropRejection::Empty)?;

        if !file.mime.starts_with("image/") {
            return Err(DropRejection::NotAnImage);
        }
        if file.size > self.max_bytes {
            return Err(DropRejection::TooLarge);
        }

        self.generation += 1;
        self.pending = Some(file);
        self.state = DropzoneState::Reading;
        Ok(self.generation)
    }

    /// Deliver the bytes of a completed file read.
    ///
    /// Only the read matching the current generation may apply; a stale
    /// completion is logged and dropped.
    pub fn complete_read(&mut self, generation: u64, bytes: Vec<u8>) {
        if generation != self.generation {
            warn!(
                "discarding stale file read (generation {} != current {})",
                generation, self.generation
            );
            return;
        }

        let mime = self
            .pending
            .take()
            .map(|f| f.mime)
            .unwrap_or_else(|| "image/png".to_string());
        self.image = Some(SignatureImage::new(&mime, bytes));
        self.state = DropzoneState::Holding;
    }

    /// Discard the stored image and return to the empty drop target
    pub fn replace(&mut self) {
        self.image = None;
        self.pending = None;
        self.state = DropzoneState::Idle;
    }
}

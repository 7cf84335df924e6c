//! Capabilities the coordinator borrows from its host surface.
//!
//! Prompts and background work are injected so the coordinator stays
//! testable without a real UI.

use crate::model::note::Note;

/// Explicit confirmation before a destructive delete.
pub trait DeleteConfirmation {
    /// Returns `true` to proceed with deleting `note`.
    fn confirm_delete(&mut self, note: &Note) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: FnMut(&Note) -> bool,
{
    fn confirm_delete(&mut self, note: &Note) -> bool {
        self(note)
    }
}

/// One-time passive registration (offline cache, background worker).
///
/// Its outcome is logged only; note operations never depend on it.
pub trait BackgroundRegistration {
    fn register(&mut self) -> Result<(), String>;
}

/// Registration for hosts that have nothing to register.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistration;

impl BackgroundRegistration for NoRegistration {
    fn register(&mut self) -> Result<(), String> {
        Ok(())
    }
}

/// File picked for insertion into the rich-text surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    /// Media type reported by the picker, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Only `image/*` media types are accepted.
    pub fn is_image(&self) -> bool {
        self.media_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

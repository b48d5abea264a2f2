//! Attachment staging.
//!
//! Holds at most one pending evidence file reference. Staging performs no
//! upload, hashing, or size/type enforcement — the reference simply
//! survives until submission or an explicit clear.

use crate::domain::model::AttachmentRef;

/// Single-slot holder for the pending evidence attachment.
#[derive(Clone, Debug, Default)]
pub struct AttachmentStager {
    staged: Option<AttachmentRef>,
}

impl AttachmentStager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a file reference, returning the one it replaced, if any.
    pub fn stage(&mut self, file: AttachmentRef) -> Option<AttachmentRef> {
        self.staged.replace(file)
    }

    /// Drop the staged reference, if any.
    pub fn clear(&mut self) {
        self.staged = None;
    }

    pub fn staged(&self) -> Option<&AttachmentRef> {
        self.staged.as_ref()
    }

    /// Hand the staged reference over (e.g. into the submission), leaving
    /// the stager empty.
    pub fn take(&mut self) -> Option<AttachmentRef> {
        self.staged.take()
    }
}

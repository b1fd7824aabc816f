//! File attachment metadata
//!
//! The form core never sees file contents. The file-drop collaborator hands
//! over `(name, size, handle)` tuples; validation inspects `size_bytes` only
//! and the handle travels untouched to the submission sink.

use serde::{Deserialize, Serialize};

/// Per-photo size cap: 2 MiB.
pub const PHOTO_MAX_BYTES: u64 = 2 * 1024 * 1024;

/// Per-document size cap: 5 MiB.
pub const DOCUMENT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Metadata for one dropped file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Display name of the file.
    pub name: String,
    /// Size in bytes, as reported by the collaborator.
    pub size_bytes: u64,
    /// Opaque handle to the content (URL, object key, blob id).
    pub content_handle: String,
}

impl FileAttachment {
    /// Creates attachment metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        content_handle: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_handle: content_handle.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_match_the_form_contract() {
        assert_eq!(PHOTO_MAX_BYTES, 2_097_152);
        assert_eq!(DOCUMENT_MAX_BYTES, 5_242_880);
    }

    #[test]
    fn serde_round_trip() {
        let file = FileAttachment::new("front.jpg", 1024, "blob:abc123");
        let json = serde_json::to_string(&file).unwrap();
        let back: FileAttachment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }
}

//! Uploaded file descriptors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

open_enum! {
    /// Processing state of an uploaded file
    pub enum FileState {
        /// Default value, unused
        Unspecified => "STATE_UNSPECIFIED",
        /// Still being processed
        Processing => "PROCESSING",
        /// Ready for use
        Active => "ACTIVE",
        /// Processing failed
        Failed => "FAILED",
    }
}

open_enum! {
    /// How a file came to exist
    pub enum FileSource {
        /// Default value, unused
        Unspecified => "SOURCE_UNSPECIFIED",
        /// Uploaded by the caller
        Uploaded => "UPLOADED",
        /// Generated by the service
        Generated => "GENERATED",
    }
}

/// Error status of a file whose processing failed
///
/// Mapped structurally: keys follow declaration order, empty fields are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStatus {
    /// Error details, free-form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<serde_json::Map<String, serde_json::Value>>,
    /// Error message
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Status code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

/// A file uploaded to, or generated by, the service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    /// Resource name, `files/{id}`
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// MIME type
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: Option<i64>,
    /// Creation time
    pub create_time: Option<DateTime<Utc>>,
    /// Time after which the file is deleted
    pub expiration_time: Option<DateTime<Utc>>,
    /// Last update time
    pub update_time: Option<DateTime<Utc>>,
    /// SHA-256 of the content, base64
    pub sha256_hash: String,
    /// URI of the file
    pub uri: String,
    /// URI for downloading generated files
    pub download_uri: String,
    /// Processing state
    pub state: Option<FileState>,
    /// Origin of the file
    pub source: Option<FileSource>,
    /// Video metadata, free-form
    pub video_metadata: serde_json::Map<String, serde_json::Value>,
    /// Error status if processing failed
    pub error: Option<FileStatus>,
}

impl File {
    /// True once the service has finished processing the file
    pub fn is_active(&self) -> bool {
        self.state == Some(FileState::Active)
    }
}

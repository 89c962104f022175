//! Core record types for the generative AI wire layer
//!
//! This crate defines the strongly-typed, in-memory shape of every record the
//! service exchanges over JSON. It carries no encoding logic: the wire rules
//! (quoted 64-bit integers, `"Ns"` durations, RFC 3339 timestamps, base64
//! bytes) live in `genai-wire`.
//!
//! ## Field Conventions
//!
//! | Wire kind | In-memory type | Zero / absent |
//! |-----------|----------------|---------------|
//! | optional int64 | `Option<i64>` | `None` |
//! | required int64 | `i64` | `0` (still emitted) |
//! | duration | `chrono::TimeDelta` | `TimeDelta::zero()` |
//! | timestamp | `Option<DateTime<Utc>>` | `None` |
//! | date | [`CivilDate`] | [`CivilDate::is_zero`] |
//! | bytes | `Vec<u8>` | empty |
//! | enum | open enum with `Other(String)` | `None` |
//!
//! Every record is a plain value type: `Clone`, `PartialEq`, `Default`.

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod enums;

pub mod caching;
pub mod citation;
pub mod content;
pub mod date;
pub mod file;
pub mod live;
pub mod schema;
pub mod tokens;
pub mod tuning;

pub use caching::{
    CachedContent, CachedContentUsageMetadata, CreateCachedContentConfig,
    UpdateCachedContentConfig,
};
pub use citation::{Citation, CitationMetadata};
pub use content::{Candidate, FinishReason, GenerateContentResponse, UsageMetadata, VideoMetadata};
pub use date::CivilDate;
pub use file::{File, FileSource, FileState, FileStatus};
pub use live::{ContextWindowCompressionConfig, SlidingWindow};
pub use schema::{Schema, SchemaType};
pub use tokens::TokensInfo;
pub use tuning::{Checkpoint, TunedModelInfo};

// Re-export the time types records are built from
pub use chrono::{DateTime, TimeDelta, Utc};

//! Convenient imports for genai-types.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use genai_types::prelude::*;
//!
//! let window = SlidingWindow { target_tokens: Some(1024) };
//! let bytes = encode(&window)?;
//! let back: SlidingWindow = decode(&bytes)?;
//! assert_eq!(back, window);
//! # Ok::<(), Error>(())
//! ```

// Entry points
pub use crate::{decode, encode};

// Error handling
pub use crate::error::{Error, Result};

// Records
pub use genai_core::{
    CachedContent, CachedContentUsageMetadata, Candidate, Checkpoint, Citation, CitationMetadata,
    CivilDate, ContextWindowCompressionConfig, CreateCachedContentConfig, File, FileSource,
    FileState, FileStatus, FinishReason, GenerateContentResponse, Schema, SchemaType,
    SlidingWindow, TokensInfo, TunedModelInfo, UpdateCachedContentConfig, UsageMetadata,
    VideoMetadata,
};

// Dispatch
pub use genai_wire::{Record, RecordKind, WireRecord};

// Time types
pub use genai_core::{DateTime, TimeDelta, Utc};

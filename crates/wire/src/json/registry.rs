//! Tagged dispatch over every record type
//!
//! Generic callers use [`encode_record`] / [`decode_record`] directly. Callers
//! that only learn the record type at runtime (a response router, a fixture
//! loader) name it with a [`RecordKind`] and get back a [`Record`].
//!
//! | Kind | Area |
//! |------|------|
//! | Schema | structured output |
//! | Citation, CitationMetadata | grounding |
//! | TokensInfo | token inspection |
//! | CreateCachedContentConfig, UpdateCachedContentConfig, CachedContent | caching |
//! | File | file upload |
//! | Checkpoint, TunedModelInfo | tuning |
//! | VideoMetadata, Candidate, GenerateContentResponse | generation |
//! | SlidingWindow, ContextWindowCompressionConfig | live sessions |

use super::error::{DecodeError, EncodeError};
use super::{decode_record, encode_record, WireRecord};
use genai_core::{
    CachedContent, Candidate, Checkpoint, Citation, CitationMetadata,
    ContextWindowCompressionConfig, CreateCachedContentConfig, File, GenerateContentResponse,
    Schema, SlidingWindow, TokensInfo, TunedModelInfo, UpdateCachedContentConfig, VideoMetadata,
};
use tracing::{debug, trace};

/// The record types the wire layer can encode and decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Validation schema descriptor
    Schema,
    /// Single citation
    Citation,
    /// Citations attached to a candidate
    CitationMetadata,
    /// Token inspection result
    TokensInfo,
    /// Cache creation options
    CreateCachedContentConfig,
    /// Cache update options
    UpdateCachedContentConfig,
    /// Cached content resource
    CachedContent,
    /// File descriptor
    File,
    /// Tuning checkpoint
    Checkpoint,
    /// Video segment metadata
    VideoMetadata,
    /// Sliding window compression mechanism
    SlidingWindow,
    /// Context window compression options
    ContextWindowCompressionConfig,
    /// Response candidate
    Candidate,
    /// Generate-content response
    GenerateContentResponse,
    /// Tuned model summary
    TunedModelInfo,
}

impl RecordKind {
    /// All record kinds (for iteration)
    pub const ALL: [RecordKind; 15] = [
        RecordKind::Schema,
        RecordKind::Citation,
        RecordKind::CitationMetadata,
        RecordKind::TokensInfo,
        RecordKind::CreateCachedContentConfig,
        RecordKind::UpdateCachedContentConfig,
        RecordKind::CachedContent,
        RecordKind::File,
        RecordKind::Checkpoint,
        RecordKind::VideoMetadata,
        RecordKind::SlidingWindow,
        RecordKind::ContextWindowCompressionConfig,
        RecordKind::Candidate,
        RecordKind::GenerateContentResponse,
        RecordKind::TunedModelInfo,
    ];

    /// Get all record kinds as a slice
    pub fn all() -> &'static [RecordKind] {
        &Self::ALL
    }

    /// Type name, as used in errors and logs
    pub const fn name(&self) -> &'static str {
        match self {
            RecordKind::Schema => Schema::NAME,
            RecordKind::Citation => Citation::NAME,
            RecordKind::CitationMetadata => CitationMetadata::NAME,
            RecordKind::TokensInfo => TokensInfo::NAME,
            RecordKind::CreateCachedContentConfig => CreateCachedContentConfig::NAME,
            RecordKind::UpdateCachedContentConfig => UpdateCachedContentConfig::NAME,
            RecordKind::CachedContent => CachedContent::NAME,
            RecordKind::File => File::NAME,
            RecordKind::Checkpoint => Checkpoint::NAME,
            RecordKind::VideoMetadata => VideoMetadata::NAME,
            RecordKind::SlidingWindow => SlidingWindow::NAME,
            RecordKind::ContextWindowCompressionConfig => ContextWindowCompressionConfig::NAME,
            RecordKind::Candidate => Candidate::NAME,
            RecordKind::GenerateContentResponse => GenerateContentResponse::NAME,
            RecordKind::TunedModelInfo => TunedModelInfo::NAME,
        }
    }

    /// Wire keys in output order
    pub const fn key_order(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Schema => Schema::KEY_ORDER,
            RecordKind::Citation => Citation::KEY_ORDER,
            RecordKind::CitationMetadata => CitationMetadata::KEY_ORDER,
            RecordKind::TokensInfo => TokensInfo::KEY_ORDER,
            RecordKind::CreateCachedContentConfig => CreateCachedContentConfig::KEY_ORDER,
            RecordKind::UpdateCachedContentConfig => UpdateCachedContentConfig::KEY_ORDER,
            RecordKind::CachedContent => CachedContent::KEY_ORDER,
            RecordKind::File => File::KEY_ORDER,
            RecordKind::Checkpoint => Checkpoint::KEY_ORDER,
            RecordKind::VideoMetadata => VideoMetadata::KEY_ORDER,
            RecordKind::SlidingWindow => SlidingWindow::KEY_ORDER,
            RecordKind::ContextWindowCompressionConfig => {
                ContextWindowCompressionConfig::KEY_ORDER
            }
            RecordKind::Candidate => Candidate::KEY_ORDER,
            RecordKind::GenerateContentResponse => GenerateContentResponse::KEY_ORDER,
            RecordKind::TunedModelInfo => TunedModelInfo::KEY_ORDER,
        }
    }

    /// Parse from type name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A decoded record of any kind
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Record {
    /// Validation schema descriptor
    Schema(Schema),
    /// Single citation
    Citation(Citation),
    /// Citations attached to a candidate
    CitationMetadata(CitationMetadata),
    /// Token inspection result
    TokensInfo(TokensInfo),
    /// Cache creation options
    CreateCachedContentConfig(CreateCachedContentConfig),
    /// Cache update options
    UpdateCachedContentConfig(UpdateCachedContentConfig),
    /// Cached content resource
    CachedContent(CachedContent),
    /// File descriptor
    File(File),
    /// Tuning checkpoint
    Checkpoint(Checkpoint),
    /// Video segment metadata
    VideoMetadata(VideoMetadata),
    /// Sliding window compression mechanism
    SlidingWindow(SlidingWindow),
    /// Context window compression options
    ContextWindowCompressionConfig(ContextWindowCompressionConfig),
    /// Response candidate
    Candidate(Candidate),
    /// Generate-content response
    GenerateContentResponse(GenerateContentResponse),
    /// Tuned model summary
    TunedModelInfo(TunedModelInfo),
}

impl Record {
    /// Kind of this record
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Schema(_) => RecordKind::Schema,
            Record::Citation(_) => RecordKind::Citation,
            Record::CitationMetadata(_) => RecordKind::CitationMetadata,
            Record::TokensInfo(_) => RecordKind::TokensInfo,
            Record::CreateCachedContentConfig(_) => RecordKind::CreateCachedContentConfig,
            Record::UpdateCachedContentConfig(_) => RecordKind::UpdateCachedContentConfig,
            Record::CachedContent(_) => RecordKind::CachedContent,
            Record::File(_) => RecordKind::File,
            Record::Checkpoint(_) => RecordKind::Checkpoint,
            Record::VideoMetadata(_) => RecordKind::VideoMetadata,
            Record::SlidingWindow(_) => RecordKind::SlidingWindow,
            Record::ContextWindowCompressionConfig(_) => {
                RecordKind::ContextWindowCompressionConfig
            }
            Record::Candidate(_) => RecordKind::Candidate,
            Record::GenerateContentResponse(_) => RecordKind::GenerateContentResponse,
            Record::TunedModelInfo(_) => RecordKind::TunedModelInfo,
        }
    }

    /// Decode a payload as a record of `kind`
    pub fn decode(kind: RecordKind, bytes: &[u8]) -> Result<Record, DecodeError> {
        trace!("decoding {} ({} bytes)", kind, bytes.len());
        let result = match kind {
            RecordKind::Schema => decode_record(bytes).map(Record::Schema),
            RecordKind::Citation => decode_record(bytes).map(Record::Citation),
            RecordKind::CitationMetadata => decode_record(bytes).map(Record::CitationMetadata),
            RecordKind::TokensInfo => decode_record(bytes).map(Record::TokensInfo),
            RecordKind::CreateCachedContentConfig => {
                decode_record(bytes).map(Record::CreateCachedContentConfig)
            }
            RecordKind::UpdateCachedContentConfig => {
                decode_record(bytes).map(Record::UpdateCachedContentConfig)
            }
            RecordKind::CachedContent => decode_record(bytes).map(Record::CachedContent),
            RecordKind::File => decode_record(bytes).map(Record::File),
            RecordKind::Checkpoint => decode_record(bytes).map(Record::Checkpoint),
            RecordKind::VideoMetadata => decode_record(bytes).map(Record::VideoMetadata),
            RecordKind::SlidingWindow => decode_record(bytes).map(Record::SlidingWindow),
            RecordKind::ContextWindowCompressionConfig => {
                decode_record(bytes).map(Record::ContextWindowCompressionConfig)
            }
            RecordKind::Candidate => decode_record(bytes).map(Record::Candidate),
            RecordKind::GenerateContentResponse => {
                decode_record(bytes).map(Record::GenerateContentResponse)
            }
            RecordKind::TunedModelInfo => decode_record(bytes).map(Record::TunedModelInfo),
        };
        if let Err(e) = &result {
            debug!("{} decode failed: {}", kind, e);
        }
        result
    }

    /// Encode this record to JSON bytes
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        trace!("encoding {}", self.kind());
        let result = match self {
            Record::Schema(r) => encode_record(r),
            Record::Citation(r) => encode_record(r),
            Record::CitationMetadata(r) => encode_record(r),
            Record::TokensInfo(r) => encode_record(r),
            Record::CreateCachedContentConfig(r) => encode_record(r),
            Record::UpdateCachedContentConfig(r) => encode_record(r),
            Record::CachedContent(r) => encode_record(r),
            Record::File(r) => encode_record(r),
            Record::Checkpoint(r) => encode_record(r),
            Record::VideoMetadata(r) => encode_record(r),
            Record::SlidingWindow(r) => encode_record(r),
            Record::ContextWindowCompressionConfig(r) => encode_record(r),
            Record::Candidate(r) => encode_record(r),
            Record::GenerateContentResponse(r) => encode_record(r),
            Record::TunedModelInfo(r) => encode_record(r),
        };
        if let Err(e) = &result {
            debug!("{} encode failed: {}", self.kind(), e);
        }
        result
    }
}

macro_rules! impl_from_record {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Record {
                fn from(record: $ty) -> Self {
                    Record::$ty(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Schema,
    Citation,
    CitationMetadata,
    TokensInfo,
    CreateCachedContentConfig,
    UpdateCachedContentConfig,
    CachedContent,
    File,
    Checkpoint,
    VideoMetadata,
    SlidingWindow,
    ContextWindowCompressionConfig,
    Candidate,
    GenerateContentResponse,
    TunedModelInfo,
);

// ============================================================================
// Tests
// ============================================================================

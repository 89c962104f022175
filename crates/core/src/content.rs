//! Generated content records

use crate::citation::CitationMetadata;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Which segment of a video to process
///
/// Both offsets are relative to the start of the video. A zero offset means
/// "unspecified".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoMetadata {
    /// Start of the segment
    pub start_offset: TimeDelta,
    /// End of the segment
    pub end_offset: TimeDelta,
    /// Frame rate to sample at
    pub fps: Option<f64>,
}

impl VideoMetadata {
    /// Metadata covering `start..end`
    pub fn segment(start: TimeDelta, end: TimeDelta) -> Self {
        VideoMetadata {
            start_offset: start,
            end_offset: end,
            fps: None,
        }
    }
}

open_enum! {
    /// Why the model stopped generating
    pub enum FinishReason {
        /// Not specified
        Unspecified => "FINISH_REASON_UNSPECIFIED",
        /// Natural stop point or a stop sequence
        Stop => "STOP",
        /// Hit the output token limit
        MaxTokens => "MAX_TOKENS",
        /// Flagged for safety
        Safety => "SAFETY",
        /// Flagged for recitation
        Recitation => "RECITATION",
        /// Unsupported language
        Language => "LANGUAGE",
        /// Stopped for a reason the service does not classify
        OtherReason => "OTHER",
        /// Contained a blocklisted term
        Blocklist => "BLOCKLIST",
        /// Contained prohibited content
        ProhibitedContent => "PROHIBITED_CONTENT",
        /// Contained sensitive personal information
        Spii => "SPII",
        /// The function call the model produced is invalid
        MalformedFunctionCall => "MALFORMED_FUNCTION_CALL",
        /// Generated image flagged for safety
        ImageSafety => "IMAGE_SAFETY",
    }
}

/// One response candidate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    /// Average log probability of the candidate's tokens
    pub avg_logprobs: Option<f64>,
    /// Source attributions
    pub citation_metadata: Option<CitationMetadata>,
    /// Detail for the finish reason
    pub finish_message: String,
    /// Why generation stopped
    pub finish_reason: Option<FinishReason>,
    /// Index of the candidate
    pub index: Option<i32>,
    /// Number of tokens in the candidate
    pub token_count: Option<i32>,
}

/// Token counts for a generate-content call
///
/// Mapped structurally: keys follow declaration order, unset counts are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens served from a cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_content_token_count: Option<i32>,
    /// Tokens across all candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_token_count: Option<i32>,
    /// Tokens in the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_token_count: Option<i32>,
    /// Tokens spent on thinking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts_token_count: Option<i32>,
    /// Tokens in tool-use prompts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_prompt_token_count: Option<i32>,
    /// Total tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<i32>,
}

/// Response from a generate-content call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateContentResponse {
    /// Response candidates
    pub candidates: Vec<Candidate>,
    /// Model version that produced the response
    pub model_version: String,
    /// Response id
    pub response_id: String,
    /// Token counts
    pub usage_metadata: Option<UsageMetadata>,
    /// Time the request was received by the service
    pub create_time: Option<DateTime<Utc>>,
}

impl GenerateContentResponse {
    /// Finish reason of the first candidate, if any
    pub fn finish_reason(&self) -> Option<&FinishReason> {
        self.candidates.first()?.finish_reason.as_ref()
    }
}

//! Live session configuration

/// Sliding-window context compression
///
/// When compression triggers, the oldest turns are dropped until the context
/// fits in `target_tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlidingWindow {
    /// Number of tokens to keep after compression
    pub target_tokens: Option<i64>,
}

/// Context window compression for long live sessions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextWindowCompressionConfig {
    /// Context length that triggers compression
    pub trigger_tokens: Option<i64>,
    /// Sliding-window mechanism
    pub sliding_window: Option<SlidingWindow>,
}

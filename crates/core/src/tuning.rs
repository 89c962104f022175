//! Fine-tuning records

use chrono::{DateTime, Utc};

/// A checkpoint written during a tuning job
///
/// `epoch` and `step` are counters, so zero is a real value and always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    /// Checkpoint id
    pub checkpoint_id: String,
    /// Epoch the checkpoint was taken in
    pub epoch: i64,
    /// Step the checkpoint was taken at
    pub step: i64,
}

/// Information about the model a tuning job produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TunedModelInfo {
    /// The base model that was tuned
    pub base_model: String,
    /// Creation time
    pub create_time: Option<DateTime<Utc>>,
    /// Last update time
    pub update_time: Option<DateTime<Utc>>,
}

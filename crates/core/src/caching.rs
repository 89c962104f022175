//! Context caching records
//!
//! A cached content resource holds a prefix of a conversation on the service
//! side so later requests can reuse it. Expiry is given either as an absolute
//! `expire_time` or as a `ttl` relative to the request.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Optional configuration for creating a cached content resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCachedContentConfig {
    /// Human-readable name of the cache
    pub display_name: String,
    /// Cloud KMS key used to encrypt the cache
    pub kms_key_name: String,
    /// Time to live; zero means unset
    pub ttl: TimeDelta,
    /// Absolute expiry time
    pub expire_time: Option<DateTime<Utc>>,
}

/// Optional configuration for updating a cached content resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCachedContentConfig {
    /// Time to live; zero means unset
    pub ttl: TimeDelta,
    /// Absolute expiry time
    pub expire_time: Option<DateTime<Utc>>,
}

/// Token and media counts for a cached content resource
///
/// Mapped structurally: keys follow declaration order, unset counts are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedContentUsageMetadata {
    /// Duration of audio in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_duration_seconds: Option<i32>,
    /// Number of images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_count: Option<i32>,
    /// Number of text characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_count: Option<i32>,
    /// Total number of tokens the cache consumes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_token_count: Option<i32>,
    /// Duration of video in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration_seconds: Option<i32>,
}

/// A cached content resource as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CachedContent {
    /// Server-assigned resource name
    pub name: String,
    /// Human-readable name
    pub display_name: String,
    /// Model the cache was created for
    pub model: String,
    /// Usage counts
    pub usage_metadata: Option<CachedContentUsageMetadata>,
    /// Creation time
    pub create_time: Option<DateTime<Utc>>,
    /// Last update time
    pub update_time: Option<DateTime<Utc>>,
    /// Expiry time
    pub expire_time: Option<DateTime<Utc>>,
}

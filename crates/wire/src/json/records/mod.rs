//! [`WireRecord`](super::WireRecord) implementations for every domain record
//!
//! One module per area of the service surface, mirroring `genai-core`.

mod caching;
mod citation;
mod content;
mod file;
mod live;
mod schema;
mod tokens;
mod tuning;

//! Cache module for API responses
//!
//! Holds decoded responses in memory keyed by operation name, refetching once
//! an entry is older than the configured TTL.

mod manager;

pub use manager::{CacheEntry, ResponseCache};

//! Cache module for storing API responses to disk
//!
//! This module provides a cache manager that persists API responses to the
//! filesystem alongside the time they were fetched. Readers decide whether a
//! stored entry is still usable by checking it against a time-to-live; stale
//! or unreadable entries are treated the same as missing ones.

mod manager;

pub use manager::{is_fresh, CacheManager, CachedEntry};

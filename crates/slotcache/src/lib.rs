//! # slotcache
//!
//! Fixed-capacity LRU cache built on a slot arena.
//!
//! ## Architecture
//! - **Index**: AHash-backed map from key to slot for O(1) lookups
//! - **Recency list**: doubly-linked list threaded through slot indices,
//!   so promotion and eviction relink in O(1) without traversal
//! - **Overflow**: a full cache recycles its least-recently-used slot in
//!   place for the incoming entry
//!
//! ## Recency model
//! Fresh inserts join the cold end of the list; only a lookup promotes an
//! entry to the hot end. On overflow the recycled entry keeps the cold
//! position, so it is the next eviction candidate rather than the
//! most-recently-used entry. Both points differ from canonical LRU
//! insertion behavior and callers should not assume otherwise. `put` on an
//! existing key is a no-op: it neither overwrites the value nor touches
//! recency order.
//!
//! The engine is single-threaded; embedders that need shared access must
//! serialize calls externally.

#![warn(missing_docs)]

mod cache;
mod error;
mod lru;
mod stats;

pub use cache::Cache;
pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
pub use stats::CacheStats;

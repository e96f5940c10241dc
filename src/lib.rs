//! chained-hashmap: a string-keyed hash map built on separate chaining
//! with fixed-step growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the classic bucket-array-and-chains table visible and
//!   verifiable; every entry is owned outright by exactly one bucket.
//! - Layout:
//!   - ChainedHashMap<S>: the table; a Vec of buckets, each bucket an
//!     owned Vec of (String key, u64 value) entries, plus the hash
//!     strategy bound at construction.
//!   - fnv: the default strategy, a hand-rolled 64-bit FNV-1a.
//!   - stats: point-in-time occupancy snapshots for diagnostics.
//!
//! Constraints
//! - Single-threaded: exclusive mutation through `&mut self`; no locks,
//!   no atomics, no `unsafe`.
//! - Keys are `String` copies owned by their bucket, compared
//!   byte-for-byte; values are `u64`.
//! - Capacity starts at 8 buckets and only grows, by exactly 8 buckets
//!   per rehash, whenever an insert pushes the load factor above 0.75.
//! - Lookup misses surface as `None` and are reported on the `log`
//!   channel at debug level; a stored value of zero is never ambiguous
//!   with absence.
//!
//! Hashing and growth invariants
//! - The strategy is any `BuildHasher`; indexing is `hash_one(key)`
//!   reduced modulo the bucket count, recomputed for every entry when
//!   capacity changes.
//! - Rehash is copy-and-swap: entries drain into a freshly allocated
//!   array which the table adopts whole, so the placement invariant
//!   holds at every observation point.
//!
//! Notes and non-goals
//! - No iteration-order guarantees; `iter` walks buckets in slot order.
//! - No persistence, no concurrent access, no generic key/value types.
//! - No shrinking: removals and `clear` keep the bucket array.
//!
//! Example
//!
//! ```
//! use chained_hashmap::ChainedHashMap;
//!
//! let mut table = ChainedHashMap::new();
//! table.insert("main", 0x4000);
//! table.insert("loop", 0x4010);
//! assert_eq!(table.get("loop"), Some(0x4010));
//! assert_eq!(table.remove("loop"), Some(0x4010));
//! assert_eq!(table.get("loop"), None);
//! table.destroy();
//! ```

mod chained_hash_map;
mod fnv;
mod stats;

// Public surface
pub use chained_hash_map::{BUCKET_GROWTH, ChainedHashMap, INITIAL_BUCKETS, Iter, MAX_LOAD_FACTOR};
pub use fnv::{FnvBuildHasher, FnvHasher};
pub use stats::TableStats;

//! ChainedHashMap: bucket array, collision chains, and fixed-step growth.

use crate::fnv::FnvBuildHasher;
use crate::stats::TableStats;
use core::hash::BuildHasher;
use log::debug;
use std::fmt;
use std::mem;
use std::slice;

/// Buckets allocated at construction.
pub const INITIAL_BUCKETS: usize = 8;
/// Buckets added by each rehash.
pub const BUCKET_GROWTH: usize = 8;
/// Load factor above which an insert triggers a rehash.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

#[derive(Clone, Debug)]
struct Entry {
    key: String,
    value: u64,
}

/// One collision chain. Entries are owned exclusively by their bucket;
/// order within a chain is not observable through the public API.
type Bucket = Vec<Entry>;

/// A string-keyed hash map built on separate chaining.
///
/// The table owns a bucket array that starts at [`INITIAL_BUCKETS`] slots
/// and grows by [`BUCKET_GROWTH`] whenever an insert pushes the load factor
/// above [`MAX_LOAD_FACTOR`]; it never shrinks. Keys are copied into the
/// table on first insert and compared byte-for-byte. The hash strategy `S`
/// is bound at construction and drives bucket placement for the table's
/// whole lifetime.
#[derive(Clone)]
pub struct ChainedHashMap<S = FnvBuildHasher> {
    hasher: S,
    buckets: Vec<Bucket>,
    len: usize,
}

impl ChainedHashMap {
    /// Creates an empty table with the default FNV-1a strategy.
    pub fn new() -> Self {
        Self::with_hasher(FnvBuildHasher)
    }
}

impl Default for ChainedHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ChainedHashMap<S>
where
    S: BuildHasher,
{
    /// Creates an empty table placing keys with the given strategy.
    ///
    /// The strategy must be deterministic while the table lives: the same
    /// key must hash to the same value on every call, or entries become
    /// unreachable.
    pub fn with_hasher(hasher: S) -> Self {
        let mut buckets = Vec::with_capacity(INITIAL_BUCKETS);
        buckets.resize_with(INITIAL_BUCKETS, Bucket::new);
        Self {
            hasher,
            buckets,
            len: 0,
        }
    }

    // Capacity is a multiple of 8, not a power of two in general, so the
    // hash is reduced by modulo rather than masking.
    fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    // Lookup shared by get/contains_key/eq; reports nothing on a miss.
    fn find_value(&self, key: &str) -> Option<u64> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    /// Maps `key` to `value`, returning the previously stored value if the
    /// key was already present.
    ///
    /// A fresh key copies `key` into the table and may grow the bucket
    /// array before returning (see [`ChainedHashMap::rehash`]); an
    /// overwrite touches only the existing entry.
    pub fn insert(&mut self, key: &str, value: u64) -> Option<u64> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.key == key) {
            // Overwrite in place; length and load factor are unchanged.
            return Some(mem::replace(&mut entry.value, value));
        }
        bucket.push(Entry {
            key: key.to_owned(),
            value,
        });
        self.len += 1;
        if self.len as f64 > MAX_LOAD_FACTOR * self.buckets.len() as f64 {
            self.rehash();
        }
        None
    }

    /// Returns the value stored under `key`, or `None` if the key is
    /// absent.
    ///
    /// A miss additionally emits a debug-level diagnostic on the `log`
    /// channel; use [`ChainedHashMap::contains_key`] for membership
    /// checks where absence is an expected answer.
    pub fn get(&self, key: &str) -> Option<u64> {
        let found = self.find_value(key);
        if found.is_none() {
            debug!("lookup miss: key {key:?} is not in the table");
        }
        found
    }

    /// Returns whether `key` is present, without emitting a miss
    /// diagnostic.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_value(key).is_some()
    }

    /// Removes `key` and returns its value, or `None` (plus a debug-level
    /// miss diagnostic) if the key is absent. Capacity is never released.
    pub fn remove(&mut self, key: &str) -> Option<u64> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|entry| entry.key == key) {
            Some(at) => {
                // Chain order is not observable, so take the O(1) swap.
                let entry = bucket.swap_remove(at);
                self.len -= 1;
                Some(entry.value)
            }
            None => {
                debug!("remove miss: key {key:?} is not in the table");
                None
            }
        }
    }

    /// Grows the bucket array by [`BUCKET_GROWTH`] and re-places every
    /// entry under the new capacity.
    ///
    /// Runs automatically when an insert pushes the load factor above
    /// [`MAX_LOAD_FACTOR`]; calling it directly forces an extra
    /// redistribution step. The replacement array is populated in full
    /// and then adopted, so the placement invariant holds at every
    /// observation point. Length is unchanged.
    pub fn rehash(&mut self) {
        let grown = self.buckets.len() + BUCKET_GROWTH;
        let mut fresh: Vec<Bucket> = Vec::with_capacity(grown);
        fresh.resize_with(grown, Bucket::new);
        for bucket in &mut self.buckets {
            for entry in bucket.drain(..) {
                let index = (self.hasher.hash_one(&entry.key) % grown as u64) as usize;
                fresh[index].push(entry);
            }
        }
        self.buckets = fresh;
        debug!("rehash: grew to {grown} buckets holding {} entries", self.len);
    }
}

impl<S> ChainedHashMap<S> {
    /// Live entries across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity: the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// `len / bucket_count`; stays at or below [`MAX_LOAD_FACTOR`] after
    /// every public operation.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Destroys every entry and resets length to zero. Capacity is kept.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Tears the table down, consuming it.
    ///
    /// Dropping the value is equivalent; `destroy` exists so teardown
    /// reads explicitly at call sites, and the move makes any later use
    /// of the binding a compile error:
    ///
    /// ```compile_fail
    /// use chained_hashmap::ChainedHashMap;
    ///
    /// let mut table = ChainedHashMap::new();
    /// table.insert("stale", 1);
    /// table.destroy();
    /// table.get("stale"); // borrow of moved value
    /// ```
    pub fn destroy(self) {}

    /// Visits every `(key, value)` pair in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            entries: [].iter(),
        }
    }

    /// Takes an occupancy snapshot: entry and bucket counts, load factor,
    /// occupied buckets, and the longest collision chain.
    pub fn stats(&self) -> TableStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in &self.buckets {
            if !bucket.is_empty() {
                occupied_buckets += 1;
                longest_chain = longest_chain.max(bucket.len());
            }
        }
        TableStats {
            entries: self.len,
            buckets: self.buckets.len(),
            load_factor: self.load_factor(),
            occupied_buckets,
            longest_chain,
        }
    }

    /// Writes the `Display` listing (one `key = value` line per pair) to
    /// stdout. Read-only.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// Iterator over a table's `(key, value)` pairs in unspecified order.
pub struct Iter<'a> {
    buckets: slice::Iter<'a, Bucket>,
    entries: slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.next() {
                return Some((entry.key.as_str(), entry.value));
            }
            self.entries = self.buckets.next()?.iter();
        }
    }
}

impl<'a, S> IntoIterator for &'a ChainedHashMap<S> {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S> fmt::Display for ChainedHashMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self {
            writeln!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}

impl<S> fmt::Debug for ChainedHashMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Content equality: same keys mapped to same values. Capacity and chain
/// layout are not compared.
impl<S> PartialEq for ChainedHashMap<S>
where
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.find_value(key) == Some(value))
    }
}

impl<S> Eq for ChainedHashMap<S> where S: BuildHasher {}

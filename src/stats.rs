//! Occupancy snapshots for diagnostics and tests.

use std::fmt;

/// Point-in-time occupancy report produced by `ChainedHashMap::stats`.
///
/// Fields describe the table at the moment of the call; any mutation
/// invalidates the snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableStats {
    /// Live entries across all buckets.
    pub entries: usize,
    /// Bucket count (the table capacity).
    pub buckets: usize,
    /// `entries / buckets`.
    pub load_factor: f64,
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Length of the longest collision chain.
    pub longest_chain: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {} buckets (load factor {:.2}, {} occupied, longest chain {})",
            self.entries, self.buckets, self.load_factor, self.occupied_buckets, self.longest_chain
        )
    }
}

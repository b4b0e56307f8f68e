//! Hash-value buckets.

use crate::dataset::Entry;
use indexmap::map::{IndexMap, Iter};

/// One bucket: every entry that hashed to the same value, in dataset order.
pub type Bucket<'d> = Vec<&'d Entry>;

/// Mapping from hash value to the entries that produced it.
///
/// Buckets iterate in the order their hash value was first seen, so two runs
/// over the same dataset walk the table identically. Entries are borrowed
/// from the dataset for the lifetime `'d`.
#[derive(Debug, Clone, Default)]
pub struct BucketTable<'d> {
    buckets: IndexMap<u64, Bucket<'d>>,
    entries: usize,
}

impl<'d> BucketTable<'d> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table sized for `capacity` distinct hash values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: IndexMap::with_capacity(capacity),
            entries: 0,
        }
    }

    /// Append `entry` to the bucket for `hash`, creating the bucket on first
    /// use. Returns `true` if the bucket was new.
    pub fn insert(&mut self, hash: u64, entry: &'d Entry) -> bool {
        self.entries += 1;
        match self.buckets.get_mut(&hash) {
            Some(bucket) => {
                bucket.push(entry);
                false
            }
            None => {
                tracing::trace!(hash, "new bucket");
                self.buckets.insert(hash, vec![entry]);
                true
            }
        }
    }

    /// Number of buckets, i.e. distinct hash values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if the table holds no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of entries across all buckets.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.entries
    }

    /// Entries that hashed to `hash`.
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<&[&'d Entry]> {
        self.buckets.get(&hash).map(Vec::as_slice)
    }

    /// Iterate `(hash, bucket)` pairs in first-seen order.
    pub fn iter(&self) -> Iter<'_, u64, Bucket<'d>> {
        self.buckets.iter()
    }

    /// Iterate buckets holding more than one entry, in first-seen order.
    pub fn colliding(&self) -> impl Iterator<Item = (u64, &[&'d Entry])> + '_ {
        self.buckets
            .iter()
            .filter(|(_, bucket)| bucket.len() > 1)
            .map(|(&hash, bucket)| (hash, bucket.as_slice()))
    }
}

impl<'t, 'd> IntoIterator for &'t BucketTable<'d> {
    type Item = (&'t u64, &'t Bucket<'d>);
    type IntoIter = Iter<'t, u64, Bucket<'d>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

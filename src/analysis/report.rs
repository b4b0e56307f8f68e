//! Collision statistics.

use super::table::BucketTable;
use crate::dataset::Entry;
use crate::hash::{HashKernel, HashWidth};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Duration;

/// First colliding bucket of a run, with owned copies of its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleBucket {
    /// Shared hash value.
    pub hash: u64,
    /// Entries in dataset order.
    pub entries: Vec<Entry>,
}

/// Outcome of one analysis.
///
/// Counts satisfy `excess_colliding_keys == total_keys - distinct_hashes`
/// and `colliding_buckets <= distinct_hashes`. The sample, when present, is
/// the first bucket of size greater than one in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionReport {
    /// Kernel name.
    pub kernel: &'static str,
    /// Kernel output width.
    pub width: HashWidth,
    /// Number of keys hashed.
    pub total_keys: usize,
    /// Number of distinct hash values.
    pub distinct_hashes: usize,
    /// Buckets holding more than one key.
    pub colliding_buckets: usize,
    /// Keys beyond the first in every colliding bucket.
    pub excess_colliding_keys: usize,
    /// Size of the largest bucket (0 for an empty dataset).
    pub max_bucket_size: usize,
    /// Bucket size → number of buckets of that size.
    pub size_histogram: BTreeMap<usize, usize>,
    /// Wall-clock time of the hashing pass.
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
    /// First colliding bucket, if any.
    pub sample: Option<SampleBucket>,
}

fn serialize_nanos<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
}

impl CollisionReport {
    /// All-zero report for a kernel that saw no keys.
    #[must_use]
    pub fn empty(kernel: &dyn HashKernel) -> Self {
        Self {
            kernel: kernel.name(),
            width: kernel.width(),
            total_keys: 0,
            distinct_hashes: 0,
            colliding_buckets: 0,
            excess_colliding_keys: 0,
            max_bucket_size: 0,
            size_histogram: BTreeMap::new(),
            elapsed: Duration::ZERO,
            sample: None,
        }
    }

    /// Summarize a filled bucket table.
    #[must_use]
    pub fn from_table(kernel: &dyn HashKernel, table: &BucketTable<'_>, elapsed: Duration) -> Self {
        let mut report = Self::empty(kernel);
        report.total_keys = table.total_entries();
        report.distinct_hashes = table.len();
        report.elapsed = elapsed;

        for (&hash, bucket) in table {
            let size = bucket.len();
            *report.size_histogram.entry(size).or_insert(0) += 1;
            report.max_bucket_size = report.max_bucket_size.max(size);

            if size > 1 {
                report.colliding_buckets += 1;
                report.excess_colliding_keys += size - 1;
                if report.sample.is_none() {
                    report.sample = Some(SampleBucket {
                        hash,
                        entries: bucket.iter().map(|&e| e.clone()).collect(),
                    });
                }
            }
        }

        report
    }

    /// Check if any two keys shared a hash value.
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        self.colliding_buckets > 0
    }

    /// Fraction of keys that landed in an already-occupied bucket.
    #[must_use]
    pub fn collision_rate(&self) -> f64 {
        if self.total_keys == 0 {
            0.0
        } else {
            self.excess_colliding_keys as f64 / self.total_keys as f64
        }
    }

    /// Hashing throughput, or `None` if the pass was too short to measure.
    #[must_use]
    pub fn keys_per_second(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        (secs > 0.0).then(|| self.total_keys as f64 / secs)
    }

    /// Mean hashing cost per key, or `None` for an empty dataset.
    #[must_use]
    pub fn nanos_per_key(&self) -> Option<f64> {
        (self.total_keys > 0).then(|| self.elapsed.as_nanos() as f64 / self.total_keys as f64)
    }
}

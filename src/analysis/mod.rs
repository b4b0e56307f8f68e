//! Collision analysis.
//!
//! An analysis hashes every key of a [`Dataset`] with one kernel, groups the
//! entries into a [`BucketTable`] by hash value, and summarizes the table in
//! a [`CollisionReport`].
//!
//! # Algorithm
//!
//! 1. Walk the dataset once, in order. Hash each key and append the entry to
//!    its bucket, creating the bucket on first use. Only this pass is timed.
//! 2. Walk the table once, in first-seen order, counting buckets by size and
//!    picking the first colliding bucket as the sample.
//!
//! Both passes are deterministic, so running the same kernel over the same
//! dataset yields the same counts and the same sample.
//!
//! # Failure
//!
//! An empty dataset is not an error: it produces an all-zero report. A kernel
//! error aborts the run immediately; the error carries the dataset index of
//! the offending key and no partial report is returned.
//!
//! # Examples
//!
//! ```
//! use hashscope::analysis::analyze;
//! use hashscope::dataset::Dataset;
//! use hashscope::hash::SumModulo;
//!
//! let dataset = Dataset::from_pairs([("apple", "1"), ("banana", "2"), ("orange", "3")]);
//! let report = analyze(&dataset, &SumModulo::new(1)?)?;
//!
//! assert_eq!(report.distinct_hashes, 1);
//! assert_eq!(report.colliding_buckets, 1);
//! assert_eq!(report.excess_colliding_keys, 2);
//! # Ok::<(), hashscope::HashScopeError>(())
//! ```

pub mod compare;
pub mod render;
pub mod report;
pub mod table;

pub use compare::compare;
pub use report::{CollisionReport, SampleBucket};
pub use table::{Bucket, BucketTable};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::hash::HashKernel;
use std::time::Instant;

/// Runs collision analyses with a fixed kernel.
///
/// The analyzer holds no per-run state; one instance can analyze any number
/// of datasets, from any number of threads.
#[derive(Debug, Clone)]
pub struct CollisionAnalyzer<K> {
    kernel: K,
}

impl<K: HashKernel> CollisionAnalyzer<K> {
    /// Create an analyzer for `kernel`.
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Kernel used by this analyzer.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Analyze `dataset` and return the report.
    ///
    /// # Errors
    ///
    /// Returns the first kernel error, with the failing key's dataset index
    /// attached.
    pub fn analyze(&self, dataset: &Dataset) -> Result<CollisionReport> {
        self.analyze_with_table(dataset).map(|(report, _)| report)
    }

    /// Analyze `dataset` and also return the bucket table for inspection.
    ///
    /// # Errors
    ///
    /// Returns the first kernel error, with the failing key's dataset index
    /// attached.
    pub fn analyze_with_table<'d>(
        &self,
        dataset: &'d Dataset,
    ) -> Result<(CollisionReport, BucketTable<'d>)> {
        let kernel = &self.kernel;
        tracing::debug!(kernel = kernel.name(), keys = dataset.len(), "analysis started");

        if dataset.is_empty() {
            return Ok((CollisionReport::empty(kernel), BucketTable::new()));
        }

        let mut table = BucketTable::with_capacity(dataset.len());
        let start = Instant::now();
        for (index, entry) in dataset.iter().enumerate() {
            let hash = kernel.hash(entry.key()).map_err(|e| {
                tracing::debug!(kernel = kernel.name(), index, error = %e, "analysis aborted");
                e.at_index(index)
            })?;
            table.insert(hash, entry);
        }
        let elapsed = start.elapsed();

        let report = CollisionReport::from_table(kernel, &table, elapsed);
        tracing::debug!(
            kernel = report.kernel,
            distinct = report.distinct_hashes,
            colliding_buckets = report.colliding_buckets,
            excess = report.excess_colliding_keys,
            elapsed_us = elapsed.as_micros() as u64,
            "analysis finished"
        );
        Ok((report, table))
    }
}

/// Analyze `dataset` with `kernel`.
///
/// # Errors
///
/// See [`CollisionAnalyzer::analyze`].
pub fn analyze(dataset: &Dataset, kernel: &dyn HashKernel) -> Result<CollisionReport> {
    CollisionAnalyzer::new(kernel).analyze(dataset)
}

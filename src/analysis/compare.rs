//! Side-by-side kernel comparison.
//!
//! Runs one independent analysis per kernel over the same dataset. With the
//! `rayon` feature the analyses run on the rayon thread pool; results always
//! come back in kernel order.

use super::{CollisionAnalyzer, CollisionReport};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::hash::HashKernel;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Analyze `dataset` with every kernel in `kernels`.
///
/// Element `i` of the result belongs to `kernels[i]`. A failing kernel does
/// not stop the others.
#[cfg(not(feature = "rayon"))]
pub fn compare<K: HashKernel>(dataset: &Dataset, kernels: &[K]) -> Vec<Result<CollisionReport>> {
    kernels.iter().map(|kernel| run(dataset, kernel)).collect()
}

/// Analyze `dataset` with every kernel in `kernels`, in parallel.
///
/// Element `i` of the result belongs to `kernels[i]`. A failing kernel does
/// not stop the others.
#[cfg(feature = "rayon")]
pub fn compare<K: HashKernel>(dataset: &Dataset, kernels: &[K]) -> Vec<Result<CollisionReport>> {
    kernels.par_iter().map(|kernel| run(dataset, kernel)).collect()
}

fn run<K: HashKernel>(dataset: &Dataset, kernel: &K) -> Result<CollisionReport> {
    CollisionAnalyzer::new(kernel).analyze(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Entry;
    use crate::hash::{KernelKind, KernelParams};

    #[test]
    fn test_result_order_matches_kernels() {
        let kernels = KernelKind::build_all(&KernelParams::default()).unwrap();
        let ds = Dataset::from_keys(["alpha", "beta", "gamma"]);
        let results = compare(&ds, &kernels);

        assert_eq!(results.len(), kernels.len());
        for (kernel, result) in kernels.iter().zip(&results) {
            let report = result.as_ref().unwrap();
            assert_eq!(report.kernel, kernel.name());
            assert_eq!(report.total_keys, 3);
        }
    }

    #[test]
    fn test_failure_is_per_kernel() {
        let kernels = KernelKind::build_all(&KernelParams::default()).unwrap();
        let ds = Dataset::from(vec![Entry::key_only(vec![0xff, 0xfe])]);
        let results = compare(&ds, &kernels);

        for (kernel, result) in kernels.iter().zip(&results) {
            match kernel.name() {
                "sum-modulo" | "djb2" | "sha256" => {
                    assert!(result.as_ref().unwrap_err().is_encoding());
                }
                _ => assert!(result.is_ok()),
            }
        }
    }

    #[test]
    fn test_no_kernels() {
        let kernels: Vec<Box<dyn HashKernel>> = Vec::new();
        assert!(compare(&Dataset::new(), &kernels).is_empty());
    }
}

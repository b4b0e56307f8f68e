//! hashscope: hash-function collision analysis.
//!
//! hashscope runs a set of string hash functions over keyed datasets and
//! reports how well each one spreads the keys: how many distinct values it
//! produced, how many keys collided, how long hashing took, and a sample of
//! keys that ended up sharing a value.
//!
//! # Quick Start
//!
//! ```
//! use hashscope::prelude::*;
//!
//! let dataset = Dataset::from_keys(["a", "b", "a"]);
//! let kernel = KernelKind::Murmur3.build(&KernelParams::new().with_seed(42))?;
//!
//! let report = analyze(&dataset, kernel.as_ref())?;
//! assert_eq!(report.distinct_hashes, 2);
//! assert_eq!(report.excess_colliding_keys, 1);
//! println!("{report}");
//! # Ok::<(), hashscope::HashScopeError>(())
//! ```
//!
//! # Kernels
//!
//! | Kernel       | Width   | Input          |
//! |--------------|---------|----------------|
//! | `rolling64`  | 64-bit  | bytes          |
//! | `sum-modulo` | log2 M  | UTF-8 text     |
//! | `djb2`       | 1-64    | UTF-8 text     |
//! | `murmur3`    | 32-bit  | bytes          |
//! | `sha256`     | 64-bit  | UTF-8 text     |
//! | `seeded`     | 64-bit  | bytes          |
//!
//! Every kernel is deterministic across process runs. Two runs of the same
//! kernel over the same dataset produce identical counts and the same
//! sample bucket.
//!
//! # Datasets
//!
//! ```no_run
//! use hashscope::dataset::{generate, load, DatasetFormat, GeneratorConfig};
//!
//! // Generate and persist a reproducible dataset
//! let dataset = generate(&GeneratorConfig::new(5_000).with_seed(1))?;
//! dataset.write_json("datasets/dataset_5k.json")?;
//!
//! // Load it back; JSON objects keep file order
//! let loaded = load("datasets/dataset_5k.json", DatasetFormat::Auto)?;
//! assert_eq!(loaded.len(), 5_000);
//! # Ok::<(), hashscope::HashScopeError>(())
//! ```
//!
//! # Comparing Kernels
//!
//! ```
//! use hashscope::prelude::*;
//!
//! let dataset = Dataset::from_keys(["listen", "silent", "enlist"]);
//! let kernels = KernelKind::build_all(&KernelParams::default())?;
//!
//! for result in compare(&dataset, &kernels) {
//!     let report = result?;
//!     println!("{:>10}: {} distinct", report.kernel, report.distinct_hashes);
//! }
//! # Ok::<(), hashscope::HashScopeError>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default) - the `hashscope` binary (`clap`, `tracing-subscriber`)
//! - `rayon` - run [`compare`](analysis::compare) analyses in parallel

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::len_zero)]
#![allow(clippy::cast_precision_loss)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Error types and result aliases
pub mod error;

/// Hash kernels and kernel selection
pub mod hash;

/// Datasets: in-memory model, loading and generation
pub mod dataset;

/// Collision analysis and reporting
pub mod analysis;

pub use error::{HashScopeError, Result};

pub use analysis::{analyze, compare, BucketTable, CollisionAnalyzer, CollisionReport};
pub use dataset::{Dataset, Entry};
pub use hash::{HashKernel, HashWidth, KernelKind, KernelParams};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use hashscope::prelude::*;
///
/// let report = analyze(&Dataset::from_keys(["x"]), &Rolling64)?;
/// assert_eq!(report.total_keys, 1);
/// # Ok::<(), HashScopeError>(())
/// ```
pub mod prelude {
    pub use crate::analysis::{
        analyze, compare, BucketTable, CollisionAnalyzer, CollisionReport, SampleBucket,
    };
    pub use crate::dataset::{generate, load, Dataset, DatasetFormat, Entry, GeneratorConfig};
    pub use crate::error::{HashScopeError, Result};
    pub use crate::hash::prelude::*;
}

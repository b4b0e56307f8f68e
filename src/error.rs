//! Error types for hashscope operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`] with a
//! [`HashScopeError`]. There are exactly three failure families:
//!
//! - **Encoding**: a key could not be decoded the way a kernel requires
//! - **Invalid parameter**: a kernel was configured outside its domain
//! - **Dataset unavailable**: the dataset source is missing or corrupt
//!
//! None of them are retried. Hashing is a pure computation, so a failure
//! on one attempt fails on every attempt.
//!
//! # Error Propagation
//!
//! ```
//! use hashscope::{Result, HashScopeError};
//! use hashscope::hash::{KernelKind, KernelParams};
//!
//! fn modulo_kernel(m: i64) -> Result<&'static str> {
//!     let kernel = KernelKind::SumModulo.build(&KernelParams::new().with_modulus(m))?;
//!     Ok(kernel.name())
//! }
//!
//! assert!(modulo_kernel(1000).is_ok());
//! assert!(matches!(
//!     modulo_kernel(0),
//!     Err(HashScopeError::InvalidParameter { .. })
//! ));
//! ```

#![allow(clippy::module_name_repetitions)]

/// Result type alias for hashscope operations.
pub type Result<T> = std::result::Result<T, HashScopeError>;

/// Errors that can occur while configuring kernels, loading datasets or
/// running an analysis.
///
/// `Clone` + `PartialEq` keep errors comparable in tests; no variant wraps a
/// foreign error type, the underlying cause is captured as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashScopeError {
    /// A key could not be converted into the form a kernel hashes.
    ///
    /// Byte-oriented kernels never raise this; kernels that operate on
    /// Unicode code points raise it for keys that are not valid UTF-8.
    #[error(
        "kernel '{}' cannot encode key {:?}{}: {}",
        .kernel, .key, index_suffix(.index), .reason
    )]
    Encoding {
        /// Name of the kernel that rejected the key.
        kernel: &'static str,
        /// Lossy UTF-8 rendering of the offending key.
        key: String,
        /// Position of the key in the dataset, when known.
        index: Option<usize>,
        /// What went wrong.
        reason: String,
    },

    /// A kernel or input parameter violates its constraints.
    #[error("invalid parameter for '{kernel}': {message}")]
    InvalidParameter {
        /// Name of the kernel or component being configured.
        kernel: String,
        /// Human-readable description of the violated constraint.
        message: String,
    },

    /// The dataset collaborator could not supply data.
    #[error("dataset '{source_name}' unavailable: {reason}")]
    DatasetUnavailable {
        /// Path or description of the dataset source.
        source_name: String,
        /// Why it could not be read.
        reason: String,
    },
}

fn index_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}

impl HashScopeError {
    /// Create an `Encoding` error for a key that is not valid UTF-8.
    #[must_use]
    pub fn encoding(kernel: &'static str, key: &[u8], err: std::str::Utf8Error) -> Self {
        Self::Encoding {
            kernel,
            key: String::from_utf8_lossy(key).into_owned(),
            index: None,
            reason: err.to_string(),
        }
    }

    /// Create an `InvalidParameter` error.
    #[must_use]
    pub fn invalid_parameter(kernel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            kernel: kernel.into(),
            message: message.into(),
        }
    }

    /// Create a `DatasetUnavailable` error.
    #[must_use]
    pub fn dataset_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DatasetUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Attach the dataset position of the failing key to an `Encoding` error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at_index(self, position: usize) -> Self {
        match self {
            Self::Encoding {
                kernel,
                key,
                reason,
                ..
            } => Self::Encoding {
                kernel,
                key,
                index: Some(position),
                reason,
            },
            other => other,
        }
    }

    /// Check if this is an encoding error.
    #[must_use]
    pub const fn is_encoding(&self) -> bool {
        matches!(self, Self::Encoding { .. })
    }

    /// Check if this is a parameter validation error.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Check if this is a dataset availability error.
    #[must_use]
    pub const fn is_dataset_unavailable(&self) -> bool {
        matches!(self, Self::DatasetUnavailable { .. })
    }
}

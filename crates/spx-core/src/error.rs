//! Error types for spx-core operations.
//!
//! The numeric paths of the spectral pipeline (resampling, tristimulus
//! integration, RGB conversion) are total and never fail. Errors only come
//! from building configuration or sample tables out of caller data.
//!
//! # Usage
//!
//! ```rust
//! use spx_core::{Error, WavelengthRange};
//!
//! let err = WavelengthRange::new(700.0, 400.0, 60).unwrap_err();
//! assert!(matches!(err, Error::InvertedRange { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::range::WavelengthRange`] - Range validation
//! - `spx-spectrum` - Sample table construction

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring the spectral pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A wavelength range with no buckets.
    #[error("wavelength range needs at least one bucket, got {buckets}")]
    EmptyRange {
        /// Requested bucket count
        buckets: usize,
    },

    /// A wavelength range whose end lies before its start.
    #[error("wavelength range end {end} nm is before start {start} nm")]
    InvertedRange {
        /// Range start in nanometers
        start: f32,
        /// Range end in nanometers
        end: f32,
    },

    /// A wavelength range with a NaN or infinite bound.
    #[error("wavelength range bounds must be finite, got [{start}, {end})")]
    NonFiniteBound {
        /// Range start in nanometers
        start: f32,
        /// Range end in nanometers
        end: f32,
    },

    /// Parallel wavelength/value slices of different lengths.
    #[error("sample table has {wavelengths} wavelengths but {values} values")]
    LengthMismatch {
        /// Number of wavelengths supplied
        wavelengths: usize,
        /// Number of values supplied
        values: usize,
    },

    /// A sample whose wavelength is NaN, which cannot be ordered.
    #[error("sample {index} has a NaN wavelength")]
    NonFiniteSample {
        /// Index of the offending sample in the input
        index: usize,
    },
}

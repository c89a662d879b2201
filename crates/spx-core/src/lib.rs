//! # spx-core
//!
//! Core types for the spectral color pipeline.
//!
//! - [`Error`], [`Result`] - Configuration and table construction errors
//! - [`WavelengthRange`] - The `[start, end)` nanometer interval and its bucket grid
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. `spx-spectrum` uses it for
//! every bucket boundary and for table construction errors:
//!
//! ```text
//! spx-core (this crate)
//!    ^
//!    |
//!    +-- spx-spectrum (coefficient vectors, resampling, discretized spectra)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize [`WavelengthRange`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod range;

pub use error::{Error, Result};
pub use range::WavelengthRange;

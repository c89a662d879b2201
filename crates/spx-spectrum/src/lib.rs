//! # spx-spectrum
//!
//! Discretized spectra for spectral rendering.
//!
//! - **Coefficient vectors** - `N` unitless samples with element-wise arithmetic
//! - **Resampling** - rebin any tabulated spectrum onto an arbitrary interval
//! - **Sampled spectra** - `N` buckets over a compile-time `[START, END)` range
//! - **Tristimulus** - integration against the CIE 1931 observer, RGB ingest
//!
//! # Architecture
//!
//! ```text
//!                  spx-spectrum
//!                       |
//!            +----------+----------+
//!            |                     |
//!        spx-color           spx-core
//!            |            (range, errors)
//!      spx-transfer
//!            |
//!        spx-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use spx_spectrum::{SampleTable, Spectrum};
//!
//! let table = SampleTable::from_pairs([(400.0, 0.1), (550.0, 0.9), (700.0, 0.2)])?;
//! let spectrum = Spectrum::from_table(&table);
//!
//! let xyz = spectrum.to_xyz();
//! let rgb = spectrum.to_rgb();
//! assert!(xyz.y() > 0.0 && rgb.g() > rgb.b());
//! # Ok::<(), spx_core::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Everything here is a pure function of its inputs except the
//! [`NamedCurves`] sets, which are built once per configuration and then
//! only read. Call [`init`] before starting worker threads to keep the
//! build off the render path.

#![warn(missing_docs)]

pub mod coefficient;
pub mod curves;
pub mod data;
pub mod resample;
pub mod sample;
pub mod sampled;

pub use coefficient::CoefficientVector;
pub use curves::{BasisSet, NamedCurves};
pub use resample::average_spectrum_samples;
pub use sample::{Sample, SampleTable};
pub use sampled::{SampledSpectrum, Spectrum, SpectrumType};

use tracing::warn;

/// Builds the named curves of the default [`Spectrum`] configuration.
///
/// Later calls are free. Lazy construction on first use is equally
/// correct; this only moves the cost to startup.
pub fn init() {
    let curves = NamedCurves::<400, 700, 60>::get();
    if curves.has_nan() {
        warn!("named spectral curves contain non-finite values");
    }
}

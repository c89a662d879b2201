//! Tabulated spectral measurements.
//!
//! A [`Sample`] is one `(wavelength, value)` pair. A [`SampleTable`] is an
//! owned sequence of samples sorted by ascending wavelength, interpreted as
//! a piecewise-linear function held flat outside its first and last
//! wavelengths.

use crate::resample;
use spx_core::{Error, Result};

/// One `(wavelength, value)` measurement. Wavelength is in nanometers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Wavelength in nanometers.
    pub wavelength: f32,
    /// Measured value at that wavelength.
    pub value: f32,
}

impl Sample {
    /// Creates a sample.
    #[inline]
    pub const fn new(wavelength: f32, value: f32) -> Self {
        Self { wavelength, value }
    }
}

impl From<(f32, f32)> for Sample {
    #[inline]
    fn from((wavelength, value): (f32, f32)) -> Self {
        Self::new(wavelength, value)
    }
}

/// Sorts samples by wavelength in place.
///
/// The sort is stable, so samples sharing a wavelength keep their input
/// order. NaN wavelengths sort last.
pub fn sort_samples(samples: &mut [Sample]) {
    samples.sort_by(|a, b| a.wavelength.total_cmp(&b.wavelength));
}

/// An owned sample table, always sorted by ascending wavelength.
///
/// # Example
///
/// ```rust
/// use spx_spectrum::SampleTable;
///
/// let ramp = SampleTable::from_pairs([(700.0, 1.0), (400.0, 0.0)])?;
/// assert_eq!(ramp.average(400.0, 700.0), 0.5);
/// assert_eq!(ramp.value_at(550.0), 0.5);
/// # Ok::<(), spx_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleTable {
    samples: Vec<Sample>,
}

impl SampleTable {
    /// Builds a table from samples in any order.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteSample`] if a wavelength is NaN.
    pub fn new(samples: impl IntoIterator<Item = Sample>) -> Result<Self> {
        let mut samples: Vec<Sample> = samples.into_iter().collect();
        if let Some(index) = samples.iter().position(|s| s.wavelength.is_nan()) {
            return Err(Error::NonFiniteSample { index });
        }
        sort_samples(&mut samples);
        Ok(Self { samples })
    }

    /// Builds a table from `(wavelength, value)` tuples in any order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f32, f32)>) -> Result<Self> {
        Self::new(pairs.into_iter().map(Sample::from))
    }

    /// Builds a table from parallel wavelength and value slices.
    ///
    /// # Errors
    ///
    /// - [`Error::LengthMismatch`] if the slices differ in length
    /// - [`Error::NonFiniteSample`] if a wavelength is NaN
    pub fn from_slices(wavelengths: &[f32], values: &[f32]) -> Result<Self> {
        if wavelengths.len() != values.len() {
            return Err(Error::LengthMismatch {
                wavelengths: wavelengths.len(),
                values: values.len(),
            });
        }
        Self::from_pairs(wavelengths.iter().copied().zip(values.iter().copied()))
    }

    /// The sorted samples.
    #[inline]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the table holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First and last wavelength, or `None` for an empty table.
    pub fn domain(&self) -> Option<(f32, f32)> {
        Some((self.samples.first()?.wavelength, self.samples.last()?.wavelength))
    }

    /// Average value over `[lo, hi]`. See [`resample::average_spectrum_samples`].
    #[inline]
    pub fn average(&self, lo: f32, hi: f32) -> f32 {
        resample::average_spectrum_samples(&self.samples, lo, hi)
    }

    /// Interpolated value at `lambda`. See [`resample::value_at`].
    #[inline]
    pub fn value_at(&self, lambda: f32) -> f32 {
        resample::value_at(&self.samples, lambda)
    }
}

impl AsRef<[Sample]> for SampleTable {
    fn as_ref(&self) -> &[Sample] {
        &self.samples
    }
}

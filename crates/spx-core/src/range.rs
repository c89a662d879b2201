//! Wavelength range configuration.
//!
//! A [`WavelengthRange`] is the interval `[start, end)` in nanometers,
//! divided into `buckets` equal sub-intervals. It is the runtime mirror of
//! the const parameters of `spx_spectrum::SampledSpectrum` and owns the
//! bucket boundary formula used everywhere in the pipeline:
//!
//! ```text
//! bucket(i) = [start + (end - start) * i / N, start + (end - start) * (i + 1) / N)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use spx_core::WavelengthRange;
//!
//! let range = WavelengthRange::new(400.0, 700.0, 60)?;
//! assert_eq!(range.bucket(0), (400.0, 405.0));
//! assert_eq!(range.bucket_width(), 5.0);
//! # Ok::<(), spx_core::Error>(())
//! ```

use crate::error::{Error, Result};

/// The wavelength interval `[start, end)` split into equal buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WavelengthRange {
    start: f32,
    end: f32,
    buckets: usize,
}

impl WavelengthRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyRange`] if `buckets == 0`
    /// - [`Error::NonFiniteBound`] if either bound is NaN or infinite
    /// - [`Error::InvertedRange`] if `end < start`
    pub fn new(start: f32, end: f32, buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::EmptyRange { buckets });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::NonFiniteBound { start, end });
        }
        if end < start {
            return Err(Error::InvertedRange { start, end });
        }
        Ok(Self { start, end, buckets })
    }

    /// Creates a range from integer nanometer bounds without validation.
    ///
    /// Callers must already guarantee `buckets > 0` and `end >= start`;
    /// `SampledSpectrum` checks both at compile time before calling this.
    #[inline]
    pub const fn from_const(start: usize, end: usize, buckets: usize) -> Self {
        Self {
            start: start as f32,
            end: end as f32,
            buckets,
        }
    }

    /// Range start in nanometers.
    #[inline]
    pub const fn start(&self) -> f32 {
        self.start
    }

    /// Range end in nanometers (exclusive).
    #[inline]
    pub const fn end(&self) -> f32 {
        self.end
    }

    /// Number of buckets.
    #[inline]
    pub const fn buckets(&self) -> usize {
        self.buckets
    }

    /// Total span `end - start` in nanometers.
    #[inline]
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Width of a single bucket, `(end - start) / N`.
    ///
    /// This is also the Riemann-sum step used when integrating a
    /// discretized spectrum.
    #[inline]
    pub fn bucket_width(&self) -> f32 {
        self.span() / self.buckets as f32
    }

    /// Returns the `[lo, hi)` bounds of bucket `i`.
    ///
    /// The start offset is always added: bucket 0 begins at `start`,
    /// not at zero.
    #[inline]
    pub fn bucket(&self, i: usize) -> (f32, f32) {
        let n = self.buckets as f32;
        let lo = self.start + self.span() * i as f32 / n;
        let hi = self.start + self.span() * (i + 1) as f32 / n;
        (lo, hi)
    }

    /// Iterates over the bounds of every bucket in order.
    pub fn iter_buckets(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        (0..self.buckets).map(move |i| self.bucket(i))
    }
}

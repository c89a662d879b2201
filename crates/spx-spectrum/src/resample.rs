//! Piecewise-linear spectral resampling.
//!
//! [`average_spectrum_samples`] rebins a sorted sample table of any spacing
//! onto an arbitrary interval by integrating the linear interpolant and
//! dividing by the interval width. Outside the table's domain the boundary
//! value is held flat, so partially covered intervals get a rectangular
//! contribution for the uncovered part.
//!
//! ```text
//!  value
//!    |        /\
//!    |   ____/  \____        <- flat beyond the last sample
//!    |  /
//!    |_/                     <- flat before the first sample
//!    +---[lo=====hi]---------> wavelength
//! ```

use crate::Sample;
use spx_math::{inverse_lerp, lerp};

/// Value of segment `i` (between `samples[i]` and `samples[i + 1]`) at `lambda`.
///
/// A zero-width segment (duplicate wavelengths) evaluates to its left value.
#[inline]
fn interpolate_segment(samples: &[Sample], i: usize, lambda: f32) -> f32 {
    let (a, b) = (samples[i], samples[i + 1]);
    let t = inverse_lerp(a.wavelength, b.wavelength, lambda);
    lerp(t, a.value, b.value)
}

/// Evaluates the piecewise-linear function at `lambda`.
///
/// `samples` must be sorted by wavelength. Returns 0 for an empty table and
/// the boundary value outside the table's domain.
///
/// # Example
///
/// ```rust
/// use spx_spectrum::{Sample, resample::value_at};
///
/// let table = [Sample::new(400.0, 0.0), Sample::new(500.0, 1.0)];
/// assert_eq!(value_at(&table, 450.0), 0.5);
/// assert_eq!(value_at(&table, 300.0), 0.0);
/// assert_eq!(value_at(&table, 900.0), 1.0);
/// ```
pub fn value_at(samples: &[Sample], lambda: f32) -> f32 {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return 0.0;
    };
    if lambda <= first.wavelength {
        return first.value;
    }
    if lambda >= last.wavelength {
        return last.value;
    }
    // first.wavelength < lambda < last.wavelength, so 1 <= idx <= n - 1.
    let idx = samples.partition_point(|s| s.wavelength <= lambda);
    interpolate_segment(samples, idx - 1, lambda)
}

/// Average value of the piecewise-linear function over `[lambda_start, lambda_end]`.
///
/// `samples` must be sorted by wavelength (see [`crate::sample::sort_samples`]).
///
/// - empty table: 0
/// - interval entirely below the table: first value
/// - interval entirely above the table: last value
/// - single sample: its value
/// - zero-width interval: the interpolated value at `lambda_start`
/// - interval inside one gap between samples: mean of the two interpolated
///   endpoint values
/// - otherwise: trapezoid area of every clipped segment plus flat
///   contributions outside the domain, divided by the interval width
///
/// # Example
///
/// ```rust
/// use spx_spectrum::{Sample, average_spectrum_samples};
///
/// let ramp = [Sample::new(400.0, 0.0), Sample::new(700.0, 1.0)];
/// assert_eq!(average_spectrum_samples(&ramp, 400.0, 700.0), 0.5);
/// ```
pub fn average_spectrum_samples(samples: &[Sample], lambda_start: f32, lambda_end: f32) -> f32 {
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return 0.0;
    };
    if lambda_end < first.wavelength {
        return first.value;
    }
    if lambda_start > last.wavelength {
        return last.value;
    }
    if samples.len() == 1 {
        return first.value;
    }
    if lambda_end <= lambda_start {
        return value_at(samples, lambda_start);
    }

    let mut area = 0.0;
    if lambda_start < first.wavelength {
        area += first.value * (first.wavelength - lambda_start);
    }
    if lambda_end > last.wavelength {
        area += last.value * (lambda_end - last.wavelength);
    }

    // Segment i is the first one whose right end reaches lambda_start. The
    // last sample is >= lambda_start, so i + 1 never runs off the table.
    let mut i = samples[1..].partition_point(|s| s.wavelength < lambda_start);

    if samples[i].wavelength <= lambda_start && lambda_end < samples[i + 1].wavelength {
        let v0 = interpolate_segment(samples, i, lambda_start);
        let v1 = interpolate_segment(samples, i, lambda_end);
        return 0.5 * (v0 + v1);
    }

    while i + 1 < samples.len() && samples[i].wavelength <= lambda_end {
        let seg_start = lambda_start.max(samples[i].wavelength);
        let seg_end = lambda_end.min(samples[i + 1].wavelength);
        if seg_end > seg_start {
            let v0 = interpolate_segment(samples, i, seg_start);
            let v1 = interpolate_segment(samples, i, seg_end);
            area += 0.5 * (v0 + v1) * (seg_end - seg_start);
        }
        i += 1;
    }

    area / (lambda_end - lambda_start)
}

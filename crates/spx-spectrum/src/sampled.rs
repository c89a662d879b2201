//! Discretized spectra over a compile-time wavelength range.
//!
//! `SampledSpectrum<START, END, N>` holds `N` buckets covering
//! `[START, END)` nanometers. Bucket `i` spans
//! `[START + (END-START)*i/N, START + (END-START)*(i+1)/N)`; the boundary
//! arithmetic is owned by [`WavelengthRange`].
//!
//! # Usage
//!
//! ```rust
//! use spx_spectrum::{Sample, Spectrum, SpectrumType};
//! use spx_color::Rgb;
//!
//! // Rebin a measured table onto the default 400-700 nm, 60-bucket grid.
//! let measured = [Sample::new(380.0, 0.2), Sample::new(720.0, 0.8)];
//! let s = Spectrum::from_samples(&measured);
//! assert!(s[0] < s[59]);
//!
//! // Integrate against the CIE observer.
//! let xyz = s.to_xyz();
//! assert!((0.0..=1.0).contains(&xyz.y()));
//!
//! // Ingest an sRGB texel.
//! let red = Spectrum::from_rgb(Rgb::new(1.0, 0.0, 0.0), SpectrumType::Reflectance);
//! assert!(red.to_rgb().r() > red.to_rgb().b());
//! ```

use crate::resample::average_spectrum_samples;
use crate::sample::sort_samples;
use crate::{CoefficientVector, NamedCurves, Sample, SampleTable};
use spx_color::convert::xyz_to_linear_rgb;
use spx_color::{Rgb, Xyz, xyz_to_rgb};
use spx_core::{Result, WavelengthRange};
use spx_math::Vec3;
use spx_transfer::srgb;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use tracing::trace;

/// Scale applied to RGB-derived reflectances.
pub const REFLECTANCE_SCALE: f32 = 0.94;

/// Scale applied to RGB-derived illuminants.
pub const ILLUMINANT_SCALE: f32 = 0.86445;

/// What an RGB triple converted to a spectrum represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpectrumType {
    /// Surface reflectance, bounded by 1.
    #[default]
    Reflectance,
    /// Emitted light.
    Illuminant,
}

impl SpectrumType {
    /// Overall scale of the basis decomposition for this type.
    #[inline]
    pub const fn scale(self) -> f32 {
        match self {
            Self::Reflectance => REFLECTANCE_SCALE,
            Self::Illuminant => ILLUMINANT_SCALE,
        }
    }
}

/// `N` spectral buckets over `[START, END)` nanometers.
///
/// Instantiating a type with `N == 0` or `END < START` fails to compile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledSpectrum<const START: usize, const END: usize, const N: usize> {
    coeffs: CoefficientVector<N>,
}

/// Default configuration: 60 buckets of 5 nm over the visible range.
pub type Spectrum = SampledSpectrum<400, 700, 60>;

impl<const START: usize, const END: usize, const N: usize> SampledSpectrum<START, END, N> {
    const VALID: () = assert!(
        N > 0 && END >= START,
        "spectral range needs at least one bucket and END >= START"
    );

    /// Lower bound of the range in nanometers.
    pub const LAMBDA_START: usize = START;
    /// Upper bound of the range in nanometers.
    pub const LAMBDA_END: usize = END;
    /// Number of buckets.
    pub const SAMPLES: usize = N;

    /// Runtime view of this configuration.
    #[inline]
    pub const fn range() -> WavelengthRange {
        let () = Self::VALID;
        WavelengthRange::from_const(START, END, N)
    }

    /// Width of one bucket in nanometers.
    #[inline]
    pub fn bucket_width() -> f32 {
        Self::range().bucket_width()
    }

    /// Every bucket set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        let () = Self::VALID;
        Self {
            coeffs: CoefficientVector::splat(v),
        }
    }

    /// Wraps existing bucket values.
    #[inline]
    pub const fn from_coefficients(coeffs: CoefficientVector<N>) -> Self {
        let () = Self::VALID;
        Self { coeffs }
    }

    /// Rebins a sample table given in any order.
    ///
    /// Each bucket is the average of the piecewise-linear table over that
    /// bucket's wavelength interval. An empty table yields black.
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut sorted = samples.to_vec();
        sort_samples(&mut sorted);
        trace!(
            samples = sorted.len(),
            start = START,
            end = END,
            buckets = N,
            "rebinning sample table"
        );
        Self::from_sorted(&sorted)
    }

    /// Rebins an already sorted [`SampleTable`].
    pub fn from_table(table: &SampleTable) -> Self {
        Self::from_sorted(table.as_slice())
    }

    /// Rebins parallel wavelength/value slices.
    ///
    /// # Errors
    ///
    /// See [`SampleTable::from_slices`].
    pub fn from_slices(wavelengths: &[f32], values: &[f32]) -> Result<Self> {
        Ok(Self::from_table(&SampleTable::from_slices(wavelengths, values)?))
    }

    pub(crate) fn from_sorted(samples: &[Sample]) -> Self {
        let range = Self::range();
        let mut out = Self::splat(0.0);
        for (i, (lo, hi)) in range.iter_buckets().enumerate() {
            out.coeffs[i] = average_spectrum_samples(samples, lo, hi);
        }
        out
    }

    /// Converts a display-encoded sRGB triple into a spectrum.
    ///
    /// The channels are decoded to linear light and decomposed with
    /// [`from_linear_rgb`](Self::from_linear_rgb).
    pub fn from_rgb(rgb: Rgb, kind: SpectrumType) -> Self {
        Self::from_linear_rgb(srgb::eotf_vec(rgb.to_vec()), kind)
    }

    /// Smits decomposition of a linear RGB triple.
    ///
    /// `kind` picks the reflectance or illuminant basis set. The smallest
    /// channel selects the white basis, the middle one the complementary
    /// secondary, the remainder the dominant primary. The result is scaled
    /// by [`SpectrumType::scale`] and clamped to be non-negative.
    pub fn from_linear_rgb(rgb: Vec3, kind: SpectrumType) -> Self {
        let basis = NamedCurves::<START, END, N>::get().basis(kind);
        let (r, g, b) = (rgb.x, rgb.y, rgb.z);
        let mut out = Self::splat(0.0);

        if r <= g && r <= b {
            out += basis.white * r;
            if g <= b {
                out += basis.cyan * (g - r);
                out += basis.blue * (b - g);
            } else {
                out += basis.cyan * (b - r);
                out += basis.green * (g - b);
            }
        } else if g <= r && g <= b {
            out += basis.white * g;
            if r <= b {
                out += basis.magenta * (r - g);
                out += basis.blue * (b - r);
            } else {
                out += basis.magenta * (b - g);
                out += basis.red * (r - b);
            }
        } else {
            out += basis.white * b;
            if r <= g {
                out += basis.yellow * (r - b);
                out += basis.green * (g - r);
            } else {
                out += basis.yellow * (g - b);
                out += basis.red * (r - g);
            }
        }

        out *= kind.scale();
        out.clamp(0.0, f32::INFINITY)
    }

    /// Converts CIE XYZ into a spectrum via linear sRGB.
    pub fn from_xyz(xyz: Xyz, kind: SpectrumType) -> Self {
        Self::from_linear_rgb(xyz_to_linear_rgb(xyz.to_vec()), kind)
    }

    /// Bucket values.
    #[inline]
    pub const fn coefficients(&self) -> &CoefficientVector<N> {
        &self.coeffs
    }

    /// Mutable bucket values, for chained in-place arithmetic.
    #[inline]
    pub fn coefficients_mut(&mut self) -> &mut CoefficientVector<N> {
        &mut self.coeffs
    }

    /// Center wavelength of bucket `i`.
    #[inline]
    pub fn wavelength(i: usize) -> f32 {
        let (lo, hi) = Self::range().bucket(i);
        0.5 * (lo + hi)
    }

    /// Normalized CIE XYZ, each axis clamped to `[0, 1]` independently.
    pub fn to_xyz(&self) -> Xyz {
        let curves = NamedCurves::<START, END, N>::get();
        let mut sum = Vec3::ZERO;
        for i in 0..N {
            let v = self.coeffs[i];
            sum.x += v * curves.x[i];
            sum.y += v * curves.y[i];
            sum.z += v * curves.z[i];
        }
        sum *= Self::bucket_width();

        Xyz::new(
            normalize(sum.x, curves.sigma_x),
            normalize(sum.y, curves.sigma_y),
            normalize(sum.z, curves.sigma_z),
        )
        .clamp01()
    }

    /// Luminance. Unclamped.
    pub fn to_y(&self) -> f32 {
        let curves = NamedCurves::<START, END, N>::get();
        let sum: f32 = self
            .coeffs
            .iter()
            .zip(curves.y.coefficients().iter())
            .map(|(v, y)| v * y)
            .sum();
        normalize(sum * Self::bucket_width(), curves.sigma_y)
    }

    /// Display-encoded sRGB.
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_vec(xyz_to_rgb(self.to_xyz().to_vec()))
    }

    /// True if any bucket is NaN or infinite.
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.coeffs.has_nan()
    }

    /// True if every bucket is zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.coeffs.is_black()
    }

    /// Clamps each bucket to `[low, high]`. Inverted bounds yield `high`.
    #[inline]
    pub fn clamp(self, low: f32, high: f32) -> Self {
        Self::from_coefficients(self.coeffs.clamp(low, high))
    }

    /// Element-wise square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_coefficients(self.coeffs.sqrt())
    }

    /// `(1 - t) * self + t * other`.
    #[inline]
    pub fn lerp(self, t: f32, other: Self) -> Self {
        Self::from_coefficients(self.coeffs.lerp(t, other.coeffs))
    }

    /// Largest bucket value.
    #[inline]
    pub fn max_value(&self) -> f32 {
        self.coeffs.max_value()
    }
}

#[inline]
fn normalize(v: f32, sigma: f32) -> f32 {
    if sigma > 0.0 { v / sigma } else { 0.0 }
}

impl<const START: usize, const END: usize, const N: usize> Default
    for SampledSpectrum<START, END, N>
{
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const START: usize, const END: usize, const N: usize> Index<usize>
    for SampledSpectrum<START, END, N>
{
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.coeffs[i]
    }
}

impl<const START: usize, const END: usize, const N: usize> IndexMut<usize>
    for SampledSpectrum<START, END, N>
{
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.coeffs[i]
    }
}

impl<const START: usize, const END: usize, const N: usize> Neg
    for SampledSpectrum<START, END, N>
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_coefficients(-self.coeffs)
    }
}

macro_rules! impl_spectrum_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<const START: usize, const END: usize, const N: usize> $op
            for SampledSpectrum<START, END, N>
        {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: Self) -> Self {
                Self::from_coefficients(self.coeffs.$op_fn(rhs.coeffs))
            }
        }

        impl<const START: usize, const END: usize, const N: usize> $op<f32>
            for SampledSpectrum<START, END, N>
        {
            type Output = Self;

            #[inline]
            fn $op_fn(self, rhs: f32) -> Self {
                Self::from_coefficients(self.coeffs.$op_fn(rhs))
            }
        }

        impl<const START: usize, const END: usize, const N: usize> $assign
            for SampledSpectrum<START, END, N>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                self.coeffs.$assign_fn(rhs.coeffs);
            }
        }

        impl<const START: usize, const END: usize, const N: usize> $assign<f32>
            for SampledSpectrum<START, END, N>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: f32) {
                self.coeffs.$assign_fn(rhs);
            }
        }
    };
}

impl_spectrum_op!(Add, add, AddAssign, add_assign);
impl_spectrum_op!(Sub, sub, SubAssign, sub_assign);
impl_spectrum_op!(Mul, mul, MulAssign, mul_assign);
impl_spectrum_op!(Div, div, DivAssign, div_assign);

impl<const START: usize, const END: usize, const N: usize> Mul<SampledSpectrum<START, END, N>>
    for f32
{
    type Output = SampledSpectrum<START, END, N>;

    #[inline]
    fn mul(self, rhs: SampledSpectrum<START, END, N>) -> Self::Output {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    type Coarse = SampledSpectrum<400, 700, 3>;

    #[test]
    fn test_constants() {
        assert_eq!(Spectrum::LAMBDA_START, 400);
        assert_eq!(Spectrum::LAMBDA_END, 700);
        assert_eq!(Spectrum::SAMPLES, 60);
        assert_eq!(Spectrum::bucket_width(), 5.0);
        assert_eq!(Spectrum::wavelength(0), 402.5);
    }

    #[test]
    fn test_constant_table_fills_every_bucket() {
        let table = [Sample::new(300.0, 0.42), Sample::new(800.0, 0.42)];
        let s = Spectrum::from_samples(&table);
        for &v in s.coefficients().iter() {
            assert_abs_diff_eq!(v, 0.42, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_buckets_include_start_offset() {
        // Step at 500 nm: buckets [400,500) must be 0, [500,600) 1, [600,700) 2.
        let table = [
            Sample::new(600.0, 2.0),
            Sample::new(400.0, 0.0),
            Sample::new(499.999, 0.0),
            Sample::new(500.0, 1.0),
            Sample::new(599.999, 1.0),
            Sample::new(700.0, 2.0),
        ];
        let s = Coarse::from_samples(&table);
        assert_abs_diff_eq!(s[0], 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(s[1], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(s[2], 2.0, epsilon = 1e-4);
    }

    #[test]
    fn test_splat_bypasses_resampler() {
        let s = Spectrum::splat(0.3);
        assert_eq!(s, Spectrum::from_coefficients(CoefficientVector::splat(0.3)));
        assert!(!s.has_nan());
    }

    #[test]
    fn test_empty_table_is_black() {
        assert!(Spectrum::from_samples(&[]).is_black());
    }

    #[test]
    fn test_from_slices_errors() {
        assert!(Spectrum::from_slices(&[400.0], &[]).is_err());
        let s = Spectrum::from_slices(&[400.0, 700.0], &[1.0, 1.0]).unwrap();
        assert_abs_diff_eq!(s.max_value(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(s[0], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_flat_unit_spectrum_normalizes_to_one() {
        let s = Spectrum::splat(1.0);
        assert_relative_eq!(s.to_y(), 1.0, epsilon = 1e-5);
        let xyz = s.to_xyz();
        assert_relative_eq!(xyz.x(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(xyz.y(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(xyz.z(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_to_xyz_clamps_every_axis() {
        let bright = Spectrum::splat(5.0).to_xyz();
        assert_eq!(bright, Xyz::new(1.0, 1.0, 1.0));
        let negative = Spectrum::splat(-1.0).to_xyz();
        assert_eq!(negative, Xyz::new(0.0, 0.0, 0.0));
        // Luminance is not clamped.
        assert_relative_eq!(Spectrum::splat(5.0).to_y(), 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_from_rgb_white_reflectance() {
        let s = Spectrum::from_rgb(Rgb::new(1.0, 1.0, 1.0), SpectrumType::Reflectance);
        for &v in s.coefficients().iter() {
            assert_abs_diff_eq!(v, 0.94, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_from_rgb_white_illuminant_scales_illuminant_basis() {
        let white = &NamedCurves::<400, 700, 60>::get().illuminant.white;
        let l = Spectrum::from_rgb(Rgb::new(1.0, 1.0, 1.0), SpectrumType::Illuminant);
        for i in 0..Spectrum::SAMPLES {
            assert_relative_eq!(l[i], ILLUMINANT_SCALE * white[i], max_relative = 1e-5);
        }
    }

    #[test]
    fn test_illuminant_and_reflectance_decompose_differently() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let refl = Spectrum::from_rgb(red, SpectrumType::Reflectance);
        let illum = Spectrum::from_rgb(red, SpectrumType::Illuminant);
        assert_ne!(refl, illum);
        // The D65 weighting pulls the long-wave tail below the scaled reflectance.
        let ratio = ILLUMINANT_SCALE / REFLECTANCE_SCALE;
        assert!(illum[59] < refl[59] * ratio, "{} vs {}", illum[59], refl[59]);
        assert!(illum.to_rgb().r() > illum.to_rgb().b());
    }

    #[test]
    fn test_from_rgb_black() {
        let s = Spectrum::from_rgb(Rgb::new(0.0, 0.0, 0.0), SpectrumType::Reflectance);
        assert!(s.is_black());
    }

    #[test]
    fn test_from_rgb_non_negative() {
        for rgb in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.2, 0.9, 0.4]] {
            let s = Spectrum::from_rgb(Rgb::from(rgb), SpectrumType::Reflectance);
            assert!(s.coefficients().iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn test_primaries_keep_dominant_channel() {
        let red = Spectrum::from_rgb(Rgb::new(1.0, 0.0, 0.0), SpectrumType::Reflectance).to_rgb();
        assert!(red.r() > red.g() && red.r() > red.b());
        let green = Spectrum::from_rgb(Rgb::new(0.0, 1.0, 0.0), SpectrumType::Reflectance).to_rgb();
        assert!(green.g() > green.r() && green.g() > green.b());
        let blue = Spectrum::from_rgb(Rgb::new(0.0, 0.0, 1.0), SpectrumType::Reflectance).to_rgb();
        assert!(blue.b() > blue.r() && blue.b() > blue.g());
    }

    #[test]
    fn test_from_xyz_grey() {
        let grey = Xyz::from_vec(spx_color::convert::linear_rgb_to_xyz(Vec3::splat(0.5)));
        let s = Spectrum::from_xyz(grey, SpectrumType::Reflectance);
        assert_abs_diff_eq!(s[20], 0.47, epsilon = 2e-3);
    }

    #[test]
    fn test_arithmetic() {
        let a = Spectrum::splat(2.0);
        let b = Spectrum::splat(0.5);
        assert_eq!(a * b, Spectrum::splat(1.0));
        assert_eq!(a + b, Spectrum::splat(2.5));
        assert_eq!(a - b, Spectrum::splat(1.5));
        assert_eq!(a / b, Spectrum::splat(4.0));
        assert_eq!(2.0 * b, Spectrum::splat(1.0));
        let mut c = a;
        c *= 3.0;
        c -= a;
        assert_eq!(c, Spectrum::splat(4.0));
        assert_eq!(a.lerp(0.5, Spectrum::default()), Spectrum::splat(1.0));
    }

    #[test]
    fn test_chained_in_place_through_coefficients() {
        let mut s = Spectrum::splat(1.0);
        let two = CoefficientVector::splat(2.0);
        s.coefficients_mut().add_in_place(&two).mul_in_place(&two);
        assert_eq!(s, Spectrum::splat(6.0));
    }

    #[test]
    fn test_nan_injection() {
        let mut s = Spectrum::splat(1.0);
        s[7] = f32::NAN;
        assert!(s.has_nan());
    }
}

//! Fixed-size coefficient vector.
//!
//! [`CoefficientVector`] is `N` unitless samples with element-wise
//! arithmetic. It knows nothing about wavelengths; the binding to a
//! nanometer range lives in [`crate::SampledSpectrum`].
//!
//! Every binary operator exists in three forms: by value (`a + b`),
//! compound (`a += b`), and a chainable in-place method returning the
//! receiver (`a.add_in_place(&b).mul_in_place(&c)`). The operators are
//! thin wrappers over the in-place methods.
//!
//! # Usage
//!
//! ```rust
//! use spx_spectrum::CoefficientVector;
//!
//! let mut a = CoefficientVector::<4>::splat(2.0);
//! let b = CoefficientVector::from([1.0, 2.0, 3.0, 4.0]);
//! a.add_in_place(&b).mul_in_place(&b);
//! assert_eq!(a, CoefficientVector::from([3.0, 8.0, 15.0, 24.0]));
//! ```

use spx_math::lerp;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// `N` real coefficients with element-wise arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientVector<const N: usize> {
    c: [f32; N],
}

impl<const N: usize> CoefficientVector<N> {
    /// Number of coefficients.
    pub const LEN: usize = N;

    /// Broadcasts `v` to every slot.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { c: [v; N] }
    }

    /// Wraps an array of coefficients.
    #[inline]
    pub const fn from_array(c: [f32; N]) -> Self {
        Self { c }
    }

    /// Number of coefficients.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for the zero-length vector type.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The coefficients as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.c
    }

    /// The coefficients as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; N] {
        self.c
    }

    /// Iterates over the coefficients.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.c.iter()
    }

    /// Applies `f` to each coefficient.
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self { c: self.c.map(f) }
    }

    fn zip_in_place(&mut self, rhs: &Self, f: impl Fn(f32, f32) -> f32) -> &mut Self {
        for (l, &r) in self.c.iter_mut().zip(&rhs.c) {
            *l = f(*l, r);
        }
        self
    }

    /// `self[i] += rhs[i]`, returning the receiver.
    #[inline]
    pub fn add_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_in_place(rhs, |a, b| a + b)
    }

    /// `self[i] -= rhs[i]`, returning the receiver.
    #[inline]
    pub fn sub_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_in_place(rhs, |a, b| a - b)
    }

    /// `self[i] *= rhs[i]`, returning the receiver.
    #[inline]
    pub fn mul_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_in_place(rhs, |a, b| a * b)
    }

    /// `self[i] /= rhs[i]`, returning the receiver.
    ///
    /// Division by a zero slot yields an infinite or NaN slot; see
    /// [`has_nan`](Self::has_nan).
    #[inline]
    pub fn div_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_in_place(rhs, |a, b| a / b)
    }

    /// Multiplies every slot by `s`, returning the receiver.
    #[inline]
    pub fn scale_in_place(&mut self, s: f32) -> &mut Self {
        for v in &mut self.c {
            *v *= s;
        }
        self
    }

    /// Clamps each slot to `[low, high]`.
    ///
    /// Never panics. If `low > high` every slot becomes `high`, and a NaN
    /// slot becomes `low`.
    #[inline]
    pub fn clamp(self, low: f32, high: f32) -> Self {
        self.map(|v| v.max(low).min(high))
    }

    /// Element-wise square root. Negative slots produce NaN.
    #[inline]
    pub fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    /// Element-wise power.
    #[inline]
    pub fn powf(self, e: f32) -> Self {
        self.map(|v| v.powf(e))
    }

    /// Element-wise `e^v`.
    #[inline]
    pub fn exp(self) -> Self {
        self.map(f32::exp)
    }

    /// `(1 - t) * self + t * other`, slot by slot.
    #[inline]
    pub fn lerp(self, t: f32, other: Self) -> Self {
        let mut out = self;
        for (o, &b) in out.c.iter_mut().zip(&other.c) {
            *o = lerp(t, *o, b);
        }
        out
    }

    /// True if any slot is NaN or infinite.
    ///
    /// Arithmetic never checks its inputs, so call this after a chain of
    /// operations to detect a poisoned result.
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.c.iter().any(|v| !v.is_finite())
    }

    /// True if every slot is exactly zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|&v| v == 0.0)
    }

    /// Largest slot value.
    #[inline]
    pub fn max_value(&self) -> f32 {
        self.c.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

impl<const N: usize> Default for CoefficientVector<N> {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const N: usize> From<[f32; N]> for CoefficientVector<N> {
    #[inline]
    fn from(c: [f32; N]) -> Self {
        Self::from_array(c)
    }
}

impl<const N: usize> Index<usize> for CoefficientVector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.c[i]
    }
}

impl<const N: usize> IndexMut<usize> for CoefficientVector<N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.c[i]
    }
}

impl<const N: usize> Neg for CoefficientVector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

macro_rules! impl_elementwise {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $in_place:ident, $sym:tt) => {
        impl<const N: usize> $assign for CoefficientVector<N> {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                self.$in_place(&rhs);
            }
        }

        impl<const N: usize> $op for CoefficientVector<N> {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: Self) -> Self {
                self.$in_place(&rhs);
                self
            }
        }

        impl<const N: usize> $assign<f32> for CoefficientVector<N> {
            #[inline]
            fn $assign_fn(&mut self, rhs: f32) {
                for v in &mut self.c {
                    *v = *v $sym rhs;
                }
            }
        }

        impl<const N: usize> $op<f32> for CoefficientVector<N> {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: f32) -> Self {
                self.$assign_fn(rhs);
                self
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, add_in_place, +);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, sub_in_place, -);
impl_elementwise!(Mul, mul, MulAssign, mul_assign, mul_in_place, *);
impl_elementwise!(Div, div, DivAssign, div_assign, div_in_place, /);

impl<const N: usize> Mul<CoefficientVector<N>> for f32 {
    type Output = CoefficientVector<N>;

    #[inline]
    fn mul(self, rhs: CoefficientVector<N>) -> CoefficientVector<N> {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type V4 = CoefficientVector<4>;

    #[test]
    fn test_splat_fills_every_slot() {
        let v = V4::splat(0.25);
        assert!(v.iter().all(|&x| x == 0.25));
        assert_eq!(v.len(), 4);
        assert!(!v.has_nan());
    }

    #[test]
    fn test_binary_ops() {
        let a = V4::from([1.0, 2.0, 3.0, 4.0]);
        let b = V4::splat(2.0);
        assert_eq!(a + b, V4::from([3.0, 4.0, 5.0, 6.0]));
        assert_eq!(a - b, V4::from([-1.0, 0.0, 1.0, 2.0]));
        assert_eq!(a * b, V4::from([2.0, 4.0, 6.0, 8.0]));
        assert_eq!(a / b, V4::from([0.5, 1.0, 1.5, 2.0]));
        assert_eq!(a * 3.0, 3.0 * a);
        assert_eq!(-a + a, V4::default());
    }

    #[test]
    fn test_compound_ops_mutate() {
        let mut a = V4::splat(1.0);
        a += V4::splat(2.0);
        assert_eq!(a, V4::splat(3.0));
        a -= V4::splat(1.0);
        assert_eq!(a, V4::splat(2.0));
        a *= V4::splat(4.0);
        assert_eq!(a, V4::splat(8.0));
        a /= V4::splat(2.0);
        assert_eq!(a, V4::splat(4.0));
        a += 1.0;
        a *= 0.5;
        assert_eq!(a, V4::splat(2.5));
    }

    #[test]
    fn test_in_place_chains_on_receiver() {
        let mut a = V4::splat(1.0);
        let b = V4::from([1.0, 2.0, 3.0, 4.0]);
        let out = *a.add_in_place(&b).sub_in_place(&V4::splat(1.0)).div_in_place(&b);
        assert_eq!(out, V4::splat(1.0));
        assert_eq!(a, out);
        a.scale_in_place(3.0);
        assert_eq!(a, V4::splat(3.0));
    }

    #[test]
    fn test_clamp_and_sqrt() {
        let v = V4::from([-1.0, 0.25, 4.0, 9.0]);
        assert_eq!(v.clamp(0.0, 4.0), V4::from([0.0, 0.25, 4.0, 4.0]));
        assert_eq!(v.clamp(0.0, 9.0).sqrt(), V4::from([0.0, 0.5, 2.0, 3.0]));
        assert!(v.sqrt().has_nan());
    }

    #[test]
    fn test_clamp_with_inverted_bounds_is_total() {
        assert_eq!(V4::splat(0.5).clamp(1.0, 0.0), V4::splat(0.0));
        assert_eq!(V4::splat(f32::NAN).clamp(0.0, 1.0), V4::splat(0.0));
    }

    #[test]
    fn test_has_nan_detects_injected_slot() {
        let mut v = V4::splat(1.0);
        assert!(!v.has_nan());
        v[2] = f32::NAN;
        assert!(v.has_nan());
        v[2] = f32::INFINITY;
        assert!(v.has_nan());
    }

    #[test]
    fn test_division_by_zero_is_flagged() {
        let v = V4::splat(1.0) / V4::from([1.0, 0.0, 1.0, 1.0]);
        assert!(v.has_nan());
    }

    #[test]
    fn test_lerp() {
        let a = V4::splat(0.0);
        let b = V4::splat(10.0);
        assert_eq!(a.lerp(0.25, b), V4::splat(2.5));
    }

    #[test]
    fn test_equality_is_elementwise() {
        let a = V4::from([1.0, 2.0, 3.0, 4.0]);
        let mut b = a;
        assert_eq!(a, b);
        b[3] = 4.5;
        assert_ne!(a, b);
    }

    #[test]
    fn test_black_and_max() {
        assert!(V4::default().is_black());
        let v = V4::from([0.0, 3.0, -1.0, 2.0]);
        assert!(!v.is_black());
        assert_eq!(v.max_value(), 3.0);
    }
}

//! Interpolation helpers.
//!
//! Parameter order follows the spectral code that uses these helpers:
//! the blend factor `t` comes first, then the two endpoints.

/// Linear interpolation, `(1 - t) * a + t * b`.
///
/// For `t` outside `[0, 1]` the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use spx_math::lerp;
///
/// assert_eq!(lerp(0.0, 2.0, 4.0), 2.0);
/// assert_eq!(lerp(0.5, 2.0, 4.0), 3.0);
/// assert_eq!(lerp(1.0, 2.0, 4.0), 4.0);
/// ```
#[inline]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Inverse linear interpolation: the `t` at which `lerp(t, a, b) == value`.
///
/// Returns 0 when `a == b`.
///
/// # Example
///
/// ```rust
/// use spx_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(400.0, 700.0, 550.0), 0.5);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if b == a { 0.0 } else { (value - a) / (b - a) }
}

/// Clamps a value to `[0, 1]`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

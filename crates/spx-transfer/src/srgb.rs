//! sRGB transfer function.
//!
//! A linear segment near black joined to a 1/2.4 power curve.
//! The encode and decode breakpoints are not exact images of each other
//! (`0.0031308 * 12.92 = 0.04045` only to four decimals), which is the
//! published curve and is kept as is.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use spx_math::Vec3;

/// Linear-light breakpoint below which [`oetf`] is linear.
pub const LINEAR_BREAK: f32 = 0.0031308;

/// Encoded breakpoint below which [`eotf`] is linear.
pub const ENCODED_BREAK: f32 = 0.04045;

/// Slope of the linear segment.
pub const LINEAR_SLOPE: f32 = 12.92;

/// Exponent of the power segment.
pub const GAMMA: f32 = 2.4;

const A: f32 = 0.055;

/// sRGB EOTF: gamma-encoded `[0, 1]` to linear light.
///
/// ```text
/// if V <= 0.04045:  L = V / 12.92
/// else:             L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use spx_transfer::srgb::eotf;
///
/// assert!((eotf(0.5) - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v <= ENCODED_BREAK {
        v / LINEAR_SLOPE
    } else {
        ((v + A) / (1.0 + A)).powf(GAMMA)
    }
}

/// sRGB OETF: linear light to gamma-encoded `[0, 1]`.
///
/// ```text
/// if L <= 0.0031308:  V = 12.92 * L
/// else:               V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// Negative inputs fall in the linear segment and stay negative; callers
/// producing display values clamp afterwards.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l <= LINEAR_BREAK {
        LINEAR_SLOPE * l
    } else {
        (1.0 + A) * l.powf(1.0 / GAMMA) - A
    }
}

/// Applies [`eotf`] to each channel.
#[inline]
pub fn eotf_vec(v: Vec3) -> Vec3 {
    v.map(eotf)
}

/// Applies [`oetf`] to each channel.
#[inline]
pub fn oetf_vec(v: Vec3) -> Vec3 {
    v.map(oetf)
}

//! XYZ <-> display RGB conversion.
//!
//! The two directions apply their steps in mirrored order:
//!
//! ```text
//! xyz_to_rgb:  XYZ --matrix--> linear RGB --OETF--> encoded RGB --clamp-->
//! rgb_to_xyz:  encoded RGB --EOTF--> linear RGB --matrix--> XYZ --clamp-->
//! ```
//!
//! Both outputs are clamped to `[0, 1]` per channel. Out-of-gamut and
//! negative values are clipped silently, never reported.

use spx_math::{Mat3, Vec3};
use spx_transfer::srgb;

/// CIE XYZ to linear sRGB (D65) primaries.
pub const XYZ_TO_LINEAR_SRGB: Mat3 = Mat3::from_rows([
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
]);

/// Linear sRGB (D65) primaries to CIE XYZ.
pub const LINEAR_SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
]);

/// Matrix step only: XYZ to linear sRGB, unclamped.
#[inline]
pub fn xyz_to_linear_rgb(xyz: Vec3) -> Vec3 {
    XYZ_TO_LINEAR_SRGB * xyz
}

/// Matrix step only: linear sRGB to XYZ, unclamped.
#[inline]
pub fn linear_rgb_to_xyz(rgb: Vec3) -> Vec3 {
    LINEAR_SRGB_TO_XYZ * rgb
}

/// Converts CIE XYZ to gamma-encoded sRGB in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use spx_color::xyz_to_rgb;
/// use spx_math::Vec3;
///
/// let black = xyz_to_rgb(Vec3::ZERO);
/// assert_eq!(black, Vec3::ZERO);
/// ```
#[inline]
pub fn xyz_to_rgb(xyz: Vec3) -> Vec3 {
    srgb::oetf_vec(xyz_to_linear_rgb(xyz)).clamp01()
}

/// Converts gamma-encoded sRGB to CIE XYZ in `[0, 1]`.
///
/// Decoding happens before the matrix, so texture values are linearized
/// first.
#[inline]
pub fn rgb_to_xyz(rgb: Vec3) -> Vec3 {
    linear_rgb_to_xyz(srgb::eotf_vec(rgb)).clamp01()
}

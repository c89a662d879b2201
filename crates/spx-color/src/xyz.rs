//! CIE XYZ tristimulus color.

use crate::{Rgb, convert};
use spx_math::Vec3;
use std::ops::{Index, IndexMut};

/// A CIE XYZ tristimulus value.
///
/// Holds its components in a [`Vec3`] rather than being one, so XYZ and RGB
/// values cannot be mixed by accident; use [`Xyz::to_vec`] /
/// [`Xyz::from_vec`] to reach the raw storage.
///
/// # Example
///
/// ```rust
/// use spx_color::Xyz;
///
/// let xyz = Xyz::new(0.25, 0.5, 0.75);
/// assert_eq!(xyz.y(), 0.5);
/// let rgb = xyz.to_rgb();
/// assert!(rgb.g() <= 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    value: Vec3,
}

impl Xyz {
    /// Creates a tristimulus value from its components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_vec(Vec3::new(x, y, z))
    }

    /// Wraps a raw vector as XYZ.
    #[inline]
    pub const fn from_vec(value: Vec3) -> Self {
        Self { value }
    }

    /// The raw component vector.
    #[inline]
    pub const fn to_vec(self) -> Vec3 {
        self.value
    }

    /// X component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.value.x
    }

    /// Y component (luminance).
    #[inline]
    pub const fn y(&self) -> f32 {
        self.value.y
    }

    /// Z component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.value.z
    }

    /// Clamps each axis to `[0, 1]` independently.
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::from_vec(self.value.clamp01())
    }

    /// Converts to display sRGB. See [`convert::xyz_to_rgb`].
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_vec(convert::xyz_to_rgb(self.value))
    }
}

impl Index<usize> for Xyz {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.value[i]
    }
}

impl IndexMut<usize> for Xyz {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.value[i]
    }
}

impl From<[f32; 3]> for Xyz {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_vec(Vec3::from_array(a))
    }
}

impl From<Xyz> for [f32; 3] {
    #[inline]
    fn from(xyz: Xyz) -> [f32; 3] {
        xyz.value.to_array()
    }
}

impl From<Rgb> for Xyz {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.to_xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut xyz = Xyz::from([0.1, 0.2, 0.3]);
        assert_eq!(xyz.x(), 0.1);
        assert_eq!(xyz[2], 0.3);
        xyz[1] = 0.9;
        assert_eq!(xyz.y(), 0.9);
        assert_eq!(<[f32; 3]>::from(xyz), [0.1, 0.9, 0.3]);
    }

    #[test]
    fn test_clamp_all_axes() {
        let xyz = Xyz::new(-1.0, 2.0, 3.0).clamp01();
        assert_eq!(xyz, Xyz::new(0.0, 1.0, 1.0));
    }

    #[test]
    fn test_black_to_rgb() {
        assert_eq!(Xyz::default().to_rgb(), Rgb::default());
    }
}

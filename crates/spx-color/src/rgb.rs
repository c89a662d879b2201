//! Gamma-encoded display RGB color.

use crate::{Xyz, convert};
use spx_math::Vec3;
use std::ops::{Index, IndexMut};

/// A display-referred sRGB color, gamma encoded, nominally in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use spx_color::Rgb;
///
/// let grey = Rgb::new(0.5, 0.5, 0.5);
/// let xyz = grey.to_xyz();
/// assert!((xyz.y() - 0.214).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    value: Vec3,
}

impl Rgb {
    /// Creates a color from its encoded channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self::from_vec(Vec3::new(r, g, b))
    }

    /// Wraps a raw vector as RGB.
    #[inline]
    pub const fn from_vec(value: Vec3) -> Self {
        Self { value }
    }

    /// The raw channel vector.
    #[inline]
    pub const fn to_vec(self) -> Vec3 {
        self.value
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> f32 {
        self.value.x
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> f32 {
        self.value.y
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> f32 {
        self.value.z
    }

    /// Decodes and converts to XYZ. See [`convert::rgb_to_xyz`].
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec(convert::rgb_to_xyz(self.value))
    }

    /// Relative luminance of the decoded color.
    #[inline]
    pub fn luminance(self) -> f32 {
        self.to_xyz().y()
    }
}

impl Index<usize> for Rgb {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.value[i]
    }
}

impl IndexMut<usize> for Rgb {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.value[i]
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_vec(Vec3::from_array(a))
    }
}

impl From<Rgb> for [f32; 3] {
    #[inline]
    fn from(rgb: Rgb) -> [f32; 3] {
        rgb.value.to_array()
    }
}

impl From<Xyz> for Rgb {
    #[inline]
    fn from(xyz: Xyz) -> Self {
        xyz.to_rgb()
    }
}

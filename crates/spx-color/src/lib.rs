//! # spx-color
//!
//! Tristimulus and display color for the spectral pipeline.
//!
//! - [`Xyz`] - CIE XYZ tristimulus value
//! - [`Rgb`] - Gamma-encoded sRGB display value
//! - [`xyz_to_rgb`], [`rgb_to_xyz`] - Fixed-matrix sRGB conversion with clamping
//!
//! # Usage
//!
//! ```rust
//! use spx_color::{Rgb, Xyz};
//!
//! let texel = Rgb::new(0.8, 0.4, 0.1);
//! let xyz: Xyz = texel.to_xyz();
//! let back: Rgb = xyz.to_rgb();
//! assert!((back.r() - 0.8).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - `spx-math` - Vector and matrix storage
//! - `spx-transfer` - sRGB gamma
//!
//! # Used By
//!
//! - `spx-spectrum` - Spectrum -> RGB and RGB -> spectrum

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
mod rgb;
mod xyz;

pub use convert::{rgb_to_xyz, xyz_to_rgb};
pub use rgb::Rgb;
pub use xyz::Xyz;

//! # spx-math
//!
//! Math primitives for the spectral color pipeline.
//!
//! - [`Vec3`] - Storage for XYZ and RGB triplets
//! - [`Mat3`] - 3x3 matrices for linear RGB <-> XYZ transforms
//! - Interpolation helpers ([`lerp`], [`inverse_lerp`], [`saturate`])
//!
//! # Design
//!
//! Matrices use **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use spx_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124, 0.3576, 0.1805],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.0193, 0.1192, 0.9505],
//! ]);
//! let xyz = rgb_to_xyz * Vec3::ONE;
//! assert!((xyz.y - 1.0).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Matrix inversion and products
//!
//! # Used By
//!
//! - `spx-color` - RGB/XYZ conversion
//! - `spx-spectrum` - Resampling interpolation, tristimulus sums

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;

//! # spx-transfer
//!
//! Transfer functions between linear light and display-encoded values.
//!
//! - **OETF**: Linear -> Encoded (used when producing display RGB)
//! - **EOTF**: Encoded -> Linear (used when ingesting texture RGB)
//!
//! Only the sRGB curve is needed by the spectral pipeline; it lives in
//! [`srgb`].
//!
//! # Usage
//!
//! ```rust
//! use spx_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `spx-color` - XYZ <-> display RGB

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};

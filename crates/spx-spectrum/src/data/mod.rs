//! Reference sample tables.
//!
//! Plain `const` arrays, paired into [`Sample`] tables on demand. Nothing
//! here is mutable; the named curves are built from these once per
//! spectral configuration.

pub mod cie;
pub mod smits;

use crate::Sample;

/// Zips parallel wavelength/value arrays into a sample table.
///
/// Both arrays come from this module and always have matching lengths.
pub fn table(lambda: &[f32], values: &[f32]) -> Vec<Sample> {
    debug_assert_eq!(lambda.len(), values.len());
    lambda
        .iter()
        .zip(values)
        .map(|(&wavelength, &value)| Sample::new(wavelength, value))
        .collect()
}

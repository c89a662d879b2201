//! RGB to spectrum basis functions.
//!
//! Brian Smits, "An RGB-to-Spectrum Conversion for Reflectances" (JGT 1999),
//! table 1: ten equal bins over 380-720 nm. Each bin value is tabulated
//! here at its bin center so the resampler can rebin it onto any grid.
//!
//! The `SMITS_ILLUM_*` tables are the illuminant counterparts: each
//! reflectance basis weighted by [`SMITS_D65_POWER`], so RGB white emits a
//! D65-shaped spectrum instead of an equal-energy one.

/// Number of tabulated bins.
pub const SMITS_SAMPLES: usize = 10;

/// Bin centers in nanometers (380 + 34 * (i + 0.5)).
pub const SMITS_LAMBDA: [f32; SMITS_SAMPLES] = [
    397.0, 431.0, 465.0, 499.0, 533.0, 567.0, 601.0, 635.0, 669.0, 703.0,
];

/// Spectrum of RGB (1, 1, 1).
pub const SMITS_WHITE: [f32; SMITS_SAMPLES] = [
    1.0000, 1.0000, 0.9999, 0.9993, 0.9992, 0.9998, 1.0000, 1.0000, 1.0000, 1.0000,
];

/// Spectrum of RGB (0, 1, 1).
pub const SMITS_CYAN: [f32; SMITS_SAMPLES] = [
    0.9710, 0.9426, 1.0007, 1.0007, 1.0007, 1.0007, 0.1564, 0.0000, 0.0000, 0.0000,
];

/// Spectrum of RGB (1, 0, 1).
pub const SMITS_MAGENTA: [f32; SMITS_SAMPLES] = [
    1.0000, 1.0000, 0.9685, 0.2229, 0.0000, 0.0458, 0.8369, 1.0000, 1.0000, 0.9959,
];

/// Spectrum of RGB (1, 1, 0).
pub const SMITS_YELLOW: [f32; SMITS_SAMPLES] = [
    0.0001, 0.0000, 0.1088, 0.6651, 1.0000, 1.0000, 0.9996, 0.9586, 0.9685, 0.9840,
];

/// Spectrum of RGB (1, 0, 0).
pub const SMITS_RED: [f32; SMITS_SAMPLES] = [
    0.1012, 0.0515, 0.0000, 0.0000, 0.0000, 0.0000, 0.8325, 1.0149, 1.0149, 1.0149,
];

/// Spectrum of RGB (0, 1, 0).
pub const SMITS_GREEN: [f32; SMITS_SAMPLES] = [
    0.0000, 0.0000, 0.0273, 0.7937, 1.0000, 0.9418, 0.1719, 0.0000, 0.0000, 0.0025,
];

/// Spectrum of RGB (0, 0, 1).
pub const SMITS_BLUE: [f32; SMITS_SAMPLES] = [
    1.0000, 1.0000, 0.8916, 0.3323, 0.0000, 0.0000, 0.0003, 0.0369, 0.0483, 0.0496,
];

/// CIE D65 relative power averaged over each bin, normalized to 1 at 560 nm.
pub const SMITS_D65_POWER: [f32; SMITS_SAMPLES] = [
    0.7202, 0.9686, 1.1628, 1.0915, 1.0549, 0.9823, 0.8962, 0.8366, 0.7973, 0.7065,
];

/// Emission of RGB (1, 1, 1).
pub const SMITS_ILLUM_WHITE: [f32; SMITS_SAMPLES] = [
    0.7202, 0.9686, 1.1627, 1.0907, 1.0541, 0.9821, 0.8962, 0.8366, 0.7973, 0.7065,
];

/// Emission of RGB (0, 1, 1).
pub const SMITS_ILLUM_CYAN: [f32; SMITS_SAMPLES] = [
    0.6993, 0.9130, 1.1636, 1.0923, 1.0556, 0.9830, 0.1402, 0.0000, 0.0000, 0.0000,
];

/// Emission of RGB (1, 0, 1).
pub const SMITS_ILLUM_MAGENTA: [f32; SMITS_SAMPLES] = [
    0.7202, 0.9686, 1.1262, 0.2433, 0.0000, 0.0450, 0.7500, 0.8366, 0.7973, 0.7036,
];

/// Emission of RGB (1, 1, 0).
pub const SMITS_ILLUM_YELLOW: [f32; SMITS_SAMPLES] = [
    0.0001, 0.0000, 0.1265, 0.7260, 1.0549, 0.9823, 0.8958, 0.8020, 0.7722, 0.6952,
];

/// Emission of RGB (1, 0, 0).
pub const SMITS_ILLUM_RED: [f32; SMITS_SAMPLES] = [
    0.0729, 0.0499, 0.0000, 0.0000, 0.0000, 0.0000, 0.7461, 0.8491, 0.8092, 0.7170,
];

/// Emission of RGB (0, 1, 0).
pub const SMITS_ILLUM_GREEN: [f32; SMITS_SAMPLES] = [
    0.0000, 0.0000, 0.0317, 0.8663, 1.0549, 0.9251, 0.1541, 0.0000, 0.0000, 0.0018,
];

/// Emission of RGB (0, 0, 1).
pub const SMITS_ILLUM_BLUE: [f32; SMITS_SAMPLES] = [
    0.7202, 0.9686, 1.0368, 0.3627, 0.0000, 0.0000, 0.0003, 0.0309, 0.0385, 0.0350,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_illuminant_tables_are_d65_weighted() {
        let pairs = [
            (SMITS_WHITE, SMITS_ILLUM_WHITE),
            (SMITS_CYAN, SMITS_ILLUM_CYAN),
            (SMITS_MAGENTA, SMITS_ILLUM_MAGENTA),
            (SMITS_YELLOW, SMITS_ILLUM_YELLOW),
            (SMITS_RED, SMITS_ILLUM_RED),
            (SMITS_GREEN, SMITS_ILLUM_GREEN),
            (SMITS_BLUE, SMITS_ILLUM_BLUE),
        ];
        for (reflectance, illuminant) in pairs {
            for i in 0..SMITS_SAMPLES {
                let weighted = reflectance[i] * SMITS_D65_POWER[i];
                assert_abs_diff_eq!(illuminant[i], weighted, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_d65_power_peaks_in_the_blue() {
        let peak = (0..SMITS_SAMPLES)
            .max_by(|&a, &b| SMITS_D65_POWER[a].total_cmp(&SMITS_D65_POWER[b]))
            .unwrap();
        assert_eq!(SMITS_LAMBDA[peak], 465.0);
    }
}

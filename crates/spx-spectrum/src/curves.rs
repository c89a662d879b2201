//! Process-wide matching curves and RGB basis spectra.
//!
//! Two basis sets are kept per configuration, one for reflectances and one
//! for illuminants; [`NamedCurves::basis`] picks by [`SpectrumType`].
//!
//! Each spectral configuration gets one immutable [`NamedCurves`] set,
//! built on first request by rebinning the reference tables in
//! [`crate::data`] through the same path as any user table. After that the
//! set is shared read-only by every thread.
//!
//! The default configuration lives in its own `OnceLock`, so the hot path
//! is a single atomic load. Other configurations are built once, leaked and
//! recorded in a small registry keyed by `(START, END, N)`.

use crate::data::{self, cie};
use crate::{SampledSpectrum, SpectrumType};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

/// The seven Smits basis spectra for one spectrum type.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisSet<const START: usize, const END: usize, const N: usize> {
    /// RGB (1, 1, 1).
    pub white: SampledSpectrum<START, END, N>,
    /// RGB (0, 1, 1).
    pub cyan: SampledSpectrum<START, END, N>,
    /// RGB (1, 0, 1).
    pub magenta: SampledSpectrum<START, END, N>,
    /// RGB (1, 1, 0).
    pub yellow: SampledSpectrum<START, END, N>,
    /// RGB (1, 0, 0).
    pub red: SampledSpectrum<START, END, N>,
    /// RGB (0, 1, 0).
    pub green: SampledSpectrum<START, END, N>,
    /// RGB (0, 0, 1).
    pub blue: SampledSpectrum<START, END, N>,
}

impl<const START: usize, const END: usize, const N: usize> BasisSet<START, END, N> {
    fn build(kind: SpectrumType) -> Self {
        use crate::data::smits::*;

        let tables = match kind {
            SpectrumType::Reflectance => [
                &SMITS_WHITE,
                &SMITS_CYAN,
                &SMITS_MAGENTA,
                &SMITS_YELLOW,
                &SMITS_RED,
                &SMITS_GREEN,
                &SMITS_BLUE,
            ],
            SpectrumType::Illuminant => [
                &SMITS_ILLUM_WHITE,
                &SMITS_ILLUM_CYAN,
                &SMITS_ILLUM_MAGENTA,
                &SMITS_ILLUM_YELLOW,
                &SMITS_ILLUM_RED,
                &SMITS_ILLUM_GREEN,
                &SMITS_ILLUM_BLUE,
            ],
        };
        let [white, cyan, magenta, yellow, red, green, blue] = tables.map(|values| {
            SampledSpectrum::from_sorted(&data::table(&SMITS_LAMBDA, values))
        });
        Self {
            white,
            cyan,
            magenta,
            yellow,
            red,
            green,
            blue,
        }
    }

    /// All seven spectra, white first.
    pub fn iter(&self) -> impl Iterator<Item = &SampledSpectrum<START, END, N>> {
        [
            &self.white,
            &self.cyan,
            &self.magenta,
            &self.yellow,
            &self.red,
            &self.green,
            &self.blue,
        ]
        .into_iter()
    }
}

/// CIE matching curves, their normalization constants and the RGB basis,
/// rebinned onto one spectral configuration.
///
/// # Example
///
/// ```rust
/// use spx_spectrum::NamedCurves;
///
/// let curves = NamedCurves::<400, 700, 60>::get();
/// assert!(curves.sigma_y > 0.0);
/// // Same instance on every call.
/// assert!(std::ptr::eq(curves, NamedCurves::<400, 700, 60>::get()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NamedCurves<const START: usize, const END: usize, const N: usize> {
    /// CIE x-bar.
    pub x: SampledSpectrum<START, END, N>,
    /// CIE y-bar.
    pub y: SampledSpectrum<START, END, N>,
    /// CIE z-bar.
    pub z: SampledSpectrum<START, END, N>,
    /// Discretized integral of `x` (bucket sum times bucket width).
    pub sigma_x: f32,
    /// Discretized integral of `y`.
    pub sigma_y: f32,
    /// Discretized integral of `z`.
    pub sigma_z: f32,
    /// RGB to spectrum basis for reflectances.
    pub reflectance: BasisSet<START, END, N>,
    /// RGB to spectrum basis for illuminants.
    pub illuminant: BasisSet<START, END, N>,
}

type Key = (usize, usize, usize);
type Registry = RwLock<HashMap<Key, &'static (dyn Any + Send + Sync)>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

impl<const START: usize, const END: usize, const N: usize> NamedCurves<START, END, N> {
    /// Shared curve set for this configuration, built on first call.
    pub fn get() -> &'static Self {
        static DEFAULT: OnceLock<NamedCurves<400, 700, 60>> = OnceLock::new();

        if let Some(cell) = (&DEFAULT as &dyn Any).downcast_ref::<OnceLock<Self>>() {
            return cell.get_or_init(Self::build);
        }
        Self::registered()
    }

    fn registered() -> &'static Self {
        let key = (START, END, N);
        let registry = REGISTRY.get_or_init(Registry::default);

        let found = registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();
        let entry = match found {
            Some(entry) => entry,
            None => {
                let mut map = registry.write().unwrap_or_else(PoisonError::into_inner);
                *map.entry(key).or_insert_with(|| {
                    let curves: &'static (dyn Any + Send + Sync) =
                        Box::leak(Box::new(Self::build()));
                    curves
                })
            }
        };

        match entry.downcast_ref::<Self>() {
            Some(curves) => curves,
            None => unreachable!("curve registry key {key:?} holds another type"),
        }
    }

    /// Rebins the reference tables onto this configuration.
    ///
    /// Prefer [`get`](Self::get); this always allocates a fresh set.
    pub fn build() -> Self {
        let rebin =
            |values: &[f32]| SampledSpectrum::from_sorted(&data::table(&cie::CIE_LAMBDA, values));
        let x = rebin(&cie::CIE_X);
        let y = rebin(&cie::CIE_Y);
        let z = rebin(&cie::CIE_Z);

        let width = SampledSpectrum::<START, END, N>::bucket_width();
        let integral = |s: &SampledSpectrum<START, END, N>| {
            s.coefficients().iter().sum::<f32>() * width
        };
        let (sigma_x, sigma_y, sigma_z) = (integral(&x), integral(&y), integral(&z));

        debug!(
            start = START,
            end = END,
            buckets = N,
            sigma_x,
            sigma_y,
            sigma_z,
            "built named spectral curves"
        );

        Self {
            x,
            y,
            z,
            sigma_x,
            sigma_y,
            sigma_z,
            reflectance: BasisSet::build(SpectrumType::Reflectance),
            illuminant: BasisSet::build(SpectrumType::Illuminant),
        }
    }

    /// Basis set used to decompose RGB of the given spectrum type.
    pub fn basis(&self, kind: SpectrumType) -> &BasisSet<START, END, N> {
        match kind {
            SpectrumType::Reflectance => &self.reflectance,
            SpectrumType::Illuminant => &self.illuminant,
        }
    }

    /// True if any curve holds a NaN or infinite bucket.
    pub fn has_nan(&self) -> bool {
        [&self.x, &self.y, &self.z]
            .into_iter()
            .chain(self.reflectance.iter())
            .chain(self.illuminant.iter())
            .any(SampledSpectrum::has_nan)
            || !(self.sigma_x.is_finite() && self.sigma_y.is_finite() && self.sigma_z.is_finite())
    }
}

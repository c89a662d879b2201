//! Named curves are built once and then read from many threads.

use rayon::prelude::*;
use spx_color::Rgb;
use spx_spectrum::{NamedCurves, SampledSpectrum, Spectrum, SpectrumType};

fn texel(i: usize) -> Rgb {
    let f = |k: usize| ((i * k) % 97) as f32 / 96.0;
    Rgb::new(f(3), f(7), f(11))
}

fn convert(i: usize) -> [f32; 3] {
    Spectrum::from_rgb(texel(i), SpectrumType::Reflectance).to_xyz().into()
}

#[test]
fn test_parallel_conversion_matches_sequential() {
    spx_spectrum::init();

    let sequential: Vec<[f32; 3]> = (0..2000).map(convert).collect();
    let parallel: Vec<[f32; 3]> = (0..2000).into_par_iter().map(convert).collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_first_use_from_many_threads_builds_one_set() {
    // Nothing else in this binary touches this configuration, so every
    // thread races on its first construction.
    let addresses: Vec<usize> = (0..64)
        .into_par_iter()
        .map(|_| NamedCurves::<410, 690, 28>::get() as *const _ as usize)
        .collect();

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    let y = SampledSpectrum::<410, 690, 28>::splat(1.0).to_y();
    assert!((y - 1.0).abs() < 1e-5);
}

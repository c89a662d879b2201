//! Benchmarks for spx-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use spx_color::{Rgb, rgb_to_xyz, xyz_to_rgb};
use spx_math::Vec3;
use spx_spectrum::data::{cie, table};
use spx_spectrum::{
    CoefficientVector, NamedCurves, Sample, SampledSpectrum, Spectrum, SpectrumType,
    average_spectrum_samples,
};
use spx_transfer::srgb;

fn measured_table(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| {
            let lambda = 360.0 + 470.0 * i as f32 / (len - 1) as f32;
            Sample::new(lambda, 0.5 + 0.4 * (lambda / 23.0).sin())
        })
        .collect()
}

/// Benchmark the resampler over tables of growing density.
fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");

    for len in [16, 95, 471] {
        let samples = measured_table(len);
        group.bench_with_input(BenchmarkId::new("average_5nm", len), &samples, |b, s| {
            b.iter(|| average_spectrum_samples(black_box(s), black_box(550.0), black_box(555.0)))
        });
        group.bench_with_input(BenchmarkId::new("from_samples", len), &samples, |b, s| {
            b.iter(|| Spectrum::from_samples(black_box(s)))
        });
    }

    group.finish();
}

/// Benchmark tristimulus integration for a few bucket counts.
fn bench_tristimulus(c: &mut Criterion) {
    let mut group = c.benchmark_group("tristimulus");
    let samples = measured_table(95);

    let s30 = SampledSpectrum::<400, 700, 30>::from_samples(&samples);
    let s60 = Spectrum::from_samples(&samples);
    let s120 = SampledSpectrum::<400, 700, 120>::from_samples(&samples);

    group.bench_function("to_xyz_30", |b| b.iter(|| black_box(&s30).to_xyz()));
    group.bench_function("to_xyz_60", |b| b.iter(|| black_box(&s60).to_xyz()));
    group.bench_function("to_xyz_120", |b| b.iter(|| black_box(&s120).to_xyz()));
    group.bench_function("to_y_60", |b| b.iter(|| black_box(&s60).to_y()));
    group.bench_function("to_rgb_60", |b| b.iter(|| black_box(&s60).to_rgb()));

    group.finish();
}

/// Benchmark RGB ingest and the display converters over a texel batch.
fn bench_rgb(c: &mut Criterion) {
    let mut group = c.benchmark_group("rgb");

    let size = 10_000;
    let texels: Vec<Vec3> = (0..size)
        .map(|i| {
            let f = |k: usize| ((i * k) % 251) as f32 / 250.0;
            Vec3::new(f(3), f(5), f(7))
        })
        .collect();
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("from_rgb_reflectance", |b| {
        b.iter(|| {
            texels
                .iter()
                .map(|&v| Rgb::from_vec(black_box(v)))
                .map(|rgb| Spectrum::from_rgb(rgb, SpectrumType::Reflectance))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("rgb_to_xyz", |b| {
        b.iter(|| texels.iter().map(|&v| rgb_to_xyz(black_box(v))).collect::<Vec<_>>())
    });

    group.bench_function("xyz_to_rgb", |b| {
        b.iter(|| texels.iter().map(|&v| xyz_to_rgb(black_box(v))).collect::<Vec<_>>())
    });

    group.bench_function("srgb_eotf_vec", |b| {
        b.iter(|| texels.iter().map(|&v| srgb::eotf_vec(black_box(v))).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark coefficient arithmetic and curve construction.
fn bench_coefficients(c: &mut Criterion) {
    let mut group = c.benchmark_group("coefficients");

    let a = CoefficientVector::<60>::splat(0.5);
    let b = CoefficientVector::<60>::splat(1.5);

    group.bench_function("mul_add_chain", |bench| {
        bench.iter(|| {
            let mut acc = black_box(a);
            acc.mul_in_place(&b).add_in_place(&a).scale_in_place(0.25);
            acc
        })
    });

    group.bench_function("build_named_curves_60", |bench| {
        bench.iter(NamedCurves::<400, 700, 60>::build)
    });

    group.bench_function("rebin_cie_y", |bench| {
        let y = table(&cie::CIE_LAMBDA, &cie::CIE_Y);
        bench.iter(|| Spectrum::from_samples(black_box(&y)))
    });

    group.finish();
}

criterion_group!(benches, bench_resample, bench_tristimulus, bench_rgb, bench_coefficients);
criterion_main!(benches);

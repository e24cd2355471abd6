use super::{PERIOD, SIZE};
use bevy_math::DVec2;
use criterion::{measurement::WallTime, *};
use simplex_tables::{
    NoiseFunction, octave_noise_2d,
    prelude::{FractalLayers, common_noise},
    raw_noise_2d,
};

#[inline]
fn bench_2d(noise: impl NoiseFunction<DVec2, Output = f64>) -> f64 {
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            res += noise.evaluate(DVec2::new(x as f64, y as f64) / PERIOD);
        }
    }
    res
}

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_tables");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| bench_2d(common_noise::Simplex::default()));
    });
    fbm_simplex(&mut group, 1);
    fbm_simplex(&mut group, 2);
    fbm_simplex(&mut group, 8);

    group.bench_function("raw_noise_2d function", |bencher| {
        bencher.iter(|| {
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += raw_noise_2d(x as f64 / PERIOD, y as f64 / PERIOD);
                }
            }
            res
        });
    });

    group.bench_function("octave_noise_2d function 8 octaves", |bencher| {
        bencher.iter(|| {
            let octaves = black_box(8);
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    res += octave_noise_2d(octaves, 0.5, 1.0 / PERIOD, x as f64, y as f64)
                        .unwrap_or_default();
                }
            }
            res
        });
    });
}

fn fbm_simplex(group: &mut BenchmarkGroup<WallTime>, octaves: u32) {
    let octaves = black_box(octaves);
    group.bench_function(format!("fbm {octaves} octave simplex"), |bencher| {
        bencher.iter(|| {
            let noise = FractalLayers::new(common_noise::Simplex::default(), octaves, 0.5, 1.0)
                .unwrap_or_default();
            bench_2d(noise)
        });
    });
}

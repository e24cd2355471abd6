use super::{PERIOD, SIZE};
use criterion::{measurement::WallTime, *};
use noise::{self as noise_rs, Fbm, MultiFractal};
use noise_rs::{NoiseFn, Simplex};

#[inline]
fn bench_2d(noise: impl NoiseFn<f64, 2>) -> f64 {
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            res += noise.get([x as f64 / PERIOD, y as f64 / PERIOD]);
        }
    }
    res
}

pub fn benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("noise");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("simplex", |bencher| {
        bencher.iter(|| bench_2d(Simplex::new(Simplex::DEFAULT_SEED)));
    });
    fbm_simplex(&mut group, 1);
    fbm_simplex(&mut group, 2);
    fbm_simplex(&mut group, 8);
}

fn fbm_simplex(group: &mut BenchmarkGroup<WallTime>, octaves: usize) {
    let octaves = black_box(octaves);
    group.bench_function(format!("fbm {octaves} octave simplex"), |bencher| {
        bencher.iter(|| {
            // The frequency is applied through `bench_2d`.
            let noise = Fbm::<Simplex>::new(Simplex::DEFAULT_SEED)
                .set_octaves(octaves)
                .set_frequency(1.0)
                .set_lacunarity(2.0)
                .set_persistence(0.5);
            bench_2d(noise)
        });
    });
}

//! Benches this noise lib compared to others.
#![expect(
    missing_docs,
    reason = "Its a benchmark and cirterion macros don't add docs."
)]

mod noise;
mod simplex_tables;

use criterion::*;

criterion_main!(benches);
criterion_group!(benches, simplex_tables::benches, noise::benches);

const SIZE: u32 = 1024;
const PERIOD: f64 = 32.0;

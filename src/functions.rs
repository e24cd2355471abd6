//! Plain functions over scalar coordinates for the most common uses of simplex noise.
//!
//! These are thin conveniences over [`common_noise::Simplex`], [`FractalLayers`] and [`RemapRange`].
//! Prefer building those directly when the same configuration is sampled many times.

use bevy_math::{DVec2, DVec3, DVec4};

use crate::{
    NoiseFunction,
    cell_noise::{BlendCellGradients, SimplecticBlend, TableGradients},
    cells::SimplexGrid,
    error::NoiseError,
    layering::{FractalLayers, Octaves, Persistence},
    prelude::common_noise,
    range::RemapRange,
};

const SIMPLEX: common_noise::Simplex = BlendCellGradients {
    cells: SimplexGrid,
    gradients: TableGradients,
    blender: SimplecticBlend,
};

#[inline]
fn fractal(
    octaves: u32,
    persistence: f64,
    scale: f64,
) -> Result<FractalLayers<common_noise::Simplex>, NoiseError> {
    Ok(FractalLayers {
        layer: SIMPLEX,
        octaves: Octaves::new(octaves)?,
        persistence: Persistence(persistence),
        scale,
    })
}

/// 2d simplex noise in `[-1, 1]`.
///
/// ```
/// # use simplex_tables::raw_noise_2d;
/// assert_eq!(raw_noise_2d(0.0, 0.0), 0.0);
/// assert_eq!(raw_noise_2d(1.5, -2.25), raw_noise_2d(1.5, -2.25));
/// ```
#[inline]
pub fn raw_noise_2d(x: f64, y: f64) -> f64 {
    SIMPLEX.evaluate(DVec2::new(x, y))
}

/// 3d simplex noise in `[-1, 1]`.
#[inline]
pub fn raw_noise_3d(x: f64, y: f64, z: f64) -> f64 {
    SIMPLEX.evaluate(DVec3::new(x, y, z))
}

/// 4d simplex noise in `[-1, 1]`.
#[inline]
pub fn raw_noise_4d(x: f64, y: f64, z: f64, w: f64) -> f64 {
    SIMPLEX.evaluate(DVec4::new(x, y, z, w))
}

/// 2d multi-octave simplex noise in `[-1, 1]`.
///
/// Each octave samples at twice the frequency of the last, starting at `scale`, and weighs `persistence` times as much.
/// Fails if `octaves` is 0.
///
/// ```
/// # use simplex_tables::{octave_noise_2d, raw_noise_2d};
/// let single = octave_noise_2d(1, 0.5, 1.0, 0.3, 0.7).unwrap();
/// assert_eq!(single, raw_noise_2d(0.3, 0.7));
/// assert!(octave_noise_2d(0, 0.5, 1.0, 0.3, 0.7).is_err());
/// ```
pub fn octave_noise_2d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    x: f64,
    y: f64,
) -> Result<f64, NoiseError> {
    Ok(fractal(octaves, persistence, scale)?.evaluate(DVec2::new(x, y)))
}

/// 3d multi-octave simplex noise in `[-1, 1]`. See [`octave_noise_2d`].
pub fn octave_noise_3d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    x: f64,
    y: f64,
    z: f64,
) -> Result<f64, NoiseError> {
    Ok(fractal(octaves, persistence, scale)?.evaluate(DVec3::new(x, y, z)))
}

/// 4d multi-octave simplex noise in `[-1, 1]`. See [`octave_noise_2d`].
pub fn octave_noise_4d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    x: f64,
    y: f64,
    z: f64,
    w: f64,
) -> Result<f64, NoiseError> {
    Ok(fractal(octaves, persistence, scale)?.evaluate(DVec4::new(x, y, z, w)))
}

/// 2d simplex noise moved from `[-1, 1]` onto `[lo, hi]`.
#[inline]
pub fn scaled_raw_noise_2d(lo: f64, hi: f64, x: f64, y: f64) -> f64 {
    (SIMPLEX, RemapRange::new(lo, hi)).evaluate(DVec2::new(x, y))
}

/// 3d simplex noise moved from `[-1, 1]` onto `[lo, hi]`.
#[inline]
pub fn scaled_raw_noise_3d(lo: f64, hi: f64, x: f64, y: f64, z: f64) -> f64 {
    (SIMPLEX, RemapRange::new(lo, hi)).evaluate(DVec3::new(x, y, z))
}

/// 4d simplex noise moved from `[-1, 1]` onto `[lo, hi]`.
#[inline]
pub fn scaled_raw_noise_4d(lo: f64, hi: f64, x: f64, y: f64, z: f64, w: f64) -> f64 {
    (SIMPLEX, RemapRange::new(lo, hi)).evaluate(DVec4::new(x, y, z, w))
}

/// 2d multi-octave simplex noise moved from `[-1, 1]` onto `[lo, hi]`. Fails if `octaves` is 0.
///
/// ```
/// # use simplex_tables::scaled_octave_noise_2d;
/// let height = scaled_octave_noise_2d(6, 0.5, 0.01, 0.0, 255.0, 120.0, 45.0).unwrap();
/// assert!((0.0..=255.0).contains(&height));
/// ```
pub fn scaled_octave_noise_2d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    lo: f64,
    hi: f64,
    x: f64,
    y: f64,
) -> Result<f64, NoiseError> {
    let scaled: common_noise::ScaledFbm<_> =
        (fractal(octaves, persistence, scale)?, RemapRange::new(lo, hi));
    Ok(scaled.evaluate(DVec2::new(x, y)))
}

/// 3d multi-octave simplex noise moved from `[-1, 1]` onto `[lo, hi]`. Fails if `octaves` is 0.
pub fn scaled_octave_noise_3d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    lo: f64,
    hi: f64,
    x: f64,
    y: f64,
    z: f64,
) -> Result<f64, NoiseError> {
    let scaled: common_noise::ScaledFbm<_> =
        (fractal(octaves, persistence, scale)?, RemapRange::new(lo, hi));
    Ok(scaled.evaluate(DVec3::new(x, y, z)))
}

/// 4d multi-octave simplex noise moved from `[-1, 1]` onto `[lo, hi]`. Fails if `octaves` is 0.
pub fn scaled_octave_noise_4d(
    octaves: u32,
    persistence: f64,
    scale: f64,
    lo: f64,
    hi: f64,
    x: f64,
    y: f64,
    z: f64,
    w: f64,
) -> Result<f64, NoiseError> {
    let scaled: common_noise::ScaledFbm<_> =
        (fractal(octaves, persistence, scale)?, RemapRange::new(lo, hi));
    Ok(scaled.evaluate(DVec4::new(x, y, z, w)))
}

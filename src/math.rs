//! Scalar helpers shared by every simplex evaluator.

use bevy_math::{DVec2, DVec3, DVec4};

/// Floors `x` toward negative infinity.
///
/// A plain `as i64` truncates toward zero, which would put every negative non-integer in the wrong lattice cell.
/// Values outside the `i64` range saturate, but f64 has no fractional precision long before that.
#[inline(always)]
pub fn fast_floor(x: f64) -> i64 {
    let truncated = x as i64;
    if x < truncated as f64 {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Dots a 2d gradient (the first two components of a [`GRAD3`](crate::tables::GRAD3) entry) with `offset`.
#[inline(always)]
pub fn dot2(gradient: [i8; 2], offset: DVec2) -> f64 {
    gradient[0] as f64 * offset.x + gradient[1] as f64 * offset.y
}

/// Dots a [`GRAD3`](crate::tables::GRAD3) entry with `offset`.
#[inline(always)]
pub fn dot3(gradient: [i8; 3], offset: DVec3) -> f64 {
    gradient[0] as f64 * offset.x + gradient[1] as f64 * offset.y + gradient[2] as f64 * offset.z
}

/// Dots a [`GRAD4`](crate::tables::GRAD4) entry with `offset`.
#[inline(always)]
pub fn dot4(gradient: [i8; 4], offset: DVec4) -> f64 {
    gradient[0] as f64 * offset.x
        + gradient[1] as f64 * offset.y
        + gradient[2] as f64 * offset.z
        + gradient[3] as f64 * offset.w
}

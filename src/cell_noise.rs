//! Contains logic for blending gradients over the corners of a [`DomainCell`].

use bevy_math::{DVec2, DVec3, DVec4};

use crate::{
    NoiseFunction,
    cells::{DomainCell, Partitioner},
    math::{dot2, dot3, dot4},
    tables::{GRAD3, GRAD4},
};

/// This trait facilitates picking gradients and computing their dot products.
pub trait GradientGenerator<I> {
    /// Gets the dot product of `offset` with the gradient selected by `hash`.
    fn get_gradient_dot(&self, hash: u8, offset: I) -> f64;
}

/// A [`GradientGenerator`] that reads [`GRAD3`] and [`GRAD4`], indexed by the hash modulo the table size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TableGradients;

impl GradientGenerator<DVec2> for TableGradients {
    #[inline]
    fn get_gradient_dot(&self, hash: u8, offset: DVec2) -> f64 {
        let [x, y, _] = GRAD3[hash as usize % GRAD3.len()];
        dot2([x, y], offset)
    }
}

impl GradientGenerator<DVec3> for TableGradients {
    #[inline]
    fn get_gradient_dot(&self, hash: u8, offset: DVec3) -> f64 {
        dot3(GRAD3[hash as usize % GRAD3.len()], offset)
    }
}

impl GradientGenerator<DVec4> for TableGradients {
    #[inline]
    fn get_gradient_dot(&self, hash: u8, offset: DVec4) -> f64 {
        dot4(GRAD4[hash as usize % GRAD4.len()], offset)
    }
}

/// Allows blending between the corners of a [`DomainCell`].
pub trait Blender<I> {
    /// Weighs the `value` by the offset of the sampled point from the corner that produced it.
    fn weigh_value(&self, value: f64, offset: I) -> f64;

    /// Given some weighted values, combines them into one.
    fn collect_weighted(&self, weighed: impl Iterator<Item = f64>) -> f64;

    /// Scales a collected sum of weighted dot products so it spans `[-1, 1]`.
    fn counter_dot_product(&self, value: f64) -> f64;
}

/// A [`Blender`] for [`SimplexGrid`](crate::cells::SimplexGrid).
///
/// Each corner contributes `t^4 * value` where `t = R - |offset|^2`, and nothing once `t` goes negative.
/// `R` is 0.5 in 2d and 0.6 in 3d and 4d.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplecticBlend;

#[inline(always)]
fn simplex_falloff(radius_squared: f64, length_squared: f64) -> f64 {
    let t = radius_squared - length_squared;
    if t < 0.0 {
        0.0
    } else {
        let t = t * t;
        t * t
    }
}

impl Blender<DVec2> for SimplecticBlend {
    #[inline]
    fn weigh_value(&self, value: f64, offset: DVec2) -> f64 {
        simplex_falloff(0.5, offset.length_squared()) * value
    }

    #[inline]
    fn collect_weighted(&self, weighed: impl Iterator<Item = f64>) -> f64 {
        weighed.sum()
    }

    #[inline]
    fn counter_dot_product(&self, value: f64) -> f64 {
        70.0 * value
    }
}

impl Blender<DVec3> for SimplecticBlend {
    #[inline]
    fn weigh_value(&self, value: f64, offset: DVec3) -> f64 {
        simplex_falloff(0.6, offset.length_squared()) * value
    }

    #[inline]
    fn collect_weighted(&self, weighed: impl Iterator<Item = f64>) -> f64 {
        weighed.sum()
    }

    #[inline]
    fn counter_dot_product(&self, value: f64) -> f64 {
        32.0 * value
    }
}

impl Blender<DVec4> for SimplecticBlend {
    #[inline]
    fn weigh_value(&self, value: f64, offset: DVec4) -> f64 {
        simplex_falloff(0.6, offset.length_squared()) * value
    }

    #[inline]
    fn collect_weighted(&self, weighed: impl Iterator<Item = f64>) -> f64 {
        weighed.sum()
    }

    #[inline]
    fn counter_dot_product(&self, value: f64) -> f64 {
        27.0 * value
    }
}

/// A [`NoiseFunction`] that blends gradients sourced from a [`GradientGenerator`] `G` by a [`Blender`] `B` within some [`DomainCell`] from a [`Partitioner`] `P`.
///
/// With [`SimplexGrid`](crate::cells::SimplexGrid), [`SimplecticBlend`] and [`TableGradients`], this is classic simplex noise.
/// See [`common_noise::Simplex`](crate::prelude::common_noise::Simplex).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BlendCellGradients<P, B, G> {
    /// The [`Partitioner`].
    pub cells: P,
    /// The [`GradientGenerator`].
    pub gradients: G,
    /// The [`Blender`].
    pub blender: B,
}

impl<I: Copy, P: Partitioner<I>, B: Blender<I>, G: GradientGenerator<I>> NoiseFunction<I>
    for BlendCellGradients<P, B, G>
{
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        let cell = self.cells.partition(input);
        let weighted = cell.iter_points().map(|p| {
            let dot = self.gradients.get_gradient_dot(p.hash, p.offset);
            self.blender.weigh_value(dot, p.offset)
        });
        self.blender
            .counter_dot_product(self.blender.collect_weighted(weighted))
    }
}

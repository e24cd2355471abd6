//! Contains common imports

pub use crate::{
    NoiseFunction,
    cell_noise::{BlendCellGradients, SimplecticBlend, TableGradients},
    cells::{Ordering2, Ordering3, Ordering4, SimplexGrid},
    error::NoiseError,
    layering::{FractalLayers, Octaves, Persistence},
    range::RemapRange,
};

/// Contains type aliases for common noise types.
/// This reduces some boiler plate and is educational.
pub mod common_noise {
    use super::*;

    /// A [`NoiseFunction`] that produces simplex noise `f64`s between -1 and 1 for `DVec2`, `DVec3` and `DVec4` inputs.
    pub type Simplex = BlendCellGradients<SimplexGrid, SimplecticBlend, TableGradients>;

    /// Represents traditional fractal brownian motion.
    pub type Fbm<T> = FractalLayers<T>;

    /// Fractal brownian motion moved onto some [`RemapRange`].
    pub type ScaledFbm<T> = (FractalLayers<T>, RemapRange);
}

//! Contains logic for layering octaves of a [`NoiseFunction`] on top of each other.

use core::{num::NonZeroU32, ops::Mul};

use crate::{NoiseFunction, error::NoiseError};

/// How much each octave's frequency grows over the last.
pub const LACUNARITY: f64 = 2.0;

/// The number of octaves in a [`FractalLayers`]. This is never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Octaves(NonZeroU32);

impl Octaves {
    /// A single octave, which is the same as sampling the inner noise directly at the base scale.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Validates an octave `count`.
    ///
    /// ```
    /// # use simplex_tables::{error::NoiseError, layering::Octaves};
    /// assert_eq!(Octaves::new(4).map(Octaves::get), Ok(4));
    /// assert_eq!(Octaves::new(0), Err(NoiseError::InvalidOctaves { octaves: 0 }));
    /// ```
    pub fn new(count: u32) -> Result<Self, NoiseError> {
        match NonZeroU32::new(count) {
            Some(count) => Ok(Self(count)),
            None => {
                log::debug!("rejecting octave count {count}; at least 1 is needed");
                Err(NoiseError::InvalidOctaves { octaves: count })
            }
        }
    }

    /// The number of octaves.
    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Octaves {
    fn default() -> Self {
        Self::ONE
    }
}

/// Weighs each octave `persistence` times as much as the last, starting at 1.
///
/// Values less than 1 make earlier octaves weigh more, and a value of 1 weighs all octaves equally.
/// Anything else is accepted too; values greater than 1 make later octaves dominate.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct Persistence(pub f64);

impl Default for Persistence {
    fn default() -> Self {
        Self(0.5)
    }
}

impl Persistence {
    /// Makes every octave get the same weight.
    pub const CONSTANT: Self = Self(1.0);

    /// Prepares a new [`PersistenceWeights`] for a sample.
    #[inline]
    pub fn start_weights(&self) -> PersistenceWeights {
        PersistenceWeights {
            persistence: *self,
            next: 1.0,
        }
    }
}

/// Generates the weight, or amplitude, of successive octaves for a [`Persistence`].
#[derive(Clone, Copy, PartialEq)]
pub struct PersistenceWeights {
    persistence: Persistence,
    next: f64,
}

impl PersistenceWeights {
    /// Generates the weight of the next octave.
    #[inline]
    pub fn next_weight(&mut self) -> f64 {
        let result = self.next;
        self.next *= self.persistence.0;
        result
    }
}

/// Collects weighted octaves into a weighted average, so the result stays in the range of a single octave.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Normed {
    running_total: f64,
    total_weights: f64,
}

impl Normed {
    /// Includes `value` in the final result at this `weight`.
    #[inline]
    pub fn include_value(&mut self, value: f64, weight: f64) {
        self.running_total += value * weight;
        self.total_weights += weight;
    }

    /// Divides the weighted total by the total weight.
    #[inline]
    pub fn finish(self) -> f64 {
        self.running_total / self.total_weights
    }
}

/// A [`NoiseFunction`] that repeats the inner noise `T` at doubling frequencies and shrinking weights.
/// This is traditional fractal brownian motion (fbm).
///
/// ```
/// # use bevy_math::DVec3;
/// # use simplex_tables::prelude::*;
/// let fbm = FractalLayers::new(common_noise::Simplex::default(), 4, 0.5, 1.0).unwrap();
/// let value = fbm.evaluate(DVec3::new(0.3, 1.7, -2.2));
/// assert!((-1.0..=1.0).contains(&value));
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct FractalLayers<T> {
    /// The [`NoiseFunction`] sampled by each octave.
    pub layer: T,
    /// The number of octaves.
    pub octaves: Octaves,
    /// The weight of each octave relative to the last.
    pub persistence: Persistence,
    /// The frequency of the first octave. Each later octave doubles it.
    pub scale: f64,
}

impl<T: Default> Default for FractalLayers<T> {
    fn default() -> Self {
        Self {
            layer: T::default(),
            octaves: Octaves::ONE,
            persistence: Persistence::default(),
            scale: 1.0,
        }
    }
}

impl<T> FractalLayers<T> {
    /// Constructs a [`FractalLayers`], failing if `octaves` is 0.
    ///
    /// `persistence` and `scale` are not validated; see [`Persistence`].
    pub fn new(layer: T, octaves: u32, persistence: f64, scale: f64) -> Result<Self, NoiseError> {
        let octaves = Octaves::new(octaves)?;
        log::trace!(
            "configured {} octaves with persistence {persistence} at scale {scale}",
            octaves.get()
        );
        Ok(Self {
            layer,
            octaves,
            persistence: Persistence(persistence),
            scale,
        })
    }
}

impl<I: Copy + Mul<f64, Output = I>, T: NoiseFunction<I, Output = f64>> NoiseFunction<I>
    for FractalLayers<T>
{
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: I) -> Self::Output {
        let mut weights = self.persistence.start_weights();
        let mut result = Normed::default();
        let mut frequency = self.scale;
        for _ in 0..self.octaves.get() {
            let octave = self.layer.evaluate(input * frequency);
            result.include_value(octave, weights.next_weight());
            frequency *= LACUNARITY;
        }
        result.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns its input unchanged, so octave arithmetic is easy to follow.
    struct Identity;

    impl NoiseFunction<f64> for Identity {
        type Output = f64;

        fn evaluate(&self, input: f64) -> f64 {
            input
        }
    }

    #[test]
    fn zero_octaves_are_rejected() {
        assert_eq!(
            Octaves::new(0),
            Err(NoiseError::InvalidOctaves { octaves: 0 })
        );
        assert!(FractalLayers::new(Identity, 0, 0.5, 1.0).is_err());
    }

    #[test]
    fn persistence_shrinks_weights() {
        let mut weights = Persistence(0.5).start_weights();
        assert_eq!(weights.next_weight(), 1.0);
        assert_eq!(weights.next_weight(), 0.5);
        assert_eq!(weights.next_weight(), 0.25);
    }

    #[test]
    fn constant_persistence_averages_octaves() {
        let mut weights = Persistence::CONSTANT.start_weights();
        assert_eq!(weights.next_weight(), 1.0);
        assert_eq!(weights.next_weight(), 1.0);

        let fbm = FractalLayers {
            layer: Identity,
            octaves: Octaves::new(3).unwrap(),
            persistence: Persistence::CONSTANT,
            scale: 1.0,
        };
        // (1 + 2 + 4) / 3
        assert_eq!(fbm.evaluate(1.0), 7.0 / 3.0);
    }

    #[test]
    fn frequencies_double() {
        // 1 * 1 + 2 * 0.5 + 4 * 0.25 = 3, normalized by 1.75.
        let fbm = FractalLayers::new(Identity, 3, 0.5, 1.0).unwrap();
        assert_eq!(fbm.evaluate(1.0), 3.0 / 1.75);

        let scaled = FractalLayers::new(Identity, 3, 0.5, 0.25).unwrap();
        assert_eq!(scaled.evaluate(1.0), 0.75 / 1.75);
    }

    #[test]
    fn one_octave_is_the_layer_at_scale() {
        let fbm = FractalLayers::new(Identity, 1, 0.123, 3.0).unwrap();
        assert_eq!(fbm.evaluate(2.0), 6.0);
    }

    #[test]
    fn normed_is_a_weighted_average() {
        let mut result = Normed::default();
        result.include_value(1.0, 3.0);
        result.include_value(-1.0, 1.0);
        assert_eq!(result.finish(), 0.5);
    }
}

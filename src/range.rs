//! Contains adapters that move noise out of its natural `[-1, 1]` range.

use crate::NoiseFunction;

/// A [`NoiseFunction`] that maps values from `[-1, 1]` onto `[lo, hi]`.
///
/// `lo` greater than `hi` is allowed and inverts the mapping.
/// When they are equal, every input collapses to that value.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "debug", derive(Debug))]
pub struct RemapRange {
    /// The value -1 maps to.
    pub lo: f64,
    /// The value 1 maps to.
    pub hi: f64,
}

impl Default for RemapRange {
    fn default() -> Self {
        Self::SNORM
    }
}

impl RemapRange {
    /// Leaves values in `[-1, 1]`.
    pub const SNORM: Self = Self::new(-1.0, 1.0);
    /// Maps values into `[0, 1]`.
    pub const UNORM: Self = Self::new(0.0, 1.0);

    /// Constructs a [`RemapRange`] onto `[lo, hi]`.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

impl NoiseFunction<f64> for RemapRange {
    type Output = f64;

    #[inline]
    fn evaluate(&self, input: f64) -> Self::Output {
        input * (self.hi - self.lo) / 2.0 + (self.hi + self.lo) / 2.0
    }
}

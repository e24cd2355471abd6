//! Errors produced when configuring noise.

/// An invalid argument passed while configuring noise.
/// Sampling itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NoiseError {
    /// Octave layering needs at least one octave to normalize by.
    #[error("octave count must be at least 1, got {octaves}")]
    InvalidOctaves {
        /// The rejected octave count.
        octaves: u32,
    },
}

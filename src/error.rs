//! Shape construction errors.

use thiserror::Error;

use crate::math::Vec2;

/// Precondition violations reported by the fallible shape constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("circle radius cannot be negative (got {0})")]
    NegativeRadius(f32),

    #[error("rect min ({min}) must be strictly below max ({max}) on both axes")]
    InvertedRect { min: Vec2, max: Vec2 },

    #[error("polygon needs at least 3 points (got {0})")]
    TooFewPoints(usize),
}

use crate::math::vec2::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collision response between two shapes.
///
/// `normal` is a unit vector pointing from the first shape of the query towards
/// the second one, and `depth` is how far they overlap along it. Moving the
/// second shape by `normal * depth` (or the first by `-normal * depth`)
/// separates them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Response {
    pub normal: Vec2,
    pub depth: f32,
}

impl Response {
    pub fn new(normal: Vec2, depth: f32) -> Self {
        Self { normal, depth }
    }

    /// The same contact seen from the other shape.
    pub fn inverted(self) -> Self {
        Self { normal: -self.normal, depth: self.depth }
    }

    /// Translation that moves the first shape out of the second.
    pub fn translation_for_a(&self) -> Vec2 {
        self.normal * -self.depth
    }

    /// Translation that moves the second shape out of the first.
    pub fn translation_for_b(&self) -> Vec2 {
        self.normal * self.depth
    }
}

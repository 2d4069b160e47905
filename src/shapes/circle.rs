use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collision::{detection, AABB};
use crate::error::ShapeError;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "CircleFields"))]
pub struct Circle {
    pub pos: Vec2,
    pub rad: f32,
}

impl Circle {
    /// Creates a circle centered at `pos`.
    ///
    /// Panics if `rad` is negative.
    pub fn new(pos: Vec2, rad: f32) -> Self {
        match Self::try_new(pos, rad) {
            Ok(circle) => circle,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(pos: Vec2, rad: f32) -> Result<Self, ShapeError> {
        if rad < 0.0 {
            return Err(ShapeError::NegativeRadius(rad));
        }
        Ok(Self { pos, rad })
    }

    pub fn center(&self) -> Vec2 {
        self.pos
    }

    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        self.pos += delta;
        self
    }

    /// Multiplies the radius; the center stays put.
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.rad *= factor;
        self
    }

    pub fn point_inside(&self, point: Vec2) -> bool {
        detection::point_circle(point, self.pos, self.rad)
    }

    pub fn aabb(&self) -> AABB {
        let extent = Vec2::new(self.rad, self.rad);
        AABB { min: self.pos - extent, max: self.pos + extent }
    }
}

/// Wire form of a [`Circle`], checked by [`Circle::try_new`] on load.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CircleFields {
    pos: Vec2,
    rad: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<CircleFields> for Circle {
    type Error = ShapeError;

    fn try_from(fields: CircleFields) -> Result<Self, Self::Error> {
        Self::try_new(fields.pos, fields.rad)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle (X: {:.4}, Y: {:.4}, Rad: {:.4})", self.pos.x, self.pos.y, self.rad)
    }
}

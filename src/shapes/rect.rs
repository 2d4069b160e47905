use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collision::{detection, AABB};
use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// Axis-aligned rectangle stored as two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "RectFields"))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Panics unless `min` is strictly below `max` on both axes.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        match Self::try_new(min, max) {
            Ok(rect) => rect,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(min: Vec2, max: Vec2) -> Result<Self, ShapeError> {
        // The collision tests rely on a positive extent.
        if !(min.x < max.x && min.y < max.y) {
            return Err(ShapeError::InvertedRect { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a `width` x `height` rect centered at `center`.
    pub fn from_dims(width: f32, height: f32, center: Vec2) -> Self {
        let half = Vec2::new(width / 2.0, height / 2.0);
        Self::new(center - half, center + half)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + (self.max - self.min) / 2.0
    }

    /// The four corners: `min`, top-left, `max`, bottom-right.
    pub fn points(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }

    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        self.min += delta;
        self.max += delta;
        self
    }

    /// Scales both corners about the rect's center.
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        let center = self.center();
        self.min = (self.min - center) * factor + center;
        self.max = (self.max - center) * factor + center;
        self
    }

    pub fn point_inside(&self, point: Vec2) -> bool {
        detection::point_rect(point, self.min, self.max)
    }

    pub fn aabb(&self) -> AABB {
        AABB { min: self.min, max: self.max }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RectFields {
    min: Vec2,
    max: Vec2,
}

#[cfg(feature = "serde")]
impl TryFrom<RectFields> for Rect {
    type Error = ShapeError;

    fn try_from(fields: RectFields) -> Result<Self, Self::Error> {
        Self::try_new(fields.min, fields.max)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect(Min ({}) Max ({}))", self.min, self.max)
    }
}

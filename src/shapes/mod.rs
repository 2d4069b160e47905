pub mod circle;
pub mod polygon;
pub mod rect;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use circle::Circle;
pub use polygon::Polygon;
pub use rect::Rect;

use crate::collision::{dispatch, Response, AABB};
use crate::math::vec2::Vec2;

/// Tag of a concrete shape, used to index the collision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Circle,
    Rect,
    Polygon,
}

impl ShapeKind {
    pub const COUNT: usize = 3;
    pub const ALL: [ShapeKind; Self::COUNT] = [ShapeKind::Circle, ShapeKind::Rect, ShapeKind::Polygon];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Any collidable shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Circle(c) => c.center(),
            Shape::Rect(r) => r.center(),
            Shape::Polygon(p) => p.center(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        match self {
            Shape::Circle(c) => {
                c.translate(delta);
            }
            Shape::Rect(r) => {
                r.translate(delta);
            }
            Shape::Polygon(p) => {
                p.translate(delta);
            }
        }
        self
    }

    pub fn scale(&mut self, factor: f32) -> &mut Self {
        match self {
            Shape::Circle(c) => {
                c.scale(factor);
            }
            Shape::Rect(r) => {
                r.scale(factor);
            }
            Shape::Polygon(p) => {
                p.scale(factor);
            }
        }
        self
    }

    pub fn point_inside(&self, point: Vec2) -> bool {
        match self {
            Shape::Circle(c) => c.point_inside(point),
            Shape::Rect(r) => r.point_inside(point),
            Shape::Polygon(p) => p.point_inside(point),
        }
    }

    pub fn aabb(&self) -> AABB {
        match self {
            Shape::Circle(c) => c.aabb(),
            Shape::Rect(r) => r.aabb(),
            Shape::Polygon(p) => p.aabb(),
        }
    }

    /// Checks collision between this shape and `other`.
    ///
    /// `res` is only written when this returns `true`. Its normal is always
    /// relative to `self`: it points from `self` towards `other`.
    ///
    /// ```
    /// use shape_collision::{Circle, Rect, Response, Shape, Vec2};
    ///
    /// let rect = Shape::from(Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0)));
    /// let mut circle = Shape::from(Circle::new(Vec2::new(10.0, 15.0), 1.0));
    /// let mut res = Response::default();
    /// if rect.get_collision(&circle, Some(&mut res)) {
    ///     // Pushes the circle out of the rect.
    ///     circle.translate(res.normal * res.depth);
    /// }
    /// assert!(!rect.overlaps(&circle));
    /// ```
    pub fn get_collision(&self, other: &Shape, res: Option<&mut Response>) -> bool {
        dispatch::get_collision(self, other, res)
    }

    /// Like [`Shape::get_collision`], returning the response on overlap.
    pub fn collide(&self, other: &Shape) -> Option<Response> {
        let mut res = Response::default();
        self.get_collision(other, Some(&mut res)).then_some(res)
    }

    /// Overlap test without computing a response.
    pub fn overlaps(&self, other: &Shape) -> bool {
        self.get_collision(other, None)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => fmt::Display::fmt(c, f),
            Shape::Rect(r) => fmt::Display::fmt(r, f),
            Shape::Polygon(p) => fmt::Display::fmt(p, f),
        }
    }
}

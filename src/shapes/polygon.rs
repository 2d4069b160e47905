use std::f32::consts::TAU;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collision::{detection, AABB};
use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// A convex polygon in world space.
///
/// Vertices may be wound either way. Convexity is not checked: the SAT tests
/// are only correct for convex input, while [`Polygon::point_inside`] accepts
/// any simple polygon.
///
/// Edge normals and the vertex center are derived from the points and kept
/// in sync by every mutator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")
)]
pub struct Polygon {
    points: Vec<Vec2>,
    normals: Vec<Vec2>,
    center: Vec2,
}

impl Polygon {
    /// Creates a new polygon from its vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(points: Vec<Vec2>) -> Self {
        match Self::try_new(points) {
            Ok(polygon) => polygon,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(points: Vec<Vec2>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints(points.len()));
        }
        let mut polygon = Polygon {
            normals: Vec::with_capacity(points.len()),
            points,
            center: Vec2::ZERO,
        };
        polygon.calculate_center();
        polygon.calculate_normals();
        Ok(polygon)
    }

    /// Regular polygon with `sides` vertices on a circle of `radius` around `center`,
    /// starting at angle 0 and going counter-clockwise.
    ///
    /// Panics if `sides < 3`.
    pub fn from_sides(sides: usize, center: Vec2, radius: f32) -> Self {
        match Self::try_from_sides(sides, center, radius) {
            Ok(polygon) => polygon,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_from_sides(sides: usize, center: Vec2, radius: f32) -> Result<Self, ShapeError> {
        let step = TAU / sides as f32;
        let points = (0..sides)
            .map(|i| {
                let (sin, cos) = (step * i as f32).sin_cos();
                center + Vec2::new(cos, sin) * radius
            })
            .collect();
        Self::try_new(points)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// `normals()[i]` is the outward unit normal of the edge `points[i] -> points[i + 1]`.
    pub fn normals(&self) -> &[Vec2] {
        &self.normals
    }

    /// Arithmetic mean of the vertices.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Replaces the vertices and recomputes the derived data.
    pub fn set_points(&mut self, points: Vec<Vec2>) -> Result<(), ShapeError> {
        *self = Self::try_new(points)?;
        Ok(())
    }

    /// Recomputes the vertex mean.
    pub fn calculate_center(&mut self) {
        let sum = self.points.iter().fold(Vec2::ZERO, |acc, p| acc + *p);
        self.center = sum / self.points.len() as f32;
    }

    /// Recomputes the outward edge normals from the current winding.
    pub fn calculate_normals(&mut self) {
        let counter_clockwise = self.signed_area() >= 0.0;
        let n = self.points.len();

        self.normals.clear();
        for i in 0..n {
            let edge = self.points[(i + 1) % n] - self.points[i];
            // perpendicular() turns left, which is inward for a counter-clockwise winding.
            let normal = if counter_clockwise { -edge.perpendicular() } else { edge.perpendicular() };
            self.normals.push(normal.normalize());
        }
    }

    /// Shoelace formula; positive for counter-clockwise winding.
    fn signed_area(&self) -> f32 {
        let n = self.points.len();
        let twice_area: f32 = (0..n).map(|i| self.points[i].cross(self.points[(i + 1) % n])).sum();
        twice_area / 2.0
    }

    /// Moves every vertex. Edge directions do not change, so only the center is updated.
    pub fn translate(&mut self, delta: Vec2) -> &mut Self {
        for point in &mut self.points {
            *point += delta;
        }
        self.center += delta;
        self
    }

    /// Rotates the polygon about its center by `angle` radians.
    ///
    /// Each vertex is rebuilt from its distance to the center and a normalized
    /// direction, so repeated rotations do not drift in size.
    pub fn rotate(&mut self, angle: f32) -> &mut Self {
        let center = self.center;
        for point in &mut self.points {
            let dist = point.distance(center);
            let dir = (*point - center).normalize().rotate(angle).normalize();
            *point = center + dir * dist;
        }
        self.calculate_center();
        self.calculate_normals();
        self
    }

    /// Scales the polygon about its center.
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        let center = self.center;
        for point in &mut self.points {
            *point = center + (*point - center) * factor;
        }
        self.calculate_center();
        self.calculate_normals();
        self
    }

    pub fn point_inside(&self, point: Vec2) -> bool {
        detection::point_polygon(point, &self.points)
    }

    pub fn aabb(&self) -> AABB {
        let (min, max) = self.points.iter().fold(
            (Vec2::new(f32::MAX, f32::MAX), Vec2::new(f32::MIN, f32::MIN)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        AABB { min, max }
    }
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = ShapeError;

    fn try_from(points: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::try_new(points)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(polygon: Polygon) -> Self {
        polygon.points
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon [")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({point})")?;
        }
        write!(f, "]")
    }
}

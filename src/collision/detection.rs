//! Pairwise narrow-phase tests.
//!
//! Every test takes raw geometry instead of shape values so it can be called
//! directly. Tests that produce a [`Response`] write it only when they return
//! `true`, and the normal always points from the first shape towards the second.

use super::response::Response;
use crate::math::{vec2::Vec2, EPSILON};

/// Projection of a shape onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Interval {
    min: f32,
    max: f32,
}

impl Interval {
    const EMPTY: Interval = Interval { min: f32::MAX, max: f32::MIN };

    /// Penetration of two intervals, or `None` when they are disjoint or only touch.
    fn overlap(self, other: Interval) -> Option<f32> {
        if self.min >= other.max || other.min >= self.max {
            return None;
        }
        Some((other.max - self.min).min(self.max - other.min))
    }

    fn mid(self) -> f32 {
        (self.min + self.max) * 0.5
    }

    fn width(self) -> f32 {
        self.max - self.min
    }

    /// The same projection seen along the opposite axis.
    fn flipped(self) -> Interval {
        Interval { min: -self.max, max: -self.min }
    }
}

fn project_vertices(points: &[Vec2], axis: Vec2) -> Interval {
    points.iter().fold(Interval::EMPTY, |acc, point| {
        let proj = point.dot(axis);
        Interval { min: acc.min.min(proj), max: acc.max.max(proj) }
    })
}

/// `axis` must be a unit vector.
fn project_circle(center: Vec2, radius: f32, axis: Vec2) -> Interval {
    let proj = center.dot(axis);
    Interval { min: proj - radius, max: proj + radius }
}

/// Sign of the first non-zero key, or `1.0` when all are zero.
///
/// Every key must change sign when the two shapes swap places, so the normal
/// picked for `(a, b)` is always the opposite of the one picked for `(b, a)`.
fn orientation(keys: &[f32]) -> f32 {
    match keys.iter().find(|key| **key != 0.0) {
        Some(key) if *key < 0.0 => -1.0,
        _ => 1.0,
    }
}

/// Axes are stored pointing `x > 0`, or `x == 0` and `y > 0`.
fn is_canonical(axis: Vec2) -> bool {
    axis.x > 0.0 || (axis.x == 0.0 && axis.y > 0.0)
}

/// Minimum-penetration axis found so far, stored in canonical direction.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    axis: Vec2,
    depth: f32,
    a: Interval,
    b: Interval,
}

impl Candidate {
    /// Total order on equally deep axes, independent of the order axes are tested in.
    fn beats(&self, other: &Candidate) -> bool {
        self.depth < other.depth
            || (self.depth == other.depth
                && (self.axis.x > other.axis.x || (self.axis.x == other.axis.x && self.axis.y > other.axis.y)))
    }
}

/// Tracks the axis of minimum penetration across a SAT run.
struct AxisSearch {
    best: Option<Candidate>,
}

impl AxisSearch {
    fn new() -> Self {
        Self { best: None }
    }

    /// Returns `false` if `axis` separates the two projections.
    /// Degenerate (zero-length) axes cannot separate anything and are skipped.
    fn test(&mut self, axis: Vec2, a: Interval, b: Interval) -> bool {
        if axis.length_squared() < EPSILON {
            return true;
        }
        let Some(depth) = a.overlap(b) else {
            return false;
        };

        let candidate = if is_canonical(axis) {
            Candidate { axis, depth, a, b }
        } else {
            Candidate { axis: -axis, depth, a: a.flipped(), b: b.flipped() }
        };
        if self.best.map_or(true, |best| candidate.beats(&best)) {
            self.best = Some(candidate);
        }
        true
    }

    /// Turns the best axis into a response oriented along `direction`
    /// (first shape center to second shape center).
    ///
    /// When every tested axis was degenerate, the axis between the centers is
    /// tried instead, or `Vec2::X` when the centers coincide. `project` gives
    /// both shapes' intervals on that axis. Returns `None` if it separates them.
    fn finish(mut self, direction: Vec2, project: impl Fn(Vec2) -> (Interval, Interval)) -> Option<Response> {
        if self.best.is_none() {
            let axis = direction.normalize_or(Vec2::X);
            let (a, b) = project(axis);
            if !self.test(axis, a, b) {
                return None;
            }
        }
        let best = self.best?;

        // Centers aligned across the axis fall back to the interval offset,
        // then the side the second center lies on, then relative size.
        let sign = orientation(&[
            direction.dot(best.axis),
            best.b.mid() - best.a.mid(),
            best.axis.cross(direction),
            best.b.width() - best.a.width(),
        ]);
        Some(Response { normal: best.axis * sign, depth: best.depth })
    }
}

/// Corners of an axis-aligned rect in the same order as [`crate::shapes::Rect::points`].
fn rect_points(min: Vec2, max: Vec2) -> [Vec2; 4] {
    [min, Vec2::new(min.x, max.y), max, Vec2::new(max.x, min.y)]
}

// Edge normals of an axis-aligned rect; opposite edges share an axis.
const RECT_AXES: [Vec2; 2] = [Vec2::X, Vec2::Y];

/// Circle vs circle. Touching circles count as colliding with a depth of zero.
pub fn circle_circle(
    pos_a: Vec2,
    rad_a: f32,
    pos_b: Vec2,
    rad_b: f32,
    res: Option<&mut Response>,
) -> bool {
    let delta = pos_b - pos_a;
    let dist_sq = delta.length_squared();
    let rad = rad_a + rad_b;

    if dist_sq > rad * rad {
        return false;
    }

    if let Some(res) = res {
        let dist = dist_sq.sqrt();
        // Coincident centers have no meaningful direction.
        res.normal = if dist > EPSILON { delta / dist } else { Vec2::X };
        res.depth = rad - dist;
    }
    true
}

/// Circle vs axis-aligned rect.
///
/// When the circle's center lies inside the rect (bounds inclusive) the circle
/// is pushed out along the axis that needs the shortest escape, counting the
/// whole radius. Otherwise the nearest point of the rect decides.
pub fn circle_rect(
    circle_pos: Vec2,
    circle_rad: f32,
    rect_min: Vec2,
    rect_max: Vec2,
    res: Option<&mut Response>,
) -> bool {
    let center_inside = rect_min.x <= circle_pos.x
        && circle_pos.x <= rect_max.x
        && rect_min.y <= circle_pos.y
        && circle_pos.y <= rect_max.y;

    if center_inside {
        if let Some(res) = res {
            let half = (rect_max - rect_min) * 0.5;
            let to_rect = (rect_min + half) - circle_pos;
            // Both are <= -radius here: the signed distance the circle's far side
            // sits past each pair of edges.
            let x_depth = to_rect.x.abs() - half.x - circle_rad;
            let y_depth = to_rect.y.abs() - half.y - circle_rad;

            if x_depth > y_depth {
                res.normal = Vec2::new(if to_rect.x > 0.0 { 1.0 } else { -1.0 }, 0.0);
                res.depth = -x_depth;
            } else {
                res.normal = Vec2::new(0.0, if to_rect.y > 0.0 { 1.0 } else { -1.0 });
                res.depth = -y_depth;
            }
        }
        return true;
    }

    let nearest = Vec2::new(
        circle_pos.x.clamp(rect_min.x, rect_max.x),
        circle_pos.y.clamp(rect_min.y, rect_max.y),
    );
    let dir = nearest - circle_pos;
    let dist_sq = dir.length_squared();

    if dist_sq >= circle_rad * circle_rad {
        return false;
    }

    if let Some(res) = res {
        let dist = dist_sq.sqrt();
        res.normal = if dist > EPSILON { dir / dist } else { Vec2::X };
        res.depth = circle_rad - dist;
    }
    true
}

/// Rect vs rect. On equal penetration the y axis wins.
pub fn rect_rect(
    a_min: Vec2,
    a_max: Vec2,
    b_min: Vec2,
    b_max: Vec2,
    res: Option<&mut Response>,
) -> bool {
    let half_a = (a_max - a_min) * 0.5;
    let half_b = (b_max - b_min) * 0.5;
    let a_to_b = (b_min + half_b) - (a_min + half_a);

    let x_depth = half_a.x + half_b.x - a_to_b.x.abs();
    if x_depth <= 0.0 {
        return false;
    }

    let y_depth = half_a.y + half_b.y - a_to_b.y.abs();
    if y_depth <= 0.0 {
        return false;
    }

    if let Some(res) = res {
        // Same tie-breaks as the SAT tests: offset across the axis, then size.
        if x_depth < y_depth {
            let sign = orientation(&[a_to_b.x, a_to_b.y, half_b.x - half_a.x]);
            res.normal = Vec2::new(sign, 0.0);
            res.depth = x_depth;
        } else {
            let sign = orientation(&[a_to_b.y, -a_to_b.x, half_b.y - half_a.y]);
            res.normal = Vec2::new(0.0, sign);
            res.depth = y_depth;
        }
    }
    true
}

/// Circle vs convex polygon (SAT).
///
/// Axes tested: every polygon edge normal, then the axis from the circle's
/// center to the nearest polygon vertex.
pub fn circle_polygon(
    circle_pos: Vec2,
    circle_rad: f32,
    poly_points: &[Vec2],
    poly_normals: &[Vec2],
    poly_center: Vec2,
    res: Option<&mut Response>,
) -> bool {
    debug_assert_eq!(poly_points.len(), poly_normals.len());

    let mut search = AxisSearch::new();

    for &axis in poly_normals {
        let a = project_circle(circle_pos, circle_rad, axis);
        let b = project_vertices(poly_points, axis);
        if !search.test(axis, a, b) {
            return false;
        }
    }

    let closest = poly_points
        .iter()
        .copied()
        .min_by(|p, q| p.distance_squared(circle_pos).total_cmp(&q.distance_squared(circle_pos)));

    if let Some(closest) = closest {
        let axis = (closest - circle_pos).normalize();
        let a = project_circle(circle_pos, circle_rad, axis);
        let b = project_vertices(poly_points, axis);
        if !search.test(axis, a, b) {
            return false;
        }
    }

    let Some(contact) = search.finish(poly_center - circle_pos, |axis| {
        (project_circle(circle_pos, circle_rad, axis), project_vertices(poly_points, axis))
    }) else {
        return false;
    };
    if let Some(res) = res {
        *res = contact;
    }
    true
}

/// Axis-aligned rect vs convex polygon (SAT). The rect is treated as a 4-point polygon.
pub fn rect_polygon(
    rect_min: Vec2,
    rect_max: Vec2,
    poly_points: &[Vec2],
    poly_normals: &[Vec2],
    poly_center: Vec2,
    res: Option<&mut Response>,
) -> bool {
    debug_assert_eq!(poly_points.len(), poly_normals.len());

    let corners = rect_points(rect_min, rect_max);
    let rect_center = rect_min + (rect_max - rect_min) * 0.5;
    let mut search = AxisSearch::new();

    for &axis in poly_normals.iter().chain(RECT_AXES.iter()) {
        let a = project_vertices(&corners, axis);
        let b = project_vertices(poly_points, axis);
        if !search.test(axis, a, b) {
            return false;
        }
    }

    let Some(contact) = search.finish(poly_center - rect_center, |axis| {
        (project_vertices(&corners, axis), project_vertices(poly_points, axis))
    }) else {
        return false;
    };
    if let Some(res) = res {
        *res = contact;
    }
    true
}

/// Convex polygon vs convex polygon (SAT) over the edge normals of both.
pub fn polygon_polygon(
    points_a: &[Vec2],
    normals_a: &[Vec2],
    center_a: Vec2,
    points_b: &[Vec2],
    normals_b: &[Vec2],
    center_b: Vec2,
    res: Option<&mut Response>,
) -> bool {
    debug_assert_eq!(points_a.len(), normals_a.len());
    debug_assert_eq!(points_b.len(), normals_b.len());

    let mut search = AxisSearch::new();

    for &axis in normals_a.iter().chain(normals_b) {
        let a = project_vertices(points_a, axis);
        let b = project_vertices(points_b, axis);
        if !search.test(axis, a, b) {
            return false;
        }
    }

    let Some(contact) = search.finish(center_b - center_a, |axis| {
        (project_vertices(points_a, axis), project_vertices(points_b, axis))
    }) else {
        return false;
    };
    if let Some(res) = res {
        *res = contact;
    }
    true
}

/// Inclusive: a point on the circumference is inside.
pub fn point_circle(point: Vec2, circle_pos: Vec2, circle_rad: f32) -> bool {
    point.distance_squared(circle_pos) <= circle_rad * circle_rad
}

/// Strict: a point on the rect's boundary is outside.
pub fn point_rect(point: Vec2, rect_min: Vec2, rect_max: Vec2) -> bool {
    point.x > rect_min.x && point.y > rect_min.y && point.x < rect_max.x && point.y < rect_max.y
}

/// Even-odd ray casting. Works for any simple polygon, convex or not.
pub fn point_polygon(point: Vec2, points: &[Vec2]) -> bool {
    let Some(&last) = points.last() else {
        return false;
    };

    let mut inside = false;
    let mut prev = last;
    for &curr in points {
        // The first check guarantees curr.y != prev.y, so the division is safe.
        if (curr.y >= point.y) != (prev.y >= point.y)
            && point.x <= (prev.x - curr.x) * (point.y - curr.y) / (prev.y - curr.y) + curr.x
        {
            inside = !inside;
        }
        prev = curr;
    }
    inside
}

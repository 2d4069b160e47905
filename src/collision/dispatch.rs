//! Routes a pair of shapes to the matching pairwise test.

use std::sync::OnceLock;

use super::detection;
use super::response::Response;
use crate::shapes::{Shape, ShapeKind};

type CollisionFn = fn(&Shape, &Shape, Option<&mut Response>) -> bool;

#[derive(Clone, Copy)]
struct CollisionCell {
    func: CollisionFn,
    /// The test expects the operands in the opposite order.
    reverse: bool,
}

/// Square table of collision tests indexed by `[kind_a][kind_b]`.
pub struct CollisionTable {
    cells: [[Option<CollisionCell>; ShapeKind::COUNT]; ShapeKind::COUNT],
}

static TABLE: OnceLock<CollisionTable> = OnceLock::new();

impl CollisionTable {
    fn new() -> Self {
        let mut table = CollisionTable { cells: [[None; ShapeKind::COUNT]; ShapeKind::COUNT] };

        table.register(ShapeKind::Circle, ShapeKind::Circle, circle_vs_circle);
        table.register(ShapeKind::Circle, ShapeKind::Rect, circle_vs_rect);
        table.register(ShapeKind::Circle, ShapeKind::Polygon, circle_vs_polygon);
        table.register(ShapeKind::Rect, ShapeKind::Rect, rect_vs_rect);
        table.register(ShapeKind::Rect, ShapeKind::Polygon, rect_vs_polygon);
        table.register(ShapeKind::Polygon, ShapeKind::Polygon, polygon_vs_polygon);

        debug_assert!(table.cells.iter().flatten().all(Option::is_some));
        tracing::trace!("collision table built for {} shape kinds", ShapeKind::COUNT);
        table
    }

    /// The shared table, built on first use.
    pub fn get() -> &'static CollisionTable {
        TABLE.get_or_init(CollisionTable::new)
    }

    /// Fills `[a][b]` and its mirror `[b][a]`, so each unordered pair is registered once.
    fn register(&mut self, a: ShapeKind, b: ShapeKind, func: CollisionFn) {
        self.cells[a.index()][b.index()] = Some(CollisionCell { func, reverse: false });
        if a != b {
            self.cells[b.index()][a.index()] = Some(CollisionCell { func, reverse: true });
        }
    }

    /// Runs the test registered for the kinds of `a` and `b`.
    ///
    /// The response normal always points from `a` towards `b`, whichever order
    /// the underlying test takes its operands in.
    pub fn check(&self, a: &Shape, b: &Shape, mut res: Option<&mut Response>) -> bool {
        let Some(cell) = self.cells[a.kind().index()][b.kind().index()] else {
            tracing::error!(kind_a = ?a.kind(), kind_b = ?b.kind(), "no collision test registered");
            return false;
        };

        if !cell.reverse {
            return (cell.func)(a, b, res);
        }

        let collided = (cell.func)(b, a, res.as_deref_mut());
        if collided {
            if let Some(res) = res {
                *res = res.inverted();
            }
        }
        collided
    }
}

/// Collision between two shapes through the shared table. See [`CollisionTable::check`].
pub fn get_collision(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    CollisionTable::get().check(a, b, res)
}

fn mismatched(a: &Shape, b: &Shape) -> bool {
    tracing::error!(kind_a = ?a.kind(), kind_b = ?b.kind(), "collision test called with the wrong shape kinds");
    false
}

fn circle_vs_circle(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    let (Shape::Circle(ca), Shape::Circle(cb)) = (a, b) else {
        return mismatched(a, b);
    };
    detection::circle_circle(ca.pos, ca.rad, cb.pos, cb.rad, res)
}

fn circle_vs_rect(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    let (Shape::Circle(c), Shape::Rect(r)) = (a, b) else {
        return mismatched(a, b);
    };
    detection::circle_rect(c.pos, c.rad, r.min, r.max, res)
}

fn circle_vs_polygon(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    let (Shape::Circle(c), Shape::Polygon(p)) = (a, b) else {
        return mismatched(a, b);
    };
    detection::circle_polygon(c.pos, c.rad, p.points(), p.normals(), p.center(), res)
}

fn rect_vs_rect(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    let (Shape::Rect(ra), Shape::Rect(rb)) = (a, b) else {
        return mismatched(a, b);
    };
    detection::rect_rect(ra.min, ra.max, rb.min, rb.max, res)
}

fn rect_vs_polygon(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    let (Shape::Rect(r), Shape::Polygon(p)) = (a, b) else {
        return mismatched(a, b);
    };
    detection::rect_polygon(r.min, r.max, p.points(), p.normals(), p.center(), res)
}

fn polygon_vs_polygon(a: &Shape, b: &Shape, res: Option<&mut Response>) -> bool {
    let (Shape::Polygon(pa), Shape::Polygon(pb)) = (a, b) else {
        return mismatched(a, b);
    };
    detection::polygon_polygon(
        pa.points(),
        pa.normals(),
        pa.center(),
        pb.points(),
        pb.normals(),
        pb.center(),
        res,
    )
}

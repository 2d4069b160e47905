//! Iterative separation of one shape from a set of obstacles.

use tracing::{debug, warn};

use crate::shapes::Shape;

/// Passes used by [`separate_default`]. Several passes are needed when
/// pushing out of one obstacle moves the shape into another.
pub const DEFAULT_PASSES: usize = 20;

/// Pushes `shape` out of every overlapping obstacle, repeating for at most
/// `max_passes` passes. Each overlap moves `shape` by its full penetration
/// depth, away from the obstacle.
///
/// Returns `true` if the last pass found no overlap.
pub fn separate(shape: &mut Shape, obstacles: &[Shape], max_passes: usize) -> bool {
    for pass in 0..max_passes {
        let mut moved = 0usize;
        for obstacle in obstacles {
            if let Some(res) = shape.collide(obstacle) {
                shape.translate(res.translation_for_a());
                moved += 1;
            }
        }
        if moved == 0 {
            return true;
        }
        debug!(pass, moved, "separation pass moved shape");
    }

    let clear = obstacles.iter().all(|obstacle| !shape.overlaps(obstacle));
    if !clear {
        warn!(max_passes, shape = %shape, "shape still overlaps after separation");
    }
    clear
}

/// [`separate`] with [`DEFAULT_PASSES`].
pub fn separate_default(shape: &mut Shape, obstacles: &[Shape]) -> bool {
    separate(shape, obstacles, DEFAULT_PASSES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::{Circle, Polygon, Rect};

    fn walls() -> Vec<Shape> {
        // 100x100 box with 10 unit thick walls.
        vec![
            Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 10.0)).into(),
            Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 100.0)).into(),
            Rect::new(Vec2::new(0.0, 90.0), Vec2::new(100.0, 100.0)).into(),
            Rect::new(Vec2::new(90.0, 0.0), Vec2::new(100.0, 100.0)).into(),
        ]
    }

    #[test]
    fn test_separate_already_clear() {
        let mut shape: Shape = Circle::new(Vec2::new(50.0, 50.0), 5.0).into();
        let before = shape.clone();
        assert!(separate(&mut shape, &walls(), 5));
        assert_eq!(shape, before);
    }

    #[test]
    fn test_separate_single_wall() {
        let mut shape: Shape = Circle::new(Vec2::new(12.0, 50.0), 5.0).into();
        assert!(separate_default(&mut shape, &walls()));
        assert!(shape.center().x >= 15.0 - 1e-3);
        assert!(walls().iter().all(|w| !shape.overlaps(w)));
    }

    #[test]
    fn test_separate_corner() {
        // Square polygon overlapping both the bottom and the left wall by 3 units.
        let mut shape: Shape = Polygon::new(vec![
            Vec2::new(7.0, 7.0),
            Vec2::new(17.0, 7.0),
            Vec2::new(17.0, 17.0),
            Vec2::new(7.0, 17.0),
        ])
        .into();
        assert!(separate_default(&mut shape, &walls()));
        assert!(walls().iter().all(|w| !shape.overlaps(w)));
        assert!((shape.center() - Vec2::new(15.0, 15.0)).length() < 1e-4);
    }

    #[test]
    fn test_separate_zero_passes_reports_overlap() {
        let mut shape: Shape = Rect::from_dims(4.0, 4.0, Vec2::new(10.0, 50.0)).into();
        assert!(!separate(&mut shape, &walls(), 0));
    }
}

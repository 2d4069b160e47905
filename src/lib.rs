//! 2D narrow-phase collision detection for circles, axis-aligned rects and
//! convex polygons.
//!
//! Pairwise tests live in [`collision::detection`]; [`Shape::get_collision`]
//! picks the right one for any two shapes and reports a [`Response`] whose
//! normal points from the first shape towards the second.

pub mod collision;
pub mod error;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{Response, AABB};
pub use error::ShapeError;
pub use math::vec2::Vec2;
pub use shapes::{Circle, Polygon, Rect, Shape, ShapeKind};

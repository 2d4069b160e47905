pub mod vec2;

pub use vec2::Vec2;

/// Tolerance used for every guarded division and degenerate-axis check.
pub const EPSILON: f32 = 1e-6;

pub mod aabb;
pub mod detection;
pub mod dispatch;
pub mod resolve;
pub mod response;

// Re-export key types
pub use aabb::AABB;
pub use detection::*;
pub use dispatch::{get_collision, CollisionTable};
pub use resolve::{separate, separate_default};
pub use response::Response;

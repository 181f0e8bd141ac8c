//! Convex polygon geometry and collision resolution for a small 2D engine.
//!
//! Callers construct a [`Polygon`] once per game object, update its position
//! each frame, and ask a [`CollisionManager`] for a minimum translation
//! vector per candidate pair: rectangle-vs-rectangle for cheap AABB tests,
//! polygon-vs-polygon via the Separating Axis Theorem. A zero vector means
//! "no collision"; a non-zero vector separates the pair when applied by the
//! caller. Broad-phase pair selection and physical response are out of
//! scope.

pub mod collision;
pub mod common;
pub mod math;
pub mod shapes;

// Re-export key types for easier use
pub use collision::CollisionManager;
pub use common::{Color, Fill, TextureHandle};
pub use math::{AxisAlignedRect, Vec2};
pub use shapes::{Polygon, ShapeError};

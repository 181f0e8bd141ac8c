pub mod rect;
pub mod vec2;

pub use rect::AxisAlignedRect;
pub use vec2::Vec2;

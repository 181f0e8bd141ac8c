pub mod fill;

pub use fill::{Color, Fill, TextureHandle};

//! Opaque rendering payload carried by shapes.
//!
//! Collision code never inspects these values; they exist so a shape can
//! carry its presentation alongside its geometry, the way the engine's
//! renderer expects. Textures live in an external resource cache and are
//! shared by reference count.

use std::sync::Arc;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

/// Identifies a texture owned by the (external) resource cache. The cache
/// hands these out wrapped in an `Arc`; it evicts the texture once it holds
/// the sole remaining reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    id: u64,
}

impl TextureHandle {
    pub fn new(id: u64) -> Self {
        TextureHandle { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// What a shape is painted with: a solid color or a shared texture.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Color(Color),
    Texture(Arc<TextureHandle>),
}

impl Default for Fill {
    fn default() -> Self {
        Fill::Color(Color::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3), Color::rgba(1, 2, 3, 255));
        assert_eq!(Color::WHITE, Color::rgba(255, 255, 255, 255));
        assert_eq!(Color::BLACK, Color::rgba(0, 0, 0, 255));
    }

    #[test]
    fn test_texture_fill_shares_handle() {
        let handle = Arc::new(TextureHandle::new(7));
        let fill = Fill::Texture(Arc::clone(&handle));
        // One reference held by the cache stand-in, one by the fill
        assert_eq!(Arc::strong_count(&handle), 2);
        drop(fill);
        assert_eq!(Arc::strong_count(&handle), 1);
    }
}

use crate::math::vec2::Vec2;

/// An axis-aligned rectangle in world space, defined by its top-left corner
/// and its extent. Produced by callers (e.g., from a sprite's bounding box);
/// the collision module only consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAlignedRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl AxisAlignedRect {
    /// Creates a new rectangle. Negative extents are normalized so that
    /// `width` and `height` are always non-negative.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        let (left, width) = if width < 0.0 {
            (left + width, -width)
        } else {
            (left, width)
        };
        let (top, height) = if height < 0.0 {
            (top + height, -height)
        } else {
            (top, height)
        };
        AxisAlignedRect {
            left,
            top,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Shifts the rectangle by the given offset, e.g. to apply a minimum
    /// translation vector returned by a collision check.
    pub fn translated(&self, offset: Vec2) -> Self {
        AxisAlignedRect {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }

    /// Creates the tightest rectangle enclosing a set of points.
    /// Returns `None` for an empty set.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = points.first()?;
        let mut min_pt = *first;
        let mut max_pt = *first;
        for point in points.iter().skip(1) {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(AxisAlignedRect {
            left: min_pt.x,
            top: min_pt.y,
            width: max_pt.x - min_pt.x,
            height: max_pt.y - min_pt.y,
        })
    }
}

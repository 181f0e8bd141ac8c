use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::common::fill::{Color, Fill, TextureHandle};
use crate::math::vec2::Vec2;

/// Signed-area sums below this magnitude are treated as degenerate.
const AREA_EPSILON: f64 = 1e-12;

/// Error raised when a vertex list cannot be turned into a polygon.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// No vertices were supplied.
    #[error("polygon needs at least one vertex")]
    Empty,
    /// Three or more vertices were supplied but they describe a concave
    /// shape (at least one reflex angle).
    #[error("vertices do not describe a convex polygon")]
    NotConvex,
}

/// A convex 2D region with a fixed shape and a mutable world placement.
///
/// Vertices are stored in local space exactly as supplied (either winding
/// order). The centroid of the initial ring becomes the `origin`, the pivot
/// that `position` places in world space; world-space vertices are derived
/// as `vertex + (position - origin)`.
///
/// The vertex ring cannot change after construction. `position` is guarded
/// by a per-instance lock, so a polygon can be repositioned by one thread
/// while another queries it; each method call sees a consistent snapshot,
/// but nothing stronger spans two calls.
#[derive(Debug)]
pub struct Polygon {
    vertices: Vec<Vec2>,
    origin: Vec2,
    position: Mutex<Vec2>,
    fill: Fill,
}

impl Polygon {
    /// Creates a polygon from a local vertex ring, an initial world
    /// position, and an opaque rendering payload.
    ///
    /// Fails with [`ShapeError::Empty`] for an empty ring and with
    /// [`ShapeError::NotConvex`] when three or more vertices describe a
    /// concave shape. Rings with fewer than three vertices (a point or a
    /// segment) are trivially convex and accepted.
    pub fn new(vertices: Vec<Vec2>, position: Vec2, fill: Fill) -> Result<Self, ShapeError> {
        if vertices.is_empty() {
            debug!("rejecting polygon with no vertices");
            return Err(ShapeError::Empty);
        }
        if !Self::is_convex(&vertices) {
            debug!(
                vertex_count = vertices.len(),
                "rejecting non-convex vertex ring"
            );
            return Err(ShapeError::NotConvex);
        }

        let origin = Self::centroid(&vertices);
        Ok(Polygon {
            vertices,
            origin,
            position: Mutex::new(position),
            fill,
        })
    }

    /// Convenience constructor for a solid-color polygon.
    pub fn with_color(
        vertices: Vec<Vec2>,
        position: Vec2,
        color: Color,
    ) -> Result<Self, ShapeError> {
        Self::new(vertices, position, Fill::Color(color))
    }

    /// Convenience constructor for a textured polygon. The texture handle is
    /// shared with the resource cache that owns it.
    pub fn with_texture(
        vertices: Vec<Vec2>,
        position: Vec2,
        texture: Arc<TextureHandle>,
    ) -> Result<Self, ShapeError> {
        Self::new(vertices, position, Fill::Texture(texture))
    }

    /// The current world placement of the polygon's origin.
    pub fn position(&self) -> Vec2 {
        *self.position.lock()
    }

    /// Moves the polygon so that its origin sits at `position`.
    pub fn set_position(&self, position: Vec2) {
        *self.position.lock() = position;
    }

    /// The centroid of the initial vertex ring, the pivot for repositioning.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// The rendering payload. Opaque to collision logic.
    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True for point and segment shapes (fewer than three vertices).
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Returns the current world-space vertex ring as a fresh vector.
    ///
    /// The position lock is read once; the returned points never alias
    /// internal storage.
    pub fn points(&self) -> Vec<Vec2> {
        let offset = self.position() - self.origin;
        self.vertices.iter().map(|v| *v + offset).collect()
    }

    /// Returns one separating-axis candidate per vertex: the left
    /// perpendicular of each normalized edge `(Vi, V(i+1) mod n)`.
    ///
    /// Edge direction is translation-invariant, so axes come straight from
    /// the local ring without touching the position lock. Parallel
    /// duplicates (e.g. opposite edges of a rectangle) are not
    /// deduplicated; a zero-length edge from a repeated point yields the
    /// zero vector, which collision checks skip.
    pub fn axes(&self) -> Vec<Vec2> {
        let n = self.vertices.len();
        let mut axes = Vec::with_capacity(n);
        for i in 0..n {
            let edge = self.vertices[(i + 1) % n] - self.vertices[i];
            axes.push(edge.normalize().perpendicular());
        }
        axes
    }

    /// Classifies a vertex ring as convex by walking vertex triples
    /// `(Pi, Pi+1, Pi+2)` mod n and comparing the sign of each turn's cross
    /// product against the first nonzero turn. A sign flip marks a reflex
    /// angle. Collinear triples produce a zero cross product and are
    /// compatible with either winding.
    fn is_convex(points: &[Vec2]) -> bool {
        let n = points.len();
        if n < 3 {
            // Points and segments are trivially convex.
            return true;
        }

        let mut baseline = 0.0_f64;
        for i in 0..n {
            let edge_a = points[(i + 1) % n] - points[i];
            let edge_b = points[(i + 2) % n] - points[(i + 1) % n];
            let turn = edge_a.cross(edge_b);
            if turn == 0.0 {
                continue;
            }
            if baseline == 0.0 {
                baseline = turn;
            } else if (turn > 0.0) != (baseline > 0.0) {
                return false;
            }
        }
        true
    }

    /// Computes the centroid of a vertex ring with the shoelace-based
    /// polygon centroid formula. Rings with fewer than three vertices, or
    /// with (near-)zero area, have no well-defined area centroid; those
    /// fall back to the vertex average.
    fn centroid(points: &[Vec2]) -> Vec2 {
        let n = points.len();
        if n < 3 {
            return Self::vertex_average(points);
        }

        let mut area = 0.0;
        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            area += a.cross(b);
        }
        area /= 2.0;

        if area.abs() < AREA_EPSILON {
            return Self::vertex_average(points);
        }

        let mut centroid = Vec2::ZERO;
        for i in 0..n {
            let a = points[i];
            let b = points[(i + 1) % n];
            let cross = a.cross(b);
            centroid += Vec2::new((a.x + b.x) * cross, (a.y + b.y) * cross);
        }
        centroid * (1.0 / (6.0 * area))
    }

    fn vertex_average(points: &[Vec2]) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for point in points {
            sum += *point;
        }
        sum * (1.0 / points.len() as f64)
    }
}

impl Clone for Polygon {
    fn clone(&self) -> Self {
        Polygon {
            vertices: self.vertices.clone(),
            origin: self.origin,
            position: Mutex::new(self.position()),
            fill: self.fill.clone(),
        }
    }
}

use parking_lot::Mutex;
use tracing::trace;

use super::projection::Projection;
use crate::math::rect::AxisAlignedRect;
use crate::math::vec2::Vec2;
use crate::shapes::polygon::Polygon;

/// Axes shorter than this (squared) cannot separate anything and are
/// skipped. They arise from repeated points in degenerate rings.
const AXIS_EPSILON_SQ: f64 = 1e-12;

/// Stateless host for pairwise overlap tests.
///
/// Holds no shape state, only a lock that serializes concurrent calls on
/// the same instance. Both checks return a minimum translation vector:
/// the zero vector means "no collision"; a non-zero vector points from
/// shape A toward shape B's exterior, so applying it to B (or its negation
/// to A) separates the pair. The caller applies the MTV; nothing is moved
/// automatically.
#[derive(Debug, Default)]
pub struct CollisionManager {
    lock: Mutex<()>,
}

impl CollisionManager {
    pub fn new() -> Self {
        CollisionManager {
            lock: Mutex::new(()),
        }
    }

    /// Tests two axis-aligned rectangles, resolving with the full overlap
    /// (push factor 1).
    pub fn check_rects(&self, a: &AxisAlignedRect, b: &AxisAlignedRect) -> Vec2 {
        self.check_rects_pushed(a, b, 1.0)
    }

    /// Tests two axis-aligned rectangles for overlap.
    ///
    /// Resolution happens along the axis of smaller overlap, which
    /// minimizes displacement. The returned component is the overlap
    /// scaled by `push_factor`, negative when `a` is left of (above) `b`
    /// and positive otherwise.
    pub fn check_rects_pushed(
        &self,
        a: &AxisAlignedRect,
        b: &AxisAlignedRect,
        push_factor: f64,
    ) -> Vec2 {
        let _guard = self.lock.lock();

        let mut mtv = Vec2::ZERO;

        // Span of both rectangles on x: rightmost edge minus leftmost edge.
        let proj_x = a.right().max(b.right()) - a.left.min(b.left);
        if proj_x < a.width + b.width {
            let proj_y = a.bottom().max(b.bottom()) - a.top.min(b.top);
            if proj_y < a.height + b.height {
                let overlap_x = a.width + b.width - proj_x;
                let overlap_y = a.height + b.height - proj_y;

                if overlap_x < overlap_y {
                    mtv.x = overlap_x * if a.left < b.left { -push_factor } else { push_factor };
                } else {
                    mtv.y = overlap_y * if a.top < b.top { -push_factor } else { push_factor };
                }
            }
        }

        mtv
    }

    /// Tests two convex polygons with the Separating Axis Theorem.
    ///
    /// Every edge normal of both polygons is tested; the first axis with a
    /// projection gap proves separation and short-circuits to the zero
    /// vector. When all axes overlap, the axis of minimum penetration is
    /// scaled by its overlap amount (axes are unit vectors, so this is a
    /// plain vector scaling) and oriented so it points from `a` toward `b`.
    pub fn check_polygons(&self, a: &Polygon, b: &Polygon) -> Vec2 {
        let _guard = self.lock.lock();

        if a.vertex_count() == 0 || b.vertex_count() == 0 {
            trace!("polygon check skipped: empty vertex ring");
            return Vec2::ZERO;
        }

        // One world-space snapshot per polygon for the whole check, so a
        // concurrent reposition cannot tear the axis loop.
        let points_a = a.points();
        let points_b = b.points();

        let mut min_overlap = f64::MAX;
        let mut min_axis = Vec2::ZERO;

        for axis in a.axes().into_iter().chain(b.axes()) {
            if axis.magnitude_squared() < AXIS_EPSILON_SQ {
                continue;
            }

            let proj_a = Projection::of_points(&points_a, axis);
            let proj_b = Projection::of_points(&points_b, axis);

            if !proj_a.overlaps(&proj_b) {
                // Separating axis found, the shapes cannot intersect.
                return Vec2::ZERO;
            }

            let amount = proj_a.overlap_amount(&proj_b);
            if amount < min_overlap {
                min_overlap = amount;
                min_axis = axis;
            }
        }

        if min_axis == Vec2::ZERO {
            // No usable axis at all (both shapes are single points).
            return Vec2::ZERO;
        }

        let mut mtv = min_axis * min_overlap;

        // Orient the MTV so it pushes b away from a rather than into it.
        let direction = b.position() - a.position();
        if mtv.dot(direction) < 0.0 {
            mtv = -mtv;
        }

        mtv
    }
}

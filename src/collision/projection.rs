use crate::math::vec2::Vec2;

/// Scalar extrema of a point set projected onto a single axis.
///
/// Exists only for the duration of one SAT axis test; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Projects every point onto `axis` and records the extrema.
    pub fn of_points(points: &[Vec2], axis: Vec2) -> Projection {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            let d = point.dot(axis);
            min = min.min(d);
            max = max.max(d);
        }
        Projection { min, max }
    }

    /// True when the two intervals overlap. Touching intervals
    /// (`max == min`) count as separated.
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.max <= other.min || other.max <= self.min)
    }

    /// The 1D overlap amount `min(maxA, maxB) - max(minA, minB)`.
    /// Positive exactly when the intervals overlap.
    pub fn overlap_amount(&self, other: &Projection) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_projection_extrema() {
        let points = [
            Vec2::new(1.0, 0.0),
            Vec2::new(3.0, 5.0),
            Vec2::new(-2.0, 1.0),
        ];
        let proj = Projection::of_points(&points, Vec2::new(1.0, 0.0));
        assert!((proj.min - -2.0).abs() < EPSILON);
        assert!((proj.max - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_overlapping_intervals() {
        let a = Projection { min: 0.0, max: 2.0 };
        let b = Projection { min: 1.0, max: 3.0 };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!((a.overlap_amount(&b) - 1.0).abs() < EPSILON);
        assert!((b.overlap_amount(&a) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_disjoint_intervals() {
        let a = Projection { min: 0.0, max: 1.0 };
        let b = Projection { min: 2.0, max: 3.0 };
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_touching_intervals_are_separated() {
        let a = Projection { min: 0.0, max: 1.0 };
        let b = Projection { min: 1.0, max: 2.0 };
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_contained_interval() {
        let outer = Projection {
            min: -2.0,
            max: 2.0,
        };
        let inner = Projection {
            min: -0.5,
            max: 0.5,
        };
        assert!(outer.overlaps(&inner));
        // Containment overlaps by the inner interval's full width.
        assert!((outer.overlap_amount(&inner) - 1.0).abs() < EPSILON);
    }
}

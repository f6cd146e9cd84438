use orienteer_core::{Point, Point3, Scale};

/// Chebyshev (L∞) distance: the number of 8-connected steps between two cells.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Sum of scaled distances between consecutive points of `path`.
///
/// Repeated points contribute zero, so stitched segments that share their
/// junction waypoint can be measured as one sequence.
pub fn path_length(path: &[Point3], scale: Scale) -> f64 {
    path.windows(2)
        .map(|w| w[0].distance(w[1], scale))
        .fold(0.0, |acc, d| acc + d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: i32, y: i32, z: f64) -> Point3 {
        Point3::new(x, y, z).unwrap()
    }

    #[test]
    fn chebyshev_counts_diagonal_steps() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(2, 2)), 2);
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(-3, 1)), 3);
        assert_eq!(chebyshev(Point::new(4, 4), Point::new(4, 4)), 0);
    }

    #[test]
    fn path_length_sums_segments() {
        let path = [p(0, 0, 0.0), p(1, 1, 0.0), p(2, 2, 0.0)];
        assert_relative_eq!(path_length(&path, Scale::UNIT), 2.0 * 2f64.sqrt());
    }

    #[test]
    fn path_length_of_trivial_paths_is_zero() {
        assert_eq!(path_length(&[], Scale::UNIT), 0.0);
        assert_eq!(path_length(&[p(3, 3, 1.0)], Scale::UNIT), 0.0);
        assert_eq!(path_length(&[p(3, 3, 1.0), p(3, 3, 1.0)], Scale::UNIT), 0.0);
        assert!(path_length(&[], Scale::UNIT).is_sign_positive());
    }

    #[test]
    fn path_length_includes_climb() {
        let path = [p(0, 0, 0.0), p(1, 0, 10.0)];
        let s = Scale::new(10.0, 10.0, 1.0);
        assert_relative_eq!(path_length(&path, s), 200f64.sqrt());
    }
}

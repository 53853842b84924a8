//! General-purpose helpers for arbitrary (not necessarily axis-aligned) geometry

use super::types::Point;

/// Intersection point of segments `p1-p2` and `p3-p4`.
///
/// The intersection of the two supporting lines is returned only when it
/// lies within both finite segments, bounds included. Parallel and
/// collinear segments have no single intersection and return `None`.
pub fn intersect_segments(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let denominator = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denominator == 0.0 {
        return None;
    }
    let a = p1.x * p2.y - p2.x * p1.y;
    let b = p3.x * p4.y - p3.y * p4.x;
    let hit = Point::new(
        (a * (p3.x - p4.x) - (p1.x - p2.x) * b) / denominator,
        (a * (p3.y - p4.y) - (p1.y - p2.y) * b) / denominator,
    );
    (is_within_bounds(hit, p1, p2) && is_within_bounds(hit, p3, p4)).then_some(hit)
}

fn is_within_bounds(p: Point, a: Point, b: Point) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Angle in degrees swept from `start` to `moving` around `center`.
///
/// Uses screen coordinates (y grows downward), so a positive angle is a
/// clockwise turn on screen. The result is the raw `atan2` difference and
/// lies in `(-360, 360)`.
pub fn rotation_by_points(start: Point, moving: Point, center: Point) -> f64 {
    let from = (start.y - center.y).atan2(start.x - center.x);
    let to = (moving.y - center.y).atan2(moving.x - center.x);
    (to - from).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        let hit = intersect_segments(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(20.0, 20.0),
            Point::new(120.0, 20.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_crossing_segments_intersect() {
        let hit = intersect_segments(
            Point::new(50.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(0.0, 20.0),
            Point::new(120.0, 20.0),
        );
        assert_eq!(hit, Some(Point::new(50.0, 20.0)));
    }

    #[test]
    fn test_lines_meet_outside_segments() {
        let hit = intersect_segments(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
            Point::new(30.0, -10.0),
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let angle = rotation_by_points(
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(150.0, 150.0),
        );
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_is_antisymmetric() {
        let sqrt3 = 3.0_f64.sqrt();
        let a = Point::new(100.0 + 50.0 * sqrt3, 50.0);
        let b = Point::new(100.0 + 50.0 * sqrt3, 150.0);
        let center = Point::new(100.0, 100.0);
        let forward = rotation_by_points(a, b, center);
        let back = rotation_by_points(b, a, center);
        assert!((forward - 60.0).abs() < 1e-9);
        assert!((forward + back).abs() < 1e-9);
    }
}

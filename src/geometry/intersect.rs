//! Intersection tests for axis-aligned segments and rectangles
//!
//! Every test here assumes horizontal or vertical segments. With that
//! restriction two segments intersect exactly when both their x and y
//! projections overlap, which keeps the checks to a handful of comparisons.

use super::types::{Line, Point, Rect};

/// Check `x` lies strictly inside the interval spanned by `a` and `b`, in either order
pub fn is_number_between(x: f64, a: f64, b: f64) -> bool {
    (x - a) * (x - b) < 0.0
}

/// Check whether intervals `[a, b]` and `[c, d]` overlap.
///
/// True when any endpoint of one interval lies strictly inside the other.
/// Intervals that only share an endpoint do not overlap, and a degenerate
/// interval never overlaps anything sharing its single value.
pub fn is_segment_overlap_1d(a: f64, b: f64, c: f64, d: f64) -> bool {
    is_number_between(a, c, d)
        || is_number_between(b, c, d)
        || is_number_between(c, a, b)
        || is_number_between(d, a, b)
}

/// Check whether two axis-aligned segments intersect
pub fn do_lines_intersect(l1: &Line, l2: &Line) -> bool {
    is_segment_overlap_1d(l1.from.x, l1.to.x, l2.from.x, l2.to.x)
        && is_segment_overlap_1d(l1.from.y, l1.to.y, l2.from.y, l2.to.y)
}

/// Check whether an axis-aligned segment enters a rectangle.
///
/// A segment enters when either endpoint is strictly inside, when it crosses
/// one of the four boundary edges, or when it crosses one of the two center
/// cross lines. The cross lines catch a segment that runs from one edge
/// straight to the opposite edge, which touches no edge in the strict sense.
pub fn does_line_intersect_rect(line: &Line, rect: &Rect) -> bool {
    if rect.contains(line.from) || rect.contains(line.to) {
        return true;
    }
    rect.edges()
        .iter()
        .chain(rect.cross_lines().iter())
        .any(|edge| do_lines_intersect(line, edge))
}

/// Check whether any segment of an orthogonal path enters a rectangle
pub fn does_path_intersect_rect(path: &[Point], rect: &Rect) -> bool {
    path.windows(2)
        .any(|pair| does_line_intersect_rect(&Line::new(pair[0], pair[1]), rect))
}

/// Keep only the paths that stay clear of both rectangles
pub fn valid_paths(paths: Vec<Vec<Point>>, first: &Rect, second: &Rect) -> Vec<Vec<Point>> {
    paths
        .into_iter()
        .filter(|path| {
            !does_path_intersect_rect(path, first) && !does_path_intersect_rect(path, second)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_number_between_is_open() {
        assert!(is_number_between(5.0, 0.0, 10.0));
        assert!(is_number_between(5.0, 10.0, 0.0));
        assert!(!is_number_between(0.0, 0.0, 10.0));
        assert!(!is_number_between(10.0, 0.0, 10.0));
        assert!(!is_number_between(11.0, 0.0, 10.0));
    }

    #[test]
    fn test_overlap_1d() {
        assert!(is_segment_overlap_1d(0.0, 5.0, 3.0, 8.0));
        assert!(is_segment_overlap_1d(8.0, 3.0, 0.0, 5.0));
        assert!(is_segment_overlap_1d(0.0, 10.0, 5.0, 5.0));
        // touching at an endpoint
        assert!(!is_segment_overlap_1d(0.0, 5.0, 5.0, 8.0));
        // two degenerate intervals at the same value
        assert!(!is_segment_overlap_1d(5.0, 5.0, 5.0, 5.0));
        assert!(!is_segment_overlap_1d(0.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn test_crossing_lines_intersect() {
        assert!(do_lines_intersect(
            &line(0.0, 5.0, 10.0, 5.0),
            &line(5.0, 0.0, 5.0, 10.0)
        ));
    }

    #[test]
    fn test_t_junction_does_not_intersect() {
        // vertical segment ends exactly on the horizontal one
        assert!(!do_lines_intersect(
            &line(0.0, 5.0, 10.0, 5.0),
            &line(5.0, 0.0, 5.0, 5.0)
        ));
    }

    #[test]
    fn test_line_through_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(does_line_intersect_rect(&line(-5.0, 5.0, 15.0, 5.0), &rect));
        assert!(does_line_intersect_rect(&line(-5.0, 2.0, 5.0, 2.0), &rect));
    }

    #[test]
    fn test_line_along_edge_is_clear() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!does_line_intersect_rect(&line(-5.0, 0.0, 15.0, 0.0), &rect));
        assert!(!does_line_intersect_rect(&line(10.0, 2.0, 10.0, 0.0), &rect));
    }

    #[test]
    fn test_line_edge_to_edge_is_caught() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(does_line_intersect_rect(&line(8.0, 0.0, 8.0, 10.0), &rect));
    }

    #[test]
    fn test_line_outside_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!does_line_intersect_rect(&line(12.0, 0.0, 12.0, 20.0), &rect));
    }

    #[test]
    fn test_path_intersection() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let clear = vec![
            Point::new(10.0, 2.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(8.0, 10.0),
        ];
        assert!(!does_path_intersect_rect(&clear, &rect));

        let through = vec![Point::new(10.0, 2.0), Point::new(2.0, 2.0), Point::new(2.0, 20.0)];
        assert!(does_path_intersect_rect(&through, &rect));
    }
}

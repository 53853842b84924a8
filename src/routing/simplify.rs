//! Removal of duplicate points and zero-length spikes from a finished route

use crate::geometry::Point;

/// Drop repeated points and immediate reversals.
///
/// Points are compared after truncating their coordinates, so jitter below
/// one unit does not produce extra vertices. A point equal to the last kept
/// point is skipped; a point equal to the one before that removes the last
/// kept point instead, collapsing an `A -> B -> A` spike to `A`.
///
/// A match that is only equal after truncation is applied when the points
/// it touches lie on one line through the next point, so every kept segment
/// stays axis-aligned. The first and last points are always kept exactly.
/// Passes repeat until nothing changes.
pub fn simplify_path(path: &[Point]) -> Vec<Point> {
    let mut current = simplify_pass(path);
    loop {
        let next = simplify_pass(&current);
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn simplify_pass(path: &[Point]) -> Vec<Point> {
    let mut simplified: Vec<Point> = Vec::with_capacity(path.len());
    for (index, &point) in path.iter().enumerate() {
        let next = path.get(index + 1).copied();
        let len = simplified.len();
        if len >= 1 {
            let last = simplified[len - 1];
            if last == point
                || (last.same_cell(point)
                    && next.is_some_and(|next| collinear(&[last, point, next])))
            {
                continue;
            }
        }
        if len >= 2 {
            let before = simplified[len - 2];
            let last = simplified[len - 1];
            if before == point
                || (before.same_cell(point)
                    && next.is_some_and(|next| collinear(&[before, last, point, next])))
            {
                simplified.pop();
                continue;
            }
        }
        simplified.push(point);
    }
    simplified
}

fn collinear(points: &[Point]) -> bool {
    match points.split_first() {
        Some((first, rest)) => {
            rest.iter().all(|p| p.x == first.x) || rest.iter().all(|p| p.y == first.y)
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(f64, f64)]) -> Vec<Point> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_removes_duplicates() {
        let p = path(&[(0.0, 0.0), (0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (5.0, 5.0)]);
        assert_eq!(simplify_path(&p), path(&[(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)]));
    }

    #[test]
    fn test_collapses_spike() {
        let p = path(&[(10.0, 5.0), (13.0, 5.0), (13.0, 6.0), (13.0, 5.0), (16.0, 5.0)]);
        assert_eq!(simplify_path(&p), path(&[(10.0, 5.0), (13.0, 5.0), (16.0, 5.0)]));
    }

    #[test]
    fn test_ignores_sub_unit_jitter() {
        let p = path(&[(0.0, 0.0), (0.0, 0.4), (0.0, 5.0)]);
        assert_eq!(simplify_path(&p), path(&[(0.0, 0.0), (0.0, 5.0)]));
    }

    #[test]
    fn test_collapses_jittered_spike_on_one_line() {
        let p = path(&[(0.0, 0.0), (0.0, 5.0), (0.0, 9.0), (0.0, 5.5), (0.0, 12.0)]);
        assert_eq!(simplify_path(&p), path(&[(0.0, 0.0), (0.0, 5.0), (0.0, 12.0)]));
    }

    #[test]
    fn test_jittered_spike_before_a_bend_stays_orthogonal() {
        let p = path(&[(10.0, 5.2), (13.0, 5.2), (13.0, 6.0), (13.0, 5.7), (16.0, 5.7)]);
        assert_eq!(simplify_path(&p), p);
    }

    #[test]
    fn test_keeps_final_point_within_last_cell() {
        let p = path(&[(10.0, 2.0), (10.25, 2.0), (10.25, 11.0), (10.25, 12.3), (10.5, 12.3)]);
        let simplified = simplify_path(&p);
        assert_eq!(simplified.first(), Some(&Point::new(10.0, 2.0)));
        assert_eq!(simplified.last(), Some(&Point::new(10.5, 12.3)));
        for pair in simplified.windows(2) {
            assert!(pair[0].x == pair[1].x || pair[0].y == pair[1].y);
        }
    }

    #[test]
    fn test_keeps_genuine_bends() {
        let p = path(&[(2.0, 12.0), (2.0, 2.0), (12.0, 2.0)]);
        assert_eq!(simplify_path(&p), p);
    }

    #[test]
    fn test_idempotent() {
        let p = path(&[
            (0.0, 0.0),
            (0.0, 4.0),
            (0.0, 4.0),
            (3.0, 4.0),
            (0.0, 4.0),
            (0.0, 9.0),
        ]);
        let once = simplify_path(&p);
        assert_eq!(simplify_path(&once), once);
    }

    #[test]
    fn test_empty() {
        assert!(simplify_path(&[]).is_empty());
    }
}

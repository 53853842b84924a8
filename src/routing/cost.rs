//! Manhattan-length ranking of candidate paths

use crate::geometry::Point;

/// Sum of the Manhattan lengths of every segment.
///
/// For orthogonal paths this equals the drawn length.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|pair| pair[0].manhattan(pair[1])).sum()
}

/// The cheapest candidate, or `None` if there are none.
///
/// Ties go to the candidate listed first.
pub fn cheapest(candidates: Vec<Vec<Point>>) -> Option<Vec<Point>> {
    let mut best: Option<(f64, Vec<Point>)> = None;
    for path in candidates {
        let cost = path_cost(&path);
        let improves = best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost);
        if improves {
            best = Some((cost, path));
        }
    }
    best.map(|(_, path)| path)
}

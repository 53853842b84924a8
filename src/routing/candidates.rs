//! Candidate path generators
//!
//! Each generator turns a pair of anchors into a small, fixed set of literal
//! polylines under one heuristic. Generators never pick a winner; they hand
//! their candidates to the strategy selector, which filters and ranks them.

use crate::geometry::intersect::valid_paths;
use crate::geometry::{Direction, Point, Rect};

use super::skeleton::{Bend, Skeleton};
use super::Anchor;

/// The two single-inflection links between two points: horizontal-first, then vertical-first
fn sil_skeletons(from: Point, to: Point) -> [Skeleton; 2] {
    [
        Skeleton::new(from).bend_to(Bend::HorizontalFirst, to),
        Skeleton::new(from).bend_to(Bend::VerticalFirst, to),
    ]
}

/// The two L-shaped links between two points: horizontal-first, then vertical-first.
///
/// If the points share an axis both links are collinear and describe the
/// same straight line.
pub fn sils_between(from: Point, to: Point) -> [Vec<Point>; 2] {
    sil_skeletons(from, to).map(|sil| sil.resolve())
}

/// Midpoint of the middle two values, i.e. the center of the gap or overlap
/// between intervals `[a, b]` and `[c, d]`
fn center_of_gap(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut values = [a, b, c, d];
    values.sort_by(f64::total_cmp);
    values[1] + (values[2] - values[1]) / 2.0
}

/// Center of the gap (or overlap) between two rectangles on both axes
pub fn gap_center(first: &Rect, second: &Rect) -> Point {
    Point::new(
        center_of_gap(first.left, first.right(), second.left, second.right()),
        center_of_gap(first.top, first.bottom(), second.top, second.bottom()),
    )
}

/// Paths crossing through the gap center: horizontal-through-center first,
/// then vertical-through-center
pub fn gap_center_paths(from: Point, to: Point, center: Point) -> [Vec<Point>; 2] {
    [
        Skeleton::new(from)
            .bend_to(Bend::HorizontalFirst, center)
            .bend_to(Bend::VerticalFirst, to)
            .resolve(),
        Skeleton::new(from)
            .bend_to(Bend::VerticalFirst, center)
            .bend_to(Bend::HorizontalFirst, to)
            .resolve(),
    ]
}

/// The two corners bounding the side `direction` exits from
pub fn moving_points(rect: &Rect, direction: Direction) -> [Point; 2] {
    let [a, b, c, d] = rect.corners();
    match direction {
        Direction::Top => [a, b],
        Direction::Right => [b, c],
        Direction::Bottom => [c, d],
        Direction::Left => [d, a],
    }
}

/// Walk two corners around `rect` so the walk stays clear of `other`.
///
/// Returns `[near, far]`: the corner reached first along the exit side and
/// the corner after it. Of the two walks implied by the exit direction,
/// exactly one is expected to clear `other`. When the rectangles overlap
/// too deeply for that to hold, the first clear walk (or the first walk) is
/// taken and the resulting route is best-effort.
fn moving_twice(rect: &Rect, direction: Direction, other: &Rect) -> [Point; 2] {
    let [a, b, c, d] = rect.corners();
    let walks = match direction {
        Direction::Top => [[a, d], [b, c]],
        Direction::Right => [[b, a], [c, d]],
        Direction::Bottom => [[c, b], [d, a]],
        Direction::Left => [[a, b], [d, c]],
    };
    let clear: Vec<[Point; 2]> = walks
        .into_iter()
        .filter(|walk| !other.contains(walk[0]) && !other.contains(walk[1]))
        .collect();
    if clear.len() != 1 {
        tracing::warn!(
            %direction,
            clear = clear.len(),
            "corner walk is ambiguous, rectangles probably overlap"
        );
    }
    clear.first().copied().unwrap_or(walks[0])
}

/// Candidates that step around a rectangle twice before linking with a SIL.
///
/// Used when the gap center is trapped inside a rectangle. Source-side
/// candidates walk the source rectangle and link its far corner to the
/// destination anchor; destination-side candidates link the source anchor to
/// the destination's far corner and walk back to the destination anchor.
/// Candidates are unfiltered, source-side first.
pub fn two_step_candidates(from: &Anchor, to: &Anchor) -> Vec<Vec<Point>> {
    let [from_near, from_far] = moving_twice(&from.rect, from.direction, &to.rect);
    let [to_near, to_far] = moving_twice(&to.rect, to.direction, &from.rect);

    let from_walk = Skeleton::new(from.point).line_to(from_near).line_to(from_far);
    let to_walk = Skeleton::new(to_far).line_to(to_near).line_to(to.point);

    let source_side = sil_skeletons(from_far, to.point)
        .into_iter()
        .map(|sil| from_walk.clone().then(sil).resolve());
    let destination_side = sil_skeletons(from.point, to_far)
        .into_iter()
        .map(|sil| sil.then(to_walk.clone()).resolve());

    source_side.chain(destination_side).collect()
}

/// Project each anchor onto the corners of its exit side and link with a SIL.
///
/// Four combinations are tried: source corner 1 and 2 to the destination
/// anchor, then the source anchor to destination corner 1 and 2. For each
/// combination the first SIL that keeps the whole path clear of both
/// rectangles is kept; combinations with no clear SIL are dropped.
pub fn corner_projection_candidates(from: &Anchor, to: &Anchor) -> Vec<Vec<Point>> {
    let first_clear = |paths: Vec<Vec<Point>>| {
        valid_paths(paths, &from.rect, &to.rect).into_iter().next()
    };

    let from_corners = moving_points(&from.rect, from.direction);
    let to_corners = moving_points(&to.rect, to.direction);

    let heads = from_corners.into_iter().filter_map(|corner| {
        let paths = sil_skeletons(corner, to.point)
            .into_iter()
            .map(|sil| Skeleton::new(from.point).line_to(corner).then(sil).resolve())
            .collect();
        first_clear(paths)
    });
    let tails = to_corners.into_iter().filter_map(|corner| {
        let paths = sil_skeletons(from.point, corner)
            .into_iter()
            .map(|sil| sil.line_to(to.point).resolve())
            .collect();
        first_clear(paths)
    });

    heads.chain(tails).collect()
}

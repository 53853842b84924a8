//! The routing decision procedure
//!
//! Every route is decided by one pass over a fixed ladder of strategies:
//!
//! 1. Anchors inside the other rectangle: take the cheaper raw SIL.
//! 2. Inverse exit directions: cross through the gap center.
//!    Other pairs: a single-inflection link between the anchors.
//! 3. Project the anchors onto their exit-side corners.
//! 4. Take the cheaper raw SIL regardless of the rectangles.
//!
//! Stages 2 and 3 only accept paths clear of both rectangles, so they may
//! produce nothing; stage 4 always produces a path.

use std::fmt;

use serde::Serialize;

use crate::geometry::intersect::valid_paths;
use crate::geometry::{Direction, Point};

use super::candidates::{
    corner_projection_candidates, gap_center, gap_center_paths, sils_between, two_step_candidates,
};
use super::config::{RouterConfig, SilTieBreak};
use super::cost::{cheapest, path_cost};
use super::Anchor;

/// The strategy that produced a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// An anchor sits inside the other rectangle; rectangle checks are skipped
    ForcedOverlap,
    /// Inverse directions routed through the gap between the rectangles
    GapCenter,
    /// A single bend between the anchors
    SingleInflection,
    /// A single bend from one anchor's exit-side corner
    CornerProjection,
    /// Last resort: a single bend ignoring the rectangles
    ForcedSil,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::ForcedOverlap => "forced-overlap",
            Strategy::GapCenter => "gap-center",
            Strategy::SingleInflection => "single-inflection",
            Strategy::CornerProjection => "corner-projection",
            Strategy::ForcedSil => "forced-sil",
        };
        f.write_str(name)
    }
}

/// Run the decision procedure, returning the winning strategy and its raw path
pub(crate) fn select(from: &Anchor, to: &Anchor, config: &RouterConfig) -> (Strategy, Vec<Point>) {
    if to.rect.contains(from.point) || from.rect.contains(to.point) {
        return (Strategy::ForcedOverlap, forced_sil(from.point, to.point));
    }

    let preferred = if from.direction.is_inverse_of(to.direction) {
        gap_center_route(from, to).map(|path| (Strategy::GapCenter, path))
    } else {
        single_inflection_route(from, to, config.tie_break)
            .map(|path| (Strategy::SingleInflection, path))
    };
    if let Some(found) = preferred {
        return found;
    }

    tracing::trace!("preferred strategy found no clear path, projecting corners");
    if let Some(path) = cheapest(corner_projection_candidates(from, to)) {
        return (Strategy::CornerProjection, path);
    }

    tracing::trace!("corner projection found no clear path, forcing a SIL");
    (Strategy::ForcedSil, forced_sil(from.point, to.point))
}

fn forced_sil(from: Point, to: Point) -> Vec<Point> {
    let [horizontal, vertical] = sils_between(from, to);
    if path_cost(&vertical) < path_cost(&horizontal) {
        vertical
    } else {
        horizontal
    }
}

fn gap_center_route(from: &Anchor, to: &Anchor) -> Option<Vec<Point>> {
    let center = gap_center(&from.rect, &to.rect);

    if from.rect.contains(center) || to.rect.contains(center) {
        let candidates = valid_paths(two_step_candidates(from, to), &from.rect, &to.rect);
        tracing::trace!(
            clear = candidates.len(),
            %center,
            "gap center trapped, stepping around corners"
        );
        return cheapest(candidates);
    }

    let [horizontal, vertical] = gap_center_paths(from.point, to.point, center);
    let horizontal_clear = valid_paths(vec![horizontal], &from.rect, &to.rect).pop();
    let vertical_clear = valid_paths(vec![vertical], &from.rect, &to.rect).pop();
    match (horizontal_clear, vertical_clear) {
        (Some(horizontal), Some(vertical)) => Some(if from.direction.is_horizontal() {
            horizontal
        } else {
            vertical
        }),
        (Some(path), None) | (None, Some(path)) => Some(path),
        (None, None) => None,
    }
}

fn single_inflection_route(
    from: &Anchor,
    to: &Anchor,
    tie_break: SilTieBreak,
) -> Option<Vec<Point>> {
    let [horizontal, vertical] = sils_between(from.point, to.point);
    let horizontal_clear = valid_paths(vec![horizontal], &from.rect, &to.rect).pop();
    let vertical_clear = valid_paths(vec![vertical], &from.rect, &to.rect).pop();
    match (horizontal_clear, vertical_clear) {
        (Some(horizontal), Some(vertical)) => Some(match tie_break {
            SilTieBreak::FirstCandidate => horizontal,
            SilTieBreak::ExitDirection => {
                if first_direction(&horizontal) == Some(from.direction) {
                    horizontal
                } else {
                    vertical
                }
            }
        }),
        (Some(path), None) | (None, Some(path)) => Some(path),
        (None, None) => None,
    }
}

/// Direction of the first segment of an orthogonal path
fn first_direction(path: &[Point]) -> Option<Direction> {
    let direction = match path {
        [a, b, ..] => Direction::between(*a, *b),
        _ => None,
    };
    debug_assert!(direction.is_some(), "first segment is not axis-aligned");
    direction
}

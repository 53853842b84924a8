//! Orthogonal connector routing between two rectangles
//!
//! The router takes two anchors, each a point on a rectangle boundary with
//! the direction its connector leaves toward, and returns an axis-aligned
//! polyline between them. Candidate shapes come from [`candidates`], the
//! choice between them is made by [`strategy`], and the winner is cleaned up
//! by [`simplify`].

pub mod candidates;
pub mod config;
pub mod cost;
pub mod simplify;
pub mod skeleton;
pub mod strategy;

pub use config::{RouterConfig, SilTieBreak};
pub use cost::path_cost;
pub use simplify::simplify_path;
pub use strategy::Strategy;

use crate::geometry::{Direction, Point, Rect};

/// A connector end: a point on a rectangle boundary and the side it leaves from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub rect: Rect,
    pub point: Point,
    pub direction: Direction,
}

impl Anchor {
    pub fn new(rect: Rect, point: Point, direction: Direction) -> Self {
        Self {
            rect,
            point,
            direction,
        }
    }

    /// Anchor at the midpoint of the side facing `direction`
    pub fn at_side(rect: Rect, direction: Direction) -> Self {
        Self::new(rect, rect.anchor(direction), direction)
    }
}

/// A routed connector together with the strategy that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutcome {
    pub path: Vec<Point>,
    pub strategy: Strategy,
}

impl RouteOutcome {
    /// True unless the route had to ignore the rectangles
    pub fn is_clear(&self) -> bool {
        !matches!(self.strategy, Strategy::ForcedOverlap | Strategy::ForcedSil)
    }
}

/// Routes connectors under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route a connector from one anchor to another
    pub fn route(&self, from: &Anchor, to: &Anchor) -> RouteOutcome {
        let (strategy, raw) = strategy::select(from, to, &self.config);
        let path = if self.config.simplify {
            simplify_path(&raw)
        } else {
            raw
        };
        tracing::debug!(
            %strategy,
            from = %from.point,
            to = %to.point,
            points = path.len(),
            "connector routed"
        );
        RouteOutcome { path, strategy }
    }
}

/// Route a connector with the default configuration
///
/// # Example
///
/// ```rust
/// use orthoroute::{route, Direction, Point, Rect};
///
/// let path = route(
///     Rect::new(0.0, 0.0, 10.0, 10.0),
///     Point::new(10.0, 5.0),
///     Direction::Right,
///     Rect::new(16.0, 2.0, 10.0, 8.0),
///     Point::new(16.0, 5.0),
///     Direction::Left,
/// );
/// assert_eq!(path, vec![Point::new(10.0, 5.0), Point::new(13.0, 5.0), Point::new(16.0, 5.0)]);
/// ```
pub fn route(
    from_rect: Rect,
    from_point: Point,
    from_direction: Direction,
    to_rect: Rect,
    to_point: Point,
    to_direction: Direction,
) -> Vec<Point> {
    let from = Anchor::new(from_rect, from_point, from_direction);
    let to = Anchor::new(to_rect, to_point, to_direction);
    Router::default().route(&from, &to).path
}

/// Pick the facing sides for a connector between two rectangles.
///
/// Stacked rectangles connect bottom to top, side-by-side rectangles right
/// to left, and everything else along whichever axis the centers are
/// further apart on.
pub fn facing_sides(from: &Rect, to: &Rect) -> (Direction, Direction) {
    let dx = to.center().x - from.center().x;
    let dy = to.center().y - from.center().y;

    let h_overlap = from.left < to.right() && from.right() > to.left;
    let v_overlap = from.top < to.bottom() && from.bottom() > to.top;

    let vertical = if h_overlap != v_overlap {
        h_overlap
    } else {
        dy.abs() > dx.abs()
    };

    if vertical {
        if dy > 0.0 {
            (Direction::Bottom, Direction::Top)
        } else {
            (Direction::Top, Direction::Bottom)
        }
    } else if dx > 0.0 {
        (Direction::Right, Direction::Left)
    } else {
        (Direction::Left, Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_simplifies_spike() {
        let path = route(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Point::new(10.0, 5.0),
            Direction::Right,
            Rect::new(16.0, 2.0, 10.0, 8.0),
            Point::new(16.0, 5.0),
            Direction::Left,
        );
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_route_without_simplify_keeps_spike() {
        let router = Router::new(RouterConfig::new().with_simplify(false));
        let from = Anchor::new(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Point::new(10.0, 5.0),
            Direction::Right,
        );
        let to = Anchor::new(
            Rect::new(16.0, 2.0, 10.0, 8.0),
            Point::new(16.0, 5.0),
            Direction::Left,
        );
        let outcome = router.route(&from, &to);
        assert_eq!(outcome.strategy, Strategy::GapCenter);
        assert_eq!(outcome.path.len(), 5);
        assert!(outcome.is_clear());
    }

    #[test]
    fn test_fractional_anchors_keep_jittered_bends() {
        let path = route(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Point::new(10.0, 5.2),
            Direction::Right,
            Rect::new(16.0, 2.0, 10.0, 8.0),
            Point::new(16.0, 5.7),
            Direction::Left,
        );
        assert_eq!(
            path,
            vec![
                Point::new(10.0, 5.2),
                Point::new(13.0, 5.2),
                Point::new(13.0, 6.0),
                Point::new(13.0, 5.7),
                Point::new(16.0, 5.7),
            ]
        );
    }

    #[test]
    fn test_sub_unit_gap_reaches_destination() {
        let to_point = Point::new(10.5, 12.3);
        let path = route(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Point::new(10.0, 2.0),
            Direction::Right,
            Rect::new(10.5, 12.0, 10.0, 10.0),
            to_point,
            Direction::Left,
        );
        assert_eq!(path.first(), Some(&Point::new(10.0, 2.0)));
        assert_eq!(path.last(), Some(&to_point));
        for pair in path.windows(2) {
            assert!(
                (pair[0].x == pair[1].x) != (pair[0].y == pair[1].y),
                "{} -> {} is not axis-aligned",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_anchor_at_side() {
        let anchor = Anchor::at_side(Rect::new(0.0, 0.0, 20.0, 10.0), Direction::Bottom);
        assert_eq!(anchor.point, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_facing_sides_stacked() {
        let top = Rect::new(0.0, 0.0, 100.0, 50.0);
        let bottom = Rect::new(10.0, 100.0, 100.0, 50.0);
        assert_eq!(facing_sides(&top, &bottom), (Direction::Bottom, Direction::Top));
        assert_eq!(facing_sides(&bottom, &top), (Direction::Top, Direction::Bottom));
    }

    #[test]
    fn test_facing_sides_side_by_side() {
        let left = Rect::new(0.0, 0.0, 100.0, 50.0);
        let right = Rect::new(200.0, 20.0, 100.0, 50.0);
        assert_eq!(facing_sides(&left, &right), (Direction::Right, Direction::Left));
        assert_eq!(facing_sides(&right, &left), (Direction::Left, Direction::Right));
    }

    #[test]
    fn test_facing_sides_diagonal_uses_dominant_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 30.0, 10.0, 10.0);
        assert_eq!(facing_sides(&a, &b), (Direction::Right, Direction::Left));
    }
}

//! Path skeletons: literal waypoints joined by legs that may carry a bend
//!
//! Candidate generators describe a route as a start point followed by legs.
//! Each leg ends at a literal point and may insert one elbow on the way,
//! whose coordinates come from the leg's two ends. Resolving a skeleton is a
//! pure transform into a concrete point list.

use crate::geometry::Point;

/// Which axis a single bend travels first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bend {
    /// Elbow at `(to.x, from.y)`
    HorizontalFirst,
    /// Elbow at `(from.x, to.y)`
    VerticalFirst,
}

impl Bend {
    fn elbow(self, from: Point, to: Point) -> Point {
        match self {
            Bend::HorizontalFirst => Point::new(to.x, from.y),
            Bend::VerticalFirst => Point::new(from.x, to.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Leg {
    bend: Option<Bend>,
    to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    start: Point,
    legs: Vec<Leg>,
}

impl Skeleton {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            legs: Vec::new(),
        }
    }

    /// Continue straight to `to`
    pub fn line_to(mut self, to: Point) -> Self {
        self.legs.push(Leg { bend: None, to });
        self
    }

    /// Continue to `to` through a single elbow
    pub fn bend_to(mut self, bend: Bend, to: Point) -> Self {
        self.legs.push(Leg {
            bend: Some(bend),
            to,
        });
        self
    }

    /// Append every waypoint of `other` after this skeleton's end.
    ///
    /// The start of `other` is dropped; it is expected to coincide with the
    /// current end.
    pub fn then(mut self, other: Skeleton) -> Self {
        self.legs.extend(other.legs);
        self
    }

    pub fn resolve(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(1 + self.legs.len() * 2);
        let mut from = self.start;
        points.push(from);
        for leg in &self.legs {
            if let Some(bend) = leg.bend {
                points.push(bend.elbow(from, leg.to));
            }
            points.push(leg.to);
            from = leg.to;
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bends_resolve_from_neighbours() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 3.0);
        let horizontal = Skeleton::new(a).bend_to(Bend::HorizontalFirst, b).resolve();
        let vertical = Skeleton::new(a).bend_to(Bend::VerticalFirst, b).resolve();
        assert_eq!(horizontal, vec![a, Point::new(4.0, 0.0), b]);
        assert_eq!(vertical, vec![a, Point::new(0.0, 3.0), b]);
    }

    #[test]
    fn test_then_drops_joined_start() {
        let head = Skeleton::new(Point::new(0.0, 0.0)).line_to(Point::new(0.0, 5.0));
        let tail =
            Skeleton::new(Point::new(0.0, 5.0)).bend_to(Bend::HorizontalFirst, Point::new(3.0, 8.0));
        assert_eq!(
            head.then(tail).resolve(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.0, 5.0),
                Point::new(3.0, 5.0),
                Point::new(3.0, 8.0),
            ]
        );
    }
}

//! Core geometric types shared by the router

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another point
    pub fn manhattan(&self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Equality after truncating both coordinates toward zero.
    ///
    /// Sub-unit jitter is ignored, so `(2.3, 4.9)` and `(2.7, 4.1)` compare
    /// equal.
    pub fn same_cell(&self, other: Point) -> bool {
        self.x.trunc() == other.x.trunc() && self.y.trunc() == other.y.trunc()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Strict interior test: points on the boundary are not contained
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.left
            && point.y > self.top
            && point.x < self.right()
            && point.y < self.bottom()
    }

    /// Corners clockwise from the top-left: top-left, top-right, bottom-right, bottom-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right(), self.top),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left, self.bottom()),
        ]
    }

    /// The four boundary edges, clockwise from the top edge
    pub fn edges(&self) -> [Line; 4] {
        let [a, b, c, d] = self.corners();
        [Line::new(a, b), Line::new(b, c), Line::new(c, d), Line::new(d, a)]
    }

    /// Vertical line through the horizontal center and horizontal line
    /// through the vertical center
    pub fn cross_lines(&self) -> [Line; 2] {
        let center = self.center();
        [
            Line::new(
                Point::new(center.x, self.top),
                Point::new(center.x, self.bottom()),
            ),
            Line::new(
                Point::new(self.left, center.y),
                Point::new(self.right(), center.y),
            ),
        ]
    }

    /// Midpoint of the side facing `direction`
    pub fn anchor(&self, direction: Direction) -> Point {
        let center = self.center();
        match direction {
            Direction::Top => Point::new(center.x, self.top),
            Direction::Right => Point::new(self.right(), center.y),
            Direction::Bottom => Point::new(center.x, self.bottom()),
            Direction::Left => Point::new(self.left, center.y),
        }
    }
}

/// An ordered pair of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Side of a rectangle a connector leaves toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// True for `Left` and `Right`
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when the two directions point exactly away from each other
    pub fn is_inverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Direction of travel along the axis-aligned segment `from -> to`.
    ///
    /// Returns `None` when the points differ on both axes. Coincident points
    /// yield `Bottom`, the same as any vertical segment with a non-negative
    /// drop.
    pub fn between(from: Point, to: Point) -> Option<Direction> {
        if from.x == to.x {
            Some(if to.y < from.y {
                Direction::Top
            } else {
                Direction::Bottom
            })
        } else if from.y == to.y {
            Some(if to.x < from.x {
                Direction::Left
            } else {
                Direction::Right
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

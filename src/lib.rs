//! Orthoroute - orthogonal connector routing for diagram renderers
//!
//! Given two non-overlapping rectangles, an anchor point on each boundary and
//! the side each connector leaves from, the router produces an axis-aligned
//! polyline between the anchors that avoids both rectangles and keeps bends
//! and length low.
//!
//! # Example
//!
//! ```rust
//! use orthoroute::{route, Direction, Point, Rect};
//!
//! let path = route(
//!     Rect::new(0.0, 12.0, 10.0, 10.0),
//!     Point::new(2.0, 12.0),
//!     Direction::Top,
//!     Rect::new(12.0, 0.0, 10.0, 10.0),
//!     Point::new(12.0, 2.0),
//!     Direction::Left,
//! );
//! assert_eq!(path, vec![Point::new(2.0, 12.0), Point::new(2.0, 2.0), Point::new(12.0, 2.0)]);
//! ```

pub mod error;
pub mod geometry;
pub mod request;
pub mod routing;

pub use error::RequestError;
pub use geometry::{intersect_segments, rotation_by_points, Direction, Line, Point, Rect};
pub use request::{format_text, format_toml, Request, RoutedConnector};
pub use routing::{
    facing_sides, route, Anchor, RouteOutcome, Router, RouterConfig, SilTieBreak, Strategy,
};

//! Route request files
//!
//! A request lists connectors between pairs of rectangles, optionally with a
//! `[router]` table overriding the router configuration:
//!
//! ```toml
//! [router]
//! tie-break = "exit-direction"
//!
//! [[connector]]
//! name = "a-to-b"
//! from = { rect = { left = 0, top = 0, width = 10, height = 10 }, direction = "right" }
//! to = { rect = { left = 16, top = 2, width = 10, height = 8 }, point = { x = 16, y = 5 }, direction = "left" }
//! ```
//!
//! A missing `point` defaults to the midpoint of the side named by
//! `direction`. When either end omits `direction`, both ends use the
//! facing sides of the two rectangles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{End, RequestError};
use crate::geometry::{Direction, Point, Rect};
use crate::routing::{facing_sides, Anchor, Router, RouterConfig, Strategy};

/// One end of a requested connector
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndSpec {
    pub rect: Rect,
    pub point: Option<Point>,
    pub direction: Option<Direction>,
}

/// A requested connector between two rectangles
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConnectorSpec {
    pub name: Option<String>,
    pub from: EndSpec,
    pub to: EndSpec,
}

impl ConnectorSpec {
    /// Resolve both ends to anchors, filling in defaults
    pub fn anchors(&self) -> (Anchor, Anchor) {
        let (from_direction, to_direction) = match (self.from.direction, self.to.direction) {
            (Some(from), Some(to)) => (from, to),
            _ => facing_sides(&self.from.rect, &self.to.rect),
        };
        let anchor = |end: &EndSpec, direction: Direction| match end.point {
            Some(point) => Anchor::new(end.rect, point, direction),
            None => Anchor::at_side(end.rect, direction),
        };
        (
            anchor(&self.from, from_direction),
            anchor(&self.to, to_direction),
        )
    }

    fn validate(&self, name: &str) -> Result<(), RequestError> {
        validate_end(&self.from, name, End::From)?;
        validate_end(&self.to, name, End::To)
    }
}

fn validate_end(end: &EndSpec, name: &str, which: End) -> Result<(), RequestError> {
    let rect = &end.rect;
    if !Point::new(rect.left, rect.top).is_finite() {
        return Err(RequestError::non_finite(name, which));
    }
    for (label, value) in [("width", rect.width), ("height", rect.height)] {
        if !value.is_finite() {
            return Err(RequestError::invalid_rect(
                name,
                which,
                format!("{label} is not finite"),
            ));
        }
        if value < 0.0 {
            return Err(RequestError::invalid_rect(
                name,
                which,
                format!("{label} is negative"),
            ));
        }
    }
    if end.point.is_some_and(|point| !point.is_finite()) {
        return Err(RequestError::non_finite(name, which));
    }
    Ok(())
}

/// A parsed request file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default, rename = "connector")]
    pub connectors: Vec<ConnectorSpec>,
}

impl Request {
    /// Load a request from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, RequestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a request from a TOML string
    pub fn from_str(content: &str) -> Result<Self, RequestError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate and route every connector in order
    pub fn route_all(&self) -> Result<Vec<RoutedConnector>, RequestError> {
        let router = Router::new(self.router.clone());
        self.connectors
            .iter()
            .enumerate()
            .map(|(index, spec)| -> Result<RoutedConnector, RequestError> {
                let name = spec
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("connector-{}", index + 1));
                spec.validate(&name)?;
                let (from, to) = spec.anchors();
                let outcome = router.route(&from, &to);
                if !outcome.is_clear() {
                    tracing::warn!(
                        connector = %name,
                        strategy = %outcome.strategy,
                        "route crosses a rectangle"
                    );
                }
                Ok(RoutedConnector {
                    name,
                    strategy: outcome.strategy,
                    path: outcome.path,
                })
            })
            .collect()
    }
}

/// A routed connector ready for output
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedConnector {
    pub name: String,
    pub strategy: Strategy,
    pub path: Vec<Point>,
}

/// Render routes as one `name: (x, y) -> (x, y)` line each
pub fn format_text(routes: &[RoutedConnector]) -> String {
    let mut out = String::new();
    for route in routes {
        let points = route
            .path
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        out.push_str(&format!("{}: {}\n", route.name, points));
    }
    out
}

#[derive(Serialize)]
struct TomlRoutes<'a> {
    route: Vec<TomlRoute<'a>>,
}

#[derive(Serialize)]
struct TomlRoute<'a> {
    name: &'a str,
    strategy: Strategy,
    points: Vec<[f64; 2]>,
}

/// Render routes as `[[route]]` TOML tables
pub fn format_toml(routes: &[RoutedConnector]) -> Result<String, RequestError> {
    let doc = TomlRoutes {
        route: routes
            .iter()
            .map(|route| TomlRoute {
                name: &route.name,
                strategy: route.strategy,
                points: route.path.iter().map(|p| [p.x, p.y]).collect(),
            })
            .collect(),
    };
    Ok(toml::to_string(&doc)?)
}

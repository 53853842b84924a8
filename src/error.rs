//! Error types for loading and answering route requests
//!
//! Routing itself cannot fail; these errors come from reading, validating
//! and writing request files.

use thiserror::Error;

/// Which end of a connector an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    From,
    To,
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::From => f.write_str("from"),
            End::To => f.write_str("to"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to read request file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse request TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to write routes as TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// Rectangle with a negative or non-finite dimension
    #[error("invalid rectangle on '{connector}' ({end}): {reason}")]
    InvalidRect {
        connector: String,
        end: End,
        reason: String,
    },

    /// Anchor point or rectangle origin with a non-finite coordinate
    #[error("non-finite coordinate on '{connector}' ({end})")]
    NonFinitePoint { connector: String, end: End },
}

impl RequestError {
    /// Create an invalid rectangle error
    pub fn invalid_rect(connector: impl Into<String>, end: End, reason: impl Into<String>) -> Self {
        Self::InvalidRect {
            connector: connector.into(),
            end,
            reason: reason.into(),
        }
    }

    /// Create a non-finite coordinate error
    pub fn non_finite(connector: impl Into<String>, end: End) -> Self {
        Self::NonFinitePoint {
            connector: connector.into(),
            end,
        }
    }

    /// Name of the connector the error refers to, if any
    pub fn connector(&self) -> Option<&str> {
        match self {
            Self::InvalidRect { connector, .. } | Self::NonFinitePoint { connector, .. } => {
                Some(connector.as_str())
            }
            _ => None,
        }
    }
}

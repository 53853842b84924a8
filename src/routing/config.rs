//! Configuration for the router

use serde::Deserialize;

/// How to choose between two clear single-inflection links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SilTieBreak {
    /// Prefer the link whose first segment leaves in the source exit direction
    #[default]
    ExitDirection,
    /// Always take the horizontal-first link
    FirstCandidate,
}

/// Configuration options for routing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RouterConfig {
    /// Tie-break between two clear single-inflection links
    pub tie_break: SilTieBreak,

    /// Remove duplicate points and spikes from the winning path
    pub simplify: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            tie_break: SilTieBreak::default(),
            simplify: true,
        }
    }
}

impl RouterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-inflection tie-break rule
    pub fn with_tie_break(mut self, tie_break: SilTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Enable or disable path simplification
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }
}

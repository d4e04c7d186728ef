//! Path classification relative to the start node.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// How a node relates to the start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathType {
    /// Start node or one of its transitive parents.
    Main,
    /// In the start node's weak component, but not an ancestor.
    Connected,
    /// Neither.
    Outer,
}

impl PathType {
    /// Classify a node from its membership in the ancestry and component sets.
    ///
    /// Ancestry wins over component membership.
    pub fn classify<ID: Eq + Hash>(id: &ID, main: &HashSet<ID>, connected: &HashSet<ID>) -> Self {
        if main.contains(id) {
            Self::Main
        } else if connected.contains(id) {
            Self::Connected
        } else {
            Self::Outer
        }
    }

    /// Parse a path type from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "MAIN" => Some(Self::Main),
            "CONNECTED" => Some(Self::Connected),
            "OUTER" => Some(Self::Outer),
            _ => None,
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "MAIN"),
            Self::Connected => write!(f, "CONNECTED"),
            Self::Outer => write!(f, "OUTER"),
        }
    }
}

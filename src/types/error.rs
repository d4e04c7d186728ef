//! Error taxonomy for graph processing.
//!
//! Callers branch on [`ProcessingErrorKind`], so the set of kinds is closed
//! and validation reports them in a fixed order (see [`crate::validation`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a graph processing failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingErrorKind {
    /// Start node id is missing.
    NullStartId,
    /// Node collection is missing or empty.
    NullOrEmptyGraph,
    /// At least one node has no id.
    NullNodes,
    /// Two or more nodes share an id.
    DuplicatedNodes,
    /// Start node id names no node in the collection.
    StartNodeNotInGraph,
    /// Anything validation did not anticipate.
    NotSpecified,
}

impl ProcessingErrorKind {
    /// Stable name of the kind, as rendered in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NullStartId => "NULL_START_ID",
            Self::NullOrEmptyGraph => "NULL_OR_EMPTY_GRAPH",
            Self::NullNodes => "NULL_NODES",
            Self::DuplicatedNodes => "DUPLICATED_NODES",
            Self::StartNodeNotInGraph => "START_NODE_NOT_IN_GRAPH",
            Self::NotSpecified => "NOT_SPECIFIED",
        }
    }

    /// Parse a kind from its stable name.
    ///
    /// Accepts the legacy `STAR_NODE_NOT_IN_GRAPH` spelling.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "NULL_START_ID" => Some(Self::NullStartId),
            "NULL_OR_EMPTY_GRAPH" => Some(Self::NullOrEmptyGraph),
            "NULL_NODES" => Some(Self::NullNodes),
            "DUPLICATED_NODES" => Some(Self::DuplicatedNodes),
            "START_NODE_NOT_IN_GRAPH" | "STAR_NODE_NOT_IN_GRAPH" => Some(Self::StartNodeNotInGraph),
            "NOT_SPECIFIED" => Some(Self::NotSpecified),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by graph processing.
///
/// Carries a kind to branch on and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} - {message}")]
pub struct GraphProcessingError {
    kind: ProcessingErrorKind,
    message: String,
}

impl GraphProcessingError {
    /// Create an error with a kind and message.
    pub fn new(kind: ProcessingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create an error whose message is the kind name.
    pub fn from_kind(kind: ProcessingErrorKind) -> Self {
        Self::new(kind, kind.as_str())
    }

    /// Create a [`ProcessingErrorKind::NotSpecified`] error.
    pub fn unspecified(message: impl Into<String>) -> Self {
        Self::new(ProcessingErrorKind::NotSpecified, message)
    }

    /// Kind of this error.
    pub fn kind(&self) -> ProcessingErrorKind {
        self.kind
    }

    /// Message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ProcessingErrorKind> for GraphProcessingError {
    fn from(kind: ProcessingErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

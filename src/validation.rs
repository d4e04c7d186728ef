//! Structural validation of parse input.
//!
//! Runs before any graph work. Checks are fail-fast and ordered; callers
//! branch on the reported kind, so the order below is part of the contract:
//!
//! 1. start id present → else `NULL_START_ID`
//! 2. node collection present and non-empty → else `NULL_OR_EMPTY_GRAPH`
//! 3. every node has an id → else `NULL_NODES`
//! 4. ids are unique → else `DUPLICATED_NODES`
//! 5. start id names a node → else `START_NODE_NOT_IN_GRAPH`
//!
//! Cyclic parent relations are not checked. Feeding a cycle to the kernel is
//! a precondition violation and its result is unspecified.

use std::collections::HashSet;

use crate::types::{GraphProcessingError, ProcessingErrorKind, RelatedNode};

/// Validation stage of the parse pipeline.
pub trait GraphValidator {
    /// Check the input, reporting the first violation.
    fn validate<N: RelatedNode>(
        &self,
        nodes: Option<&[N]>,
        start_node_id: Option<&N::Id>,
    ) -> Result<(), GraphProcessingError>;
}

/// Stock validator enforcing the ordered structural checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }
}

impl GraphValidator for StructuralValidator {
    fn validate<N: RelatedNode>(
        &self,
        nodes: Option<&[N]>,
        start_node_id: Option<&N::Id>,
    ) -> Result<(), GraphProcessingError> {
        let Some(start_node_id) = start_node_id else {
            return Err(GraphProcessingError::new(
                ProcessingErrorKind::NullStartId,
                "Start node id is null",
            ));
        };

        let nodes = match nodes {
            Some(nodes) if !nodes.is_empty() => nodes,
            _ => {
                return Err(GraphProcessingError::new(
                    ProcessingErrorKind::NullOrEmptyGraph,
                    "Input collection with graph is null or empty",
                ))
            }
        };

        if nodes.iter().any(|node| node.id().is_none()) {
            return Err(GraphProcessingError::new(
                ProcessingErrorKind::NullNodes,
                "At least one wrapped node is null or has id null",
            ));
        }

        let ids: HashSet<&N::Id> = nodes.iter().filter_map(|node| node.id()).collect();
        if ids.len() != nodes.len() {
            return Err(GraphProcessingError::new(
                ProcessingErrorKind::DuplicatedNodes,
                "Nodes have duplicates",
            ));
        }

        if !ids.contains(start_node_id) {
            return Err(GraphProcessingError::new(
                ProcessingErrorKind::StartNodeNotInGraph,
                "Lack of start node",
            ));
        }

        Ok(())
    }
}

/// Validate with the stock rules.
pub fn validate<N: RelatedNode>(
    nodes: Option<&[N]>,
    start_node_id: Option<&N::Id>,
) -> Result<(), GraphProcessingError> {
    StructuralValidator.validate(nodes, start_node_id)
}

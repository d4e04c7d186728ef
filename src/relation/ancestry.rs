//! Breadth-first ancestry closure.

use std::collections::{HashMap, HashSet, VecDeque};

use super::DirectionalRelationQuery;
use crate::types::{GraphProcessingError, RelatedNode};
use crate::validation::GraphValidator;

/// Finds every id the start node transitively descends from.
///
/// ## Algorithm
///
/// 1. Index nodes by id
/// 2. Seed the queue and the visited set with the start id
/// 3. Pop a node; for each related id not yet visited and present in the
///    index, mark it visited and enqueue it
/// 4. The visited set is the closure
///
/// Iterative with an explicit queue, so deep ancestries do not grow the call
/// stack. O(V + E).
#[derive(Debug, Clone, Copy, Default)]
pub struct AncestryFinder;

impl AncestryFinder {
    /// Create a new finder.
    pub fn new() -> Self {
        Self
    }

    /// Validate the input, then walk it.
    ///
    /// For standalone use; the parse pipeline validates once up front and
    /// calls [`DirectionalRelationQuery::find_all_connected_ids`] directly.
    pub fn find_checked<V, N>(
        &self,
        validator: &V,
        nodes: Option<&[N]>,
        start_node_id: Option<&N::Id>,
    ) -> Result<HashSet<N::Id>, GraphProcessingError>
    where
        V: GraphValidator,
        N: RelatedNode,
    {
        validator.validate(nodes, start_node_id)?;
        match (nodes, start_node_id) {
            (Some(nodes), Some(start)) => Ok(self.find_all_connected_ids(start, nodes)),
            _ => Err(GraphProcessingError::unspecified(
                "Validator accepted input without nodes or start node id",
            )),
        }
    }
}

impl DirectionalRelationQuery for AncestryFinder {
    fn find_all_connected_ids<N: RelatedNode>(
        &self,
        start_node_id: &N::Id,
        nodes: &[N],
    ) -> HashSet<N::Id> {
        let by_id: HashMap<&N::Id, &N> = nodes
            .iter()
            .filter_map(|node| node.id().map(|id| (id, node)))
            .collect();

        let mut visited: HashSet<N::Id> = HashSet::new();
        let mut queue: VecDeque<&N> = VecDeque::new();

        visited.insert(start_node_id.clone());
        if let Some(start) = by_id.get(start_node_id) {
            queue.push_back(start);
        }

        while let Some(node) = queue.pop_front() {
            for related_id in node.related_ids() {
                if visited.contains(related_id) {
                    continue;
                }
                // Dangling reference: nothing to walk into.
                let Some(related) = by_id.get(related_id) else {
                    continue;
                };
                visited.insert(related_id.clone());
                queue.push_back(related);
            }
        }

        visited
    }
}

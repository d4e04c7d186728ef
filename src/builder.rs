//! Node materialization and edge wiring.
//!
//! The builder moves input records into an arena, wires parent/child index
//! sets from the edge set, then classifies every node and hands the arena to
//! an immutable [`ParseResult`].
//!
//! ```text
//! Vec<N> ──build──► NodeArena ──wire(edges)──► NodeArena ──classify──► ParseResult
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::{
    EdgeSet, GraphNode, GraphProcessingError, NodeId, NodeIndex, ParentGivenNode, ParseResult,
    ParseStats, PathType,
};

/// Outcome of wiring an edge set into an arena.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WiringReport {
    /// Edges whose both ends name a node.
    pub wired: usize,
    /// Edges dropped because an end names no node.
    pub dangling: usize,
}

/// Unclassified nodes under construction.
#[derive(Debug)]
pub struct NodeArena<ID, T> {
    ids: Vec<ID>,
    payloads: Vec<T>,
    parents: Vec<BTreeSet<NodeIndex>>,
    children: Vec<BTreeSet<NodeIndex>>,
    index: HashMap<ID, NodeIndex>,
}

impl<ID: NodeId, T> NodeArena<ID, T> {
    /// Move every record into the arena, in input order, with no links.
    ///
    /// Input is expected to have passed validation. A record without an id or
    /// an id seen twice is reported as [`NotSpecified`], which only a
    /// permissive custom validator can let through.
    ///
    /// [`NotSpecified`]: crate::types::ProcessingErrorKind::NotSpecified
    pub fn build<N>(nodes: Vec<N>) -> Result<Self, GraphProcessingError>
    where
        N: ParentGivenNode<Id = ID, Payload = T>,
    {
        let mut arena = Self {
            ids: Vec::with_capacity(nodes.len()),
            payloads: Vec::with_capacity(nodes.len()),
            parents: Vec::with_capacity(nodes.len()),
            children: Vec::with_capacity(nodes.len()),
            index: HashMap::with_capacity(nodes.len()),
        };

        for node in nodes {
            let id = ParentGivenNode::id(&node)
                .cloned()
                .ok_or_else(|| GraphProcessingError::unspecified("Node without id reached the builder"))?;

            let position = NodeIndex::new(arena.ids.len());
            if arena.index.insert(id.clone(), position).is_some() {
                return Err(GraphProcessingError::unspecified(format!(
                    "Node id {id:?} collides in the arena"
                )));
            }

            arena.ids.push(id);
            arena.payloads.push(node.into_payload());
            arena.parents.push(BTreeSet::new());
            arena.children.push(BTreeSet::new());
        }

        Ok(arena)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Arena index of a node id.
    pub fn index_of(&self, id: &ID) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Link both ends of every edge that names two nodes; drop the rest.
    pub fn wire(&mut self, edges: &EdgeSet<ID>) -> WiringReport {
        let mut report = WiringReport::default();

        for edge in edges {
            match (self.index_of(&edge.parent), self.index_of(&edge.child)) {
                (Some(parent), Some(child)) => {
                    self.children[parent.index()].insert(child);
                    self.parents[child.index()].insert(parent);
                    report.wired += 1;
                }
                _ => report.dangling += 1,
            }
        }

        report
    }

    /// Classify every node and freeze the arena.
    ///
    /// `stats` arrives with the stage counters filled; path-type counters are
    /// added here.
    pub fn classify(
        self,
        start_node_id: &ID,
        main: &HashSet<ID>,
        connected: &HashSet<ID>,
        mut stats: ParseStats,
    ) -> Result<ParseResult<ID, T>, GraphProcessingError> {
        let start = self
            .index_of(start_node_id)
            .ok_or_else(|| GraphProcessingError::unspecified("Start node missing from the arena"))?;

        let Self {
            ids,
            payloads,
            parents,
            children,
            index,
        } = self;

        stats.node_count = ids.len();
        let nodes: Vec<GraphNode<ID, T>> = ids
            .into_iter()
            .zip(payloads)
            .zip(parents.into_iter().zip(children))
            .map(|((id, payload), (parents, children))| {
                let path_type = PathType::classify(&id, main, connected);
                stats.record_path_type(path_type);
                GraphNode::new(id, payload, path_type, parents, children)
            })
            .collect();

        Ok(ParseResult::from_parts(start, nodes, index, stats))
    }
}

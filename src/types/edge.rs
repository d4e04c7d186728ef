//! Edge types for the graph kernel.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::node::{NodeId, ParentGivenNode};

/// Directed edge from a declared parent to the node that declared it.
///
/// Edges are derived from input, never supplied by callers. The parent end
/// may name an id that has no node (a dangling reference).
/// Implements `Ord` when `ID: Ord` for canonical ordering: (parent, child).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<ID> {
    /// Parent node id (source).
    pub parent: ID,
    /// Child node id (target).
    pub child: ID,
}

impl<ID> Edge<ID> {
    /// Create a new edge.
    pub fn new(parent: ID, child: ID) -> Self {
        Self { parent, child }
    }
}

// Canonical ordering: parent, then child
impl<ID: Ord> PartialOrd for Edge<ID> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<ID: Ord> Ord for Edge<ID> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.parent.cmp(&other.parent) {
            std::cmp::Ordering::Equal => self.child.cmp(&other.child),
            ord => ord,
        }
    }
}

/// Deduplicated edge collection.
///
/// Iterates in first-seen order, so anything driven by the edge list is a
/// pure function of input order.
#[derive(Debug, Clone)]
pub struct EdgeSet<ID> {
    edges: Vec<Edge<ID>>,
    seen: HashSet<Edge<ID>>,
}

impl<ID: NodeId> EdgeSet<ID> {
    /// Create an empty edge set.
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Derive edges from declared parent ids.
    ///
    /// One edge `(parent, node)` per declared parent of every node; parents
    /// are not checked for existence. Nodes without an id contribute nothing.
    pub fn extract<N>(nodes: &[N]) -> Self
    where
        N: ParentGivenNode<Id = ID>,
    {
        let mut set = Self::new();
        for node in nodes {
            let Some(child) = node.id() else { continue };
            for parent in node.parent_ids() {
                set.insert(Edge::new(parent.clone(), child.clone()));
            }
        }
        set
    }

    /// Insert an edge. Returns `false` if it was already present.
    pub fn insert(&mut self, edge: Edge<ID>) -> bool {
        if self.seen.contains(&edge) {
            return false;
        }
        self.seen.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    /// Check whether an edge is present.
    pub fn contains(&self, edge: &Edge<ID>) -> bool {
        self.seen.contains(edge)
    }

    /// Number of distinct edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate edges in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<ID>> {
        self.edges.iter()
    }

    /// Edges as a slice, in first-seen order.
    pub fn as_slice(&self) -> &[Edge<ID>] {
        &self.edges
    }
}

impl<ID: NodeId> Default for EdgeSet<ID> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, ID> IntoIterator for &'a EdgeSet<ID> {
    type Item = &'a Edge<ID>;
    type IntoIter = std::slice::Iter<'a, Edge<ID>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

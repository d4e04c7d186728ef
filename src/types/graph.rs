//! Parsed graph types.
//!
//! A [`ParseResult`] owns every node in a single arena. Parent and child
//! links are arena indices, so nodes never hold references to each other and
//! the graph is dropped as a whole.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::GraphProcessingError;
use super::node::NodeId;
use super::path::PathType;
use crate::canonical::canonical_hash_hex;
use crate::LINEAGE_KERNEL_SCHEMA_VERSION;

/// Position of a node in its [`ParseResult`] arena.
///
/// Indices follow input order and are only meaningful for the result that
/// produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Create an index from a raw position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw position in the arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the parsed graph.
///
/// Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct GraphNode<ID, T> {
    id: ID,
    payload: T,
    path_type: PathType,
    parents: BTreeSet<NodeIndex>,
    children: BTreeSet<NodeIndex>,
}

impl<ID, T> GraphNode<ID, T> {
    pub(crate) fn new(
        id: ID,
        payload: T,
        path_type: PathType,
        parents: BTreeSet<NodeIndex>,
        children: BTreeSet<NodeIndex>,
    ) -> Self {
        Self {
            id,
            payload,
            path_type,
            parents,
            children,
        }
    }

    /// Node id.
    pub fn id(&self) -> &ID {
        &self.id
    }

    /// Payload moved in from the input record.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Classification relative to the start node.
    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    /// Arena indices of parent nodes, in input order.
    pub fn parent_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.parents.iter().copied()
    }

    /// Arena indices of child nodes, in input order.
    pub fn child_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.children.iter().copied()
    }

    /// Number of wired parents.
    pub fn parent_count(&self) -> usize {
        self.parents.len()
    }

    /// Number of wired children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Consume the node, yielding its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<ID: PartialEq, T> PartialEq for GraphNode<ID, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<ID: Eq, T> Eq for GraphNode<ID, T> {}

impl<ID: Hash, T> Hash for GraphNode<ID, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Counters collected while parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Nodes in the result (always the input count).
    pub node_count: usize,
    /// Distinct edges derived from declared parents.
    pub edge_count: usize,
    /// Edges with both ends present, wired into the graph.
    pub wired_edge_count: usize,
    /// Edges dropped because an end names no node.
    pub dangling_edge_count: usize,
    /// Nodes classified [`PathType::Main`].
    pub main_count: usize,
    /// Nodes classified [`PathType::Connected`].
    pub connected_count: usize,
    /// Nodes classified [`PathType::Outer`].
    pub outer_count: usize,
}

impl ParseStats {
    pub(crate) fn record_path_type(&mut self, path_type: PathType) {
        match path_type {
            PathType::Main => self.main_count += 1,
            PathType::Connected => self.connected_count += 1,
            PathType::Outer => self.outer_count += 1,
        }
    }
}

/// Immutable parsed graph.
///
/// Owns all nodes. Callers only ever get shared views, so nothing outside
/// the kernel can rewire it.
#[derive(Debug, Clone)]
pub struct ParseResult<ID, T> {
    start: NodeIndex,
    nodes: Vec<GraphNode<ID, T>>,
    index: HashMap<ID, NodeIndex>,
    stats: ParseStats,
}

impl<ID: NodeId, T> ParseResult<ID, T> {
    pub(crate) fn from_parts(
        start: NodeIndex,
        nodes: Vec<GraphNode<ID, T>>,
        index: HashMap<ID, NodeIndex>,
        stats: ParseStats,
    ) -> Self {
        Self {
            start,
            nodes,
            index,
            stats,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes. Never true for a successful parse.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &ID) -> bool {
        self.index.contains_key(id)
    }

    /// Arena index of a node id.
    pub fn index_of(&self, id: &ID) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &ID) -> Option<NodeRef<'_, ID, T>> {
        self.index_of(id).map(|index| NodeRef { graph: self, index })
    }

    /// Look up a node by arena index.
    pub fn get(&self, index: NodeIndex) -> Option<NodeRef<'_, ID, T>> {
        (index.0 < self.nodes.len()).then_some(NodeRef { graph: self, index })
    }

    /// Path type of a node id.
    pub fn path_type(&self, id: &ID) -> Option<PathType> {
        self.node(id).map(|n| n.path_type())
    }

    /// The start node.
    pub fn start_node(&self) -> NodeRef<'_, ID, T> {
        NodeRef {
            graph: self,
            index: self.start,
        }
    }

    /// All nodes, in input order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, ID, T>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeRef {
            graph: self,
            index: NodeIndex(i),
        })
    }

    /// All node ids, in input order.
    pub fn ids(&self) -> impl Iterator<Item = &ID> + '_ {
        self.nodes.iter().map(|n| &n.id)
    }

    /// Counters collected while parsing.
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Consume the result into its arena.
    ///
    /// Parent and child indices of each node index into the returned vector.
    pub fn into_nodes(self) -> Vec<GraphNode<ID, T>> {
        self.nodes
    }

    /// Canonical, payload-free view of the graph.
    ///
    /// Nodes are sorted by id and adjacency lists by id, so the export does
    /// not depend on input order.
    pub fn export(&self) -> GraphExport<ID>
    where
        ID: Ord,
    {
        let mut nodes: Vec<NodeExport<ID>> = self
            .nodes()
            .map(|node| {
                let mut parents: Vec<ID> = node.parents().map(|p| p.id().clone()).collect();
                let mut children: Vec<ID> = node.children().map(|c| c.id().clone()).collect();
                parents.sort();
                children.sort();
                NodeExport {
                    id: node.id().clone(),
                    path_type: node.path_type(),
                    parents,
                    children,
                }
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        GraphExport {
            schema_version: LINEAGE_KERNEL_SCHEMA_VERSION.to_string(),
            start_node_id: self.start_node().id().clone(),
            nodes,
        }
    }

    /// Content hash of [`Self::export`].
    ///
    /// Two parses of the same node collection and start id agree on this
    /// value regardless of input order.
    pub fn fingerprint(&self) -> Result<String, GraphProcessingError>
    where
        ID: Ord + Serialize,
    {
        canonical_hash_hex(&self.export())
    }
}

/// Borrowed view of one node inside a [`ParseResult`].
pub struct NodeRef<'g, ID, T> {
    graph: &'g ParseResult<ID, T>,
    index: NodeIndex,
}

impl<'g, ID, T> NodeRef<'g, ID, T> {
    /// Underlying node.
    pub fn node(&self) -> &'g GraphNode<ID, T> {
        &self.graph.nodes[self.index.0]
    }

    /// Arena index.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Node id.
    pub fn id(&self) -> &'g ID {
        &self.node().id
    }

    /// Node payload.
    pub fn payload(&self) -> &'g T {
        &self.node().payload
    }

    /// Classification relative to the start node.
    pub fn path_type(&self) -> PathType {
        self.node().path_type
    }

    /// Parent nodes, in input order.
    pub fn parents(&self) -> impl Iterator<Item = NodeRef<'g, ID, T>> + 'g {
        let graph = self.graph;
        self.node()
            .parents
            .iter()
            .map(move |&index| NodeRef { graph, index })
    }

    /// Child nodes, in input order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'g, ID, T>> + 'g {
        let graph = self.graph;
        self.node()
            .children
            .iter()
            .map(move |&index| NodeRef { graph, index })
    }

    /// Whether `other` is a wired parent of this node.
    pub fn has_parent(&self, other: &NodeRef<'_, ID, T>) -> bool {
        self.node().parents.contains(&other.index)
    }

    /// Whether `other` is a wired child of this node.
    pub fn has_child(&self, other: &NodeRef<'_, ID, T>) -> bool {
        self.node().children.contains(&other.index)
    }
}

impl<ID, T> Clone for NodeRef<'_, ID, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<ID, T> Copy for NodeRef<'_, ID, T> {}

impl<ID, T> PartialEq for NodeRef<'_, ID, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.index == other.index
    }
}

impl<ID, T> Eq for NodeRef<'_, ID, T> {}

impl<ID: fmt::Debug, T> fmt::Debug for NodeRef<'_, ID, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", self.id())
            .field("index", &self.index)
            .field("path_type", &self.path_type())
            .finish()
    }
}

/// Canonical export of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeExport<ID> {
    /// Node id.
    pub id: ID,
    /// Classification relative to the start node.
    pub path_type: PathType,
    /// Parent ids, sorted.
    pub parents: Vec<ID>,
    /// Child ids, sorted.
    pub children: Vec<ID>,
}

/// Canonical export of a parse result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport<ID> {
    /// Schema version of this export.
    pub schema_version: String,
    /// Start node id.
    pub start_node_id: ID,
    /// Nodes sorted by id.
    pub nodes: Vec<NodeExport<ID>>,
}

//! Weak connectivity over an edge set.
//!
//! Edges are treated as undirected. Blocks of mutually connected ids are
//! grown edge by edge:
//!
//! | parent block | child block | action                                  |
//! |--------------|-------------|-----------------------------------------|
//! | none         | none        | open a new block holding both ids       |
//! | `B`          | none        | add child to `B`                        |
//! | none         | `B`         | add parent to `B`                       |
//! | `B`          | `B`         | nothing                                 |
//! | `P`          | `C`         | move the smaller block into the larger  |
//!
//! On equal sizes the child's block is moved into the parent's. Only ids that
//! appear as an edge endpoint ever belong to a block.

use std::collections::{HashMap, HashSet};

use super::BidirectionalRelationQuery;
use crate::types::{Edge, NodeId};

/// Handle of a block inside a [`BlockPartition`].
///
/// Handles of merged-away blocks are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(usize);

/// Disjoint blocks of ids connected by undirected edges.
#[derive(Debug, Clone)]
pub struct BlockPartition<ID> {
    blocks: HashMap<BlockId, HashSet<ID>>,
    block_of: HashMap<ID, BlockId>,
    next_block: usize,
}

impl<ID: NodeId> BlockPartition<ID> {
    /// Empty partition.
    pub fn new() -> Self {
        Self {
            blocks: HashMap::new(),
            block_of: HashMap::new(),
            next_block: 0,
        }
    }

    /// Partition induced by `edges`.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = &'a Edge<ID>>,
        ID: 'a,
    {
        let mut partition = Self::new();
        for edge in edges {
            partition.insert_edge(edge);
        }
        partition
    }

    /// Record one edge, joining the blocks of its endpoints.
    pub fn insert_edge(&mut self, edge: &Edge<ID>) {
        let parent_block = self.block_of.get(&edge.parent).copied();
        let child_block = self.block_of.get(&edge.child).copied();

        match (parent_block, child_block) {
            (None, None) => {
                let block = self.open_block();
                self.assign(block, edge.parent.clone());
                self.assign(block, edge.child.clone());
            }
            (Some(block), None) => self.assign(block, edge.child.clone()),
            (None, Some(block)) => self.assign(block, edge.parent.clone()),
            (Some(p), Some(c)) if p == c => {}
            (Some(p), Some(c)) => {
                let (into, from) = if self.size(c) > self.size(p) { (c, p) } else { (p, c) };
                self.merge(into, from);
            }
        }
    }

    /// Block containing `id`, if it is an endpoint of any recorded edge.
    pub fn block_of(&self, id: &ID) -> Option<BlockId> {
        self.block_of.get(id).copied()
    }

    /// Members of the block containing `id`.
    pub fn members(&self, id: &ID) -> Option<&HashSet<ID>> {
        self.block_of(id).and_then(|block| self.blocks.get(&block))
    }

    /// Whether `a` and `b` are in the same block.
    pub fn connected(&self, a: &ID, b: &ID) -> bool {
        match (self.block_of(a), self.block_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of live blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of ids placed in any block.
    pub fn id_count(&self) -> usize {
        self.block_of.len()
    }

    /// Consume the partition, yielding each block's members.
    pub fn into_components(self) -> Vec<HashSet<ID>> {
        let mut blocks: Vec<(BlockId, HashSet<ID>)> = self.blocks.into_iter().collect();
        blocks.sort_by_key(|(block, _)| *block);
        blocks.into_iter().map(|(_, members)| members).collect()
    }

    fn open_block(&mut self) -> BlockId {
        let block = BlockId(self.next_block);
        self.next_block += 1;
        self.blocks.insert(block, HashSet::new());
        block
    }

    fn assign(&mut self, block: BlockId, id: ID) {
        if let Some(members) = self.blocks.get_mut(&block) {
            members.insert(id.clone());
        }
        self.block_of.insert(id, block);
    }

    fn size(&self, block: BlockId) -> usize {
        self.blocks.get(&block).map_or(0, HashSet::len)
    }

    fn merge(&mut self, into: BlockId, from: BlockId) {
        let Some(moved) = self.blocks.remove(&from) else {
            return;
        };
        for id in &moved {
            self.block_of.insert(id.clone(), into);
        }
        if let Some(members) = self.blocks.get_mut(&into) {
            members.extend(moved);
        }
    }
}

impl<ID: NodeId> Default for BlockPartition<ID> {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the weak component of the start node.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeakComponentFinder;

impl WeakComponentFinder {
    /// Create a new finder.
    pub fn new() -> Self {
        Self
    }
}

impl BidirectionalRelationQuery for WeakComponentFinder {
    fn find_all_connected_ids<ID: NodeId>(&self, start_node_id: &ID, edges: &[Edge<ID>]) -> HashSet<ID> {
        if edges.is_empty() {
            return HashSet::new();
        }
        let mut partition = BlockPartition::from_edges(edges);
        partition
            .block_of(start_node_id)
            .and_then(|block| partition.blocks.remove(&block))
            .unwrap_or_default()
    }
}

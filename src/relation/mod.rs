//! Reachability queries over parent-given graphs.
//!
//! Two notions of "related to the start node":
//!
//! - **Directional** ([`AncestryFinder`]): ids reached by repeatedly following
//!   declared parent ids from the start node. Child links are never followed.
//! - **Bidirectional** ([`WeakComponentFinder`]): ids linked to the start node
//!   by edges taken as undirected, computed with a union-find over the edge
//!   set. A start node that appears in no edge has an empty component.
//!
//! ```text
//! nodes ──► AncestryFinder ──────► main ids
//! edges ──► WeakComponentFinder ──► connected ids
//! ```

pub mod ancestry;
pub mod connectivity;

use std::collections::HashSet;

use crate::types::{Edge, NodeId, RelatedNode};

pub use ancestry::AncestryFinder;
pub use connectivity::{BlockId, BlockPartition, WeakComponentFinder};

/// Directional reachability stage.
pub trait DirectionalRelationQuery {
    /// Ids reachable from `start_node_id` by following related ids.
    ///
    /// Assumes validated input; the result always contains the start id.
    fn find_all_connected_ids<N: RelatedNode>(
        &self,
        start_node_id: &N::Id,
        nodes: &[N],
    ) -> HashSet<N::Id>;
}

/// Undirected reachability stage.
pub trait BidirectionalRelationQuery {
    /// Ids in the weak component of `start_node_id`, or empty if the start id
    /// is not an endpoint of any edge.
    fn find_all_connected_ids<ID: NodeId>(&self, start_node_id: &ID, edges: &[Edge<ID>]) -> HashSet<ID>;
}

//! Input node capabilities for the graph kernel.
//!
//! Callers hand the kernel a flat collection of records, each naming its own
//! parents. The kernel never owns those records beyond a single parse call.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Bound for node identifiers.
///
/// Identifiers only need value equality and hashing; `Debug` is used for
/// log fields and error messages.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// A node that can be validated and walked by id.
///
/// `related_ids` are the ids the ancestry walk follows from this node.
pub trait RelatedNode {
    /// Identifier type.
    type Id: NodeId;

    /// Identifier of this node, `None` if the record carries no id.
    fn id(&self) -> Option<&Self::Id>;

    /// Ids this node points at.
    fn related_ids(&self) -> &[Self::Id];
}

/// A node that declares its own parents and carries an opaque payload.
///
/// Every `ParentGivenNode` is a [`RelatedNode`] whose related ids are its
/// parent ids.
pub trait ParentGivenNode {
    /// Identifier type.
    type Id: NodeId;
    /// Payload moved into the parsed graph.
    type Payload;

    /// Identifier of this node, `None` if the record carries no id.
    fn id(&self) -> Option<&Self::Id>;

    /// Declared parent ids. May reference ids absent from the input.
    fn parent_ids(&self) -> &[Self::Id];

    /// Consume the record, yielding its payload.
    fn into_payload(self) -> Self::Payload;
}

impl<N: ParentGivenNode> RelatedNode for N {
    type Id = N::Id;

    fn id(&self) -> Option<&Self::Id> {
        ParentGivenNode::id(self)
    }

    fn related_ids(&self) -> &[Self::Id] {
        self.parent_ids()
    }
}

/// Ready-made input record.
///
/// Deserializes from `{"id": ..., "parent_ids": [...], "payload": ...}`.
/// A missing or null `id` is kept as `None` so validation can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord<ID, T> {
    /// Node identifier.
    #[serde(default)]
    pub id: Option<ID>,
    /// Declared parent ids.
    #[serde(default)]
    pub parent_ids: Vec<ID>,
    /// Opaque payload.
    pub payload: T,
}

impl<ID, T> NodeRecord<ID, T> {
    /// Create a record with an id.
    pub fn new(id: ID, parent_ids: Vec<ID>, payload: T) -> Self {
        Self {
            id: Some(id),
            parent_ids,
            payload,
        }
    }

    /// Create a record without an id.
    pub fn without_id(parent_ids: Vec<ID>, payload: T) -> Self {
        Self {
            id: None,
            parent_ids,
            payload,
        }
    }
}

impl<ID: NodeId, T> ParentGivenNode for NodeRecord<ID, T> {
    type Id = ID;
    type Payload = T;

    fn id(&self) -> Option<&ID> {
        self.id.as_ref()
    }

    fn parent_ids(&self) -> &[ID] {
        &self.parent_ids
    }

    fn into_payload(self) -> T {
        self.payload
    }
}

/// Full input to one parse call.
///
/// Both fields are optional so that `null` in deserialized input surfaces as
/// the matching validation error rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize, ID: Serialize",
    deserialize = "N: Deserialize<'de>, ID: Deserialize<'de>"
))]
pub struct GraphParseInput<N, ID> {
    /// Node collection.
    #[serde(default)]
    pub nodes: Option<Vec<N>>,
    /// Start node id.
    #[serde(default)]
    pub start_node_id: Option<ID>,
}

impl<N, ID> GraphParseInput<N, ID> {
    /// Create an input from a node collection and a start id.
    pub fn new(nodes: Vec<N>, start_node_id: impl Into<Option<ID>>) -> Self {
        Self {
            nodes: Some(nodes),
            start_node_id: start_node_id.into(),
        }
    }

    /// Borrow the nodes as a slice, if present.
    pub fn nodes(&self) -> Option<&[N]> {
        self.nodes.as_deref()
    }

    /// Borrow the start id, if present.
    pub fn start_node_id(&self) -> Option<&ID> {
        self.start_node_id.as_ref()
    }
}

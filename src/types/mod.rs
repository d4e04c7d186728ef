//! Core types for the graph kernel.

pub mod node;
pub mod edge;
pub mod path;
pub mod error;
pub mod graph;

pub use node::{NodeId, RelatedNode, ParentGivenNode, NodeRecord, GraphParseInput};
pub use edge::{Edge, EdgeSet};
pub use path::PathType;
pub use error::{GraphProcessingError, ProcessingErrorKind};
pub use graph::{
    NodeIndex, GraphNode, NodeRef, ParseResult, ParseStats,
    GraphExport, NodeExport,
};

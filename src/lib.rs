//! # lineage-kernel
//!
//! Reconstructs a parent/child graph from records that each name their own
//! parents, then classifies every node relative to a start node.
//!
//! The kernel answers one question:
//!
//! > Given a start node, which nodes does it descend from, which are merely
//! > linked to it, and which are unrelated?
//!
//! ## Core Contract
//!
//! 1. Validate the input (ordered, fail-fast checks with a closed error taxonomy)
//! 2. Derive parent→child edges from declared parent ids
//! 3. Compute the ancestry closure (MAIN) and the weak component (CONNECTED)
//! 4. Return an immutable arena graph with every node classified
//!
//! ## Architecture
//!
//! ```text
//! Vec<N> + start → Validator → EdgeSet → AncestryFinder / WeakComponentFinder
//!                                    ↓
//!                     NodeArena (build → wire → classify) → ParseResult
//! ```
//!
//! ## Path Types
//!
//! | Type        | Meaning                                               |
//! |-------------|-------------------------------------------------------|
//! | `MAIN`      | Reachable from the start node by following parents    |
//! | `CONNECTED` | In the start node's weak component but not MAIN       |
//! | `OUTER`     | Neither                                               |
//!
//! A start node that is no endpoint of any edge has an empty weak component,
//! so every other node is OUTER.
//!
//! ## Determinism Guarantees
//!
//! - Same nodes + same start → identical classification and adjacency
//! - Arena order and adjacency iteration follow input order
//! - [`ParseResult::fingerprint`] is independent of input order
//!
//! ## Preconditions
//!
//! The parent relation must be acyclic. Cycles are not detected and the
//! result on cyclic input is unspecified.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod validation;
pub mod relation;
pub mod builder;
pub mod config;
pub mod parser;
pub mod canonical;

// Re-exports
pub use types::{
    NodeId, RelatedNode, ParentGivenNode, NodeRecord, GraphParseInput,
    Edge, EdgeSet, PathType, GraphProcessingError, ProcessingErrorKind,
    NodeIndex, GraphNode, NodeRef, ParseResult, ParseStats, GraphExport, NodeExport,
};
pub use validation::{GraphValidator, StructuralValidator, validate};
pub use relation::{
    DirectionalRelationQuery, BidirectionalRelationQuery,
    AncestryFinder, WeakComponentFinder, BlockPartition, BlockId,
};
pub use builder::{NodeArena, WiringReport};
pub use config::ParserConfig;
pub use parser::{GraphParser, ParseOutput, parse_graph};

/// Schema version of [`GraphExport`].
/// Increment on breaking changes to the export layout.
pub const LINEAGE_KERNEL_SCHEMA_VERSION: &str = "1.0.0";

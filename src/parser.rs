//! Parse pipeline orchestrator.
//!
//! ## Pipeline
//!
//! ```text
//! validate → extract edges → ancestry (MAIN) → weak component (CONNECTED)
//!          → build arena → wire edges → classify → ParseResult
//! ```
//!
//! Data only flows forward. A validation failure returns before any graph
//! work, so an error never comes with a partial graph.
//!
//! ## Concurrency
//!
//! A parse shares no state with any other parse. One [`GraphParser`] can be
//! used from many threads at once as long as each call owns its input.

use std::fmt::Debug;

use crate::builder::NodeArena;
use crate::config::ParserConfig;
use crate::relation::{
    AncestryFinder, BidirectionalRelationQuery, DirectionalRelationQuery, WeakComponentFinder,
};
use crate::types::{
    EdgeSet, GraphParseInput, GraphProcessingError, ParentGivenNode, ParseResult, ParseStats,
};
use crate::validation::{GraphValidator, StructuralValidator};

/// Result of a parse over records of type `N`.
pub type ParseOutput<N> = Result<
    ParseResult<<N as ParentGivenNode>::Id, <N as ParentGivenNode>::Payload>,
    GraphProcessingError,
>;

/// Graph parser assembled from a validator and two reachability stages.
///
/// The stock stages are the structural validator, the breadth-first
/// ancestry walk and the union-find weak component.
#[derive(Debug, Clone)]
pub struct GraphParser<V = StructuralValidator, A = AncestryFinder, C = WeakComponentFinder> {
    config: ParserConfig,
    validator: V,
    ancestry: A,
    connectivity: C,
}

impl GraphParser {
    /// Create a parser with the stock stages.
    pub fn new(config: ParserConfig) -> Self {
        Self::with_components(config, StructuralValidator, AncestryFinder, WeakComponentFinder)
    }
}

impl Default for GraphParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<V, A, C> GraphParser<V, A, C>
where
    V: GraphValidator,
    A: DirectionalRelationQuery,
    C: BidirectionalRelationQuery,
{
    /// Create a parser with custom stages.
    pub fn with_components(config: ParserConfig, validator: V, ancestry: A, connectivity: C) -> Self {
        Self {
            config,
            validator,
            ancestry,
            connectivity,
        }
    }

    /// Parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a node collection into a classified graph.
    ///
    /// # Errors
    ///
    /// The first validation violation, in validator order. `NotSpecified` if
    /// a custom validator lets through input the builder cannot index.
    pub fn parse<N>(&self, input: GraphParseInput<N, N::Id>) -> ParseOutput<N>
    where
        N: ParentGivenNode,
    {
        let span = tracing::info_span!(
            "parse_graph",
            start = ?input.start_node_id(),
            nodes = input.nodes().map_or(0, <[N]>::len),
        );
        let _guard = span.enter();

        if let Err(err) = self.validator.validate(input.nodes(), input.start_node_id()) {
            tracing::warn!(kind = %err.kind(), error = %err, "Graph input rejected");
            return Err(err);
        }

        let GraphParseInput {
            nodes,
            start_node_id,
        } = input;
        let (Some(nodes), Some(start)) = (nodes, start_node_id) else {
            return Err(GraphProcessingError::unspecified(
                "Validator accepted input without nodes or start node id",
            ));
        };

        let edges = EdgeSet::extract(&nodes);
        tracing::debug!(edges = edges.len(), "Edges extracted");
        self.trace_collection("edges", edges.len(), edges.iter());

        let main = DirectionalRelationQuery::find_all_connected_ids(&self.ancestry, &start, nodes.as_slice());
        tracing::debug!(main = main.len(), "Ancestry closure computed");
        self.trace_collection("main", main.len(), main.iter());

        let connected = BidirectionalRelationQuery::find_all_connected_ids(
            &self.connectivity,
            &start,
            edges.as_slice(),
        );
        tracing::debug!(connected = connected.len(), "Weak component computed");
        self.trace_collection("connected", connected.len(), connected.iter());

        let mut arena = NodeArena::build(nodes)?;
        let wiring = arena.wire(&edges);
        tracing::debug!(
            wired = wiring.wired,
            dangling = wiring.dangling,
            "Edges wired"
        );

        let stats = ParseStats {
            edge_count: edges.len(),
            wired_edge_count: wiring.wired,
            dangling_edge_count: wiring.dangling,
            ..ParseStats::default()
        };
        let result = arena.classify(&start, &main, &connected, stats)?;

        let stats = result.stats();
        tracing::info!(
            nodes = stats.node_count,
            edges = stats.edge_count,
            main = stats.main_count,
            connected = stats.connected_count,
            outer = stats.outer_count,
            "Graph parsed"
        );

        Ok(result)
    }

    fn trace_collection<I>(&self, label: &'static str, total: usize, items: I)
    where
        I: IntoIterator,
        I::Item: Debug,
    {
        if !self.config.log_collections {
            return;
        }
        let shown: Vec<I::Item> = items
            .into_iter()
            .take(self.config.collection_log_limit)
            .collect();
        tracing::trace!(
            collection = label,
            total,
            shown = shown.len(),
            items = ?shown,
            "Collection dump"
        );
    }
}

/// Parse with the stock parser.
///
/// ```
/// use lineage_kernel::{parse_graph, NodeRecord, PathType};
///
/// let nodes = vec![
///     NodeRecord::new("a", vec![], ()),
///     NodeRecord::new("b", vec!["a"], ()),
/// ];
/// let graph = parse_graph(nodes, "b").unwrap();
/// assert_eq!(graph.path_type(&"a"), Some(PathType::Main));
/// ```
pub fn parse_graph<N>(nodes: Vec<N>, start_node_id: impl Into<Option<N::Id>>) -> ParseOutput<N>
where
    N: ParentGivenNode,
{
    GraphParser::new(ParserConfig::default()).parse(GraphParseInput::new(nodes, start_node_id))
}

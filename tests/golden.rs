//! Golden tests for the lineage kernel.
//!
//! These tests pin classification, validation precedence and determinism of
//! the parse pipeline.

use std::collections::HashSet;

use lineage_kernel::{
    parse_graph, GraphParseInput, GraphParser, NodeRecord, ParseResult, ParserConfig, PathType,
    ProcessingErrorKind,
};
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

type Record = NodeRecord<&'static str, &'static str>;

fn node(id: &'static str, parents: &[&'static str]) -> Record {
    NodeRecord::new(id, parents.to_vec(), id)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lineage_kernel=debug")
        .with_test_writer()
        .try_init();
}

fn ids_with(graph: &ParseResult<&'static str, &'static str>, path_type: PathType) -> HashSet<&'static str> {
    graph
        .nodes()
        .filter(|n| n.path_type() == path_type)
        .map(|n| *n.id())
        .collect()
}

fn set(ids: &[&'static str]) -> HashSet<&'static str> {
    ids.iter().copied().collect()
}

/// Layered graph with a side branch, a sibling subtree and a dangling parent.
///
/// ```text
///   r1   r2        s1      (x missing)
///   |  \ |         |          |
///   m1   m2        s2         d1
///    \  /  \
///     m3    c1
///     |
///     m4
/// ```
fn build_layered_graph() -> Vec<Record> {
    vec![
        node("r1", &[]),
        node("r2", &[]),
        node("m1", &["r1"]),
        node("m2", &["r1", "r2"]),
        node("m3", &["m1", "m2"]),
        node("m4", &["m3"]),
        node("c1", &["m2"]),
        node("s1", &[]),
        node("s2", &["s1"]),
        node("d1", &["x"]),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_chain_is_all_main() {
    init_tracing();
    let graph = parse_graph(vec![node("A", &[]), node("B", &["A"]), node("C", &["B"])], "C").unwrap();

    assert_eq!(ids_with(&graph, PathType::Main), set(&["A", "B", "C"]));
    assert_eq!(graph.start_node().id(), &"C");
    assert_eq!(graph.stats().edge_count, 2);
}

#[test]
fn test_isolated_start_leaves_everything_else_outer() {
    let graph = parse_graph(vec![node("A", &[]), node("B", &[]), node("C", &["A"])], "B").unwrap();

    assert_eq!(graph.path_type(&"B"), Some(PathType::Main));
    assert_eq!(graph.path_type(&"A"), Some(PathType::Outer));
    assert_eq!(graph.path_type(&"C"), Some(PathType::Outer));
    assert!(ids_with(&graph, PathType::Connected).is_empty());
}

#[test]
fn test_dangling_parent_is_dropped_at_wiring() {
    let graph = parse_graph(vec![node("A", &[]), node("B", &["A"]), node("C", &["X"])], "B").unwrap();

    let c = graph.node(&"C").unwrap();
    assert_eq!(c.parents().count(), 0);
    assert_eq!(c.path_type(), PathType::Outer);
    assert!(!graph.contains(&"X"));
    assert_eq!(graph.stats().dangling_edge_count, 1);
    assert_eq!(graph.stats().wired_edge_count, 1);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let err = parse_graph(vec![node("A", &[]), node("A", &[])], "A").unwrap_err();
    assert_eq!(err.kind(), ProcessingErrorKind::DuplicatedNodes);
    assert_eq!(err.to_string(), "DUPLICATED_NODES - Nodes have duplicates");
}

#[test]
fn test_empty_collection_is_rejected() {
    let err = parse_graph(Vec::<Record>::new(), "A").unwrap_err();
    assert_eq!(err.kind(), ProcessingErrorKind::NullOrEmptyGraph);
}

#[test]
fn test_missing_start_node_is_rejected() {
    let err = parse_graph(vec![node("A", &[]), node("B", &["A"])], "Z").unwrap_err();
    assert_eq!(err.kind(), ProcessingErrorKind::StartNodeNotInGraph);
    assert_eq!(err.message(), "Lack of start node");
}

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_layered_graph_classification() {
    init_tracing();
    let graph = parse_graph(build_layered_graph(), "m3").unwrap();

    assert_eq!(ids_with(&graph, PathType::Main), set(&["m3", "m1", "m2", "r1", "r2"]));
    assert_eq!(ids_with(&graph, PathType::Connected), set(&["m4", "c1"]));
    assert_eq!(ids_with(&graph, PathType::Outer), set(&["s1", "s2", "d1"]));

    let stats = graph.stats();
    assert_eq!(stats.node_count, 10);
    assert_eq!(stats.main_count + stats.connected_count + stats.outer_count, 10);
}

#[test]
fn test_wiring_is_symmetric() {
    let graph = parse_graph(build_layered_graph(), "m4").unwrap();

    for n in graph.nodes() {
        for parent in n.parents() {
            assert!(parent.has_child(&n), "{:?} missing child {:?}", parent.id(), n.id());
        }
        for child in n.children() {
            assert!(child.has_parent(&n), "{:?} missing parent {:?}", child.id(), n.id());
        }
    }

    let m3 = graph.node(&"m3").unwrap();
    let parents: Vec<_> = m3.parents().map(|p| *p.id()).collect();
    assert_eq!(parents, vec!["m1", "m2"]);
}

#[test]
fn test_payloads_move_through() {
    let graph = parse_graph(build_layered_graph(), "m4").unwrap();
    for n in graph.nodes() {
        assert_eq!(n.payload(), n.id());
    }

    let arena = graph.into_nodes();
    assert_eq!(arena.len(), 10);
    assert_eq!(arena[0].clone().into_payload(), "r1");
}

#[test]
fn test_arena_indices_match_borrowed_wiring() {
    let graph = parse_graph(build_layered_graph(), "m3").unwrap();
    let wiring: Vec<(&str, Vec<&str>, Vec<&str>)> = graph
        .nodes()
        .map(|n| {
            (
                *n.id(),
                n.parents().map(|p| *p.id()).collect(),
                n.children().map(|c| *c.id()).collect(),
            )
        })
        .collect();

    let arena = graph.into_nodes();
    assert_eq!(arena.len(), wiring.len());
    for (node, (id, parents, children)) in arena.iter().zip(&wiring) {
        assert_eq!(node.id(), id);
        let arena_parents: Vec<&str> = node.parent_indices().map(|i| *arena[i.index()].id()).collect();
        let arena_children: Vec<&str> = node.child_indices().map(|i| *arena[i.index()].id()).collect();
        assert_eq!(&arena_parents, parents);
        assert_eq!(&arena_children, children);
        assert_eq!(node.parent_count(), parents.len());
        assert_eq!(node.child_count(), children.len());
    }

    let m2 = arena.iter().find(|n| *n.id() == "m2").unwrap();
    let m2_children: Vec<&str> = m2.child_indices().map(|i| *arena[i.index()].id()).collect();
    assert_eq!(m2_children, vec!["m3", "c1"]);
}

#[test]
fn test_uuid_identifiers() {
    let root = Uuid::new_v4();
    let child = Uuid::new_v4();
    let stray = Uuid::new_v4();
    let nodes = vec![
        NodeRecord::new(root, vec![], 0u8),
        NodeRecord::new(child, vec![root], 1u8),
        NodeRecord::new(stray, vec![], 2u8),
    ];

    let graph = parse_graph(nodes, child).unwrap();
    assert_eq!(graph.path_type(&root), Some(PathType::Main));
    assert_eq!(graph.path_type(&stray), Some(PathType::Outer));
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_validation_precedence() {
    // Null start beats an empty collection.
    let err = parse_graph(Vec::<Record>::new(), None).unwrap_err();
    assert_eq!(err.kind(), ProcessingErrorKind::NullStartId);

    // Missing id beats duplicates and a missing start node.
    let nodes = vec![node("A", &[]), node("A", &[]), NodeRecord::without_id(vec![], "anon")];
    let err = parse_graph(nodes, "Z").unwrap_err();
    assert_eq!(err.kind(), ProcessingErrorKind::NullNodes);

    // Duplicates beat a missing start node.
    let err = parse_graph(vec![node("A", &[]), node("A", &[])], "Z").unwrap_err();
    assert_eq!(err.kind(), ProcessingErrorKind::DuplicatedNodes);
}

#[test]
fn test_json_input_with_nulls() {
    let parser = GraphParser::new(ParserConfig::default());

    let input: GraphParseInput<NodeRecord<String, serde_json::Value>, String> =
        serde_json::from_str(r#"{"nodes": [{"id": "a", "payload": 1}], "start_node_id": null}"#).unwrap();
    assert_eq!(parser.parse(input).unwrap_err().kind(), ProcessingErrorKind::NullStartId);

    let input: GraphParseInput<NodeRecord<String, serde_json::Value>, String> =
        serde_json::from_str(r#"{"nodes": null, "start_node_id": "a"}"#).unwrap();
    assert_eq!(parser.parse(input).unwrap_err().kind(), ProcessingErrorKind::NullOrEmptyGraph);

    let input: GraphParseInput<NodeRecord<String, serde_json::Value>, String> = serde_json::from_str(
        r#"{"nodes": [{"id": "a", "payload": 1}, {"id": null, "payload": 2}], "start_node_id": "a"}"#,
    )
    .unwrap();
    assert_eq!(parser.parse(input).unwrap_err().kind(), ProcessingErrorKind::NullNodes);

    let input: GraphParseInput<NodeRecord<String, serde_json::Value>, String> = serde_json::from_str(
        r#"{"nodes": [{"id": "a", "payload": {"k": 1}}, {"id": "b", "parent_ids": ["a"], "payload": null}],
            "start_node_id": "b"}"#,
    )
    .unwrap();
    let graph = parser.parse(input).unwrap();
    assert_eq!(graph.path_type(&"a".to_string()), Some(PathType::Main));
}

// ─────────────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_determinism_100_runs() {
    let first = parse_graph(build_layered_graph(), "m3").unwrap();
    let fingerprint = first.fingerprint().unwrap();
    let export = first.export();

    for _ in 0..100 {
        let graph = parse_graph(build_layered_graph(), "m3").unwrap();
        assert_eq!(graph.fingerprint().unwrap(), fingerprint);
        assert_eq!(graph.export(), export);
    }
}

#[test]
fn test_input_order_does_not_change_result() {
    let baseline = parse_graph(build_layered_graph(), "m2").unwrap();

    let mut reversed = build_layered_graph();
    reversed.reverse();
    let mut rotated = build_layered_graph();
    rotated.rotate_left(4);

    for nodes in [reversed, rotated] {
        let graph = parse_graph(nodes, "m2").unwrap();
        assert_eq!(graph.export(), baseline.export());
        assert_eq!(graph.fingerprint().unwrap(), baseline.fingerprint().unwrap());
    }
}

#[test]
fn test_export_is_sorted_and_versioned() {
    let graph = parse_graph(build_layered_graph(), "m4").unwrap();
    let export = graph.export();

    assert_eq!(export.schema_version, lineage_kernel::LINEAGE_KERNEL_SCHEMA_VERSION);
    assert_eq!(export.start_node_id, "m4");
    let ids: Vec<_> = export.nodes.iter().map(|n| n.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    let m2 = export.nodes.iter().find(|n| n.id == "m2").unwrap();
    assert_eq!(m2.parents, vec!["r1", "r2"]);
    assert_eq!(m2.children, vec!["c1", "m3"]);
}

#[test]
fn test_collection_dumps_do_not_change_result() {
    init_tracing();
    let quiet = parse_graph(build_layered_graph(), "m3").unwrap();
    let verbose = GraphParser::new(ParserConfig::default().with_log_collections(true))
        .parse(GraphParseInput::new(build_layered_graph(), "m3"))
        .unwrap();
    assert_eq!(quiet.export(), verbose.export());
}

//! Phase 1 tests: Node index, edge store and the mutation API.

use std::io::Write;

use slotgraph::config::EngineConfig;
use slotgraph::graph::{Graph, GraphBuilder};
use slotgraph::types::error::GraphError;
use slotgraph::types::Edge;

use tempfile::NamedTempFile;

// ==================== Helper ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn abc(directed: bool) -> Graph<&'static str, i32> {
    let mut graph = Graph::new(directed);
    for id in ["A", "B", "C"] {
        graph.add_node(id).unwrap();
    }
    graph
}

// ==================== Node Index Tests ====================

#[test]
fn test_add_node_assigns_sequential_slots() {
    let mut graph: Graph<String, u32> = Graph::undirected();
    for (i, name) in ["delta", "alpha", "charlie"].iter().enumerate() {
        let slot = graph.add_node(name.to_string()).unwrap();
        assert_eq!(slot, i);
    }

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.slot_of(&"alpha".to_string()), Some(1));
    assert_eq!(graph.node_at(2).map(String::as_str), Some("charlie"));
    let order: Vec<&str> = graph.nodes().map(String::as_str).collect();
    assert_eq!(order, vec!["delta", "alpha", "charlie"]);
}

#[test]
fn test_duplicate_node_rejected() {
    let mut graph = abc(false);
    let result = graph.add_node("B");
    match result.unwrap_err() {
        GraphError::DuplicateNode(id) => assert_eq!(id, "\"B\""),
        e => panic!("Expected DuplicateNode error, got {:?}", e),
    }
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_store().len(), 3);
}

#[test]
fn test_add_nodes_is_atomic() {
    init_logging();
    let mut graph: Graph<u32, u32> = Graph::directed();
    graph.add_node(1).unwrap();

    assert!(matches!(
        graph.add_nodes(vec![2, 3, 1]),
        Err(GraphError::DuplicateNode(_))
    ));
    assert_eq!(graph.node_count(), 1);

    assert!(matches!(
        graph.add_nodes(vec![4, 5, 4]),
        Err(GraphError::DuplicateNode(_))
    ));
    assert_eq!(graph.node_count(), 1);

    let slots = graph.add_nodes(vec![2, 3]).unwrap();
    assert_eq!(slots, vec![1, 2]);
    assert_eq!(graph.edge_store().len(), 3);
}

#[test]
fn test_earlier_slots_survive_growth() {
    let mut graph: Graph<u64, f64> = Graph::undirected();
    for id in 0..50u64 {
        graph.add_node(id * 10).unwrap();
    }
    for id in 0..50u64 {
        assert_eq!(graph.slot_of(&(id * 10)), Some(id as usize));
    }
    assert!(!graph.contains_node(&5));
}

// ==================== Edge Store Tests ====================

#[test]
fn test_undirected_edge_is_symmetric() {
    let mut graph = abc(false);
    graph.add_edge(&"A", &"C", 7).unwrap();

    assert_eq!(graph.weight(&"A", &"C"), Some(7));
    assert_eq!(graph.weight(&"C", &"A"), Some(7));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_store().filled(), 2);
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = abc(true);
    graph.add_edge(&"A", &"C", 7).unwrap();

    assert_eq!(graph.weight(&"A", &"C"), Some(7));
    assert_eq!(graph.weight(&"C", &"A"), None);
    assert!(graph.has_edge(&"A", &"C"));
    assert!(!graph.has_edge(&"C", &"A"));
}

#[test]
fn test_self_loop_rejected() {
    let mut graph = abc(true);
    match graph.add_edge(&"B", &"B", 1).unwrap_err() {
        GraphError::SelfLoop(_) => {}
        e => panic!("Expected SelfLoop error, got {:?}", e),
    }
    for slot in 0..graph.node_count() {
        assert!(!graph.edge_store().contains(slot, slot));
    }
}

#[test]
fn test_unknown_endpoint_rejected() {
    let mut graph = abc(false);
    assert!(matches!(
        graph.add_edge(&"A", &"Z", 1),
        Err(GraphError::UnknownNode(_))
    ));
    assert!(matches!(
        graph.add_edge(&"Z", &"A", 1),
        Err(GraphError::UnknownNode(_))
    ));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_are_set_once() {
    let mut graph = abc(false);
    graph.add_edge(&"A", &"B", 3).unwrap();

    match graph.add_edge(&"A", &"B", 9).unwrap_err() {
        GraphError::EdgeExists { src, dst } => {
            assert_eq!(src, "\"A\"");
            assert_eq!(dst, "\"B\"");
        }
        e => panic!("Expected EdgeExists error, got {:?}", e),
    }
    // The mirror of an undirected edge is the same edge
    assert!(matches!(
        graph.add_edge(&"B", &"A", 9),
        Err(GraphError::EdgeExists { .. })
    ));
    assert_eq!(graph.weight(&"A", &"B"), Some(3));
}

#[test]
fn test_directed_reverse_edge_is_distinct() {
    let mut graph = abc(true);
    graph.add_edge(&"A", &"B", 3).unwrap();
    graph.add_edge(&"B", &"A", 4).unwrap();
    assert_eq!(graph.weight(&"A", &"B"), Some(3));
    assert_eq!(graph.weight(&"B", &"A"), Some(4));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_nan_weight_rejected() {
    let mut graph: Graph<u8, f64> = Graph::undirected();
    graph.add_nodes(vec![1, 2]).unwrap();

    assert!(matches!(
        graph.add_edge(&1, &2, f64::NAN),
        Err(GraphError::InvalidWeight(_))
    ));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.weight(&1, &2), None);

    graph.add_edge(&1, &2, -0.5).unwrap();
    assert_eq!(graph.weight(&2, &1), Some(-0.5));
}

#[test]
fn test_unweighted_edge_uses_zero() {
    let mut graph = abc(true);
    graph.add_unweighted_edge(&"A", &"B").unwrap();
    assert_eq!(graph.weight(&"A", &"B"), Some(0));
}

#[test]
fn test_edges_listing_order() {
    let mut graph = abc(false);
    graph.add_edge(&"C", &"B", 2).unwrap();
    graph.add_edge(&"B", &"A", 1).unwrap();

    let edges = graph.edges();
    assert_eq!(
        edges,
        vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2)]
    );
}

#[test]
fn test_neighbors() {
    let mut graph = abc(true);
    graph.add_edge(&"A", &"C", 5).unwrap();
    graph.add_edge(&"A", &"B", 2).unwrap();
    graph.add_edge(&"C", &"A", 1).unwrap();

    assert_eq!(graph.neighbors(&"A").unwrap(), vec![("B", 2), ("C", 5)]);
    assert!(graph.neighbors(&"B").unwrap().is_empty());
    assert!(matches!(
        graph.neighbors(&"Q"),
        Err(GraphError::UnknownNode(_))
    ));
}

#[test]
fn test_complete_edges() {
    let mut graph: Graph<u32, u32> = Graph::undirected();
    graph.add_nodes(0..4).unwrap();
    graph.add_edge(&0, &1, 9).unwrap();

    let added = graph.complete_edges(1).unwrap();
    assert_eq!(added, 5);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.weight(&0, &1), Some(9));
    assert_eq!(graph.weight(&3, &2), Some(1));

    let mut directed: Graph<u32, u32> = Graph::directed();
    directed.add_nodes(0..3).unwrap();
    assert_eq!(directed.complete_edges(2).unwrap(), 6);
    assert_eq!(directed.complete_edges(2).unwrap(), 0);
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_replays_mutations() {
    let graph = GraphBuilder::undirected()
        .nodes(["x", "y"])
        .node("z")
        .edge("x", "y", 1.5)
        .edge("y", "z", 2.5)
        .build()
        .unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight(&"z", &"y"), Some(2.5));
}

#[test]
fn test_builder_surfaces_first_error() {
    let result = GraphBuilder::<&str, i32>::directed()
        .node("x")
        .edge("x", "missing", 1)
        .build();
    assert!(matches!(result, Err(GraphError::UnknownNode(_))));
}

// ==================== Snapshot Tests ====================

#[test]
fn test_snapshot_json() {
    let mut graph = abc(false);
    graph.add_edge(&"A", &"B", 4).unwrap();

    let snapshot = graph.snapshot();
    assert!(!snapshot.directed);
    assert_eq!(snapshot.nodes, vec!["A", "B", "C"]);
    assert_eq!(snapshot.edges.len(), 1);

    let json = snapshot.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["directed"], serde_json::json!(false));
    assert_eq!(value["nodes"][2], serde_json::json!("C"));
    assert_eq!(value["edges"][0]["weight"], serde_json::json!(4));
}

// ==================== Config Tests ====================

#[test]
fn test_config_loaded_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[katz]\ntolerance = 1e-9\nmax_iterations = 250").unwrap();

    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.katz.max_iterations, 250);
    assert!((config.katz.tolerance - 1e-9).abs() < f64::EPSILON);

    let graph: Graph<u8, u8> = Graph::with_config(true, config.clone()).unwrap();
    assert_eq!(graph.config(), &config);
}

#[test]
fn test_config_missing_file() {
    let result = EngineConfig::load("/definitely/not/here.toml");
    assert!(matches!(result, Err(GraphError::Io(_))));
}

#[test]
fn test_with_config_validates() {
    let mut config = EngineConfig::default();
    config.katz.tolerance = -1.0;
    let result: Result<Graph<u8, u8>, _> = Graph::with_config(false, config);
    assert!(matches!(result, Err(GraphError::Config(_))));

    let mut config = EngineConfig::default();
    config.katz.divergence_threshold = 0.0;
    let result = GraphBuilder::<u8, u8>::undirected().config(config).build();
    assert!(matches!(result, Err(GraphError::Config(_))));
}

#[test]
fn test_set_config_validates() {
    let mut graph: Graph<u8, u8> = Graph::undirected();
    let mut config = EngineConfig::default();
    config.katz.max_iterations = 0;
    assert!(matches!(
        graph.set_config(config),
        Err(GraphError::Config(_))
    ));
    assert_eq!(graph.config(), &EngineConfig::default());
}

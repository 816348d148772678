//! Document load / merge / save round-trip tests.

use costar::{read_clusters, read_image_links, GraphDocument, Network, NodeId, Separation, Value};
use pretty_assertions::assert_eq;

const DOC: &str = r#"{
    "nodes": [
        {"id": 1, "name": "Heat", "cast_name": "Robert De Niro, Al Pacino", "rank": 120, "year": "1995"},
        {"id": 2, "name": "Ronin", "cast_name": "Robert De Niro, Jean Reno"},
        {"id": 3, "name": "Leon", "cast_name": "Jean Reno, Natalie Portman"},
        {"id": 4, "name": "Alien", "cast_name": "Sigourney Weaver"}
    ],
    "links": [
        {"source": 1, "target": 2},
        {"source": 2, "target": 3}
    ]
}"#;

// ============================================================================
// 1. Loading: links alias, numeric ids, annotation reset
// ============================================================================

#[test]
fn test_load_accepts_links_and_numeric_ids() {
    let doc = GraphDocument::from_reader(DOC.as_bytes()).unwrap();
    assert_eq!(doc.nodes.len(), 4);
    assert_eq!(doc.edges.len(), 2);
    assert_eq!(doc.nodes[0].id, NodeId::from("1"));
    assert_eq!(doc.edges[0].source, NodeId::from("1"));
    assert_eq!(doc.nodes[0].cast, vec!["Robert De Niro", "Al Pacino"]);
    assert_eq!(doc.nodes[0].get("rank"), Some(&Value::Int(120)));
}

#[test]
fn test_load_resets_stale_annotations() {
    let stale = r#"{
        "nodes": [{"id": "x", "name": "X", "separation": 7, "path_to_target": ["x"]}],
        "links": []
    }"#;
    let doc = GraphDocument::from_reader(stale.as_bytes()).unwrap();
    assert_eq!(doc.nodes[0].separation, Separation::Unreachable);
    assert!(doc.nodes[0].path_to_target.is_empty());
}

// ============================================================================
// 2. Full pipeline: load -> annotate -> save
// ============================================================================

#[test]
fn test_annotated_save_wire_format() {
    let doc = GraphDocument::from_reader(DOC.as_bytes()).unwrap();
    let mut network = Network::from_document(doc);
    network.annotate("Robert De Niro").unwrap();

    let mut out = Vec::new();
    network.to_document().to_writer(&mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes[0]["separation"], 0);
    assert_eq!(nodes[2]["separation"], 1);
    assert_eq!(nodes[3]["separation"], -1);
    // Unreachable nodes carry no path at all.
    assert!(nodes[3].get("path_to_target").is_none());
    // Cast goes back out as the delimited field.
    assert_eq!(nodes[0]["cast_name"], "Robert De Niro, Al Pacino");
    // The writer emits `edges`, never `links`.
    assert!(json.get("edges").is_some());
    assert!(json.get("links").is_none());
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
}

#[test]
fn test_save_reload_round_trip() {
    let doc = GraphDocument::from_reader(DOC.as_bytes()).unwrap();
    let mut network = Network::from_document(doc);
    network.annotate("Robert De Niro").unwrap();

    let mut out = Vec::new();
    network.to_document().to_writer(&mut out).unwrap();
    let reloaded = GraphDocument::from_reader(out.as_slice()).unwrap();

    // Structure survives; annotations are reset on load by contract.
    assert_eq!(reloaded.edges, network.to_document().edges);
    assert_eq!(reloaded.nodes.len(), 4);
    assert_eq!(reloaded.nodes[1].cast, vec!["Robert De Niro", "Jean Reno"]);
    assert!(reloaded.nodes.iter().all(|n| n.separation == Separation::Unreachable));
}

// ============================================================================
// 3. Auxiliary merges
// ============================================================================

#[test]
fn test_image_and_cluster_merges() {
    let mut doc = GraphDocument::from_reader(DOC.as_bytes()).unwrap();

    let images = read_image_links(
        r#"{
            "1": {"small_img_link": "heat_s.jpg", "large_img_link": "heat_l.jpg"},
            "3": {"small_img_link": "leon_s.jpg"}
        }"#
        .as_bytes(),
    )
    .unwrap();
    let clusters = read_clusters(r#"{"1": 2, "2": 2}"#.as_bytes()).unwrap();

    doc.merge_image_links(&images);
    doc.merge_clusters(&clusters);

    assert_eq!(doc.nodes[0].get("small_img_link"), Some(&Value::from("heat_s.jpg")));
    assert_eq!(doc.nodes[2].get("large_img_link"), Some(&Value::Null));
    assert_eq!(doc.nodes[1].get("small_img_link"), Some(&Value::Null));
    assert_eq!(doc.nodes[0].get("cluster"), Some(&Value::Int(2)));
    assert_eq!(doc.nodes[3].get("cluster"), Some(&Value::Int(0)));
}

// ============================================================================
// 4. Opaque attributes ride through the pipeline untouched
// ============================================================================

#[test]
fn test_display_attributes_survive_analysis() {
    let doc = GraphDocument::from_reader(DOC.as_bytes()).unwrap();
    let mut network = Network::from_document(doc);
    network.annotate("Robert De Niro").unwrap();

    let saved = network.to_document();
    assert_eq!(saved.nodes[0].get("rank"), Some(&Value::Int(120)));
    assert_eq!(saved.nodes[0].get("year").and_then(Value::as_str), Some("1995"));
}

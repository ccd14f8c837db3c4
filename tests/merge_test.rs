//! End-to-end coverage of the merge contract through the public API
//!
//! Exercises the properties the store guarantees:
//! - node identities stay unique across repeated merges
//! - every source keeps at most one outgoing link
//! - empty values never create or disturb links
//! - snapshots stay internally consistent under concurrent writers

use ringview::{Batch, GraphStore, Link, Node};
use std::sync::Arc;
use tokio::sync::RwLock;

fn report(source: &str, entries: &[(&str, &str)]) -> Batch {
    let mut batch = Batch::new();
    batch.insert(
        source.to_string(),
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    batch
}

#[test]
fn test_ring_builds_up_from_individual_reports() {
    let mut store = GraphStore::new();

    // Three peers each report their successor around the ring
    store.merge(&report("alice", &[("successor", "bob")]));
    store.merge(&report("bob", &[("successor", "carol")]));
    store.merge(&report("carol", &[("successor", "alice")]));

    let graph = store.snapshot();
    assert_eq!(
        graph.nodes,
        vec![Node::new("alice"), Node::new("bob"), Node::new("carol")]
    );
    assert_eq!(
        graph.links,
        vec![
            Link::new("alice", "bob"),
            Link::new("bob", "carol"),
            Link::new("carol", "alice"),
        ]
    );
}

#[test]
fn test_repeated_reports_do_not_duplicate_nodes() {
    let mut store = GraphStore::new();
    let mut batch = report("alice", &[("successor", "bob")]);
    batch.extend(report("bob", &[("successor", "alice")]));

    store.merge(&batch);
    let nodes_after_first = store.node_count();
    store.merge(&batch);

    assert_eq!(store.node_count(), nodes_after_first);
    assert_eq!(store.link_count(), 2);
}

#[test]
fn test_new_report_replaces_stale_link() {
    let mut store = GraphStore::new();
    store.merge(&report("A", &[("x", "B")]));
    store.merge(&report("A", &[("y", "C")]));

    let graph = store.snapshot();
    let from_a: Vec<&Link> = graph
        .links
        .iter()
        .filter(|l| l.source.as_str() == "A")
        .collect();
    assert_eq!(from_a, vec![&Link::new("A", "C")]);

    // B was only ever a target, but targets become nodes and stay
    assert!(graph.nodes.contains(&Node::new("B")));
    assert!(graph.nodes.contains(&Node::new("C")));
}

#[test]
fn test_empty_value_changes_nothing() {
    let mut store = GraphStore::new();
    store.merge(&report("A", &[("successor", "B")]));

    let before = store.snapshot();
    store.merge(&report("A", &[("successor", "")]));

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_at_most_one_outgoing_link_per_source() {
    let mut store = GraphStore::new();

    // A peer that reports several neighbors still ends up with one link
    let mut batch = report(
        "alice",
        &[("successor", "bob"), ("predecessor", "carol"), ("spare", "dave")],
    );
    batch.extend(report("bob", &[("successor", "carol")]));
    store.merge(&batch);

    let graph = store.snapshot();
    for node in &graph.nodes {
        let outgoing = graph
            .links
            .iter()
            .filter(|l| l.starts_from(&node.name))
            .count();
        assert!(outgoing <= 1);
    }
    // alice -> dave (last entry wins), bob -> carol
    assert_eq!(graph.links.len(), 2);
}

#[tokio::test]
async fn test_snapshot_consistency_under_concurrent_merges() {
    let store = Arc::new(RwLock::new(GraphStore::new()));
    let peers = 8usize;

    let mut writers = Vec::new();
    for i in 0..peers {
        let store = Arc::clone(&store);
        writers.push(tokio::spawn(async move {
            for round in 0..50 {
                let target = format!("peer-{}", (i + round) % 8);
                let batch = report(&format!("peer-{}", i), &[("successor", &target)]);
                store.write().await.merge(&batch);
            }
        }));
    }

    let reader = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for _ in 0..200 {
                let graph = store.read().await.snapshot();
                for link in &graph.links {
                    assert!(
                        graph.nodes.iter().any(|n| n.name == link.source),
                        "link source {} missing from node set",
                        link.source
                    );
                    assert!(
                        graph.nodes.iter().any(|n| n.name == link.target),
                        "link target {} missing from node set",
                        link.target
                    );
                }
                tokio::task::yield_now().await;
            }
        })
    };

    for writer in writers {
        writer.await.unwrap();
    }
    reader.await.unwrap();

    // Every peer reported at least once, so each holds exactly one link
    let graph = store.read().await.snapshot();
    assert_eq!(graph.nodes.len(), peers);
    assert_eq!(graph.links.len(), peers);
}

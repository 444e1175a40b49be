//! Search graphs survive a write/read cycle through the filesystem with
//! their digest intact, and carry the metadata auditors rely on.

use reach_kernel::proof::hash::canonical_hash;
use reach_kernel::proof::hash_domain::HashDomain;
use reach_puzzles::family::CostModel;
use reach_puzzles::{solve, Puzzle};
use reach_search::{SearchOrder, SearchPolicy};

#[test]
fn persisted_graph_rehashes_to_same_digest() {
    let solution = solve(Puzzle::Family(CostModel::Noise1), &SearchPolicy::default(), true).unwrap();
    let graph = solution.graph.expect("graph was requested");

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("search_graph.json");
    std::fs::write(&path, graph.to_canonical_json_bytes().unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(
        canonical_hash(HashDomain::SearchGraph, &bytes),
        graph.digest().unwrap()
    );

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let metadata = &json["metadata"];
    assert_eq!(metadata["order"], "cheapest_first");
    assert_eq!(metadata["termination_reason"]["type"], "goal_reached");
    assert_eq!(metadata["total_expansions"], solution.stats.expansions);
    assert_eq!(
        json["expansions"].as_array().map(Vec::len),
        usize::try_from(solution.stats.expansions).ok()
    );
}

#[test]
fn expansion_events_are_in_order_and_link_to_parents() {
    let policy = SearchPolicy::with_order(SearchOrder::BreadthFirst);
    let solution = solve(Puzzle::Frogs(3), &policy, true).unwrap();
    let graph = solution.graph.unwrap();

    let mut enqueued = std::collections::BTreeSet::from([0u64]);
    for (i, event) in graph.expansions.iter().enumerate() {
        assert_eq!(event.expansion_order, i as u64);
        // Only nodes that were enqueued earlier can be expanded.
        assert!(enqueued.contains(&event.node_id), "node {}", event.node_id);
        for record in &event.successors {
            if let reach_search::graph::SuccessorOutcome::Enqueued { to_node } = record.outcome {
                assert!(enqueued.insert(to_node));
            }
        }
    }
}

#[test]
fn policy_digest_binds_budgets() {
    let bounded = SearchPolicy {
        max_expansions: Some(1_000),
        ..SearchPolicy::default()
    };
    let a = solve(Puzzle::Crossing, &SearchPolicy::default(), true).unwrap();
    let b = solve(Puzzle::Crossing, &bounded, true).unwrap();
    let (ga, gb) = (a.graph.unwrap(), b.graph.unwrap());

    // Same exploration, different configuration: only the binding differs.
    assert_eq!(ga.expansions, gb.expansions);
    assert_ne!(
        ga.metadata.search_policy_digest,
        gb.metadata.search_policy_digest
    );
    assert_ne!(ga.digest().unwrap(), gb.digest().unwrap());
}

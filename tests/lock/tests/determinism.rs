//! In-process determinism: repeated and concurrent runs produce identical
//! traces and byte-identical search graphs.

use std::sync::Arc;
use std::thread;

use lock_tests::fixture::fixture_lines;
use reach_puzzles::family::{self, CostModel};
use reach_puzzles::frogs::{self, Stones};
use reach_search::{run, GraphRecorder, Reachability, SearchOrder, SearchPolicy};

#[test]
fn fixture_is_stable_n5() {
    let first = fixture_lines();
    for _ in 1..5 {
        assert_eq!(first, fixture_lines());
    }
}

#[test]
fn graph_bytes_are_identical_n10() {
    let space = frogs::state_space(3);
    let finish = Stones::finish(3);
    let policy = SearchPolicy::with_order(SearchOrder::DepthFirst);

    let record = || {
        let mut recorder = GraphRecorder::for_policy(&policy).unwrap();
        run(&space, |s: &Stones| *s == finish, &policy, &mut recorder).unwrap();
        recorder.into_graph().unwrap().to_canonical_json_bytes().unwrap()
    };

    let first = record();
    for _ in 1..10 {
        assert_eq!(first, record());
    }
}

#[test]
fn shared_space_concurrent_runs_agree() {
    let space = Arc::new(family::state_space(CostModel::Noise1));
    let expected = space.search(family::is_goal, SearchOrder::CheapestFirst).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let space = Arc::clone(&space);
            thread::spawn(move || space.search(family::is_goal, SearchOrder::CheapestFirst).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

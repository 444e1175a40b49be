//! Single source of truth for the cross-process fixture output.
//!
//! Used by both the `trace_fixture` binary and the in-process determinism
//! tests, so what the child process prints and what the test expects can
//! never drift apart.

use reach_puzzles::family::CostModel;
use reach_puzzles::{solve, Puzzle};
use reach_search::{SearchOrder, SearchPolicy};
use sha2::{Digest, Sha256};

/// The scenarios covered by the fixture, each with a stable label.
#[must_use]
pub fn scenarios() -> Vec<(&'static str, Puzzle, SearchOrder)> {
    vec![
        ("crossing_bfs", Puzzle::Crossing, SearchOrder::BreadthFirst),
        ("crossing_dfs", Puzzle::Crossing, SearchOrder::DepthFirst),
        ("frogs2_bfs", Puzzle::Frogs(2), SearchOrder::BreadthFirst),
        ("frogs2_dfs", Puzzle::Frogs(2), SearchOrder::DepthFirst),
        ("frogs3_bfs", Puzzle::Frogs(3), SearchOrder::BreadthFirst),
        ("family_depth", Puzzle::Family(CostModel::Depth), SearchOrder::CheapestFirst),
        ("family_noise1", Puzzle::Family(CostModel::Noise1), SearchOrder::CheapestFirst),
        ("family_noise2", Puzzle::Family(CostModel::Noise2), SearchOrder::CheapestFirst),
    ]
}

/// Solve every scenario and render `key=value` lines.
///
/// Per scenario: trace digest, search-graph digest, a plain SHA-256 of the
/// rendered trace text, trace length, expansions and termination reason.
///
/// # Panics
///
/// Panics if a scenario fails to run; every scenario is known to solve.
#[must_use]
pub fn fixture_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for (label, puzzle, order) in scenarios() {
        let solution = solve(puzzle, &SearchPolicy::with_order(order), true)
            .unwrap_or_else(|e| panic!("{label}: {e}"));
        let graph = solution
            .graph
            .as_ref()
            .unwrap_or_else(|| panic!("{label}: graph was requested"));
        let graph_digest = graph
            .digest()
            .unwrap_or_else(|e| panic!("{label}: {e}"));
        let rendered_sha256 = hex::encode(Sha256::digest(solution.render().as_bytes()));

        lines.push(format!("{label}.trace_digest={}", solution.trace_digest));
        lines.push(format!("{label}.graph_digest={graph_digest}"));
        lines.push(format!("{label}.rendered_sha256={rendered_sha256}"));
        lines.push(format!("{label}.length={}", solution.states.len()));
        lines.push(format!("{label}.expansions={}", solution.stats.expansions));
        lines.push(format!("{label}.termination={}", solution.termination.as_str()));
    }
    lines
}

/// Parse fixture output back into `(key, value)` pairs.
#[must_use]
pub fn parse_lines(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Look up one key in parsed fixture output.
#[must_use]
pub fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

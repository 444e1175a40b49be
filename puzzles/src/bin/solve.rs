//! Solve a reference puzzle and print the witness trace.
//!
//! Usage:
//!
//! ```text
//! solve <crossing|frogs|family> [--order bfs|dfs|cheapest] [--frogs N]
//!       [--cost depth|noise1|noise2] [--max-expansions N] [--max-nodes N]
//!       [--graph-out PATH]
//! ```
//!
//! The trace goes to stdout, one `step: state` line per state. Logging goes
//! to stderr and honours `RUST_LOG`. Exit status is 0 when a goal was
//! reached, 1 when none was, 2 on usage or run errors.

use std::path::PathBuf;
use std::process::ExitCode;

use reach_puzzles::family::CostModel;
use reach_puzzles::{solve, Puzzle, PuzzleError, RunError};
use reach_search::{SearchError, SearchOrder, SearchPolicy};

#[derive(Debug)]
enum SolveError {
    Usage { detail: String },
    Puzzle(PuzzleError),
    Order(SearchError),
    Run(RunError),
    GraphWrite { path: PathBuf, detail: String },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage { detail } => write!(f, "{detail}\n\n{USAGE}"),
            Self::Puzzle(e) => write!(f, "{e}"),
            Self::Order(e) => write!(f, "{e}"),
            Self::Run(e) => write!(f, "{e}"),
            Self::GraphWrite { path, detail } => {
                write!(f, "cannot write search graph to {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for SolveError {}

const USAGE: &str = "usage: solve <crossing|frogs|family> [--order bfs|dfs|cheapest] \
[--frogs N] [--cost depth|noise1|noise2] [--max-expansions N] [--max-nodes N] [--graph-out PATH]";

struct Args {
    puzzle: Puzzle,
    policy: SearchPolicy,
    graph_out: Option<PathBuf>,
}

fn usage(detail: impl Into<String>) -> SolveError {
    SolveError::Usage {
        detail: detail.into(),
    }
}

fn parse_count(flag: &str, value: &str) -> Result<u64, SolveError> {
    value
        .parse()
        .map_err(|_| usage(format!("{flag} expects a non-negative integer, got {value:?}")))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, SolveError> {
    let name = argv.next().ok_or_else(|| usage("missing puzzle name"))?;
    let mut policy = SearchPolicy::default();
    let mut frogs = 2usize;
    let mut cost = CostModel::default();
    let mut graph_out = None;

    while let Some(flag) = argv.next() {
        let value = argv
            .next()
            .ok_or_else(|| usage(format!("{flag} needs a value")))?;
        match flag.as_str() {
            "--order" => policy.order = value.parse::<SearchOrder>().map_err(SolveError::Order)?,
            "--frogs" => {
                frogs = usize::try_from(parse_count(&flag, &value)?)
                    .map_err(|_| usage("--frogs is too large"))?;
            }
            "--cost" => cost = value.parse().map_err(SolveError::Puzzle)?,
            "--max-expansions" => policy.max_expansions = Some(parse_count(&flag, &value)?),
            "--max-nodes" => policy.max_nodes = Some(parse_count(&flag, &value)?),
            "--graph-out" => graph_out = Some(PathBuf::from(value)),
            other => return Err(usage(format!("unknown option {other}"))),
        }
    }

    let puzzle = Puzzle::parse(&name, frogs, cost).map_err(SolveError::Puzzle)?;
    Ok(Args {
        puzzle,
        policy,
        graph_out,
    })
}

fn execute(args: &Args) -> Result<bool, SolveError> {
    let solution = solve(args.puzzle, &args.policy, args.graph_out.is_some())
        .map_err(SolveError::Run)?;

    if let (Some(path), Some(graph)) = (&args.graph_out, &solution.graph) {
        let write_failed = |detail: String| SolveError::GraphWrite {
            path: path.clone(),
            detail,
        };
        let bytes = graph
            .to_canonical_json_bytes()
            .map_err(|e| write_failed(e.to_string()))?;
        std::fs::write(path, bytes).map_err(|e| write_failed(e.to_string()))?;
        log::info!("search graph written to {}", path.display());
    }

    if solution.is_solved() {
        print!("{}", solution.render());
        if let Some(cost) = &solution.goal_cost {
            println!("cost: {cost}");
        }
    } else {
        println!("no solution ({})", solution.termination.as_str());
    }
    Ok(solution.is_solved())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match parse_args(std::env::args().skip(1)).and_then(|args| execute(&args)) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("solve: {e}");
            ExitCode::from(2)
        }
    }
}

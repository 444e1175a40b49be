//! Binary that solves every fixture scenario and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `trace_fixture`
//!
//! Output: `key=value` lines, six per scenario (see `lock_tests::fixture`).

fn main() {
    for line in lock_tests::fixture::fixture_lines() {
        println!("{line}");
    }
}

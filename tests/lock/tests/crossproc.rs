//! Cross-process determinism: the `trace_fixture` binary is spawned under
//! several environment variants and must print exactly what the in-process
//! fixture computes.

use std::path::Path;
use std::process::Command;

use lock_tests::fixture::{fixture_lines, parse_lines, scenarios, value};

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_trace_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "trace_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    let pairs = parse_lines(&baseline);
    assert_eq!(pairs.len(), scenarios().len() * 6);
    for (label, _, _) in scenarios() {
        let termination = value(&pairs, &format!("{label}.termination"));
        assert_eq!(termination, Some("goal_reached"), "{label}");
        let digest = value(&pairs, &format!("{label}.trace_digest")).unwrap_or_default();
        assert!(digest.starts_with("sha256:"), "{label}: {digest}");
    }

    // Variant 2: different cwd.
    let alt_cwd = std::env::temp_dir();
    let alt = run_variant(&alt_cwd.to_string_lossy(), &[]);
    assert_eq!(baseline, alt, "output differs when cwd changes");

    // Variant 3: locale.
    let locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, locale, "output differs under LC_ALL=C");

    // Variant 4: RUST_LOG set.
    let logged = run_variant(&root, &[("RUST_LOG", "trace")]);
    assert_eq!(baseline, logged, "output differs with RUST_LOG=trace");
}

#[test]
fn crossproc_matches_inproc() {
    let child = run_variant(&workspace_root(), &[]);
    let expected: String = fixture_lines().iter().map(|l| format!("{l}\n")).collect();
    assert_eq!(child, expected);
}

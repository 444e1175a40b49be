//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. The domain set has the expected count (catches forgotten additions to `ALL`)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated
//! 4. All domains follow the `REACH::*::V1\0` naming convention
//! 5. No raw `REACH::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use reach_kernel::proof::hash_domain::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"REACH::"), "{domain} does not start with REACH::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

/// Scan kernel/, search/ and puzzles/ source for `b"REACH::` literals.
/// The only file allowed to contain them is `hash_domain.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../puzzles/src"),
    ];

    let pattern = "b\"REACH::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();

    for dir in production_dirs {
        for path in walkdir(Path::new(dir)) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw REACH:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

/// Simple recursive directory walker (avoids adding walkdir dependency).
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}

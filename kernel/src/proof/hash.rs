//! Content-addressed hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_bytes || payload`. Digests render as
//! `"sha256:<lowercase hex>"`.

use sha2::{Digest, Sha256};

use super::hash_domain::HashDomain;

const SHA256_PREFIX: &str = "sha256";

/// A content hash in `"algorithm:hex_digest"` form.
///
/// Invariant: exactly one `:` with non-empty text on both sides
/// (enforced by [`ContentHash::parse`] and by construction in [`canonical_hash`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse `"algorithm:hex"`. Returns `None` on a missing or misplaced colon.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Hash `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("{SHA256_PREFIX}:{hex_digest}"),
        colon: SHA256_PREFIX.len(),
    }
}

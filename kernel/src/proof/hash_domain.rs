//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]; this module is
//! the single authority for the separator byte strings.

/// Declares `HashDomain`, `as_bytes()`, `ALL` and `Display` from one list.
macro_rules! hash_domains {
    ( $( $(#[$meta:meta])* $variant:ident => $bytes:expr ),+ $(,)? ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix fed to SHA-256
        /// ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $( $(#[$meta])* $variant, )+
        }

        impl HashDomain {
            /// The raw separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[ $( Self::$variant, )+ ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

hash_domains! {
    /// A whole solution trace (ordered states, start to goal).
    Trace => b"REACH::TRACE::V1\0",

    /// A single state inside a trace.
    TraceState => b"REACH::TRACE_STATE::V1\0",

    /// The search-graph audit log of one run.
    SearchGraph => b"REACH::SEARCH_GRAPH::V1\0",

    /// The search policy a run was configured with.
    SearchPolicy => b"REACH::SEARCH_POLICY::V1\0",
}

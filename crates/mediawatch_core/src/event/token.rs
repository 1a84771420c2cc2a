//! Token set model and prefix classifier.
//!
//! # Responsibility
//! - Split one event line on `,` into distinct tokens.
//! - Report unique token count and whether any recognized prefix is present.
//!
//! # Invariants
//! - Splitting never drops empty substrings; `""` is a valid token.
//! - Prefix matching is case-sensitive and does not trim whitespace.

use std::collections::BTreeSet;

/// Token separator used by the upstream device watcher.
pub const TOKEN_SEPARATOR: char = ',';
/// Prefix of microphone tokens, e.g. `mic:built-in`.
pub const MIC_PREFIX: &str = "mic:";
/// Prefix of camera tokens, e.g. `cam:webcam1`.
pub const CAM_PREFIX: &str = "cam:";

/// Prefixes recognized by the microphone report.
pub const MIC_PREFIXES: &[&str] = &[MIC_PREFIX];
/// Prefixes recognized by the media toggle.
pub const MEDIA_PREFIXES: &[&str] = &[CAM_PREFIX, MIC_PREFIX];

/// Distinct tokens carried by one event line.
///
/// Ordering is irrelevant to callers; a `BTreeSet` keeps debug output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    /// Parses one event line.
    ///
    /// An empty line yields exactly one empty token.
    pub fn parse(line: &str) -> Self {
        Self {
            tokens: line.split(TOKEN_SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// Number of distinct tokens, empty token included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false` for parsed lines; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Returns whether any token starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.tokens.iter().any(|token| token.starts_with(prefix))
    }

    /// Returns whether any token starts with any of `prefixes`.
    pub fn has_any_prefix(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|prefix| self.has_prefix(prefix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Result of classifying one event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Count of distinct comma-separated substrings.
    pub unique_services: usize,
    /// True when at least one token carries a recognized prefix.
    pub matched: bool,
}

/// Stateless classifier over a fixed prefix list.
#[derive(Debug, Clone, Copy)]
pub struct TokenClassifier {
    prefixes: &'static [&'static str],
}

impl TokenClassifier {
    pub const fn new(prefixes: &'static [&'static str]) -> Self {
        Self { prefixes }
    }

    /// Classifier for `mic:` tokens only.
    pub const fn microphone() -> Self {
        Self::new(MIC_PREFIXES)
    }

    /// Classifier for `cam:` and `mic:` tokens.
    pub const fn media() -> Self {
        Self::new(MEDIA_PREFIXES)
    }

    pub fn classify(&self, line: &str) -> Classification {
        let tokens = TokenSet::parse(line);
        Classification {
            unique_services: tokens.len(),
            matched: tokens.has_any_prefix(self.prefixes),
        }
    }
}

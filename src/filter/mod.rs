//! # Line Filter
//!
//! Selects the benchmark rows of a raw log. Benchmark output is interleaved with
//! test-runner chatter (`=== RUN`, `--- PASS`, compiler noise), and the only thing
//! that marks a result row is its leading token, so selection is a plain
//! case-sensitive prefix match on the trimmed line.
//!
//! The prefix must come from the recognized set in a [`PrefixRegistry`]; asking
//! for any other prefix is a configuration error, reported before a single line
//! is examined.

mod error;


use std::collections::BTreeSet;

use serde::Serialize;

use crate::system::SourceSystem;

pub use error::FilterError;

/// A single line of log text with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    /// Line number in the original input (1-based)
    pub number: usize,
    /// Line content
    pub text: String,
}

impl LogLine {
    /// Create a log line
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Split a text blob into numbered log lines.
pub fn log_lines(text: &str) -> Vec<LogLine> {
    text.lines()
        .enumerate()
        .map(|(i, line)| LogLine::new(i + 1, line))
        .collect()
}

/// The set of prefixes a filter may be built for.
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    prefixes: BTreeSet<String>,
}

impl PrefixRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing the family prefix of every source system
    pub fn with_family_prefixes() -> Self {
        let mut registry = Self::new();
        for system in SourceSystem::ALL {
            registry.register(system.family_prefix());
        }
        registry
    }

    /// Add a recognized prefix. Empty prefixes are ignored.
    pub fn register(&mut self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.prefixes.insert(prefix);
        }
    }

    /// Check whether a prefix is recognized
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Iterate over recognized prefixes in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Number of recognized prefixes
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

/// Prefix filter over log lines.
#[derive(Debug, Clone)]
pub struct LineFilter {
    prefix: String,
}

impl LineFilter {
    /// Build a filter for `prefix`, which must be present in `registry`.
    pub fn new(registry: &PrefixRegistry, prefix: &str) -> Result<Self, FilterError> {
        if prefix.is_empty() {
            return Err(FilterError::EmptyPrefix);
        }
        if !registry.contains(prefix) {
            return Err(FilterError::UnrecognizedPrefix {
                prefix: prefix.to_string(),
                known: registry.iter().collect::<Vec<_>>().join(", "),
            });
        }
        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    /// Build a filter for one system's rows.
    ///
    /// The prefix must belong to the system's benchmark family as well as to
    /// `registry`.
    pub fn for_system(
        registry: &PrefixRegistry,
        system: SourceSystem,
        prefix: &str,
    ) -> Result<Self, FilterError> {
        if !prefix.is_empty() && !prefix.starts_with(system.family_prefix()) {
            return Err(FilterError::ForeignPrefix {
                prefix: prefix.to_string(),
                system,
            });
        }
        Self::new(registry, prefix)
    }

    /// The prefix this filter selects
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the trimmed line if it starts with the prefix.
    pub fn matches<'a>(&self, line: &'a str) -> Option<&'a str> {
        let trimmed = line.trim();
        trimmed.starts_with(&self.prefix).then_some(trimmed)
    }

    /// Select matching lines, preserving order and line numbers.
    ///
    /// Selected lines carry their trimmed text.
    pub fn select<I>(&self, lines: I) -> Vec<LogLine>
    where
        I: IntoIterator<Item = LogLine>,
    {
        lines
            .into_iter()
            .filter_map(|line| {
                self.matches(&line.text)
                    .map(|text| LogLine::new(line.number, text))
            })
            .collect()
    }

    /// Number and select the lines of a text blob.
    pub fn select_text(&self, text: &str) -> Vec<LogLine> {
        self.select(log_lines(text))
    }
}

//! Source systems under comparison.
//!
//! Each benchmark harness tags its result rows with its own line prefix
//! (`TestBench...` for the Go harness, `bench_...` for the Rust harness), so the
//! system a log came from determines which prefixes and column layouts apply.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::filter::FilterError;

/// One of the two benchmark-producing implementations being compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceSystem {
    /// First system; its harness prints rows starting with `TestBench`.
    SystemA,
    /// Second system; its harness prints rows starting with `bench_`.
    SystemB,
}

impl SourceSystem {
    /// Both systems, in plotting order.
    pub const ALL: [SourceSystem; 2] = [SourceSystem::SystemA, SourceSystem::SystemB];

    /// Prefix shared by every benchmark row this system's harness emits.
    pub fn family_prefix(&self) -> &'static str {
        match self {
            SourceSystem::SystemA => "TestBench",
            SourceSystem::SystemB => "bench_",
        }
    }

    /// Default legend entry for plots.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceSystem::SystemA => "SystemA",
            SourceSystem::SystemB => "SystemB",
        }
    }

    /// Returns all accepted system tokens.
    pub fn variants() -> &'static [&'static str] {
        &["system-a", "system-b"]
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSystem::SystemA => write!(f, "system-a"),
            SourceSystem::SystemB => write!(f, "system-b"),
        }
    }
}

impl FromStr for SourceSystem {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system-a" | "systema" | "a" | "pav" => Ok(SourceSystem::SystemA),
            "system-b" | "systemb" | "b" | "akd" => Ok(SourceSystem::SystemB),
            _ => Err(FilterError::UnknownSystem(s.to_string())),
        }
    }
}

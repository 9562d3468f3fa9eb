use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ColumnLayout, FieldSpec, LayoutBuilder, LayoutError, Marker, MetricKind};
use crate::extract::FieldExtractor;
use crate::filter::{LogLine, PrefixRegistry};
use crate::system::SourceSystem;

/// Version of the built-in offset table. Bump whenever a built-in offset moves.
pub const BUILTIN_TABLE_VERSION: u32 = 1;

const GEN_LATENCY_LABEL: &str = r"Get Generate Latency (\si{\micro\second}/op)";
const VERIFY_LATENCY_LABEL: &str = r"Get Verify Latency (\si{\micro\second}/op)";
const P99_LATENCY_LABEL: &str = r"p99 Latency (\si{\micro\second})";
const THROUGHPUT_LABEL: &str = "Throughput (op/s)";

/// Key of a layout in the table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutKey {
    /// System whose harness produced the rows
    pub system: SourceSystem,
    /// Name of the metric set, e.g. `get-verify`
    pub metric_set: String,
}

impl LayoutKey {
    /// Create a key
    pub fn new(system: SourceSystem, metric_set: impl Into<String>) -> Self {
        Self {
            system,
            metric_set: metric_set.into(),
        }
    }
}

impl fmt::Display for LayoutKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.system, self.metric_set)
    }
}

/// Serialized form of a layout, as written in `[[layout]]` config entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDef {
    /// System the layout applies to
    pub system: SourceSystem,

    /// Metric set name
    pub metric_set: String,

    /// Row prefix
    pub prefix: String,

    /// Fields to read
    pub fields: Vec<FieldSpec>,

    /// Minimum token count (defaults to one past the highest offset)
    #[serde(default)]
    pub min_columns: Option<usize>,

    /// Literal shape markers
    #[serde(default)]
    pub markers: Vec<Marker>,

    /// Example row that must extract cleanly
    #[serde(default)]
    pub sample: Option<String>,
}

impl LayoutDef {
    /// Build and validate the layout, including the sample line if present.
    pub fn into_layout(self) -> Result<(LayoutKey, ColumnLayout), LayoutError> {
        let mut builder = ColumnLayout::builder(self.prefix);
        for field in self.fields {
            builder = builder.field_spec(field);
        }
        for marker in self.markers {
            builder = builder.marker(marker.column, marker.token);
        }
        if let Some(n) = self.min_columns {
            builder = builder.min_columns(n);
        }
        let layout = builder.build()?;

        if let Some(sample) = &self.sample {
            check_sample(&layout, self.system, sample)?;
        }

        Ok((LayoutKey::new(self.system, self.metric_set), layout))
    }
}

fn check_sample(layout: &ColumnLayout, system: SourceSystem, sample: &str) -> Result<(), LayoutError> {
    let sample = sample.trim();
    if !sample.starts_with(layout.prefix()) {
        return Err(LayoutError::SampleRejected {
            prefix: layout.prefix().to_string(),
            reason: "sample does not start with the layout prefix".to_string(),
        });
    }
    FieldExtractor::new(layout, system)
        .extract(&LogLine::new(0, sample))
        .map(|_| ())
        .map_err(|reason| LayoutError::SampleRejected {
            prefix: layout.prefix().to_string(),
            reason: reason.to_string(),
        })
}

/// Versioned mapping from (system, metric set) to column layout.
#[derive(Debug, Clone)]
pub struct LayoutTable {
    version: u32,
    layouts: BTreeMap<LayoutKey, ColumnLayout>,
}

impl LayoutTable {
    /// Create an empty table
    pub fn new(version: u32) -> Self {
        Self {
            version,
            layouts: BTreeMap::new(),
        }
    }

    /// The offset table for the stock benchmark harnesses.
    ///
    /// | Key | Prefix | Fields |
    /// |-----|--------|--------|
    /// | system-a/get-verify | `TestBenchGetVerify` | gen_latency@2, verify_latency@6 |
    /// | system-b/get-verify | `bench_get_verify` | gen_latency@2, verify_latency@6 |
    /// | system-a/get-scale | `TestBenchGetScale` | clients@2, throughput@4, p99_latency@10 |
    /// | system-a/put-scale | `TestBenchPutScale` | clients@2, throughput@4, p99_latency@10 |
    pub fn builtin() -> Self {
        let mut table = Self::new(BUILTIN_TABLE_VERSION);

        for (system, prefix) in [
            (SourceSystem::SystemA, "TestBenchGetVerify"),
            (SourceSystem::SystemB, "bench_get_verify"),
        ] {
            table.insert_builtin(system, "get-verify", get_verify_layout(prefix));
        }

        for (metric_set, prefix) in [
            ("get-scale", "TestBenchGetScale"),
            ("put-scale", "TestBenchPutScale"),
        ] {
            table.insert_builtin(SourceSystem::SystemA, metric_set, scale_layout(prefix));
        }

        table
    }

    fn insert_builtin(&mut self, system: SourceSystem, metric_set: &str, layout: ColumnLayout) {
        self.layouts.insert(LayoutKey::new(system, metric_set), layout);
    }

    /// Table version
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Number of layouts
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Whether the table has no layouts
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Insert a layout, returning the one it replaced
    pub fn insert(&mut self, key: LayoutKey, layout: ColumnLayout) -> Option<ColumnLayout> {
        self.layouts.insert(key, layout)
    }

    /// Look up the layout for a system and metric set
    pub fn get(&self, system: SourceSystem, metric_set: &str) -> Result<&ColumnLayout, LayoutError> {
        self.layouts
            .get(&LayoutKey::new(system, metric_set))
            .ok_or_else(|| LayoutError::UnknownLayout {
                system,
                metric_set: metric_set.to_string(),
                available: self.metric_sets(system).join(", "),
            })
    }

    /// Metric sets registered for a system
    pub fn metric_sets(&self, system: SourceSystem) -> Vec<&str> {
        self.layouts
            .keys()
            .filter(|k| k.system == system)
            .map(|k| k.metric_set.as_str())
            .collect()
    }

    /// Iterate over all layouts in key order
    pub fn iter(&self) -> impl Iterator<Item = (&LayoutKey, &ColumnLayout)> {
        self.layouts.iter()
    }

    /// Apply layout definitions on top of this table.
    ///
    /// Definitions replace existing layouts with the same key. The whole batch is
    /// validated before anything is inserted, so a bad definition leaves the
    /// table untouched.
    pub fn merge(&mut self, defs: Vec<LayoutDef>, version: Option<u32>) -> Result<(), LayoutError> {
        let built = defs
            .into_iter()
            .map(LayoutDef::into_layout)
            .collect::<Result<Vec<_>, _>>()?;

        for (key, layout) in built {
            if self.layouts.insert(key.clone(), layout).is_some() {
                log::debug!("Layout {} overridden by configuration", key);
            }
        }
        if let Some(version) = version {
            self.version = version;
        }
        Ok(())
    }

    /// Every prefix a filter may be built for: system families plus layout prefixes.
    pub fn prefix_registry(&self) -> PrefixRegistry {
        let mut registry = PrefixRegistry::with_family_prefixes();
        for layout in self.layouts.values() {
            registry.register(layout.prefix());
        }
        registry
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn get_verify_layout(prefix: &str) -> ColumnLayout {
    builtin_layout(
        ColumnLayout::builder(prefix)
            .field_spec(
                FieldSpec::new("gen_latency", 2, MetricKind::Continuous)
                    .with_label(GEN_LATENCY_LABEL),
            )
            .field_spec(
                FieldSpec::new("verify_latency", 6, MetricKind::Continuous)
                    .with_label(VERIFY_LATENCY_LABEL),
            )
            .min_columns(7),
    )
}

fn scale_layout(prefix: &str) -> ColumnLayout {
    builtin_layout(
        ColumnLayout::builder(prefix)
            .field("clients", 2, MetricKind::Count)
            .field_spec(
                FieldSpec::new("throughput", 4, MetricKind::Count).with_label(THROUGHPUT_LABEL),
            )
            .field_spec(
                FieldSpec::new("p99_latency", 10, MetricKind::Continuous)
                    .with_label(P99_LATENCY_LABEL),
            )
            .min_columns(11),
    )
}

fn builtin_layout(builder: LayoutBuilder) -> ColumnLayout {
    builder.build().expect("built-in layouts are static and valid")
}

//! TOML configuration file support.
//!
//! Layouts for additional benchmarks, legend names and replacement plot
//! templates can be declared in a config file instead of on the command line:
//!
//! ```toml
//! # benchplot.toml
//! [table]
//! version = 2
//!
//! [legend]
//! system_a = "\\vkt"
//! system_b = "AKD"
//!
//! [templates]
//! versions = "figures/versions.tex.in"
//!
//! [[layout]]
//! system = "system-a"
//! metric_set = "get-size"
//! prefix = "TestBenchGetSizeOne"
//! sample = "TestBenchGetSizeOne 1000 1536 B"
//! fields = [{ name = "proof_size", column = 2, kind = "count" }]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use benchplot::layout::{LayoutDef, LayoutTable};
use benchplot::render::PlotSpec;
use benchplot::system::SourceSystem;

/// Root configuration structure for benchplot.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Offset table settings.
    #[serde(default)]
    pub table: TableConfig,

    /// Layouts added to or replacing the built-in table.
    #[serde(default, rename = "layout")]
    pub layouts: Vec<LayoutDef>,

    /// Legend names per system.
    #[serde(default)]
    pub legend: LegendConfig,

    /// Replacement plot templates.
    #[serde(default)]
    pub templates: TemplateConfig,
}

/// Offset table settings.
#[derive(Debug, Default, Deserialize)]
pub struct TableConfig {
    /// Version of the merged table; bump when a layout offset changes.
    pub version: Option<u32>,
}

/// Legend names used by version plots.
#[derive(Debug, Default, Deserialize)]
pub struct LegendConfig {
    /// Legend entry for system A.
    pub system_a: Option<String>,

    /// Legend entry for system B.
    pub system_b: Option<String>,
}

/// Paths of template files replacing the built-in plot templates.
#[derive(Debug, Default, Deserialize)]
pub struct TemplateConfig {
    /// Template for version plots.
    pub versions: Option<PathBuf>,

    /// Template for scale plots.
    pub scale: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Built-in offset table with the configured layouts merged in.
    pub fn layout_table(&self) -> Result<LayoutTable> {
        let mut table = LayoutTable::builtin();
        table
            .merge(self.layouts.clone(), self.table.version)
            .context("Invalid layout in configuration")?;
        Ok(table)
    }

    /// Legend entry for a system, falling back to its display name.
    pub fn legend(&self, system: SourceSystem) -> String {
        let configured = match system {
            SourceSystem::SystemA => self.legend.system_a.as_deref(),
            SourceSystem::SystemB => self.legend.system_b.as_deref(),
        };
        configured.unwrap_or(system.display_name()).to_string()
    }

    /// Version plot spec, from the configured template file if any.
    pub fn versions_spec(&self) -> Result<PlotSpec> {
        match &self.templates.versions {
            Some(path) => load_template("versions", path),
            None => Ok(PlotSpec::versions()?),
        }
    }

    /// Scale plot spec, from the configured template file if any.
    ///
    /// Without a legend the built-in template has no `\legend` line.
    pub fn scale_spec(&self, with_legend: bool) -> Result<PlotSpec> {
        match &self.templates.scale {
            Some(path) => load_template("scale", path),
            None if with_legend => Ok(PlotSpec::scale()?),
            None => Ok(PlotSpec::scale_without_legend()?),
        }
    }
}

fn load_template(name: &str, path: &Path) -> Result<PlotSpec> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path.display()))?;
    PlotSpec::new(name, &source)
        .with_context(|| format!("Invalid template file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [table]
            version = 3

            [legend]
            system_a = "\\vkt"
            system_b = "AKD"

            [[layout]]
            system = "system-a"
            metric_set = "get-size"
            prefix = "TestBenchGetSizeOne"
            fields = [{ name = "proof_size", column = 2, kind = "count" }]
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.table.version, Some(3));
        assert_eq!(config.layouts.len(), 1);
        assert_eq!(config.legend(SourceSystem::SystemA), "\\vkt");
        assert_eq!(config.legend(SourceSystem::SystemB), "AKD");

        let table = config.layout_table().unwrap();
        assert_eq!(table.version(), 3);
        assert!(table.get(SourceSystem::SystemA, "get-size").is_ok());
        assert!(table.get(SourceSystem::SystemA, "get-verify").is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.layouts.is_empty());
        assert_eq!(config.legend(SourceSystem::SystemB), "SystemB");
        assert_eq!(config.layout_table().unwrap().len(), 4);
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let toml = r#"
            [[layout]]
            system = "system-b"
            metric_set = "broken"
            prefix = "bench_broken"
            min_columns = 2
            fields = [{ name = "x", column = 5 }]
        "#;
        let config = Config::from_str(toml).unwrap();
        assert!(config.layout_table().is_err());
    }

    #[test]
    fn test_unknown_system_is_rejected() {
        let toml = r#"
            [[layout]]
            system = "system-c"
            metric_set = "x"
            prefix = "x"
            fields = [{ name = "x", column = 1 }]
        "#;
        assert!(Config::from_str(toml).is_err());
    }

    #[test]
    fn test_template_file_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<<xlabel>>|<<ylabel>>|<<coords>>|<<legend>>").unwrap();

        let config = Config {
            templates: TemplateConfig {
                scale: Some(file.path().to_path_buf()),
                versions: None,
            },
            ..Default::default()
        };

        let spec = config.scale_spec(false).unwrap();
        assert_eq!(spec.template().placeholders().len(), 4);
        assert!(config.versions_spec().is_ok());
    }

    #[test]
    fn test_builtin_scale_spec_follows_legend() {
        let config = Config::default();
        assert!(config.scale_spec(true).unwrap().template().placeholders().contains("legend"));
        assert!(!config.scale_spec(false).unwrap().template().placeholders().contains("legend"));
    }
}

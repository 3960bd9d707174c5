//! CLI Tooling
//!
//! Command-line interface for the sunburst layout operations: load a
//! dataset, lay it out, optionally focus a node, and emit the arcs.

use crate::config::{ConfigLoader, SunburstConfig};
use crate::error::{ApiError, DatasetError};
use crate::hierarchy::{HierarchyBuilder, NodeSpec, Tree};
use crate::tooling::format;
use crate::view::SunburstView;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sunburst CLI - disk-usage sunburst hierarchy and arc layout
#[derive(Parser)]
#[command(name = "sunburst")]
#[command(about = "Builds a hierarchy from path rows and lays it out as sunburst arcs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path segment separator for row datasets (overrides config)
    #[arg(long)]
    pub separator: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lay out a dataset and emit its arc segments
    Arcs {
        /// Dataset file: .json for a pre-shaped tree, anything else is
        /// read as two-column CSV rows
        #[arg(long)]
        input: PathBuf,

        /// Focus a node, named by its separator-joined path, before emitting
        #[arg(long)]
        focus: Option<String>,

        /// Output format (json or table)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Summarize a dataset (node counts, depth, total value)
    Info {
        /// Dataset file
        #[arg(long)]
        input: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Execution context carrying the resolved configuration.
pub struct CliContext {
    config: SunburstConfig,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>, separator: Option<String>) -> Result<Self, ApiError> {
        let mut config = ConfigLoader::load(config_path.as_deref())
            .map_err(|e| ApiError::ConfigError(e.to_string()))?;
        if let Some(separator) = separator {
            config.dataset.separator = separator;
        }
        config.chart.validate()?;
        Ok(CliContext { config })
    }

    pub fn config(&self) -> &SunburstConfig {
        &self.config
    }

    /// Execute a command and return its output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Arcs {
                input,
                focus,
                format,
            } => self.cmd_arcs(input, focus.as_deref(), format),
            Commands::Info { input, format } => self.cmd_info(input, format),
        }
    }

    fn cmd_arcs(&self, input: &Path, focus: Option<&str>, format: &str) -> Result<String, ApiError> {
        let tree = self.load_tree(input)?;
        let mut view = SunburstView::new(tree, self.config.chart.clone());

        if let Some(path) = focus {
            let id = view
                .tree()
                .find_path(path, &self.config.dataset.separator)
                .ok_or_else(|| ApiError::PathNotFound(path.to_string()))?;
            view.focus(id)?;
        }

        let arcs = view.arcs();
        info!(segments = arcs.len(), total = view.total(), "arc layout ready");
        match format {
            "json" => {
                let out = serde_json::to_string_pretty(&arcs).map_err(DatasetError::Json)?;
                Ok(out)
            }
            "table" => Ok(format::arcs_table(&arcs, view.total())),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'json' or 'table')",
                other
            ))),
        }
    }

    fn cmd_info(&self, input: &Path, format: &str) -> Result<String, ApiError> {
        let tree = self.load_tree(input)?;
        let view = SunburstView::new(tree, self.config.chart.clone());
        let tree = view.tree();

        match format {
            "json" => {
                let out = serde_json::to_string_pretty(&json!({
                    "nodes": tree.len(),
                    "leaves": tree.leaf_count(),
                    "max_depth": tree.max_depth(),
                    "total": view.total(),
                }))
                .map_err(DatasetError::Json)?;
                Ok(out)
            }
            "text" => {
                let mut out = String::new();
                out.push_str(&status_line("nodes", &tree.len().to_string()));
                out.push_str(&status_line("leaves", &tree.leaf_count().to_string()));
                out.push_str(&status_line("max depth", &tree.max_depth().to_string()));
                out.push_str(&status_line(
                    "total",
                    &format!("{} ({})", view.total(), format::human_size(view.total())),
                ));
                Ok(out.trim_end().to_string())
            }
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    /// Load a dataset by extension: `.json` is a pre-shaped tree, anything
    /// else is two-column CSV rows.
    fn load_tree(&self, input: &Path) -> Result<Tree, ApiError> {
        let is_json = input
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            let raw = std::fs::read_to_string(input).map_err(DatasetError::Io)?;
            let spec: NodeSpec = serde_json::from_str(&raw).map_err(DatasetError::Json)?;
            Ok(Tree::from_spec(&spec))
        } else {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(input)
                .map_err(DatasetError::Csv)?;
            let mut rows = Vec::new();
            for record in reader.records() {
                let record = record.map_err(DatasetError::Csv)?;
                // Short records are skipped like malformed sizes.
                if let (Some(path), Some(size)) = (record.get(0), record.get(1)) {
                    rows.push((path.to_string(), size.to_string()));
                }
            }
            let builder = HierarchyBuilder::with_separator(self.config.dataset.separator.as_str());
            Ok(builder.build(rows))
        }
    }
}

fn status_line(label: &str, value: &str) -> String {
    format!("{:<12} {}\n", format!("{}:", label), value)
}

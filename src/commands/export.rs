// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - exports the route graph to various formats

use crate::config::Config;
use crate::graph::RouteGraph;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
    /// Three-line edge records
    Records,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            "records" | "txt" => Ok(Self::Records),
            _ => anyhow::bail!("Unknown export format: {}. Supported: dot, json, records", s),
        }
    }
}

impl ExportFormat {
    /// Render `graph` in this format
    pub fn render(self, graph: &RouteGraph) -> Result<String> {
        match self {
            Self::Dot => Ok(graph.to_dot()),
            Self::Json => graph.to_json().context("Failed to serialize graph to JSON"),
            Self::Records => Ok(graph.to_records()),
        }
    }
}

/// Run the export command
pub fn run(config: &Config, format: &str, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format);

    let export_format: ExportFormat = format.parse()?;
    let graph = super::load_graph(config)?;
    let content = export_format.render(&graph)?;

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Vertex};

    #[test]
    fn test_parse_format() {
        assert_eq!("DOT".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!("graphviz".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Records);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_render() {
        let graph = RouteGraph::new(
            ["A", "B"].map(Vertex::new),
            vec![Edge::new("A", "B", 2)],
        )
        .unwrap();

        assert!(ExportFormat::Dot.render(&graph).unwrap().contains("\"A\" -> \"B\""));
        assert!(ExportFormat::Json.render(&graph).unwrap().contains("\"weight\": 2"));
        assert_eq!(ExportFormat::Records.render(&graph).unwrap(), "A\nB\n2\n");
    }
}

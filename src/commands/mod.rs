// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod import;
pub mod mst;
pub mod path;

use crate::config::Config;
use crate::graph::RouteGraph;
use crate::records;
use anyhow::Result;
use tracing::info;

/// Load the route graph from the record files named by `config`
pub fn load_graph(config: &Config) -> Result<RouteGraph> {
    let vertex_path = config.vertex_path();
    let edge_path = config.edge_path();
    info!("Loading graph from {}", config.data_dir.display());

    let graph = records::load_graph(&vertex_path, &edge_path)?;
    if graph.is_empty() {
        eprintln!("Warning: Graph is empty. Run 'flightgraph import' first.");
    }
    Ok(graph)
}

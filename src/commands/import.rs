// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Import command - converts an airfare CSV into record files

use crate::config::Config;
use crate::ingest;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Run the import command
pub fn run(config: &Config, csv: &Path) -> Result<()> {
    info!("Importing: {:?}", csv);

    let table = ingest::import(csv, config)?;

    if table.flights.is_empty() {
        println!(
            "No rows marked '{}' found in {}",
            config.csv.row_marker,
            csv.display()
        );
    }

    println!(
        "Imported {} airports and {} fares",
        table.airports.len(),
        table.flights.len()
    );
    println!("  airports: {}", config.vertex_path().display());
    println!("  fares:    {}", config.edge_path().display());

    Ok(())
}

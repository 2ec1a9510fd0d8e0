// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Airfare CSV ingestion
//!
//! Reads the published quarterly airfare table and turns its data rows into
//! airports and directed fares, ready to be written as record files.

use crate::config::{Config, CsvLayout};
use crate::records;
use crate::types::{Edge, Vertex};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Airports and fares extracted from a CSV table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FareTable {
    /// Distinct airports in first-seen order
    pub airports: Vec<Vertex>,
    /// One fare per data row, in row order
    pub flights: Vec<Edge>,
}

/// Extract airports and fares from CSV text.
///
/// Only lines containing the layout's row marker are read; everything else
/// (headers, notes, other tables) is skipped.
pub fn convert(text: &str, layout: &CsvLayout) -> Result<FareTable> {
    let mut table = FareTable::default();
    let mut seen = HashSet::new();
    let needed = layout
        .source_column
        .max(layout.destination_column)
        .max(layout.fare_column);

    for (number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if !line.contains(&layout.row_marker) {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= needed {
            anyhow::bail!(
                "Line {number} has {} columns, expected at least {}",
                fields.len(),
                needed + 1
            );
        }

        let departure = fields[layout.source_column].trim();
        let arrival = fields[layout.destination_column].trim();
        if departure.is_empty() || arrival.is_empty() {
            anyhow::bail!("Line {number} has an empty airport field");
        }
        let departure = Vertex::new(departure);
        let arrival = Vertex::new(arrival);
        let fare = records::parse_weight(fields[layout.fare_column])
            .with_context(|| format!("Invalid fare on line {number}"))?;

        for airport in [&departure, &arrival] {
            if seen.insert(airport.clone()) {
                table.airports.push(airport.clone());
            }
        }
        table.flights.push(Edge::new(departure, arrival, fare));
    }

    debug!(
        airports = table.airports.len(),
        flights = table.flights.len(),
        "Converted fare table"
    );
    Ok(table)
}

/// Read and convert a CSV file
pub fn convert_file(path: &Path, layout: &CsvLayout) -> Result<FareTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    convert(&content, layout).with_context(|| format!("Failed to convert {}", path.display()))
}

/// Convert a CSV file and write the record files named by `config`
pub fn import(csv_path: &Path, config: &Config) -> Result<FareTable> {
    let table = convert_file(csv_path, &config.csv)?;

    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("Failed to create directory {}", config.data_dir.display()))?;
    records::write_vertices(&config.vertex_path(), &table.airports)?;
    records::write_edges(&config.edge_path(), &table.flights)?;

    info!(
        "Imported {} airports and {} fares into {}",
        table.airports.len(),
        table.flights.len(),
        config.data_dir.display()
    );
    Ok(table)
}

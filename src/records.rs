// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Two-file record format for airports and fares
//!
//! `vertices.txt` holds one airport per line and ends at the first blank
//! line. `edges.txt` holds three-line records: departure, arrival, fare.
//! Fares may be decimal and are truncated toward zero.

use crate::graph::RouteGraph;
use crate::types::{Edge, Vertex, Weight};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse vertex records, stopping at the first empty line
#[must_use]
pub fn parse_vertices(text: &str) -> Vec<Vertex> {
    text.lines()
        .take_while(|line| !line.is_empty())
        .map(Vertex::new)
        .collect()
}

/// Parse three-line edge records.
///
/// A trailing record with fewer than three lines is dropped.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut edges = Vec::with_capacity(lines.len() / 3);

    let mut records = lines.chunks_exact(3);
    for (record, chunk) in records.by_ref().enumerate() {
        let weight_line = record * 3 + 3;
        let weight = parse_weight(chunk[2])
            .with_context(|| format!("Invalid fare on line {weight_line}: {:?}", chunk[2]))?;
        edges.push(Edge::new(chunk[0], chunk[1], weight));
    }

    let leftover = records.remainder();
    if !leftover.is_empty() {
        warn!(
            lines = leftover.len(),
            "Ignoring incomplete edge record at end of input"
        );
    }

    Ok(edges)
}

/// Parse a fare, truncating any fractional part toward zero.
///
/// Non-finite values and values outside the `Weight` range are rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn parse_weight(text: &str) -> Result<Weight> {
    let value: f64 = text.trim().parse()?;
    if !value.is_finite() {
        anyhow::bail!("Fare is not a finite number: {value}");
    }

    let whole = value.trunc();
    // Weight::MAX rounds up to 2^63 as f64, which is already out of range
    if whole < Weight::MIN as f64 || whole >= Weight::MAX as f64 {
        anyhow::bail!("Fare out of range: {value}");
    }
    Ok(whole as Weight)
}

/// Render vertices one per line
#[must_use]
pub fn format_vertices(vertices: &[Vertex]) -> String {
    let mut out = String::new();
    for vertex in vertices {
        let _ = writeln!(out, "{vertex}");
    }
    out
}

/// Render edges as three-line records
#[must_use]
pub fn format_edges(edges: &[Edge]) -> String {
    let mut out = String::new();
    for edge in edges {
        let _ = writeln!(out, "{}", edge.source());
        let _ = writeln!(out, "{}", edge.destination());
        let _ = writeln!(out, "{}", edge.weight());
    }
    out
}

/// Read a vertex record file
pub fn read_vertices(path: &Path) -> Result<Vec<Vertex>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_vertices(&content))
}

/// Read an edge record file
pub fn read_edges(path: &Path) -> Result<Vec<Edge>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_edges(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write a vertex record file, replacing any existing one
pub fn write_vertices(path: &Path, vertices: &[Vertex]) -> Result<()> {
    fs::write(path, format_vertices(vertices))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write an edge record file, replacing any existing one
pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    fs::write(path, format_edges(edges))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Read both record files and build the graph
pub fn load_graph(vertex_path: &Path, edge_path: &Path) -> Result<RouteGraph> {
    let vertices = read_vertices(vertex_path)?;
    let edges = read_edges(edge_path)?;
    debug!(
        vertices = vertices.len(),
        edges = edges.len(),
        "Loaded records"
    );

    RouteGraph::new(vertices, edges).with_context(|| {
        format!(
            "Invalid graph in {} / {}",
            vertex_path.display(),
            edge_path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_vertices_stops_at_blank_line() {
        let vertices = parse_vertices("SEA\nPDX\n\nBOS\n");
        assert_eq!(vertices, vec![Vertex::new("SEA"), Vertex::new("PDX")]);
    }

    #[test]
    fn test_parse_edges() {
        let edges = parse_edges("SEA\nPDX\n90\nPDX\nSFO\n120.75\n").unwrap();
        assert_eq!(
            edges,
            vec![Edge::new("SEA", "PDX", 90), Edge::new("PDX", "SFO", 120)]
        );
    }

    #[test]
    fn test_parse_edges_drops_incomplete_tail() {
        let edges = parse_edges("A\nB\n1\nC\nD\n").unwrap();
        assert_eq!(edges, vec![Edge::new("A", "B", 1)]);
    }

    #[test]
    fn test_parse_edges_reports_bad_fare_line() {
        let err = parse_edges("A\nB\n1\nC\nD\ncheap\n").unwrap_err();
        assert!(err.to_string().contains("line 6"), "{err}");
    }

    #[test]
    fn test_parse_weight_truncates_toward_zero() {
        assert_eq!(parse_weight("12.99").unwrap(), 12);
        assert_eq!(parse_weight(" 7 ").unwrap(), 7);
        assert_eq!(parse_weight("-2.5").unwrap(), -2);
        assert!(parse_weight("").is_err());
    }

    #[test]
    fn test_parse_weight_rejects_non_finite_and_out_of_range() {
        for text in ["NaN", "inf", "-inf", "1e19", "-1e19"] {
            assert!(parse_weight(text).is_err(), "{text} should be rejected");
        }
        assert_eq!(parse_weight("9e18").unwrap(), 9_000_000_000_000_000_000);
    }

    #[test]
    fn test_parse_edges_rejects_non_finite_fare() {
        let err = parse_edges("A\nB\ninf\n").unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err}");
    }

    #[test]
    fn test_write_and_load_graph() {
        let dir = TempDir::new().unwrap();
        let vertex_path = dir.path().join("vertices.txt");
        let edge_path = dir.path().join("edges.txt");

        write_vertices(&vertex_path, &[Vertex::new("A"), Vertex::new("B")]).unwrap();
        write_edges(&edge_path, &[Edge::new("A", "B", 5)]).unwrap();

        let graph = load_graph(&vertex_path, &edge_path).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_cost(&Vertex::new("A"), &Vertex::new("B")).unwrap(), Some(5));
    }

    #[test]
    fn test_load_graph_surfaces_validation_error() {
        let dir = TempDir::new().unwrap();
        let vertex_path = dir.path().join("vertices.txt");
        let edge_path = dir.path().join("edges.txt");

        write_vertices(&vertex_path, &[Vertex::new("A")]).unwrap();
        write_edges(&edge_path, &[Edge::new("A", "B", 5)]).unwrap();

        let err = load_graph(&vertex_path, &edge_path).unwrap_err();
        assert!(err.chain().any(|cause| cause.to_string().contains("unknown airport 'B'")));
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let err = read_vertices(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }
}

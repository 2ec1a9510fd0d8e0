// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning tree command

use crate::config::Config;
use crate::graph::RouteGraph;
use anyhow::Result;
use std::fmt::Display;
use std::io::Write;

/// Run the mst command
pub fn run(config: &Config) -> Result<()> {
    let graph = super::load_graph(config)?;
    let mut stdout = std::io::stdout().lock();
    report(&graph, &mut stdout)
}

/// Print the airports, the fares and the spanning tree
pub fn report<W: Write>(graph: &RouteGraph, out: &mut W) -> Result<()> {
    let tree = graph.minimum_spanning_tree();
    // Widened so a tree of large fares cannot overflow the sum
    let total: u128 = tree
        .iter()
        .map(|edge| u128::from(edge.weight().unsigned_abs()))
        .sum();

    writeln!(out, "Airports: {}", bracketed(&graph.vertices()))?;
    writeln!(out, "<Departure, Arrival, Cost>: {}", bracketed(&graph.edges()))?;
    writeln!(out, "A minimum spanning tree consists of {}", bracketed(&tree))?;
    writeln!(out, "Total cost: ${total}")?;

    if tree.len() + 1 < graph.vertex_count() {
        writeln!(
            out,
            "Note: {} airport(s) are not connected to {}",
            graph.vertex_count() - tree.len() - 1,
            graph.vertices()[0]
        )?;
    }

    Ok(())
}

fn bracketed<T: Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Edge, Vertex};

    #[test]
    fn test_report() {
        let graph = RouteGraph::new(
            ["A", "B", "C"].map(Vertex::new),
            vec![
                Edge::new("A", "B", 1),
                Edge::new("B", "C", 2),
                Edge::new("A", "C", 3),
            ],
        )
        .unwrap();

        let mut out = Vec::new();
        report(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Airports: [A, B, C]"));
        assert!(text.contains("<Departure, Arrival, Cost>: [<A, B, 1>, <B, C, 2>, <A, C, 3>]"));
        assert!(text.contains("A minimum spanning tree consists of [<A, B, 1>, <B, C, 2>]"));
        assert!(text.contains("Total cost: $3"));
        assert!(!text.contains("not connected"));
    }

    #[test]
    fn test_report_notes_unreachable_airports() {
        let graph = RouteGraph::new(["A", "B", "C"].map(Vertex::new), vec![Edge::new("B", "C", 2)])
            .unwrap();

        let mut out = Vec::new();
        report(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("A minimum spanning tree consists of []"));
        assert!(text.contains("2 airport(s) are not connected to A"));
    }

    #[test]
    fn test_report_total_of_large_fares() {
        let fare = i64::MAX / 2 + 1;
        let graph = RouteGraph::new(
            ["A", "B", "C"].map(Vertex::new),
            vec![Edge::new("A", "B", fare), Edge::new("B", "C", fare)],
        )
        .unwrap();

        let mut out = Vec::new();
        report(&graph, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = 2 * u128::from(fare.unsigned_abs());
        assert!(text.contains(&format!("Total cost: ${expected}")), "{text}");
    }
}

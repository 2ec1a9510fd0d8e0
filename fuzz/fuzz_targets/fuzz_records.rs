// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use flightgraph::records::{parse_edges, parse_vertices};
use flightgraph::RouteGraph;
use libfuzzer_sys::fuzz_target;

// Input is "<vertex records>\0<edge records>"; nothing here may panic.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (vertex_text, edge_text) = text.split_once('\0').unwrap_or((text, ""));

    let vertices = parse_vertices(vertex_text);
    let Ok(edges) = parse_edges(edge_text) else {
        return;
    };

    if let Ok(graph) = RouteGraph::new(vertices, edges) {
        let all = graph.vertices();
        if let (Some(first), Some(last)) = (all.first(), all.last()) {
            let _ = graph.shortest_path(first, last);
        }
        let tree = graph.minimum_spanning_tree();
        assert!(tree.len() < graph.vertex_count().max(1));
    }
});

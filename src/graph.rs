// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph data structures and algorithms for the route graph

use crate::error::{GraphError, Result};
use crate::records;
use crate::types::{Cost, Edge, Path, Vertex};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Write as _;
use tracing::debug;

/// Dense `n x n` table of directed edge costs.
///
/// Cell `(i, j)` is `None` when there is no flight from vertex `i` to `j`.
#[derive(Debug, Clone, Default)]
struct CostMatrix {
    size: usize,
    cells: Vec<Option<Cost>>,
}

impl CostMatrix {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn cost(&self, from: usize, to: usize) -> Option<Cost> {
        self.cells[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, cost: Cost) {
        self.cells[from * self.size + to] = Some(cost);
    }

    /// Outgoing `(destination, cost)` pairs of `from`, in index order
    fn row(&self, from: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.cells[from * self.size..(from + 1) * self.size]
            .iter()
            .enumerate()
            .filter_map(|(to, cell)| cell.map(|cost| (to, cost)))
    }
}

/// An edge resolved to matrix indices, parallel to `RouteGraph::edges`
#[derive(Debug, Clone, Copy)]
struct Link {
    from: usize,
    to: usize,
    cost: Cost,
}

/// Immutable airport graph with validated, indexed edges
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Distinct vertices in first-seen order; position is the matrix index
    vertices: Vec<Vertex>,
    /// Distinct edges in first-seen order
    edges: Vec<Edge>,
    /// Index of each edge's endpoints, same order as `edges`
    links: Vec<Link>,
    /// Map from vertex to matrix index
    indices: HashMap<Vertex, usize>,
    costs: CostMatrix,
}

/// Serializable view used by [`RouteGraph::to_json`]
#[derive(Serialize)]
struct Snapshot<'a> {
    vertices: &'a [Vertex],
    edges: &'a [Edge],
}

impl RouteGraph {
    /// Build a graph from vertex and edge collections.
    ///
    /// Duplicate vertices and value-identical edges are collapsed. Fails if
    /// an edge names an unknown vertex, carries a negative weight, or shares
    /// its ordered pair with a different edge.
    pub fn new<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = Edge>,
    {
        let mut indices = HashMap::new();
        let mut unique_vertices = Vec::new();
        for vertex in vertices {
            if !indices.contains_key(&vertex) {
                indices.insert(vertex.clone(), unique_vertices.len());
                unique_vertices.push(vertex);
            }
        }

        let mut seen = HashSet::new();
        let mut unique_edges = Vec::new();
        let mut links = Vec::new();
        for edge in edges {
            let from = endpoint_index(&indices, &edge, edge.source())?;
            let to = endpoint_index(&indices, &edge, edge.destination())?;
            let Ok(cost) = Cost::try_from(edge.weight()) else {
                return Err(GraphError::NegativeWeight {
                    from: edge.source().clone(),
                    to: edge.destination().clone(),
                    weight: edge.weight(),
                });
            };

            if seen.insert(edge.clone()) {
                links.push(Link { from, to, cost });
                unique_edges.push(edge);
            }
        }

        let mut costs = CostMatrix::new(unique_vertices.len());
        {
            let mut owners: HashMap<(usize, usize), &Edge> = HashMap::new();
            for (edge, link) in unique_edges.iter().zip(&links) {
                if let Some(first) = owners.insert((link.from, link.to), edge) {
                    return Err(GraphError::DuplicateDirectedEdge {
                        from: edge.source().clone(),
                        to: edge.destination().clone(),
                        first: first.weight(),
                        second: edge.weight(),
                    });
                }
                costs.set(link.from, link.to, link.cost);
            }
        }

        debug!(
            vertices = unique_vertices.len(),
            edges = unique_edges.len(),
            "Built route graph"
        );

        Ok(Self {
            vertices: unique_vertices,
            edges: unique_edges,
            links,
            indices,
            costs,
        })
    }

    /// All vertices, in index order
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        self.vertices.clone()
    }

    /// All distinct edges, in first-seen order
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    /// Get vertex count
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check whether `vertex` is part of the graph
    #[must_use]
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.indices.contains_key(vertex)
    }

    fn index_of(&self, vertex: &Vertex) -> Result<usize> {
        self.indices
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::unknown(vertex))
    }

    /// Vertices reachable from `vertex` over a single directed edge
    pub fn adjacent_vertices(&self, vertex: &Vertex) -> Result<Vec<Vertex>> {
        let from = self.index_of(vertex)?;
        Ok(self
            .costs
            .row(from)
            .map(|(to, _)| self.vertices[to].clone())
            .collect())
    }

    /// Cost of the directed edge `from -> to`, or `None` if there is no such edge
    pub fn edge_cost(&self, from: &Vertex, to: &Vertex) -> Result<Option<Cost>> {
        let row = self.index_of(from)?;
        let column = self.index_of(to)?;
        Ok(self.costs.cost(row, column))
    }

    /// Cheapest directed route from `source` to `destination` (Dijkstra).
    ///
    /// Returns `Ok(None)` when `destination` is unreachable. Among equally
    /// cheap candidates the vertex with the lowest index is settled first.
    pub fn shortest_path(&self, source: &Vertex, destination: &Vertex) -> Result<Option<Path>> {
        let from = self.index_of(source)?;
        let to = self.index_of(destination)?;

        if from == to {
            return Ok(Some(Path::new(vec![source.clone()], 0)));
        }

        let n = self.vertices.len();
        let mut cost: Vec<Option<Cost>> = vec![None; n];
        let mut predecessor: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];
        cost[from] = Some(0);

        let mut current = Some(from);
        while let Some(u) = current {
            settled[u] = true;
            if u == to {
                break;
            }
            let Some(base) = cost[u] else { break };

            for (v, weight) in self.costs.row(u) {
                if settled[v] {
                    continue;
                }
                let Some(candidate) = base.checked_add(weight) else {
                    continue;
                };
                if cost[v].map_or(true, |known| candidate < known) {
                    cost[v] = Some(candidate);
                    predecessor[v] = Some(u);
                }
            }

            // Stops once every unsettled vertex is still unreached
            current = nearest_unsettled(&cost, &settled);
        }

        let Some(total) = cost[to] else {
            debug!(%source, %destination, "No route found");
            return Ok(None);
        };

        let mut route = vec![to];
        let mut at = to;
        while at != from {
            match predecessor[at] {
                Some(previous) => {
                    route.push(previous);
                    at = previous;
                }
                None => return Ok(None),
            }
        }
        route.reverse();

        Ok(Some(Path::new(
            route.into_iter().map(|i| self.vertices[i].clone()).collect(),
            total,
        )))
    }

    /// Minimum spanning tree of the undirected skeleton (Prim).
    ///
    /// Grows from the first vertex. Direction is ignored for connectivity
    /// and weight, but returned edges keep their original orientation, in
    /// the order they were selected. Vertices outside the first vertex's
    /// component are left out. Ties go to the edge seen first.
    #[must_use]
    pub fn minimum_spanning_tree(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let mut incident: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (id, link) in self.links.iter().enumerate() {
            incident[link.from].push(id);
            if link.to != link.from {
                incident[link.to].push(id);
            }
        }

        let mut connected = vec![false; n];
        let mut candidates = BinaryHeap::new();
        let mut tree = Vec::new();

        connected[0] = true;
        self.offer_candidates(0, &incident[0], &connected, &mut candidates);

        while tree.len() + 1 < n {
            let Some(Reverse((_, id))) = candidates.pop() else {
                break;
            };
            let link = self.links[id];
            let newcomer = match (connected[link.from], connected[link.to]) {
                (true, false) => link.to,
                (false, true) => link.from,
                // Both ends already joined; taking it would close a cycle
                _ => continue,
            };

            connected[newcomer] = true;
            tree.push(self.edges[id].clone());
            self.offer_candidates(newcomer, &incident[newcomer], &connected, &mut candidates);
        }

        debug!(
            edges = tree.len(),
            vertices = n,
            "Computed minimum spanning tree"
        );
        tree
    }

    /// Queue edges leaving `vertex` towards vertices not yet connected
    fn offer_candidates(
        &self,
        vertex: usize,
        incident: &[usize],
        connected: &[bool],
        candidates: &mut BinaryHeap<Reverse<(Cost, usize)>>,
    ) {
        for &id in incident {
            let link = self.links[id];
            let other = if link.from == vertex { link.to } else { link.from };
            if !connected[other] {
                candidates.push(Reverse((link.cost, id)));
            }
        }
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph flights {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n\n");

        for vertex in &self.vertices {
            let _ = writeln!(dot, "  \"{}\";", escape_dot(vertex.name()));
        }

        dot.push('\n');

        for edge in &self.edges {
            let _ = writeln!(
                dot,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                escape_dot(edge.source().name()),
                escape_dot(edge.destination().name()),
                edge.weight()
            );
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Snapshot {
            vertices: &self.vertices,
            edges: &self.edges,
        })
    }

    /// Render the edges in the three-line edge record layout
    #[must_use]
    pub fn to_records(&self) -> String {
        records::format_edges(&self.edges)
    }
}

fn endpoint_index(indices: &HashMap<Vertex, usize>, edge: &Edge, endpoint: &Vertex) -> Result<usize> {
    indices
        .get(endpoint)
        .copied()
        .ok_or_else(|| GraphError::InvalidReference {
            from: edge.source().clone(),
            to: edge.destination().clone(),
            missing: endpoint.clone(),
        })
}

/// Unsettled vertex with the lowest finite cost; first index wins ties
fn nearest_unsettled(cost: &[Option<Cost>], settled: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, Cost)> = None;
    for (index, tentative) in cost.iter().enumerate() {
        if settled[index] {
            continue;
        }
        if let Some(c) = *tentative {
            if best.map_or(true, |(_, lowest)| c < lowest) {
                best = Some((index, c));
            }
        }
    }
    best.map(|(index, _)| index)
}

fn escape_dot(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

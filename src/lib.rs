// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Flightgraph library - cheapest routes across an airport fare graph
//!
//! This crate provides an immutable, validated graph of airports and
//! directed flight costs, with Dijkstra shortest-path queries and a Prim
//! minimum spanning tree over the undirected skeleton. The record and CSV
//! modules feed it from files; the command modules back the CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod records;

pub use error::{GraphError, Result};
pub use graph::RouteGraph;

/// Core value types shared by the engine and its callers
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    /// Weight of a single flight as supplied by the input.
    ///
    /// Signed so that negative fares survive parsing and are rejected at
    /// graph construction rather than silently wrapping.
    pub type Weight = i64;

    /// Accumulated, validated (non-negative) cost of a route.
    pub type Cost = u64;

    // =========================================================================
    // Vertex
    // =========================================================================

    /// An airport, identified by name only
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Vertex {
        name: String,
    }

    impl Vertex {
        /// Create a vertex from an airport name
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }

        /// The airport name
        #[must_use]
        pub fn name(&self) -> &str {
            &self.name
        }
    }

    impl fmt::Display for Vertex {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.name)
        }
    }

    impl From<&str> for Vertex {
        fn from(name: &str) -> Self {
            Self::new(name)
        }
    }

    impl From<String> for Vertex {
        fn from(name: String) -> Self {
            Self::new(name)
        }
    }

    // =========================================================================
    // Edge
    // =========================================================================

    /// A directed flight between two airports with its fare
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Edge {
        source: Vertex,
        destination: Vertex,
        weight: Weight,
    }

    impl Edge {
        /// Create a directed edge `source -> destination`
        pub fn new(source: impl Into<Vertex>, destination: impl Into<Vertex>, weight: Weight) -> Self {
            Self {
                source: source.into(),
                destination: destination.into(),
                weight,
            }
        }

        /// Departure airport
        #[must_use]
        pub fn source(&self) -> &Vertex {
            &self.source
        }

        /// Arrival airport
        #[must_use]
        pub fn destination(&self) -> &Vertex {
            &self.destination
        }

        /// Fare of this flight
        #[must_use]
        pub fn weight(&self) -> Weight {
            self.weight
        }
    }

    impl fmt::Display for Edge {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "<{}, {}, {}>", self.source, self.destination, self.weight)
        }
    }

    // =========================================================================
    // Path
    // =========================================================================

    /// Result of a shortest-path query
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Path {
        vertices: Vec<Vertex>,
        cost: Cost,
    }

    impl Path {
        pub(crate) fn new(vertices: Vec<Vertex>, cost: Cost) -> Self {
            Self { vertices, cost }
        }

        /// Airports in travel order, departure first and arrival last
        #[must_use]
        pub fn vertices(&self) -> &[Vertex] {
            &self.vertices
        }

        /// Total fare of the route
        #[must_use]
        pub fn cost(&self) -> Cost {
            self.cost
        }

        /// Departure airport
        #[must_use]
        pub fn source(&self) -> Option<&Vertex> {
            self.vertices.first()
        }

        /// Arrival airport
        #[must_use]
        pub fn destination(&self) -> Option<&Vertex> {
            self.vertices.last()
        }
    }

    impl fmt::Display for Path {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let route: Vec<&str> = self.vertices.iter().map(Vertex::name).collect();
            write!(f, "{} (${})", route.join(" -> "), self.cost)
        }
    }

}

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::RouteGraph;
    pub use crate::types::*;
}

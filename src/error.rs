// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph construction and queries

use crate::types::{Vertex, Weight};
use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures surfaced by [`crate::RouteGraph`].
///
/// Construction errors abort the whole build; query errors abort only the
/// query. "No path" and partial spanning trees are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge names an airport missing from the vertex collection
    #[error("Edge {from} -> {to} references unknown airport '{missing}'")]
    InvalidReference {
        /// Departure of the offending edge
        from: Vertex,
        /// Arrival of the offending edge
        to: Vertex,
        /// The endpoint that is not a vertex
        missing: Vertex,
    },

    /// An edge carries a negative fare
    #[error("Edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        /// Departure of the offending edge
        from: Vertex,
        /// Arrival of the offending edge
        to: Vertex,
        /// The rejected weight
        weight: Weight,
    },

    /// Two different fares were given for the same ordered pair
    #[error("Conflicting edges {from} -> {to}: weights {first} and {second}")]
    DuplicateDirectedEdge {
        /// Departure shared by both edges
        from: Vertex,
        /// Arrival shared by both edges
        to: Vertex,
        /// Weight of the edge seen first
        first: Weight,
        /// Weight of the conflicting edge
        second: Weight,
    },

    /// A query named an airport that is not in the graph
    #[error("Unknown airport: {vertex}")]
    UnknownVertex {
        /// The airport that was asked for
        vertex: Vertex,
    },
}

impl GraphError {
    /// Shorthand for [`GraphError::UnknownVertex`]
    pub fn unknown(vertex: &Vertex) -> Self {
        Self::UnknownVertex {
            vertex: vertex.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_vertex_error() {
        let err = GraphError::unknown(&Vertex::new("XYZ"));
        assert_eq!(err.to_string(), "Unknown airport: XYZ");
    }

    #[test]
    fn test_negative_weight_error() {
        let err = GraphError::NegativeWeight {
            from: Vertex::new("A"),
            to: Vertex::new("B"),
            weight: -4,
        };
        assert_eq!(err.to_string(), "Edge A -> B has negative weight -4");
    }

    #[test]
    fn test_duplicate_edge_error() {
        let err = GraphError::DuplicateDirectedEdge {
            from: Vertex::new("A"),
            to: Vertex::new("B"),
            first: 3,
            second: 5,
        };
        assert_eq!(
            err.to_string(),
            "Conflicting edges A -> B: weights 3 and 5"
        );
    }
}

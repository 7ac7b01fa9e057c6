//! Adjacency list and matrix views of the undirected graph.
//!
//! Used by the editor's side panel to show the graph as data.

use serde::Serialize;

use crate::graph::Graph;

/// One neighbor entry in an adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacent {
    pub target: String,
    pub weight: f64,
}

/// Adjacency of a single node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyEntry {
    pub node: String,
    pub neighbors: Vec<Adjacent>,
}

/// Node ids plus an n x n weight matrix.
///
/// Missing edges are `f64::INFINITY`. Handed to JS it stays `Infinity`;
/// `serde_json` writes it as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    pub nodes: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Adjacency list in node order; each edge is listed from both ends.
pub fn adjacency_list(graph: &Graph) -> Vec<AdjacencyEntry> {
    let mut entries: Vec<AdjacencyEntry> = graph
        .nodes()
        .iter()
        .map(|n| AdjacencyEntry {
            node: n.id.clone(),
            neighbors: Vec::new(),
        })
        .collect();

    for (link, edge) in graph.links().iter().zip(graph.edges()) {
        entries[link.from].neighbors.push(Adjacent {
            target: edge.target.clone(),
            weight: link.weight,
        });
        entries[link.to].neighbors.push(Adjacent {
            target: edge.source.clone(),
            weight: link.weight,
        });
    }

    entries
}

/// Symmetric weight matrix; the diagonal starts at 0 and later edges
/// overwrite earlier ones.
pub fn adjacency_matrix(graph: &Graph) -> AdjacencyMatrix {
    let n = graph.node_count();
    let mut matrix = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = 0.0;
    }

    for link in graph.links() {
        matrix[link.from][link.to] = link.weight;
        matrix[link.to][link.from] = link.weight;
    }

    AdjacencyMatrix {
        nodes: graph.nodes().iter().map(|n| n.id.clone()).collect(),
        matrix,
    }
}

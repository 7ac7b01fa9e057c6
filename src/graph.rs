//! Weighted graph snapshot with label lookup and incident-edge lists.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

use crate::algorithms::{self, RunRequest};
use crate::trace::TraceEvent;

/// Node as the editor stores it.
///
/// Only `id` and `label` are read by the tracers; the rest is presentation
/// state carried through snapshots untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Node {
    /// Bare node with an optional label.
    pub fn new(id: impl Into<String>, label: Option<String>) -> Node {
        Node {
            id: id.into(),
            label,
            ..Node::default()
        }
    }
}

/// Edge as the editor stores it. Direction only matters to Bellman-Ford.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Edge {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
            color: None,
        }
    }
}

/// Serializable graph snapshot for import/export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Edge with endpoints resolved to node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Link {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl Link {
    /// Endpoint opposite `node` (the node itself for a self-loop).
    pub(crate) fn other(&self, node: usize) -> usize {
        if self.from == node {
            self.to
        } else {
            self.from
        }
    }
}

/// Read-only graph snapshot handed to the tracers.
///
/// Node order and edge order are significant: they drive every tie-break.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Nodes in declaration order
    nodes: Vec<Node>,

    /// Reverse lookup: ID string -> index
    node_index: HashMap<String, usize>,

    /// Accepted edges in declaration order, as supplied
    edges: Vec<Edge>,

    /// Same edges with resolved endpoints (parallel to `edges`)
    links: Vec<Link>,

    /// incident[u] = indices into `links` touching u, in declaration order
    incident: Vec<Vec<usize>>,
}

#[wasm_bindgen]
impl Graph {
    /// Create an empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Add a node, returns its index. Idempotent on the identifier.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, id: &str, label: Option<String>) -> usize {
        self.insert_node(Node::new(id, label))
    }

    /// Add an edge between two node identifiers.
    /// Returns false (and ignores the edge) when an endpoint is missing.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> bool {
        self.insert_edge(Edge::new(source, target, weight))
    }

    /// Number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Get node ID by index.
    #[wasm_bindgen(js_name = nodeId)]
    pub fn node_id(&self, idx: usize) -> Option<String> {
        self.nodes.get(idx).map(|n| n.id.clone())
    }

    /// Resolve an identifier or label to a node index.
    pub fn resolve(&self, reference: &str) -> Option<usize> {
        self.node_index.get(reference).copied().or_else(|| {
            self.nodes
                .iter()
                .position(|n| n.label.as_deref() == Some(reference))
        })
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }

    /// Import graph from JSON snapshot.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<Graph, JsError> {
        Ok(Graph::parse(json)?)
    }

    /// Breadth-first search trace from `start`.
    pub fn bfs(&self, start: &str) -> JsValue {
        to_js(&algorithms::bfs::bfs(self, start))
    }

    /// Depth-first search trace from `start`.
    pub fn dfs(&self, start: &str) -> JsValue {
        to_js(&algorithms::dfs::dfs(self, start))
    }

    /// Dijkstra shortest-path trace from `start` to `end`.
    pub fn dijkstra(&self, start: &str, end: &str) -> JsValue {
        to_js(&algorithms::dijkstra::dijkstra(self, start, end))
    }

    /// Bellman-Ford shortest-path trace (directed edges) from `start` to `end`.
    #[wasm_bindgen(js_name = bellmanFord)]
    pub fn bellman_ford(&self, start: &str, end: &str) -> JsValue {
        to_js(&algorithms::bellman_ford::bellman_ford(self, start, end))
    }

    /// Kruskal minimum spanning forest trace.
    pub fn kruskal(&self, start: &str) -> JsValue {
        to_js(&algorithms::kruskal::kruskal(self, start))
    }

    /// Prim minimum spanning tree trace grown from `start`.
    pub fn prim(&self, start: &str) -> JsValue {
        to_js(&algorithms::prim::prim(self, start))
    }

    /// Run the algorithm named in a JSON request:
    /// `{ "algorithm": "dijkstra", "start": "A", "end": "C" }`.
    pub fn run(&self, request: &str) -> Result<JsValue, JsError> {
        let request = RunRequest::from_json(request)?;
        let trace = algorithms::run(self, &request)?;
        Ok(to_js(&trace))
    }

    /// Undirected adjacency list: [{ node, neighbors: [{ target, weight }] }].
    #[wasm_bindgen(js_name = adjacencyList)]
    pub fn adjacency_list(&self) -> JsValue {
        let list = algorithms::representation::adjacency_list(self);
        serde_wasm_bindgen::to_value(&list).unwrap_or(JsValue::NULL)
    }

    /// Symmetric adjacency matrix: { nodes, matrix }; a missing edge is the
    /// JS number `Infinity`.
    #[wasm_bindgen(js_name = adjacencyMatrix)]
    pub fn adjacency_matrix(&self) -> JsValue {
        let matrix = algorithms::representation::adjacency_matrix(self);
        serde_wasm_bindgen::to_value(&matrix).unwrap_or(JsValue::NULL)
    }

    /// Check whether a directed cycle is reachable from `start`.
    #[wasm_bindgen(js_name = hasCycle)]
    pub fn has_cycle(&self, start: &str) -> bool {
        algorithms::cycles::has_cycle(self, start)
    }

    /// Directed edges that lie on some cycle, as [{ source, target }].
    #[wasm_bindgen(js_name = cycleEdges)]
    pub fn cycle_edges(&self) -> JsValue {
        let edges = algorithms::cycles::cycle_edges(self);
        serde_wasm_bindgen::to_value(&edges).unwrap_or(JsValue::NULL)
    }

    /// Edge list with every cycle edge removed.
    #[wasm_bindgen(js_name = acyclicEdges)]
    pub fn acyclic_edges(&self) -> JsValue {
        let edges = algorithms::cycles::acyclic_edges(self);
        serde_wasm_bindgen::to_value(&edges).unwrap_or(JsValue::NULL)
    }
}

fn to_js(trace: &[TraceEvent]) -> JsValue {
    serde_wasm_bindgen::to_value(trace).unwrap_or(JsValue::NULL)
}

// Internal methods (not exposed to WASM)
impl Graph {
    /// Build a graph from a decoded snapshot, dropping dangling edges.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Graph {
        let mut graph = Graph {
            nodes: Vec::with_capacity(snapshot.nodes.len()),
            node_index: HashMap::with_capacity(snapshot.nodes.len()),
            edges: Vec::with_capacity(snapshot.edges.len()),
            links: Vec::with_capacity(snapshot.edges.len()),
            incident: Vec::with_capacity(snapshot.nodes.len()),
        };
        for node in snapshot.nodes {
            graph.insert_node(node);
        }
        let mut dropped = 0usize;
        for edge in snapshot.edges {
            if !graph.insert_edge(edge) {
                dropped += 1;
            }
        }
        if dropped > 0 {
            log::debug!("graph snapshot: ignored {dropped} edge(s) with unknown endpoints");
        }
        graph
    }

    /// Decode a JSON snapshot.
    pub fn parse(json: &str) -> crate::Result<Graph> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        Ok(Graph::from_snapshot(snapshot))
    }

    /// Current contents as a snapshot.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Insert a node, keeping the first occurrence of a duplicated identifier.
    pub fn insert_node(&mut self, node: Node) -> usize {
        if let Some(&idx) = self.node_index.get(&node.id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.node_index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        self.incident.push(Vec::new());
        idx
    }

    /// Insert an edge; silently ignored when an endpoint does not exist.
    pub fn insert_edge(&mut self, edge: Edge) -> bool {
        let (Some(&from), Some(&to)) = (
            self.node_index.get(&edge.source),
            self.node_index.get(&edge.target),
        ) else {
            return false;
        };

        let link_idx = self.links.len();
        self.links.push(Link {
            from,
            to,
            weight: edge.weight,
        });
        self.edges.push(edge);
        self.incident[from].push(link_idx);
        if to != from {
            self.incident[to].push(link_idx);
        }
        true
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Display name: label, or the identifier when no label is set.
    pub fn label(&self, idx: usize) -> &str {
        self.nodes
            .get(idx)
            .map_or("", |n| n.label.as_deref().unwrap_or(&n.id))
    }

    /// Get node count (internal, non-WASM).
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn links(&self) -> &[Link] {
        &self.links
    }

    pub(crate) fn link(&self, idx: usize) -> Link {
        self.links[idx]
    }

    /// Indices of links touching `node`, in edge-declaration order.
    pub(crate) fn incident_slice(&self, node: usize) -> &[usize] {
        self.incident.get(node).map_or(&[], |v| v.as_slice())
    }

    /// Undirected neighbors of `node` in edge-declaration order.
    /// Parallel edges repeat a neighbor; a self-loop yields the node once.
    pub(crate) fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident_slice(node)
            .iter()
            .map(move |&l| self.links[l].other(node))
    }

    /// Test helper: plain ids (no labels) and weighted edges.
    #[cfg(test)]
    pub(crate) fn from_pairs(ids: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for id in ids {
            graph.insert_node(Node::new(*id, None));
        }
        for &(s, t, w) in edges {
            graph.insert_edge(Edge::new(s, t, w));
        }
        graph
    }
}

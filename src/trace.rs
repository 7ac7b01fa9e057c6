//! Trace event vocabulary shared by every tracer.
//!
//! A trace is an ordered `Vec<TraceEvent>`; emission order is replay order.
//! The serialized shape (`{type, nodes, edges, message}`) is what the
//! playback controller and renderer consume.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// What a single step means for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Select,
    Visit,
    Explore,
    Skip,
    Finish,
}

/// Edge reference inside an event (no weight).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub source: String,
    pub target: String,
}

/// One immutable instrumentation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// Node identifiers this step concerns (0, 1, 2, or all nodes for MST summaries)
    pub nodes: Vec<String>,
    /// Edges this step concerns
    pub edges: Vec<EdgeRef>,
    /// Human-readable description
    pub message: String,
}

/// Append-only trace builder bound to one graph.
///
/// Tracers work on node indices; the recorder turns them into identifiers,
/// so every recorded event references nodes that exist in `graph`.
pub(crate) struct TraceRecorder<'g> {
    graph: &'g Graph,
    events: Vec<TraceEvent>,
}

impl<'g> TraceRecorder<'g> {
    pub(crate) fn new(graph: &'g Graph) -> Self {
        TraceRecorder {
            graph,
            events: Vec::new(),
        }
    }

    /// Record a step over `nodes` and an optional `(source, target)` edge.
    pub(crate) fn push(
        &mut self,
        kind: StepKind,
        nodes: &[usize],
        edge: Option<(usize, usize)>,
        message: String,
    ) {
        let nodes = self.ids(nodes);
        let edges = edge.map(|e| self.edge_ref(e)).into_iter().collect();
        self.events.push(TraceEvent {
            kind,
            nodes,
            edges,
            message,
        });
    }

    /// Record a summary step carrying many edges (MST completion).
    pub(crate) fn push_summary(
        &mut self,
        kind: StepKind,
        nodes: &[usize],
        edges: &[(usize, usize)],
        message: String,
    ) {
        let nodes = self.ids(nodes);
        let edges = edges.iter().map(|&e| self.edge_ref(e)).collect();
        self.events.push(TraceEvent {
            kind,
            nodes,
            edges,
            message,
        });
    }

    pub(crate) fn finish(self) -> Vec<TraceEvent> {
        self.events
    }

    fn ids(&self, nodes: &[usize]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|&idx| self.graph.node_id(idx))
            .collect()
    }

    fn edge_ref(&self, (source, target): (usize, usize)) -> EdgeRef {
        EdgeRef {
            source: self.graph.node_id(source).unwrap_or_default(),
            target: self.graph.node_id(target).unwrap_or_default(),
        }
    }
}

/// Parse a serialized trace (e.g. one handed back by the front end).
pub fn trace_from_json(json: &str) -> crate::Result<Vec<TraceEvent>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = TraceEvent {
            kind: StepKind::Explore,
            nodes: vec!["b".to_string()],
            edges: vec![EdgeRef {
                source: "a".to_string(),
                target: "b".to_string(),
            }],
            message: "Discovered node b from a".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "explore");
        assert_eq!(json["nodes"][0], "b");
        assert_eq!(json["edges"][0]["source"], "a");
        assert_eq!(json["edges"][0]["target"], "b");
    }

    #[test]
    fn test_recorder_maps_indices_to_ids() {
        let graph = Graph::from_pairs(&["n1", "n2"], &[("n1", "n2", 1.0)]);
        let mut rec = TraceRecorder::new(&graph);
        rec.push(StepKind::Visit, &[1], Some((1, 0)), "x".to_string());
        let events = rec.finish();
        assert_eq!(events[0].nodes, vec!["n2".to_string()]);
        assert_eq!(events[0].edges[0].source, "n2");
        assert_eq!(events[0].edges[0].target, "n1");
    }

    #[test]
    fn test_trace_from_json() {
        let json = r#"[{"type":"finish","nodes":[],"edges":[],"message":"done"}]"#;
        let trace = trace_from_json(json).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].kind, StepKind::Finish);
        assert!(trace_from_json("[{").is_err());
    }
}

//! Bellman-Ford single-pair shortest path trace.
//!
//! Edges are directed (source -> target) and may be negative. Exactly
//! `n - 1` passes over all edges in declaration order are traced, with no
//! early exit on convergence, followed by one detection pass for negative
//! cycles.

use super::reconstruct_path;
use crate::graph::Graph;
use crate::trace::{StepKind, TraceEvent, TraceRecorder};

/// Trace Bellman-Ford from `start` to `end` (identifiers or labels).
///
/// Each pass opens with a node-less `visit` marker; every edge gets an
/// `explore`, and a `select` only when it strictly improves its target.
/// A relaxable edge after the fixed passes ends the trace with a single
/// negative-cycle `finish`.
pub fn bellman_ford(graph: &Graph, start: &str, end: &str) -> Vec<TraceEvent> {
    let (Some(source), Some(target)) = (graph.resolve(start), graph.resolve(end)) else {
        log::debug!("bellman-ford: '{start}' or '{end}' not found, empty trace");
        return Vec::new();
    };

    let n = graph.len();
    let mut rec = TraceRecorder::new(graph);
    let mut distances = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    distances[source] = 0.0;

    rec.push(
        StepKind::Select,
        &[source],
        None,
        format!(
            "Starting Bellman-Ford algorithm from node {}",
            graph.label(source)
        ),
    );

    for pass in 1..n {
        rec.push(
            StepKind::Visit,
            &[],
            None,
            format!("Starting iteration {pass}"),
        );

        for link in graph.links() {
            let (u, v) = (link.from, link.to);
            rec.push(
                StepKind::Explore,
                &[u, v],
                Some((u, v)),
                format!("Checking edge {} → {}", graph.label(u), graph.label(v)),
            );

            let candidate = distances[u] + link.weight;
            if distances[u].is_finite() && candidate < distances[v] {
                distances[v] = candidate;
                parent[v] = Some(u);
                rec.push(
                    StepKind::Select,
                    &[v],
                    Some((u, v)),
                    format!("Updated distance to {}: {}", graph.label(v), candidate),
                );
            }
        }
    }

    let relaxable = graph
        .links()
        .iter()
        .find(|l| distances[l.from].is_finite() && distances[l.from] + l.weight < distances[l.to]);
    if let Some(link) = relaxable {
        log::debug!("bellman-ford: negative cycle through edge {} -> {}", link.from, link.to);
        rec.push(
            StepKind::Finish,
            &[link.from, link.to],
            Some((link.from, link.to)),
            "Negative cycle detected!".to_string(),
        );
        return rec.finish();
    }

    // Unreachable end: the path is just [target] and no edges are emitted
    let path = reconstruct_path(&parent, target);
    let total = distances[target];
    for step in path.windows(2) {
        rec.push(
            StepKind::Finish,
            &[step[0], step[1]],
            Some((step[0], step[1])),
            format!("Shortest path found! Total distance: {total}"),
        );
    }

    rec.finish()
}

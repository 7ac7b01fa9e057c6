//! Depth-first search trace.
//!
//! Exploration nests: an `explore` is immediately followed by the
//! neighbor's `visit`, and a node's `finish` comes after its whole subtree.
//! Uses an explicit stack of (node, neighbor cursor) frames, so depth is
//! bounded by the heap rather than the call stack.

use crate::graph::Graph;
use crate::trace::{StepKind, TraceEvent, TraceRecorder};

/// Trace DFS from `start` (identifier or label).
pub fn dfs(graph: &Graph, start: &str) -> Vec<TraceEvent> {
    let Some(source) = graph.resolve(start) else {
        log::debug!("dfs: start '{start}' not found, empty trace");
        return Vec::new();
    };

    let mut rec = TraceRecorder::new(graph);
    let mut visited = vec![false; graph.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    rec.push(
        StepKind::Select,
        &[source],
        None,
        format!("Starting DFS from node {}", graph.label(source)),
    );
    enter(graph, &mut rec, &mut visited, &mut stack, source);

    while let Some(&(v, cursor)) = stack.last() {
        let Some(&link) = graph.incident_slice(v).get(cursor) else {
            stack.pop();
            rec.push(
                StepKind::Finish,
                &[v],
                None,
                format!("Finished exploring node {}", graph.label(v)),
            );
            continue;
        };

        let top = stack.len() - 1;
        stack[top].1 += 1;

        let w = graph.link(link).other(v);
        if !visited[w] {
            rec.push(
                StepKind::Explore,
                &[w],
                Some((v, w)),
                format!("Exploring edge to node {}", graph.label(w)),
            );
            enter(graph, &mut rec, &mut visited, &mut stack, w);
        } else {
            rec.push(
                StepKind::Skip,
                &[w],
                Some((v, w)),
                format!("Node {} already visited", graph.label(w)),
            );
        }
    }

    rec.finish()
}

/// Mark `v` visited, record its visit and open a frame for it.
fn enter(
    graph: &Graph,
    rec: &mut TraceRecorder<'_>,
    visited: &mut [bool],
    stack: &mut Vec<(usize, usize)>,
    v: usize,
) {
    visited[v] = true;
    rec.push(
        StepKind::Visit,
        &[v],
        None,
        format!("Visiting node {}", graph.label(v)),
    );
    stack.push((v, 0));
}

//! Prim minimum spanning tree trace.
//!
//! Grows a tree from the start node over a pool of candidate edges. The pool
//! is a binary heap keyed by `(weight, insertion order)`, equivalent to
//! stably re-sorting a list and taking its head each round. Stale entries
//! (both ends already in the tree) are only discarded when popped, each with
//! a `skip` event.

use super::frontier::Frontier;
use crate::graph::Graph;
use crate::trace::{StepKind, TraceEvent, TraceRecorder};

/// Trace Prim's algorithm from `start` (identifier or label).
///
/// Nodes outside the start's component never join the tree.
pub fn prim(graph: &Graph, start: &str) -> Vec<TraceEvent> {
    let Some(source) = graph.resolve(start) else {
        log::debug!("prim: start '{start}' not found, empty trace");
        return Vec::new();
    };

    let n = graph.len();
    let mut rec = TraceRecorder::new(graph);
    let mut in_tree = vec![false; n];
    let mut joined: Vec<usize> = Vec::with_capacity(n);
    let mut tree: Vec<(usize, usize)> = Vec::new();
    let mut total = 0.0;
    let mut pool = Frontier::new();

    rec.push(
        StepKind::Select,
        &[source],
        None,
        "Starting Prim's algorithm".to_string(),
    );

    in_tree[source] = true;
    joined.push(source);
    for &l in graph.incident_slice(source) {
        pool.push(graph.link(l).weight, l);
    }

    while !pool.is_empty() && joined.len() < n {
        let Some((weight, l)) = pool.pop() else {
            break;
        };
        let link = graph.link(l);
        let edge = (link.from, link.to);

        let fresh = if !in_tree[link.to] {
            link.to
        } else if !in_tree[link.from] {
            link.from
        } else {
            rec.push(
                StepKind::Skip,
                &[link.from, link.to],
                Some(edge),
                "Both nodes already in MST, skipping".to_string(),
            );
            continue;
        };

        rec.push(
            StepKind::Explore,
            &[link.from, link.to],
            Some(edge),
            format!(
                "Checking edge to {} (weight: {})",
                graph.label(fresh),
                weight
            ),
        );

        tree.push(edge);
        total += weight;
        in_tree[fresh] = true;
        joined.push(fresh);

        rec.push(
            StepKind::Select,
            &[fresh],
            Some(edge),
            format!("Added node {} to MST", graph.label(fresh)),
        );

        for &next in graph.incident_slice(fresh) {
            let candidate = graph.link(next);
            if !in_tree[candidate.from] || !in_tree[candidate.to] {
                pool.push(candidate.weight, next);
            }
        }
    }

    if joined.len() < n {
        log::trace!("prim: {} node(s) outside the start component", n - joined.len());
    }

    rec.push_summary(
        StepKind::Finish,
        &joined,
        &tree,
        format!("MST completed! Total weight: {total}"),
    );

    rec.finish()
}

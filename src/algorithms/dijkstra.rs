//! Dijkstra single-pair shortest path trace.
//!
//! Undirected, non-negative weights assumed (negative weights are not
//! rejected; the result is simply whatever relaxation produces).
//!
//! The unvisited minimum is taken from a binary heap keyed by
//! `(distance, node index)`, which selects the same node as a linear scan
//! over unvisited nodes in declaration order. Stale heap entries are skipped.

use super::frontier::Frontier;
use super::reconstruct_path;
use crate::graph::Graph;
use crate::trace::{StepKind, TraceEvent, TraceRecorder};

/// Trace Dijkstra from `start` to `end` (identifiers or labels).
///
/// Stops at the first pop of `end`, emitting one `finish` per path edge.
/// When `end` is unreachable the trace ends after the last finite node,
/// with no path events.
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Vec<TraceEvent> {
    let (Some(source), Some(target)) = (graph.resolve(start), graph.resolve(end)) else {
        log::debug!("dijkstra: '{start}' or '{end}' not found, empty trace");
        return Vec::new();
    };

    let n = graph.len();
    let mut rec = TraceRecorder::new(graph);
    let mut distances = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut frontier = Frontier::new();

    distances[source] = 0.0;
    frontier.push_ranked(0.0, source, source);

    rec.push(
        StepKind::Select,
        &[source],
        None,
        format!(
            "Starting Dijkstra's algorithm from node {}",
            graph.label(source)
        ),
    );

    while let Some((dist, u)) = frontier.pop() {
        if visited[u] || dist > distances[u] {
            continue;
        }

        rec.push(
            StepKind::Visit,
            &[u],
            None,
            format!("Visiting node {} (distance: {})", graph.label(u), dist),
        );

        if u == target {
            let path = reconstruct_path(&parent, u);
            for step in path.windows(2) {
                rec.push(
                    StepKind::Finish,
                    &[step[0], step[1]],
                    Some((step[0], step[1])),
                    format!("Shortest path found! Total distance: {dist}"),
                );
            }
            log::trace!("dijkstra: reached end, path of {} node(s)", path.len());
            return rec.finish();
        }

        visited[u] = true;

        for &l in graph.incident_slice(u) {
            let link = graph.link(l);
            let v = link.other(u);
            if visited[v] {
                continue;
            }

            let candidate = distances[u] + link.weight;
            rec.push(
                StepKind::Explore,
                &[v],
                Some((u, v)),
                format!("Checking distance to {}: {}", graph.label(v), candidate),
            );

            if candidate < distances[v] {
                distances[v] = candidate;
                parent[v] = Some(u);
                frontier.push_ranked(candidate, v, v);
                rec.push(
                    StepKind::Select,
                    &[v],
                    Some((u, v)),
                    format!("Updated distance to {}: {}", graph.label(v), candidate),
                );
            } else {
                rec.push(
                    StepKind::Skip,
                    &[v],
                    Some((u, v)),
                    format!(
                        "Keeping current distance to {}: {}",
                        graph.label(v),
                        distances[v]
                    ),
                );
            }
        }
    }

    log::trace!("dijkstra: end node unreachable");
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_pairs(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)],
        )
    }

    fn path_events(trace: &[TraceEvent]) -> Vec<(&str, &str)> {
        trace
            .iter()
            .filter(|e| e.kind == StepKind::Finish)
            .map(|e| (e.edges[0].source.as_str(), e.edges[0].target.as_str()))
            .collect()
    }

    #[test]
    fn test_dijkstra_unknown_end() {
        assert!(dijkstra(&triangle(), "A", "Z").is_empty());
        assert!(dijkstra(&triangle(), "Z", "A").is_empty());
    }

    #[test]
    fn test_dijkstra_prefers_two_hop_path() {
        let trace = dijkstra(&triangle(), "A", "C");
        assert_eq!(path_events(&trace), vec![("A", "B"), ("B", "C")]);
        let last = trace.last().unwrap();
        assert_eq!(last.message, "Shortest path found! Total distance: 3");
        assert_eq!(last.nodes, vec!["B".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_dijkstra_full_trace() {
        let trace = dijkstra(&triangle(), "A", "C");
        let messages: Vec<&str> = trace.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Starting Dijkstra's algorithm from node A",
                "Visiting node A (distance: 0)",
                "Checking distance to B: 1",
                "Updated distance to B: 1",
                "Checking distance to C: 5",
                "Updated distance to C: 5",
                "Visiting node B (distance: 1)",
                "Checking distance to C: 3",
                "Updated distance to C: 3",
                "Visiting node C (distance: 3)",
                "Shortest path found! Total distance: 3",
                "Shortest path found! Total distance: 3",
            ]
        );
    }

    #[test]
    fn test_dijkstra_emits_skip_when_not_improved() {
        // A-B 1, A-C 1, B-C 5: from B the edge to C does not improve 1
        let g = Graph::from_pairs(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("A", "C", 1.0), ("B", "C", 5.0)],
        );
        let trace = dijkstra(&g, "A", "C");
        let skip = trace.iter().find(|e| e.kind == StepKind::Skip).unwrap();
        assert_eq!(skip.message, "Keeping current distance to C: 1");
    }

    #[test]
    fn test_dijkstra_tie_breaks_by_node_order() {
        // B and C both at distance 1; B is declared first so it is visited first
        let g = Graph::from_pairs(
            &["A", "B", "C", "D"],
            &[("A", "C", 1.0), ("A", "B", 1.0), ("C", "D", 1.0)],
        );
        let trace = dijkstra(&g, "A", "D");
        let visits: Vec<&str> = trace
            .iter()
            .filter(|e| e.kind == StepKind::Visit)
            .map(|e| e.nodes[0].as_str())
            .collect();
        assert_eq!(visits, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_dijkstra_unreachable_end_stops_silently() {
        let g = Graph::from_pairs(&["A", "B", "C"], &[("A", "B", 1.0)]);
        let trace = dijkstra(&g, "A", "C");
        assert!(trace.iter().all(|e| e.kind != StepKind::Finish));
        // B is still visited before the frontier runs dry
        assert_eq!(
            trace.last().unwrap().message,
            "Visiting node B (distance: 1)"
        );
    }

    #[test]
    fn test_dijkstra_start_equals_end() {
        let trace = dijkstra(&triangle(), "A", "A");
        assert_eq!(trace.len(), 2);
        assert_eq!(trace[1].kind, StepKind::Visit);
    }

    #[test]
    fn test_dijkstra_fractional_weights_in_messages() {
        let g = Graph::from_pairs(&["A", "B"], &[("B", "A", 2.5)]);
        let trace = dijkstra(&g, "A", "B");
        assert_eq!(
            trace.last().unwrap().message,
            "Shortest path found! Total distance: 2.5"
        );
        // Path edges are oriented along the path, not the declaration
        assert_eq!(path_events(&trace), vec![("A", "B")]);
    }
}

//! Breadth-first search trace.
//!
//! Undirected traversal with a FIFO frontier. Each dequeued node gets a
//! `visit`, one `explore`/`skip` per neighbor in edge order, then `finish`.

use std::collections::VecDeque;

use crate::graph::Graph;
use crate::trace::{StepKind, TraceEvent, TraceRecorder};

/// Trace BFS from `start` (identifier or label).
pub fn bfs(graph: &Graph, start: &str) -> Vec<TraceEvent> {
    let Some(source) = graph.resolve(start) else {
        log::debug!("bfs: start '{start}' not found, empty trace");
        return Vec::new();
    };

    let mut rec = TraceRecorder::new(graph);
    let mut visited = vec![false; graph.len()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);
    rec.push(
        StepKind::Select,
        &[source],
        None,
        format!("Starting BFS from node {}", graph.label(source)),
    );

    while let Some(v) = queue.pop_front() {
        rec.push(
            StepKind::Visit,
            &[v],
            None,
            format!("Visiting node {}", graph.label(v)),
        );

        for w in graph.neighbors(v) {
            if !visited[w] {
                visited[w] = true;
                queue.push_back(w);
                rec.push(
                    StepKind::Explore,
                    &[w],
                    Some((v, w)),
                    format!(
                        "Discovered node {} from {}",
                        graph.label(w),
                        graph.label(v)
                    ),
                );
            } else {
                rec.push(
                    StepKind::Skip,
                    &[w],
                    Some((v, w)),
                    format!("Node {} already visited", graph.label(w)),
                );
            }
        }

        rec.push(
            StepKind::Finish,
            &[v],
            None,
            format!("Finished processing node {}", graph.label(v)),
        );
    }

    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(trace: &[TraceEvent]) -> Vec<(StepKind, Vec<&str>)> {
        trace
            .iter()
            .map(|e| (e.kind, e.nodes.iter().map(String::as_str).collect()))
            .collect()
    }

    #[test]
    fn test_bfs_unknown_start() {
        let graph = Graph::from_pairs(&["a"], &[]);
        assert!(bfs(&graph, "z").is_empty());
    }

    #[test]
    fn test_bfs_single_node() {
        let graph = Graph::from_pairs(&["a"], &[]);
        let trace = bfs(&graph, "a");
        assert_eq!(
            kinds(&trace),
            vec![
                (StepKind::Select, vec!["a"]),
                (StepKind::Visit, vec!["a"]),
                (StepKind::Finish, vec!["a"]),
            ]
        );
        assert_eq!(trace[0].message, "Starting BFS from node a");
    }

    #[test]
    fn test_bfs_triangle_order() {
        // a-b, b-c, a-c
        let graph = Graph::from_pairs(
            &["a", "b", "c"],
            &[("a", "b", 1.0), ("b", "c", 1.0), ("a", "c", 1.0)],
        );
        let trace = bfs(&graph, "a");
        use StepKind::*;
        assert_eq!(
            kinds(&trace),
            vec![
                (Select, vec!["a"]),
                (Visit, vec!["a"]),
                (Explore, vec!["b"]),
                (Explore, vec!["c"]),
                (Finish, vec!["a"]),
                (Visit, vec!["b"]),
                (Skip, vec!["a"]),
                (Skip, vec!["c"]),
                (Finish, vec!["b"]),
                (Visit, vec!["c"]),
                (Skip, vec!["b"]),
                (Skip, vec!["a"]),
                (Finish, vec!["c"]),
            ]
        );
        assert_eq!(trace[2].message, "Discovered node b from a");
        assert_eq!(trace[2].edges[0].source, "a");
        assert_eq!(trace[2].edges[0].target, "b");
        assert_eq!(trace[6].message, "Node a already visited");
        assert_eq!(trace[12].message, "Finished processing node c");
    }

    #[test]
    fn test_bfs_uses_labels_in_messages() {
        let mut graph = Graph::new();
        graph.add_node("n1", Some("Start".to_string()));
        graph.add_node("n2", Some("Goal".to_string()));
        graph.add_edge("n1", "n2", 1.0);

        let trace = bfs(&graph, "Start");
        assert_eq!(trace[0].nodes, vec!["n1".to_string()]);
        assert_eq!(trace[2].message, "Discovered node Goal from Start");
    }

    #[test]
    fn test_bfs_visits_component_once() {
        // a-b-c plus isolated pair d-e
        let graph = Graph::from_pairs(
            &["a", "b", "c", "d", "e"],
            &[("a", "b", 1.0), ("b", "c", 1.0), ("d", "e", 1.0)],
        );
        let trace = bfs(&graph, "b");
        let visits: Vec<_> = trace
            .iter()
            .filter(|e| e.kind == StepKind::Visit)
            .map(|e| e.nodes[0].as_str())
            .collect();
        assert_eq!(visits, vec!["b", "a", "c"]);

        // Each incident edge of a visited node is looked at once per endpoint
        let looks = trace
            .iter()
            .filter(|e| matches!(e.kind, StepKind::Explore | StepKind::Skip))
            .count();
        assert_eq!(looks, 4);
        assert!(trace.iter().all(|e| !e.nodes.contains(&"d".to_string())));
    }
}

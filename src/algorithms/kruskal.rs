//! Kruskal minimum spanning forest trace.
//!
//! Edges are stably sorted by weight, so equal weights keep declaration
//! order. A disconnected graph yields a spanning forest; connectivity is
//! never checked.

use super::frontier::weight_order;
use crate::graph::Graph;
use crate::trace::{StepKind, TraceEvent, TraceRecorder};

/// Union-Find data structure with path compression and union by rank.
///
/// Sets are created on first reference; a node that never appears on an
/// edge stays a singleton.
#[derive(Debug, Default)]
struct UnionFind {
    parent: Vec<Option<usize>>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn with_capacity(n: usize) -> Self {
        Self {
            parent: vec![None; n],
            rank: vec![0; n],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let p = *self.parent[x].get_or_insert(x);
        if p == x {
            return x;
        }
        let root = self.find(p);
        self.parent[x] = Some(root); // Path compression
        root
    }

    fn union(&mut self, x: usize, y: usize) -> bool {
        let px = self.find(x);
        let py = self.find(y);

        if px == py {
            return false; // Already in same set
        }

        // Union by rank
        if self.rank[px] < self.rank[py] {
            self.parent[px] = Some(py);
        } else if self.rank[px] > self.rank[py] {
            self.parent[py] = Some(px);
        } else {
            self.parent[py] = Some(px);
            self.rank[px] += 1;
        }

        true
    }
}

/// Trace Kruskal's algorithm.
///
/// `start` is only resolved to honor the empty-trace contract for stale
/// references; it does not influence the result.
pub fn kruskal(graph: &Graph, start: &str) -> Vec<TraceEvent> {
    if graph.resolve(start).is_none() {
        log::debug!("kruskal: start '{start}' not found, empty trace");
        return Vec::new();
    }

    let mut rec = TraceRecorder::new(graph);
    let mut sorted = graph.links().to_vec();
    sorted.sort_by(|a, b| weight_order(a.weight, b.weight));

    rec.push(
        StepKind::Select,
        &[],
        None,
        "Starting Kruskal's algorithm".to_string(),
    );

    let mut uf = UnionFind::with_capacity(graph.len());
    let mut tree: Vec<(usize, usize)> = Vec::new();
    let mut total = 0.0;

    for link in sorted {
        let (u, v) = (link.from, link.to);
        rec.push(
            StepKind::Explore,
            &[u, v],
            Some((u, v)),
            format!(
                "Checking edge {} → {} (weight: {})",
                graph.label(u),
                graph.label(v),
                link.weight
            ),
        );

        if uf.union(u, v) {
            tree.push((u, v));
            total += link.weight;
            rec.push(
                StepKind::Select,
                &[u, v],
                Some((u, v)),
                format!("Added edge to MST (total weight: {total})"),
            );
        } else {
            rec.push(
                StepKind::Skip,
                &[u, v],
                Some((u, v)),
                "Edge would create a cycle, skipping".to_string(),
            );
        }
    }

    let all: Vec<usize> = (0..graph.len()).collect();
    rec.push_summary(
        StepKind::Finish,
        &all,
        &tree,
        format!("MST completed! Total weight: {total}"),
    );

    rec.finish()
}

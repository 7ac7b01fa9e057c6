//! Directed cycle checks used by the editor.
//!
//! These read edges as source -> target. `has_cycle` answers "can the walk
//! from this node loop back on itself"; `cycle_edges` finds every edge on
//! some directed cycle using Tarjan's strongly connected components.

use crate::graph::Graph;
use crate::trace::EdgeRef;

/// Check whether a directed cycle is reachable from `start`.
///
/// Unresolvable `start` returns false.
pub fn has_cycle(graph: &Graph, start: &str) -> bool {
    let Some(source) = graph.resolve(start) else {
        return false;
    };

    let successors = build_successors(graph);
    let n = graph.len();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];
    visited[source] = true;
    on_path[source] = true;

    while let Some(&(v, cursor)) = stack.last() {
        let Some(&w) = successors[v].get(cursor) else {
            on_path[v] = false;
            stack.pop();
            continue;
        };
        let top = stack.len() - 1;
        stack[top].1 += 1;

        if on_path[w] {
            return true;
        }
        if !visited[w] {
            visited[w] = true;
            on_path[w] = true;
            stack.push((w, 0));
        }
    }

    false
}

/// Directed edges lying on at least one cycle, in declaration order.
///
/// An edge is on a cycle when both endpoints share a strongly connected
/// component, or when it is a self-loop.
pub fn cycle_edges(graph: &Graph) -> Vec<EdgeRef> {
    let component = strongly_connected(graph);
    graph
        .links()
        .iter()
        .zip(graph.edges())
        .filter(|(link, _)| component[link.from] == component[link.to])
        .map(|(_, edge)| EdgeRef {
            source: edge.source.clone(),
            target: edge.target.clone(),
        })
        .collect()
}

/// The edge list with every cycle edge removed (in either orientation).
pub fn acyclic_edges(graph: &Graph) -> Vec<EdgeRef> {
    let cyclic = cycle_edges(graph);
    graph
        .edges()
        .iter()
        .filter(|e| {
            !cyclic.iter().any(|c| {
                (c.source == e.source && c.target == e.target)
                    || (c.source == e.target && c.target == e.source)
            })
        })
        .map(|e| EdgeRef {
            source: e.source.clone(),
            target: e.target.clone(),
        })
        .collect()
}

/// Component id per node via Tarjan's algorithm.
///
/// Uses DFS discovery times and low-link values:
/// - disc[v]: discovery time of vertex v
/// - low[v]: minimum discovery time reachable from the subtree of v
///
/// v roots a component when low[v] == disc[v].
fn strongly_connected(graph: &Graph) -> Vec<usize> {
    let n = graph.len();
    let successors = build_successors(graph);

    let mut state = TarjanState {
        disc: vec![0; n],
        low: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        component: vec![usize::MAX; n],
        time: 0,
        components: 0,
    };

    // Run DFS from each unvisited node (handles disconnected components)
    for start in 0..n {
        if state.disc[start] == 0 {
            tarjan_dfs(start, &successors, &mut state);
        }
    }

    state.component
}

struct TarjanState {
    disc: Vec<usize>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    component: Vec<usize>,
    time: usize,
    components: usize,
}

impl TarjanState {
    fn open(&mut self, v: usize) {
        self.time += 1;
        self.disc[v] = self.time;
        self.low[v] = self.time;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Pop the component rooted at `v` off the Tarjan stack.
    fn close(&mut self, v: usize) {
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            self.component[w] = self.components;
            if w == v {
                break;
            }
        }
        self.components += 1;
    }
}

/// DFS for Tarjan's strongly connected components.
///
/// Walks an explicit stack of (node, successor cursor) frames; a child's
/// low-link is folded into its parent when the child's frame is popped.
fn tarjan_dfs(root: usize, successors: &[Vec<usize>], state: &mut TarjanState) {
    let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
    state.open(root);

    while let Some(&(v, cursor)) = frames.last() {
        if let Some(&u) = successors[v].get(cursor) {
            let top = frames.len() - 1;
            frames[top].1 += 1;

            if state.disc[u] == 0 {
                state.open(u);
                frames.push((u, 0));
            } else if state.on_stack[u] {
                // Back edge into the current component
                state.low[v] = state.low[v].min(state.disc[u]);
            }
            continue;
        }

        frames.pop();
        if let Some(&(parent, _)) = frames.last() {
            state.low[parent] = state.low[parent].min(state.low[v]);
        }
        if state.low[v] == state.disc[v] {
            state.close(v);
        }
    }
}

/// Directed successor lists in edge-declaration order.
fn build_successors(graph: &Graph) -> Vec<Vec<usize>> {
    let mut successors = vec![Vec::new(); graph.len()];
    for link in graph.links() {
        successors[link.from].push(link.to);
    }
    successors
}

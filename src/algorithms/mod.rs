//! Traced graph algorithm implementations.
//!
//! Each tracer is a pure function of a graph snapshot and its parameters,
//! returning the full ordered event list. An unresolvable start (or end)
//! reference returns an empty trace.

pub mod bellman_ford;
pub mod bfs;
pub mod cycles;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod representation;

mod frontier;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::trace::TraceEvent;

/// Tracers available to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    Kruskal,
    Prim,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::Kruskal,
        Algorithm::Prim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman-ford",
            Algorithm::Kruskal => "kruskal",
            Algorithm::Prim => "prim",
        }
    }

    /// Shortest-path tracers need an end node.
    pub fn requires_end(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::BellmanFord)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Parameters for one traced run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub algorithm: Algorithm,
    /// Start node identifier or label
    pub start: String,
    /// End node identifier or label (shortest-path tracers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl RunRequest {
    pub fn from_json(json: &str) -> Result<RunRequest> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Dispatch a request to its tracer.
pub fn run(graph: &Graph, request: &RunRequest) -> Result<Vec<TraceEvent>> {
    let start = request.start.as_str();
    let end = match (&request.end, request.algorithm.requires_end()) {
        (Some(end), _) => end.as_str(),
        (None, true) => return Err(Error::MissingEnd(request.algorithm)),
        (None, false) => "",
    };

    let trace = match request.algorithm {
        Algorithm::Bfs => bfs::bfs(graph, start),
        Algorithm::Dfs => dfs::dfs(graph, start),
        Algorithm::Dijkstra => dijkstra::dijkstra(graph, start, end),
        Algorithm::BellmanFord => bellman_ford::bellman_ford(graph, start, end),
        Algorithm::Kruskal => kruskal::kruskal(graph, start),
        Algorithm::Prim => prim::prim(graph, start),
    };
    log::debug!("{}: {} event(s)", request.algorithm, trace.len());
    Ok(trace)
}

/// Walk parent pointers back from `end`, returning the path start..=end.
///
/// Bounded by the node count so a corrupt parent chain cannot loop.
pub(crate) fn reconstruct_path(parent: &[Option<usize>], end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(prev) = parent[current] {
        if path.len() > parent.len() {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

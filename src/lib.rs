//! Step-by-step traces of classic graph algorithms.
//!
//! Given a graph snapshot from the editor, each tracer (BFS, DFS, Dijkstra,
//! Bellman-Ford, Kruskal, Prim) returns the complete ordered list of
//! [`TraceEvent`]s describing every inspection, discovery, selection and
//! completion it performs. The front end replays that list frame by frame.
//!
//! ```
//! use graph_trace_wasm::{algorithms::dijkstra::dijkstra, Graph};
//!
//! let mut g = Graph::new();
//! for id in ["A", "B", "C"] {
//!     g.add_node(id, None);
//! }
//! g.add_edge("A", "B", 1.0);
//! g.add_edge("B", "C", 2.0);
//! g.add_edge("A", "C", 5.0);
//!
//! let trace = dijkstra(&g, "A", "C");
//! assert_eq!(
//!     trace.last().unwrap().message,
//!     "Shortest path found! Total distance: 3"
//! );
//! ```

use wasm_bindgen::prelude::*;

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod playback;
pub mod trace;

pub use algorithms::{run, Algorithm, RunRequest};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphSnapshot, Node};
pub use playback::Playback;
pub use trace::{EdgeRef, StepKind, TraceEvent};

/// Install the panic hook and console logger once, when the module loads.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }

    log::info!("graph-trace-wasm {} loaded", version());
}

/// Crate version, for the front end's about box.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// List of available algorithm names.
#[wasm_bindgen(js_name = algorithmNames)]
pub fn algorithm_names() -> Vec<String> {
    Algorithm::ALL.iter().map(|a| a.as_str().to_string()).collect()
}

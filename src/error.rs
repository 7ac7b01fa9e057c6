//! Error types for decoding snapshots and run requests.
//!
//! The tracers themselves never fail: an unresolvable node reference yields an
//! empty trace. Errors only arise at the edges, when JSON coming from the
//! editor cannot be decoded or a run request is incomplete.

use thiserror::Error;

use crate::algorithms::Algorithm;

/// Errors surfaced to callers of the JSON / wasm entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// A graph snapshot, run request or trace could not be decoded.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// An algorithm name did not match any known tracer.
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    /// A shortest-path run was requested without an end node.
    #[error("{0} requires an end node")]
    MissingEnd(Algorithm),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_message() {
        let err: Error = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid JSON payload"));
    }

    #[test]
    fn test_missing_end_message() {
        let err = Error::MissingEnd(Algorithm::BellmanFord);
        assert_eq!(err.to_string(), "bellman-ford requires an end node");
    }
}

use thiserror::Error;

use crate::domain::utils::id::RouterId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O failure while reading input or writing reports: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read or write JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Malformed input on line {line}: {reason}")]
    InputParseError { line: usize, reason: String },

    #[error("Rejected link event: {0}")]
    TopologyError(#[from] TopologyError),

    #[error("Routing state is inconsistent: {0}")]
    RoutingError(#[from] RoutingError),

    #[error("Failed to write report: {0}")]
    OutputError(#[from] csv::Error),
}

/// Mutations the topology refuses to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("negative cost {cost} on link {node1}-{node2} (only -1 may be used, to delete a link)")]
    NegativeCost { node1: RouterId, node2: RouterId, cost: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The predecessor chain from `destination` never reached `router`.
    #[error("predecessor chain from {destination} does not lead back to {router}")]
    BrokenPredecessorChain { router: RouterId, destination: RouterId },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `mt-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network description is unreadable: {0}")]
    Unreadable(String),

    #[error("network description contains no <edge> elements")]
    NoEdges,

    #[error("network description yields no usable roads")]
    NoRoads,

    #[error("road {id:?} not found in network (longest roads: {})", .suggestions.join(", "))]
    TargetNotFound {
        id:          String,
        suggestions: Vec<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

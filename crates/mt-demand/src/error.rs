use thiserror::Error;

use mt_core::CoreError;
use mt_network::NetworkError;

#[derive(Debug, Error)]
pub enum DemandError {
    #[error("route description is unreadable: {0}")]
    Unreadable(String),

    #[error("no vehicles generated or found")]
    NoVehicles,

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("failed to render route document: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DemandResult<T> = Result<T, DemandError>;

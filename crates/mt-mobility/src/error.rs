use mt_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("no route produced a trajectory with at least two waypoints")]
    NoTrajectories,

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;

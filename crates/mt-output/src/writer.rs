//! The `TrajectoryWriter` trait implemented by all export backends.

use mt_mobility::Trajectory;

use crate::OutputResult;

/// Trait implemented by the ns-2 trace and CSV writers.
///
/// Implementations must fail with [`OutputError::EmptyInput`] for an empty
/// slice without creating or truncating their target file.
///
/// [`OutputError::EmptyInput`]: crate::OutputError::EmptyInput
pub trait TrajectoryWriter {
    fn write_trajectories(&mut self, trajectories: &[Trajectory]) -> OutputResult<()>;
}

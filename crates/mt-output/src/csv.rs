//! CSV waypoint backend.
//!
//! One row per waypoint, grouped by trajectory in input order:
//!
//! ```text
//! vehicle_id,time,x,y,speed
//! vehicle_0000,0.00,10.52,-1.37,8.71
//! ```

use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use mt_mobility::Trajectory;

use crate::writer::TrajectoryWriter;
use crate::{OutputError, OutputResult};

const HEADER: [&str; 5] = ["vehicle_id", "time", "x", "y", "speed"];

/// Writes every waypoint of every trajectory to a single CSV file.
///
/// The file is opened on the first non-empty write.
pub struct CsvTrajectoryWriter {
    path: PathBuf,
}

impl CsvTrajectoryWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrajectoryWriter for CsvTrajectoryWriter {
    fn write_trajectories(&mut self, trajectories: &[Trajectory]) -> OutputResult<()> {
        if trajectories.iter().all(Trajectory::is_empty) {
            return Err(OutputError::EmptyInput);
        }

        let mut w = Writer::from_path(&self.path)?;
        w.write_record(HEADER)?;
        let mut rows = 0usize;
        for t in trajectories {
            for wp in &t.waypoints {
                w.write_record(&[
                    t.vehicle_id.clone(),
                    format!("{:.2}", wp.time),
                    format!("{:.2}", wp.x),
                    format!("{:.2}", wp.y),
                    format!("{:.2}", wp.speed),
                ])?;
                rows += 1;
            }
        }
        w.flush()?;

        info!(path = %self.path.display(), rows, "CSV waypoints written");
        Ok(())
    }
}

//! ns-2 mobility trace backend.
//!
//! # Format
//!
//! ```text
//! # NS-3 Mobility File - Density 100 vehicles/hour
//! # Total valid nodes: 2
//! # Highest node id: 2
//!
//! # Initial positions
//! $node_(0) set X_ 10.52
//! $node_(0) set Y_ -1.37
//! $node_(0) set Z_ 1.5
//! ...
//!
//! # Movement commands
//! $ns_ at 12.40 "$node_(0) setdest 101.93 0.44 8.71"
//! ...
//! ```
//!
//! One initial-position triple per trajectory, then one `setdest` per
//! waypoint after the first, grouped by trajectory.  Node ids are vehicle
//! numbers, so they skip vehicles whose route produced no trajectory; the
//! `Highest node id` line tells the consumer how many nodes to create.
//!
//! # Initial positions
//!
//! With [`InitialPositionMode::SharedOrigin`] (the default) every node is
//! placed at the *first trajectory's* first waypoint, matching the output of
//! earlier versions of this tool.  [`InitialPositionMode::PerNode`] places
//! each node at its own first waypoint.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use mt_core::{InitialPositionMode, PipelineConfig, VehicleId};
use mt_mobility::{Trajectory, Waypoint};

use crate::writer::TrajectoryWriter;
use crate::{OutputError, OutputResult};

/// Header and layout settings of a trace.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceOptions {
    /// Shown in the header comment.
    pub rate_per_hour:     f64,
    pub node_z:            f64,
    pub initial_positions: InitialPositionMode,
}

impl TraceOptions {
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            rate_per_hour:     config.rate_per_hour,
            node_z:            config.node_z,
            initial_positions: config.initial_positions,
        }
    }
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

/// ns-2 node id for a vehicle id.
///
/// A `vehicle_NNNN` id maps to its number without zero padding
/// (`vehicle_0007` → `7`).  Anything else loses the `vehicle_` prefix, if
/// present, and is kept verbatim.
pub fn node_label(vehicle_id: &str) -> String {
    match vehicle_id.parse::<VehicleId>() {
        Ok(id) => id.0.to_string(),
        Err(_) => vehicle_id.strip_prefix(VehicleId::PREFIX).unwrap_or(vehicle_id).to_owned(),
    }
}

/// Highest numeric node id among `trajectories`.
///
/// Node ids keep the gaps left by discarded routes, so a consumer that
/// creates a fixed node pool (ns-3's `Ns2MobilityHelper`) needs more than
/// this many nodes, not merely one per trajectory.
pub fn max_node_id(trajectories: &[Trajectory]) -> Option<u32> {
    trajectories
        .iter()
        .filter_map(|t| t.vehicle_id.parse::<VehicleId>().ok())
        .map(|id| id.0)
        .max()
}

/// Render the full trace for `trajectories`.
///
/// # Errors
///
/// [`OutputError::EmptyInput`] for an empty slice, [`OutputError::Render`]
/// if formatting fails.
pub fn render_trace(trajectories: &[Trajectory], options: &TraceOptions) -> OutputResult<String> {
    let Some(shared_origin) = trajectories.first().and_then(Trajectory::first) else {
        return Err(OutputError::EmptyInput);
    };

    let moves: usize = trajectories.iter().map(|t| t.moves().len()).sum();
    let mut out = String::with_capacity(160 + trajectories.len() * 96 + moves * 64);
    write_trace(&mut out, trajectories, shared_origin, options)?;
    Ok(out)
}

fn write_trace(
    out:           &mut impl fmt::Write,
    trajectories:  &[Trajectory],
    shared_origin: &Waypoint,
    options:       &TraceOptions,
) -> fmt::Result {
    writeln!(out, "# NS-3 Mobility File - Density {} vehicles/hour", options.rate_per_hour)?;
    writeln!(out, "# Total valid nodes: {}", trajectories.len())?;
    if let Some(max_id) = max_node_id(trajectories) {
        writeln!(out, "# Highest node id: {max_id}")?;
    }
    writeln!(out)?;

    writeln!(out, "# Initial positions")?;
    for t in trajectories {
        let Some(own) = t.first() else { continue };
        let origin = match options.initial_positions {
            InitialPositionMode::SharedOrigin => shared_origin,
            InitialPositionMode::PerNode => own,
        };
        let node = node_label(&t.vehicle_id);
        writeln!(out, "$node_({node}) set X_ {:.2}", origin.x)?;
        writeln!(out, "$node_({node}) set Y_ {:.2}", origin.y)?;
        writeln!(out, "$node_({node}) set Z_ {}", options.node_z)?;
    }

    writeln!(out)?;
    writeln!(out, "# Movement commands")?;
    for t in trajectories {
        let node = node_label(&t.vehicle_id);
        for w in t.moves() {
            writeln!(
                out,
                "$ns_ at {:.2} \"$node_({node}) setdest {:.2} {:.2} {:.2}\"",
                w.time, w.x, w.y, w.speed
            )?;
        }
    }
    Ok(())
}

/// Writes an ns-2 trace file.
///
/// The trace is rendered in memory first; the file is only created once the
/// whole document is ready.
pub struct Ns2TraceWriter {
    path:    PathBuf,
    options: TraceOptions,
}

impl Ns2TraceWriter {
    pub fn new(path: impl AsRef<Path>, options: TraceOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrajectoryWriter for Ns2TraceWriter {
    fn write_trajectories(&mut self, trajectories: &[Trajectory]) -> OutputResult<()> {
        let trace = render_trace(trajectories, &self.options)?;
        std::fs::write(&self.path, trace)?;
        info!(path = %self.path.display(), nodes = trajectories.len(), "ns-2 trace written");
        Ok(())
    }
}

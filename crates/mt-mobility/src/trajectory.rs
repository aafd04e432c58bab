//! Per-vehicle trajectory.

/// One time-stamped sample of a vehicle's movement.  All fields are rounded
/// to two decimals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    /// Seconds from the start of the run.
    pub time:  f64,
    pub x:     f64,
    pub y:     f64,
    /// m/s
    pub speed: f64,
}

/// The ordered waypoints of one vehicle.
///
/// Trajectories handed out by the [`Resampler`](crate::Resampler) always have
/// at least two waypoints with strictly increasing `time`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub vehicle_id: String,
    pub waypoints:  Vec<Waypoint>,
}

impl Trajectory {
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First waypoint (the departure sample).
    #[inline]
    pub fn first(&self) -> Option<&Waypoint> {
        self.waypoints.first()
    }

    /// Waypoints after the first, i.e. the ones that become movement commands.
    #[inline]
    pub fn moves(&self) -> &[Waypoint] {
        self.waypoints.get(1..).unwrap_or(&[])
    }
}

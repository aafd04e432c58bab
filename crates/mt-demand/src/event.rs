//! Departure events emitted by the arrival process.

use std::fmt;

use mt_core::VehicleId;

/// Travel direction of a departure relative to the target road.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        })
    }
}

/// One vehicle departing onto a single-edge route.
#[derive(Clone, Debug, PartialEq)]
pub struct DepartureEvent {
    pub vehicle:     VehicleId,
    /// Edge id of the route; the target road or its reverse id.
    pub edge:        String,
    pub direction:   Direction,
    /// Seconds from the start of the run; `0 <= depart_secs < horizon`.
    pub depart_secs: f64,
}

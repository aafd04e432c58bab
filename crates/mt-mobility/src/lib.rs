//! `mt-mobility` — turn vehicle routes into time-stamped waypoint trajectories.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`trajectory`] | `Waypoint`, `Trajectory`                                   |
//! | [`geometry`]   | `GeometryIndex` — edge id → resampleable shape points      |
//! | [`resampler`]  | `Resampler`, `edge_points`                                 |
//! | [`error`]      | `MobilityError`, `MobilityResult<T>`                       |
//!
//! # Resampling model
//!
//! For every edge of a route that has geometry, `n = clamp(points, min, max)`
//! samples are taken from the shape (interpolating between the first and last
//! point when the shape is shorter than `n`).  Each sample gets uniform
//! lateral noise and a uniform random speed, and the clock advances by a
//! uniform random step after it.  The clock starts at the route's departure
//! and runs across all edges of the route, so waypoint times are strictly
//! increasing.
//!
//! Timing is deliberately not derived from speed or distance: the output is a
//! coarse mobility trace for network-layer simulation, not a kinematic model.

pub mod error;
pub mod geometry;
pub mod resampler;
pub mod trajectory;


pub use error::{MobilityError, MobilityResult};
pub use geometry::GeometryIndex;
pub use resampler::{Resampler, edge_points};
pub use trajectory::{Trajectory, Waypoint};

//! `mt-demand` — vehicle arrival process and route-demand file I/O.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`event`]   | `DepartureEvent`, `Direction`                              |
//! | [`arrival`] | `ArrivalProcess` — jittered fixed-rate departure generator |
//! | [`vtype`]   | `VehicleType` (the single `<vType>` of the route file)     |
//! | [`routes`]  | `render_routes`, `write_routes_file`, `load_routes_str`, `load_routes_file` |
//! | [`error`]   | `DemandError`, `DemandResult<T>`                           |
//!
//! # Arrival model (summary)
//!
//! ```text
//! base = 3600 / rate_per_hour
//! t = 0
//! while t < horizon:
//!     emit forward(t)
//!     with probability p_rev: emit reverse(t)
//!     t += base * U(jitter.min, jitter.max)
//! ```
//!
//! Vehicle ids are assigned in emission order across both directions.  The
//! process is *not* Poisson: inter-arrival times are bounded to
//! `[base * jitter.min, base * jitter.max)`.

pub mod arrival;
pub mod error;
pub mod event;
pub mod routes;
pub mod vtype;

#[cfg(test)]
mod tests;

pub use arrival::ArrivalProcess;
pub use error::{DemandError, DemandResult};
pub use event::{DepartureEvent, Direction};
pub use routes::{RouteRecord, load_routes_file, load_routes_str, render_routes, write_routes_file};
pub use vtype::VehicleType;

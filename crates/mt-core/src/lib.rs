//! `mt-core` — foundational types for the MANET mobility-trace pipeline.
//!
//! This crate is a dependency of every other `mt-*` crate.  It has no `mt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, polyline arc length, linear interpolation    |
//! | [`ids`]         | `VehicleId` (zero-padded `vehicle_NNNN` display)      |
//! | [`rng`]         | `SimRng` (explicitly passed, seedable)                |
//! | [`config`]      | `PipelineConfig`, `Bounds`, `InitialPositionMode`     |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the configuration types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Bounds, InitialPositionMode, PipelineConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Point, floor2, parse_shape, polyline_length, round2};
pub use ids::VehicleId;
pub use rng::SimRng;

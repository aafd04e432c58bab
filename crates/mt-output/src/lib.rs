//! `mt-output` — trajectory export for the MANET trace generator.
//!
//! Two backends are provided:
//!
//! | Backend  | Type                    | Output                                         |
//! |----------|-------------------------|------------------------------------------------|
//! | ns-2     | [`Ns2TraceWriter`]      | Tcl mobility trace read by ns-3's `Ns2MobilityHelper` |
//! | CSV      | [`CsvTrajectoryWriter`] | `vehicle_id,time,x,y,speed` rows               |
//!
//! Both implement [`TrajectoryWriter`] and refuse an empty trajectory set.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mt_output::{Ns2TraceWriter, TraceOptions, TrajectoryWriter};
//!
//! let mut w = Ns2TraceWriter::new("mobility.tcl", TraceOptions::from_config(&config));
//! w.write_trajectories(&trajectories)?;
//! ```

pub mod csv;
pub mod error;
pub mod ns2;
pub mod writer;


pub use self::csv::CsvTrajectoryWriter;
pub use error::{OutputError, OutputResult};
pub use ns2::{Ns2TraceWriter, TraceOptions, max_node_id, node_label, render_trace};
pub use writer::TrajectoryWriter;

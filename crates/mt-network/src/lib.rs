//! `mt-network` — road-network loading, ranking, and selection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`road`]     | `Road`, `LengthSource`, `reverse_edge_id`                    |
//! | [`network`]  | `RoadNetwork` (length-ranked roads + id index), `NetworkSummary` |
//! | [`loader`]   | `load_network_file`, `load_network_str`                      |
//! | [`selector`] | `RoadSelector`, `select_longest`, `select_by_id`             |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                           |
//!
//! # Input format
//!
//! A SUMO network document.  Only `<edge>` elements (anywhere in the tree)
//! and the first `<lane>` child of each are read; `<junction>` elements are
//! only counted.
//!
//! ```xml
//! <net>
//!   <edge id="R1" from="J1" to="J2">
//!     <lane id="R1_0" shape="0.00,0.00 100.00,0.00 250.00,40.00"/>
//!   </edge>
//!   <junction id="J1"/>
//! </net>
//! ```

pub mod error;
pub mod loader;
pub mod network;
pub mod road;
pub mod selector;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_file, load_network_str};
pub use network::{NetworkSummary, RoadNetwork};
pub use road::{INTERNAL_PREFIX, LengthSource, REVERSE_MARKER, Road, reverse_edge_id};
pub use selector::{RoadSelector, SUGGESTION_COUNT, select_by_id, select_longest};

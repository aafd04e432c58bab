//! Road record and edge-id conventions.

use mt_core::Point;

/// Leading character of internal (intersection) edge ids.  Such edges are
/// never loaded as roads.
pub const INTERNAL_PREFIX: char = ':';

/// Leading character that marks the opposite direction of a road.
pub const REVERSE_MARKER: char = '-';

/// Where a road's `length_m` came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LengthSource {
    /// The edge's own `length` attribute.
    Attribute,
    /// Arc length of the first lane's shape.
    Shape,
    /// `PipelineConfig::default_length_m`; nothing usable was present.
    Fallback,
}

/// A directed, non-internal road of the network.  Immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub id:            String,
    /// Start junction id, or `"unknown"` when the attribute is absent.
    pub from:          String,
    /// End junction id, or `"unknown"` when the attribute is absent.
    pub to:            String,
    /// Always `> 0`.
    pub length_m:      f64,
    pub length_source: LengthSource,
    /// First lane's shape.  Empty when the lane or its shape is missing or
    /// failed to parse.
    pub shape:         Vec<Point>,
}

impl Road {
    /// Endpoint placeholder for absent `from`/`to` attributes.
    pub const UNKNOWN_NODE: &'static str = "unknown";

    /// `true` when the shape has at least `min_points` points and can be
    /// resampled into waypoints.
    #[inline]
    pub fn has_geometry(&self, min_points: usize) -> bool {
        self.shape.len() >= min_points.max(2)
    }

    /// Id of the opposite-direction road (see [`reverse_edge_id`]).
    #[inline]
    pub fn reverse_id(&self) -> String {
        reverse_edge_id(&self.id)
    }
}

/// Toggle the reverse marker on an edge id: `"R1"` → `"-R1"`, `"-R1"` → `"R1"`.
///
/// Exactly one marker is added or stripped, so applying the function twice
/// returns the input only when the input does not start with two or more
/// markers (`"--R1"` → `"-R1"` → `"R1"`).  The returned id is not checked
/// against any network.
pub fn reverse_edge_id(id: &str) -> String {
    match id.strip_prefix(REVERSE_MARKER) {
        Some(forward) => forward.to_owned(),
        None => format!("{REVERSE_MARKER}{id}"),
    }
}

//! Length-ranked road collection.
//!
//! # Ordering
//!
//! `roads` is sorted by `length_m` descending with a **stable** sort, so
//! equal-length roads keep document order.  `roads[0]` is therefore the
//! deterministic "longest road" and `top(n)` the suggestion list shown when a
//! requested id is missing.

use rustc_hash::FxHashMap;

use crate::Road;

/// Counts gathered while reading the network document.  Reporting only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NetworkSummary {
    /// Tag name of the document root (`"net"` for SUMO networks).
    pub root_tag:          String,
    /// Every `<edge>` element, internal ones included.
    pub edge_elements:     usize,
    pub junction_elements: usize,
    /// `<edge>` elements skipped for a missing id or internal prefix.
    pub skipped_edges:     usize,
}

/// Roads of one network, ranked by length.
pub struct RoadNetwork {
    roads:   Vec<Road>,
    by_id:   FxHashMap<String, usize>,
    summary: NetworkSummary,
}

impl RoadNetwork {
    /// Rank `roads` (stable, longest first) and index them by id.
    ///
    /// Later duplicates of an id are shadowed by the first occurrence in
    /// ranked order.
    pub fn new(mut roads: Vec<Road>, summary: NetworkSummary) -> Self {
        roads.sort_by(|a, b| b.length_m.total_cmp(&a.length_m));

        let mut by_id = FxHashMap::with_capacity_and_hasher(roads.len(), Default::default());
        for (i, road) in roads.iter().enumerate() {
            by_id.entry(road.id.clone()).or_insert(i);
        }

        Self { roads, by_id, summary }
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn summary(&self) -> &NetworkSummary {
        &self.summary
    }

    /// All roads, longest first.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// The `n` longest roads (fewer if the network is smaller).
    pub fn top(&self, n: usize) -> &[Road] {
        &self.roads[..n.min(self.roads.len())]
    }

    pub fn get(&self, id: &str) -> Option<&Road> {
        self.by_id.get(id).map(|&i| &self.roads[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}

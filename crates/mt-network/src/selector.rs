//! Target-road selection.
//!
//! Selection is deterministic: [`select_longest`] always returns the head of
//! the length ranking, and [`select_by_id`] is a plain lookup.  A miss carries
//! the [`SUGGESTION_COUNT`] longest ids so the caller can present them.

use crate::{NetworkError, NetworkResult, Road, RoadNetwork};

/// Number of road ids offered when a requested id is missing.
pub const SUGGESTION_COUNT: usize = 5;

/// The longest road (ties broken by document order).
///
/// # Errors
///
/// [`NetworkError::NoRoads`] for an empty network.
pub fn select_longest(network: &RoadNetwork) -> NetworkResult<&Road> {
    network.roads().first().ok_or(NetworkError::NoRoads)
}

/// Look up a road by id.
///
/// # Errors
///
/// [`NetworkError::TargetNotFound`] with the longest road ids as suggestions.
pub fn select_by_id<'n>(network: &'n RoadNetwork, id: &str) -> NetworkResult<&'n Road> {
    network.get(id).ok_or_else(|| NetworkError::TargetNotFound {
        id:          id.to_owned(),
        suggestions: network
            .top(SUGGESTION_COUNT)
            .iter()
            .map(|r| r.id.clone())
            .collect(),
    })
}

/// How the target road of a run is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RoadSelector {
    #[default]
    Longest,
    ById(String),
}

impl RoadSelector {
    /// `ById` when an id is given, `Longest` otherwise.
    pub fn from_option(id: Option<String>) -> Self {
        id.map_or(RoadSelector::Longest, RoadSelector::ById)
    }

    pub fn select<'n>(&self, network: &'n RoadNetwork) -> NetworkResult<&'n Road> {
        match self {
            RoadSelector::Longest => select_longest(network),
            RoadSelector::ById(id) => select_by_id(network, id),
        }
    }
}

//! Edge-geometry lookup used by the resampler.

use rustc_hash::FxHashMap;

use mt_core::Point;
use mt_network::RoadNetwork;

/// Maps edge id → shape points for every edge that can be resampled.
///
/// Only shapes with at least `min_points` points are kept; roads without
/// usable geometry are simply absent and get skipped during resampling.
#[derive(Clone, Debug, Default)]
pub struct GeometryIndex {
    shapes: FxHashMap<String, Vec<Point>>,
}

impl GeometryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the shapes of every road in `network`.
    pub fn from_network(network: &RoadNetwork, min_points: usize) -> Self {
        let shapes = network
            .roads()
            .iter()
            .filter(|road| road.has_geometry(min_points))
            .map(|road| (road.id.clone(), road.shape.clone()))
            .collect();
        Self { shapes }
    }

    /// Add or replace one edge.  Shapes with fewer than two points are
    /// ignored; returns whether the shape was stored.
    pub fn insert(&mut self, id: impl Into<String>, shape: Vec<Point>) -> bool {
        if shape.len() < 2 {
            return false;
        }
        self.shapes.insert(id.into(), shape);
        true
    }

    pub fn get(&self, id: &str) -> Option<&[Point]> {
        self.shapes.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

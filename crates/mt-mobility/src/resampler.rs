//! Route geometry → waypoint trajectory.

use tracing::{debug, info};

use mt_core::{Bounds, PipelineConfig, Point, SimRng, round2};
use mt_demand::RouteRecord;

use crate::{GeometryIndex, MobilityError, MobilityResult, Trajectory, Waypoint};

/// `count` sample points along `raw`.
///
/// Index `i` takes `raw[i]` while the shape has that many points; beyond the
/// shape it falls on the straight line from the first to the last shape point
/// at ratio `i / (count - 1)`.
///
/// Returns an empty vector for an empty shape.
pub fn edge_points(raw: &[Point], count: usize) -> Vec<Point> {
    let (Some(&start), Some(&end)) = (raw.first(), raw.last()) else {
        return Vec::new();
    };
    let span = count.saturating_sub(1).max(1) as f64;
    (0..count)
        .map(|i| match raw.get(i) {
            Some(&p) => p,
            None => start.lerp(end, i as f64 / span),
        })
        .collect()
}

/// Stateless resampling parameters; randomness comes from the caller's
/// [`SimRng`].
#[derive(Clone, Debug)]
pub struct Resampler {
    jitter:     Bounds,
    step_secs:  Bounds,
    speed_mps:  Bounds,
    min_points: usize,
    max_points: usize,
}

impl Resampler {
    /// # Errors
    ///
    /// [`MobilityError::Config`] if `config` fails validation.
    pub fn from_config(config: &PipelineConfig) -> MobilityResult<Self> {
        config.validate()?;
        Ok(Self {
            jitter:     config.jitter_bounds(),
            step_secs:  config.step_secs,
            speed_mps:  config.speed_mps,
            min_points: config.min_points_per_edge,
            max_points: config.max_points_per_edge,
        })
    }

    /// Waypoints emitted for an edge whose shape has `raw_points` points.
    #[inline]
    pub fn points_per_edge(&self, raw_points: usize) -> usize {
        raw_points.clamp(self.min_points, self.max_points)
    }

    /// Resample one route.
    ///
    /// Edges absent from `index` contribute nothing.  Returns `None` when the
    /// route yields fewer than two waypoints in total.
    pub fn resample(&self, index: &GeometryIndex, route: &RouteRecord, rng: &mut SimRng) -> Option<Trajectory> {
        let mut waypoints = Vec::new();
        let mut clock = route.depart_secs;

        for edge in &route.edges {
            let Some(raw) = index.get(edge) else {
                debug!(vehicle = %route.vehicle_id, edge = %edge, "edge has no geometry; skipped");
                continue;
            };

            for p in edge_points(raw, self.points_per_edge(raw.len())) {
                let x = p.x + rng.uniform(self.jitter.min, self.jitter.max);
                let y = p.y + rng.uniform(self.jitter.min, self.jitter.max);
                let speed = rng.uniform(self.speed_mps.min, self.speed_mps.max);

                waypoints.push(Waypoint {
                    time:  round2(clock),
                    x:     round2(x),
                    y:     round2(y),
                    speed: round2(speed),
                });

                clock += rng.uniform(self.step_secs.min, self.step_secs.max);
            }
        }

        (waypoints.len() >= 2).then(|| Trajectory {
            vehicle_id: route.vehicle_id.clone(),
            waypoints,
        })
    }

    /// Resample every route, keeping only usable trajectories, in route order.
    ///
    /// # Errors
    ///
    /// [`MobilityError::NoTrajectories`] when no route survives.
    pub fn resample_all(
        &self,
        index:  &GeometryIndex,
        routes: &[RouteRecord],
        rng:    &mut SimRng,
    ) -> MobilityResult<Vec<Trajectory>> {
        let trajectories: Vec<Trajectory> = routes
            .iter()
            .filter_map(|route| self.resample(index, route, rng))
            .collect();

        info!(
            geometries = index.len(),
            routes = routes.len(),
            trajectories = trajectories.len(),
            discarded = routes.len() - trajectories.len(),
            "routes resampled"
        );

        if trajectories.is_empty() {
            return Err(MobilityError::NoTrajectories);
        }
        Ok(trajectories)
    }
}

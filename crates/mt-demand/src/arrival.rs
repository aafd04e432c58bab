//! Jittered fixed-rate arrival process.

use tracing::{debug, info};

use mt_core::{Bounds, PipelineConfig, SimRng, VehicleId};
use mt_network::{Road, RoadNetwork, RoadSelector};

use crate::{DemandError, DemandResult, DepartureEvent, Direction};

/// Upper bound on the events reserved up front; longer runs grow the vector.
const MAX_PREALLOC: usize = 1 << 20;

/// Generates departure events onto one target road over a fixed horizon.
///
/// Build with [`ArrivalProcess::from_config`]; the constructor validates the
/// parameters, so generation always terminates.
#[derive(Clone, Debug)]
pub struct ArrivalProcess {
    base_interval_secs:    f64,
    horizon_secs:          f64,
    jitter:                Bounds,
    reverse_probability:   f64,
    reverse_requires_road: bool,
}

impl ArrivalProcess {
    /// # Errors
    ///
    /// [`DemandError::Config`] if `config` fails [`PipelineConfig::validate`].
    pub fn from_config(config: &PipelineConfig) -> DemandResult<Self> {
        config.validate()?;
        Ok(Self {
            base_interval_secs:    config.base_interval_secs(),
            horizon_secs:          config.horizon_secs,
            jitter:                config.arrival_jitter,
            reverse_probability:   config.reverse_probability,
            reverse_requires_road: config.reverse_requires_road,
        })
    }

    /// Mean spacing between forward departures, seconds.
    pub fn base_interval_secs(&self) -> f64 {
        self.base_interval_secs
    }

    /// Departures onto `road` and (occasionally) its reverse id.
    ///
    /// The reverse id is emitted whether or not such a road exists; see
    /// [`generate_for`](Self::generate_for) for the network-checked variant.
    pub fn generate(&self, road: &Road, rng: &mut SimRng) -> Vec<DepartureEvent> {
        let reverse = road.reverse_id();
        self.run(&road.id, Some(&reverse), rng)
    }

    /// Resolve the target road with `selector` and generate departures.
    ///
    /// With `reverse_requires_road` set, reverse departures are only emitted
    /// when the reverse id is a road of `network`.
    ///
    /// # Errors
    ///
    /// - [`DemandError::Network`] — the target road cannot be resolved.
    /// - [`DemandError::NoVehicles`] — nothing was generated.
    pub fn generate_for(
        &self,
        network:  &RoadNetwork,
        selector: &RoadSelector,
        rng:      &mut SimRng,
    ) -> DemandResult<Vec<DepartureEvent>> {
        let road = selector.select(network)?;
        let reverse = road.reverse_id();
        let reverse = (!self.reverse_requires_road || network.contains(&reverse)).then_some(reverse);
        if reverse.is_none() {
            debug!(road = %road.id, "reverse road absent; opposite-direction departures disabled");
        }

        let events = self.run(&road.id, reverse.as_deref(), rng);
        if events.is_empty() {
            return Err(DemandError::NoVehicles);
        }

        let reverse_count = events.iter().filter(|e| e.direction == Direction::Reverse).count();
        info!(
            road = %road.id,
            vehicles = events.len(),
            reverse = reverse_count,
            base_interval_secs = self.base_interval_secs,
            "departures generated"
        );
        Ok(events)
    }

    /// Core loop.  `reverse = None` still draws the reverse coin so the
    /// forward schedule does not depend on whether reverse trips are kept.
    fn run(&self, forward: &str, reverse: Option<&str>, rng: &mut SimRng) -> Vec<DepartureEvent> {
        let expected = ((self.horizon_secs / self.base_interval_secs).ceil() as usize).min(MAX_PREALLOC);
        let mut events = Vec::with_capacity(expected + expected / 8 + 1);
        let mut next_id = VehicleId(0);
        let mut t = 0.0;

        while t < self.horizon_secs {
            events.push(DepartureEvent {
                vehicle:     next_id,
                edge:        forward.to_owned(),
                direction:   Direction::Forward,
                depart_secs: t,
            });
            next_id = next_id.next();

            if rng.gen_bool(self.reverse_probability) {
                if let Some(reverse) = reverse {
                    events.push(DepartureEvent {
                        vehicle:     next_id,
                        edge:        reverse.to_owned(),
                        direction:   Direction::Reverse,
                        depart_secs: t,
                    });
                    next_id = next_id.next();
                }
            }

            t += self.base_interval_secs * rng.uniform(self.jitter.min, self.jitter.max);
        }

        events
    }
}

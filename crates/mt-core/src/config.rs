//! Pipeline configuration.
//!
//! Every tunable and every fallback constant used by the stages lives in
//! [`PipelineConfig`].  Stages take `&PipelineConfig` (or the sub-values they
//! need) instead of inlining literals.
//!
//! With the `serde` feature the struct deserializes from TOML/JSON; missing
//! fields fall back to [`PipelineConfig::default`].

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// A closed-open numeric interval `[min, max)` used for uniform sampling.
///
/// `min == max` is allowed and pins the sample to `min`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Symmetric interval `[-half, half)`.
    #[inline]
    pub const fn symmetric(half: f64) -> Self {
        Self { min: -half, max: half }
    }

    /// `true` when `v` lies within `[min, max]` (inclusive, for assertions on
    /// pinned and rounded samples).
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    fn check(&self, what: &str) -> CoreResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(CoreError::Config(format!(
                "{what} bounds [{}, {}) are invalid",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

// ── InitialPositionMode ───────────────────────────────────────────────────────

/// Where the trace's initial-position block takes coordinates from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InitialPositionMode {
    /// Every node starts at the first trajectory's first waypoint.  This is
    /// the historical output of the tool and stays the default.
    #[default]
    SharedOrigin,
    /// Each node starts at its own first waypoint.
    PerNode,
}

// ── PipelineConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for one generator run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Master RNG seed.  The same seed always produces identical outputs.
    pub seed: u64,

    // ── Arrival process ───────────────────────────────────────────────────
    /// Target mean arrival rate, vehicles per hour.
    pub rate_per_hour: f64,
    /// Generation horizon in seconds; no departure at or beyond it.
    pub horizon_secs: f64,
    /// Probability of an extra opposite-direction departure per forward one.
    pub reverse_probability: f64,
    /// Multiplier applied to the base inter-arrival interval.
    pub arrival_jitter: Bounds,
    /// Drop opposite-direction departures whose road id is absent from the
    /// network, so every generated route references a loaded road.
    pub reverse_requires_road: bool,

    // ── Resampling ────────────────────────────────────────────────────────
    /// Half-width of the uniform lateral noise added to x and y.
    pub waypoint_jitter: f64,
    /// Time advance between consecutive waypoints, seconds.
    pub step_secs: Bounds,
    /// Speed recorded with each waypoint, m/s.
    pub speed_mps: Bounds,
    /// Fewest waypoints emitted per traversed edge (and fewest shape points
    /// an edge needs to be resampled at all).
    pub min_points_per_edge: usize,
    /// Most waypoints emitted per traversed edge.
    pub max_points_per_edge: usize,

    // ── Loader fallbacks ──────────────────────────────────────────────────
    /// Length assigned to a road with neither a usable `length` attribute nor
    /// a usable lane shape.
    pub default_length_m: f64,

    // ── Export ────────────────────────────────────────────────────────────
    /// Fixed z coordinate written for every node.
    pub node_z: f64,
    pub initial_positions: InitialPositionMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed:                42,
            rate_per_hour:       100.0,
            horizon_secs:        3_600.0,
            reverse_probability: 0.1,
            arrival_jitter:      Bounds::new(0.7, 1.3),
            reverse_requires_road: false,
            waypoint_jitter:     2.0,
            step_secs:           Bounds::new(8.0, 20.0),
            speed_mps:           Bounds::new(7.0, 11.0),
            min_points_per_edge: 2,
            max_points_per_edge: 10,
            default_length_m:    100.0,
            node_z:              1.5,
            initial_positions:   InitialPositionMode::SharedOrigin,
        }
    }
}

/// Each forward departure may bring one reverse departure, and both take a
/// `u32` vehicle id.
const MAX_FORWARD_DEPARTURES: f64 = (u32::MAX / 2) as f64;

impl PipelineConfig {
    /// Base inter-arrival interval in seconds (`3600 / rate_per_hour`).
    #[inline]
    pub fn base_interval_secs(&self) -> f64 {
        3_600.0 / self.rate_per_hour
    }

    /// Lateral noise as a sampling interval.
    #[inline]
    pub fn jitter_bounds(&self) -> Bounds {
        Bounds::symmetric(self.waypoint_jitter)
    }

    /// Reject values that would make a stage loop forever, emit
    /// non-increasing timestamps, or produce a negative length.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.rate_per_hour.is_finite() && self.rate_per_hour > 0.0) {
            return Err(CoreError::Config(format!(
                "rate_per_hour must be positive, got {}",
                self.rate_per_hour
            )));
        }
        if !(self.horizon_secs.is_finite() && self.horizon_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "horizon_secs must be positive, got {}",
                self.horizon_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.reverse_probability) {
            return Err(CoreError::Config(format!(
                "reverse_probability must be within [0, 1], got {}",
                self.reverse_probability
            )));
        }
        self.arrival_jitter.check("arrival_jitter")?;
        if self.arrival_jitter.min <= 0.0 {
            return Err(CoreError::Config("arrival_jitter must stay above zero".into()));
        }
        let max_forward = self.horizon_secs / (self.base_interval_secs() * self.arrival_jitter.min);
        if !(max_forward < MAX_FORWARD_DEPARTURES) {
            return Err(CoreError::Config(format!(
                "rate_per_hour {} allows up to {max_forward:.0} departures, beyond the vehicle id range",
                self.rate_per_hour
            )));
        }
        if !(self.waypoint_jitter.is_finite() && self.waypoint_jitter >= 0.0) {
            return Err(CoreError::Config(format!(
                "waypoint_jitter must be non-negative, got {}",
                self.waypoint_jitter
            )));
        }
        self.step_secs.check("step_secs")?;
        // Timestamps are rounded to 0.01 s; below two hundredths two samples could collide.
        if self.step_secs.min < 0.02 {
            return Err(CoreError::Config("step_secs must be at least 0.02".into()));
        }
        self.speed_mps.check("speed_mps")?;
        if self.min_points_per_edge < 2 || self.min_points_per_edge > self.max_points_per_edge {
            return Err(CoreError::Config(format!(
                "points per edge must satisfy 2 <= min ({}) <= max ({})",
                self.min_points_per_edge, self.max_points_per_edge
            )));
        }
        if !(self.default_length_m.is_finite() && self.default_length_m > 0.0) {
            return Err(CoreError::Config(format!(
                "default_length_m must be positive, got {}",
                self.default_length_m
            )));
        }
        Ok(())
    }
}

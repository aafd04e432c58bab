//! Explicitly passed, seedable RNG.
//!
//! # Determinism strategy
//!
//! The pipeline owns exactly one [`SimRng`], built from `PipelineConfig::seed`
//! and handed `&mut` to each stage in turn.  Stages run sequentially, so the
//! order of draws is fixed and the same seed always produces the same route
//! file and trace on a given platform.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Pipeline-level RNG.
///
/// Not `Sync`; never share one across threads.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform sample from `[lo, hi)`.
    ///
    /// Degenerate bounds (`lo >= hi`) return `lo` without consuming any
    /// randomness, which lets callers pin a distribution to a constant.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            lo
        } else {
            self.0.gen_range(lo..hi)
        }
    }
}

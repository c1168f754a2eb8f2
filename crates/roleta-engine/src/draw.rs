//! Target angle selection
//!
//! The draw happens before any animation: `compute_target` turns "n
//! candidates" into one terminal rotation angle whose decode names a
//! uniformly random candidate. The offset is uniform over a full turn and
//! every candidate owns an equal arc, so each index comes up with
//! probability 1/n; the whole turns are cosmetic and vanish under the
//! modulo in the decode.

use rand::prelude::*;

use roleta_core::angle::{self, FULL_TURN};
use roleta_core::{RoletaError, RoletaResult};

/// Source of randomness for a draw
///
/// Production draws consume OS entropy; tests inject fixed values to pin
/// a specific outcome.
pub trait EntropySource: Send {
    /// Integer number of full turns in `[min, max]`
    fn full_turns(&mut self, min: u32, max: u32) -> u32;

    /// Uniform offset in `[0, 2π)`
    fn offset(&mut self) -> f64;
}

/// OS-seeded entropy for production draws
pub struct OsEntropy {
    rng: StdRng,
}

impl OsEntropy {
    /// Create from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible harness runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for OsEntropy {
    fn full_turns(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    fn offset(&mut self) -> f64 {
        self.rng.random_range(0.0..FULL_TURN)
    }
}

/// Fixed entropy for tests
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    pub turns: u32,
    pub offset: f64,
}

impl EntropySource for FixedEntropy {
    fn full_turns(&mut self, min: u32, max: u32) -> u32 {
        self.turns.clamp(min, max)
    }

    fn offset(&mut self) -> f64 {
        self.offset
    }
}

/// Terminal rotation target for one spin
///
/// Immutable once drawn; the winner is always decoded from this exact
/// angle, never from the animated rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTarget {
    /// Absolute terminal angle in radians, whole turns included
    pub angle: f64,
    /// Candidate count frozen at draw time
    pub candidate_count: usize,
}

impl SpinTarget {
    /// Decode the winning index this target encodes
    pub fn winner_index(&self) -> usize {
        angle::decode_index(self.angle, self.candidate_count)
    }
}

/// Draw a target angle encoding a uniformly random winner
///
/// Fails with [`RoletaError::NoCandidates`] when `candidate_count` is
/// zero; callers must not attempt a spin in that case.
pub fn compute_target(
    candidate_count: usize,
    current_angle: f64,
    min_full_turns: u32,
    max_full_turns: u32,
    entropy: &mut dyn EntropySource,
) -> RoletaResult<SpinTarget> {
    if candidate_count == 0 {
        return Err(RoletaError::NoCandidates);
    }

    let turns = entropy.full_turns(min_full_turns, max_full_turns.max(min_full_turns));
    let offset = entropy.offset().rem_euclid(FULL_TURN);
    let angle = current_angle + turns as f64 * FULL_TURN + offset;

    Ok(SpinTarget {
        angle,
        candidate_count,
    })
}

//! # roleta-sim — Batch draw simulator
//!
//! Runs the selection path (target draw + decode) millions of times
//! without any animation and checks the winner distribution for
//! uniformity. Trials are sharded across CPU cores; each shard owns a
//! deterministic ChaCha stream derived from the run seed, so a report is
//! reproducible bit-for-bit regardless of thread scheduling.
//!
//! Shards chain their rotation: every draw starts from the previous
//! target angle, the same way consecutive live spins do.

pub mod report;

pub use report::*;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use roleta_core::{FULL_TURN, RoletaError, RoletaResult};
use roleta_engine::{EntropySource, compute_target};

/// Batch run parameters
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DrawSimConfig {
    /// Wheel size under test
    pub candidate_count: usize,
    /// Total draws across all shards
    pub trials: u64,
    /// Run seed; same seed, same report
    pub seed: u64,
    /// Minimum whole turns per draw
    pub min_full_turns: u32,
    /// Maximum whole turns per draw
    pub max_full_turns: u32,
}

impl Default for DrawSimConfig {
    fn default() -> Self {
        Self {
            candidate_count: 10,
            trials: 100_000,
            seed: 0,
            min_full_turns: 8,
            max_full_turns: 12,
        }
    }
}

/// Entropy source backed by a deterministic ChaCha stream
struct ChaChaEntropy {
    rng: ChaCha8Rng,
}

impl ChaChaEntropy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for ChaChaEntropy {
    fn full_turns(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }

    fn offset(&mut self) -> f64 {
        self.rng.random_range(0.0..FULL_TURN)
    }
}

/// Run a batch simulation and build the uniformity report
pub fn run(config: &DrawSimConfig) -> RoletaResult<UniformityReport> {
    if config.candidate_count == 0 {
        return Err(RoletaError::NoCandidates);
    }

    let shards = num_cpus::get().max(1) as u64;
    let base = config.trials / shards;
    let remainder = config.trials % shards;

    log::info!(
        "simulating {} draws over {} candidates in {} shards",
        config.trials,
        config.candidate_count,
        shards
    );

    let counts = (0..shards)
        .into_par_iter()
        .map(|shard| {
            // First `remainder` shards absorb one extra trial each.
            let trials = base + u64::from(shard < remainder);
            run_shard(config, shard, trials)
        })
        .reduce(
            || vec![0u64; config.candidate_count],
            |mut acc, shard_counts| {
                for (total, count) in acc.iter_mut().zip(shard_counts) {
                    *total += count;
                }
                acc
            },
        );

    Ok(UniformityReport::new(
        config.candidate_count,
        config.trials,
        counts,
    ))
}

fn run_shard(config: &DrawSimConfig, shard: u64, trials: u64) -> Vec<u64> {
    // Distinct stream per shard, stable across runs of the same seed.
    let mut entropy = ChaChaEntropy::new(config.seed.wrapping_add(shard.wrapping_mul(0x9E37_79B9)));
    let mut counts = vec![0u64; config.candidate_count];
    let mut angle = 0.0;

    for _ in 0..trials {
        // candidate_count was validated before sharding.
        let Ok(target) = compute_target(
            config.candidate_count,
            angle,
            config.min_full_turns,
            config.max_full_turns,
            &mut entropy,
        ) else {
            break;
        };
        counts[target.winner_index()] += 1;
        angle = target.angle;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_run(candidate_count: usize, trials: u64) -> UniformityReport {
        run(&DrawSimConfig {
            candidate_count,
            trials,
            seed: 1337,
            min_full_turns: 8,
            max_full_turns: 12,
        })
        .unwrap()
    }

    #[test]
    fn test_zero_candidates_rejected() {
        let err = run(&DrawSimConfig {
            candidate_count: 0,
            ..DrawSimConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, RoletaError::NoCandidates));
    }

    #[test]
    fn test_counts_cover_all_trials() {
        let report = uniform_run(3, 10_000);
        assert_eq!(report.counts.iter().sum::<u64>(), 10_000);
        assert_eq!(report.counts.len(), 3);
    }

    #[test]
    fn test_uniformity_small_wheels() {
        for n in [2usize, 3] {
            let report = uniform_run(n, 20_000);
            assert!(
                report.is_uniform(),
                "wheel of {} failed chi-square: {:?}",
                n,
                report
            );
        }
    }

    #[test]
    fn test_uniformity_ten_candidates() {
        let report = uniform_run(10, 50_000);
        assert!(report.is_uniform(), "{:?}", report);
    }

    #[test]
    fn test_single_candidate_is_degenerate() {
        let report = uniform_run(1, 10_000);
        assert_eq!(report.counts, vec![10_000]);
        assert_eq!(report.chi_square, 0.0);
        assert!(report.is_uniform());
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = uniform_run(5, 10_000);
        let b = uniform_run(5, 10_000);
        assert_eq!(a.counts, b.counts);
    }
}

//! Uniformity report
//!
//! Pearson chi-square goodness-of-fit against the uniform distribution.
//! The verdict compares the statistic to the 0.999 quantile of the
//! chi-square distribution, so a fair wheel fails roughly one run in a
//! thousand.

use serde::{Deserialize, Serialize};

use roleta_core::RoletaResult;

/// Chi-square 0.999 quantiles for 1..=30 degrees of freedom
const CHI_SQUARE_P999: [f64; 30] = [
    10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588, 31.264,
    32.909, 34.528, 36.123, 37.697, 39.252, 40.790, 42.312, 43.820, 45.315, 46.797, 48.268,
    49.728, 51.179, 52.620, 54.052, 55.476, 56.892, 58.301, 59.703,
];

/// Winner distribution for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformityReport {
    /// Wheel size under test
    pub candidate_count: usize,
    /// Total draws
    pub trials: u64,
    /// Winner count per candidate index
    pub counts: Vec<u64>,
    /// Pearson chi-square statistic against the uniform expectation
    pub chi_square: f64,
    /// Degrees of freedom (`candidate_count - 1`)
    pub degrees_of_freedom: usize,
}

impl UniformityReport {
    /// Build a report from raw counts
    pub fn new(candidate_count: usize, trials: u64, counts: Vec<u64>) -> Self {
        let expected = trials as f64 / candidate_count as f64;
        let chi_square = if expected > 0.0 {
            counts
                .iter()
                .map(|&observed| {
                    let delta = observed as f64 - expected;
                    delta * delta / expected
                })
                .sum()
        } else {
            0.0
        };

        Self {
            candidate_count,
            trials,
            counts,
            chi_square,
            degrees_of_freedom: candidate_count.saturating_sub(1),
        }
    }

    /// Expected count per candidate under uniformity
    pub fn expected_per_candidate(&self) -> f64 {
        self.trials as f64 / self.candidate_count as f64
    }

    /// Largest relative deviation from the expected count
    pub fn max_relative_deviation(&self) -> f64 {
        let expected = self.expected_per_candidate();
        if expected == 0.0 {
            return 0.0;
        }
        self.counts
            .iter()
            .map(|&count| ((count as f64 - expected) / expected).abs())
            .fold(0.0, f64::max)
    }

    /// Rejection threshold for this report's degrees of freedom.
    ///
    /// `None` for the degenerate one-candidate wheel and for wheels
    /// larger than the quantile table.
    pub fn critical_value(&self) -> Option<f64> {
        if self.degrees_of_freedom == 0 {
            return None;
        }
        CHI_SQUARE_P999.get(self.degrees_of_freedom - 1).copied()
    }

    /// Chi-square verdict at the 0.001 significance level.
    ///
    /// The one-candidate wheel is uniform by construction.
    pub fn is_uniform(&self) -> bool {
        match self.critical_value() {
            Some(threshold) => self.chi_square <= threshold,
            None => self.degrees_of_freedom == 0,
        }
    }

    /// Serialize the report for export
    pub fn to_json(&self) -> RoletaResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

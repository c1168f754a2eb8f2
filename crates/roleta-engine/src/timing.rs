//! Timing profiles for spin presentation

use serde::{Deserialize, Serialize};

use roleta_core::SpinCurve;

/// Timing profile for the spin animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpinProfile {
    /// Showroom timing used on the raffle screen
    #[default]
    Normal,
    /// Faster spin for rehearsals
    Turbo,
    /// Near-instant timing for tests and headless validation
    Studio,
    /// Custom values
    Custom,
}

/// Detailed spin timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinTimingConfig {
    /// Profile type
    pub profile: SpinProfile,

    /// Total spin duration (ms)
    pub spin_duration_ms: u64,

    /// Minimum whole turns before settling
    pub min_full_turns: u32,

    /// Maximum whole turns before settling
    pub max_full_turns: u32,

    /// Interval between animation frames (ms)
    pub frame_interval_ms: u64,

    /// Deceleration curve
    pub curve: SpinCurve,
}

impl SpinTimingConfig {
    /// Showroom timing
    pub fn normal() -> Self {
        Self {
            profile: SpinProfile::Normal,
            spin_duration_ms: 5000,
            min_full_turns: 8,
            max_full_turns: 12,
            frame_interval_ms: 16,
            curve: SpinCurve::EaseOutCubic,
        }
    }

    /// Rehearsal timing
    pub fn turbo() -> Self {
        Self {
            profile: SpinProfile::Turbo,
            spin_duration_ms: 2000,
            min_full_turns: 8,
            max_full_turns: 10,
            frame_interval_ms: 16,
            curve: SpinCurve::EaseOutCubic,
        }
    }

    /// Test timing (short enough to drive thousands of spins)
    pub fn studio() -> Self {
        Self {
            profile: SpinProfile::Studio,
            spin_duration_ms: 40,
            min_full_turns: 8,
            max_full_turns: 8,
            frame_interval_ms: 1,
            curve: SpinCurve::EaseOutCubic,
        }
    }

    /// Get config for profile
    pub fn from_profile(profile: SpinProfile) -> Self {
        match profile {
            SpinProfile::Normal => Self::normal(),
            SpinProfile::Turbo => Self::turbo(),
            SpinProfile::Studio => Self::studio(),
            SpinProfile::Custom => Self::normal(),
        }
    }

    /// Scale the duration by a factor (< 1.0 = faster)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            profile: SpinProfile::Custom,
            spin_duration_ms: ((self.spin_duration_ms as f64 * factor) as u64).max(1),
            min_full_turns: self.min_full_turns,
            max_full_turns: self.max_full_turns,
            frame_interval_ms: self.frame_interval_ms,
            curve: self.curve,
        }
    }
}

impl Default for SpinTimingConfig {
    fn default() -> Self {
        Self::normal()
    }
}

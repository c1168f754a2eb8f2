//! Spin state machine and animation presenter
//!
//! Owns the wheel's continuous rotation and its lifecycle:
//!
//! ```text
//! Idle ──start_spin──▶ Spinning ──duration elapsed──▶ Settled
//!   ▲                     │ tick(now): eased advance        │
//!   └───────reset─────────┴──────────────reset / start_spin─┘
//! ```
//!
//! One spin at a time: `start_spin` while `Spinning` is rejected, never
//! queued. The winner is decoded from the exact drawn target angle on the
//! tick that crosses the duration threshold, and the settle callback
//! fires exactly once per spin. Ticks outside `Spinning` are silent
//! no-ops.

use roleta_core::{RoletaError, RoletaResult};

use crate::draw::{self, EntropySource, OsEntropy};
use crate::roster::{Candidate, Roster};
use crate::timing::SpinTimingConfig;

/// Invoked once per successful spin with the winning candidate
pub type SettleCallback = Box<dyn Fn(&Candidate) + Send + Sync>;

/// Lifecycle state of the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinState {
    /// Nothing running
    Idle,
    /// Animating toward the target angle
    Spinning {
        start_angle: f64,
        target_angle: f64,
        started_at_ms: u64,
    },
    /// Winner decoded, awaiting acknowledgement
    Settled { winner_index: usize },
}

impl SpinState {
    /// True while an animation is in flight
    pub fn is_spinning(&self) -> bool {
        matches!(self, SpinState::Spinning { .. })
    }
}

/// Wheel presenter: rotation value, state machine, settle delivery
pub struct SpinPresenter {
    config: SpinTimingConfig,
    entropy: Box<dyn EntropySource>,
    state: SpinState,
    current_angle: f64,
    /// Candidates frozen at spin start; later roster changes do not
    /// affect an in-flight spin.
    roster: Roster,
    on_settled: Option<SettleCallback>,
}

impl SpinPresenter {
    /// Create a presenter drawing from OS entropy
    pub fn new(config: SpinTimingConfig) -> Self {
        Self::with_entropy(config, Box::new(OsEntropy::new()))
    }

    /// Create with a specific entropy source
    pub fn with_entropy(config: SpinTimingConfig, entropy: Box<dyn EntropySource>) -> Self {
        Self {
            config,
            entropy,
            state: SpinState::Idle,
            current_angle: 0.0,
            roster: Roster::empty(),
            on_settled: None,
        }
    }

    /// Register the settle callback
    pub fn on_settled(&mut self, callback: SettleCallback) {
        self.on_settled = Some(callback);
    }

    /// Begin a spin over `roster`, freezing its count and order.
    ///
    /// Calling this from `Settled` acknowledges the previous result and
    /// starts a new spin. Fails with [`RoletaError::SpinInProgress`]
    /// while `Spinning` and with [`RoletaError::NoCandidates`] on an
    /// empty roster; neither failure touches the current state.
    pub fn start_spin(&mut self, roster: &Roster, now_ms: u64) -> RoletaResult<()> {
        if self.state.is_spinning() {
            return Err(RoletaError::SpinInProgress);
        }
        if roster.is_empty() {
            return Err(RoletaError::NoCandidates);
        }

        let target = draw::compute_target(
            roster.len(),
            self.current_angle,
            self.config.min_full_turns,
            self.config.max_full_turns,
            self.entropy.as_mut(),
        )?;

        self.roster = roster.clone();
        self.state = SpinState::Spinning {
            start_angle: self.current_angle,
            target_angle: target.angle,
            started_at_ms: now_ms,
        };
        log::debug!(
            "spin started: {} candidates, target {:.4} rad",
            roster.len(),
            target.angle
        );
        Ok(())
    }

    /// Advance the animation to `now_ms`.
    ///
    /// Intermediate ticks ease the rotation toward the target without
    /// regressing or overshooting; the tick whose elapsed time reaches
    /// the spin duration performs the settle and decodes the winner from
    /// the exact target angle. Ticks while `Idle` or `Settled` do
    /// nothing.
    pub fn tick(&mut self, now_ms: u64) {
        let SpinState::Spinning {
            start_angle,
            target_angle,
            started_at_ms,
        } = self.state
        else {
            return;
        };

        let elapsed = now_ms.saturating_sub(started_at_ms);
        let progress = (elapsed as f64 / self.config.spin_duration_ms as f64).min(1.0);
        let eased = self.config.curve.apply(progress);
        self.current_angle = start_angle + (target_angle - start_angle) * eased;

        if elapsed >= self.config.spin_duration_ms {
            self.settle(target_angle);
        }
    }

    fn settle(&mut self, target_angle: f64) {
        let winner_index = roleta_core::decode_index(target_angle, self.roster.len());
        self.current_angle = target_angle;
        self.state = SpinState::Settled { winner_index };

        let winner = self
            .roster
            .get(winner_index)
            .expect("decoded index is always within the frozen roster");
        log::info!("spin settled: winner '{}' (index {})", winner.name, winner_index);

        if let Some(callback) = &self.on_settled {
            callback(winner);
        }
    }

    /// Return to `Idle` from any state; safe to call repeatedly.
    ///
    /// The accumulated rotation is kept so the wheel does not visually
    /// snap; the next spin starts from wherever the wheel stopped.
    pub fn reset(&mut self) {
        self.state = SpinState::Idle;
    }

    /// Current rotation for the presentation layer
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Current lifecycle state
    pub fn state(&self) -> SpinState {
        self.state
    }

    /// Winning candidate once settled
    pub fn winner(&self) -> Option<&Candidate> {
        match self.state {
            SpinState::Settled { winner_index } => self.roster.get(winner_index),
            _ => None,
        }
    }

    /// Timing configuration in effect
    pub fn config(&self) -> &SpinTimingConfig {
        &self.config
    }
}

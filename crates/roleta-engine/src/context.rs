//! Raffle round orchestration
//!
//! `RaffleContext` wires the presenter to the backend ports and walks one
//! month's raffle through its lifecycle: load the eligible roster, spin,
//! surface the settled winner as a proposal, then confirm (persist and
//! refresh) or dismiss (allow a re-spin). The settled winner is a
//! proposal, not a commitment; only a successful confirmation write
//! finalizes it.

use serde::{Deserialize, Serialize};

use roleta_core::{RoletaError, RoletaResult};

use crate::ports::{ConfirmationSink, EligibilitySource, GroupId};
use crate::presenter::{SpinPresenter, SpinState};
use crate::roster::Roster;
use crate::timing::SpinTimingConfig;

/// A settled raffle result for one reference month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleRound {
    /// Reference month, 1-based within the cycle
    pub month: u32,
    /// Winning candidate id
    pub winner_id: String,
    /// Winning candidate display name
    pub winner_name: String,
}

/// One raffle screen's worth of state: roster, month, presenter, ports
pub struct RaffleContext {
    group: GroupId,
    eligibility: Box<dyn EligibilitySource>,
    confirmation: Box<dyn ConfirmationSink>,
    presenter: SpinPresenter,
    roster: Roster,
    month: u32,
    /// Month captured when the in-flight spin started
    active_month: u32,
    proposal: Option<RaffleRound>,
}

impl RaffleContext {
    /// Create a context for one group
    pub fn new(
        group: GroupId,
        eligibility: Box<dyn EligibilitySource>,
        confirmation: Box<dyn ConfirmationSink>,
        config: SpinTimingConfig,
    ) -> Self {
        Self {
            group,
            eligibility,
            confirmation,
            presenter: SpinPresenter::new(config),
            roster: Roster::empty(),
            month: 1,
            active_month: 1,
            proposal: None,
        }
    }

    /// Swap in a pre-built presenter (tests inject fixed entropy here)
    pub fn with_presenter(mut self, presenter: SpinPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    /// Pull the current eligible list from the backend.
    ///
    /// Rejected while a spin is in flight: the in-flight roster is
    /// frozen, and refreshing under it would only invite confusion about
    /// which list the wheel is showing.
    pub fn refresh_roster(&mut self) -> RoletaResult<usize> {
        if self.presenter.state().is_spinning() {
            return Err(RoletaError::SpinInProgress);
        }
        let candidates = self.eligibility.eligible_candidates(&self.group)?;
        self.roster = Roster::new(candidates)?;
        log::debug!(
            "roster refreshed for group {}: {} eligible",
            self.group,
            self.roster.len()
        );
        Ok(self.roster.len())
    }

    /// Select the reference month for the next spin (1-based)
    pub fn set_reference_month(&mut self, month: u32) {
        self.month = month.max(1);
    }

    /// Start a spin over the cached roster.
    ///
    /// A pending proposal is discarded: starting a new spin acknowledges
    /// the previous result.
    pub fn spin(&mut self, now_ms: u64) -> RoletaResult<()> {
        self.presenter.start_spin(&self.roster, now_ms)?;
        self.proposal = None;
        self.active_month = self.month;
        Ok(())
    }

    /// Advance the animation; on settle, materialize the proposal
    pub fn tick(&mut self, now_ms: u64) {
        self.presenter.tick(now_ms);

        if self.proposal.is_none() {
            if let Some(winner) = self.presenter.winner() {
                self.proposal = Some(RaffleRound {
                    month: self.active_month,
                    winner_id: winner.id.clone(),
                    winner_name: winner.name.clone(),
                });
            }
        }
    }

    /// Persist the pending proposal through the confirmation port.
    ///
    /// On success the proposal is cleared, the presenter returns to
    /// idle, and the roster is refreshed (the backend has marked the
    /// winner ineligible). A refresh failure is returned to the caller,
    /// but the confirmation itself has already been persisted at that
    /// point. On confirmation failure the proposal is kept so the write
    /// can be retried without re-spinning.
    pub fn confirm_winner(&mut self) -> RoletaResult<RaffleRound> {
        let round = self.proposal.clone().ok_or(RoletaError::NoProposal)?;
        self.confirmation.confirm(&self.group, &round)?;

        log::info!(
            "winner confirmed for group {} month {}: {}",
            self.group,
            round.month,
            round.winner_name
        );
        self.proposal = None;
        self.presenter.reset();
        self.refresh_roster()?;
        Ok(round)
    }

    /// Discard the pending proposal and return to idle.
    ///
    /// The month stays open: the caller may spin again. Safe to call
    /// without a proposal.
    pub fn dismiss_winner(&mut self) {
        self.proposal = None;
        self.presenter.reset();
    }

    /// Cached eligible roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Pending settled winner, if any
    pub fn proposal(&self) -> Option<&RaffleRound> {
        self.proposal.as_ref()
    }

    /// Selected reference month
    pub fn reference_month(&self) -> u32 {
        self.month
    }

    /// Current rotation for rendering
    pub fn current_angle(&self) -> f64 {
        self.presenter.current_angle()
    }

    /// Presenter lifecycle state
    pub fn state(&self) -> SpinState {
        self.presenter.state()
    }
}

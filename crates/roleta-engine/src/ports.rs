//! External collaborator ports
//!
//! The REST backend that owns participant eligibility and raffle
//! persistence stays outside this crate; it is reachable only through
//! these two traits. [`InMemoryBackend`] implements both for tests and
//! offline demos.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use roleta_core::{RoletaError, RoletaResult};

use crate::context::RaffleRound;
use crate::roster::Candidate;

/// Group ("turma") identifier in the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(String);

impl GroupId {
    /// Wrap a backend group id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supplies the current ordered list of draw-eligible participants
pub trait EligibilitySource: Send + Sync {
    /// Eligible candidates for a group, in backend order
    fn eligible_candidates(&self, group: &GroupId) -> RoletaResult<Vec<Candidate>>;
}

/// Persists a confirmed raffle round
///
/// The write is idempotent on the backend side: confirming the same
/// round twice records it once. A successful confirmation makes the
/// winner ineligible for later months of the same cycle.
pub trait ConfirmationSink: Send + Sync {
    /// Persist the winner for the round
    fn confirm(&self, group: &GroupId, round: &RaffleRound) -> RoletaResult<()>;
}

#[derive(Default)]
struct BackendState {
    eligible: Vec<Candidate>,
    confirmed: Vec<RaffleRound>,
    fail_next_confirm: bool,
}

/// In-memory backend implementing both ports
///
/// Clones share state, so one instance can serve as the eligibility
/// source and the confirmation sink of the same context.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<RwLock<BackendState>>,
}

impl InMemoryBackend {
    /// Create with an initial eligible list
    pub fn new(eligible: Vec<Candidate>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BackendState {
                eligible,
                confirmed: Vec::new(),
                fail_next_confirm: false,
            })),
        }
    }

    /// Replace the eligible list
    pub fn set_eligible(&self, eligible: Vec<Candidate>) {
        self.state.write().eligible = eligible;
    }

    /// Make the next confirmation fail with a backend error
    pub fn fail_next_confirm(&self) {
        self.state.write().fail_next_confirm = true;
    }

    /// Rounds confirmed so far
    pub fn confirmed(&self) -> Vec<RaffleRound> {
        self.state.read().confirmed.clone()
    }
}

impl EligibilitySource for InMemoryBackend {
    fn eligible_candidates(&self, _group: &GroupId) -> RoletaResult<Vec<Candidate>> {
        Ok(self.state.read().eligible.clone())
    }
}

impl ConfirmationSink for InMemoryBackend {
    fn confirm(&self, _group: &GroupId, round: &RaffleRound) -> RoletaResult<()> {
        let mut state = self.state.write();
        if state.fail_next_confirm {
            state.fail_next_confirm = false;
            return Err(RoletaError::Backend("confirmation write failed".into()));
        }

        let already_recorded = state
            .confirmed
            .iter()
            .any(|r| r.month == round.month && r.winner_id == round.winner_id);
        if !already_recorded {
            state.eligible.retain(|c| c.id != round.winner_id);
            state.confirmed.push(round.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> InMemoryBackend {
        InMemoryBackend::new(vec![
            Candidate::new("p1", "Ana"),
            Candidate::new("p2", "Bruno"),
        ])
    }

    fn round() -> RaffleRound {
        RaffleRound {
            month: 1,
            winner_id: "p1".into(),
            winner_name: "Ana".into(),
        }
    }

    #[test]
    fn test_confirm_removes_winner_from_eligible() {
        let backend = backend();
        let group = GroupId::new("g1");

        backend.confirm(&group, &round()).unwrap();

        let remaining = backend.eligible_candidates(&group).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "p2");
        assert_eq!(backend.confirmed().len(), 1);
    }

    #[test]
    fn test_confirm_is_idempotent() {
        let backend = backend();
        let group = GroupId::new("g1");

        backend.confirm(&group, &round()).unwrap();
        backend.confirm(&group, &round()).unwrap();

        assert_eq!(backend.confirmed().len(), 1);
    }

    #[test]
    fn test_fail_next_confirm_only_fails_once() {
        let backend = backend();
        let group = GroupId::new("g1");
        backend.fail_next_confirm();

        assert!(backend.confirm(&group, &round()).is_err());
        assert!(backend.confirm(&group, &round()).is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let backend = backend();
        let clone = backend.clone();
        clone.set_eligible(vec![Candidate::new("p9", "Nina")]);

        let group = GroupId::new("g1");
        let seen = backend.eligible_candidates(&group).unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "Nina");
    }
}

//! Candidate roster for a raffle draw

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use roleta_core::{RoletaError, RoletaResult, segment_arc};

/// One eligible participant entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Opaque backend identifier
    pub id: String,
    /// Display name painted on the wheel arc
    pub name: String,
}

impl Candidate {
    /// Create a candidate
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ordered candidate list for one spin
///
/// Order determines the angle-to-index mapping, not the odds: every
/// candidate occupies an equal arc. Duplicate ids are rejected at
/// construction; a roster handed to a spin is frozen for that spin's
/// duration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Build a roster, rejecting duplicate candidate ids
    pub fn new(candidates: Vec<Candidate>) -> RoletaResult<Self> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id.as_str()) {
                return Err(RoletaError::DuplicateCandidate(candidate.id.clone()));
            }
        }
        Ok(Self { candidates })
    }

    /// Empty roster
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// True when there is nothing to spin
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate at a decoded index
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// Iterate candidates in layout order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Layout arc `(start, end)` for the candidate at `index`
    pub fn arc_of(&self, index: usize) -> Option<(f64, f64)> {
        if index < self.candidates.len() {
            Some(segment_arc(index, self.candidates.len()))
        } else {
            None
        }
    }
}

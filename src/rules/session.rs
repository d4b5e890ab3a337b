//! Game session and the round state machine.
//!
//! ```text
//! NotStarted ─start→ RoundActive(0) ─choose→ RoundResolved(0) ─advance→ RoundActive(1)
//!   … RoundActive(9) ─choose→ Completed
//! ```
//!
//! Outcome and score are always written in the same step, so
//! `score == count(Correct)` holds at every observable point. Failed
//! operations leave the session untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::round::{Choice, Outcome, Round};
use crate::core::{EngineError, Mode, Result, ROUND_COUNT};
use crate::persistence::DailyRecord;

/// Where the session is in its progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    RoundActive(usize),
    RoundResolved(usize),
    Completed,
}

/// Coarse session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Completed,
}

/// What a successful choice did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceReport {
    pub round: usize,
    pub outcome: Outcome,
    /// Score after this choice.
    pub score: u8,
    /// True when this choice resolved the final round.
    pub completed: bool,
}

/// A ten-round game.
///
/// Rounds are held in a persistent vector, so cloning a session for a UI
/// snapshot is O(1). Deserialization goes through `RawSession` and
/// rejects any payload the state machine could not have produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSession")]
pub struct GameSession {
    mode: Mode,
    rounds: Vector<Round>,
    score: u8,
    phase: Phase,
}

/// Unchecked wire form of a [`GameSession`].
#[derive(Deserialize)]
struct RawSession {
    mode: Mode,
    rounds: Vector<Round>,
    score: u8,
    phase: Phase,
}

impl TryFrom<RawSession> for GameSession {
    type Error = EngineError;

    fn try_from(raw: RawSession) -> Result<Self> {
        if raw.rounds.len() != ROUND_COUNT {
            return Err(EngineError::corrupt(format!(
                "expected {ROUND_COUNT} rounds, found {}",
                raw.rounds.len()
            )));
        }
        for (i, round) in raw.rounds.iter().enumerate() {
            if round.index != i {
                return Err(EngineError::corrupt(format!("round {i} has index {}", round.index)));
            }
            if round.card_a.id == round.card_b.id {
                return Err(EngineError::corrupt(format!("round {i} repeats {}", round.card_a.id)));
            }
        }

        // Outcomes fill a prefix of the rounds.
        let resolved = raw.rounds.iter().take_while(|r| r.outcome.is_resolved()).count();
        if raw.rounds.iter().skip(resolved).any(|r| r.outcome.is_resolved()) {
            return Err(EngineError::corrupt("resolved rounds are not contiguous"));
        }

        let correct = raw.rounds.iter().filter(|r| r.outcome.is_correct()).count();
        if usize::from(raw.score) != correct {
            return Err(EngineError::corrupt(format!(
                "score {} does not match {correct} correct round(s)",
                raw.score
            )));
        }

        let phase_fits = match raw.phase {
            Phase::NotStarted => resolved == 0,
            Phase::RoundActive(i) => i < ROUND_COUNT && resolved == i,
            Phase::RoundResolved(i) => i + 1 < ROUND_COUNT && resolved == i + 1,
            Phase::Completed => resolved == ROUND_COUNT,
        };
        if !phase_fits {
            return Err(EngineError::corrupt(format!(
                "phase {:?} with {resolved} resolved round(s)",
                raw.phase
            )));
        }

        Ok(Self {
            mode: raw.mode,
            rounds: raw.rounds,
            score: raw.score,
            phase: raw.phase,
        })
    }
}

impl GameSession {
    /// Create a session over generated rounds.
    pub(crate) fn new(mode: Mode, rounds: Vec<Round>) -> Self {
        debug_assert_eq!(rounds.len(), ROUND_COUNT);
        Self {
            mode,
            rounds: rounds.into_iter().collect(),
            score: 0,
            phase: Phase::NotStarted,
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.phase == Phase::Completed {
            Status::Completed
        } else {
            Status::InProgress
        }
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    #[must_use]
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    /// The round currently awaiting a choice.
    #[must_use]
    pub fn active_round(&self) -> Option<&Round> {
        match self.phase {
            Phase::RoundActive(i) => self.rounds.get(i),
            _ => None,
        }
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.outcome.is_resolved()).count()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.outcome.is_correct()).count()
    }

    /// Activate the first round. No-op once started.
    pub fn start(&mut self) -> Phase {
        if self.phase == Phase::NotStarted {
            self.phase = Phase::RoundActive(0);
            info!(mode = ?self.mode.kind(), seed = self.mode.seed(), "session started");
        }
        self.phase
    }

    /// Resolve the active round with the player's choice.
    ///
    /// A choice for a resolved round fails with `RoundAlreadyResolved`; a
    /// choice that does not name a card of the active round fails with
    /// `InvalidChoice`. Neither changes the session.
    pub fn choose(&mut self, choice: &Choice) -> Result<ChoiceReport> {
        let invalid = || EngineError::InvalidChoice {
            round: choice.round,
            card: choice.card.to_string(),
        };

        let round = self.rounds.get(choice.round).ok_or_else(invalid)?;
        if round.outcome.is_resolved() {
            debug!(round = choice.round, "duplicate choice ignored");
            return Err(EngineError::RoundAlreadyResolved {
                round: choice.round,
            });
        }
        if self.phase != Phase::RoundActive(choice.round) {
            return Err(invalid());
        }
        let outcome = Outcome::from(round.judge(&choice.card).ok_or_else(invalid)?);

        if let Some(round) = self.rounds.get_mut(choice.round) {
            round.outcome = outcome;
        }
        if outcome.is_correct() {
            self.score += 1;
        }

        let completed = choice.round + 1 == ROUND_COUNT;
        self.phase = if completed {
            Phase::Completed
        } else {
            Phase::RoundResolved(choice.round)
        };
        debug_assert_eq!(usize::from(self.score), self.correct_count());

        debug!(round = choice.round, ?outcome, score = self.score, "round resolved");
        if completed {
            info!(score = self.score, "session completed");
        }

        Ok(ChoiceReport {
            round: choice.round,
            outcome,
            score: self.score,
            completed,
        })
    }

    /// Move from a resolved round to the next one. No-op in any other phase.
    pub fn advance(&mut self) -> Phase {
        if let Phase::RoundResolved(i) = self.phase {
            self.phase = Phase::RoundActive(i + 1);
        }
        self.phase
    }

    /// The persistable projection, once the session is completed.
    #[must_use]
    pub fn record(&self) -> Option<DailyRecord> {
        if self.status() != Status::Completed {
            return None;
        }
        let mut outcomes = [false; ROUND_COUNT];
        for (slot, round) in outcomes.iter_mut().zip(self.rounds.iter()) {
            *slot = round.outcome.is_correct();
        }
        Some(DailyRecord::new(outcomes, self.score))
    }
}

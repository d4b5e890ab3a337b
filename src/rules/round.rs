//! Rounds, outcomes and the comparison rule.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeKey, Card, CardId};

/// Outcome of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Unresolved,
    Correct,
    Incorrect,
}

impl Outcome {
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Outcome::Unresolved)
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

impl From<bool> for Outcome {
    fn from(correct: bool) -> Self {
        if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

/// A player's answer for one round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Round index (0-based).
    pub round: usize,
    /// The card the player picked.
    pub card: CardId,
}

impl Choice {
    #[must_use]
    pub fn new(round: usize, card: CardId) -> Self {
        Self { round, card }
    }
}

/// One comparison between two cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Position in the session (0..10).
    pub index: usize,
    pub card_a: Card,
    pub card_b: Card,
    /// Attribute the cards are compared on.
    pub attribute: AttributeKey,
    pub outcome: Outcome,
}

impl Round {
    #[must_use]
    pub fn new(index: usize, card_a: Card, card_b: Card, attribute: AttributeKey) -> Self {
        Self {
            index,
            card_a,
            card_b,
            attribute,
            outcome: Outcome::Unresolved,
        }
    }

    /// Whether picking `chosen` is correct.
    ///
    /// The higher value wins; a tie is correct for either card. Returns
    /// `None` if `chosen` is neither card of this round.
    #[must_use]
    pub fn judge(&self, chosen: &CardId) -> Option<bool> {
        let (picked, other) = if *chosen == self.card_a.id {
            (&self.card_a, &self.card_b)
        } else if *chosen == self.card_b.id {
            (&self.card_b, &self.card_a)
        } else {
            return None;
        };
        Some(picked.value >= other.value)
    }

    /// The card that wins the comparison (`card_a` on a tie).
    #[must_use]
    pub fn winner(&self) -> &Card {
        if self.card_b.value > self.card_a.value {
            &self.card_b
        } else {
            &self.card_a
        }
    }

    #[must_use]
    pub fn cards(&self) -> [&Card; 2] {
        [&self.card_a, &self.card_b]
    }
}

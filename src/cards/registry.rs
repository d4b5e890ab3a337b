//! Candidate pool: the eligible cards a session draws from.
//!
//! Built from raw source records. Records whose identifier normalizes to
//! nothing are dropped, and duplicates keep their first occurrence, so the
//! pool order (and with it every seeded draw) depends only on the input
//! order.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::definition::{CandidateRecord, Card, CardId};

/// Ordered, de-duplicated set of eligible cards.
///
/// ## Example
///
/// ```
/// use asmrandle::cards::{CandidatePool, CandidateRecord};
///
/// let pool = CandidatePool::from_records(&[
///     CandidateRecord::new("Sol Ring", "a", 10),
///     CandidateRecord::new("sol ring", "b", 20),
///     CandidateRecord::new("Arcane Signet", "c", 5),
/// ]);
///
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.get(0).unwrap().value, 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    cards: Vec<Card>,
}

impl CandidatePool {
    /// Create a new empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from raw records.
    #[must_use]
    pub fn from_records(records: &[CandidateRecord]) -> Self {
        let mut pool = Self::new();
        let mut seen = FxHashSet::default();

        for record in records {
            let Some(card) = Card::from_record(record) else {
                debug!(identifier = %record.identifier, "skipping record with empty identifier");
                continue;
            };
            if seen.insert(card.id.clone()) {
                pool.cards.push(card);
            }
        }

        debug!(records = records.len(), eligible = pool.len(), "candidate pool built");
        pool
    }

    /// Get a card by pool position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Find a card by identifier.
    #[must_use]
    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Get the number of eligible cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

//! Seeded card-pool generation.

use tracing::debug;

use crate::cards::{AttributeKey, CandidatePool};
use crate::core::{EngineError, GameRng, Mode, Result, ROUND_COUNT};
use crate::rules::{GameSession, Round};

/// Draws the ten card pairs of a session.
///
/// Each round takes two distinct pool positions from the seeded RNG; the
/// first draw becomes `card_a`. Cards may recur across rounds but never
/// within one.
///
/// ```
/// use asmrandle::cards::{CandidatePool, CandidateRecord};
/// use asmrandle::pool::CardPoolGenerator;
///
/// let pool = CandidatePool::from_records(&[
///     CandidateRecord::new("Sol Ring", "a", 10),
///     CandidateRecord::new("Arcane Signet", "b", 5),
///     CandidateRecord::new("Command Tower", "c", 12),
/// ]);
/// let generator = CardPoolGenerator::new("inclusion");
///
/// let first = generator.generate(20250704, &pool).unwrap();
/// let second = generator.generate(20250704, &pool).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct CardPoolGenerator {
    attribute: AttributeKey,
}

impl CardPoolGenerator {
    pub fn new(attribute: impl Into<AttributeKey>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &AttributeKey {
        &self.attribute
    }

    /// Generate the ordered rounds for a seed.
    ///
    /// Fails with `InsufficientContent` if the pool has fewer than two cards.
    pub fn generate(&self, seed: u64, pool: &CandidatePool) -> Result<Vec<Round>> {
        if pool.len() < 2 {
            return Err(EngineError::InsufficientContent {
                eligible: pool.len(),
            });
        }

        let mut rng = GameRng::new(seed);
        let mut rounds = Vec::with_capacity(ROUND_COUNT);

        for index in 0..ROUND_COUNT {
            let picked = rng.pick_distinct_indices(pool.len(), 2);
            let (Some(a), Some(b)) = (pool.get(picked[0]), pool.get(picked[1])) else {
                return Err(EngineError::InsufficientContent {
                    eligible: pool.len(),
                });
            };
            debug!(round = index, a = %a.id, b = %b.id, "round drawn");
            rounds.push(Round::new(index, a.clone(), b.clone(), self.attribute.clone()));
        }

        Ok(rounds)
    }

    /// Generate rounds for `mode` and wrap them in a not-yet-started session.
    pub fn build_session(&self, mode: Mode, pool: &CandidatePool) -> Result<GameSession> {
        let rounds = self.generate(mode.seed(), pool)?;
        Ok(GameSession::new(mode, rounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CandidateRecord;
    use crate::rules::Phase;

    fn pool(n: usize) -> CandidatePool {
        let records: Vec<_> = (0..n)
            .map(|i| CandidateRecord::new(format!("Card {i}"), format!("https://img/{i}"), i as i64))
            .collect();
        CandidatePool::from_records(&records)
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let generator = CardPoolGenerator::new("inclusion");
        let p = pool(40);
        assert_eq!(
            generator.generate(20250101, &p).unwrap(),
            generator.generate(20250101, &p).unwrap()
        );
    }

    #[test]
    fn test_different_seed_different_rounds() {
        let generator = CardPoolGenerator::new("inclusion");
        let p = pool(40);
        assert_ne!(
            generator.generate(20250101, &p).unwrap(),
            generator.generate(20250102, &p).unwrap()
        );
    }

    #[test]
    fn test_pairs_are_distinct_and_indexed() {
        let generator = CardPoolGenerator::new("decks");
        let rounds = generator.generate(7, &pool(2)).unwrap();

        assert_eq!(rounds.len(), ROUND_COUNT);
        for (i, round) in rounds.iter().enumerate() {
            assert_eq!(round.index, i);
            assert_ne!(round.card_a.id, round.card_b.id);
            assert_eq!(round.attribute.as_str(), "decks");
        }
    }

    #[test]
    fn test_insufficient_content() {
        let generator = CardPoolGenerator::new("inclusion");
        assert_eq!(
            generator.generate(1, &pool(1)),
            Err(EngineError::InsufficientContent { eligible: 1 })
        );
        assert_eq!(
            generator.generate(1, &pool(0)),
            Err(EngineError::InsufficientContent { eligible: 0 })
        );
    }

    #[test]
    fn test_build_session() {
        let generator = CardPoolGenerator::new("inclusion");
        let session = generator.build_session(Mode::practice(3), &pool(5)).unwrap();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.rounds().len(), ROUND_COUNT);
        assert_eq!(session.score(), 0);
    }
}

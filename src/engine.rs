//! Engine façade for a UI shell.
//!
//! Wires seed derivation, the replay short-circuit, content fetching, pool
//! generation, the round state machine and persistence together. The
//! engine holds no session state: the caller owns the `GameSession` and the
//! cookie store and passes them into each operation.
//!
//! ```text
//! start(Daily) ──cookie decodes──→ Entry::Replay (no fetch, no rounds)
//!      │
//!      └─absent/corrupt─→ fetch → generate → Entry::Play(session)
//!                                   present_round → choose → advance → …
//!                                   10th choose → cookie write (Daily only)
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{AssetRef, AttributeKey, CandidatePool, CardId};
use crate::content::{with_timeout, ContentSource};
use crate::core::{Clock, DateKey, EngineError, GameConfig, Mode, ModeKind, Result, SeedDeriver};
use crate::persistence::{CookieStore, DailyEntry, DailyRecord, PersistenceGateway, ResultCodec};
use crate::pool::CardPoolGenerator;
use crate::rules::{Choice, ChoiceReport, GameSession, Phase};

/// Result of starting a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Today's Daily game was already played; show the stored result.
    Replay {
        date: DateKey,
        record: DailyRecord,
        /// Emoji summary line, e.g. `🟩🟩🟥… 7/10`.
        rendered: String,
    },
    /// A new session, already on its first round.
    Play(GameSession),
}

/// A card as shown to the player: no value until the round resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub asset: AssetRef,
}

/// The active round, ready to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub index: usize,
    pub attribute: AttributeKey,
    pub card_a: CardView,
    pub card_b: CardView,
}

/// Daily game engine over an injected content source and clock.
///
/// # Runtime
///
/// `start` and `present_round` bound their content requests with
/// `tokio::time::timeout`, so they must be polled inside a Tokio runtime
/// with the time driver enabled (e.g. a `current_thread` runtime built with
/// `enable_time()`, or `#[tokio::test]`). Polling them elsewhere panics.
/// The futures are not `Send`; a single-threaded runtime or a `LocalSet`
/// is enough.
pub struct DailyEngine<S, C> {
    source: S,
    clock: C,
    config: GameConfig,
    generator: CardPoolGenerator,
    gateway: PersistenceGateway,
}

impl<S: ContentSource, C: Clock> DailyEngine<S, C> {
    pub fn new(source: S, clock: C, config: GameConfig) -> Self {
        let generator = CardPoolGenerator::new(config.attribute.clone());
        let gateway = PersistenceGateway::new(config.retention_days);
        Self {
            source,
            clock,
            config,
            generator,
            gateway,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start a game in the requested mode.
    ///
    /// In Daily mode a stored result for today short-circuits to
    /// `Entry::Replay` without fetching content. Otherwise the candidate set
    /// is fetched (bounded by the configured timeout) and a session is
    /// generated and started.
    pub async fn start(&self, requested: ModeKind, store: &impl CookieStore) -> Result<Entry> {
        let mode = SeedDeriver::derive(requested, self.clock.now());

        if let Mode::Daily { date, .. } = mode {
            if let DailyEntry::Replay(record) = self.gateway.enter_daily(store, date) {
                return Ok(Entry::Replay {
                    date,
                    rendered: ResultCodec::render(&record),
                    record,
                });
            }
        }

        let records = with_timeout(
            "candidate fetch",
            self.config.fetch_timeout(),
            self.source.fetch_candidate_set(),
        )
        .await?;
        let pool = CandidatePool::from_records(&records);

        let mut session = self.generator.build_session(mode, &pool)?;
        session.start();
        info!(mode = ?mode.kind(), candidates = pool.len(), "game ready");

        Ok(Entry::Play(session))
    }

    /// Resolve the assets of the active round's cards.
    ///
    /// Returns `None` when no round is active. On timeout or source failure
    /// the error is `ContentUnavailable`; calling again retries.
    pub async fn present_round(&self, session: &GameSession) -> Result<Option<RoundView>> {
        let Some(round) = session.active_round() else {
            return Ok(None);
        };

        let (asset_a, asset_b) = with_timeout("asset resolution", self.config.fetch_timeout(), async {
            let (a, b) = tokio::join!(
                self.source.resolve_asset(&round.card_a),
                self.source.resolve_asset(&round.card_b)
            );
            Ok::<_, EngineError>((a?, b?))
        })
        .await?;

        Ok(Some(RoundView {
            index: round.index,
            attribute: round.attribute.clone(),
            card_a: CardView {
                id: round.card_a.id.clone(),
                asset: asset_a,
            },
            card_b: CardView {
                id: round.card_b.id.clone(),
                asset: asset_b,
            },
        }))
    }

    /// Apply a player's choice.
    ///
    /// When this resolves the tenth round of a Daily session, the result is
    /// written to `store`. No other operation writes cookies.
    pub fn choose(
        &self,
        session: &mut GameSession,
        store: &mut impl CookieStore,
        choice: &Choice,
    ) -> Result<ChoiceReport> {
        let report = session.choose(choice)?;
        if report.completed {
            self.gateway.record_completion(store, session);
        }
        Ok(report)
    }

    /// Move on to the next round after the resolved one.
    pub fn advance(&self, session: &mut GameSession) -> Phase {
        session.advance()
    }
}

//! Daily mode end-to-end tests.
//!
//! These drive `DailyEngine` the way a browser shell would: start, present,
//! choose, advance, and reload.

mod common;

use std::time::Duration;

use asmrandle::{
    Choice, CookieStore, DailyEngine, DailyRecord, EngineError, Entry, FixedClock, GameConfig,
    GameSession, MemoryCookieStore, ModeKind, Phase, ResultCodec, Status, ROUND_COUNT,
};

use common::{init_logging, july_fourth, records, ScriptedSource, JULY_FOURTH_KEY};

fn engine(source: ScriptedSource) -> DailyEngine<ScriptedSource, FixedClock> {
    DailyEngine::new(source, FixedClock::at(july_fourth()), GameConfig::default())
}

fn expect_play(entry: Entry) -> GameSession {
    match entry {
        Entry::Play(session) => session,
        Entry::Replay { .. } => panic!("expected a fresh session"),
    }
}

/// Pick card A of the active round.
fn pick_a(session: &GameSession) -> Choice {
    let round = session.active_round().expect("a round should be active");
    Choice::new(round.index, round.card_a.id.clone())
}

// =============================================================================
// Replay Short-Circuit
// =============================================================================

#[tokio::test]
async fn test_stored_cookie_renders_without_playing() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let store = MemoryCookieStore::new().with_cookie(
        JULY_FOURTH_KEY,
        "true,true,true,true,true,false,false,false,false,false|5",
    );

    let entry = engine.start(ModeKind::Daily, &store).await.unwrap();

    let Entry::Replay { date, record, rendered } = entry else {
        panic!("expected replay");
    };
    assert_eq!(date.to_string(), JULY_FOURTH_KEY);
    assert_eq!(record.score, 5);
    assert_eq!(rendered, "🟩🟩🟩🟩🟩🟥🟥🟥🟥🟥 5/10");
    assert_eq!(engine_fetches(&engine), 0, "replay must not fetch content");
}

#[tokio::test]
async fn test_inconsistent_cookie_renders_stored_score() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let store = MemoryCookieStore::new().with_cookie(
        JULY_FOURTH_KEY,
        "false,false,false,false,false,false,false,false,false,false|9",
    );

    let Entry::Replay { rendered, .. } = engine.start(ModeKind::Daily, &store).await.unwrap() else {
        panic!("expected replay");
    };
    assert_eq!(rendered, "🟥🟥🟥🟥🟥🟥🟥🟥🟥🟥 9/10");
}

#[tokio::test]
async fn test_corrupt_cookie_starts_fresh_session() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let store = MemoryCookieStore::new().with_cookie(JULY_FOURTH_KEY, "yes,no,maybe|banana");

    let session = expect_play(engine.start(ModeKind::Daily, &store).await.unwrap());

    assert_eq!(session.rounds().len(), ROUND_COUNT);
    assert_eq!(session.phase(), Phase::RoundActive(0));
    assert_eq!(session.mode().date().unwrap().to_string(), JULY_FOURTH_KEY);
}

#[tokio::test]
async fn test_yesterdays_cookie_does_not_short_circuit() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let store = MemoryCookieStore::new().with_cookie(
        "20250703",
        "true,true,true,true,true,true,true,true,true,true|10",
    );

    let entry = engine.start(ModeKind::Daily, &store).await.unwrap();
    assert!(matches!(entry, Entry::Play(_)));
}

// =============================================================================
// Full Daily Game
// =============================================================================

#[tokio::test]
async fn test_only_tenth_round_writes_cookie() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let mut store = MemoryCookieStore::new();

    let mut session = expect_play(engine.start(ModeKind::Daily, &store).await.unwrap());

    for i in 0..ROUND_COUNT {
        let view = engine.present_round(&session).await.unwrap().unwrap();
        assert_eq!(view.index, i);

        let choice = pick_a(&session);
        let report = engine.choose(&mut session, &mut store, &choice).unwrap();
        assert_eq!(usize::from(session.score()), session.correct_count());

        if i + 1 < ROUND_COUNT {
            assert!(!report.completed);
            assert_eq!(store.write_count(), 0, "round {i} must not write the cookie");
            assert_eq!(engine.advance(&mut session), Phase::RoundActive(i + 1));
        } else {
            assert!(report.completed);
            assert_eq!(store.write_count(), 1);
        }
    }

    assert_eq!(session.status(), Status::Completed);
    assert!(engine.present_round(&session).await.unwrap().is_none());

    let stored = store.get(JULY_FOURTH_KEY).unwrap();
    let record: DailyRecord = stored.parse().unwrap();
    assert_eq!(Some(record), session.record());
    assert!(record.is_consistent());

    // Expires at the next Central midnight (05:00 UTC during CDT).
    let expires = store.cookie(JULY_FOURTH_KEY).unwrap().expires.unwrap();
    assert_eq!(expires.to_rfc3339(), "2025-07-05T05:00:00+00:00");
}

#[tokio::test]
async fn test_reload_after_completion_replays_same_result() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let mut store = MemoryCookieStore::new();

    let mut session = expect_play(engine.start(ModeKind::Daily, &store).await.unwrap());
    while session.status() != Status::Completed {
        let choice = pick_a(&session);
        engine.choose(&mut session, &mut store, &choice).unwrap();
        engine.advance(&mut session);
    }
    let expected = ResultCodec::render(&session.record().unwrap());

    let Entry::Replay { rendered, .. } = engine.start(ModeKind::Daily, &store).await.unwrap() else {
        panic!("expected replay after completion");
    };
    assert_eq!(rendered, expected);
}

#[tokio::test]
async fn test_duplicate_choice_is_ignored() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let mut store = MemoryCookieStore::new();
    let mut session = expect_play(engine.start(ModeKind::Daily, &store).await.unwrap());

    let choice = pick_a(&session);
    engine.choose(&mut session, &mut store, &choice).unwrap();
    let snapshot = session.clone();

    let err = engine.choose(&mut session, &mut store, &choice).unwrap_err();
    assert!(err.is_silent());
    assert_eq!(session, snapshot);
    assert_eq!(store.write_count(), 0);
}

// =============================================================================
// Determinism
// =============================================================================

#[tokio::test]
async fn test_same_day_same_rounds() {
    init_logging();
    let first = engine(ScriptedSource::new(records(50)));
    let second = engine(ScriptedSource::new(records(50)));
    let store = MemoryCookieStore::new();

    let a = expect_play(first.start(ModeKind::Daily, &store).await.unwrap());
    let b = expect_play(second.start(ModeKind::Daily, &store).await.unwrap());

    assert_eq!(a.rounds(), b.rounds());
    assert_eq!(a.mode().seed(), 20250704);
}

#[tokio::test]
async fn test_different_day_different_rounds() {
    init_logging();
    let today = engine(ScriptedSource::new(records(50)));
    let tomorrow = DailyEngine::new(
        ScriptedSource::new(records(50)),
        FixedClock::at(july_fourth() + chrono::Duration::days(1)),
        GameConfig::default(),
    );
    let store = MemoryCookieStore::new();

    let a = expect_play(today.start(ModeKind::Daily, &store).await.unwrap());
    let b = expect_play(tomorrow.start(ModeKind::Daily, &store).await.unwrap());

    assert_ne!(a.rounds(), b.rounds());
}

// =============================================================================
// Content Failures
// =============================================================================

#[tokio::test]
async fn test_single_candidate_is_insufficient() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(1)));
    let store = MemoryCookieStore::new();

    let err = engine.start(ModeKind::Daily, &store).await.unwrap_err();
    assert_eq!(err, EngineError::InsufficientContent { eligible: 1 });
}

#[tokio::test]
async fn test_duplicate_candidates_count_once() {
    init_logging();
    let mut dupes = records(1);
    dupes.push(dupes[0].clone());
    let engine = engine(ScriptedSource::new(dupes));

    let err = engine.start(ModeKind::Daily, &MemoryCookieStore::new()).await.unwrap_err();
    assert_eq!(err, EngineError::InsufficientContent { eligible: 1 });
}

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_times_out() {
    init_logging();
    let engine = DailyEngine::new(
        ScriptedSource::new(records(30)).slow(Duration::from_secs(60)),
        FixedClock::at(july_fourth()),
        GameConfig::default().with_fetch_timeout(Duration::from_millis(200)),
    );

    let err = engine.start(ModeKind::Daily, &MemoryCookieStore::new()).await.unwrap_err();
    assert!(matches!(err, EngineError::ContentUnavailable { .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_asset_failure_leaves_round_active() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)).broken_assets());
    let session = expect_play(engine.start(ModeKind::Daily, &MemoryCookieStore::new()).await.unwrap());

    let err = engine.present_round(&session).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(session.phase(), Phase::RoundActive(0));
}

#[tokio::test]
async fn test_present_round_resolves_assets() {
    init_logging();
    let engine = engine(ScriptedSource::new(records(30)));
    let session = expect_play(engine.start(ModeKind::Daily, &MemoryCookieStore::new()).await.unwrap());

    let view = engine.present_round(&session).await.unwrap().unwrap();
    let round = session.active_round().unwrap();

    assert_eq!(view.card_a.id, round.card_a.id);
    assert_eq!(view.card_b.id, round.card_b.id);
    assert!(view.card_a.asset.as_str().ends_with("?resolved"));
    assert_eq!(view.attribute.as_str(), "inclusion");
}

fn engine_fetches(engine: &DailyEngine<ScriptedSource, FixedClock>) -> usize {
    engine.source().fetches.get()
}

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use asmrandle::{AssetRef, CandidateRecord, Card, ContentSource, EngineError, Result};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// then "warn".
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// 18:00 UTC on 2025-07-04, i.e. 13:00 CDT on the same date.
pub fn july_fourth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 4, 18, 0, 0).unwrap()
}

pub const JULY_FOURTH_KEY: &str = "20250704";

/// `n` candidates with distinct values.
pub fn records(n: usize) -> Vec<CandidateRecord> {
    (0..n)
        .map(|i| {
            CandidateRecord::new(
                format!("Card Number {i}"),
                format!("https://cards.example/{i}.jpg"),
                (i as i64 * 7919) % 1000,
            )
        })
        .collect()
}

/// Content source that counts fetches and can be made slow or broken.
#[derive(Default)]
pub struct ScriptedSource {
    pub records: Vec<CandidateRecord>,
    pub fetch_delay: Option<Duration>,
    pub fail_assets: bool,
    pub fetches: Cell<usize>,
}

impl ScriptedSource {
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.fetch_delay = Some(delay);
        self
    }

    pub fn broken_assets(mut self) -> Self {
        self.fail_assets = true;
        self
    }
}

#[async_trait(?Send)]
impl ContentSource for ScriptedSource {
    async fn fetch_candidate_set(&self) -> Result<Vec<CandidateRecord>> {
        self.fetches.set(self.fetches.get() + 1);
        if let Some(delay) = self.fetch_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.records.clone())
    }

    async fn resolve_asset(&self, card: &Card) -> Result<AssetRef> {
        if self.fail_assets {
            return Err(EngineError::ContentUnavailable {
                reason: format!("no image for {}", card.id),
            });
        }
        Ok(AssetRef::new(format!("{}?resolved", card.asset.as_str())))
    }
}

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::cards::{AssetRef, CandidateRecord, Card};
use crate::core::{EngineError, Result};

/// Provider of candidate cards and their display assets.
///
/// Futures are not required to be `Send`: the engine runs on a single
/// event loop.
#[async_trait(?Send)]
pub trait ContentSource {
    /// Fetch the full candidate set.
    async fn fetch_candidate_set(&self) -> Result<Vec<CandidateRecord>>;

    /// Resolve the display asset of a card before its round is shown.
    ///
    /// Defaults to the reference the card was drawn with.
    async fn resolve_asset(&self, card: &Card) -> Result<AssetRef> {
        Ok(card.asset.clone())
    }
}

/// Run `fut` under a timeout, mapping expiry to `ContentUnavailable`.
///
/// Must run inside a Tokio runtime with the time driver enabled.
pub async fn with_timeout<T, F>(what: &str, limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            warn!(what, timeout_ms = limit.as_millis() as u64, "content request timed out");
            Err(EngineError::unavailable(format!(
                "{what} timed out after {}ms",
                limit.as_millis()
            )))
        }
    }
}

/// In-memory content source, e.g. a bundled card list.
#[derive(Clone, Debug, Default)]
pub struct StaticContentSource {
    records: Vec<CandidateRecord>,
}

impl StaticContentSource {
    #[must_use]
    pub fn new(records: Vec<CandidateRecord>) -> Self {
        Self { records }
    }

    /// Load a JSON array of candidate records.
    ///
    /// A malformed list is a `Config` error and is not retryable.
    pub fn from_json(json: &str) -> Result<Self> {
        let records = serde_json::from_str(json).map_err(|e| EngineError::Config {
            message: format!("invalid candidate list: {e}"),
        })?;
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }
}

#[async_trait(?Send)]
impl ContentSource for StaticContentSource {
    async fn fetch_candidate_set(&self) -> Result<Vec<CandidateRecord>> {
        Ok(self.records.clone())
    }
}

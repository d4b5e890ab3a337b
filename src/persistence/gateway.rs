//! Daily-mode cookie protocol.
//!
//! On Daily entry the cookie named by today's date key is consulted: a
//! decodable value short-circuits straight to the stored result, anything
//! else starts a fresh session. On completion of a Daily session the
//! encoded record is written under the same key. Practice sessions are
//! never written.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::codec::{DailyRecord, ResultCodec};
use super::cookies::CookieStore;
use crate::core::{DateKey, Mode};
use crate::rules::GameSession;

/// Decision taken at Daily-mode entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DailyEntry {
    /// Today's result is already stored; show it without playing.
    Replay(DailyRecord),
    /// No usable record; play a fresh session.
    Fresh,
}

/// Reads and writes day-keyed daily records.
#[derive(Clone, Copy, Debug)]
pub struct PersistenceGateway {
    retention_days: u32,
}

impl Default for PersistenceGateway {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PersistenceGateway {
    /// `retention_days` is clamped to at least 1 so a record never expires
    /// before the end of its own day.
    #[must_use]
    pub fn new(retention_days: u32) -> Self {
        Self {
            retention_days: retention_days.max(1),
        }
    }

    /// Look up today's record.
    ///
    /// A corrupt cookie is logged and treated as absent.
    pub fn enter_daily(&self, store: &impl CookieStore, date: DateKey) -> DailyEntry {
        let name = date.to_string();
        let Some(value) = store.get(&name) else {
            debug!(date = %name, "no daily record");
            return DailyEntry::Fresh;
        };

        match ResultCodec::decode(&value) {
            Ok(record) => {
                info!(date = %name, score = record.score, "replaying stored daily result");
                DailyEntry::Replay(record)
            }
            Err(err) => {
                warn!(date = %name, error = %err, "discarding corrupt daily record");
                DailyEntry::Fresh
            }
        }
    }

    /// Expiry for a record written on `date`.
    #[must_use]
    pub fn expiry_for(&self, date: DateKey) -> DateTime<Utc> {
        date.start_of_day_after(self.retention_days)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Persist a completed Daily session.
    ///
    /// Returns the written record, or `None` when nothing was written
    /// (Practice mode or a session still in progress).
    pub fn record_completion(
        &self,
        store: &mut impl CookieStore,
        session: &GameSession,
    ) -> Option<DailyRecord> {
        let Mode::Daily { date, .. } = session.mode() else {
            return None;
        };
        let record = session.record()?;

        let name = date.to_string();
        let expires = self.expiry_for(date);
        store.set(&name, &ResultCodec::encode(&record), expires);
        info!(date = %name, score = record.score, %expires, "daily result stored");

        Some(record)
    }
}

//! Seed derivation: date keys, modes and clocks.
//!
//! Daily games are keyed by the calendar date in Central Time
//! (America/Chicago, DST-aware). The key doubles as the cookie name and,
//! read as the integer `YYYYMMDD`, as the RNG seed. Practice games get a
//! seed with no reproducibility guarantee.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::America::Chicago;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{EngineError, Result};

/// A Central-Time calendar date.
///
/// Displays as the zero-padded `YYYYMMDD` form used for cookie names.
///
/// ```
/// use asmrandle::core::DateKey;
///
/// let key: DateKey = "20250704".parse().unwrap();
/// assert_eq!(key.to_string(), "20250704");
/// assert_eq!(key.seed(), 20250704);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wrap a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The Central-Time calendar date of an instant.
    #[must_use]
    pub fn from_instant(now: DateTime<Utc>) -> Self {
        Self(now.with_timezone(&Chicago).date_naive())
    }

    /// The underlying calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The date read as the integer `YYYYMMDD`.
    #[must_use]
    pub fn seed(self) -> u64 {
        let year = u64::from(self.0.year().unsigned_abs());
        year * 10_000 + u64::from(self.0.month()) * 100 + u64::from(self.0.day())
    }

    /// Start of the Central-Time day `days` after this one, as UTC.
    ///
    /// Returns `None` only if the date arithmetic overflows.
    #[must_use]
    pub fn start_of_day_after(self, days: u32) -> Option<DateTime<Utc>> {
        let target = self.0.checked_add_days(Days::new(u64::from(days)))?;
        let midnight = target.and_hms_opt(0, 0, 0)?;
        Chicago
            .from_local_datetime(&midnight)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EngineError::Config {
            message: format!("invalid date key {s:?}, expected YYYYMMDD"),
        };

        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[4..6].parse().map_err(|_| invalid())?;
        let day: u32 = s[6..8].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// The mode a player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    Daily,
    Practice,
}

/// The mode a session actually runs in, with its seed.
///
/// Persistence and the replay short-circuit depend only on this tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Deterministic for `date`; persisted on completion.
    Daily { date: DateKey, seed: u64 },
    /// Unlimited and never persisted.
    Practice { seed: u64 },
}

impl Mode {
    /// Daily mode for a date, seeded from the date key.
    #[must_use]
    pub fn daily(date: DateKey) -> Self {
        Mode::Daily {
            date,
            seed: date.seed(),
        }
    }

    /// Practice mode with an explicit seed.
    #[must_use]
    pub const fn practice(seed: u64) -> Self {
        Mode::Practice { seed }
    }

    #[must_use]
    pub const fn kind(&self) -> ModeKind {
        match self {
            Mode::Daily { .. } => ModeKind::Daily,
            Mode::Practice { .. } => ModeKind::Practice,
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        match self {
            Mode::Daily { seed, .. } | Mode::Practice { seed } => *seed,
        }
    }

    /// The date key, for Daily sessions.
    #[must_use]
    pub const fn date(&self) -> Option<DateKey> {
        match self {
            Mode::Daily { date, .. } => Some(*date),
            Mode::Practice { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_daily(&self) -> bool {
        matches!(self, Mode::Daily { .. })
    }
}

/// Source of the current instant.
///
/// `None` means the time source is unavailable.
pub trait Clock {
    fn now(&self) -> Option<DateTime<Utc>>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Option<DateTime<Utc>> {
        Some(Utc::now())
    }
}

/// A clock pinned to one instant (or to "unavailable").
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub Option<DateTime<Utc>>);

impl FixedClock {
    #[must_use]
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self(Some(now))
    }

    #[must_use]
    pub const fn unavailable() -> Self {
        Self(None)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Option<DateTime<Utc>> {
        self.0
    }
}

/// Turns the requested mode and the current instant into a seeded [`Mode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedDeriver;

impl SeedDeriver {
    /// Derive the session mode.
    ///
    /// Daily mode without a usable instant falls back to Practice defaults.
    #[must_use]
    pub fn derive(requested: ModeKind, now: Option<DateTime<Utc>>) -> Mode {
        match (requested, now) {
            (ModeKind::Daily, Some(now)) => Mode::daily(DateKey::from_instant(now)),
            (ModeKind::Daily, None) => {
                warn!("time source unavailable, falling back to practice mode");
                Mode::practice(Self::practice_seed(None))
            }
            (ModeKind::Practice, now) => Mode::practice(Self::practice_seed(now)),
        }
    }

    /// A non-reproducible seed: OS entropy mixed with the clock's nanoseconds.
    #[must_use]
    pub fn practice_seed(now: Option<DateTime<Utc>>) -> u64 {
        let nanos = now
            .and_then(|t| t.timestamp_nanos_opt())
            .map_or(0, |n| n as u64);
        rand::random::<u64>() ^ nanos
    }
}

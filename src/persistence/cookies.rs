//! Cookie store capability.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

/// Minimal cookie jar the engine reads and writes.
pub trait CookieStore {
    /// Value of the cookie `name`, if present.
    fn get(&self, name: &str) -> Option<String>;

    /// Store `value` under `name` until `expires`.
    fn set(&mut self, name: &str, value: &str, expires: DateTime<Utc>);
}

/// A stored cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredCookie {
    pub value: String,
    /// `None` for session cookies.
    pub expires: Option<DateTime<Utc>>,
}

/// In-memory cookie jar.
///
/// Counts writes so callers can check exactly when persistence happened.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieStore {
    cookies: FxHashMap<String, StoredCookie>,
    writes: usize,
}

impl MemoryCookieStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a session cookie (not counted as a write).
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(
            name.into(),
            StoredCookie {
                value: value.into(),
                expires: None,
            },
        );
        self
    }

    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&StoredCookie> {
        self.cookies.get(name)
    }

    /// Number of `set` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Drop cookies whose expiry is at or before `now`.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.cookies
            .retain(|_, cookie| cookie.expires.map_or(true, |expires| expires > now));
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|c| c.value.clone())
    }

    fn set(&mut self, name: &str, value: &str, expires: DateTime<Utc>) {
        self.writes += 1;
        self.cookies.insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                expires: Some(expires),
            },
        );
    }
}

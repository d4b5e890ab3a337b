//! # asmrandle
//!
//! Engine for a card-comparison game: ten rounds, two cards each, pick the
//! one with the higher value.
//!
//! ## Modes
//!
//! - **Daily**: content is derived from the Central-Time calendar date, and
//!   the finished result is stored in a cookie named `YYYYMMDD` so a reload
//!   shows the same result without replaying.
//! - **Practice**: unlimited, randomly seeded, never stored.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same date + same candidate set = same ten pairs.
//! 2. **Explicit state**: sessions and cookie jars are passed in, never global.
//! 3. **Injected capabilities**: content, cookies and time come from the
//!    embedding shell (`ContentSource`, `CookieStore`, `Clock`).
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, seeds and date keys, configuration
//! - `cards`: Identifiers, cards, candidate pools
//! - `content`: Content source capability
//! - `pool`: Seeded card-pool generation
//! - `rules`: Rounds and the session state machine
//! - `persistence`: Cookie wire codec and the daily gateway
//! - `engine`: Façade tying it all together

pub mod core;
pub mod cards;
pub mod content;
pub mod pool;
pub mod rules;
pub mod persistence;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EngineError, Result,
    GameRng, GameRngState,
    Clock, DateKey, FixedClock, Mode, ModeKind, SeedDeriver, SystemClock,
    GameConfig, ROUND_COUNT,
};

pub use crate::cards::{AssetRef, AttributeKey, CandidatePool, CandidateRecord, Card, CardId};

pub use crate::content::{ContentSource, StaticContentSource};

pub use crate::pool::CardPoolGenerator;

pub use crate::rules::{Choice, ChoiceReport, GameSession, Outcome, Phase, Round, Status};

pub use crate::persistence::{
    CookieStore, DailyEntry, DailyRecord, MemoryCookieStore, PersistenceGateway, ResultCodec,
};

pub use crate::engine::{CardView, DailyEngine, Entry, RoundView};

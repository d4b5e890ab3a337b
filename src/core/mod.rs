//! Core engine types: errors, RNG, seeds, configuration.
//!
//! These are the leaf building blocks; everything else in the crate is
//! built on top of them.

pub mod error;
pub mod rng;
pub mod seed;
pub mod config;

pub use error::{EngineError, Result};
pub use rng::{GameRng, GameRngState};
pub use seed::{Clock, DateKey, FixedClock, Mode, ModeKind, SeedDeriver, SystemClock};
pub use config::{GameConfig, ROUND_COUNT};

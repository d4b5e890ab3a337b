//! Round progression rules.
//!
//! A `GameSession` holds ten `Round`s and advances through them one
//! `Choice` at a time. The comparison rule lives on `Round::judge`.

pub mod round;
pub mod session;

pub use round::{Choice, Outcome, Round};
pub use session::{ChoiceReport, GameSession, Phase, Status};

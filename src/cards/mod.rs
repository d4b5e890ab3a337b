//! Card system: identifiers, cards, candidate pools.
//!
//! ## Key Types
//!
//! - `CandidateRecord`: Raw record from the content source
//! - `CardId`: Normalized identifier
//! - `Card`: Immutable card held by a round
//! - `CandidatePool`: Ordered, de-duplicated eligible cards
//! - `AttributeKey`: Name of the attribute rounds are judged on

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::AttributeKey;
pub use definition::{AssetRef, CandidateRecord, Card, CardId};
pub use registry::CandidatePool;

//! Content source capability.
//!
//! The engine never talks to the network itself. A UI shell injects a
//! [`ContentSource`] that produces candidate records and resolves card
//! assets; the engine bounds every call with the configured timeout.

mod source;

pub use source::{with_timeout, ContentSource, StaticContentSource};

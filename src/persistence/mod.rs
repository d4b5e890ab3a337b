//! Daily result persistence: wire codec, cookie store, gateway.
//!
//! ## Key Types
//!
//! - `DailyRecord`: Ten outcomes plus the stored score
//! - `ResultCodec`: `o1,...,o10|score` encoding and the emoji summary
//! - `CookieStore`: Injected cookie jar capability
//! - `PersistenceGateway`: Replay-or-fresh decision and completion write

pub mod codec;
pub mod cookies;
pub mod gateway;

pub use codec::{DailyRecord, ResultCodec};
pub use cookies::{CookieStore, MemoryCookieStore, StoredCookie};
pub use gateway::{DailyEntry, PersistenceGateway};

//! Digest retrieval.
//!
//! - [`date`] - Date key resolution in a fixed civil timezone, and the one-day fallback
//! - [`loader`] - Cache-busted HTTP retrieval of `<date>.json` and `<date>.md`
//!
//! # Example
//!
//! ```ignore
//! use daily_digest::feed::{resolve_date_key, FeedLoader};
//!
//! let key = resolve_date_key(None, Utc::now(), tz);
//! let loaded = loader.load_with_fallback(&key).await;
//! ```

mod date;
mod loader;

pub use date::{previous_date_key, resolve_date_key, today_key, DATE_KEY_FORMAT};
pub use loader::{DocumentOrigin, FeedLoader, FetchError, LoadedDocument, CACHE_BUST_PARAM};

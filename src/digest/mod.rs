//! Digest data model.
//!
//! - [`types`] - Feed document, items and the closed category set
//! - [`markdown`] - Markdown export of a whole document

mod markdown;
mod types;

pub use markdown::to_markdown;
pub use types::{Category, CategoryItems, FeedDocument, Item, UnknownCategory, UNKNOWN_SOURCE};

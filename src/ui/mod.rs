//! View layer.
//!
//! The render core is pure: a document plus UI state becomes a [`ViewModel`].
//! Hosts receive it through the [`ViewBinding`] trait, and user interaction comes
//! back as [`UiEvent`]s reduced into [`UiState`].
//!
//! # Module Structure
//!
//! - `classify` - Paper vs. news split
//! - `filter` - Search query matching
//! - `format` - Headline and publish date text
//! - `cards` - Card templates
//! - `mount` - View model construction
//! - `binding` - Element-id contract and view binding
//! - `state` - UI state, events and effects
//! - `platform` - Print, clipboard and notices
//! - `page` - Static page rendering

mod binding;
mod cards;
mod classify;
mod filter;
mod format;
mod mount;
mod page;
mod platform;
mod state;

pub use binding::{
    apply_view, count_id, empty_id, grid_id, section_id, MemoryView, ViewBinding, COPY_BUTTON_ID,
    PRINT_BUTTON_ID, SEARCH_INPUT_ID, TODAY_ID,
};
pub use cards::{cover_image, news_card, paper_card, render_card};
pub use classify::{is_paper, kind_of, partition, Kind, Partition, PAPER_MARKERS};
pub use filter::{matches_query, searchable_text};
pub use format::{format_headline, format_publish_date};
pub use mount::{mount, CategoryView, KindView, ViewModel};
pub use page::render_page;
pub use platform::{osc52_sequence, ClipboardError, Platform, TerminalPlatform, COPY_FAILED_NOTICE};
pub use state::{Effect, UiEvent, UiState};

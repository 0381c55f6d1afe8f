//! Daily research digest viewer.
//!
//! Loads the day's `data/<date>.json` (falling back one day), splits each
//! category into papers and news, and renders escaped card markup for a page
//! whose tabs, search box and buttons drive re-mounts.

pub mod app;
pub mod config;
pub mod digest;
pub mod feed;
pub mod ui;
pub mod util;

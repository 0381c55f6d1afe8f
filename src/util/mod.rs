//! Utility functions for common operations.
//!
//! - **Links**: host extraction and scheme filtering for untrusted feed URLs
//!
//! # Examples
//!
//! ```
//! use daily_digest::util::{link_host, safe_href};
//!
//! assert_eq!(link_host("https://example.com/x").as_deref(), Some("example.com"));
//! assert_eq!(safe_href("javascript:alert(1)"), "#");
//! ```

mod links;

pub use links::{link_host, safe_href, safe_image_src, INERT_HREF};

//! # stacfix
//!
//! Normalize STAC Item JSON files and serve a local catalog for browser testing.
//!
//! A STAC Item is fixed in place when its `geometry` was stored as a JSON
//! string or when any of its members holds an empty string.
//!
//! ## Example
//!
//! ```
//! use stacfix::{fix_document, Fix, FixOutcome};
//! use serde_json::json;
//!
//! let mut item = json!({
//!     "type": "Feature",
//!     "geometry": "{\"type\": \"Point\", \"coordinates\": [7.0, 46.0]}",
//!     "properties": {"title": ""}
//! });
//!
//! let outcome = fix_document(&mut item).unwrap();
//! assert_eq!(outcome, FixOutcome::Fixed(vec![Fix::Geometry, Fix::EmptyFields]));
//! assert_eq!(item["geometry"]["type"], "Point");
//! ```

pub mod batch;
pub mod cms_format;
pub mod cors;
pub mod document;
pub mod error;
pub mod fixer;
pub mod transformations;
pub mod types;

// Re-export commonly used items
pub use batch::{run_batch, BatchOptions, DEFAULT_ITEMS_DIR};
pub use error::{Result, StacError};
pub use fixer::{fix_document, fix_file, FixOptions};
pub use types::{BatchSummary, Fix, FixOutcome};

/// Transformation passes over STAC Item documents
///
/// - `geometry_parse`: Parse stringified geometry into a JSON value
/// - `empty_strings_removal`: Remove members whose value is the empty string
/// - `geometry_stringify`: Serialize object geometry into a string (CMS editor form)
pub mod empty_strings_removal;
pub mod geometry_parse;
pub mod geometry_stringify;

use serde_json::Value as JsonValue;

// Re-export commonly used functions
pub use empty_strings_removal::{remove_empty_strings, without_empty_strings};
pub use geometry_parse::parse_string_geometry;
pub use geometry_stringify::stringify_geometry;

/// Discriminator value of a STAC Item
pub const FEATURE_TYPE: &str = "Feature";

/// Check whether a document is a STAC Item (`"type": "Feature"`)
pub fn is_stac_item(doc: &JsonValue) -> bool {
    doc.get("type").and_then(JsonValue::as_str) == Some(FEATURE_TYPE)
}

use crate::error::{Result, StacError};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// Load a JSON document from disk
///
/// Object members keep the order they have in the file so an unmodified
/// document serializes back the same way.
///
/// # Arguments
/// * `path` - JSON file to read
///
/// # Returns
/// * `Ok(JsonValue)` - Parsed document
/// * `Err(StacError::Io)` - If the file cannot be read
/// * `Err(StacError::Parse)` - If the content is not well-formed JSON
pub fn load_document(path: &Path) -> Result<JsonValue> {
    let text = fs::read_to_string(path).map_err(|e| StacError::io(path, e))?;

    serde_json::from_str(&text).map_err(|source| StacError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a JSON document from text
///
/// # Examples
/// ```
/// use stacfix::document::parse_document;
///
/// let doc = parse_document(r#"{"type": "Feature"}"#).unwrap();
/// assert_eq!(doc["type"], "Feature");
/// ```
pub fn parse_document(text: &str) -> Result<JsonValue> {
    serde_json::from_str(text).map_err(StacError::ParseText)
}

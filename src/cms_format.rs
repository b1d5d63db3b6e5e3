//! Conversion between git storage and CMS editor forms of a STAC Item.
//!
//! The CMS map widget edits `geometry` as stringified GeoJSON while the
//! stored item keeps it as an object. `from_file` produces the editor form,
//! `to_file` produces the storage form.

use crate::document::{parse_document, to_pretty_json};
use crate::error::Result;
use crate::transformations::{is_stac_item, parse_string_geometry, stringify_geometry};
use serde_json::Value as JsonValue;

/// Parse stored file content into the editor form (geometry as a string)
pub fn from_file(text: &str) -> Result<JsonValue> {
    let mut doc = parse_document(text)?;
    stringify_geometry(&mut doc)?;
    Ok(doc)
}

/// Serialize an editor document into storage form (geometry as an object)
///
/// A geometry string that does not parse is kept as a string, so the editor
/// never loses what was typed; `stacfix` reports it on the next batch run.
pub fn to_file(doc: &JsonValue) -> Result<String> {
    let mut output = doc.clone();

    if is_stac_item(&output) {
        // Unparseable geometry stays as typed
        let _ = parse_string_geometry(&mut output);
    }

    to_pretty_json(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STORED: &str = r#"{
  "type": "Feature",
  "id": "tile-7",
  "geometry": {
    "type": "Point",
    "coordinates": [
      13.4,
      52.5
    ]
  },
  "properties": {
    "datetime": "2024-01-01T00:00:00Z"
  }
}
"#;

    #[test]
    fn test_from_file_stringifies_geometry() {
        let doc = from_file(STORED).unwrap();

        assert_eq!(
            doc["geometry"].as_str(),
            Some(r#"{"type":"Point","coordinates":[13.4,52.5]}"#)
        );
        assert_eq!(doc["id"].as_str(), Some("tile-7"));
    }

    #[test]
    fn test_round_trip_restores_stored_text() {
        let editor = from_file(STORED).unwrap();
        assert_eq!(to_file(&editor).unwrap(), STORED);
    }

    #[test]
    fn test_to_file_keeps_bad_geometry() {
        let doc = json!({"type": "Feature", "geometry": "{\"type\": "});

        let text = to_file(&doc).unwrap();

        assert!(text.contains(r#""geometry": "{\"type\": ""#));
    }

    #[test]
    fn test_non_feature_passes_through() {
        let doc = json!({"type": "Collection", "geometry": "{}"});

        let text = to_file(&doc).unwrap();

        assert_eq!(text, "{\n  \"type\": \"Collection\",\n  \"geometry\": \"{}\"\n}\n");
    }

    #[test]
    fn test_from_file_rejects_malformed() {
        assert!(from_file("{").is_err());
    }
}

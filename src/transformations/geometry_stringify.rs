use crate::error::{Result, StacError};
use serde_json::Value as JsonValue;

use super::is_stac_item;

/// Serialize an object `geometry` into a compact JSON string
///
/// This is the inverse of [`super::parse_string_geometry`], used to hand a
/// STAC Item to a CMS map widget that edits geometry as text. Documents that
/// are not STAC Items, and geometry that is absent, `null` or already a
/// string, are left alone.
///
/// # Returns
/// * `Ok(true)` - Geometry was an object and is now a string
/// * `Ok(false)` - Nothing to do
pub fn stringify_geometry(doc: &mut JsonValue) -> Result<bool> {
    if !is_stac_item(doc) {
        return Ok(false);
    }

    let Some(geometry) = doc.get_mut("geometry") else {
        return Ok(false);
    };

    if !geometry.is_object() {
        return Ok(false);
    }

    let text = serde_json::to_string(geometry).map_err(StacError::Serialize)?;
    *geometry = JsonValue::String(text);
    Ok(true)
}

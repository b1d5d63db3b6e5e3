use crate::error::{Result, StacError};
use serde_json::Value as JsonValue;

/// Parse a stringified `geometry` member into a JSON value
///
/// Some editors store GeoJSON geometry as a string, while STAC requires the
/// geometry to be an object. Only the top-level `geometry` member is looked at.
///
/// The empty string is left alone; it is an empty field, not a geometry.
///
/// # Arguments
/// * `doc` - The STAC Item to modify
///
/// # Returns
/// * `Ok(true)` - Geometry was a string and has been replaced by its parse
/// * `Ok(false)` - Nothing to do
/// * `Err(StacError::GeometryParse)` - Geometry string is not valid JSON; `doc` is unchanged
/// * `Err(StacError::GeometryNotObject)` - Geometry string decodes to a scalar or array; `doc` is unchanged
///
/// # Examples
/// ```
/// use stacfix::transformations::parse_string_geometry;
/// use serde_json::json;
///
/// let mut doc = json!({
///     "type": "Feature",
///     "geometry": "{\"type\":\"Point\",\"coordinates\":[1.0,2.0]}"
/// });
/// assert!(parse_string_geometry(&mut doc).unwrap());
/// assert_eq!(doc["geometry"]["type"], "Point");
/// ```
pub fn parse_string_geometry(doc: &mut JsonValue) -> Result<bool> {
    let Some(geometry) = doc.get_mut("geometry") else {
        return Ok(false);
    };

    let parsed = match geometry {
        JsonValue::String(text) if !text.is_empty() => {
            serde_json::from_str::<JsonValue>(text).map_err(StacError::GeometryParse)?
        }
        _ => return Ok(false),
    };

    // GeoJSON geometry is an object; STAC allows null
    if !(parsed.is_object() || parsed.is_null()) {
        return Err(StacError::GeometryNotObject);
    }

    *geometry = parsed;
    Ok(true)
}

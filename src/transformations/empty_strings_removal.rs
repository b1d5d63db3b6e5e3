use serde_json::Value as JsonValue;

/// Remove members whose value is the empty string from the JSON tree
///
/// Recursively traverses the JSON tree. In every object, entries whose value is
/// exactly `""` are dropped. Arrays are traversed but never lose elements, so
/// `[{"a": ""}]` becomes `[{}]`.
///
/// Only the empty string counts as empty: `null`, `0`, `false`, `[]` and `{}`
/// are kept.
///
/// # Arguments
/// * `tree` - The JSON tree to modify (usually the document root)
///
/// # Returns
/// * `true` - At least one entry was removed, at any depth
/// * `false` - The tree is unchanged
///
/// # Examples
/// ```
/// use stacfix::transformations::remove_empty_strings;
/// use serde_json::json;
///
/// let mut tree = json!({"a": "", "b": {"c": "", "d": "keep"}, "e": [{"f": ""}]});
/// assert!(remove_empty_strings(&mut tree));
/// assert_eq!(tree, json!({"b": {"d": "keep"}, "e": [{}]}));
/// ```
pub fn remove_empty_strings(tree: &mut JsonValue) -> bool {
    transform_recursive(tree)
}

/// Pure form of [`remove_empty_strings`]: return a cleaned copy
pub fn without_empty_strings(tree: &JsonValue) -> JsonValue {
    let mut cleaned = tree.clone();
    remove_empty_strings(&mut cleaned);
    cleaned
}

fn transform_recursive(value: &mut JsonValue) -> bool {
    match value {
        JsonValue::Object(map) => {
            let before = map.len();
            map.retain(|_, v| !is_empty_string(v));
            let mut removed = map.len() != before;

            for val in map.values_mut() {
                removed |= transform_recursive(val);
            }
            removed
        }
        JsonValue::Array(arr) => {
            let mut removed = false;
            for val in arr.iter_mut() {
                removed |= transform_recursive(val);
            }
            removed
        }
        JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Bool(_) | JsonValue::Null => {
            false
        }
    }
}

fn is_empty_string(value: &JsonValue) -> bool {
    matches!(value, JsonValue::String(s) if s.is_empty())
}

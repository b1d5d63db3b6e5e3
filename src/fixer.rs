use crate::document::{load_document, save_document};
use crate::error::{Result, StacError};
use crate::transformations::{is_stac_item, parse_string_geometry, remove_empty_strings};
use crate::types::{Fix, FixOutcome};
use serde_json::Value as JsonValue;
use std::path::Path;

/// Options for fixing files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Report what would change without writing anything
    pub dry_run: bool,
}

/// Apply every STAC Item fix to an in-memory document
///
/// Fixes run on a working copy that replaces `doc` only once every step has
/// succeeded, so an error leaves `doc` exactly as it was.
///
/// # Returns
/// * `Ok(FixOutcome::Fixed(fixes))` - `doc` was changed
/// * `Ok(FixOutcome::Unchanged)` - `doc` was already valid
/// * `Ok(FixOutcome::Skipped(reason))` - `doc` is not a STAC Item
/// * `Err(StacError)` - A fix failed, `doc` is untouched
pub fn fix_document(doc: &mut JsonValue) -> Result<FixOutcome> {
    if !is_stac_item(doc) {
        return Ok(FixOutcome::Skipped(StacError::NotAStacItem.to_string()));
    }

    let mut working = doc.clone();
    let mut fixes = Vec::new();

    if parse_string_geometry(&mut working)? {
        fixes.push(Fix::Geometry);
    }

    if remove_empty_strings(&mut working) {
        fixes.push(Fix::EmptyFields);
    }

    if fixes.is_empty() {
        return Ok(FixOutcome::Unchanged);
    }

    *doc = working;
    Ok(FixOutcome::Fixed(fixes))
}

/// Load, fix and (when modified) rewrite one STAC Item file
///
/// The file is rewritten only when at least one fix applied and `dry_run` is
/// off. Any error leaves the file byte-identical.
pub fn fix_file(path: &Path, options: FixOptions) -> Result<FixOutcome> {
    let mut doc = load_document(path)?;
    let outcome = fix_document(&mut doc)?;

    if outcome.is_modified() && !options.dry_run {
        save_document(path, &doc)?;
    }

    Ok(outcome)
}

use crate::error::{Result, StacError};
use serde_json::Value as JsonValue;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Serialize a document with 2-space indentation and one trailing newline
///
/// Non-ASCII characters are written literally, not escaped.
pub fn to_pretty_json(value: &JsonValue) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(StacError::Serialize)?;
    text.push('\n');
    Ok(text)
}

/// Replace a JSON file on disk with the serialized document
///
/// The document is written to a temporary sibling first and renamed over the
/// target, so the target is either fully replaced or left untouched. The
/// target keeps its permissions, and a symlinked target stays a symlink: the
/// file it points to is the one replaced.
pub fn save_document(path: &Path, value: &JsonValue) -> Result<()> {
    let text = to_pretty_json(value)?;
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let permissions = fs::metadata(&target).ok().map(|m| m.permissions());
    let tmp_path = tmp_write_path(&target);

    let write_result = (|| -> Result<()> {
        let file = File::create(&tmp_path).map_err(|e| StacError::io(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .map_err(|e| StacError::io(&tmp_path, e))?;
        let file = writer
            .into_inner()
            .map_err(|e| StacError::io(&tmp_path, e.into_error()))?;
        file.sync_all().map_err(|e| StacError::io(&tmp_path, e))?;
        if let Some(permissions) = permissions {
            fs::set_permissions(&tmp_path, permissions).map_err(|e| StacError::io(&tmp_path, e))?;
        }
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, &target).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StacError::io(path, e)
    })
}

/// Temporary path next to the target; never ends in `.json`
fn tmp_write_path(path: &Path) -> PathBuf {
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}", std::process::id()));
    PathBuf::from(tmp)
}

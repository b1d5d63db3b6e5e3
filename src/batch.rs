use crate::error::{Result, StacError};
use crate::fixer::{fix_file, FixOptions};
use crate::types::{describe_fixes, BatchSummary, FixOutcome};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default directory holding STAC Item files, relative to the working directory
pub const DEFAULT_ITEMS_DIR: &str = "items";

/// Options for one batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub fix: FixOptions,
    /// Print per-file paths and counts to the error stream
    pub verbose: bool,
}

/// List the `*.json` files directly inside `dir`, sorted by path
pub fn collect_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut json_files = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| StacError::io(dir, e))? {
        let entry = entry.map_err(|e| StacError::io(dir, e))?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
            json_files.push(path);
        }
    }

    json_files.sort();
    Ok(json_files)
}

/// Fix every STAC Item in `dir`, reporting as it goes
///
/// Status lines go to `out`, per-file errors to `err`. A failing file is
/// reported and the batch moves on to the next one.
///
/// # Returns
/// * `Ok(BatchSummary)` - Counts for the run; see [`BatchSummary::exit_code`]
/// * `Err(StacError::DirectoryMissing)` - `dir` is not an existing directory; nothing was touched
pub fn run_batch(
    dir: &Path,
    options: BatchOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<BatchSummary> {
    if !dir.is_dir() {
        return Err(StacError::DirectoryMissing(dir.to_path_buf()));
    }

    let json_files = collect_json_files(dir)?;
    let mut summary = BatchSummary::default();

    if json_files.is_empty() {
        writeln!(out, "ℹ️  No JSON files found in {}", dir.display())?;
        return Ok(summary);
    }

    writeln!(out, "🔍 Processing {} STAC Item(s)...\n", json_files.len())?;
    if options.fix.dry_run {
        writeln!(out, "(dry run: no files will be written)\n")?;
    }

    for path in &json_files {
        let name = display_name(path);

        if options.verbose {
            writeln!(err, "Checking: {}", path.display())?;
        }

        summary.processed += 1;
        match fix_file(path, options.fix) {
            Ok(FixOutcome::Fixed(fixes)) => {
                summary.modified += 1;
                writeln!(out, "✅ Fixed {name}: {}", describe_fixes(&fixes))?;
            }
            Ok(FixOutcome::Unchanged) => {
                summary.unchanged += 1;
                writeln!(out, "✓  {name}: Already valid")?;
            }
            Ok(FixOutcome::Skipped(reason)) => {
                summary.skipped += 1;
                writeln!(out, "⚠️  Skipping {name}: {reason}")?;
            }
            Err(error) => {
                summary.errors += 1;
                writeln!(err, "❌ Error processing {name}: {error}")?;
            }
        }
    }

    writeln!(out, "\n📊 Summary: {} file(s) modified", summary.modified)?;

    if options.verbose {
        writeln!(
            err,
            "Processed {} file(s): {} unchanged, {} skipped, {} error(s)",
            summary.processed, summary.unchanged, summary.skipped, summary.errors
        )?;
    }

    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(dir: &Path, options: BatchOptions) -> (Result<BatchSummary>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run_batch(dir, options, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_collect_sorted_json_only() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.json", "a.json", "b.txt", "B.json"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = collect_json_files(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| display_name(p)).collect();

        assert_eq!(names, vec!["B.json", "a.json", "c.json"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("items");

        let (result, out, _) = run(&missing, BatchOptions::default());

        assert!(matches!(result, Err(StacError::DirectoryMissing(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_file_instead_of_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("items");
        fs::write(&file, "").unwrap();

        let (result, _, _) = run(&file, BatchOptions::default());

        assert!(matches!(result, Err(StacError::DirectoryMissing(_))));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();

        let (result, out, _) = run(dir.path(), BatchOptions::default());
        let summary = result.unwrap();

        assert_eq!(summary, BatchSummary::default());
        assert_eq!(summary.exit_code(), 0);
        assert!(out.contains("No JSON files found"));
    }

    #[test]
    fn test_mixed_batch() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a-geometry.json"),
            r#"{"type": "Feature", "geometry": "{\"type\": \"Point\", \"coordinates\": [1, 2]}"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("b-empty.json"),
            r#"{"type": "Feature", "properties": {"title": ""}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("c-valid.json"), r#"{"type": "Feature", "id": "c"}"#).unwrap();
        fs::write(dir.path().join("d-catalog.json"), r#"{"type": "Catalog"}"#).unwrap();
        fs::write(dir.path().join("e-broken.json"), r#"{"type": "#).unwrap();

        let (result, out, err) = run(dir.path(), BatchOptions::default());
        let summary = result.unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                processed: 5,
                modified: 2,
                unchanged: 1,
                skipped: 1,
                errors: 1,
            }
        );
        assert_eq!(summary.exit_code(), 2);

        let lines: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "🔍 Processing 5 STAC Item(s)...");
        assert_eq!(lines[1], "✅ Fixed a-geometry.json: geometry");
        assert_eq!(lines[2], "✅ Fixed b-empty.json: empty fields");
        assert_eq!(lines[3], "✓  c-valid.json: Already valid");
        assert_eq!(
            lines[4],
            "⚠️  Skipping d-catalog.json: Not a STAC Item (type != 'Feature')"
        );
        assert_eq!(lines[5], "📊 Summary: 2 file(s) modified");
        assert!(err.contains("❌ Error processing e-broken.json"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("item.json");
        let content = r#"{"type": "Feature", "title": ""}"#;
        fs::write(&path, content).unwrap();

        let options = BatchOptions {
            fix: FixOptions { dry_run: true },
            verbose: false,
        };
        let (result, out, _) = run(dir.path(), options);

        assert_eq!(result.unwrap().exit_code(), 2);
        assert!(out.contains("dry run"));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_verbose_goes_to_error_stream() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("item.json"), r#"{"type": "Feature"}"#).unwrap();

        let options = BatchOptions {
            verbose: true,
            ..Default::default()
        };
        let (result, out, err) = run(dir.path(), options);

        assert_eq!(result.unwrap().unchanged, 1);
        assert!(err.contains("Checking: "));
        assert!(err.contains("Processed 1 file(s)"));
        assert!(!out.contains("Checking: "));
    }
}

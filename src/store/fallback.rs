//! Local append-only CSV fallback, one file per collection.

use crate::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Serializes appends process-wide so two submissions can never interleave
/// bytes inside the same file.
static APPEND_LOCK: Mutex<()> = Mutex::new(());

/// File name for a collection: trimmed, lowercased, whitespace runs and
/// path separators folded into `_` ("Crew Interest" -> "crew_interest.csv").
pub fn collection_file_name(collection: &str) -> String {
    let mut stem = String::with_capacity(collection.len());
    let mut gap = false;
    for c in collection.trim().to_lowercase().chars() {
        if c.is_whitespace() || c == '/' || c == '\\' {
            gap = true;
        } else {
            if gap && !stem.is_empty() {
                stem.push('_');
            }
            gap = false;
            stem.push(c);
        }
    }
    if stem.is_empty() {
        stem.push_str("collection");
    }
    format!("{stem}.csv")
}

/// Append `row` to the collection file under `dir`, creating the directory
/// and the file as needed. A freshly created file gets `header` as its
/// first record. Returns the path written to.
pub fn append_row(
    dir: &Path,
    collection: &str,
    row: &[String],
    header: &[&str],
) -> AppResult<PathBuf> {
    let _guard = APPEND_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    // 1. Make sure the fallback directory exists
    fs::create_dir_all(dir)?;

    // 2. Header goes in only when the file is born here
    let path = dir.join(collection_file_name(collection));
    let is_new = !path.exists();

    // 3. Append, never truncate
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut wtr = csv::Writer::from_writer(file);
    if is_new {
        wtr.write_record(header)?;
    }
    wtr.write_record(row)?;
    wtr.flush()?;

    Ok(path)
}

//! CSV file I/O with atomic rewrites
//!
//! Provides file operations that won't leave a half-written ledger behind
//! when a rewrite fails.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::ContasError;

/// Read every row of a CSV file, returning an empty list if the file doesn't exist
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, ContasError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ContasError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        let row: T = row.map_err(|e| {
            ContasError::Storage(format!(
                "Failed to parse {} at row {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Append one row, writing the header first if the file is empty or absent
pub fn append_csv<T, P>(path: P, header: &[&str], row: &T) -> Result<(), ContasError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ContasError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let is_empty = file
        .metadata()
        .map_err(|e| ContasError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?
        .len()
        == 0;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    if is_empty {
        writer.write_record(header)?;
    }
    writer.serialize(row)?;
    writer
        .flush()
        .map_err(|e| ContasError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Rewrite a CSV file atomically (write to temp, then rename)
///
/// The header is written only when `header` is `Some`; with `None` and no
/// rows the target ends up as an empty file.
pub fn write_csv_atomic<T, P>(
    path: P,
    header: Option<&[&str]>,
    rows: &[T],
) -> Result<(), ContasError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ContasError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    if let Some(header) = header {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| ContasError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| ContasError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ContasError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), rows = rows.len(), "rewrote ledger file");

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), ContasError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                ContasError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    #[serde(default)]
    struct Row {
        name: String,
        value: String,
    }

    const HEADER: &[&str] = &["name", "value"];

    fn row(name: &str, value: &str) -> Row {
        Row {
            name: name.into(),
            value: value.into(),
        }
    }

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Vec<Row> = read_csv(temp_dir.path().join("missing.csv")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_append_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        append_csv(&path, HEADER, &row("a", "1")).unwrap();
        append_csv(&path, HEADER, &row("b", "2")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,value\na,1\nb,2\n");

        let rows: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(rows, vec![row("a", "1"), row("b", "2")]);
    }

    #[test]
    fn test_append_to_empty_file_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "").unwrap();

        append_csv(&path, HEADER, &row("a", "1")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\na,1\n");
    }

    #[test]
    fn test_embedded_delimiters_are_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        append_csv(&path, HEADER, &row("luz, água", "1")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"luz, água\""));

        let rows: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(rows[0].name, "luz, água");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        write_csv_atomic(&path, Some(HEADER), &[row("a", "1")]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("rows.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "name,value\nold,0\n").unwrap();

        write_csv_atomic(&path, Some(HEADER), &[row("new", "9")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\nnew,9\n");
    }

    #[test]
    fn test_atomic_write_without_header_leaves_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "name,value\nold,0\n").unwrap();

        write_csv_atomic::<Row, _>(&path, None, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        let rows: Vec<Row> = read_csv(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_columns_read_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "name\nonly\n").unwrap();

        let rows: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(rows, vec![row("only", "")]);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("rows.csv");

        write_csv_atomic(&path, Some(HEADER), &[row("a", "1")]).unwrap();
        assert!(path.exists());
    }
}

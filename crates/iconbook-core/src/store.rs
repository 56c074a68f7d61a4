use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{IconbookError, Result};
use crate::models::{IconCatalog, TagMap};

/// Curated tag overrides; `None` when the file does not exist yet.
pub fn read_tag_map(path: &Path) -> Result<Option<TagMap>> {
    read_optional_json(path, "tag file")
}

pub fn write_tag_map(path: &Path, tags: &TagMap) -> Result<()> {
    write_json_atomic(path, tags)
}

/// Curated name to integer codepoint mapping, unformatted.
pub fn read_raw_codepoint_map(path: &Path) -> Result<Option<BTreeMap<String, u32>>> {
    read_optional_json(path, "unicode mapping")
}

pub fn read_catalog(path: &Path) -> Result<IconCatalog> {
    read_optional_json(path, "icon catalog")?
        .ok_or_else(|| IconbookError::NotFound(path.to_path_buf()))
}

pub fn write_catalog(path: &Path, catalog: &IconCatalog) -> Result<()> {
    write_json_atomic(path, catalog)
}

fn read_optional_json<T: DeserializeOwned>(path: &Path, what: &'static str) -> Result<Option<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| IconbookError::MalformedDocument {
            what,
            path: path.to_path_buf(),
            source,
        })
}

/// Pretty JSON with a trailing newline, swapped in through a sibling temp file.
fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    write_atomic(path, &content)
}

/// Writes to a temp file in the target's directory, then renames it over the target.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let file_name = path.file_name().and_then(|x| x.to_str()).ok_or_else(|| {
        IconbookError::Validation(format!("invalid target filename: {}", path.display()))
    })?;
    let tmp_path = parent.join(format!(
        ".{file_name}.iconbook.tmp.{}",
        uuid::Uuid::new_v4().simple()
    ));

    {
        let mut tmp = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(&tmp_path)?;
        tmp.write_all(content.as_bytes())?;
        tmp.sync_all()?;
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(IconbookError::from(err));
    }

    if let Ok(dir) = fs::File::open(parent) {
        let _ = dir.sync_all();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use super::*;
    use crate::models::IconRecord;

    #[test]
    fn missing_tag_file_reads_as_none() {
        let temp = tempdir().expect("tempdir");
        let tags = read_tag_map(&temp.path().join("tags.json")).expect("read");
        assert!(tags.is_none());
    }

    #[test]
    fn tag_file_is_sorted_pretty_and_newline_terminated() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("source").join("tags.json");
        let mut tags = TagMap::new();
        tags.insert("zoom".to_string(), vec!["magnify".to_string()]);
        tags.insert("alarm".to_string(), vec!["bell".to_string()]);

        write_tag_map(&path, &tags).expect("write");
        let raw = fs::read_to_string(&path).expect("read raw");
        assert_eq!(
            raw,
            "{\n  \"alarm\": [\n    \"bell\"\n  ],\n  \"zoom\": [\n    \"magnify\"\n  ]\n}\n"
        );
        assert_eq!(read_tag_map(&path).expect("read"), Some(tags));
    }

    #[test]
    fn malformed_tag_file_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("tags.json");
        fs::write(&path, "{\"home\": \"house\"}").expect("write");
        let err = read_tag_map(&path).expect_err("must fail");
        assert!(matches!(err, IconbookError::MalformedDocument { .. }));
    }

    #[test]
    fn atomic_write_replaces_and_leaves_no_temp_files() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("out.json");
        write_atomic(&path, "v1").expect("write v1");
        write_atomic(&path, "v2").expect("write v2");
        assert_eq!(fs::read_to_string(&path).expect("read"), "v2");

        let leftovers = fs::read_dir(temp.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().contains(".iconbook.tmp."))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn catalog_reads_back_what_was_written() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("generated").join("icons.json");
        let catalog = IconCatalog {
            icons: vec![IconRecord::new("home", vec!["house".to_string()]).with_unicode("E001")],
            generated_at: Utc
                .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
                .single()
                .expect("valid timestamp"),
        };
        write_catalog(&path, &catalog).expect("write");

        let raw = fs::read_to_string(&path).expect("read raw");
        assert!(raw.contains("\"generatedAt\": \"2026-01-02T03:04:05Z\""));
        assert_eq!(read_catalog(&path).expect("read"), catalog);
    }

    #[test]
    fn missing_catalog_is_not_found() {
        let temp = tempdir().expect("tempdir");
        let err = read_catalog(&temp.path().join("icons.json")).expect_err("must fail");
        assert_eq!(err.code(), "NOT_FOUND");
    }
}

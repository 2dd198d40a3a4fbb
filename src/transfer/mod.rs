use chrono::{DateTime, Utc};
use fs_err as fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::Result;
use crate::model::BrandState;

pub fn to_pretty_json(state: &BrandState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parse an exported file's content. Missing fields take their defaults.
pub fn from_json(raw: &str) -> Result<BrandState> {
    Ok(serde_json::from_str(raw)?)
}

pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("logo-brief-{}.json", at.timestamp_millis())
}

/// Write the record as pretty JSON, through a temp file in the target
/// directory and a rename. Returns the bytes written.
pub fn export_to(state: &BrandState, path: &Path) -> Result<u64> {
    let json = to_pretty_json(state)?;
    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), bytes = json.len(), "exported state");
    Ok(json.len() as u64)
}

/// Export into `dir` under a timestamped name.
pub fn export_into_dir(state: &BrandState, dir: &Path, at: DateTime<Utc>) -> Result<(PathBuf, u64)> {
    let path = dir.join(export_file_name(at));
    let bytes = export_to(state, &path)?;
    Ok((path, bytes))
}

pub fn import_from(path: &Path) -> Result<BrandState> {
    let raw = fs::read_to_string(path)?;
    let state = from_json(&raw)?;
    info!(path = %path.display(), "imported state");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PromptGenError;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample() -> BrandState {
        let mut s = BrandState::starter();
        s.meta.name = "Mosaik".into();
        s.meta.slogan = "Teile, die passen".into();
        s.story.enabled = true;
        s.story.text = "Zwei Gründer, ein Küchentisch".into();
        s.colors.avoid = "kein Pink".into();
        s
    }

    #[test]
    fn export_then_import_is_identity() {
        let dir = TempDir::new().unwrap();
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let (path, bytes) = export_into_dir(&sample(), dir.path(), at).unwrap();

        assert_eq!(path.file_name().unwrap(), "logo-brief-1700000000123.json");
        assert_eq!(bytes, fs::metadata(&path).unwrap().len());
        assert_eq!(import_from(&path).unwrap(), sample());
    }

    #[test]
    fn export_is_pretty_printed() {
        let json = to_pretty_json(&sample()).unwrap();
        assert!(json.starts_with("{\n  \"meta\": {"));
    }

    #[test]
    fn corrupt_import_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(import_from(&path), Err(PromptGenError::Json(_))));
        assert!(matches!(import_from(&dir.path().join("absent.json")), Err(PromptGenError::Io(_))));
    }
}

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{PromptGenError, Result};

pub const APP_DIR: &str = "logo_promptgen";
pub const STORAGE_KEY: &str = "logo-promptgen-state-v2";
pub const STATE_DB: &str = "state.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub storage_key: String,
    pub debounce_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR),
            export_dir: PathBuf::from("."),
            storage_key: STORAGE_KEY.into(),
            debounce_ms: 450,
            log_level: "warn".into(),
        }
    }
}

impl Config {
    /// Read a TOML config file. Keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| PromptGenError::Config(format!("{}: {e}", path.display())))
    }

    /// Defaults, or the given file when one is passed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(STATE_DB)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "debounce_ms = 10\nstorage_key = \"custom\"").unwrap();

        let cfg = Config::from_file(f.path()).unwrap();
        assert_eq!(cfg.debounce_ms, 10);
        assert_eq!(cfg.storage_key, "custom");
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.debounce(), Duration::from_millis(10));
    }

    #[test]
    fn malformed_file_is_config_error() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "debounce_ms = \"soon\"").unwrap();

        let err = Config::from_file(f.path()).unwrap_err();
        assert!(matches!(err, PromptGenError::Config(_)));
    }

    #[test]
    fn db_lives_in_data_dir() {
        let cfg = Config { data_dir: PathBuf::from("/tmp/x"), ..Config::default() };
        assert_eq!(cfg.db_path(), PathBuf::from("/tmp/x/state.sqlite"));
    }
}

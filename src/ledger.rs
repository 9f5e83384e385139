//! Package ledger (`packages.json`).
//!
//! Maps `owner/repo` to the version and the vendored file names, so `list`
//! and `uninstall` work without touching the network.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const LEDGER_FILE: &str = "packages.json";

/// `packages.json`: installed packages keyed by `owner/repo`.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Ledger {
    #[serde(flatten)]
    pub packages: BTreeMap<String, PackageRecord>,
    #[serde(skip)]
    path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PackageRecord {
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl Ledger {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(LEDGER_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut ledger = if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Self::default()
        };
        ledger.path = path.to_path_buf();
        Ok(ledger)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&PackageRecord> {
        self.packages.get(key)
    }

    /// Add `key` as `latest` if new; an existing entry keeps its version and
    /// gets the new file list.
    pub fn record(&mut self, key: &str, mut files: Vec<String>) {
        files.sort();
        match self.packages.get_mut(key) {
            Some(existing) => existing.files = files,
            None => {
                self.packages.insert(
                    key.to_string(),
                    PackageRecord {
                        version: "latest".to_string(),
                        files,
                    },
                );
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<PackageRecord> {
        self.packages.remove(key)
    }
}

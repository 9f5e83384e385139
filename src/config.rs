//! Configuration (`cppvend.toml`) and credentials.
//!
//! ```toml
//! [vendor]
//! include_folder = "third_party"
//! exclude_keywords = ["test", "example"]
//! exclude_include_keywords = ["test"]
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "cppvend.toml";
pub const TOKEN_ENV: &str = "CPPVEND_TOKEN";
pub const SECRET_FILE: &str = "secret.txt";

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub vendor: VendorConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VendorConfig {
    pub include_folder: String,
    /// Case-insensitive substrings that veto a file by name.
    pub exclude_keywords: Vec<String>,
    /// Case-insensitive substrings that veto a file through its includes.
    pub exclude_include_keywords: Vec<String>,
    pub header_extensions: Vec<String>,
    pub source_extensions: Vec<String>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        let strings = |v: &[&str]| -> Vec<String> { v.iter().map(|s| s.to_string()).collect() };
        Self {
            include_folder: "include".to_string(),
            exclude_keywords: strings(&[
                "test",
                "example",
                "demo",
                "unit",
                "custom",
                "mock",
                "sample",
                "temp",
                "tmp",
                "draft",
                "experimental",
                "doc",
                "docs",
                "cmake",
                "build",
                "backup",
                "bak",
                "data",
            ]),
            exclude_include_keywords: strings(&["test"]),
            header_extensions: strings(&[".h", ".hpp", ".def", ".hxx"]),
            source_extensions: strings(&[".c", ".cpp", ".cc"]),
        }
    }
}

impl Config {
    /// Load `cppvend.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse {} - check for syntax errors (missing quotes, brackets)",
                path.display()
            )
        })
    }
}

/// Access token for cloning private repositories.
///
/// Loaded once in `main` and handed to the clone step; never mutated.
#[derive(Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into().trim().to_string();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    /// `$CPPVEND_TOKEN`, then `./secret.txt`, then `~/.cppvend/secret.txt`.
    pub fn load() -> Result<Self> {
        let mut files = vec![PathBuf::from(SECRET_FILE)];
        if let Some(home) = dirs::home_dir() {
            files.push(home.join(".cppvend").join(SECRET_FILE));
        }
        Self::load_from(std::env::var(TOKEN_ENV).ok(), &files)
    }

    pub fn load_from(env_token: Option<String>, files: &[PathBuf]) -> Result<Self> {
        if let Some(token) = env_token {
            let creds = Self::from_token(token);
            if creds.token.is_some() {
                return Ok(creds);
            }
        }

        for file in files.iter().filter(|f| f.exists()) {
            let content = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let creds = Self::from_token(content.lines().next().unwrap_or_default());
            if creds.token.is_some() {
                return Ok(creds);
            }
        }

        Ok(Self::none())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = VendorConfig::default();
        assert_eq!(cfg.include_folder, "include");
        assert!(cfg.exclude_keywords.iter().any(|k| k == "cmake"));
        assert_eq!(cfg.exclude_include_keywords, vec!["test"]);
        assert_eq!(cfg.header_extensions.len(), 4);
        assert_eq!(cfg.source_extensions.len(), 3);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[vendor]
include_folder = "third_party"
exclude_include_keywords = ["test", "bench"]
"#,
        )
        .unwrap();
        assert_eq!(cfg.vendor.include_folder, "third_party");
        assert_eq!(cfg.vendor.exclude_include_keywords, vec!["test", "bench"]);
        assert_eq!(
            cfg.vendor.exclude_keywords,
            VendorConfig::default().exclude_keywords
        );
    }

    #[test]
    fn test_missing_config_file_is_default() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let cfg = Config::load_from(&dir.path().join(CONFIG_FILE))?;
        assert_eq!(cfg.vendor, VendorConfig::default());
        Ok(())
    }

    #[test]
    fn test_credentials_prefer_env() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let secret = dir.path().join(SECRET_FILE);
        fs::write(&secret, "from-file\nsecond line\n")?;

        let creds = Credentials::load_from(Some("from-env".into()), &[secret.clone()])?;
        assert_eq!(creds.token(), Some("from-env"));

        let creds = Credentials::load_from(Some("  ".into()), &[secret])?;
        assert_eq!(creds.token(), Some("from-file"));
        Ok(())
    }

    #[test]
    fn test_credentials_absent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let creds = Credentials::load_from(None, &[dir.path().join(SECRET_FILE)])?;
        assert!(creds.token().is_none());
        Ok(())
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::from_token("ghp_secret");
        let shown = format!("{:?}", creds);
        assert!(!shown.contains("ghp_secret"));
        assert!(shown.contains("redacted"));
    }
}

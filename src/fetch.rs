//! Repository transport.
//!
//! Clones the library to vendor with `git2`. Clones are scratch space: they
//! live under `<include_folder>/.cppvend-clones/` and the vendoring engine
//! deletes them once extraction is done.

use crate::config::Credentials;
use crate::ui;
use anyhow::{Context, Result, bail};
use colored::*;
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};

pub const CLONE_DIR: &str = ".cppvend-clones";

/// A remote library, `owner/name` plus the URL to clone from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub url: String,
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Accepts a full URL (`https://github.com/fmtlib/fmt.git`,
    /// `git@github.com:fmtlib/fmt.git`) or the short `owner/repo` form.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim().trim_end_matches('/');
        let is_url = input.contains("://") || input.starts_with("git@");

        let path = if let Some((_, rest)) = input.split_once("://") {
            rest
        } else if let Some(rest) = input.strip_prefix("git@") {
            rest.split_once(':').map_or(rest, |(_, p)| p)
        } else {
            input
        };

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let min_segments = if input.contains("://") { 3 } else { 2 };
        if segments.len() < min_segments {
            bail!(
                "Invalid repository '{}'. Use 'owner/repo' or a full Git URL.",
                input
            );
        }

        let name = segments[segments.len() - 1].trim_end_matches(".git").to_string();
        let owner = segments[segments.len() - 2].to_string();
        Self::validate_parts(&owner, &name)
            .with_context(|| format!("Invalid repository '{}'", input))?;

        let url = if is_url {
            input.to_string()
        } else {
            format!("https://github.com/{}/{}.git", owner, name)
        };

        Ok(Self { url, owner, name })
    }

    /// `owner` and `name` become directory names under the include folder, so
    /// each must be a single, real path component.
    pub fn validate_parts(owner: &str, name: &str) -> Result<()> {
        for (what, part) in [("owner", owner), ("repository name", name)] {
            if part.is_empty() || part == "." || part == ".." || part.contains(['/', '\\']) {
                bail!("'{}' is not a valid {}", part, what);
            }
        }
        Ok(())
    }

    /// `owner/name`, the package ledger key.
    pub fn key(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Inject the token into an `https://` URL. Other schemes are left alone.
pub fn authenticated_url(url: &str, creds: &Credentials) -> String {
    match (creds.token(), url.strip_prefix("https://")) {
        (Some(token), Some(rest)) => format!("https://{}@{}", token, rest),
        _ => url.to_string(),
    }
}

pub fn clone_path(include_folder: &Path, repo: &RepoRef) -> PathBuf {
    include_folder
        .join(CLONE_DIR)
        .join(format!("{}-{}", repo.owner, repo.name))
}

/// Remove `<include_folder>/.cppvend-clones` once no clones are left in it.
pub fn remove_clone_root(include_folder: &Path) -> Result<()> {
    let root = include_folder.join(CLONE_DIR);
    let Ok(mut entries) = fs::read_dir(&root) else {
        return Ok(());
    };
    if entries.next().is_none() {
        fs::remove_dir(&root)
            .with_context(|| format!("Failed to remove {}", root.display()))?;
    }
    Ok(())
}

/// Clone `repo` into scratch space and return the clone's path.
pub fn clone_repository(
    repo: &RepoRef,
    include_folder: &Path,
    creds: &Credentials,
) -> Result<PathBuf> {
    let target = clone_path(include_folder, repo);
    if target.exists() {
        fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to remove stale clone {}", target.display()))?;
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let pb = ui::spinner(format!("Cloning repository '{}'...", repo.name));
    match Repository::clone(&authenticated_url(&repo.url, creds), &target) {
        Ok(_) => {
            pb.finish_with_message(format!(
                "{} Repository '{}' cloned",
                "✓".green(),
                repo.key()
            ));
            Ok(target)
        }
        Err(err) => {
            pb.finish_with_message(format!("{} Failed {}", "x".red(), repo.key()));
            // git2 may echo the URL back; keep the token out of the message.
            let msg = match creds.token() {
                Some(token) => err.message().replace(token, "***"),
                None => err.message().to_string(),
            };
            Err(anyhow::anyhow!(
                "Failed to clone repository '{}': {}",
                repo.url,
                msg
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let r = RepoRef::parse("https://github.com/nlohmann/json.git").unwrap();
        assert_eq!(r.owner, "nlohmann");
        assert_eq!(r.name, "json");
        assert_eq!(r.url, "https://github.com/nlohmann/json.git");
        assert_eq!(r.key(), "nlohmann/json");
    }

    #[test]
    fn test_parse_url_without_suffix() {
        let r = RepoRef::parse("https://gitlab.com/group/sub/lib/").unwrap();
        assert_eq!(r.owner, "sub");
        assert_eq!(r.name, "lib");
    }

    #[test]
    fn test_parse_ssh_url() {
        let r = RepoRef::parse("git@github.com:fmtlib/fmt.git").unwrap();
        assert_eq!(r.key(), "fmtlib/fmt");
        assert_eq!(r.url, "git@github.com:fmtlib/fmt.git");
    }

    #[test]
    fn test_parse_short_form() {
        let r = RepoRef::parse("gabime/spdlog").unwrap();
        assert_eq!(r.url, "https://github.com/gabime/spdlog.git");
        assert_eq!(r.key(), "gabime/spdlog");
    }

    #[test]
    fn test_parse_rejects_bare_names() {
        assert!(RepoRef::parse("spdlog").is_err());
        assert!(RepoRef::parse("https://github.com/").is_err());
    }

    #[test]
    fn test_parse_rejects_dot_segments() {
        for input in ["a/..", "./.", "https://host/a/..", "https://host/../b", "a/.git"] {
            let err = RepoRef::parse(input).unwrap_err();
            assert!(format!("{:#}", err).contains("Invalid repository"), "{input}");
        }
    }

    #[test]
    fn test_validate_parts() {
        assert!(RepoRef::validate_parts("fmtlib", "fmt").is_ok());
        assert!(RepoRef::validate_parts("", "fmtlib").is_err());
        assert!(RepoRef::validate_parts("fmtlib", "..").is_err());
        assert!(RepoRef::validate_parts(".", "fmt").is_err());
        assert!(RepoRef::validate_parts("a\\b", "fmt").is_err());
    }

    #[test]
    fn test_remove_clone_root_only_when_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        remove_clone_root(dir.path())?;

        let root = dir.path().join(CLONE_DIR);
        fs::create_dir_all(root.join("a-b"))?;
        remove_clone_root(dir.path())?;
        assert!(root.exists());

        fs::remove_dir(root.join("a-b"))?;
        remove_clone_root(dir.path())?;
        assert!(!root.exists());
        assert!(dir.path().exists());
        Ok(())
    }

    #[test]
    fn test_token_injection() {
        let creds = Credentials::from_token("abc");
        assert_eq!(
            authenticated_url("https://github.com/a/b.git", &creds),
            "https://abc@github.com/a/b.git"
        );
        assert_eq!(
            authenticated_url("git@github.com:a/b.git", &creds),
            "git@github.com:a/b.git"
        );
        assert_eq!(
            authenticated_url("https://github.com/a/b.git", &Credentials::none()),
            "https://github.com/a/b.git"
        );
    }

    #[test]
    fn test_clone_path_is_scratch() {
        let r = RepoRef::parse("fmtlib/fmt").unwrap();
        assert_eq!(
            clone_path(Path::new("include"), &r),
            PathBuf::from("include/.cppvend-clones/fmtlib-fmt")
        );
    }
}

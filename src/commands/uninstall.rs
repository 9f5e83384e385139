//! `cppvend uninstall <owner/repo>`

use crate::config::Config;
use crate::fetch::RepoRef;
use crate::ledger::Ledger;
use crate::vendor;
use anyhow::{Context, Result, bail};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(package: &str, include_folder: Option<PathBuf>, config: &Config) -> Result<()> {
    let include_folder =
        include_folder.unwrap_or_else(|| PathBuf::from(&config.vendor.include_folder));
    let mut ledger = Ledger::load()?;
    uninstall(package, &include_folder, &mut ledger)?;
    ledger.save()
}

/// Remove the vendored directory and the ledger entry. Either may be missing.
pub fn uninstall(package: &str, include_folder: &Path, ledger: &mut Ledger) -> Result<()> {
    let Some((owner, repo)) = package.trim_end_matches('/').rsplit_once('/') else {
        bail!("Invalid package '{}'. Use 'owner/repo'.", package);
    };
    let owner = owner.rsplit('/').next().unwrap_or(owner);
    RepoRef::validate_parts(owner, repo)
        .with_context(|| format!("Invalid package '{}'", package))?;
    let key = format!("{}/{}", owner, repo);

    let dest = vendor::destination_dir(include_folder, owner, repo);
    if dest.exists() {
        fs::remove_dir_all(&dest)
            .with_context(|| format!("Failed to remove {}", dest.display()))?;
        println!("{} Removed '{}' from include folder", "🗑️".red(), key);
    } else {
        println!(
            "{} '{}' not found in '{}'",
            "!".yellow(),
            key,
            include_folder.display()
        );
    }

    if ledger.remove(&key).is_some() {
        println!("{} Package '{}' uninstalled", "✓".green(), key);
    } else {
        println!("{} Package '{}' was not recorded", "!".yellow(), key);
    }
    Ok(())
}

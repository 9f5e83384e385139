//! `cppvend build <repo>`

use crate::buildgen;
use crate::builder;
use anyhow::Result;

/// Accepts `repo` or `owner/repo`; build directories are keyed by repo name.
pub fn run(package: &str) -> Result<()> {
    let repo = package
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(package);
    builder::build_package(&buildgen::build_dir(repo))
}

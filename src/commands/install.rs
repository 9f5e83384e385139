//! `cppvend install <repo>`
//!
//! clone → vendor → build files → ledger → build

use crate::builder;
use crate::buildgen::{self, BuildOptions, BuildSystem};
use crate::config::{Config, Credentials};
use crate::fetch::{self, RepoRef};
use crate::ledger::Ledger;
use crate::vendor::{self, Vendorer};
use anyhow::{Context, Result};
use colored::*;
use inquire::{Select, Text};
use std::path::{Path, PathBuf};

pub struct InstallArgs {
    pub repo: String,
    pub include_folder: Option<PathBuf>,
    pub build_system: Option<BuildSystem>,
    pub compiler: Option<String>,
    pub no_build: bool,
    pub verbose: bool,
}

/// Final destination and its files, handed on to the ledger.
#[derive(Debug)]
pub struct Installed {
    pub repo: RepoRef,
    pub destination: PathBuf,
    pub files: Vec<String>,
}

pub fn run(args: &InstallArgs, config: &Config, creds: &Credentials) -> Result<()> {
    let include_folder = args
        .include_folder
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.vendor.include_folder));
    let repo = RepoRef::parse(&args.repo)?;

    let installed = vendor_repository(&repo, &include_folder, config, creds, args.verbose)?;

    let build_dir = buildgen::build_dir(&repo.name);
    let generated = if args.no_build {
        None
    } else {
        match choose_build_options(&repo, args)? {
            Some(options) => {
                let path = buildgen::write_build_files(
                    &repo.name,
                    &installed.destination,
                    &build_dir,
                    &options,
                )
                .context("Failed to generate build files")?;
                println!(
                    "{} {} created in '{}'",
                    "✓".green(),
                    options.system.file_name(),
                    build_dir.display()
                );
                Some(path)
            }
            None => {
                println!(
                    "{} Skipping build system creation for '{}'",
                    "!".yellow(),
                    repo.key()
                );
                None
            }
        }
    };

    let mut ledger = Ledger::load()?;
    ledger.record(&repo.key(), installed.files.clone());
    ledger.save().context("Failed to record package")?;
    println!("{} Package '{}' recorded", "✓".green(), repo.key());

    if generated.is_some() {
        builder::build_package(&build_dir)?;
    }

    Ok(())
}

/// Clone and vendor `repo`, unless its destination already exists.
pub fn vendor_repository(
    repo: &RepoRef,
    include_folder: &Path,
    config: &Config,
    creds: &Credentials,
    verbose: bool,
) -> Result<Installed> {
    let destination = vendor::destination_dir(include_folder, &repo.owner, &repo.name);

    if destination.exists() {
        println!(
            "{} '{}' already exists in '{}', skipping clone",
            "!".yellow(),
            repo.key(),
            include_folder.display()
        );
        let files = vendor::list_files(&destination)?;
        return Ok(Installed {
            repo: repo.clone(),
            destination,
            files,
        });
    }

    let clone = fetch::clone_repository(repo, include_folder, creds)?;

    println!(
        "{} Extracting headers and sources from '{}' to '{}'...",
        "📦".blue(),
        repo.name,
        destination.display()
    );
    let report = Vendorer::new(&config.vendor)
        .verbose(verbose)
        .run(&clone, &destination)?;
    fetch::remove_clone_root(include_folder)?;

    println!(
        "{} Vendored {} files ({} includes rewritten, {} left as-is, {} rejected, {} unpaired sources)",
        "✓".green(),
        report.files.len(),
        report.includes_resolved,
        report.includes_unresolved,
        report.rejected.len(),
        report.unpaired.len()
    );

    Ok(Installed {
        repo: repo.clone(),
        destination,
        files: report.files,
    })
}

fn choose_build_options(repo: &RepoRef, args: &InstallArgs) -> Result<Option<BuildOptions>> {
    let system = match args.build_system {
        Some(system) => system,
        None => {
            let options = vec!["CMake", "Makefile", "Skip"];
            let choice = Select::new(
                &format!("Choose a build system for '{}':", repo.key()),
                options,
            )
            .prompt()?;
            match choice {
                "CMake" => BuildSystem::CMake,
                "Makefile" => BuildSystem::Makefile,
                _ => return Ok(None),
            }
        }
    };

    let compiler = match &args.compiler {
        Some(c) => c.clone(),
        None => Text::new("C++ compiler to use (e.g., g++, clang++):")
            .with_default("g++")
            .prompt()?,
    };

    Ok(Some(BuildOptions { system, compiler }))
}

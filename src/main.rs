//! # cppvend CLI Entry Point
//!
//! Parses CLI arguments using clap and routes commands to the handlers in
//! [`cppvend::commands`].
//!
//! ## Commands
//!
//! - `install <repo>` - clone, vendor, generate build files, record, build
//! - `uninstall <owner/repo>` - remove vendored files and the ledger entry
//! - `list` - show installed packages
//! - `build <repo>` - rerun the build for a vendored package
//! - `completion <shell>` - shell completion scripts

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use cppvend::buildgen::BuildSystem;
use cppvend::commands;
use cppvend::config::{Config, Credentials};

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "cppvend")]
#[command(about = "Vendor C/C++ libraries from Git", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    /// Print every selection, pairing and rewrite decision
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a C/C++ package from a Git repository URL
    Install {
        /// Repository URL or owner/repo
        repo_url: String,
        /// Folder to store header and source files [default: include]
        #[arg(long)]
        include_folder: Option<PathBuf>,
        /// Build system to generate (prompted if omitted)
        #[arg(long, value_enum)]
        build_system: Option<BuildSystem>,
        /// C++ compiler written into the build file (prompted if omitted)
        #[arg(long)]
        compiler: Option<String>,
        /// Only vendor and record; no build files, no build
        #[arg(long)]
        no_build: bool,
    },
    /// Uninstall a previously installed package
    Uninstall {
        /// Package to remove (owner/repo)
        package: String,
        /// Folder to remove header and source files from [default: include]
        #[arg(long)]
        include_folder: Option<PathBuf>,
    },
    /// List all installed packages
    List,
    /// Build a vendored package with its generated build files
    Build {
        /// Repository name (or owner/repo)
        package: String,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() {
    enable_windows_utf8_console();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Install {
            repo_url,
            include_folder,
            build_system,
            compiler,
            no_build,
        } => {
            let creds = Credentials::load()?;
            let args = commands::install::InstallArgs {
                repo: repo_url,
                include_folder,
                build_system,
                compiler,
                no_build,
                verbose: cli.verbose,
            };
            commands::install::run(&args, &config, &creds)
        }
        Commands::Uninstall {
            package,
            include_folder,
        } => commands::uninstall::run(&package, include_folder, &config),
        Commands::List => commands::list::run(),
        Commands::Build { package } => commands::build::run(&package),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

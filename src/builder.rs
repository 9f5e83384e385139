//! Runs the generated build for a vendored library.

use anyhow::{Context, Result, bail};
use colored::*;
use std::path::Path;
use std::process::Command;

/// Which tool a build directory will be driven with.
#[derive(Debug, PartialEq, Eq)]
pub enum BuildPlan {
    Make,
    CMakeThenMake,
}

pub fn detect(build_dir: &Path) -> Option<BuildPlan> {
    if build_dir.join("Makefile").exists() {
        Some(BuildPlan::Make)
    } else if build_dir.join("CMakeLists.txt").exists() {
        Some(BuildPlan::CMakeThenMake)
    } else {
        None
    }
}

pub fn build_package(build_dir: &Path) -> Result<()> {
    if !build_dir.exists() {
        bail!("Build path '{}' does not exist.", build_dir.display());
    }

    match detect(build_dir) {
        Some(BuildPlan::Make) => {
            println!("{} Building with Makefile...", "🔨".yellow());
            run(build_dir, "make", &[])?;
        }
        Some(BuildPlan::CMakeThenMake) => {
            println!("{} Building with CMake...", "🔨".yellow());
            run(build_dir, "cmake", &["."])?;
            run(build_dir, "make", &[])?;
        }
        None => bail!(
            "No Makefile or CMakeLists.txt found in {}",
            build_dir.display()
        ),
    }

    println!("{} Build finished in {}", "✓".green(), build_dir.display());
    Ok(())
}

fn run(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run '{}' - is it installed?", program))?;
    if !status.success() {
        bail!("'{} {}' failed with {}", program, args.join(" "), status);
    }
    Ok(())
}

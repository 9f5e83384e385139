//! Build files for vendored libraries.
//!
//! Each library gets `build/<repo>/` with either a `CMakeLists.txt` or a
//! `Makefile` that compiles the vendored sources into a static library.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BuildSystem {
    #[value(name = "cmake")]
    CMake,
    #[value(name = "make")]
    Makefile,
}

impl fmt::Display for BuildSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildSystem::CMake => write!(f, "CMake"),
            BuildSystem::Makefile => write!(f, "Makefile"),
        }
    }
}

impl BuildSystem {
    pub fn file_name(self) -> &'static str {
        match self {
            BuildSystem::CMake => "CMakeLists.txt",
            BuildSystem::Makefile => "Makefile",
        }
    }
}

/// Chosen by the user; passed through to the templates untouched.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub system: BuildSystem,
    pub compiler: String,
}

pub fn build_dir(repo: &str) -> PathBuf {
    Path::new("build").join(repo)
}

pub fn cmake_lists(repo: &str, vendor_dir: &Path, compiler: &str) -> String {
    let dir = vendor_dir.display();
    format!(
        r#"cmake_minimum_required(VERSION 3.10)
project({repo})
set(CMAKE_CXX_COMPILER {compiler})
include_directories("{dir}")
file(GLOB SOURCES "{dir}/*.cpp" "{dir}/*.cc" "{dir}/*.c")
add_library({repo} STATIC ${{SOURCES}})
"#
    )
}

pub fn makefile(repo: &str, vendor_dir: &Path, compiler: &str) -> String {
    let dir = vendor_dir.display();
    format!(
        r#"CXX = {compiler}
CXXFLAGS = -Wall -Wextra -std=c++14 -I{dir}

SOURCES = $(wildcard {dir}/*.cpp {dir}/*.cc {dir}/*.c)
OBJECTS = $(addsuffix .o,$(basename $(SOURCES)))

lib{repo}.a: $(OBJECTS)
	ar rcs $@ $(OBJECTS)

%.o: %.cpp
	$(CXX) $(CXXFLAGS) -c $< -o $@

%.o: %.cc
	$(CXX) $(CXXFLAGS) -c $< -o $@

%.o: %.c
	$(CXX) $(CXXFLAGS) -x c -c $< -o $@

clean:
	rm -f $(OBJECTS) lib{repo}.a
"#
    )
}

/// Write the build file for `repo` into `out_dir`; returns its path.
pub fn write_build_files(
    repo: &str,
    vendor_dir: &Path,
    out_dir: &Path,
    options: &BuildOptions,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create build directory {}", out_dir.display()))?;
    let vendor_dir = std::path::absolute(vendor_dir)?;

    let content = match options.system {
        BuildSystem::CMake => cmake_lists(repo, &vendor_dir, &options.compiler),
        BuildSystem::Makefile => makefile(repo, &vendor_dir, &options.compiler),
    };

    let path = out_dir.join(options.system.file_name());
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

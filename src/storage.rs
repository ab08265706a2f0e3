//! Filesystem gateway rooted at the storage volume.
//!
//! Every path the IDE touches is built here so the on-card layout stays in
//! one place:
//!
//! ```text
//! /3ds/
//! /3ds/replit3ds_projects/<name>/{source,include}/
//! /3ds/replit3ds_projects/<name>/source/main.cpp
//! /3ds/replit3ds_projects/<name>/Makefile
//! /3ds/replit3ds_deps/<dep>/
//! /3ds/replit3ds_deps/README.txt
//! ```

use crate::error::{IdeError, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

pub const HOMEBREW_DIR: &str = "3ds";
pub const PROJECTS_DIR: &str = "replit3ds_projects";
pub const DEPS_DIR: &str = "replit3ds_deps";
pub const SEED_SOURCE: &str = "main.cpp";
pub const BUILD_DESCRIPTOR: &str = "Makefile";
pub const DEPS_README: &str = "README.txt";

#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn homebrew_dir(&self) -> PathBuf {
        self.root.join(HOMEBREW_DIR)
    }

    pub fn projects_root(&self) -> PathBuf {
        self.homebrew_dir().join(PROJECTS_DIR)
    }

    pub fn deps_root(&self) -> PathBuf {
        self.homebrew_dir().join(DEPS_DIR)
    }

    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.projects_root().join(name)
    }

    pub fn seed_source_path(&self, name: &str) -> PathBuf {
        self.project_dir(name).join("source").join(SEED_SOURCE)
    }

    pub fn build_descriptor_path(&self, name: &str) -> PathBuf {
        self.project_dir(name).join(BUILD_DESCRIPTOR)
    }

    pub fn dependency_dir(&self, dep: &str) -> PathBuf {
        self.deps_root().join(dep)
    }

    pub fn deps_readme_path(&self) -> PathBuf {
        self.deps_root().join(DEPS_README)
    }

    /// Whether the volume can be opened at all.
    pub fn storage_available(&self) -> bool {
        fs::read_dir(&self.root).is_ok()
    }

    /// Mount the volume and create the fixed top-level folders.
    ///
    /// Failures are logged and otherwise ignored; later actions report them
    /// through the status line.
    pub fn init_layout(&self) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            log::warn!("cannot create storage root {}: {}", self.root.display(), e);
        }
        for dir in [self.homebrew_dir(), self.projects_root(), self.deps_root()] {
            if let Err(e) = ensure_dir(&dir) {
                log::warn!("{}", e);
            }
        }
    }
}

/// Create one directory level. An existing entry counts as success.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(source) => Err(IdeError::Directory {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Names of the subdirectories of `path`, in enumeration order, at most `cap`.
pub fn list_dirs(path: &Path, cap: usize) -> Result<Vec<String>> {
    let entries = fs::read_dir(path).map_err(|source| IdeError::Directory {
        path: path.to_path_buf(),
        source,
    })?;

    let names = entries
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name != "." && name != "..")
        .take(cap)
        .collect();
    Ok(names)
}

/// Create or truncate `path` and write `content`.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| IdeError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Skip `skip` lines, then return up to `max_lines` lines clipped to
/// `max_width` columns. Skipping past the end yields an empty vec.
pub fn read_lines(path: &Path, skip: usize, max_lines: usize, max_width: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| IdeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::with_capacity(max_lines);
    for line in BufReader::new(file).split(b'\n').skip(skip).take(max_lines) {
        let bytes = line.map_err(|source| IdeError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        lines.push(clip_to_width(&sanitize_line(&text), max_width));
    }
    Ok(lines)
}

/// Expand tabs and drop control characters so the console grid stays aligned.
fn sanitize_line(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\t' => out.push_str("    "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Longest prefix of `text` that fits in `max_width` display columns.
pub fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

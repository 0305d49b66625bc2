//! # Walker Module
//!
//! This module enumerates candidate files: every directory under a root is
//! visited and each user pattern is globbed relative to it, so `*.go` finds
//! Go files at any depth.
//!
//! Enumeration is best effort. A directory that cannot be read or a glob
//! entry that cannot be resolved is recorded in [`Discovery::skipped`] and
//! the walk continues with whatever else it can reach.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// A path the walker could not enumerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPath {
  /// Path (or glob) that failed
  pub path: PathBuf,
  /// Why it was skipped
  pub reason: String,
}

/// Result of a walk.
#[derive(Debug, Default)]
pub struct Discovery {
  /// Matching regular files in traversal order
  pub files: Vec<PathBuf>,
  /// Paths skipped because of walk or glob errors
  pub skipped: Vec<SkippedPath>,
}

/// Recursive glob walker rooted at a directory.
pub struct FileWalker {
  root: PathBuf,
  patterns: Vec<String>,
  invalid: Vec<SkippedPath>,
}

impl FileWalker {
  /// Creates a walker for `patterns` under `root`.
  ///
  /// Patterns that are not valid globs are dropped and reported in
  /// [`Discovery::skipped`] by [`find_files`](Self::find_files); the valid
  /// ones are still walked.
  pub fn new(root: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
    let mut valid = Vec::with_capacity(patterns.len());
    let mut invalid = Vec::new();

    for pattern in patterns {
      match glob::Pattern::new(&pattern) {
        Ok(_) => valid.push(pattern),
        Err(e) => {
          debug!("Skipping invalid glob pattern {}: {}", pattern, e);
          invalid.push(SkippedPath {
            path: PathBuf::from(pattern),
            reason: e.to_string(),
          });
        }
      }
    }

    Self {
      root: root.into(),
      patterns: valid,
      invalid,
    }
  }

  /// Walks the tree and collects every regular file matching a pattern.
  ///
  /// Directories are visited in lexical order and each directory's matches
  /// are listed in glob order. A file matched by several patterns is listed
  /// once.
  pub fn find_files(&self) -> Discovery {
    let mut discovery = Discovery {
      files: Vec::new(),
      skipped: self.invalid.clone(),
    };
    let mut seen = HashSet::new();
    let start_time = std::time::Instant::now();

    debug!("Scanning directory: {}", self.root.display());

    for entry in WalkDir::new(&self.root).sort_by_file_name() {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          let path = e.path().map_or_else(|| self.root.clone(), Path::to_path_buf);
          debug!("Skipping {}: {}", path.display(), e);
          discovery.skipped.push(SkippedPath {
            path,
            reason: e.to_string(),
          });
          continue;
        }
      };

      if entry.file_type().is_dir() {
        self.glob_directory(entry.path(), &mut discovery, &mut seen);
      }
    }

    debug!(
      "Found {} files in {}ms",
      discovery.files.len(),
      start_time.elapsed().as_millis()
    );

    discovery
  }

  fn glob_directory(&self, dir: &Path, discovery: &mut Discovery, seen: &mut HashSet<PathBuf>) {
    let escaped_dir = glob::Pattern::escape(&dir.to_string_lossy());

    for pattern in &self.patterns {
      let full_pattern = Path::new(&escaped_dir).join(pattern);
      let full_pattern = full_pattern.to_string_lossy();

      let paths = match glob::glob(&full_pattern) {
        Ok(paths) => paths,
        Err(e) => {
          debug!("Skipping glob {}: {}", full_pattern, e);
          discovery.skipped.push(SkippedPath {
            path: PathBuf::from(&*full_pattern),
            reason: e.to_string(),
          });
          continue;
        }
      };

      for path in paths {
        match path {
          Ok(path) if path.is_file() => {
            if seen.insert(path.clone()) {
              discovery.files.push(path);
            }
          }
          Ok(_) => {}
          Err(e) => {
            debug!("Skipping {}: {}", e.path().display(), e.error());
            discovery.skipped.push(SkippedPath {
              path: e.path().to_path_buf(),
              reason: e.error().to_string(),
            });
          }
        }
      }
    }
  }
}

/// Returns `true` if any of `excludes` occurs anywhere in `path`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use lhc::walker::exclude;
///
/// let excludes = vec!["/yang/gen/".to_string()];
/// assert!(exclude(Path::new("api/yang/gen/model.java"), &excludes));
/// assert!(!exclude(Path::new("api/src/model.java"), &excludes));
/// ```
pub fn exclude(path: &Path, excludes: &[String]) -> bool {
  let path = path.to_string_lossy();
  excludes
    .iter()
    .filter(|pattern| !pattern.is_empty())
    .any(|pattern| path.contains(pattern.as_str()))
}

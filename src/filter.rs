// src/filter.rs
//! Include/exclude scoping of candidate route files.
//!
//! Excludes win over includes. Every pattern is tried against three forms of
//! the path: relative to the project base directory, the same with any
//! declared source/resource root stripped, and the bare file name.

use crate::pattern::Pattern;
use std::path::{Path, PathBuf};

/// Parsed include/exclude lists. `None` means the list was never configured.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    pub includes: Option<Vec<Pattern>>,
    pub excludes: Option<Vec<Pattern>>,
}

impl FilterSpec {
    /// Parses comma-separated pattern lists. Entries are trimmed and blank
    /// entries dropped.
    #[must_use]
    pub fn parse(includes: Option<&str>, excludes: Option<&str>) -> Self {
        Self {
            includes: includes.map(split_patterns),
            excludes: excludes.map(split_patterns),
        }
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.includes.is_none() && self.excludes.is_none()
    }
}

fn split_patterns(list: &str) -> Vec<Pattern> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(Pattern::new)
        .collect()
}

/// A [`FilterSpec`] bound to a project's base directory and declared roots.
#[derive(Debug, Clone)]
pub struct FileFilter {
    basedir: PathBuf,
    roots: Vec<PathBuf>,
    spec: FilterSpec,
}

impl FileFilter {
    #[must_use]
    pub fn new(basedir: PathBuf, roots: Vec<PathBuf>, spec: FilterSpec) -> Self {
        Self {
            basedir,
            roots,
            spec,
        }
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        matches(path, &self.basedir, &self.roots, &self.spec)
    }

    /// Keeps the accepted paths, in order.
    #[must_use]
    pub fn filter(&self, paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Decides whether `path` is in scope.
#[must_use]
pub fn matches(path: &Path, basedir: &Path, roots: &[PathBuf], spec: &FilterSpec) -> bool {
    if spec.is_unrestricted() {
        return true;
    }

    let candidates = candidates(path, basedir, roots);

    if let Some(excludes) = &spec.excludes {
        if any_match(excludes, &candidates) {
            return false;
        }
    }

    match &spec.includes {
        Some(includes) => any_match(includes, &candidates),
        None => true,
    }
}

fn any_match(patterns: &[Pattern], candidates: &[String]) -> bool {
    patterns
        .iter()
        .any(|p| candidates.iter().any(|c| p.matches(c)))
}

fn candidates(path: &Path, basedir: &Path, roots: &[PathBuf]) -> Vec<String> {
    let relative = relative_to(path, basedir);
    let stripped = strip_root(&relative, basedir, roots);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    vec![normalize_path(&relative), normalize_path(&stripped), name]
}

/// Path relative to `basedir`, or the path unchanged when it lies elsewhere.
#[must_use]
pub fn relative_to(path: &Path, basedir: &Path) -> PathBuf {
    path.strip_prefix(basedir)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

fn strip_root(relative: &Path, basedir: &Path, roots: &[PathBuf]) -> PathBuf {
    for root in roots {
        let root = relative_to(root, basedir);
        if root.as_os_str().is_empty() {
            continue;
        }
        if let Ok(rest) = relative.strip_prefix(&root) {
            return rest.to_path_buf();
        }
    }
    relative.to_path_buf()
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

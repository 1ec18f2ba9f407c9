// src/discovery.rs
use crate::config::LayoutConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const JAVA_EXT: &str = "java";
pub const XML_EXT: &str = "xml";

/// Base directory plus the source and resource roots declared for it.
/// All roots are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub basedir: PathBuf,
    pub source_roots: Vec<PathBuf>,
    pub resource_roots: Vec<PathBuf>,
    pub test_source_roots: Vec<PathBuf>,
    pub test_resource_roots: Vec<PathBuf>,
}

impl ProjectLayout {
    #[must_use]
    pub fn from_config(basedir: &Path, layout: &LayoutConfig) -> Self {
        let resolve_all = |dirs: &[String]| -> Vec<PathBuf> {
            dirs.iter().map(|d| resolve(basedir, Path::new(d))).collect()
        };
        Self {
            basedir: basedir.to_path_buf(),
            source_roots: resolve_all(&layout.source_roots),
            resource_roots: resolve_all(&layout.resource_roots),
            test_source_roots: resolve_all(&layout.test_source_roots),
            test_resource_roots: resolve_all(&layout.test_resource_roots),
        }
    }

    /// Resolves a possibly relative path against the base directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        resolve(&self.basedir, path)
    }

    /// Every declared root, in the order the filter strips them.
    #[must_use]
    pub fn declared_roots(&self) -> Vec<PathBuf> {
        self.source_roots
            .iter()
            .chain(&self.test_source_roots)
            .chain(&self.resource_roots)
            .chain(&self.test_resource_roots)
            .cloned()
            .collect()
    }
}

fn resolve(basedir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        basedir.join(path)
    }
}

/// Candidate route files, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    pub java: Vec<PathBuf>,
    pub xml: Vec<PathBuf>,
}

/// Collects `.java` files under the source roots and `.xml` files under the
/// resource roots (plus the test roots when `include_test`).
#[must_use]
pub fn discover(layout: &ProjectLayout, include_test: bool) -> Discovered {
    let mut java_roots: Vec<&PathBuf> = layout.source_roots.iter().collect();
    let mut xml_roots: Vec<&PathBuf> = layout.resource_roots.iter().collect();
    if include_test {
        java_roots.extend(&layout.test_source_roots);
        xml_roots.extend(&layout.test_resource_roots);
    }

    Discovered {
        java: find_files(&java_roots, JAVA_EXT),
        xml: find_files(&xml_roots, XML_EXT),
    }
}

/// Walks every root in turn, keeping the first occurrence of each file.
#[must_use]
pub fn find_files(roots: &[&PathBuf], ext: &str) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for root in roots {
        for path in walk_root(root, ext) {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }
    files
}

fn walk_root(root: &Path, ext: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    accumulate_walker(walker, ext)
}

fn accumulate_walker<I>(walker: I, ext: &str) -> Vec<PathBuf>
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    walker
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| has_extension(e.path(), ext))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().ends_with(&format!(".{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_uses_file_name() {
        assert!(has_extension(Path::new("a/B.java"), JAVA_EXT));
        assert!(!has_extension(Path::new("a/B.javax"), JAVA_EXT));
        assert!(!has_extension(Path::new("java"), JAVA_EXT));
    }

    #[test]
    fn relative_roots_resolve_against_basedir() {
        let layout = ProjectLayout::from_config(Path::new("/proj"), &LayoutConfig::default());
        assert_eq!(layout.source_roots, vec![PathBuf::from("/proj/src/main/java")]);
        assert_eq!(layout.declared_roots().len(), 4);
        assert_eq!(
            layout.resolve(Path::new("/abs/dump")),
            PathBuf::from("/abs/dump")
        );
    }
}

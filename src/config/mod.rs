// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, LayoutConfig, RouteCovToml, CONFIG_FILE, DEFAULT_DUMP_DIR};

use crate::discovery::ProjectLayout;
use crate::filter::{FileFilter, FilterSpec};
use std::path::{Path, PathBuf};

impl Config {
    /// Defaults for a project rooted at `basedir`.
    #[must_use]
    pub fn new(basedir: &Path) -> Self {
        Self::from_toml(basedir, RouteCovToml::default())
    }

    /// Creates a config and applies `routecov.toml` from `basedir` when present.
    #[must_use]
    pub fn load(basedir: &Path) -> Self {
        let mut config = Self::new(basedir);
        config.load_local_config();
        config
    }

    pub fn load_local_config(&mut self) {
        if let Some(file) = io::load_toml_config(&self.layout.basedir) {
            let verbose = self.verbose;
            *self = Self::from_toml(&self.layout.basedir.clone(), file);
            self.verbose = verbose;
        }
    }

    /// Replaces settings with the contents of a TOML document.
    ///
    /// # Errors
    /// Returns error if the document is not valid `routecov.toml`.
    pub fn parse_toml(&mut self, content: &str) -> anyhow::Result<()> {
        let file: RouteCovToml = toml::from_str(content)?;
        let verbose = self.verbose;
        *self = Self::from_toml(&self.layout.basedir.clone(), file);
        self.verbose = verbose;
        Ok(())
    }

    #[must_use]
    pub fn from_toml(basedir: &Path, file: RouteCovToml) -> Self {
        Self {
            layout: ProjectLayout::from_config(basedir, &file.layout),
            fail_on_error: file.fail_on_error,
            include_test: file.include_test,
            includes: file.includes,
            excludes: file.excludes,
            dump_dir: PathBuf::from(file.dump_dir),
            event_log: file.event_log.map(PathBuf::from),
            verbose: false,
        }
    }

    /// Dump directory resolved against the base directory.
    #[must_use]
    pub fn dump_dir(&self) -> PathBuf {
        self.layout.resolve(&self.dump_dir)
    }

    /// Event log path resolved against the base directory.
    #[must_use]
    pub fn event_log(&self) -> Option<PathBuf> {
        self.event_log.as_deref().map(|p| self.layout.resolve(p))
    }

    #[must_use]
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::parse(self.includes.as_deref(), self.excludes.as_deref())
    }

    /// The include/exclude filter bound to this project's layout.
    #[must_use]
    pub fn file_filter(&self) -> FileFilter {
        FileFilter::new(
            self.layout.basedir.clone(),
            self.layout.declared_roots(),
            self.filter_spec(),
        )
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::discovery::ProjectLayout;

/// Root directories, relative to the project base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,
    #[serde(default = "default_resource_roots")]
    pub resource_roots: Vec<String>,
    #[serde(default = "default_test_source_roots")]
    pub test_source_roots: Vec<String>,
    #[serde(default = "default_test_resource_roots")]
    pub test_resource_roots: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source_roots: default_source_roots(),
            resource_roots: default_resource_roots(),
            test_source_roots: default_test_source_roots(),
            test_resource_roots: default_test_resource_roots(),
        }
    }
}

fn default_source_roots() -> Vec<String> { vec!["src/main/java".into()] }
fn default_resource_roots() -> Vec<String> { vec!["src/main/resources".into()] }
fn default_test_source_roots() -> Vec<String> { vec!["src/test/java".into()] }
fn default_test_resource_roots() -> Vec<String> { vec!["src/test/resources".into()] }
fn default_dump_dir() -> String { DEFAULT_DUMP_DIR.to_string() }

pub const DEFAULT_DUMP_DIR: &str = "target/camel-route-coverage";
pub const CONFIG_FILE: &str = "routecov.toml";

/// On-disk shape of `routecov.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCovToml {
    #[serde(default)]
    pub fail_on_error: bool,
    #[serde(default)]
    pub include_test: bool,
    #[serde(default)]
    pub includes: Option<String>,
    #[serde(default)]
    pub excludes: Option<String>,
    #[serde(default = "default_dump_dir")]
    pub dump_dir: String,
    #[serde(default)]
    pub event_log: Option<String>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for RouteCovToml {
    fn default() -> Self {
        Self {
            fail_on_error: false,
            include_test: false,
            includes: None,
            excludes: None,
            dump_dir: default_dump_dir(),
            event_log: None,
            layout: LayoutConfig::default(),
        }
    }
}

/// Effective settings for one run.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct Config {
    pub layout: ProjectLayout,
    pub fail_on_error: bool,
    pub include_test: bool,
    pub includes: Option<String>,
    pub excludes: Option<String>,
    pub dump_dir: PathBuf,
    pub event_log: Option<PathBuf>,
    pub verbose: bool,
}

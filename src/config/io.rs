// src/config/io.rs
use super::types::{RouteCovToml, CONFIG_FILE};
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Reads `routecov.toml` from `basedir`. A missing file yields `None`; an
/// unreadable or invalid one is reported and also yields `None`.
#[must_use]
pub fn load_toml_config(basedir: &Path) -> Option<RouteCovToml> {
    let path = basedir.join(CONFIG_FILE);
    if !path.exists() {
        return None;
    }
    match read_toml(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!(
                "{} ignoring {}: {e}",
                "warning:".yellow().bold(),
                path.display()
            );
            None
        }
    }
}

fn read_toml(path: &Path) -> Result<RouteCovToml> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes the commented default `routecov.toml` unless one already exists.
/// Returns true if a file was written.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_default_config(basedir: &Path) -> Result<bool> {
    let path = basedir.join(CONFIG_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, default_toml())?;
    Ok(true)
}

#[must_use]
pub fn default_toml() -> String {
    format!(
        r#"# {CONFIG_FILE}
# Fail the run when a route is not fully covered.
fail_on_error = false
# Also scan test source and resource roots.
include_test = false
# Comma-separated wildcard or regex patterns.
# includes = "*Route.java"
# excludes = "legacy/*"
dump_dir = "{dump}"
# event_log = "target/routecov-events.jsonl"

[layout]
source_roots = ["src/main/java"]
resource_roots = ["src/main/resources"]
test_source_roots = ["src/test/java"]
test_resource_roots = ["src/test/resources"]
"#,
        dump = super::DEFAULT_DUMP_DIR
    )
}

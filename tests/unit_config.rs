// tests/unit_config.rs
use clap::Parser;
use routecov_core::cli::{apply_overrides, Cli};
use routecov_core::config::{self, Config, DEFAULT_DUMP_DIR};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_follow_maven_layout() {
    let config = Config::new(&PathBuf::from("/p"));
    assert!(!config.fail_on_error);
    assert!(!config.include_test);
    assert!(config.includes.is_none());
    assert_eq!(config.dump_dir(), PathBuf::from("/p").join(DEFAULT_DUMP_DIR));
    assert_eq!(
        config.layout.source_roots,
        vec![PathBuf::from("/p/src/main/java")]
    );
    assert_eq!(
        config.layout.test_resource_roots,
        vec![PathBuf::from("/p/src/test/resources")]
    );
    assert!(config.event_log().is_none());
}

#[test]
fn test_loads_toml_from_basedir() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(config::CONFIG_FILE),
        r#"
fail_on_error = true
includes = "*Route.java"
dump_dir = "build/dumps"
event_log = "build/events.jsonl"

[layout]
source_roots = ["app/java"]
"#,
    )?;

    let config = Config::load(dir.path());
    assert!(config.fail_on_error);
    assert_eq!(config.includes.as_deref(), Some("*Route.java"));
    assert_eq!(config.dump_dir(), dir.path().join("build/dumps"));
    assert_eq!(config.event_log(), Some(dir.path().join("build/events.jsonl")));
    assert_eq!(config.layout.source_roots, vec![dir.path().join("app/java")]);
    // unspecified roots keep their defaults
    assert_eq!(
        config.layout.resource_roots,
        vec![dir.path().join("src/main/resources")]
    );
    Ok(())
}

#[test]
fn test_invalid_toml_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(config::CONFIG_FILE), "fail_on_error = \"maybe\"")?;
    let config = Config::load(dir.path());
    assert!(!config.fail_on_error);
    Ok(())
}

#[test]
fn test_parse_toml_rejects_garbage() {
    let mut config = Config::new(&PathBuf::from("/p"));
    assert!(config.parse_toml("include_test = 3").is_err());
    assert!(config.parse_toml("include_test = true").is_ok());
    assert!(config.include_test);
}

#[test]
fn test_cli_overrides_file_settings() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(config::CONFIG_FILE),
        "includes = \"a*\"\nexcludes = \"b*\"\n",
    )?;

    let mut config = Config::load(dir.path());
    let cli = Cli::parse_from([
        "routecov",
        "--fail-on-error",
        "--includes",
        "*Route.java",
        "--dump-dir",
        "/tmp/dumps",
        "-v",
    ]);
    apply_overrides(&mut config, &cli);

    assert!(config.fail_on_error);
    assert!(config.verbose);
    assert_eq!(config.includes.as_deref(), Some("*Route.java"));
    // not given on the command line: file value stays
    assert_eq!(config.excludes.as_deref(), Some("b*"));
    assert_eq!(config.dump_dir(), PathBuf::from("/tmp/dumps"));
    Ok(())
}

#[test]
fn test_init_writes_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    assert!(config::io::write_default_config(dir.path())?);
    assert!(!config::io::write_default_config(dir.path())?);

    let config = Config::load(dir.path());
    assert!(!config.fail_on_error);
    assert_eq!(config.dump_dir(), dir.path().join(DEFAULT_DUMP_DIR));
    Ok(())
}

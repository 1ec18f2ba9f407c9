use clap::Parser;
use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(name = "routecov", version, about = "Route coverage reports from recorded test runs")]
pub struct Cli {
    /// Project base directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub basedir: PathBuf,
    /// Fail when a route is not fully covered
    #[arg(long)]
    pub fail_on_error: bool,
    /// Also scan test source and resource roots
    #[arg(long)]
    pub include_test: bool,
    /// Only analyze files matching any of these comma-separated patterns
    #[arg(long, value_name = "PATTERNS")]
    pub includes: Option<String>,
    /// Skip files matching any of these comma-separated patterns
    #[arg(long, value_name = "PATTERNS")]
    pub excludes: Option<String>,
    /// Directory holding the coverage dumps
    #[arg(long, value_name = "DIR")]
    pub dump_dir: Option<PathBuf>,
    /// Append run events as JSON lines to this file
    #[arg(long, value_name = "FILE")]
    pub events: Option<PathBuf>,
    #[arg(long, short)]
    pub verbose: bool,
    /// Write a default routecov.toml and exit
    #[arg(long)]
    pub init: bool,
}

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a source file into route trees. Recoverable: the file is skipped.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Java grammar could not be loaded: {0}")]
    Grammar(String),

    #[error("syntax error near line {line} in {path}")]
    Syntax { path: PathBuf, line: usize },
}

/// Failure to read the execution dump for a route. Fatal to the run.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed coverage dump {path}: {source}")]
    Xml {
        source: quick_xml::Error,
        path: PathBuf,
    },

    #[error("invalid exchangesTotal '{value}' on <{element}> in {path}")]
    InvalidCount {
        element: String,
        value: String,
        path: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Error during gathering route coverage data for route: {route_id}")]
    TraceRetrieval {
        route_id: String,
        #[source]
        source: TraceError,
    },

    #[error("There are {count} route(s) not fully covered!")]
    NotFullyCovered { count: usize },
}

pub type Result<T> = std::result::Result<T, CoverageError>;

// src/trace/dump.rs
//! Reader for route coverage dump directories.
//!
//! Each test run leaves one XML file per test in the dump directory. A file
//! holds the route models of the context with an `exchangesTotal` attribute
//! on every processor that collected statistics:
//!
//! ```xml
//! <route id="orders" exchangesTotal="3">
//!   <from uri="direct:orders"/>
//!   <choice exchangesTotal="3">
//!     <when exchangesTotal="1"><simple>${body} == 'x'</simple>
//!       <to uri="mock:x" exchangesTotal="1"/>
//!     </when>
//!   </choice>
//! </route>
//! ```
//!
//! The route element's own total is reported under `from`. Dumps of the same
//! route from several tests are merged position by position into one trace.

use super::TraceProvider;
use crate::error::TraceError;
use crate::types::TraceRecord;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};

const ROUTE: &[u8] = b"route";
const ROUTE_INPUT: &str = "from";
const ID: &[u8] = b"id";
const TOTAL: &[u8] = b"exchangesTotal";

#[derive(Debug, Clone)]
pub struct DumpDirectory {
    dir: PathBuf,
}

impl DumpDirectory {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `*.xml` files in the directory, sorted by name. A missing directory has none.
    ///
    /// # Errors
    /// Returns error if the directory exists but cannot be listed.
    pub fn dump_files(&self) -> Result<Vec<PathBuf>, TraceError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let io_err = |source| TraceError::Io {
            source,
            path: self.dir.clone(),
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "xml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl TraceProvider for DumpDirectory {
    /// One trace for `route_id`, merged over every dump file that holds it.
    fn load(&self, route_id: &str) -> Result<Vec<TraceRecord>, TraceError> {
        let mut records = Vec::new();
        for path in self.dump_files()? {
            let content = fs::read_to_string(&path).map_err(|source| TraceError::Io {
                source,
                path: path.clone(),
            })?;
            merge_run(&mut records, parse_route_dump(&path, &content, route_id)?);
        }
        Ok(records)
    }
}

/// Folds one test's records into the merged trace, position by position.
///
/// Counts add up where the step names agree. A position whose name differs
/// keeps the record seen first; records past the end of the merged trace are
/// appended.
pub fn merge_run(merged: &mut Vec<TraceRecord>, run: Vec<TraceRecord>) {
    for (idx, record) in run.into_iter().enumerate() {
        match merged.get_mut(idx) {
            Some(existing) if existing.name == record.name => {
                existing.count = existing.count.saturating_add(record.count);
            }
            Some(_) => {}
            None => merged.push(record),
        }
    }
}

/// Extracts the records of one route from the text of a dump file.
///
/// # Errors
/// Returns error on malformed XML or a non-numeric `exchangesTotal`.
pub fn parse_route_dump(
    path: &Path,
    content: &str,
    route_id: &str,
) -> Result<Vec<TraceRecord>, TraceError> {
    let mut reader = Reader::from_str(content);
    let mut records = Vec::new();
    // Open elements inside the target route, the route element included.
    let mut depth = 0usize;

    loop {
        let event = reader.read_event().map_err(|source| TraceError::Xml {
            source,
            path: path.to_path_buf(),
        })?;
        match event {
            Event::Start(e) => {
                if depth > 0 {
                    depth += 1;
                    push_record(&mut records, &e, path)?;
                } else if is_route(&e, route_id, path)? {
                    depth = 1;
                    push_record(&mut records, &e, path)?;
                }
            }
            Event::Empty(e) => {
                if depth > 0 || is_route(&e, route_id, path)? {
                    push_record(&mut records, &e, path)?;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(records)
}

fn is_route(e: &BytesStart, route_id: &str, path: &Path) -> Result<bool, TraceError> {
    if e.local_name().as_ref() != ROUTE {
        return Ok(false);
    }
    Ok(attribute(e, ID, path)?.is_some_and(|id| id == route_id))
}

fn push_record(
    records: &mut Vec<TraceRecord>,
    e: &BytesStart,
    path: &Path,
) -> Result<(), TraceError> {
    let Some(total) = attribute(e, TOTAL, path)? else {
        return Ok(());
    };
    let element = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
    let count = total
        .trim()
        .parse::<u64>()
        .map_err(|_| TraceError::InvalidCount {
            element: element.clone(),
            value: total.clone(),
            path: path.to_path_buf(),
        })?;
    let name = if element.as_bytes() == ROUTE {
        ROUTE_INPUT.to_string()
    } else {
        element
    };
    records.push(TraceRecord::new(name, count));
    Ok(())
}

fn attribute(e: &BytesStart, key: &[u8], path: &Path) -> Result<Option<String>, TraceError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| TraceError::Xml {
            source: err.into(),
            path: path.to_path_buf(),
        })?;
        if attr.key.as_ref() == key {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

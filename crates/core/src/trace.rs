//! Page-reference trace: the recorded access stream driving a simulation.
//!
//! The on-disk format is ASCII text, one reference per line, two
//! whitespace-separated non-negative integers: `<pid> <page>`. A line that
//! does not parse as two integers terminates ingestion; everything read up
//! to that point is kept. An empty file is a valid zero-reference trace.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::cache::EMPTY;
use crate::common::SimError;

/// One trace entry. The pid is carried through but unused by the policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    /// Process id recorded with the reference.
    pub pid: i64,
    /// Referenced page number.
    pub page: i64,
}

/// Ordered sequence of page references with random read access.
///
/// Random access is what lets OPTIMAL look ahead into the remaining
/// suffix; every other policy only consumes the stream in order.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    refs: Vec<PageRef>,
}

impl Trace {
    /// Wraps an already-loaded reference sequence.
    pub fn new(refs: Vec<PageRef>) -> Self {
        Self { refs }
    }

    /// Builds a trace from bare page numbers, with a fixed pid of 1.
    pub fn from_pages(pages: &[i64]) -> Self {
        Self {
            refs: pages.iter().map(|&page| PageRef { pid: 1, page }).collect(),
        }
    }

    /// Loads a trace file from disk.
    ///
    /// An unreadable file is an IO error; a malformed tail line is not
    /// (ingestion stops at the last line that parsed).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::TraceIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parses trace lines from any buffered reader.
    ///
    /// `path` is used for error reporting only.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self, SimError> {
        let mut refs = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| SimError::TraceIo {
                path: path.display().to_string(),
                source,
            })?;
            let mut fields = line.split_whitespace();
            let parsed = match (fields.next(), fields.next()) {
                (Some(pid), Some(page)) => pid
                    .parse::<i64>()
                    .ok()
                    .zip(page.parse::<i64>().ok())
                    .map(|(pid, page)| PageRef { pid, page }),
                _ => None,
            };
            match parsed {
                Some(entry) => refs.push(entry),
                // Malformed line: keep the prefix, stop ingesting.
                None => break,
            }
        }
        Ok(Self { refs })
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// True when the trace holds no references.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Reference at position `t`, if in range.
    pub fn get(&self, t: usize) -> Option<&PageRef> {
        self.refs.get(t)
    }

    /// Page number at position `t`, or [`EMPTY`] when out of range.
    pub fn page_at(&self, t: usize) -> i64 {
        self.refs.get(t).map(|r| r.page).unwrap_or(EMPTY)
    }

    /// All references, in order.
    pub fn refs(&self) -> &[PageRef] {
        &self.refs
    }
}

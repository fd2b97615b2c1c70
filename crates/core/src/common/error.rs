//! Simulator error definitions.
//!
//! Only configuration and IO problems are surfaced as errors: policy steps
//! are total functions over their input domain and always produce a hit or
//! a fault. A trace file with a malformed tail is not an error either; the
//! reader keeps the prefix it managed to parse.

use std::fmt;

/// Errors that abort a simulation before any policy step runs.
#[derive(Debug)]
pub enum SimError {
    /// The one-character policy selector did not match any known code.
    UnknownPolicyCode(char),

    /// The requested frame count is outside the supported range.
    ///
    /// Values below 1 are clamped rather than rejected; this variant is
    /// raised only when the count exceeds the hard upper bound.
    FrameCount {
        /// Frame count that was requested.
        requested: usize,
        /// Largest frame count the simulator accepts.
        max: usize,
    },

    /// The trace file could not be opened or read.
    TraceIo {
        /// Path of the trace file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnknownPolicyCode(code) => {
                write!(f, "invalid algorithm choice '{}'", code)
            }
            SimError::FrameCount { requested, max } => {
                write!(f, "number of frames too large: {} (max {})", requested, max)
            }
            SimError::TraceIo { path, source } => {
                write!(f, "cannot read trace file {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::TraceIo { source, .. } => Some(source),
            _ => None,
        }
    }
}

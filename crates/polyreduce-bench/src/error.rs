use std::io;
use std::path::PathBuf;

use polyreduce_export::ParseError;

/// Errors that abort a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A file could not be read.
    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file could not be written.
    #[error("error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A `.poly` or `.algo` file is malformed.
    #[error("error parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// `--algorithms-json` is not a JSON list of algorithms.
    #[error("error parsing --algorithms-json: {0}")]
    AlgorithmsJson(#[source] serde_json::Error),

    /// Results could not be serialized.
    #[error("error serializing results: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No algorithm to run.
    #[error("no algorithms to run")]
    NoAlgorithms,

    /// Only dimensions 1 to 4 are compiled in.
    #[error("unsupported dimension {0} (expected 1 to 4)")]
    UnsupportedDimension(usize),

    /// SVG overlays need 2-D polylines.
    #[error("--svg needs a 2-D polyline, got dimension {0}")]
    SvgDimension(usize),
}

//! Error types for sink acquisition and teardown.
//!
//! Rendering itself is infallible: a type with no registered shape
//! degrades to the `Not supported` marker, and stream write failures are
//! absorbed into the sink's sticky error state. Errors therefore arise
//! at exactly two points, both outside the render path:
//!
//! - acquiring a file sink ([`Error::SinkUnavailable`])
//! - flushing a sink via [`Sink::finish`](crate::Sink::finish)
//!   ([`Error::Io`])
//!
//! ## Examples
//!
//! ```rust
//! use shapefmt::{Error, Sink};
//!
//! let err = Sink::file("/no/such/directory/out.log").unwrap_err();
//! assert!(matches!(err, Error::SinkUnavailable { .. }));
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised outside the render path.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested file sink could not be opened for writing.
    ///
    /// Raised at acquisition time, before any rendering happens; there
    /// is no retry and no fallback sink.
    #[error("sink unavailable: failed to open {} for writing", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write or flush on a stream sink failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a [`Error::SinkUnavailable`] for the given path.
    pub fn sink_unavailable(path: &Path, source: io::Error) -> Self {
        Error::SinkUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

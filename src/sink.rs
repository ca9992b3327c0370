//! Output destinations for rendered text.
//!
//! A [`Sink`] is an append-only text destination owned by the caller for
//! its entire lifetime. The formatter only ever appends to it — it never
//! opens, closes, or reads the sink — so acquisition (and its single
//! failure mode, [`Error::SinkUnavailable`](crate::Error)) is strictly a
//! setup-time concern.
//!
//! Three destinations are available:
//!
//! - [`Sink::buffer`] — accumulates into an in-memory `String`
//! - [`Sink::console`] — writes to standard output
//! - [`Sink::file`] — writes to a buffered file, failing fast if the
//!   path cannot be opened
//!
//! Stream sinks absorb mid-render write failures the way C++ stream
//! state does: the first error is stored, later writes become no-ops,
//! and rendering still completes. [`Sink::finish`] flushes and surfaces
//! the stored error.
//!
//! ## Examples
//!
//! ```rust
//! use shapefmt::{render, Sink};
//!
//! let mut sink = Sink::buffer();
//! render(&vec![1, 2, 3], &mut sink);
//! assert_eq!(sink.into_string(), "[1, 2, 3]");
//! ```

use crate::{Error, RenderOptions, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
enum SinkKind {
    Buffer(String),
    Console(io::Stdout),
    File(BufWriter<File>),
}

/// An append-only destination for rendered text.
///
/// The sink is created by the caller, passed by mutable reference into
/// render calls, and released when dropped (or explicitly via
/// [`Sink::finish`]). Sequential use from a single thread is assumed;
/// concurrent writers must be serialized by the caller.
#[derive(Debug)]
pub struct Sink {
    kind: SinkKind,
    options: RenderOptions,
    depth: usize,
    error: Option<io::Error>,
}

impl Sink {
    fn new(kind: SinkKind) -> Self {
        Sink {
            kind,
            options: RenderOptions::default(),
            depth: 0,
            error: None,
        }
    }

    /// Creates a sink that accumulates text in memory.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapefmt::Sink;
    ///
    /// let mut sink = Sink::buffer();
    /// sink.write_str("hello");
    /// assert_eq!(sink.into_string(), "hello");
    /// ```
    #[must_use]
    pub fn buffer() -> Self {
        // 256 bytes covers typical single-value renders without growing.
        Sink::new(SinkKind::Buffer(String::with_capacity(256)))
    }

    /// Creates a sink that writes to standard output.
    #[must_use]
    pub fn console() -> Self {
        Sink::new(SinkKind::Console(io::stdout()))
    }

    /// Creates a sink that writes to the file at `path`, truncating any
    /// existing content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SinkUnavailable`] if the path cannot be opened
    /// for writing. The failure surfaces immediately; there is no
    /// fallback sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapefmt::Sink;
    ///
    /// let result = Sink::file("/nonexistent-dir/out.log");
    /// assert!(result.is_err());
    /// ```
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|source| Error::sink_unavailable(path, source))?;
        Ok(Sink::new(SinkKind::File(BufWriter::new(file))))
    }

    /// Attaches rendering options to this sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapefmt::{to_string_with_options, RenderOptions};
    ///
    /// let options = RenderOptions::new().with_max_depth(1);
    /// let nested = vec![vec![1, 2], vec![3]];
    /// assert_eq!(to_string_with_options(&nested, options), "[[..., ...], [...]]");
    /// ```
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Appends a string, ignoring it if a previous write already failed.
    pub fn write_str(&mut self, s: &str) {
        if self.error.is_some() {
            return;
        }
        let result = match &mut self.kind {
            SinkKind::Buffer(buf) => {
                buf.push_str(s);
                Ok(())
            }
            SinkKind::Console(out) => out.write_all(s.as_bytes()),
            SinkKind::File(file) => file.write_all(s.as_bytes()),
        };
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    /// Appends formatted text, ignoring it if a previous write failed.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let result = match &mut self.kind {
            // A formatting failure here means a misbehaving Display impl;
            // it feeds the same sticky state as a stream write failure.
            SinkKind::Buffer(buf) => fmt::Write::write_fmt(buf, args)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e)),
            SinkKind::Console(out) => out.write_fmt(args),
            SinkKind::File(file) => file.write_fmt(args),
        };
        if let Err(e) = result {
            self.error = Some(e);
        }
    }

    /// Enters one level of nested rendering. Returns `false` once the
    /// configured depth limit is reached.
    pub(crate) fn descend(&mut self) -> bool {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return false;
            }
        }
        self.depth += 1;
        true
    }

    /// Leaves one level of nested rendering.
    pub(crate) fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Flushes the sink and surfaces any write error absorbed during
    /// rendering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a write failed mid-render or the final
    /// flush fails. Buffer sinks never fail.
    pub fn finish(mut self) -> Result<()> {
        if let Some(e) = self.error.take() {
            return Err(Error::Io(e.to_string()));
        }
        let result = match &mut self.kind {
            SinkKind::Buffer(_) => Ok(()),
            SinkKind::Console(out) => out.flush(),
            SinkKind::File(file) => file.flush(),
        };
        result.map_err(|e| Error::Io(e.to_string()))
    }

    /// Consumes the sink and returns the buffered text.
    ///
    /// Stream sinks (console, file) buffer nothing here and return an
    /// empty string.
    #[must_use]
    pub fn into_string(self) -> String {
        match self.kind {
            SinkKind::Buffer(buf) => buf,
            SinkKind::Console(_) | SinkKind::File(_) => String::new(),
        }
    }
}

//! Variadic convenience entry points.
//!
//! Rust has no variadic functions, so the "print many values" helpers
//! are declarative macros. Each argument may be of a different type;
//! every one is rendered through [`render`](crate::render()) with its own
//! shape.

/// Renders each argument to the sink, separated by a single space.
///
/// No trailing separator and no trailing newline are written; invoking
/// with no values writes nothing.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{print_all, Sink};
///
/// let mut sink = Sink::buffer();
/// print_all!(&mut sink, 42, "hello", vec![1, 2]);
/// assert_eq!(sink.into_string(), "42 \"hello\" [1, 2]");
/// ```
#[macro_export]
macro_rules! print_all {
    ($sink:expr $(,)?) => {{
        let _: &mut $crate::Sink = $sink;
    }};
    ($sink:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let sink: &mut $crate::Sink = $sink;
        $crate::render(&$first, sink);
        $(
            sink.write_str(" ");
            $crate::render(&$rest, sink);
        )*
    }};
}

/// Renders each argument to the sink with `sep` between values and a
/// trailing line break after the last. With no values only the line
/// break is written.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{print_joined, Sink};
///
/// let mut sink = Sink::buffer();
/// print_joined!(&mut sink, " | ", 1, true, "x");
/// assert_eq!(sink.into_string(), "1 | true | \"x\"\n");
/// ```
#[macro_export]
macro_rules! print_joined {
    ($sink:expr, $sep:expr $(,)?) => {{
        let sink: &mut $crate::Sink = $sink;
        let _: &str = $sep;
        sink.write_str("\n");
    }};
    ($sink:expr, $sep:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let sink: &mut $crate::Sink = $sink;
        let sep: &str = $sep;
        $crate::render(&$first, sink);
        $(
            sink.write_str(sep);
            $crate::render(&$rest, sink);
        )*
        sink.write_str("\n");
    }};
}

//! # shapefmt
//!
//! A type-directed debug formatter: render any value of statically known
//! shape — scalar, text, sequence, mapping, pair, optional reference, or
//! any nesting of those — as canonical human-readable text, without
//! writing per-type printing code.
//!
//! ## How it works
//!
//! Every participating type carries a compile-time [`Shape`] through the
//! [`Render`] trait. The formatter applies the rule matching the shape
//! and recurses into element, key/value, pair, and referent positions,
//! re-classifying each nested type independently. Dispatch is resolved
//! once per distinct type by monomorphization, not per call, and a
//! sequence of mappings of sequences renders correctly with zero
//! combination-specific code.
//!
//! ## Key Features
//!
//! - **Zero per-type code**: standard collections, tuples, strings, and
//!   `Option` render out of the box through arbitrary nesting
//! - **Total**: unclassifiable types degrade to a `Not supported`
//!   marker instead of failing — rendering never errors
//! - **Explicit sinks**: output goes to a caller-owned [`Sink`] (buffer,
//!   console, or file); no global stream state
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use shapefmt::to_string;
//! use std::collections::BTreeMap;
//!
//! assert_eq!(to_string(&42), "42");
//! assert_eq!(to_string("hello"), "\"hello\"");
//! assert_eq!(to_string(&vec![1, 2, 3]), "[1, 2, 3]");
//! assert_eq!(to_string(&("key", 100)), "(\"key\", 100)");
//!
//! let mut map = BTreeMap::new();
//! map.insert(1, "one");
//! map.insert(2, "two");
//! assert_eq!(to_string(&map), "{1: \"one\", 2: \"two\"}");
//! ```
//!
//! ## Rendering to a file
//!
//! ```rust,no_run
//! use shapefmt::{render, Sink};
//!
//! fn main() -> shapefmt::Result<()> {
//!     let mut sink = Sink::file("diagnostics.log")?;
//!     render(&vec![("load", 0.82), ("temp", 41.5)], &mut sink);
//!     sink.finish()
//! }
//! ```
//!
//! ## Printing several values at once
//!
//! ```rust
//! use shapefmt::{print_all, Sink};
//!
//! let mut sink = Sink::buffer();
//! print_all!(&mut sink, "vec:", vec![1, 2], "pair:", (3, 4));
//! assert_eq!(sink.into_string(), "\"vec:\" [1, 2] \"pair:\" (3, 4)");
//! ```
//!
//! ## Limitations
//!
//! This is a diagnostic rendering, not a serialization format: text is
//! emitted with no escaping, unordered-map iteration order is not
//! normalized, addresses in `<void*: ...>` output are not stable, and
//! output is not guaranteed stable across crate versions.

pub mod error;
pub mod macros;
pub mod options;
pub mod render;
pub mod shape;
pub mod sink;

pub use error::{Error, Result};
pub use options::RenderOptions;
pub use render::Render;
pub use shape::{shape_of, Shape};
pub use sink::Sink;

/// Renders one value to one sink.
///
/// Total over every type implementing [`Render`]: unclassifiable types
/// render the `Not supported` marker, and stream write failures are
/// absorbed by the sink, so this never reports an error.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{render, Sink};
///
/// let mut sink = Sink::buffer();
/// render(&Some(Some(7)), &mut sink);
/// assert_eq!(sink.into_string(), "「7」");
/// ```
pub fn render<T>(value: &T, sink: &mut Sink)
where
    T: ?Sized + Render,
{
    value.render_to(sink);
}

/// Renders one value to a fresh in-memory buffer and returns the text.
///
/// # Examples
///
/// ```rust
/// use shapefmt::to_string;
///
/// assert_eq!(to_string(&vec![vec![1], vec![2, 3]]), "[[1], [2, 3]]");
/// ```
#[must_use]
pub fn to_string<T>(value: &T) -> String
where
    T: ?Sized + Render,
{
    to_string_with_options(value, RenderOptions::default())
}

/// Renders one value to a string with custom options.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{to_string_with_options, RenderOptions};
///
/// let nested = vec![vec![vec![1, 2]]];
/// let options = RenderOptions::new().with_max_depth(1);
/// assert_eq!(to_string_with_options(&nested, options), "[[...]]");
/// ```
#[must_use]
pub fn to_string_with_options<T>(value: &T, options: RenderOptions) -> String
where
    T: ?Sized + Render,
{
    let mut sink = Sink::buffer().with_options(options);
    value.render_to(&mut sink);
    sink.into_string()
}

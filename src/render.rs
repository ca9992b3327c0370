//! The recursive formatter.
//!
//! This module provides the [`Render`] trait, the single entry point for
//! turning a value into its canonical text form. Each implementation
//! covers one [`Shape`]; composite shapes (sequences, mappings, pairs,
//! references) recurse by calling [`Render::render_to`] on their nested
//! values, whose types are re-classified independently. A
//! `Vec<BTreeMap<i32, Vec<f64>>>` therefore renders correctly with no
//! code path specific to that combination.
//!
//! ## Output forms
//!
//! | Shape     | Output                                   |
//! |-----------|------------------------------------------|
//! | Scalar    | `42`, `3.5`, `true`, `A`                 |
//! | Text      | `"hello"`                                |
//! | Sequence  | `[1, 2, 3]`                              |
//! | Mapping   | `{1: "one", 2: "two"}`                   |
//! | Pair      | `("key", 100)`                           |
//! | Reference | `nullptr`, `「...」`, `<void*: 0x...>`    |
//! | Unknown   | `Not supported`                          |
//!
//! Text content is emitted literally between the quotes, with no
//! escaping: the output is a diagnostic rendering, not a re-parseable
//! format.
//!
//! ## Opting in a foreign type
//!
//! Classification is total over every type that implements [`Render`].
//! A type with no natural shape participates through the trait's
//! provided defaults:
//!
//! ```rust
//! use shapefmt::{to_string, Render};
//!
//! struct Opaque;
//! impl Render for Opaque {}
//!
//! assert_eq!(to_string(&Opaque), "Not supported");
//! ```

use crate::{Shape, Sink};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::{c_void, CStr, CString};

/// Marker emitted for values whose type has no registered shape.
pub const UNKNOWN_MARKER: &str = "Not supported";

/// Marker emitted for absent references.
pub const NULL_MARKER: &str = "nullptr";

/// Marker emitted in place of a nested value once the configured
/// recursion depth limit is reached.
pub const DEPTH_MARKER: &str = "...";

/// A value that can be rendered as canonical diagnostic text.
///
/// The associated [`SHAPE`](Render::SHAPE) constant classifies the type
/// at compile time; [`render_to`](Render::render_to) emits the matching
/// textual form. Both have provided defaults that classify the type as
/// [`Shape::Unknown`] and emit the `Not supported` marker, so an empty
/// `impl Render for MyType {}` is enough to let an unclassifiable type
/// participate.
///
/// Rendering is infallible and never mutates the value: two structurally
/// equal values of the same type always produce identical text.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{Render, Sink};
///
/// let mut sink = Sink::buffer();
/// vec![(1, "one"), (2, "two")].render_to(&mut sink);
/// assert_eq!(sink.into_string(), r#"[(1, "one"), (2, "two")]"#);
/// ```
pub trait Render {
    /// The compile-time shape of this type.
    const SHAPE: Shape = Shape::Unknown;

    /// Appends this value's text form to `sink`.
    fn render_to(&self, sink: &mut Sink) {
        sink.write_str(UNKNOWN_MARKER);
    }
}

/// Renders a nested value, honoring the sink's recursion depth limit.
///
/// All composite implementations recurse through this single choke
/// point; once the limit is reached the nested value renders as `...`
/// and recursion stops.
fn render_nested<T: Render + ?Sized>(value: &T, sink: &mut Sink) {
    if !sink.descend() {
        sink.write_str(DEPTH_MARKER);
        return;
    }
    value.render_to(sink);
    sink.ascend();
}

// --- Scalar ---------------------------------------------------------------

macro_rules! impl_render_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                const SHAPE: Shape = Shape::Scalar;

                #[inline]
                fn render_to(&self, sink: &mut Sink) {
                    sink.write_fmt(format_args!("{}", self));
                }
            }
        )*
    };
}

impl_render_scalar!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// --- Text -----------------------------------------------------------------

#[inline]
fn render_text(content: &str, sink: &mut Sink) {
    sink.write_str("\"");
    sink.write_str(content);
    sink.write_str("\"");
}

impl Render for str {
    const SHAPE: Shape = Shape::Text;

    fn render_to(&self, sink: &mut Sink) {
        render_text(self, sink);
    }
}

impl Render for String {
    const SHAPE: Shape = Shape::Text;

    fn render_to(&self, sink: &mut Sink) {
        render_text(self, sink);
    }
}

impl Render for Cow<'_, str> {
    const SHAPE: Shape = Shape::Text;

    fn render_to(&self, sink: &mut Sink) {
        render_text(self, sink);
    }
}

impl Render for CStr {
    const SHAPE: Shape = Shape::Text;

    fn render_to(&self, sink: &mut Sink) {
        // Invalid UTF-8 degrades to replacement characters rather than
        // failing; this is a diagnostic rendering.
        render_text(&self.to_string_lossy(), sink);
    }
}

impl Render for CString {
    const SHAPE: Shape = Shape::Text;

    fn render_to(&self, sink: &mut Sink) {
        self.as_c_str().render_to(sink);
    }
}

// --- Sequence -------------------------------------------------------------

fn render_sequence<'a, T, I>(elements: I, sink: &mut Sink)
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    sink.write_str("[");
    let mut first = true;
    for element in elements {
        if !first {
            sink.write_str(", ");
        }
        render_nested(element, sink);
        first = false;
    }
    sink.write_str("]");
}

macro_rules! impl_render_sequence {
    ($($container:ident),* $(,)?) => {
        $(
            impl<T: Render> Render for $container<T> {
                const SHAPE: Shape = Shape::Sequence;

                fn render_to(&self, sink: &mut Sink) {
                    render_sequence(self.iter(), sink);
                }
            }
        )*
    };
}

impl_render_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Render> Render for [T] {
    const SHAPE: Shape = Shape::Sequence;

    fn render_to(&self, sink: &mut Sink) {
        render_sequence(self.iter(), sink);
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    const SHAPE: Shape = Shape::Sequence;

    fn render_to(&self, sink: &mut Sink) {
        render_sequence(self.iter(), sink);
    }
}

// Sets render as sequences: an ordered walk over single values, no
// key/value split. Hash iteration order is implementation-defined and
// not normalized.
impl<T: Render, S> Render for HashSet<T, S> {
    const SHAPE: Shape = Shape::Sequence;

    fn render_to(&self, sink: &mut Sink) {
        render_sequence(self.iter(), sink);
    }
}

// --- Mapping --------------------------------------------------------------

fn render_mapping<'a, K, V, I>(entries: I, sink: &mut Sink)
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    sink.write_str("{");
    let mut first = true;
    for (key, value) in entries {
        if !first {
            sink.write_str(", ");
        }
        render_nested(key, sink);
        sink.write_str(": ");
        render_nested(value, sink);
        first = false;
    }
    sink.write_str("}");
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::Mapping;

    fn render_to(&self, sink: &mut Sink) {
        render_mapping(self.iter(), sink);
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::Mapping;

    fn render_to(&self, sink: &mut Sink) {
        render_mapping(self.iter(), sink);
    }
}

impl<K: Render, V: Render, S> Render for indexmap::IndexMap<K, V, S> {
    const SHAPE: Shape = Shape::Mapping;

    fn render_to(&self, sink: &mut Sink) {
        render_mapping(self.iter(), sink);
    }
}

// --- Pair -----------------------------------------------------------------

impl<A: Render, B: Render> Render for (A, B) {
    const SHAPE: Shape = Shape::Pair;

    fn render_to(&self, sink: &mut Sink) {
        sink.write_str("(");
        render_nested(&self.0, sink);
        sink.write_str(", ");
        render_nested(&self.1, sink);
        sink.write_str(")");
    }
}

// --- Reference ------------------------------------------------------------

impl<T: Render> Render for Option<T> {
    const SHAPE: Shape = Shape::Reference;

    fn render_to(&self, sink: &mut Sink) {
        let Some(referent) = self else {
            sink.write_str(NULL_MARKER);
            return;
        };
        match T::SHAPE {
            // Multi-level indirection is flagged with corner brackets so
            // the nesting level stays visible in the output.
            Shape::Reference => {
                sink.write_str("「");
                render_nested(referent, sink);
                sink.write_str("」");
            }
            Shape::Unknown => {
                sink.write_fmt(format_args!("<unknown*: {:p}>", referent as *const T));
            }
            _ => render_nested(referent, sink),
        }
    }
}

macro_rules! impl_render_void_ptr {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                const SHAPE: Shape = Shape::Reference;

                fn render_to(&self, sink: &mut Sink) {
                    if self.is_null() {
                        sink.write_str(NULL_MARKER);
                    } else {
                        // Diagnostic only: addresses are neither portable
                        // nor stable across runs.
                        sink.write_fmt(format_args!("<void*: {:p}>", *self));
                    }
                }
            }
        )*
    };
}

impl_render_void_ptr!(*const c_void, *mut c_void);

// --- Delegation -----------------------------------------------------------

impl<T: Render + ?Sized> Render for &T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn render_to(&self, sink: &mut Sink) {
        (**self).render_to(sink);
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn render_to(&self, sink: &mut Sink) {
        (**self).render_to(sink);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    const SHAPE: Shape = T::SHAPE;

    #[inline]
    fn render_to(&self, sink: &mut Sink) {
        (**self).render_to(sink);
    }
}

//! Shape classification for renderable types.
//!
//! Every type that participates in rendering belongs to exactly one
//! [`Shape`]. Classification happens at compile time through the
//! [`Render::SHAPE`](crate::Render::SHAPE) associated constant, so there is
//! no runtime dispatch cost: the formatter asks the *type*, not the value.
//!
//! ## Categories
//!
//! In priority order (the order in which overlaps are resolved):
//!
//! 1. **Scalar** — numeric and boolean primitives, plus `char`
//! 2. **Text** — `str`, `String`, `Cow<str>`, `CStr`, `CString`
//! 3. **Sequence** — ordered homogeneous collections (`Vec`, slices,
//!    arrays, `VecDeque`, `LinkedList`, sets)
//! 4. **Mapping** — associative containers (`BTreeMap`, `HashMap`,
//!    `IndexMap`)
//! 5. **Pair** — two-element tuples `(A, B)`
//! 6. **Reference** — `Option<T>` and raw void pointers
//! 7. **Unknown** — everything else that opts in (see
//!    [`Render`](crate::Render))
//!
//! The classic sequence-vs-text overlap (a fixed-size character buffer)
//! does not arise in Rust: string types are distinct from `[char; N]`,
//! which classifies as a Sequence and renders element-wise.
//!
//! ## Examples
//!
//! ```rust
//! use shapefmt::{shape_of, Shape};
//!
//! assert_eq!(shape_of::<i32>(), Shape::Scalar);
//! assert_eq!(shape_of::<String>(), Shape::Text);
//! assert_eq!(shape_of::<Vec<u8>>(), Shape::Sequence);
//! assert_eq!(shape_of::<Option<i32>>(), Shape::Reference);
//! ```

use crate::Render;
use std::fmt;

/// The rendering category of a static type.
///
/// Shapes are mutually exclusive: exactly one applies to any given type,
/// and classification is total — [`Shape::Unknown`] is the catch-all,
/// never an error.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{shape_of, Shape};
///
/// assert_eq!(shape_of::<(i32, bool)>(), Shape::Pair);
/// assert_eq!(shape_of::<&str>(), Shape::Text);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Numeric or boolean primitive, rendered in its native text form.
    Scalar,
    /// String-like content, rendered wrapped in double quotes.
    Text,
    /// Ordered homogeneous collection, rendered as `[e0, e1, ...]`.
    Sequence,
    /// Associative container, rendered as `{k0: v0, k1: v1, ...}`.
    Mapping,
    /// Two positionally-accessed components, rendered as `(first, second)`.
    Pair,
    /// Possibly-absent wrapper around one referent type.
    Reference,
    /// Anything unclassified, rendered as the `Not supported` marker.
    Unknown,
}

impl Shape {
    /// Returns `true` for shapes whose rendering recurses into nested
    /// values (Sequence, Mapping, Pair, Reference).
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Shape::Sequence | Shape::Mapping | Shape::Pair | Shape::Reference
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Scalar => "scalar",
            Shape::Text => "text",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
            Shape::Pair => "pair",
            Shape::Reference => "reference",
            Shape::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Returns the [`Shape`] of a type without constructing a value.
///
/// This is a pure, compile-time mapping: calling it twice for the same `T`
/// always yields the same shape.
///
/// # Examples
///
/// ```rust
/// use shapefmt::{shape_of, Shape};
/// use std::collections::BTreeMap;
///
/// assert_eq!(shape_of::<BTreeMap<i32, String>>(), Shape::Mapping);
/// assert_eq!(shape_of::<[f64; 4]>(), Shape::Sequence);
/// ```
#[must_use]
pub const fn shape_of<T: Render + ?Sized>() -> Shape {
    T::SHAPE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
    use std::ffi::c_void;

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(shape_of::<i8>(), Shape::Scalar);
        assert_eq!(shape_of::<u64>(), Shape::Scalar);
        assert_eq!(shape_of::<f64>(), Shape::Scalar);
        assert_eq!(shape_of::<bool>(), Shape::Scalar);
        assert_eq!(shape_of::<char>(), Shape::Scalar);
    }

    #[test]
    fn test_text_shapes() {
        assert_eq!(shape_of::<str>(), Shape::Text);
        assert_eq!(shape_of::<String>(), Shape::Text);
        assert_eq!(shape_of::<&str>(), Shape::Text);
        assert_eq!(shape_of::<Cow<'_, str>>(), Shape::Text);
        assert_eq!(shape_of::<std::ffi::CString>(), Shape::Text);
    }

    #[test]
    fn test_sequence_shapes() {
        assert_eq!(shape_of::<Vec<i32>>(), Shape::Sequence);
        assert_eq!(shape_of::<VecDeque<String>>(), Shape::Sequence);
        assert_eq!(shape_of::<LinkedList<f32>>(), Shape::Sequence);
        assert_eq!(shape_of::<[u8; 16]>(), Shape::Sequence);
        assert_eq!(shape_of::<&[u8]>(), Shape::Sequence);
        assert_eq!(shape_of::<BTreeSet<i32>>(), Shape::Sequence);
        assert_eq!(shape_of::<HashSet<i32>>(), Shape::Sequence);
        // Character arrays are sequences of scalars, not text.
        assert_eq!(shape_of::<[char; 3]>(), Shape::Sequence);
    }

    #[test]
    fn test_mapping_shapes() {
        assert_eq!(shape_of::<BTreeMap<i32, String>>(), Shape::Mapping);
        assert_eq!(shape_of::<HashMap<String, Vec<i32>>>(), Shape::Mapping);
        assert_eq!(shape_of::<indexmap::IndexMap<String, i32>>(), Shape::Mapping);
    }

    #[test]
    fn test_pair_and_reference_shapes() {
        assert_eq!(shape_of::<(i32, String)>(), Shape::Pair);
        assert_eq!(shape_of::<Option<i32>>(), Shape::Reference);
        assert_eq!(shape_of::<Option<Option<i32>>>(), Shape::Reference);
        assert_eq!(shape_of::<*const c_void>(), Shape::Reference);
    }

    #[test]
    fn test_delegation_preserves_shape() {
        assert_eq!(shape_of::<&Vec<i32>>(), shape_of::<Vec<i32>>());
        assert_eq!(shape_of::<Box<str>>(), shape_of::<str>());
        assert_eq!(
            shape_of::<&BTreeMap<i32, i32>>(),
            shape_of::<BTreeMap<i32, i32>>()
        );
    }

    #[test]
    fn test_composite_predicate() {
        assert!(Shape::Sequence.is_composite());
        assert!(Shape::Reference.is_composite());
        assert!(!Shape::Scalar.is_composite());
        assert!(!Shape::Unknown.is_composite());
    }
}

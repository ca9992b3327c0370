//! Configuration options for rendering.
//!
//! [`RenderOptions`] controls the one behavior the formatter leaves to
//! the caller: how deep recursion may go.
//!
//! By default recursion is unbounded, matching the formatter's
//! termination argument — every finite, non-self-referential static type
//! bottoms out on its own. Data that nests deliberately deep (or a
//! reference chain the caller cannot vouch for) can opt into a limit;
//! at the limit a nested value renders as `...` and recursion stops.
//!
//! ## Examples
//!
//! ```rust
//! use shapefmt::{to_string_with_options, RenderOptions};
//!
//! let deep = vec![vec![vec![1]]];
//!
//! let options = RenderOptions::new().with_max_depth(2);
//! assert_eq!(to_string_with_options(&deep, options), "[[[...]]]");
//!
//! // Unbounded by default.
//! assert_eq!(to_string_with_options(&deep, RenderOptions::new()), "[[[1]]]");
//! ```

/// Configuration for render calls, attached to a sink via
/// [`Sink::with_options`](crate::Sink::with_options).
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Maximum nesting depth to recurse into, or `None` for unbounded.
    pub max_depth: Option<usize>,
}

impl RenderOptions {
    /// Creates default options (unbounded recursion).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapefmt::RenderOptions;
    ///
    /// let options = RenderOptions::new();
    /// assert!(options.max_depth.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    ///
    /// Values nested deeper than `limit` levels below the top-level
    /// value render as `...`. A limit of `0` collapses every nested
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapefmt::RenderOptions;
    ///
    /// let options = RenderOptions::new().with_max_depth(8);
    /// assert_eq!(options.max_depth, Some(8));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

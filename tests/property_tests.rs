//! Property-based tests for the rendering rules.
//!
//! These verify the formatter's algebra across generated inputs: scalar
//! output matches the native text form, text is quoted verbatim, and
//! composite renderings are exactly the join of their parts.

use proptest::prelude::*;
use shapefmt::to_string;

proptest! {
    #[test]
    fn prop_integers_match_native_form(n in any::<i64>()) {
        prop_assert_eq!(to_string(&n), n.to_string());
    }

    #[test]
    fn prop_unsigned_match_native_form(n in any::<u64>()) {
        prop_assert_eq!(to_string(&n), n.to_string());
    }

    #[test]
    fn prop_floats_match_native_form(x in any::<f64>()) {
        prop_assert_eq!(to_string(&x), x.to_string());
    }

    #[test]
    fn prop_text_is_quoted_verbatim(s in ".*") {
        prop_assert_eq!(to_string(s.as_str()), format!("\"{}\"", s));
    }

    #[test]
    fn prop_sequence_is_join_of_elements(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let parts: Vec<String> = v.iter().map(|n| to_string(n)).collect();
        let expected = format!("[{}]", parts.join(", "));
        prop_assert_eq!(to_string(&v), expected);
    }

    #[test]
    fn prop_pair_is_parenthesized_parts(a in any::<i32>(), b in any::<bool>()) {
        let expected = format!("({}, {})", to_string(&a), to_string(&b));
        prop_assert_eq!(to_string(&(a, b)), expected);
    }

    #[test]
    fn prop_reference_dereferences_or_nullptr(opt in proptest::option::of(any::<i32>())) {
        let expected = match opt {
            Some(n) => to_string(&n),
            None => "nullptr".to_string(),
        };
        prop_assert_eq!(to_string(&opt), expected);
    }

    #[test]
    fn prop_rendering_is_deterministic(v in prop::collection::vec(".*", 0..8)) {
        prop_assert_eq!(to_string(&v), to_string(&v));
    }
}

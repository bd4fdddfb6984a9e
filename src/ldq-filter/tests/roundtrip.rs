//! Round-trip and fuzz properties across the builder, parser and optimizer
//!
//! Trees are generated exclusively through the builder API with bounded
//! depth and branching, then rendered and pushed back through the parser.

use ldq_filter::Optimize;
use ldq_parser::FilterParser;
use ldq_shared::Filter;
use proptest::prelude::*;

/// Leaves over token-safe attribute and value alphabets: these render to
/// text the grammar can reparse losslessly.
fn safe_leaf() -> impl Strategy<Value = Filter> {
    ("[a-zA-Z][a-zA-Z0-9]{0,7}", "[a-zA-Z0-9]{1,8}", 0..5u8).prop_map(
        |(attribute, value, kind)| {
            let builder = Filter::new(attribute);
            match kind {
                0 => builder.eq(&value),
                1 => builder.apx(&value),
                2 => builder.ge(&value),
                3 => builder.le(&value),
                _ => builder.is_present(),
            }
        },
    )
}

fn safe_tree() -> impl Strategy<Value = Filter> {
    safe_leaf().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
            inner.prop_map(Filter::not),
        ]
    })
}

/// Leaves with unconstrained values, including structural characters and
/// whitespace the escaper does not cover.
fn wild_leaf() -> impl Strategy<Value = Filter> {
    ("[a-zA-Z][a-zA-Z0-9]{0,7}", ".{0,12}", 0..4u8).prop_map(|(attribute, value, kind)| {
        let builder = Filter::new(attribute);
        match kind {
            0 => builder.eq(&value),
            1 => builder.apx(&value),
            2 => builder.ge(&value),
            _ => builder.le(&value),
        }
    })
}

fn wild_tree() -> impl Strategy<Value = Filter> {
    wild_leaf().prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.and(b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a.or(b)),
            inner.prop_map(Filter::not),
        ]
    })
}

proptest! {
    #[test]
    fn prop_builder_trees_round_trip(filter in safe_tree()) {
        let rendered = filter.to_string();
        let reparsed = FilterParser::new()
            .parse(&rendered)
            .expect("builder output must reparse");
        prop_assert_eq!(reparsed.to_string(), rendered);
        prop_assert_eq!(reparsed, filter);
    }

    #[test]
    fn prop_parse_never_panics_on_builder_output(filter in wild_tree()) {
        // Unescapable characters in values may make the rendering
        // unparseable, but the outcome is always a structured result.
        let rendered = filter.to_string();
        let _ = FilterParser::new().parse(&rendered);
    }

    #[test]
    fn prop_optimize_is_total(filter in safe_tree()) {
        let optimized = filter.optimize();
        let rendered = optimized.to_string();
        prop_assert!(rendered.starts_with('('));
        prop_assert!(rendered.ends_with(')'));
    }
}

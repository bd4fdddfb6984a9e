//! # ldq-filter
//!
//! A canonicalization pass for LDAPQ filter expressions that operates at
//! the AST level, flattening nested same-operator groups and merging
//! adjacent groups into a deterministic, minimal tree shape.
//!
//! This crate provides:
//! - Associativity flattening ("relaxation") of nested `&`/`|`/`!` groups
//! - Canonical ordering and merging of adjacent same-operator groups
//! - Convenience functions that combine parsing and canonicalization

pub mod optimizer;

pub use optimizer::{FilterOptimizer, Optimize};

/// Convenience function to parse a filter string and canonicalize the
/// resulting tree
pub fn optimize_filter(filter: &str) -> anyhow::Result<Filter> {
    let parser = FilterParser::new();
    let parsed = parser.parse(filter)?;
    Ok(parsed.optimize())
}

/// Re-export commonly used types from ldq-shared
pub use ldq_shared::{Filter, FilterList, Operator};
pub use ldq_shared::Result;

/// Re-export the parser entry point for callers of [`optimize_filter`]
pub use ldq_parser::FilterParser;

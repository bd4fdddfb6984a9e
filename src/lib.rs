//! # ldapq
//!
//! A builder and parser for LDAP search filter expressions (the RFC 4515
//! subset of AND/OR/NOT composition over `=`, `~=`, `>=` and `<=`
//! comparisons), with a canonicalizing optimizer.
//!
//! This crate is a facade over the workspace members:
//!
//! - [`ldq_shared`]: the filter tree and the fluent builder
//! - [`ldq_parser`]: tokenizer, combinator engine and grammar
//! - [`ldq_filter`]: AST-level canonicalization
//!
//! # Quick Start
//!
//! Building a filter and rendering it:
//!
//! ```rust
//! use ldq::Filter;
//!
//! let filter = Filter::new("objectClass")
//!     .eq("printer")
//!     .and(Filter::new("location").is_present());
//!
//! assert_eq!(filter.to_string(), "(&(objectClass=printer)(location=*))");
//! ```
//!
//! Parsing a filter back and canonicalizing it:
//!
//! ```rust
//! use ldq::{parse, Optimize};
//!
//! let filter = parse("(&(&(a=1)(b=2))(c=3))")?;
//! assert_eq!(filter.optimize().to_string(), "(&(a=1)(b=2)(c=3))");
//! # Ok::<(), ldq::ParseError>(())
//! ```

// Re-export the filter model
pub use ldq_shared::{
    escape_value, Comparator, Comparison, Filter, FilterBuilder, FilterList, Operator,
};

// Re-export the parsing surface
pub use ldq_parser::{tokenize, FilterParser, ParseError, Token, TokenKind, TokenStream};

// Re-export canonicalization
pub use ldq_filter::{optimize_filter, FilterOptimizer, Optimize};

/// Parses a filter string into a [`Filter`] tree
pub fn parse(input: &str) -> Result<Filter, ParseError> {
    FilterParser::new().parse(input)
}

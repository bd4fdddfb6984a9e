//! ldq-shared: Shared filter model for LDAPQ crates
//!
//! This crate contains the filter expression tree and the vocabularies it is
//! built from, used across the LDAPQ crates to avoid code duplication and
//! ensure consistency.
//!
//! # Features
//!
//! - **Filter AST**: [`Filter`], [`Comparison`] and [`FilterList`] nodes
//! - **Fluent Builder**: `Filter::new("attr").eq("value")` style construction
//! - **Canonical Rendering**: `Display` produces the RFC 4515 textual form
//! - **Value Escaping**: structural characters are escaped at build time

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

pub mod escape;
pub mod filter;

pub use escape::escape_value;
pub use filter::{Comparator, Comparison, Filter, FilterBuilder, FilterList, Operator};

/// Result type alias for LDAPQ operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

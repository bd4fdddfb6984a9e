//! ldq-parser: Parser for LDAP search filter strings
//!
//! This crate converts filter strings in the RFC 4515 subset supported by
//! LDAPQ into [`Filter`](ldq_shared::Filter) trees. Parsing is split into
//! the classic stages: a tokenizer, an immutable token stream, a small
//! backtracking parser-combinator engine, and the filter grammar expressed
//! in terms of that engine.
//!
//! # Features
//!
//! - **Full Subset Support**: AND/OR/NOT composition over `=`, `~=`, `>=`
//!   and `<=` comparisons, fully parenthesized
//! - **Lossless Round-Trip**: a parsed filter renders back to the text it
//!   was parsed from
//! - **Failure As Data**: grammar mismatches are ordinary values inside the
//!   engine and surface as structured [`ParseError`]s, never panics
//! - **Position Reporting**: errors carry the byte offset they refer to
//!
//! # Quick Start
//!
//! ```rust
//! use ldq_parser::FilterParser;
//!
//! let parser = FilterParser::new();
//! let filter = parser.parse("(&(objectName=printer)(location=lab))")?;
//!
//! assert_eq!(filter.to_string(), "(&(objectName=printer)(location=lab))");
//! # Ok::<(), ldq_parser::ParseError>(())
//! ```
//!
//! # Error Handling
//!
//! Parse errors include position information:
//!
//! ```rust
//! use ldq_parser::{FilterParser, ParseError};
//!
//! let parser = FilterParser::new();
//! match parser.parse("(objectName~printer)") {
//!     Ok(_) => {}
//!     Err(ParseError::MalformedOperator { found, position }) => {
//!         eprintln!("Bad operator '{}' at byte {}", found, position);
//!     }
//!     Err(e) => eprintln!("Parse error: {}", e),
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_lines
)]

pub mod combinator;
pub mod error;
pub mod stream;
pub mod tokenizer;

mod parser;

// Re-export main types
pub use error::*;
pub use parser::*;
pub use stream::TokenStream;
pub use tokenizer::{tokenize, Token, TokenKind};

// Re-export shared types
pub use ldq_shared::VERSION;

//! Error types for the LDAP filter parser

/// Errors that can occur while turning filter text into a filter tree
///
/// Two classes are distinguished: [`MalformedOperator`] is fatal at the
/// tokenization layer (the input cannot be decomposed into tokens at all),
/// while the remaining variants report that a well-formed token sequence
/// did not satisfy the grammar or the full-consumption requirement.
///
/// [`MalformedOperator`]: ParseError::MalformedOperator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A `~`, `>` or `<` was not followed by `=`; positions are byte
    /// offsets into the input
    #[error("Malformed operator '{found}' at position {position}: expected '='")]
    MalformedOperator {
        /// The offending character
        found: char,
        /// Byte offset of the offending character
        position: usize,
    },

    /// The token sequence did not match the filter grammar
    #[error("Invalid syntax at position {position}: {message}")]
    Syntax {
        /// Description of what the grammar expected
        message: String,
        /// Byte offset where matching stopped
        position: usize,
    },

    /// A structurally complete filter was followed by further tokens
    #[error("Trailing input at position {position} after a complete filter")]
    TrailingInput {
        /// Byte offset of the first trailing token
        position: usize,
    },

    /// Empty input
    #[error("Empty input")]
    EmptyInput,
}

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

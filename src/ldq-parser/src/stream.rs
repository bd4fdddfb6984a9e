//! Immutable cursor over a tokenized filter string
//!
//! All streams derived from one tokenization share the same underlying
//! token sequence; each stream owns only its cursor position. Advancing
//! returns a new stream and leaves the original untouched, which is what
//! makes backtracking in the combinator engine cheap.

use std::rc::Rc;

use crate::tokenizer::Token;

/// Position-indexed view into a shared token sequence
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Rc<[Token]>,
    pos: usize,
}

impl TokenStream {
    /// Wraps a token sequence into a stream positioned at its start
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            pos: 0,
        }
    }

    /// Whether the cursor is past the last token
    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The token at the cursor, or `None` when the stream is exhausted
    pub fn head(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// A new stream advanced past the current head; `self` is unaffected
    pub fn advance(&self) -> TokenStream {
        TokenStream {
            tokens: Rc::clone(&self.tokens),
            pos: self.pos + 1,
        }
    }

    /// Byte offset of the token at the cursor, if any
    pub fn offset(&self) -> Option<usize> {
        self.head().map(|token| token.offset)
    }
}

//! Tokenizer for LDAP filter strings
//!
//! A single left-to-right scan splits the input into keyword tokens (the
//! structural and comparison characters) and identifier tokens (maximal
//! runs of everything else, trimmed of surrounding whitespace). `~`, `>`
//! and `<` only exist as the first half of a two-character comparator, so
//! meeting one without a following `=` aborts tokenization.

use ldq_shared::{Comparator, Operator};

use crate::error::ParseError;

/// A lexical token together with its byte offset in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was recognized
    pub kind: TokenKind,
    /// Byte offset of the token start in the input
    pub offset: usize,
}

impl Token {
    fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The kinds of token the filter syntax distinguishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Boolean operator keyword: `&`, `|` or `!`
    Op(Operator),
    /// Comparator keyword: `=`, `~=`, `>=` or `<=`
    Cmp(Comparator),
    /// Attribute or value text
    Identifier(String),
}

/// Splits a filter string into tokens
///
/// Identifiers are trimmed on flush, so whitespace around tokens is
/// insignificant: `( abc <= def )` tokenizes identically to `(abc<=def)`.
/// Runs that are empty after trimming are discarded; the tokenizer never
/// emits an empty identifier.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut pending: Option<usize> = None;

    let flush = |tokens: &mut Vec<Token>, start: usize, end: usize| {
        let raw = &input[start..end];
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            let lead = raw.len() - raw.trim_start().len();
            tokens.push(Token::new(
                TokenKind::Identifier(trimmed.to_string()),
                start + lead,
            ));
        }
    };

    let mut chars = input.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        match ch {
            '(' | ')' | '=' | '&' | '|' | '!' | '~' | '>' | '<' => {
                if let Some(start) = pending.take() {
                    flush(&mut tokens, start, offset);
                }

                let kind = match ch {
                    // Compound keywords: the next character must be '='
                    '~' | '>' | '<' => {
                        if chars.next_if(|&(_, next)| next == '=').is_none() {
                            return Err(ParseError::MalformedOperator {
                                found: ch,
                                position: offset,
                            });
                        }
                        match ch {
                            '~' => TokenKind::Cmp(Comparator::Approx),
                            '>' => TokenKind::Cmp(Comparator::Ge),
                            _ => TokenKind::Cmp(Comparator::Le),
                        }
                    }

                    // Single char keywords
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '=' => TokenKind::Cmp(Comparator::Eq),
                    '&' => TokenKind::Op(Operator::And),
                    '|' => TokenKind::Op(Operator::Or),
                    _ => TokenKind::Op(Operator::Not),
                };
                tokens.push(Token::new(kind, offset));
            }
            _ => {
                if pending.is_none() {
                    pending = Some(offset);
                }
            }
        }
    }

    if let Some(start) = pending {
        flush(&mut tokens, start, input.len());
    }

    Ok(tokens)
}

//! Grammar and entry point for LDAP filter parsing
//!
//! The grammar below is expressed with the combinators from
//! [`crate::combinator`], one function per production:
//!
//! ```text
//! filter     := "(" filtercomp ")"
//! filtercomp := and | or | not | item
//! and        := "&" filterlist
//! or         := "|" filterlist
//! not        := "!" filter
//! filterlist := filter*
//! item       := identifier filtertype identifier
//! filtertype := "=" | "~=" | ">=" | "<="
//! ```
//!
//! Each alternative of `filtercomp` is gated by a distinct leading keyword
//! token, so the ordered choice is unambiguous. Every production ends in a
//! reducer that maps the raw pair structure into the corresponding
//! [`Filter`] node.

use ldq_shared::{Comparator, Comparison, Filter, FilterList, Operator};

use crate::combinator::{many, token, ParseOutcome, Parser};
use crate::error::{ParseError, Result};
use crate::stream::TokenStream;
use crate::tokenizer::{tokenize, Token, TokenKind};

/// Main parser for LDAP filter expressions
pub struct FilterParser {
    // future parser configuration could go here
}

impl FilterParser {
    /// Create a new parser instance
    pub fn new() -> Self {
        Self {}
    }

    /// Parse a filter string into a [`Filter`] tree
    ///
    /// The whole input must be consumed: a structurally valid filter
    /// followed by further tokens is rejected with
    /// [`ParseError::TrailingInput`].
    pub fn parse(&self, input: &str) -> Result<Filter> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let tokens = tokenize(input)?;
        log::trace!("tokenized {} tokens from {} bytes", tokens.len(), input.len());

        match filter().run(TokenStream::new(tokens)) {
            ParseOutcome::Success { value, rest } => match rest.offset() {
                Some(position) => Err(ParseError::TrailingInput { position }),
                None => Ok(value),
            },
            ParseOutcome::Failure { message, rest } => Err(ParseError::Syntax {
                message,
                position: rest.offset().unwrap_or(input.len()),
            }),
        }
    }
}

impl Default for FilterParser {
    fn default() -> Self {
        Self::new()
    }
}

// Grammar productions. Each call builds a fresh combinator tree; `or` and
// `then` take the next production as a thunk, which is what lets the
// mutually recursive rules below reference each other.

fn lparen() -> Parser<Token> {
    token("(", |t| t.kind == TokenKind::LParen)
}

fn rparen() -> Parser<Token> {
    token(")", |t| t.kind == TokenKind::RParen)
}

fn operator(op: Operator) -> Parser<Token> {
    let label = op.symbol().to_string();
    token(&label, move |t| t.kind == TokenKind::Op(op))
}

/// `filter := "(" filtercomp ")"`
fn filter() -> Parser<Filter> {
    lparen()
        .then(filtercomp)
        .then(rparen)
        .map(|((_, comp), _)| comp)
}

/// `filtercomp := and | or | not | item`
fn filtercomp() -> Parser<Filter> {
    and_group().or(or_group).or(negation).or(item)
}

/// `and := "&" filterlist`
fn and_group() -> Parser<Filter> {
    operator(Operator::And)
        .then(filterlist)
        .map(|(_, entries)| Filter::List(FilterList::new(Operator::And, entries)))
}

/// `or := "|" filterlist`
fn or_group() -> Parser<Filter> {
    operator(Operator::Or)
        .then(filterlist)
        .map(|(_, entries)| Filter::List(FilterList::new(Operator::Or, entries)))
}

/// `not := "!" filter`
fn negation() -> Parser<Filter> {
    operator(Operator::Not)
        .then(filter)
        .map(|(_, inner)| inner.not())
}

/// `filterlist := filter*`
fn filterlist() -> Parser<Vec<Filter>> {
    many(filter)
}

/// `item := identifier filtertype identifier`
fn item() -> Parser<Filter> {
    identifier()
        .then(filtertype)
        .then(identifier)
        .map(|((attribute, comparator), value)| {
            Filter::Comparison(Comparison::new(attribute, comparator, value))
        })
}

/// `filtertype := "=" | "~=" | ">=" | "<="`
fn filtertype() -> Parser<Comparator> {
    token("comparator", |t| matches!(t.kind, TokenKind::Cmp(_))).map(|t| match t.kind {
        TokenKind::Cmp(comparator) => comparator,
        _ => unreachable!(),
    })
}

fn identifier() -> Parser<String> {
    token("identifier", |t| matches!(t.kind, TokenKind::Identifier(_))).map(|t| match t.kind {
        TokenKind::Identifier(text) => text,
        _ => unreachable!(),
    })
}

//! Generic backtracking parser combinators over a token stream
//!
//! The engine is grammar-agnostic: it knows nothing about filters, only
//! about matching tokens and composing matchers. A grammar mismatch is an
//! ordinary [`ParseOutcome::Failure`] value, not an error path; actual
//! errors are reserved for input that cannot be tokenized at all.
//!
//! Combinators that take another parser accept it as a zero-argument
//! producer (`impl Fn() -> Parser<_>`) rather than as a finished parser
//! value. Deferring construction this way is what lets mutually recursive
//! grammar productions reference each other without an initialization
//! cycle.

use std::rc::Rc;

use crate::stream::TokenStream;
use crate::tokenizer::Token;

/// Outcome of running a parser against a token stream
#[derive(Debug, Clone)]
pub enum ParseOutcome<T> {
    /// The parser matched a prefix of the stream
    Success {
        /// The produced value
        value: T,
        /// The stream positioned after the consumed tokens
        rest: TokenStream,
    },
    /// The parser did not match
    Failure {
        /// What the parser expected
        message: String,
        /// The stream at the point where matching stopped
        rest: TokenStream,
    },
}

impl<T> ParseOutcome<T> {
    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }
}

/// A composable parser producing values of type `T`
///
/// Parsers are immutable, cheap to clone and referentially transparent:
/// running the same parser on the same stream always yields the same
/// outcome.
pub struct Parser<T> {
    run: Rc<dyn Fn(TokenStream) -> ParseOutcome<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a raw parsing function
    pub fn new(run: impl Fn(TokenStream) -> ParseOutcome<T> + 'static) -> Self {
        Self { run: Rc::new(run) }
    }

    /// A parser that always succeeds with `value`, consuming nothing
    pub fn success(value: T) -> Self
    where
        T: Clone,
    {
        Parser::new(move |input| ParseOutcome::Success {
            value: value.clone(),
            rest: input,
        })
    }

    /// A parser that always fails with `message`, consuming nothing
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Parser::new(move |input| ParseOutcome::Failure {
            message: message.clone(),
            rest: input,
        })
    }

    /// Runs the parser against a stream
    pub fn run(&self, input: TokenStream) -> ParseOutcome<T> {
        (self.run)(input)
    }

    /// Ordered choice: tries `self` first and, if it fails, tries
    /// `other()` on the *original* input, so no partial consumption leaks
    /// across the choice. The first success wins.
    pub fn or(self, other: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
        Parser::new(move |input: TokenStream| match self.run(input.clone()) {
            success @ ParseOutcome::Success { .. } => success,
            ParseOutcome::Failure { .. } => other().run(input),
        })
    }

    /// Sequencing: runs `self`, then `other()` on the remaining stream,
    /// pairing the two values. Either failure propagates unchanged.
    pub fn then<U: 'static>(self, other: impl Fn() -> Parser<U> + 'static) -> Parser<(T, U)> {
        Parser::new(move |input| match self.run(input) {
            ParseOutcome::Success { value: left, rest } => match other().run(rest) {
                ParseOutcome::Success { value: right, rest } => ParseOutcome::Success {
                    value: (left, right),
                    rest,
                },
                ParseOutcome::Failure { message, rest } => ParseOutcome::Failure { message, rest },
            },
            ParseOutcome::Failure { message, rest } => ParseOutcome::Failure { message, rest },
        })
    }

    /// Transforms the success value with `f`; failures pass through
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        Parser::new(move |input| match self.run(input) {
            ParseOutcome::Success { value, rest } => ParseOutcome::Success {
                value: f(value),
                rest,
            },
            ParseOutcome::Failure { message, rest } => ParseOutcome::Failure { message, rest },
        })
    }
}

/// Matches a single token satisfying `predicate`, producing the token
/// itself; fails with `expected <label>` without consuming otherwise
pub fn token(label: &str, predicate: impl Fn(&Token) -> bool + 'static) -> Parser<Token> {
    let label = label.to_string();
    Parser::new(move |input: TokenStream| match input.head() {
        Some(head) if predicate(head) => {
            let value = head.clone();
            let rest = input.advance();
            ParseOutcome::Success { value, rest }
        }
        _ => ParseOutcome::Failure {
            message: format!("expected {}", label),
            rest: input,
        },
    })
}

/// Greedy repetition: applies `parser()` until it first fails to match,
/// collecting the values
///
/// Matches zero or more occurrences and therefore never fails itself.
/// Repetition is committed: once an occurrence is consumed the combinator
/// does not backtrack past it.
pub fn many<T: 'static>(parser: impl Fn() -> Parser<T> + 'static) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let mut values = Vec::new();
        let mut current = input;
        loop {
            match parser().run(current.clone()) {
                ParseOutcome::Success { value, rest } => {
                    values.push(value);
                    current = rest;
                }
                ParseOutcome::Failure { .. } => break,
            }
        }
        ParseOutcome::Success {
            value: values,
            rest: current,
        }
    })
}

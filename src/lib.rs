//! # reckon
//!
//! reckon is a small arithmetic expression language written in Rust.
//! It tokenizes, parses and evaluates expressions built from non-negative
//! integer literals, `+`, `-`, `*`, `/` and parentheses, with the usual
//! precedence and left-associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Expr,
    error::Failure,
    interpreter::{evaluator::core::eval, parser::core::parse_tokens, value::Number},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator table that drives
/// the parser: each operator's precedence and associativity.
///
/// # Responsibilities
/// - Defines literal and binary-operation nodes.
/// - Attaches source spans to nodes for error reporting.
/// - Renders trees fully parenthesized for inspection.
pub mod ast;
/// Provides unified error types for tokenizing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing an
/// expression, plus `Failure`, which pairs an error with the input that
/// caused it and renders a pointer to the offending position.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets to every error.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value types.
pub mod interpreter;
/// General utilities shared across phases.
///
/// # Responsibilities
/// - Convert byte offsets into line and column positions.
pub mod util;

pub use crate::interpreter::lexer::tokenize;

/// Parses an expression into a tree.
///
/// # Errors
/// Returns a [`Failure`] carrying the input and the first lexical or
/// syntactic error.
///
/// # Examples
/// ```
/// use reckon::parse;
///
/// let tree = parse("1 - 2 - 3").unwrap();
/// assert_eq!(tree.to_string(), "((1 - 2) - 3)");
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, Failure> {
    let tokens = tokenize(source).map_err(|e| Failure::new(source, e))?;
    debug!("{} tokens from {source:?}", tokens.len());

    parse_tokens(&tokens).map_err(|e| Failure::new(source, e))
}

/// Evaluates an expression and returns its value.
///
/// The input is tokenized, parsed and evaluated in turn; the first error of
/// any phase is returned together with the input. No state is carried
/// between calls.
///
/// # Errors
/// Returns a [`Failure`] if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{error::{Error, RuntimeError}, evaluate, interpreter::value::Number};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Number::Integer(14));
/// assert_eq!(evaluate("(1 + 3) / 10").unwrap(), Number::Real(0.4));
///
/// let failure = evaluate("1 / 0").unwrap_err();
/// assert!(matches!(failure.error, Error::Runtime(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn evaluate(source: &str) -> Result<Number, Failure> {
    let tree = parse(source)?;
    let value = eval(&tree).map_err(|e| Failure::new(source, e))?;
    debug!("{source:?} evaluated to {value}");

    Ok(value)
}

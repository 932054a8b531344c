/// The evaluator module computes results from AST nodes.
///
/// The evaluator walks the tree recursively, evaluating both operands of each
/// binary operation before applying the operator.
///
/// # Responsibilities
/// - Evaluates literals and the four arithmetic operators.
/// - Keeps integer arithmetic exact and falls back to reals for inexact
///   division.
/// - Reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, an operator or a parenthesis, and
/// terminated by an end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their byte spans.
/// - Skips whitespace.
/// - Reports lexical errors for unrecognized characters and oversized
///   literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream produced by the lexer and constructs
/// a tree honoring operator precedence and left-associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with the offending span.
/// - Rejects input left over after a complete expression.
pub mod parser;
/// The value module defines the numbers produced by evaluation.
pub mod value;

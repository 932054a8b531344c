/// Core parsing entry points.
///
/// Defines the result type, the nesting limit, and the functions that parse a
/// whole token sequence into a single expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over the operator table, producing
/// left-associative trees for `+`, `-`, `*` and `/`.
pub mod binary;

/// Factor parsing.
///
/// Handles the atoms of the grammar: integer literals and parenthesized
/// groups.
pub mod factor;

/// Utility functions for the parser.
///
/// Token expectation helpers shared by the other parsing modules.
pub mod utils;

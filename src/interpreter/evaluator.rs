/// Core evaluation logic.
///
/// Contains the tree walk that dispatches on node kind and the result type
/// shared by the evaluator.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*` and `/` over integers and reals, including
/// division-by-zero and overflow checks.
pub mod binary;

/// Numeric values produced by evaluation.
///
/// Defines the `Number` type: exact 64-bit integers, with a floating-point
/// form for the results of inexact division. Includes promotion between the
/// two and display formatting.
pub mod core;

pub use self::core::{Number, Operands};

use thiserror::Error;

use crate::{ast::BinaryOperator, interpreter::lexer::Span};

/// Represents all errors that can be raised during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero {
        /// Span of the `/` operator.
        span: Span,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("integer overflow in '{op}'")]
    Overflow {
        /// The operator that overflowed.
        op:   BinaryOperator,
        /// Span of the operator.
        span: Span,
    },
}

impl RuntimeError {
    /// Span of the operator that failed.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::DivisionByZero { span } | Self::Overflow { span, .. } => span,
        }
    }
}

use thiserror::Error;

use crate::interpreter::lexer::Span;

/// Represents all errors that can occur while parsing a token sequence.
///
/// Token descriptions are the rendered [`Token`](crate::interpreter::lexer::Token),
/// such as `')'` or `end of input`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token was required but another one was found.
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        /// The token that was required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Span of the token actually found.
        span:     Span,
    },
    /// A number or parenthesized group was required.
    #[error("expected a number or '(', found {found}")]
    ExpectedOperand {
        /// The token actually found.
        found: String,
        /// Span of the token actually found.
        span:  Span,
    },
    /// A complete expression was followed by more tokens.
    #[error("unexpected trailing input: found {found}, expected end of input")]
    UnexpectedTrailingInput {
        /// The first extra token.
        found: String,
        /// Span of the first extra token.
        span:  Span,
    },
    /// Parentheses were nested beyond what the parser accepts.
    #[error("parentheses nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The maximum accepted depth.
        limit: usize,
        /// Span of the `(` that crossed the limit.
        span:  Span,
    },
}

impl ParseError {
    /// Span of the token the parser failed on.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::ExpectedToken { span, .. }
            | Self::ExpectedOperand { span, .. }
            | Self::UnexpectedTrailingInput { span, .. }
            | Self::NestingTooDeep { span, .. } => span,
        }
    }
}

use thiserror::Error;

use crate::interpreter::lexer::Span;

/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unrecognized character '{character}' at offset {offset}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("integer literal {literal} is too large")]
    IntegerTooLarge {
        /// The digits as written.
        literal: String,
        /// Where the literal sits in the source.
        span:    Span,
    },
}

impl LexError {
    /// Byte offset at which tokenizing failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { offset, .. } => *offset,
            Self::IntegerTooLarge { span, .. } => span.start,
        }
    }
}

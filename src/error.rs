/// Tokenizing errors.
///
/// Raised when the input contains a character that starts no token, or a
/// literal that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a tree:
/// missing operands, unmatched parentheses and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero and integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::util::span::{line_at, line_col};

/// Any error raised by the tokenize, parse, evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// The tokens do not form an expression.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The expression could not be evaluated.
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Byte offset in the input the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Parse(e) => e.span().start,
            Self::Runtime(e) => e.span().start,
        }
    }
}

/// An error together with the input that produced it.
///
/// Displaying a `Failure` renders the message followed by the offending line
/// of input and a caret under the failing position:
///
/// ```text
/// runtime error: division by zero
///  --> line 1, column 3
///   |
/// 1 | 1 / 0
///   |   ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// The source text that was being processed.
    pub input:      String,
    /// What went wrong.
    pub error:      Error,
    /// Line number the first line of `input` is reported as.
    pub first_line: usize,
}

impl Failure {
    /// Pairs an error with its input.
    pub fn new(input: impl Into<String>, error: impl Into<Error>) -> Self {
        Self { input:      input.into(),
               error:      error.into(),
               first_line: 1, }
    }

    /// Reports positions as if `input` started on line `first_line` of a
    /// larger document, such as one line of a script file.
    ///
    /// # Example
    /// ```
    /// let failure = reckon::evaluate("1 / 0").unwrap_err().starting_at_line(7);
    /// assert!(failure.to_string().contains("--> line 7, column 3"));
    /// ```
    #[must_use]
    pub fn starting_at_line(mut self, first_line: usize) -> Self {
        self.first_line = first_line;
        self
    }

    /// Byte offset in [`Failure::input`] the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.error.offset()
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut position = line_col(&self.input, self.offset());
        position.line += self.first_line.saturating_sub(1);
        let line = line_at(&self.input, self.offset());
        let gutter = " ".repeat(position.line.to_string().len());
        let pad = " ".repeat(position.column - 1);

        writeln!(f, "{}", self.error)?;
        writeln!(f, "{gutter}--> {position}")?;
        writeln!(f, "{gutter} |")?;
        writeln!(f, "{} | {line}", position.line)?;
        write!(f, "{gutter} | {pad}^")
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

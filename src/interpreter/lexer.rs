use std::ops::Range;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Byte range of a token in the source text.
pub type Span = Range<usize>;

/// A token paired with the span it was read from.
pub type Spanned = (Token, Span);

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexFailure)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched from text; appended by [`Tokenizer`].
    End,
    /// Spaces, tabs, feeds and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End | Self::Ignored => write!(f, "end of input"),
        }
    }
}

/// Why logos rejected a slice. Turned into a [`LexError`] by the
/// [`Tokenizer`], which knows the span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexFailure {
    #[default]
    Unrecognized,
    IntegerTooLarge,
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Ok(i64)`: The parsed integer value.
/// - `Err(LexFailure::IntegerTooLarge)`: If the digits do not fit in `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFailure> {
    lex.slice().parse().map_err(|_| LexFailure::IntegerTooLarge)
}

/// Lazy token stream over a source string.
///
/// Yields every token with its span, followed by a single [`Token::End`].
/// The first lexical error is yielded in place of a token and ends the
/// stream. Cloning a tokenizer or building a new one over the same source
/// restarts tokenization from that point.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("1 + 2").map(|t| t.unwrap().0).collect();
/// assert_eq!(tokens, vec![Token::Number(1), Token::Plus, Token::Number(2), Token::End]);
/// ```
#[derive(Clone)]
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Token::lexer(source),
               finished: false, }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                let span = self.lexer.span();
                trace!("token {token:?} at {span:?}");
                Some(Ok((token, span)))
            },
            Some(Err(failure)) => {
                self.finished = true;
                let span = self.lexer.span();
                let slice = self.lexer.slice();
                Some(Err(match failure {
                             LexFailure::IntegerTooLarge => {
                                 LexError::IntegerTooLarge { literal: slice.to_string(),
                                                             span }
                             },
                             LexFailure::Unrecognized => {
                                 LexError::UnrecognizedCharacter { character: slice.chars()
                                                                                   .next()
                                                                                   .unwrap_or(char::REPLACEMENT_CHARACTER),
                                                                   offset:    span.start, }
                             },
                         }))
            },
            None => {
                self.finished = true;
                let end = self.lexer.source().len();
                Some(Ok((Token::End, end..end)))
            },
        }
    }
}

/// Tokenizes a whole source string.
///
/// The returned vector always ends with [`Token::End`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(7)").unwrap();
/// assert_eq!(tokens[1], (Token::Number(7), 1..2));
/// assert!(tokenize("7 % 2").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    Tokenizer::new(source).collect()
}

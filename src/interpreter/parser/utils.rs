use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Span, Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Consumes the next token if it equals `expected`.
///
/// # Errors
/// Returns `ParseError::ExpectedToken` naming both the expected token and the
/// one actually found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<&'a Span>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((token, span)) if token == expected => Ok(span),
        Some((token, span)) => Err(ParseError::ExpectedToken { expected: describe(expected),
                                                               found:    describe(token),
                                                               span:     span.clone(), }),
        None => Err(ParseError::ExpectedToken { expected: describe(expected),
                                                found:    describe(&Token::End),
                                                span:     end_of_input(), }),
    }
}

/// Human-readable name of a token for error messages.
pub(in crate::interpreter::parser) fn describe(token: &Token) -> String {
    token.to_string()
}

/// Span reported when a token iterator runs out without an `End` token.
///
/// The position is unknown here, so it lies past any input; rendering clamps
/// it to the end of the source. [`parse_tokens`](super::core::parse_tokens)
/// never reaches this, as it supplies a missing `End` itself.
pub(in crate::interpreter::parser) const fn end_of_input() -> Span {
    usize::MAX..usize::MAX
}

use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{binary::parse_binary, utils::describe},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence tier and climbs through the operator table. Parenthesized
/// groups call back into this function one nesting level deeper.
///
/// Grammar: `expression := factor (operator factor)*`, grouped by precedence.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_binary(tokens, 0, depth)
}

/// Parses a complete token sequence into one expression.
///
/// The sequence must contain exactly one expression followed by
/// [`Token::End`]. Anything between the expression and `End` is reported as
/// trailing input. A sequence that lacks its `End` is treated as ending right
/// after its last token.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; there is no recovery.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("8 / 2 / 2").unwrap();
/// let tree = parse_tokens(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "((8 / 2) / 2)");
/// ```
pub fn parse_tokens(tokens: &[Spanned]) -> ParseResult<Expr> {
    let end = tokens.last().map_or(0, |(_, span)| span.end);
    let missing_end = (Token::End, end..end);
    let tail = (!matches!(tokens.last(), Some((Token::End, _)))).then_some(&missing_end);

    let mut iter = tokens.iter().chain(tail).peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((Token::End, _)) => {
            debug!("parsed {expr}");
            Ok(expr)
        },
        Some((token, span)) => {
            Err(ParseError::UnexpectedTrailingInput { found: describe(token),
                                                      span:  span.clone(), })
        },
        None => Ok(expr),
    }
}

use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Span, Spanned, Token},
        parser::{
            core::{MAX_NESTING, ParseResult, parse_expression},
            utils::{describe, end_of_input, expect},
        },
    },
};

/// Parses a factor: the operand of a binary operator.
///
/// A factor is either an integer literal or a parenthesized expression. Any
/// other token here, an operator, a `)` or the end of input, means an operand
/// is missing.
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(value), span)) => Ok(Expr::Literal { value: *value,
                                                                 span:  span.clone(), }),
        Some((Token::LParen, span)) => parse_grouping(tokens, span, depth),
        Some((token, span)) => Err(ParseError::ExpectedOperand { found: describe(token),
                                                                 span:  span.clone(), }),
        None => Err(ParseError::ExpectedOperand { found: describe(&Token::End),
                                                  span:  end_of_input(), }),
    }
}

/// Parses the inside of a parenthesized group, after its `(` was consumed.
///
/// The group recurses into the full expression rule one level deeper and
/// must be closed by a matching `)`.
///
/// # Errors
/// - `NestingTooDeep` if the group would exceed [`MAX_NESTING`].
/// - `ExpectedToken` naming `')'` if the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open: &Span,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let depth = depth + 1;
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                span:  open.clone(), });
    }

    let expr = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ParseError,
        interpreter::{
            lexer::{Spanned, Token, tokenize},
            parser::core::{parse_expression, parse_tokens},
        },
    };

    fn parse_err(source: &str) -> ParseError {
        parse_tokens(&tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn group_overrides_precedence() {
        let tree = parse_tokens(&tokenize("(2 + 3) * 4").unwrap()).unwrap();
        assert_eq!(tree.to_string(), "((2 + 3) * 4)");
    }

    #[test]
    fn redundant_parentheses_vanish() {
        let tree = parse_tokens(&tokenize("((((7))))").unwrap()).unwrap();
        assert_eq!(tree.to_string(), "7");
    }

    #[test]
    fn unclosed_group_names_the_missing_paren() {
        assert_eq!(parse_err("(1 + 2"),
                   ParseError::ExpectedToken { expected: "')'".to_string(),
                                               found:    "end of input".to_string(),
                                               span:     6..6, });
    }

    #[test]
    fn missing_operand_at_end() {
        assert_eq!(parse_err("1 + "),
                   ParseError::ExpectedOperand { found: "end of input".to_string(),
                                                 span:  4..4, });
    }

    #[test]
    fn operator_cannot_start_a_factor() {
        assert!(matches!(parse_err("* 2"), ParseError::ExpectedOperand { span, .. } if span == (0..1)));
        assert!(matches!(parse_err("1 + * 2"), ParseError::ExpectedOperand { span, .. } if span == (4..5)));
    }

    #[test]
    fn empty_group_is_missing_an_operand() {
        assert!(matches!(parse_err("()"), ParseError::ExpectedOperand { found, .. } if found == "')'"));
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        assert!(matches!(parse_err(&deep), ParseError::NestingTooDeep { limit: 256, .. }));

        let fine = format!("{}1{}", "(".repeat(256), ")".repeat(256));
        assert!(parse_tokens(&tokenize(&fine).unwrap()).is_ok());
    }

    #[test]
    fn exhausted_iterator_points_past_the_input() {
        let tokens: Vec<Spanned> = vec![(Token::Number(1), 0..1), (Token::Minus, 2..3)];
        let err = parse_expression(&mut tokens.iter().peekable(), 0).unwrap_err();
        assert_eq!(err,
                   ParseError::ExpectedOperand { found: "end of input".to_string(),
                                                 span:  usize::MAX..usize::MAX, });
    }
}

use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Spanned,
        parser::{core::ParseResult, factor::parse_factor},
    },
};

/// Parses a chain of binary operations by precedence climbing.
///
/// Reads one factor, then keeps folding operators whose precedence is at
/// least `min_precedence` into the tree. The right operand of each operator
/// is parsed with the minimum raised one above the operator's own precedence,
/// so operators of equal strength group to the left. This means:
///
/// - `*` and `/` bind tighter than `+` and `-`: `2 + 3 * 4` is `2 + (3 * 4)`.
/// - All four group to the left: `1 - 2 - 3` is `(1 - 2) - 3`.
///
/// The loop, rather than recursion, consumes operators of equal precedence,
/// so long left-leaning chains do not deepen the call stack.
///
/// # Parameters
/// - `tokens`: Token stream with spans.
/// - `min_precedence`: Weakest operator this call may consume.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the lone factor if no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    let mut left = parse_factor(tokens, depth)?;

    while let Some((token, span)) = tokens.peek().copied() {
        let Some(op) = BinaryOperator::from_token(token) else {
            break;
        };
        if op.precedence() < min_precedence {
            break;
        }
        tokens.next();

        let right = parse_binary(tokens, op.precedence() + 1, depth)?;
        trace!("folding {op} at {span:?}");

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                span: span.clone() };
    }

    Ok(left)
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{lexer::tokenize, parser::core::parse_tokens};

    fn shape(source: &str) -> String {
        parse_tokens(&tokenize(source).unwrap()).unwrap().to_string()
    }

    #[test]
    fn subtraction_groups_left() {
        assert_eq!(shape("1 - 2 - 3"), "((1 - 2) - 3)");
    }

    #[test]
    fn division_groups_left() {
        assert_eq!(shape("64 / 8 / 2"), "((64 / 8) / 2)");
    }

    #[test]
    fn mixed_tiers_group_left_within_each_tier() {
        assert_eq!(shape("1 + 2 * 3 - 4 / 2 + 5"), "(((1 + (2 * 3)) - (4 / 2)) + 5)");
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(shape("2 + 3 * 4"), "(2 + (3 * 4))");
        assert_eq!(shape("2 * 3 + 4"), "((2 * 3) + 4)");
    }

    #[test]
    fn operator_span_is_recorded() {
        let tree = parse_tokens(&tokenize("10 - 4").unwrap()).unwrap();
        assert_eq!(tree.span(), &(3..4));
    }
}

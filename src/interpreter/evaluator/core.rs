use log::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, lexer::Span, value::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// One unit of pending work in [`eval`].
enum Step<'a> {
    /// Evaluate this node and push its value.
    Visit(&'a Expr),
    /// Pop two values, apply the operator and push the result.
    Apply(BinaryOperator, &'a Span),
}

/// Evaluates an expression tree and returns the resulting number.
///
/// Literals yield their value. Binary operations evaluate the left operand,
/// then the right operand, then apply the operator. The first error aborts
/// evaluation. Evaluation reads the tree only, so evaluating the same tree
/// again gives the same outcome.
///
/// The walk keeps its own work stack instead of recursing, so a chain of any
/// length evaluates in constant call depth.
///
/// # Example
/// ```
/// use reckon::{
///     interpreter::{evaluator::core::eval, value::Number},
///     parse,
/// };
///
/// let tree = parse("2 + 3 * 4").unwrap();
/// assert_eq!(eval(&tree), Ok(Number::Integer(14)));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<Number> {
    let mut work = vec![Step::Visit(expr)];
    let mut values: Vec<Number> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Visit(Expr::Literal { value, .. }) => values.push(Number::Integer(*value)),
            Step::Visit(Expr::BinaryOp { left, op, right, span }) => {
                work.push(Step::Apply(*op, span));
                work.push(Step::Visit(right));
                work.push(Step::Visit(left));
            },
            Step::Apply(op, span) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("operator applied with fewer than two operands");
                };
                let result = eval_binary(op, left, right, span)?;
                trace!("{left} {op} {right} = {result}");
                values.push(result);
            },
        }
    }

    match values.pop() {
        Some(result) => Ok(result),
        None => unreachable!("evaluation produced no value"),
    }
}

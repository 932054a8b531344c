use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::Span,
        value::{Number, Operands},
    },
};

/// Evaluates an arithmetic operation between two numbers.
///
/// Integer operands use checked arithmetic; leaving the 64-bit range is an
/// `Overflow` error. Integer division is exact when the divisor divides the
/// dividend and produces a `Real` otherwise, so `4 / 10` is `0.4`. If either
/// operand is real, both are promoted and the result is real. Division by
/// zero is checked explicitly for both representations.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `span`: Span of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Number>` containing the computed value.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Number},
/// };
///
/// let result = eval_binary(BinaryOperator::Div, Number::Integer(4), Number::Integer(10), &(0..1));
/// assert_eq!(result.unwrap(), Number::Real(0.4));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   span: &Span)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if op == Div && right.is_zero() {
        return Err(RuntimeError::DivisionByZero { span: span.clone() });
    }

    let overflow = || RuntimeError::Overflow { op,
                                               span: span.clone() };

    match left.promote(right) {
        Operands::Integers(a, b) => match op {
            Add => a.checked_add(b).map(Number::Integer).ok_or_else(overflow),
            Sub => a.checked_sub(b).map(Number::Integer).ok_or_else(overflow),
            Mul => a.checked_mul(b).map(Number::Integer).ok_or_else(overflow),
            Div => {
                if a.checked_rem(b).ok_or_else(overflow)? == 0 {
                    a.checked_div(b).map(Number::Integer).ok_or_else(overflow)
                } else {
                    Ok(Number::Real(left.as_real() / right.as_real()))
                }
            },
        },
        Operands::Reals(a, b) => {
            let result = match op {
                Add => a + b,
                Sub => a - b,
                Mul => a * b,
                Div => a / b,
            };
            if result.is_finite() { Ok(Number::Real(result)) } else { Err(overflow()) }
        },
    }
}

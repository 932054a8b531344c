/// Represents the result of evaluating an expression.
///
/// Literals are integers and integer arithmetic stays exact. A division whose
/// result is not a whole number produces a `Real`, and any operation touching
/// a `Real` promotes the other operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl Number {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond 2^53 in magnitude are rounded to the nearest
    /// representable double.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(0.25).as_real(), 0.25);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Whether the value is zero, in either representation.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Promotes both operands to `Real` unless both are integers.
    #[must_use]
    pub const fn promote(self, other: Self) -> Operands {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Operands::Integers(a, b),
            (a, b) => Operands::Reals(a.as_real(), b.as_real()),
        }
    }
}

/// A pair of operands brought to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Both operands were integers.
    Integers(i64, i64),
    /// At least one operand was real; both are now reals.
    Reals(f64, f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Number, Operands};

    #[test]
    fn display_uses_shortest_form() {
        assert_eq!(Number::Integer(-4).to_string(), "-4");
        assert_eq!(Number::Real(0.4).to_string(), "0.4");
        assert_eq!(Number::Real(2.5).to_string(), "2.5");
    }

    #[test]
    fn promotion_keeps_integer_pairs() {
        assert_eq!(Number::Integer(3).promote(Number::Integer(4)), Operands::Integers(3, 4));
        assert_eq!(Number::Integer(3).promote(Number::Real(0.5)), Operands::Reals(3.0, 0.5));
        assert_eq!(Number::Real(0.5).promote(Number::Integer(2)), Operands::Reals(0.5, 2.0));
    }

    #[test]
    fn zero_in_both_forms() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Real(0.0).is_zero());
        assert!(!Number::Real(0.1).is_zero());
    }
}

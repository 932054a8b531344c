use crate::interpreter::lexer::{Span, Token};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// A tree is built bottom-up by the parser in a single pass and is never
/// mutated afterwards. Every `BinaryOp` exclusively owns its two children, so
/// a tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The constant value.
        value: i64,
        /// Where the literal was written.
        span:  Span,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Span of the operator token.
        span:  Span,
    },
}

impl Expr {
    /// Returns the span associated with this node: the literal itself, or the
    /// operator of a binary operation.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Literal { span, .. } | Self::BinaryOp { span, .. } => span,
        }
    }
}

/// Renders the tree fully parenthesized, which makes grouping explicit:
/// `1 - 2 - 3` displays as `((1 - 2) - 3)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Op(BinaryOperator),
            Close,
        }

        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    write!(f, "(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Op(*op));
                    pending.push(Piece::Node(left));
                },
                Piece::Op(op) => write!(f, " {op} ")?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

/// Dismantles the tree with a work list, so dropping a long chain does not
/// recurse once per node.
impl Drop for Expr {
    fn drop(&mut self) {
        let Self::BinaryOp { left, right, .. } = self else {
            return;
        };
        let mut detached = vec![detach(left), detach(right)];
        while let Some(mut node) = detached.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut node {
                detached.push(detach(left));
                detached.push(detach(right));
            }
        }
    }
}

/// Moves a child out of its box, leaving a leaf behind.
fn detach(child: &mut Expr) -> Expr {
    std::mem::replace(child, Expr::Literal { value: 0,
                                             span:  0..0, })
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps a token to its corresponding binary operator.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::lexer::Token};
    ///
    /// assert_eq!(BinaryOperator::from_token(&Token::Star), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_token(&Token::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// Binding strength; higher binds tighter. Operators of equal strength
    /// group to the left.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

//! Expression tree nodes.

/// A well-formed expression: a pure tree in which every parent exclusively
/// owns its children, so no node is shared or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Add { left: Box<Expr>, right: Box<Expr> },
    Multiply { left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    /// Evaluate the tree bottom-up.
    ///
    /// Arithmetic is `i64` and wraps on overflow.
    pub fn eval(&self) -> i64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Add { left, right } => left.eval().wrapping_add(right.eval()),
            Expr::Multiply { left, right } => left.eval().wrapping_mul(right.eval()),
        }
    }
}

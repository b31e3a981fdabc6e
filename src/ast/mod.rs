use std::fmt::Display;

mod eval;

pub use eval::Eval;

/// A single node in an immutable arithmetic expression tree.
///
/// Trees are built bottom-up by composing already-built children into a new
/// parent; a node owns its children exclusively, so dropping a node drops the
/// whole sub-tree it roots.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    // Leaf
    Literal(i64),

    // Binary Ops
    Binary(OpKind, Box<Self>, Box<Self>),
}

impl Expr {
    pub fn literal(value: i64) -> Self {
        Self::Literal(value)
    }

    /// Combines two expressions under an operator, taking ownership of both.
    pub fn binary(op: OpKind, lhs: Self, rhs: Self) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{}", value),
            Expr::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl OpKind {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

mod ast;

pub use ast::{Eval, Expr, OpKind};

pub mod error;

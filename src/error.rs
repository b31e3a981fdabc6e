use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur while evaluating an expression tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}

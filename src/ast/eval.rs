use crate::{
    ast::{Expr, OpKind},
    error::{EvalError, EvalResult},
};

pub trait Eval {
    /// Evaluates the expression to a single integer value.
    ///
    /// Arithmetic wraps on overflow (two's complement); division truncates
    /// toward zero and fails with [`EvalError::DivisionByZero`] when the
    /// right operand evaluates to zero.
    fn eval(&self) -> EvalResult<i64>;
}

impl Eval for Expr {
    fn eval(&self) -> EvalResult<i64> {
        match self {
            Expr::Literal(value) => Ok(*value),
            Expr::Binary(op, lhs, rhs) => binary_expr(*op, lhs, rhs),
        }
    }
}

fn binary_expr(op: OpKind, lhs: &Expr, rhs: &Expr) -> EvalResult<i64> {
    let left_value = lhs.eval()?;
    let right_value = rhs.eval()?;

    match op {
        OpKind::Add => Ok(left_value.wrapping_add(right_value)),
        OpKind::Sub => Ok(left_value.wrapping_sub(right_value)),
        OpKind::Mul => Ok(left_value.wrapping_mul(right_value)),
        OpKind::Div if right_value == 0 => Err(EvalError::DivisionByZero),
        // wrapping_div keeps i64::MIN / -1 total once zero is ruled out
        OpKind::Div => Ok(left_value.wrapping_div(right_value)),
    }
}

use crate::ast::*;
use crate::value::*;

// The public interface to evaluate a parsed expression.  The walk is
// bottom-up: both children are evaluated before their operator is applied.
pub fn interpret(expr: &Expr) -> Result<Value, RuntimeError> {
    use crate::value::Value::*;
    match expr {
        Expr::LiteralInt(x) => Ok(IntVal(*x)),
        Expr::LiteralFloat(x) => Ok(FloatVal(*x)),
        Expr::Binary(left, op, right, loc) => {
            let left_val = interpret(left)?;
            let right_val = interpret(right)?;

            match op {
                BinaryOperator::Plus => {
                    match (left_val, right_val) {
                        (IntVal(x1), IntVal(x2)) => {
                            x1.checked_add(x2)
                                .map(IntVal)
                                .ok_or(RuntimeError::Overflow { loc: *loc })
                        }
                        (v1, v2) => Ok(FloatVal(v1.as_f64() + v2.as_f64())),
                    }
                }
                BinaryOperator::Minus => {
                    match (left_val, right_val) {
                        (IntVal(x1), IntVal(x2)) => {
                            x1.checked_sub(x2)
                                .map(IntVal)
                                .ok_or(RuntimeError::Overflow { loc: *loc })
                        }
                        (v1, v2) => Ok(FloatVal(v1.as_f64() - v2.as_f64())),
                    }
                }
                BinaryOperator::Multiply => {
                    match (left_val, right_val) {
                        (IntVal(x1), IntVal(x2)) => {
                            x1.checked_mul(x2)
                                .map(IntVal)
                                .ok_or(RuntimeError::Overflow { loc: *loc })
                        }
                        (v1, v2) => Ok(FloatVal(v1.as_f64() * v2.as_f64())),
                    }
                }
                BinaryOperator::Divide => {
                    if right_val.is_zero() {
                        return Err(RuntimeError::DivisionByZero { loc: *loc });
                    }
                    match (left_val, right_val) {
                        (IntVal(x1), IntVal(x2)) => {
                            // checked_div only fails here on i64::MIN / -1.
                            x1.checked_div(x2)
                                .map(IntVal)
                                .ok_or(RuntimeError::Overflow { loc: *loc })
                        }
                        (v1, v2) => Ok(FloatVal(v1.as_f64() / v2.as_f64())),
                    }
                }
            }
        }
    }
}

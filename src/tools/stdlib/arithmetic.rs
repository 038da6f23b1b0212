//! Arithmetic operations
//!
//! `+ - * /` share one left-to-right reduction over number arguments.

use crate::error::{Error, Result};
use crate::runtime::Expr;
use crate::tools::{Builtin, Namespace};

/// Register arithmetic operations
pub fn register(namespace: &mut Namespace) {
    namespace.register(ArithmeticTool(ArithmeticOp::Add));
    namespace.register(ArithmeticTool(ArithmeticOp::Subtract));
    namespace.register(ArithmeticTool(ArithmeticOp::Multiply));
    namespace.register(ArithmeticTool(ArithmeticOp::Divide));
}

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl ArithmeticOp {
    /// Operation symbol
    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
        }
    }

    fn apply(self, acc: f64, next: f64) -> Result<f64> {
        match self {
            ArithmeticOp::Add => Ok(acc + next),
            ArithmeticOp::Subtract => Ok(acc - next),
            ArithmeticOp::Multiply => Ok(acc * next),
            ArithmeticOp::Divide => {
                if next == 0.0 {
                    return Err(Error::DivisionByZero {
                        operation: self.symbol().to_string(),
                    });
                }
                Ok(acc / next)
            }
        }
    }
}

/// Reduces number arguments with `op`
///
/// `+` and `*` start from their identity and fold every argument; `-` and `/`
/// start from the first argument and fold the rest. A zero divisor does not
/// fail: the whole result becomes `0`.
pub fn compute(args: &[Expr], op: ArithmeticOp) -> Result<Expr> {
    let operation = op.symbol();

    if args.is_empty() {
        return Err(Error::arity(operation, "at least one", 0));
    }

    let numbers = args
        .iter()
        .map(|arg| match arg {
            Expr::Number(n) => Ok(*n),
            other => Err(Error::invalid_argument(
                format!("non-numeric {}", other.type_name()),
                operation,
            )),
        })
        .collect::<Result<Vec<f64>>>()?;

    let (seed, rest) = match op {
        ArithmeticOp::Add => (0.0, &numbers[..]),
        ArithmeticOp::Multiply => (1.0, &numbers[..]),
        ArithmeticOp::Subtract | ArithmeticOp::Divide => (numbers[0], &numbers[1..]),
    };

    match rest.iter().try_fold(seed, |acc, &next| op.apply(acc, next)) {
        Ok(result) => Ok(Expr::Number(result)),
        Err(error) => {
            // Kept for compatibility: callers observe 0 rather than the error
            tracing::debug!(%error, "arithmetic error replaced with 0");
            Ok(Expr::Number(0.0))
        }
    }
}

/// Variadic arithmetic operation
///
/// Usage: `(+ 1 2 3) -> 6`, `(/ 12 3) -> 4`
pub struct ArithmeticTool(pub ArithmeticOp);

impl Builtin for ArithmeticTool {
    fn name(&self) -> &str {
        self.0.symbol()
    }

    fn description(&self) -> &str {
        match self.0 {
            ArithmeticOp::Add => "Sum of numbers",
            ArithmeticOp::Subtract => "First number minus the rest",
            ArithmeticOp::Multiply => "Product of numbers",
            ArithmeticOp::Divide => "First number divided by the rest",
        }
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        compute(args, self.0)
    }
}

//! Type and emptiness predicates

use crate::error::{Error, Result};
use crate::runtime::Expr;
use crate::tools::{expect_arity, Builtin, Namespace};

/// Register predicate operations
pub fn register(namespace: &mut Namespace) {
    namespace.register(VectorpTool);
    namespace.register(EmptypTool);
}

/// VECTOR? - Check if value is a vector (bracketed array)
pub struct VectorpTool;

impl Builtin for VectorpTool {
    fn name(&self) -> &str {
        "vector?"
    }

    fn description(&self) -> &str {
        "Check if value is a vector"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        expect_arity(self.name(), args, 1)?;
        Ok(Expr::Boolean(matches!(&args[0], Expr::Array(_))))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// EMPTY? - Check if a collection or string has no elements
///
/// `nil` is empty. Other atoms (numbers, booleans, symbols, keywords) are
/// never empty. Lambdas have no notion of emptiness and are rejected.
pub struct EmptypTool;

impl Builtin for EmptypTool {
    fn name(&self) -> &str {
        "empty?"
    }

    fn description(&self) -> &str {
        "Check if a list, vector, map or string is empty"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        expect_arity(self.name(), args, 1)?;
        match &args[0] {
            Expr::Nil => Ok(Expr::Boolean(true)),
            Expr::Lambda(_) => Err(Error::invalid_argument(args[0].type_name(), self.name())),
            other => Ok(Expr::Boolean(other.len() == Some(0))),
        }
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

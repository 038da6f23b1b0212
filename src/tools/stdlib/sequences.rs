//! Sequence construction and counting

use crate::error::{Error, Result};
use crate::runtime::Expr;
use crate::tools::{expect_arity, Builtin, Namespace};

/// Register sequence operations
pub fn register(namespace: &mut Namespace) {
    namespace.register(ListTool);
    namespace.register(CountTool);
}

/// LIST - Wrap the arguments in a list
///
/// Usage: `(list 1 2) -> (1 2)`, `(list) -> ()`
pub struct ListTool;

impl Builtin for ListTool {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "Create a list from the arguments"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        Ok(Expr::List(args.to_vec()))
    }
}

/// COUNT - Number of elements in a list, vector or map, or characters in a string
pub struct CountTool;

impl Builtin for CountTool {
    fn name(&self) -> &str {
        "count"
    }

    fn description(&self) -> &str {
        "Count elements of a collection or characters of a string"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        expect_arity(self.name(), args, 1)?;
        let len = args[0]
            .len()
            .ok_or_else(|| Error::invalid_argument(args[0].type_name(), self.name()))?;
        Ok(Expr::Number(len as f64))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

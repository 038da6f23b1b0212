//! Builtin operation namespace for Doodle
//!
//! Maps operation names to callables over expression argument lists. An
//! external evaluator resolves symbols through [`Namespace::get`] or
//! [`Namespace::lambda`] and applies them to evaluated arguments.

pub mod stdlib;

use crate::error::{Error, Result};
use crate::runtime::{Expr, Lambda};
use std::collections::HashMap;
use std::sync::Arc;

/// Builtin trait - every core operation implements this
pub trait Builtin: Send + Sync {
    /// Operation name as resolved from a symbol
    fn name(&self) -> &str;

    /// Operation description
    fn description(&self) -> &str;

    /// Apply the operation
    fn execute(&self, args: &[Expr]) -> Result<Expr>;

    /// Fixed argument count, `None` for variadic operations
    fn arity(&self) -> Option<usize> {
        None
    }
}

/// Fails with a wrong-arity error unless `args` has exactly `expected` items
pub fn expect_arity(operation: &str, args: &[Expr], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::arity(operation, expected.to_string(), args.len()))
    }
}

/// Builtin namespace
pub struct Namespace {
    builtins: HashMap<String, Arc<dyn Builtin>>,
}

impl Namespace {
    /// Create namespace with the core operations
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut namespace = Namespace::empty();

        #[cfg(feature = "stdlib")]
        stdlib::register_all(&mut namespace);

        namespace
    }

    /// Create empty namespace
    pub fn empty() -> Self {
        Namespace {
            builtins: HashMap::new(),
        }
    }

    /// Register an operation, replacing any previous one with the same name
    pub fn register<T: Builtin + 'static>(&mut self, builtin: T) {
        let name = builtin.name().to_string();
        tracing::debug!(%name, "registered builtin");
        self.builtins.insert(name, Arc::new(builtin));
    }

    /// Get operation by exact name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Builtin>> {
        self.builtins
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedBuiltin {
                name: name.to_string(),
            })
    }

    /// Operation wrapped as an expression value
    pub fn lambda(&self, name: &str) -> Result<Expr> {
        Ok(Expr::Lambda(Lambda::new(self.get(name)?)))
    }

    /// Look up and apply an operation
    pub fn call(&self, name: &str, args: &[Expr]) -> Result<Expr> {
        self.get(name)?.execute(args)
    }

    /// Description of an operation, for help listings
    pub fn describe(&self, name: &str) -> Result<&str> {
        self.builtins
            .get(name)
            .map(|builtin| builtin.description())
            .ok_or_else(|| Error::UndefinedBuiltin {
                name: name.to_string(),
            })
    }

    /// Check if operation exists
    pub fn has(&self, name: &str) -> bool {
        self.builtins.contains_key(name)
    }

    /// All operation names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.builtins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered operations
    pub fn count(&self) -> usize {
        self.builtins.len()
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

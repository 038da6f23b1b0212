//! # Doodle - a small symbolic-expression front end
//!
//! Doodle reads S-expression text into a homogeneous expression tree, prints
//! trees back to text, and provides a namespace of core operations (arithmetic,
//! predicates, list construction) that work directly on the tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use doodle::{prn_str, read_str, Expr, Namespace};
//!
//! # fn main() -> doodle::Result<()> {
//! let forms = read_str("(1 2 3) {:a 1}");
//! assert_eq!(forms.len(), 2);
//! assert_eq!(prn_str(&forms[0]), "(1 2 3)");
//!
//! let namespace = Namespace::new();
//! let Expr::List(items) = &forms[0] else { unreachable!() };
//! assert_eq!(namespace.call("+", items)?, Expr::Number(6.0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Text → tokenize → Tokens → Reader → Expr trees → prn_str | Namespace
//! ```
//!
//! - [`lexer`] - ordered regex rules turning text into token strings
//! - [`parser`] - immutable-cursor recursive-descent reader
//! - [`runtime`] - [`Expr`], the [`ExprKey`] map-key projection, and the printer
//! - [`tools`] - the [`Builtin`] trait and the [`Namespace`] of core operations
//!
//! ## Error Handling
//!
//! [`read_str`] never fails: a parse error is logged through `tracing` and an
//! empty sequence is returned. [`try_read_str`] returns the error instead.
//!
//! ```rust
//! use doodle::{read_str, try_read_str, Error};
//!
//! assert!(read_str("(1 2").is_empty());
//! assert_eq!(try_read_str("(1 2").unwrap_err(), Error::UnbalancedParentheses);
//! ```

/// Version of the Doodle crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod tools;

// Re-export main types
pub use error::{Error, ErrorKind, Result};
pub use lexer::tokenize;
pub use parser::{read_str, try_read_str, Reader};
pub use runtime::{print_expr, prn_str, Expr, ExprKey, Lambda, PrintOptions};
pub use tools::{Builtin, Namespace};

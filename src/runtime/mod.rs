//! Expression model and printer

mod printer;
mod value;

pub use printer::{print_expr, prn_str, PrintOptions};
pub use value::{Expr, ExprKey, Lambda};

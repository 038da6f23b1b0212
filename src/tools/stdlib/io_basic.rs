//! Output operations
//!
//! `prn` is the only operation in the core that performs I/O. Each call writes
//! one whole line while holding the stdout lock, so lines from concurrent
//! callers never interleave.

use std::io::Write;

use crate::error::{Error, Result};
use crate::runtime::{prn_str, Expr};
use crate::tools::{Builtin, Namespace};

/// Register output operations
pub fn register(namespace: &mut Namespace) {
    namespace.register(PrnTool);
}

/// Renders arguments as `prn` prints them, space separated
pub fn render_line(args: &[Expr]) -> String {
    args.iter().map(prn_str).collect::<Vec<_>>().join(" ")
}

/// PRN - Print arguments on one line to stdout
pub struct PrnTool;

impl Builtin for PrnTool {
    fn name(&self) -> &str {
        "prn"
    }

    fn description(&self) -> &str {
        "Print arguments separated by spaces, followed by a newline"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        let line = render_line(args);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line).map_err(|e| Error::Io(e.to_string()))?;
        Ok(Expr::Nil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line() {
        let args = vec![
            Expr::Number(1.0),
            Expr::string("two"),
            Expr::list(vec![Expr::keyword("three")]),
        ];
        assert_eq!(render_line(&args), "1 \"two\" (:three)");
        assert_eq!(render_line(&[]), "");
    }

    #[test]
    fn test_prn_returns_nil() {
        assert_eq!(PrnTool.execute(&[]).unwrap(), Expr::Nil);
        assert_eq!(PrnTool.execute(&[Expr::Number(42.0)]).unwrap(), Expr::Nil);
    }
}

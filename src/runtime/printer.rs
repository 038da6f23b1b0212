//! Textual rendering of expression trees

use std::fmt;

use super::value::Expr;

/// Printer configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Re-escape `"`, `\` and newlines inside strings so the output reads back
    /// to the same value. Off by default: strings are wrapped in quotes as-is.
    pub readably: bool,
}

impl PrintOptions {
    /// Options for output that `read_str` can reproduce
    pub fn readable() -> Self {
        PrintOptions { readably: true }
    }
}

/// Renders an expression in canonical form
///
/// Strings are not re-escaped, so `"a\"b"` prints as `"a"b"` and does not read
/// back to the same value. Use [`print_expr`] with [`PrintOptions::readable`]
/// for output meant to be read again.
pub fn prn_str(expr: &Expr) -> String {
    print_expr(expr, PrintOptions::default())
}

/// Renders an expression with explicit options
pub fn print_expr(expr: &Expr, options: PrintOptions) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, options);
    out
}

fn write_expr(out: &mut String, expr: &Expr, options: PrintOptions) {
    match expr {
        Expr::Symbol(name) | Expr::Identifier(name) => out.push_str(name),
        Expr::Keyword(name) => {
            out.push(':');
            out.push_str(name);
        }
        Expr::Number(n) => out.push_str(&n.to_string()),
        Expr::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Expr::String(s) => {
            out.push('"');
            if options.readably {
                write_escaped(out, s);
            } else {
                out.push_str(s);
            }
            out.push('"');
        }
        Expr::List(items) => write_seq(out, "(", ")", items, options),
        Expr::Array(items) => write_seq(out, "[", "]", items, options),
        Expr::Map(map) => {
            out.push('{');
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_expr(out, key.as_expr(), options);
                out.push(' ');
                write_expr(out, value, options);
            }
            out.push('}');
        }
        Expr::Nil => out.push_str("nil"),
        Expr::Lambda(_) => out.push_str("#<lambda>"),
    }
}

fn write_seq(out: &mut String, open: &str, close: &str, items: &[Expr], options: PrintOptions) {
    out.push_str(open);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_expr(out, item, options);
    }
    out.push_str(close);
}

fn write_escaped(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&prn_str(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Lambda;

    #[test]
    fn test_atoms() {
        assert_eq!(prn_str(&Expr::symbol("abc")), "abc");
        assert_eq!(prn_str(&Expr::keyword("key")), ":key");
        assert_eq!(prn_str(&Expr::Number(9.0)), "9");
        assert_eq!(prn_str(&Expr::Number(2.5)), "2.5");
        assert_eq!(prn_str(&Expr::Number(-3.0)), "-3");
        assert_eq!(prn_str(&Expr::Boolean(true)), "true");
        assert_eq!(prn_str(&Expr::Boolean(false)), "false");
        assert_eq!(prn_str(&Expr::Nil), "nil");
    }

    #[test]
    fn test_sequences() {
        let list = Expr::list(vec![
            Expr::symbol("+"),
            Expr::Number(1.0),
            Expr::array(vec![Expr::Number(2.0), Expr::Nil]),
        ]);
        assert_eq!(prn_str(&list), "(+ 1 [2 nil])");
        assert_eq!(prn_str(&Expr::list(vec![])), "()");
        assert_eq!(prn_str(&Expr::array(vec![])), "[]");
    }

    #[test]
    fn test_map_single_pair() {
        let map = Expr::map(vec![(Expr::keyword("a"), Expr::Number(1.0))]).unwrap();
        assert_eq!(prn_str(&map), "{:a 1}");
        assert_eq!(prn_str(&Expr::map(vec![]).unwrap()), "{}");
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let s = Expr::string("a\"b\\c");
        assert_eq!(prn_str(&s), "\"a\"b\\c\"");
    }

    #[test]
    fn test_readable_strings() {
        let s = Expr::string("a\"b\\c\nd");
        assert_eq!(
            print_expr(&s, PrintOptions::readable()),
            "\"a\\\"b\\\\c\\nd\""
        );
    }

    #[test]
    fn test_lambda_placeholder() {
        let f = Expr::Lambda(Lambda::from_fn("f", |_| Ok(Expr::Nil)));
        assert_eq!(prn_str(&f), "#<lambda>");
        assert_eq!(f.to_string(), "#<lambda>");
    }
}

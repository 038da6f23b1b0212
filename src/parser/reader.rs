use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::runtime::{prn_str, Expr, ExprKey};

/// Deepest nesting of sequences and maps the reader accepts
pub const MAX_DEPTH: usize = 256;

/// Immutable cursor into a token sequence
///
/// Every read step takes a cursor by value and returns the parsed form together
/// with a new cursor, so partial inputs can be re-read from any saved position.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    tokens: &'a [String],
    position: usize,
    depth: usize,
}

impl<'a> Reader<'a> {
    /// Creates a cursor at the start of `tokens`
    pub fn new(tokens: &'a [String]) -> Self {
        Reader {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Current token, `None` once the tokens are exhausted
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// Cursor one token further
    pub fn advance(self) -> Self {
        Reader {
            position: self.position + 1,
            ..self
        }
    }

    /// Cursor one nesting level deeper, failing past [`MAX_DEPTH`]
    pub fn enter(self) -> Result<Self> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::NestingTooDeep { limit: MAX_DEPTH });
        }
        Ok(Reader {
            depth: self.depth + 1,
            ..self
        })
    }

    /// Cursor one nesting level shallower
    pub fn leave(self) -> Self {
        Reader {
            depth: self.depth.saturating_sub(1),
            ..self
        }
    }

    /// Current nesting level
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Index of the current token
    pub fn position(&self) -> usize {
        self.position
    }

    /// True when no tokens remain
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// Reserved statement keywords
///
/// No statement grammar exists yet; a block led by one of these fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// `let`
    Let,
    /// `func`
    Func,
    /// `if`
    If,
    /// `for`
    For,
    /// `while`
    While,
}

impl StatementKind {
    /// Statement keyword for a token, if it is one
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "let" => Some(StatementKind::Let),
            "func" => Some(StatementKind::Func),
            "if" => Some(StatementKind::If),
            "for" => Some(StatementKind::For),
            "while" => Some(StatementKind::While),
            _ => None,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let word = match self {
            StatementKind::Let => "let",
            StatementKind::Func => "func",
            StatementKind::If => "if",
            StatementKind::For => "for",
            StatementKind::While => "while",
        };
        f.write_str(word)
    }
}

/// What the leading token of a block introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Atom, sequence or map
    Expression,
    /// Statement form led by a reserved keyword
    Statement(StatementKind),
}

impl BlockKind {
    /// Classifies a block by its leading token
    pub fn classify(token: &str) -> Self {
        match StatementKind::from_token(token) {
            Some(kind) => BlockKind::Statement(kind),
            None => BlockKind::Expression,
        }
    }
}

/// Reads one block at the cursor
pub fn read_block(reader: Reader) -> Result<(Expr, Reader)> {
    let token = reader.peek().ok_or(Error::UnexpectedEof)?;

    match BlockKind::classify(token) {
        BlockKind::Statement(kind) => read_statement(kind, reader),
        BlockKind::Expression => read_expression(reader),
    }
}

/// Reads blocks until the cursor is exhausted
pub fn read_blocks(reader: Reader) -> Result<(Vec<Expr>, Reader)> {
    let mut reader = reader;
    let mut exprs = Vec::new();

    while !reader.is_at_end() {
        let (expr, next) = read_block(reader)?;
        exprs.push(expr);
        reader = next;
    }

    Ok((exprs, reader))
}

fn read_statement(kind: StatementKind, _reader: Reader) -> Result<(Expr, Reader)> {
    Err(Error::InvalidSyntax(format!(
        "`{}` statements are not supported",
        kind
    )))
}

/// Reads an atom, sequence or map at the cursor
pub fn read_expression(reader: Reader) -> Result<(Expr, Reader)> {
    match reader.peek() {
        None => Err(Error::UnexpectedEof),
        Some("(") => read_sequence(reader, "(", ")"),
        Some("[") => read_sequence(reader, "[", "]"),
        Some("{") => read_hash_map(reader),
        Some(")") | Some("]") | Some("}") => Err(Error::UnbalancedParentheses),
        Some(_) => read_atom(reader),
    }
}

// ============================================================================
// Atoms
// ============================================================================

fn parse_number(token: &str) -> Option<f64> {
    // `f64::from_str` also accepts `inf` and `nan`; those stay symbols
    let numeric = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric {
        return None;
    }
    // Literals that overflow to infinity stay symbols too
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Classifies the token at the cursor as a single atom
pub fn read_atom(reader: Reader) -> Result<(Expr, Reader)> {
    let token = reader.peek().ok_or(Error::UnexpectedEof)?;

    let expr = if let Some(number) = parse_number(token) {
        Expr::Number(number)
    } else if let Some(name) = token.strip_prefix(':') {
        Expr::Keyword(name.to_string())
    } else if token == "nil" {
        Expr::Nil
    } else if token == "true" {
        Expr::Boolean(true)
    } else if token == "false" {
        Expr::Boolean(false)
    } else if token.starts_with('"') {
        read_string_literal(token)?
    } else {
        Expr::Symbol(token.to_string())
    };

    Ok((expr, reader.advance()))
}

/// Decodes a quoted string token
///
/// Recognized escapes are `\"`, `\n` and `\\`.
pub fn read_string_literal(token: &str) -> Result<Expr> {
    let body = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| Error::InvalidInput("Invalid string termination".to_string()))?;

    let mut value = String::with_capacity(body.len());
    let mut escape_next = false;

    for c in body.chars() {
        if escape_next {
            match c {
                '"' => value.push('"'),
                'n' => value.push('\n'),
                '\\' => value.push('\\'),
                _ => {
                    return Err(Error::InvalidInput(format!(
                        "Invalid escape sequence \\{}",
                        c
                    )))
                }
            }
            escape_next = false;
        } else if c == '\\' {
            escape_next = true;
        } else {
            value.push(c);
        }
    }

    if escape_next {
        return Err(Error::InvalidInput("Invalid string termination".to_string()));
    }

    Ok(Expr::String(value))
}

// ============================================================================
// Sequences and maps
// ============================================================================

/// Reads a delimited sequence starting at the `start` token
///
/// Produces a `List` for `(`, an `Array` otherwise.
pub fn read_sequence<'a>(
    reader: Reader<'a>,
    start: &str,
    end: &str,
) -> Result<(Expr, Reader<'a>)> {
    if reader.peek() != Some(start) {
        return Err(Error::InvalidSyntax(format!("Expected `{}`", start)));
    }

    let mut reader = reader.enter()?.advance();
    let mut items = Vec::new();

    loop {
        match reader.peek() {
            None => return Err(Error::UnbalancedParentheses),
            Some(token) if token == end => break,
            Some(_) => {
                let (expr, next) = read_block(reader)?;
                items.push(expr);
                reader = next;
            }
        }
    }

    let expr = if start == "(" {
        Expr::List(items)
    } else {
        Expr::Array(items)
    };
    Ok((expr, reader.leave().advance()))
}

/// Reads a `{ key value ... }` map starting at the `{` token
///
/// Duplicate keys keep the last value.
pub fn read_hash_map(reader: Reader) -> Result<(Expr, Reader)> {
    if reader.peek() != Some("{") {
        return Err(Error::InvalidSyntax("Expected `{`".to_string()));
    }

    let mut reader = reader.enter()?.advance();
    let mut map = HashMap::new();

    loop {
        match reader.peek() {
            None => return Err(Error::UnbalancedParentheses),
            Some("}") => break,
            Some(_) => {}
        }

        let (key_expr, next) = read_block(reader)?;
        reader = next;

        match reader.peek() {
            None => return Err(Error::UnbalancedParentheses),
            Some("}") => {
                return Err(Error::UnequalKeyValueCount {
                    key: prn_str(&key_expr),
                })
            }
            Some(_) => {}
        }

        let key = ExprKey::try_from(key_expr)?;
        let (value, next) = read_block(reader)?;
        map.insert(key, value);
        reader = next;
    }

    Ok((Expr::Map(map), reader.leave().advance()))
}

// ============================================================================
// Entry points
// ============================================================================

/// Reads every top-level form in `input`, reporting the first parse error
pub fn try_read_str(input: &str) -> Result<Vec<Expr>> {
    let tokens = tokenize(input);
    let (exprs, _) = read_blocks(Reader::new(&tokens))?;
    Ok(exprs)
}

/// Reads every top-level form in `input`
///
/// A parse error anywhere is logged and yields an empty sequence; use
/// [`try_read_str`] to observe the error.
pub fn read_str(input: &str) -> Vec<Expr> {
    match try_read_str(input) {
        Ok(exprs) => exprs,
        Err(error) => {
            tracing::warn!(%error, "parsing error");
            Vec::new()
        }
    }
}

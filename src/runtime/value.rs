use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::tools::Builtin;

/// Expression tree node
///
/// Trees are acyclic and own their children; `clone` is a deep copy.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Unresolved identifier
    Symbol(String),
    /// Self-evaluating tagged atom, printed as `:name`
    Keyword(String),
    /// 64-bit floating-point number
    Number(f64),
    /// Absent value
    Nil,
    /// Boolean value
    Boolean(bool),
    /// Decoded string (escapes already resolved)
    String(String),
    /// Raw-token placeholder reserved for statement forms
    Identifier(String),
    /// Parenthesized sequence `( ... )`
    List(Vec<Expr>),
    /// Bracketed sequence `[ ... ]`
    Array(Vec<Expr>),
    /// Braced mapping `{ k v ... }`
    Map(HashMap<ExprKey, Expr>),
    /// Opaque built-in operation
    Lambda(Lambda),
}

impl Expr {
    /// Creates a list from elements
    pub fn list(elements: Vec<Expr>) -> Self {
        Expr::List(elements)
    }

    /// Creates an array (vector form) from elements
    pub fn array(elements: Vec<Expr>) -> Self {
        Expr::Array(elements)
    }

    /// Creates a map from key/value pairs, last write wins on duplicates
    pub fn map<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Expr, Expr)>,
    {
        let mut map = HashMap::new();
        for (key, value) in pairs {
            map.insert(ExprKey::try_from(key)?, value);
        }
        Ok(Expr::Map(map))
    }

    /// Creates a symbol
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    /// Creates a keyword (name without the leading colon)
    pub fn keyword(name: impl Into<String>) -> Self {
        Expr::Keyword(name.into())
    }

    /// Creates a string value
    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    /// Returns the variant name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Symbol(_) => "symbol",
            Expr::Keyword(_) => "keyword",
            Expr::Number(_) => "number",
            Expr::Nil => "nil",
            Expr::Boolean(_) => "boolean",
            Expr::String(_) => "string",
            Expr::Identifier(_) => "identifier",
            Expr::List(_) => "list",
            Expr::Array(_) => "vector",
            Expr::Map(_) => "map",
            Expr::Lambda(_) => "lambda",
        }
    }

    /// True if this expression (and everything it contains) can be a map key
    pub fn is_keyable(&self) -> bool {
        match self {
            Expr::Identifier(_) | Expr::Lambda(_) => false,
            Expr::List(items) | Expr::Array(items) => items.iter().all(Expr::is_keyable),
            Expr::Map(map) => map.values().all(Expr::is_keyable),
            _ => true,
        }
    }

    /// Key projection of this expression, `None` for identifiers and lambdas
    pub fn to_key(&self) -> Option<ExprKey> {
        if self.is_keyable() {
            Some(ExprKey(self.clone()))
        } else {
            None
        }
    }

    /// Element or character count, `None` when the variant has no length
    pub fn len(&self) -> Option<usize> {
        match self {
            Expr::List(items) | Expr::Array(items) => Some(items.len()),
            Expr::Map(map) => Some(map.len()),
            Expr::String(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Looks up `key` in a map expression
    pub fn get(&self, key: &Expr) -> Option<&Expr> {
        match self {
            Expr::Map(map) => map.get(&key.to_key()?),
            _ => None,
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Symbol(a), Expr::Symbol(b)) => a == b,
            (Expr::Keyword(a), Expr::Keyword(b)) => a == b,
            (Expr::Number(a), Expr::Number(b)) => a == b,
            (Expr::Nil, Expr::Nil) => true,
            (Expr::Boolean(a), Expr::Boolean(b)) => a == b,
            (Expr::String(a), Expr::String(b)) => a == b,
            (Expr::Identifier(a), Expr::Identifier(b)) => a == b,
            (Expr::List(a), Expr::List(b)) => a == b,
            (Expr::Array(a), Expr::Array(b)) => a == b,
            (Expr::Map(a), Expr::Map(b)) => a == b,
            (Expr::Lambda(a), Expr::Lambda(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Number(n)
    }
}

impl From<bool> for Expr {
    fn from(b: bool) -> Self {
        Expr::Boolean(b)
    }
}

// ============================================================================
// Map keys
// ============================================================================

/// Hashable projection of [`Expr`] used as map keys
///
/// Only constructible from keyable expressions, so `Identifier` and `Lambda`
/// never appear anywhere inside a key. Numbers compare by value with `0.0` and
/// `-0.0` identified and every NaN equal to every other NaN, which keeps `Eq`
/// reflexive.
#[derive(Debug, Clone)]
pub struct ExprKey(Expr);

impl ExprKey {
    /// Borrows the keyed expression
    pub fn as_expr(&self) -> &Expr {
        &self.0
    }

    /// Converts the key back into an equivalent expression
    pub fn to_expr(&self) -> Expr {
        self.0.clone()
    }

    /// Consumes the key, returning the expression
    pub fn into_expr(self) -> Expr {
        self.0
    }
}

impl TryFrom<Expr> for ExprKey {
    type Error = Error;

    fn try_from(expr: Expr) -> Result<Self> {
        if expr.is_keyable() {
            Ok(ExprKey(expr))
        } else {
            Err(Error::InvalidMapKey)
        }
    }
}

impl From<ExprKey> for Expr {
    fn from(key: ExprKey) -> Self {
        key.0
    }
}

impl PartialEq for ExprKey {
    fn eq(&self, other: &Self) -> bool {
        key_eq(&self.0, &other.0)
    }
}

impl Eq for ExprKey {}

impl Hash for ExprKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_expr(&self.0, state);
    }
}

impl fmt::Display for ExprKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn canonical_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

fn key_eq(a: &Expr, b: &Expr) -> bool {
    match (a, b) {
        (Expr::Number(x), Expr::Number(y)) => canonical_bits(*x) == canonical_bits(*y),
        (Expr::List(xs), Expr::List(ys)) | (Expr::Array(xs), Expr::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| key_eq(x, y))
        }
        (Expr::Map(xs), Expr::Map(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, v)| ys.get(k).is_some_and(|other| key_eq(v, other)))
        }
        _ => a == b,
    }
}

fn hash_expr<H: Hasher>(expr: &Expr, state: &mut H) {
    std::mem::discriminant(expr).hash(state);
    match expr {
        Expr::Symbol(s) | Expr::Keyword(s) | Expr::String(s) | Expr::Identifier(s) => {
            s.hash(state)
        }
        Expr::Number(n) => canonical_bits(*n).hash(state),
        Expr::Boolean(b) => b.hash(state),
        Expr::Nil => {}
        Expr::List(items) | Expr::Array(items) => {
            state.write_usize(items.len());
            for item in items {
                hash_expr(item, state);
            }
        }
        Expr::Map(map) => {
            // Entry hashes are sorted so iteration order does not leak into the hash
            let mut entries: Vec<u64> = map
                .iter()
                .map(|(k, v)| {
                    let mut hasher = DefaultHasher::new();
                    k.hash(&mut hasher);
                    hash_expr(v, &mut hasher);
                    hasher.finish()
                })
                .collect();
            entries.sort_unstable();
            state.write_usize(entries.len());
            for entry in entries {
                state.write_u64(entry);
            }
        }
        Expr::Lambda(lambda) => lambda.name().hash(state),
    }
}

// ============================================================================
// Lambda
// ============================================================================

/// Opaque callable stored in an expression
///
/// Equality is identity of the underlying operation.
#[derive(Clone)]
pub struct Lambda(Arc<dyn Builtin>);

impl Lambda {
    /// Wraps a shared builtin
    pub fn new(builtin: Arc<dyn Builtin>) -> Self {
        Lambda(builtin)
    }

    /// Wraps a closure as a named operation
    pub fn from_fn<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Expr]) -> Result<Expr> + Send + Sync + 'static,
    {
        Lambda(Arc::new(FnBuiltin {
            name: name.into(),
            func,
        }))
    }

    /// Operation name
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Applies the operation to an argument list
    pub fn call(&self, args: &[Expr]) -> Result<Expr> {
        self.0.execute(args)
    }
}

impl fmt::Debug for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lambda").field(&self.name()).finish()
    }
}

impl PartialEq for Lambda {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

struct FnBuiltin<F> {
    name: String,
    func: F,
}

impl<F> Builtin for FnBuiltin<F>
where
    F: Fn(&[Expr]) -> Result<Expr> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Closure-backed operation"
    }

    fn execute(&self, args: &[Expr]) -> Result<Expr> {
        (self.func)(args)
    }
}

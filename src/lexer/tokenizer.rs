use lazy_static::lazy_static;
use regex::Regex;

/// Lexer rules in priority order
///
/// All rules are joined into one alternation. At each scan position the first
/// rule that matches wins, even when a later rule would match a longer span.
/// Characters no rule matches are skipped.
pub const RULES: &[(&str, &str)] = &[
    // Double-quoted string with backslash escapes
    ("string", r#""[^"\\]*(?:\\.[^"\\]*)*""#),
    ("number", r"[0-9]+(?:\.[0-9]+)?(?:[eE][+\-]?[0-9]+)?"),
    ("bracket", r"[\[\]]"),
    ("paren", r"[()]"),
    ("brace", r"[{}]"),
    // Symbols, keywords and operator names
    ("word", r"[\w\-+*/!?<>=%&.:]+"),
    ("comment", r";[^\n]*"),
    ("whitespace", r"\s+"),
    ("comma", r","),
    // Shadowed by `word`; kept so the table lists every literal class
    ("boolean", r"true|false"),
];

lazy_static! {
    static ref TOKEN_PATTERN: Regex = {
        let alternation = RULES
            .iter()
            .map(|(_, pattern)| format!("(?:{})", pattern))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("lexer rules form a valid pattern")
    };
}

/// Splits source text into token strings
///
/// Matches are trimmed; whitespace, commas and `;` comments are dropped.
pub fn tokenize(input: &str) -> Vec<String> {
    let tokens: Vec<String> = TOKEN_PATTERN
        .find_iter(input)
        .map(|m| m.as_str().trim())
        .filter(|token| !token.is_empty() && !token.starts_with(';') && *token != ",")
        .map(str::to_string)
        .collect();

    tracing::trace!(count = tokens.len(), "tokenized input");
    tokens
}

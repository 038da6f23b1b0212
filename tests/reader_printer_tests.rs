/// Integration tests for the reader and printer working together
/// Demonstrates: tokenize → Reader → Expr → prn_str
use doodle::{print_expr, prn_str, read_str, tokenize, try_read_str, Error, Expr, PrintOptions};

#[test]
fn test_read_and_print_nested_forms() {
    let source = "(define [x 1.5 nil] (true false))";
    let forms = read_str(source);

    assert_eq!(forms.len(), 1);
    assert_eq!(prn_str(&forms[0]), "(define [x 1.5 nil] (true false))");
}

#[test]
fn test_multiple_top_level_forms() {
    let forms = read_str("1 :two \"three\" (4) [5]");

    assert_eq!(
        forms,
        vec![
            Expr::Number(1.0),
            Expr::keyword("two"),
            Expr::string("three"),
            Expr::list(vec![Expr::Number(4.0)]),
            Expr::array(vec![Expr::Number(5.0)]),
        ]
    );
}

#[test]
fn test_operator_symbols_survive() {
    let forms = read_str("(+ 1 (- 5 2) (* 2 3) (/ 8 4))");
    let Expr::List(items) = &forms[0] else {
        panic!("Expected list");
    };

    assert_eq!(items[0], Expr::symbol("+"));
    assert_eq!(prn_str(&forms[0]), "(+ 1 (- 5 2) (* 2 3) (/ 8 4))");
}

#[test]
fn test_negative_numbers() {
    let forms = read_str("(-5 -0.5 3e2)");
    assert_eq!(
        forms[0],
        Expr::list(vec![
            Expr::Number(-5.0),
            Expr::Number(-0.5),
            Expr::Number(300.0),
        ])
    );
}

#[test]
fn test_map_key_normalization() {
    let forms = read_str("{:a 1 :b 2}");
    assert_eq!(forms.len(), 1);

    let map = &forms[0];
    assert_eq!(map.get(&Expr::keyword("a")), Some(&Expr::Number(1.0)));
    assert_eq!(map.get(&Expr::keyword("b")), Some(&Expr::Number(2.0)));

    // Pair order follows the hash map and is unspecified
    let printed = prn_str(map);
    assert!(printed == "{:a 1 :b 2}" || printed == "{:b 2 :a 1}", "{}", printed);
}

#[test]
fn test_map_round_trips_through_printer() {
    let forms = read_str("{:name \"doodle\" [1 2] (x) 3 nil}");
    let reread = read_str(&prn_str(&forms[0]));

    assert_eq!(reread, forms);
}

#[test]
fn test_string_escape_asymmetry() {
    let original = Expr::string("a\"b");
    let printed = prn_str(&original);
    assert_eq!(printed, "\"a\"b\"");

    // The unescaped quote splits the literal, so the value is not reproduced
    let reread = read_str(&printed);
    assert_ne!(reread, vec![original]);
}

#[test]
fn test_readable_printing_round_trips_strings() {
    let original = Expr::string("say \"hi\"\\\nbye");
    let printed = print_expr(&original, PrintOptions::readable());

    assert_eq!(read_str(&printed), vec![original]);
}

#[test]
fn test_unbalanced_input_yields_empty() {
    for source in ["(1 2", "[1 (2 3]", "{:a 1", "(1 2))", "]"] {
        assert!(read_str(source).is_empty(), "{} should not read", source);
        assert!(try_read_str(source).is_err());
    }
}

#[test]
fn test_one_bad_form_discards_everything() {
    assert!(read_str("(1 2) (3 4").is_empty());
    assert!(read_str("1 2 (let x 3)").is_empty());
}

#[test]
fn test_statement_keywords_are_reserved() {
    for keyword in ["let", "func", "if", "for", "while"] {
        let err = try_read_str(&format!("({} a b)", keyword)).unwrap_err();
        assert!(matches!(err, Error::InvalidSyntax(_)), "{}: {:?}", keyword, err);
    }

    // Only exact words are reserved
    assert_eq!(read_str("(lets iffy)").len(), 1);
}

#[test]
fn test_comments_and_commas() {
    let source = "
        ; leading comment
        [1, 2, 3] ; trailing comment
    ";
    assert_eq!(
        read_str(source),
        vec![Expr::array(vec![
            Expr::Number(1.0),
            Expr::Number(2.0),
            Expr::Number(3.0),
        ])]
    );
}

#[test]
fn test_standalone_colon() {
    assert_eq!(tokenize(":"), vec![":"]);
    assert_eq!(read_str(":"), vec![Expr::keyword("")]);
    assert_eq!(prn_str(&Expr::keyword("")), ":");
}

#[test]
fn test_invalid_escape_fails_read() {
    assert_eq!(
        try_read_str(r#""tab\there""#).unwrap_err(),
        Error::InvalidInput("Invalid escape sequence \\t".to_string())
    );
}

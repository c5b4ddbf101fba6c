//! Lexer tests.
//!
//! Covers: keywords, operators, punctuation, integer literals, whitespace
//! and newline handling, spans, raw text, the unexpected-character policy,
//! and a determinism check.

use bee_lexer::{Lexer, TokenKind, ALL_KEYWORDS};
use bee_types::{ErrorCode, SourceFile, Span};
use pretty_assertions::assert_eq;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the token kinds (excluding final Eof).
fn kinds(source: &str) -> Vec<TokenKind> {
    kinds_with_eof(source)
        .into_iter()
        .filter(|k| *k != TokenKind::Eof)
        .collect()
}

/// Lex and return all token kinds including Eof.
fn kinds_with_eof(source: &str) -> Vec<TokenKind> {
    let sf = SourceFile::new("test.bee", source);
    Lexer::new(&sf)
        .lex()
        .tokens
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn error_count(source: &str) -> usize {
    let sf = SourceFile::new("test.bee", source);
    Lexer::new(&sf).lex().errors.total_errors
}

fn first_error(source: &str) -> String {
    let sf = SourceFile::new("test.bee", source);
    Lexer::new(&sf)
        .lex()
        .errors
        .errors
        .first()
        .map(|e| e.message.clone())
        .unwrap_or_default()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

// ─────────────────────────────────────────────────────────────────────
// Basic statements
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_simple_assignment() {
    assert_eq!(
        kinds_with_eof("x = 0;"),
        vec![
            ident("x"),
            TokenKind::Eq,
            TokenKind::Number(0),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_move_statement() {
    assert_eq!(
        kinds("move(north);"),
        vec![
            TokenKind::Move,
            TokenKind::LParen,
            TokenKind::North,
            TokenKind::RParen,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_while_loop() {
    assert_eq!(
        kinds("while (x == 0) { x = x + 1; }"),
        vec![
            TokenKind::While,
            TokenKind::LParen,
            ident("x"),
            TokenKind::EqEq,
            TokenKind::Number(0),
            TokenKind::RParen,
            TokenKind::LBrace,
            ident("x"),
            TokenKind::Eq,
            ident("x"),
            TokenKind::Plus,
            TokenKind::Number(1),
            TokenKind::Semicolon,
            TokenKind::RBrace,
        ]
    );
}

#[test]
fn test_call_expression() {
    assert_eq!(
        kinds("isPathBlocked(east)"),
        vec![
            ident("isPathBlocked"),
            TokenKind::LParen,
            TokenKind::East,
            TokenKind::RParen,
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Keywords
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_every_keyword_lexes_as_keyword() {
    for &kw in ALL_KEYWORDS {
        let got = kinds(kw);
        assert_eq!(got.len(), 1, "'{kw}' should be a single token");
        assert!(got[0].is_keyword(), "'{kw}' should lex as a keyword");
        assert_eq!(got[0].to_string(), kw);
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(
        kinds("If North MOVE Player"),
        vec![ident("If"), ident("North"), ident("MOVE"), ident("Player")]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    assert_eq!(
        kinds("moves northward iff repeat_count"),
        vec![
            ident("moves"),
            ident("northward"),
            ident("iff"),
            ident("repeat_count"),
        ]
    );
}

#[test]
fn test_moveto_is_distinct_from_move() {
    assert_eq!(kinds("move moveto"), vec![TokenKind::Move, TokenKind::MoveTo]);
}

// ─────────────────────────────────────────────────────────────────────
// Operators and punctuation
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_all_operator_tokens() {
    assert_eq!(
        kinds("+ - * / = =="),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::EqEq,
        ]
    );
}

#[test]
fn test_triple_equals_is_eqeq_then_eq() {
    assert_eq!(kinds("==="), vec![TokenKind::EqEq, TokenKind::Eq]);
}

#[test]
fn test_split_equals_are_two_assignments() {
    assert_eq!(kinds("= ="), vec![TokenKind::Eq, TokenKind::Eq]);
}

#[test]
fn test_punctuation_tokens() {
    assert_eq!(
        kinds("( ) { } ; ,"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn test_no_whitespace_needed() {
    assert_eq!(
        kinds("x=-1*(2/y);"),
        vec![
            ident("x"),
            TokenKind::Eq,
            TokenKind::Minus,
            TokenKind::Number(1),
            TokenKind::Star,
            TokenKind::LParen,
            TokenKind::Number(2),
            TokenKind::Slash,
            ident("y"),
            TokenKind::RParen,
            TokenKind::Semicolon,
        ]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Number literals
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_integer_literals() {
    assert_eq!(
        kinds("0 7 42 1000"),
        vec![
            TokenKind::Number(0),
            TokenKind::Number(7),
            TokenKind::Number(42),
            TokenKind::Number(1000),
        ]
    );
}

#[test]
fn test_negative_number_is_minus_then_number() {
    assert_eq!(kinds("-5"), vec![TokenKind::Minus, TokenKind::Number(5)]);
}

#[test]
fn test_leading_zeros() {
    assert_eq!(kinds("007"), vec![TokenKind::Number(7)]);
}

#[test]
fn test_i64_max_fits() {
    assert_eq!(
        kinds("9223372036854775807"),
        vec![TokenKind::Number(i64::MAX)]
    );
    assert_eq!(error_count("9223372036854775807"), 0);
}

#[test]
fn test_integer_out_of_range() {
    let sf = SourceFile::new("test.bee", "x = 99999999999999999999;");
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.errors.total_errors, 1);
    let err = &result.errors.errors[0];
    assert_eq!(err.code, ErrorCode::INTEGER_OUT_OF_RANGE);
    assert_eq!(
        err.message,
        "integer literal '99999999999999999999' is out of range"
    );
    assert_eq!(err.span, Span::new(1, 5, 1, 24));
}

#[test]
fn test_digits_then_letters_split() {
    assert_eq!(kinds("3x"), vec![TokenKind::Number(3), ident("x")]);
}

// ─────────────────────────────────────────────────────────────────────
// Whitespace, newlines and spans
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(kinds_with_eof(""), vec![TokenKind::Eof]);
    assert_eq!(kinds_with_eof("  \n\t\r\n "), vec![TokenKind::Eof]);
}

#[test]
fn test_exactly_one_eof() {
    let sf = SourceFile::new("test.bee", "x = 1;\n\n");
    let tokens = Lexer::new(&sf).lex().tokens;
    let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
}

#[test]
fn test_newlines_produce_no_tokens() {
    assert_eq!(
        kinds("x\n=\n1\n;"),
        vec![ident("x"), TokenKind::Eq, TokenKind::Number(1), TokenKind::Semicolon]
    );
}

#[test]
fn test_tabs_and_crlf_are_whitespace() {
    assert_eq!(
        kinds("x\t=\t1;\r\ny = 2;\r\n"),
        vec![
            ident("x"),
            TokenKind::Eq,
            TokenKind::Number(1),
            TokenKind::Semicolon,
            ident("y"),
            TokenKind::Eq,
            TokenKind::Number(2),
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(error_count("x\t=\t1;\r\n"), 0);
}

#[test]
fn test_token_positions() {
    let sf = SourceFile::new("test.bee", "x = 10;\n  move(west);");
    let tokens = Lexer::new(&sf).lex().tokens;

    assert_eq!(tokens[0].span, Span::new(1, 1, 1, 1));
    assert_eq!(tokens[1].span, Span::new(1, 3, 1, 3));
    assert_eq!(tokens[2].span, Span::new(1, 5, 1, 6));
    assert_eq!(tokens[3].span, Span::new(1, 7, 1, 7));

    // `move` on line 2, after two spaces
    assert_eq!(tokens[4].kind, TokenKind::Move);
    assert_eq!(tokens[4].span, Span::new(2, 3, 2, 6));
    assert_eq!(tokens[6].kind, TokenKind::West);
    assert_eq!(tokens[6].span, Span::new(2, 8, 2, 11));
}

#[test]
fn test_token_raw_text() {
    let sf = SourceFile::new("test.bee", "count == 007;");
    let tokens = Lexer::new(&sf).lex().tokens;
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["count", "==", "007", ";", ""]);
}

// ─────────────────────────────────────────────────────────────────────
// Unexpected characters
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_unexpected_character_reported() {
    let sf = SourceFile::new("test.bee", "x = 1 # comment");
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.errors.total_errors, 1);
    let err = &result.errors.errors[0];
    assert_eq!(err.code, ErrorCode::UNEXPECTED_CHARACTER);
    assert_eq!(err.message, "unexpected character '#'");
    assert_eq!(err.span.start_col, 7);
    assert_eq!(err.source_line, "x = 1 # comment");
    assert_eq!(err.file, "test.bee");
}

#[test]
fn test_scanning_continues_after_bad_character() {
    assert_eq!(
        kinds("x = 1 @ 2;"),
        vec![
            ident("x"),
            TokenKind::Eq,
            TokenKind::Number(1),
            TokenKind::Number(2),
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_every_bad_character_reported() {
    assert_eq!(error_count("x = 1 < 2 > 3 ! 4;"), 3);
    assert_eq!(first_error("a.b"), "unexpected character '.'");
}

#[test]
fn test_non_ascii_character_reported_once() {
    assert_eq!(error_count("x = é;"), 1);
    assert_eq!(first_error("🐝"), "unexpected character '\\u{1f41d}'");
}

#[test]
fn test_non_ascii_identifier_start_rejected() {
    assert_eq!(error_count("ñame = 1;"), 1);
    assert_eq!(kinds("ñame = 1;")[0], ident("ame"));
}

#[test]
fn test_error_cap() {
    let source = "$".repeat(50);
    let sf = SourceFile::new("test.bee", source.as_str());
    let result = Lexer::new(&sf).lex();
    assert_eq!(result.errors.errors.len(), bee_types::MAX_ERRORS);
    assert_eq!(result.tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
}

// ─────────────────────────────────────────────────────────────────────
// A full script
// ─────────────────────────────────────────────────────────────────────

const LEVEL: &str = r#"
steps = 0;
while (isPathBlocked(north) == false) {
    move(north);
    steps = steps + 1;
}
repeat (getNumEnemies()) {
    attack(Player, Enemy);
}
if (steps == 3) { moveto(1, 0, 2); } else { move(Player, -1, 0); }
"#;

#[test]
fn test_level_script_lexes_cleanly() {
    let sf = SourceFile::new("level.bee", LEVEL);
    let result = Lexer::new(&sf).lex();
    assert!(!result.errors.has_errors(), "{}", result.errors);
    assert_eq!(result.tokens.len(), 72);
}

#[test]
fn test_lexer_determinism_100_iterations() {
    let sf = SourceFile::new("level.bee", LEVEL);
    let first = Lexer::new(&sf).lex().tokens;
    for i in 0..100 {
        let again = Lexer::new(&sf).lex().tokens;
        assert_eq!(first, again, "Determinism failure at iteration {i}");
    }
}

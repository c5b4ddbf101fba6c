//! Grammar edge cases: nesting limits and error positions.

use bee_lexer::Lexer;
use bee_parser::{ParseResult, Parser, MAX_NESTING_DEPTH};
use bee_types::ast::*;
use bee_types::{ErrorCode, SourceFile};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn parse(source: &str) -> ParseResult {
    let sf = SourceFile::new("test.bee", source);
    let lex = Lexer::new(&sf).lex();
    Parser::new(lex.tokens, &sf).parse()
}

fn first_code(source: &str) -> Option<ErrorCode> {
    parse(source).errors.first().map(|e| e.code)
}

fn nested_parens(depth: usize) -> String {
    format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth))
}

fn sum_of_ones(terms: usize) -> String {
    format!("x = {};", vec!["1"; terms].join(" + "))
}

fn nested_ifs(depth: usize) -> String {
    format!("{}x = 1;{}", "if (true) { ".repeat(depth), " }".repeat(depth))
}

// ─────────────────────────────────────────────────────────────────────
// Nesting limits (E203)
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parens_at_limit_accepted() {
    let depth = MAX_NESTING_DEPTH as usize - 1;
    let result = parse(&nested_parens(depth));
    assert!(!result.errors.has_errors(), "{}", result.errors);
}

#[test]
fn test_parens_past_limit_rejected() {
    let depth = MAX_NESTING_DEPTH as usize;
    assert_eq!(
        first_code(&nested_parens(depth)),
        Some(ErrorCode::NESTING_TOO_DEEP)
    );
}

#[test]
fn test_deep_parens_report_once() {
    let result = parse(&nested_parens(10_000));
    assert_eq!(result.errors.total_errors, 1);
    assert!(result.program.is_none());
    assert_eq!(
        result.errors.errors[0].message,
        "nesting too deep: maximum depth is 64"
    );
}

#[test]
fn test_unary_chain_counts_toward_limit() {
    let ok = format!("x = {}1;", "-".repeat(MAX_NESTING_DEPTH as usize - 1));
    assert!(!parse(&ok).errors.has_errors());

    let deep = format!("x = {}1;", "-".repeat(5_000));
    assert_eq!(first_code(&deep), Some(ErrorCode::NESTING_TOO_DEEP));
}

#[test]
fn test_nested_blocks_within_limit() {
    let result = parse(&nested_ifs(MAX_NESTING_DEPTH as usize - 1));
    assert!(!result.errors.has_errors(), "{}", result.errors);
}

#[test]
fn test_nested_blocks_past_limit() {
    assert_eq!(
        first_code(&nested_ifs(1_000)),
        Some(ErrorCode::NESTING_TOO_DEEP)
    );
}

#[test]
fn test_long_operator_chain_rejected() {
    let result = parse(&sum_of_ones(10_000));
    assert_eq!(result.errors.total_errors, 1);
    assert_eq!(result.errors.errors[0].code, ErrorCode::NESTING_TOO_DEEP);
    assert!(result.program.is_none());
}

#[test]
fn test_operator_chain_within_limit() {
    let terms = MAX_NESTING_DEPTH as usize;
    let result = parse(&sum_of_ones(terms));
    assert!(!result.errors.has_errors(), "{}", result.errors);

    assert_eq!(
        first_code(&sum_of_ones(terms + 1)),
        Some(ErrorCode::NESTING_TOO_DEEP)
    );
}

#[test]
fn test_mixed_chains_release_levels_per_term() {
    let term = vec!["2"; 40].join(" * ");
    let source = format!("x = {};", vec![term.as_str(); 20].join(" - "));
    let result = parse(&source);
    assert!(!result.errors.has_errors(), "{}", result.errors);
}

#[test]
fn test_equality_chain_counts_toward_limit() {
    let source = format!("x = {};", vec!["1"; 5_000].join(" == "));
    assert_eq!(first_code(&source), Some(ErrorCode::NESTING_TOO_DEEP));
}

#[test]
fn test_depth_resets_between_statements() {
    let one = nested_parens(MAX_NESTING_DEPTH as usize - 1);
    let source = format!("{one}\n{one}\n{one}");
    let result = parse(&source);
    assert!(!result.errors.has_errors(), "{}", result.errors);
    assert_eq!(result.program.map(|p| p.stmts.len()), Some(3));
}

// ─────────────────────────────────────────────────────────────────────
// Lookahead corners
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_equality_statement_is_expression_not_assignment() {
    let result = parse("x == 1;");
    let program = result.program.expect("should parse");
    assert!(matches!(program.stmts[0], Stmt::Expr(_)));
}

#[test]
fn test_bare_direction_statement() {
    let result = parse("north;");
    let program = result.program.expect("should parse");
    assert!(matches!(program.stmts[0], Stmt::Expr(_)));
}

#[test]
fn test_keyword_call_is_error() {
    // Domain keywords are statements, not callable expressions.
    assert_eq!(first_code("x = move(north);"), Some(ErrorCode::UNEXPECTED_TOKEN));
}

#[test]
fn test_move_parenthesised_direction_is_not_bare_form() {
    assert_eq!(first_code("move((north));"), Some(ErrorCode::EXPECTED_DIRECTION));
}

#[test]
fn test_missing_tokens_at_end_of_input() {
    for src in ["if", "if (", "if (x", "if (x)", "while (x) {", "x =", "attack(", "moveto(1,"] {
        let result = parse(src);
        assert_eq!(result.errors.total_errors, 1, "{src}");
        assert!(result.program.is_none(), "{src}");
    }
}

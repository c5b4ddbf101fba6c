//! Core parser infrastructure: token cursor, error reporting, helpers.

use bee_lexer::token::{Token, TokenKind};
use bee_types::ast::{Ident, Program};
use bee_types::{BeeError, CompileErrors, ErrorCode, SourceFile, Span};

/// Deepest allowed nesting of expressions and blocks combined.
pub const MAX_NESTING_DEPTH: u32 = 64;

/// The BeeScript parser.
///
/// Consumes a token stream produced by the lexer and builds an AST.
/// Parsing stops at the first error; there is no recovery.
pub struct Parser<'src> {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Source file for error context.
    source_file: &'src SourceFile,
    errors: CompileErrors,
    /// Current expression/block nesting depth.
    depth: u32,
}

/// Result of parsing.
///
/// `program` is `Some` exactly when `errors` is empty.
pub struct ParseResult {
    pub program: Option<Program>,
    pub errors: CompileErrors,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and source file.
    pub fn new(tokens: Vec<Token>, source_file: &'src SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            source_file,
            errors: CompileErrors::empty(),
            depth: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        self.look_ahead(0)
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::point(1, 1), |t| t.span)
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(Span::point(1, 1), |t| t.span)
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check_exact(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Look ahead by `n` tokens from current position.
    pub(crate) fn look_ahead(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    // ── Expect Helpers ────────────────────────────────────────────────────────

    /// Expect a specific token kind. `context` completes the message, e.g.
    /// `"after assignment"` gives `expected ';' after assignment, got '}'`.
    pub(crate) fn expect(&mut self, expected: &TokenKind, context: &str) -> Option<Token> {
        if self.check_exact(expected) {
            self.advance()
        } else {
            self.error_at_current(
                ErrorCode::UNEXPECTED_TOKEN,
                format!(
                    "expected '{}' {}, got '{}'",
                    expected,
                    context,
                    self.peek_kind()
                ),
            );
            None
        }
    }

    /// Expect an identifier token. Returns the name and span.
    pub(crate) fn expect_identifier(&mut self) -> Option<Ident> {
        match self.peek_kind().clone() {
            TokenKind::Identifier(name) => {
                let span = self.current_span();
                self.pos += 1;
                Some(Ident::new(name, span))
            }
            _ => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("expected identifier, got '{}'", self.peek_kind()),
                );
                None
            }
        }
    }

    // ── Nesting ───────────────────────────────────────────────────────────────

    /// Enter one level of nesting. Reports E203 and returns `false` past the cap.
    pub(crate) fn enter_nesting(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            self.error_at_current(
                ErrorCode::NESTING_TOO_DEEP,
                format!("nesting too deep: maximum depth is {MAX_NESTING_DEPTH}"),
            );
            self.depth -= 1;
            return false;
        }
        true
    }

    pub(crate) fn exit_nesting(&mut self) {
        self.release_nesting(1);
    }

    /// Leave `levels` levels at once, e.g. at the end of an operator chain.
    pub(crate) fn release_nesting(&mut self, levels: u32) {
        self.depth = self.depth.saturating_sub(levels);
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Report an error at the current token position.
    pub(crate) fn error_at_current(&mut self, code: ErrorCode, message: impl Into<String>) {
        let span = self.current_span();
        self.error_at(code, message, span);
    }

    /// Report an error at a specific span.
    pub(crate) fn error_at(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        let source_line = self.source_file.line(span.start_line).unwrap_or("");
        let error = BeeError::new(&self.source_file.name, code, message, span, source_line);
        self.errors.push_error(error);
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the token stream into a `Program` AST.
    pub fn parse(mut self) -> ParseResult {
        let program = self.parse_program();
        if self.errors.has_errors() {
            return ParseResult {
                program: None,
                errors: self.errors,
            };
        }
        ParseResult {
            program,
            errors: self.errors,
        }
    }

    /// `program := statement* EOF`
    fn parse_program(&mut self) -> Option<Program> {
        let start = self.current_span();
        let mut stmts = Vec::new();
        while !self.at_end() {
            stmts.push(self.parse_statement()?);
        }
        let span = if stmts.is_empty() {
            start
        } else {
            start.merge(self.previous_span())
        };
        Some(Program { stmts, span })
    }
}

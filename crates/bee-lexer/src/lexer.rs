//! Core lexer: converts source text to a token stream.
//!
//! - Spaces, tabs and carriage returns are skipped; newlines only move the
//!   position
//! - Integer literals must fit in `i64`
//! - Any character outside the language is an error (E100); scanning
//!   continues so every bad character is reported, up to 20

use bee_types::{BeeError, CompileErrors, ErrorCode, SourceFile, Span};

use crate::token::{Token, TokenKind};

/// The BeeScript lexer.
pub struct Lexer<'src> {
    /// The full source text.
    source: &'src str,
    source_file: &'src SourceFile,
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
    errors: CompileErrors,
}

/// Result of lexing: tokens + any errors collected.
pub struct LexResult {
    /// The token stream (always ends with exactly one [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    pub errors: CompileErrors,
}

impl<'src> Lexer<'src> {
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self {
            source: &source_file.source,
            source_file,
            pos: 0,
            line: 1,
            col: 1,
            errors: CompileErrors::empty(),
        }
    }

    /// Lex the entire source file into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();
        loop {
            if self.errors.total_errors >= bee_types::MAX_ERRORS {
                break;
            }
            let token = self.scan_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        if !matches!(tokens.last(), Some(t) if t.kind == TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, "", self.current_span()));
        }

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::point(self.line, self.col)
    }

    fn span_from(&self, start_line: u32, start_col: u32) -> Span {
        Span::new(
            start_line,
            start_col,
            self.line,
            self.col.saturating_sub(1).max(1),
        )
    }

    fn emit_error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        let source_line = self.source_file.line(span.start_line).unwrap_or("");
        let err = BeeError::new(&self.source_file.name, code, message, span, source_line);
        self.errors.push_error(err);
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scan one token, skipping over characters that are reported as errors.
    fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let start = self.pos;
            let start_line = self.line;
            let start_col = self.col;
            let Some(ch) = self.advance() else {
                return Token::new(TokenKind::Eof, "", self.current_span());
            };

            let kind = match ch {
                '0'..='9' => return self.scan_number(start, start_line, start_col),
                'a'..='z' | 'A'..='Z' | '_' => {
                    return self.scan_identifier(start, start_line, start_col)
                }

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '=' => {
                    if self.peek() == Some('=') {
                        self.advance();
                        TokenKind::EqEq
                    } else {
                        TokenKind::Eq
                    }
                }

                other => {
                    let span = self.span_from(start_line, start_col);
                    self.emit_error(
                        ErrorCode::UNEXPECTED_CHARACTER,
                        format!("unexpected character '{}'", other.escape_default()),
                        span,
                    );
                    if self.errors.total_errors >= bee_types::MAX_ERRORS {
                        return Token::new(TokenKind::Eof, "", self.current_span());
                    }
                    continue;
                }
            };

            return Token::new(
                kind,
                &self.source[start..self.pos],
                self.span_from(start_line, start_col),
            );
        }
    }

    fn scan_number(&mut self, start: usize, start_line: u32, start_col: u32) -> Token {
        while let Some('0'..='9') = self.peek() {
            self.advance();
        }

        let span = self.span_from(start_line, start_col);
        let source = self.source;
        let text = &source[start..self.pos];
        let value = match text.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                self.emit_error(
                    ErrorCode::INTEGER_OUT_OF_RANGE,
                    format!("integer literal '{text}' is out of range"),
                    span,
                );
                0
            }
        };

        Token::new(TokenKind::Number(value), text, span)
    }

    fn scan_identifier(&mut self, start: usize, start_line: u32, start_col: u32) -> Token {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let span = self.span_from(start_line, start_col);
        let text = &self.source[start..self.pos];
        let kind =
            TokenKind::from_keyword(text).unwrap_or_else(|| TokenKind::Identifier(text.to_string()));

        Token::new(kind, text, span)
    }
}

//! Expression parsing with operator precedence.
//!
//! Precedence (lowest → highest):
//! 4. `==`
//! 3. `+`, `-`
//! 2. `*`, `/`
//! 1. unary `-`
//!
//! All binary levels are left-associative.

use bee_lexer::token::TokenKind;
use bee_types::ast::*;
use bee_types::{ErrorCode, Span, Value};

use crate::parser::Parser;

impl<'src> Parser<'src> {
    // ══════════════════════════════════════════════════════════════════════════
    // Entry Point
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Option<Expr> {
        if !self.enter_nesting() {
            return None;
        }
        let result = self.parse_equality();
        self.exit_nesting();
        result
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Precedence Chain
    // ══════════════════════════════════════════════════════════════════════════

    /// `EqExpr = AddExpr { "==" AddExpr }`
    ///
    /// Chains build a left-leaning tree, so every operator counts as one
    /// level of nesting until the chain ends.
    fn parse_equality(&mut self) -> Option<Expr> {
        let mut left = self.parse_add()?;
        let mut levels = 0;
        let result = loop {
            if !self.check_exact(&TokenKind::EqEq) {
                break Some(left);
            }
            self.advance();
            if !self.enter_nesting() {
                break None;
            }
            levels += 1;
            match self.parse_add() {
                Some(right) => left = binary(left, BinOp::Eq, right),
                None => break None,
            }
        };
        self.release_nesting(levels);
        result
    }

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_add(&mut self) -> Option<Expr> {
        let mut left = self.parse_mul()?;
        let mut levels = 0;
        let result = loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break Some(left),
            };
            self.advance();
            if !self.enter_nesting() {
                break None;
            }
            levels += 1;
            match self.parse_mul() {
                Some(right) => left = binary(left, op, right),
                None => break None,
            }
        };
        self.release_nesting(levels);
        result
    }

    /// `MulExpr = UnaryExpr { ("*" | "/") UnaryExpr }`
    fn parse_mul(&mut self) -> Option<Expr> {
        let mut left = self.parse_unary()?;
        let mut levels = 0;
        let result = loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break Some(left),
            };
            self.advance();
            if !self.enter_nesting() {
                break None;
            }
            levels += 1;
            match self.parse_unary() {
                Some(right) => left = binary(left, op, right),
                None => break None,
            }
        };
        self.release_nesting(levels);
        result
    }

    /// `UnaryExpr = "-" UnaryExpr | PrimaryExpr`
    fn parse_unary(&mut self) -> Option<Expr> {
        if !self.check_exact(&TokenKind::Minus) {
            return self.parse_primary();
        }
        let start = self.current_span();
        self.advance(); // eat `-`
        if !self.enter_nesting() {
            return None;
        }
        let operand = self.parse_unary();
        self.exit_nesting();
        let operand = operand?;
        let span = start.merge(operand.span);
        Some(Expr::new(
            ExprKind::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Primary Expressions
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse a primary expression.
    fn parse_primary(&mut self) -> Option<Expr> {
        let start = self.current_span();
        let kind = self.peek_kind().clone();

        if let Some(dir) = kind.as_direction() {
            self.advance();
            return Some(literal(Value::Direction(dir), start));
        }

        match kind {
            // ── Literals ────────────────────────────────────────────────
            TokenKind::Number(n) => {
                self.advance();
                Some(literal(Value::Int(n), start))
            }
            TokenKind::True => {
                self.advance();
                Some(literal(Value::Bool(true), start))
            }
            TokenKind::False => {
                self.advance();
                Some(literal(Value::Bool(false), start))
            }

            // ── Grouping ────────────────────────────────────────────────
            TokenKind::LParen => {
                self.advance(); // eat `(`
                let inner = self.parse_expression()?;
                self.expect(&TokenKind::RParen, "to close parenthesised expression")?;
                let span = start.merge(self.previous_span());
                Some(Expr::new(inner.kind, span))
            }

            // ── Identifier or function call ─────────────────────────────
            TokenKind::Identifier(_) => {
                if *self.look_ahead(1) == TokenKind::LParen {
                    self.parse_call()
                } else {
                    let ident = self.expect_identifier()?;
                    Some(Expr::new(ExprKind::Variable(ident.name), ident.span))
                }
            }

            _ => {
                self.error_at_current(
                    ErrorCode::UNEXPECTED_TOKEN,
                    format!("expected expression, got '{}'", self.peek_kind()),
                );
                None
            }
        }
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Call Parsing
    // ══════════════════════════════════════════════════════════════════════════

    /// Parse `name(args...)`.
    fn parse_call(&mut self) -> Option<Expr> {
        let callee = self.expect_identifier()?;
        self.expect(&TokenKind::LParen, "after function name")?;
        let args = self.parse_arg_list()?;
        self.expect(&TokenKind::RParen, "after arguments")?;
        let span = callee.span.merge(self.previous_span());
        Some(Expr::new(ExprKind::Call { callee, args }, span))
    }

    /// Parse a comma-separated argument list (inside parens), possibly empty.
    fn parse_arg_list(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();
        if self.check_exact(&TokenKind::RParen) {
            return Some(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Some(args)
    }
}

fn binary(left: Expr, op: BinOp, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

fn literal(value: Value, span: Span) -> Expr {
    Expr::new(ExprKind::Literal(value), span)
}

//! Statement parsing.

use crate::parser::Parser;
use bee_lexer::token::TokenKind;
use bee_types::ast::*;
use bee_types::ErrorCode;

/// Coordinates accepted by `move` and `moveto`.
const MAX_COORDS: usize = 3;

impl<'src> Parser<'src> {
    /// Parse a block of statements: `{ stmts... }`
    pub(crate) fn parse_block(&mut self, context: &str) -> Option<Block> {
        let start = self.current_span();
        self.expect(&TokenKind::LBrace, context)?;
        if !self.enter_nesting() {
            return None;
        }
        let mut stmts = Vec::new();
        while !self.check_exact(&TokenKind::RBrace) && !self.at_end() {
            stmts.push(self.parse_statement()?);
        }
        self.exit_nesting();
        self.expect(&TokenKind::RBrace, "to close block")?;
        let span = start.merge(self.previous_span());
        Some(Block { stmts, span })
    }

    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.peek_kind() {
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Repeat => self.parse_repeat_stmt(),
            TokenKind::Move => self.parse_move_stmt(),
            TokenKind::MoveTo => self.parse_moveto_stmt(),
            TokenKind::Attack => self.parse_attack_stmt(),
            TokenKind::Identifier(_) if *self.look_ahead(1) == TokenKind::Eq => {
                self.parse_assign_stmt()
            }
            _ => {
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::Semicolon, "after expression")?;
                let span = expr.span.merge(self.previous_span());
                Some(Stmt::Expr(ExprStmt { expr, span }))
            }
        }
    }

    /// `name = value;`
    fn parse_assign_stmt(&mut self) -> Option<Stmt> {
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Eq, "after variable name")?;
        let value = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon, "after assignment")?;
        let span = name.span.merge(self.previous_span());
        Some(Stmt::Assign(AssignStmt { name, value, span }))
    }

    /// `if (cond) { ... } [else { ... }]`
    fn parse_if_stmt(&mut self) -> Option<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `if`
        let condition = self.parse_condition("'if'")?;
        let then_block = self.parse_block("before 'if' body")?;
        let else_block = if self.eat(&TokenKind::Else) {
            Some(self.parse_block("after 'else'")?)
        } else {
            None
        };
        let span = start.merge(self.previous_span());
        Some(Stmt::If(IfStmt {
            condition,
            then_block,
            else_block,
            span,
        }))
    }

    /// `while (cond) { ... }`
    fn parse_while_stmt(&mut self) -> Option<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `while`
        let condition = self.parse_condition("'while'")?;
        let body = self.parse_block("before 'while' body")?;
        let span = start.merge(self.previous_span());
        Some(Stmt::While(WhileStmt {
            condition,
            body,
            span,
        }))
    }

    /// `repeat (count) { ... }`
    fn parse_repeat_stmt(&mut self) -> Option<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `repeat`
        self.expect(&TokenKind::LParen, "after 'repeat'")?;
        let count = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "after repeat count")?;
        let body = self.parse_block("before 'repeat' body")?;
        let span = start.merge(self.previous_span());
        Some(Stmt::Repeat(RepeatStmt { count, body, span }))
    }

    /// `( expr )` after `if` / `while`.
    fn parse_condition(&mut self, keyword: &str) -> Option<Expr> {
        self.expect(&TokenKind::LParen, &format!("after {keyword}"))?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen, "after condition")?;
        Some(condition)
    }

    // ══════════════════════════════════════════════════════════════════════════
    // Domain Statements
    // ══════════════════════════════════════════════════════════════════════════

    /// `move(direction);` or `move(target, x [, y [, z]]);`
    fn parse_move_stmt(&mut self) -> Option<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `move`
        self.expect(&TokenKind::LParen, "after 'move'")?;

        // Bare direction form: a direction keyword directly closed by `)`.
        let bare = self
            .peek_kind()
            .as_direction()
            .filter(|_| *self.look_ahead(1) == TokenKind::RParen);
        let (target, motion) = if let Some(dir) = bare {
            self.advance();
            (None, Motion::Step(dir))
        } else {
            let target = self.parse_expression()?;
            if !self.eat(&TokenKind::Comma) {
                self.error_at(
                    ErrorCode::EXPECTED_DIRECTION,
                    format!(
                        "expected a direction, or a target followed by coordinates, in 'move', got '{}'",
                        self.peek_kind()
                    ),
                    target.span,
                );
                return None;
            }
            let coords = self.parse_coords("move")?;
            (Some(target), Motion::Offset(coords))
        };

        self.expect(&TokenKind::RParen, "after 'move' arguments")?;
        self.expect(&TokenKind::Semicolon, "after 'move' statement")?;
        let span = start.merge(self.previous_span());
        Some(Stmt::Move(MoveStmt {
            target,
            motion,
            span,
        }))
    }

    /// `moveto(x [, y [, z]]);`
    fn parse_moveto_stmt(&mut self) -> Option<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `moveto`
        self.expect(&TokenKind::LParen, "after 'moveto'")?;
        let coords = self.parse_coords("moveto")?;
        self.expect(&TokenKind::RParen, "after 'moveto' arguments")?;
        self.expect(&TokenKind::Semicolon, "after 'moveto' statement")?;
        let span = start.merge(self.previous_span());
        Some(Stmt::MoveTo(MoveToStmt { coords, span }))
    }

    /// `attack(target);` or `attack(attacker, target);`
    fn parse_attack_stmt(&mut self) -> Option<Stmt> {
        let start = self.current_span();
        self.advance(); // eat `attack`
        self.expect(&TokenKind::LParen, "after 'attack'")?;
        let first = self.parse_expression()?;
        let (attacker, target) = if self.eat(&TokenKind::Comma) {
            let second = self.parse_expression()?;
            (Some(first), second)
        } else {
            (None, first)
        };
        if self.check_exact(&TokenKind::Comma) {
            self.error_at_current(
                ErrorCode::TOO_MANY_ARGUMENTS,
                "too many arguments to 'attack': expected at most 2",
            );
            return None;
        }
        self.expect(&TokenKind::RParen, "after 'attack' arguments")?;
        self.expect(&TokenKind::Semicolon, "after 'attack' statement")?;
        let span = start.merge(self.previous_span());
        Some(Stmt::Attack(AttackStmt {
            attacker,
            target,
            span,
        }))
    }

    /// One to three comma-separated coordinate expressions.
    fn parse_coords(&mut self, keyword: &str) -> Option<Vec<Expr>> {
        let mut coords = vec![self.parse_expression()?];
        while self.check_exact(&TokenKind::Comma) {
            if coords.len() == MAX_COORDS {
                self.error_at_current(
                    ErrorCode::TOO_MANY_ARGUMENTS,
                    format!("too many coordinates in '{keyword}': expected at most {MAX_COORDS}"),
                );
                return None;
            }
            self.advance();
            coords.push(self.parse_expression()?);
        }
        Some(coords)
    }
}

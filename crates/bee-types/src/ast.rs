//! AST node types for BeeScript.
//!
//! Every node carries a [`Span`] for error reporting.
//! Recursive expression nodes are boxed.

use crate::{Direction, Span, Value};

// ══════════════════════════════════════════════════════════════════════════════
// Top Level
// ══════════════════════════════════════════════════════════════════════════════

/// A complete script: statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// A spanned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// `{ stmts... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Statements
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    If(IfStmt),
    While(WhileStmt),
    Repeat(RepeatStmt),
    Expr(ExprStmt),
    Move(MoveStmt),
    MoveTo(MoveToStmt),
    Attack(AttackStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::Repeat(s) => s.span,
            Stmt::Expr(s) => s.span,
            Stmt::Move(s) => s.span,
            Stmt::MoveTo(s) => s.span,
            Stmt::Attack(s) => s.span,
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Stmt::Assign(_) => "assign",
            Stmt::If(_) => "if",
            Stmt::While(_) => "while",
            Stmt::Repeat(_) => "repeat",
            Stmt::Expr(_) => "expr",
            Stmt::Move(_) => "move",
            Stmt::MoveTo(_) => "moveto",
            Stmt::Attack(_) => "attack",
        }
    }
}

/// `name = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: Ident,
    pub value: Expr,
    pub span: Span,
}

/// `if (cond) { ... } [else { ... }]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

/// `while (cond) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

/// `repeat (count) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStmt {
    pub count: Expr,
    pub body: Block,
    pub span: Span,
}

/// A bare expression statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

/// `move(north);` or `move(target, x [, y [, z]]);`
#[derive(Debug, Clone, PartialEq)]
pub struct MoveStmt {
    /// `None` moves the actor.
    pub target: Option<Expr>,
    pub motion: Motion,
    pub span: Span,
}

/// How far a `move` goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// One step in a fixed direction.
    Step(Direction),
    /// Relative offset, 1 to 3 coordinates.
    Offset(Vec<Expr>),
}

/// `moveto(x [, y [, z]]);`
#[derive(Debug, Clone, PartialEq)]
pub struct MoveToStmt {
    pub coords: Vec<Expr>,
    pub span: Span,
}

/// `attack(target);` or `attack(attacker, target);`
#[derive(Debug, Clone, PartialEq)]
pub struct AttackStmt {
    /// `None` means the actor attacks.
    pub attacker: Option<Expr>,
    pub target: Expr,
    pub span: Span,
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `42`, `true`, `north`
    Literal(Value),
    /// `count`
    Variable(String),
    /// `a + b`, `a == b`
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// `-x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `isPathBlocked(east)`
    Call { callee: Ident, args: Vec<Expr> },
}

/// Binary operators (lowest precedence first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Eq => "==",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Neg,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}

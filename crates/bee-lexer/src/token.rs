//! Token types for the BeeScript lexer.
//!
//! Defines [`TokenKind`] covering every lexeme in the language and
//! [`Token`], which pairs a kind with its raw text and source [`Span`].

use bee_types::{Direction, Span};
use std::fmt;

/// All reserved words. Keywords are case-sensitive.
pub const ALL_KEYWORDS: &[&str] = &[
    // Control flow (4)
    "if", "else", "while", "repeat",
    // Literals (2)
    "true", "false",
    // Domain statements (3)
    "move", "moveto", "attack",
    // Directions (4)
    "north", "south", "east", "west",
];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token (empty for `Eof`).
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals & names ─────────────────────────────────────

    /// Integer literal: `42`
    Number(i64),
    /// User-defined identifier: `count`, `Player`
    Identifier(String),

    // ── Keywords ─────────────────────────────────────────────

    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `repeat`
    Repeat,
    /// `true`
    True,
    /// `false`
    False,
    /// `move`
    Move,
    /// `moveto`
    MoveTo,
    /// `attack`
    Attack,
    /// `north`
    North,
    /// `south`
    South,
    /// `east`
    East,
    /// `west`
    West,

    // ── Operators ────────────────────────────────────────────

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Eq,
    /// `==`
    EqEq,

    // ── Punctuation ──────────────────────────────────────────

    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Look up a reserved word. Returns `None` for user identifiers.
    pub fn from_keyword(s: &str) -> Option<TokenKind> {
        Some(match s {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "repeat" => TokenKind::Repeat,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "move" => TokenKind::Move,
            "moveto" => TokenKind::MoveTo,
            "attack" => TokenKind::Attack,
            "north" => TokenKind::North,
            "south" => TokenKind::South,
            "east" => TokenKind::East,
            "west" => TokenKind::West,
            _ => return None,
        })
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Move
                | TokenKind::MoveTo
                | TokenKind::Attack
                | TokenKind::North
                | TokenKind::South
                | TokenKind::East
                | TokenKind::West
        )
    }

    /// The direction named by a direction keyword.
    pub fn as_direction(&self) -> Option<Direction> {
        match self {
            TokenKind::North => Some(Direction::North),
            TokenKind::South => Some(Direction::South),
            TokenKind::East => Some(Direction::East),
            TokenKind::West => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Identifier(s) => f.write_str(s),
            TokenKind::If => f.write_str("if"),
            TokenKind::Else => f.write_str("else"),
            TokenKind::While => f.write_str("while"),
            TokenKind::Repeat => f.write_str("repeat"),
            TokenKind::True => f.write_str("true"),
            TokenKind::False => f.write_str("false"),
            TokenKind::Move => f.write_str("move"),
            TokenKind::MoveTo => f.write_str("moveto"),
            TokenKind::Attack => f.write_str("attack"),
            TokenKind::North => f.write_str("north"),
            TokenKind::South => f.write_str("south"),
            TokenKind::East => f.write_str("east"),
            TokenKind::West => f.write_str("west"),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::Eq => f.write_str("="),
            TokenKind::EqEq => f.write_str("=="),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────

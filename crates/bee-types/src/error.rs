use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of errors stored before the rest are only counted.
pub const MAX_ERRORS: usize = 20;

/// Front-end stage that produced an error, derived from the error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Lex,
    Parse,
}

/// Numeric error code (E100–E299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Lex errors (E100–E199) ──
    pub const UNEXPECTED_CHARACTER: Self = Self(100);
    pub const INTEGER_OUT_OF_RANGE: Self = Self(101);

    // ── Parse errors (E200–E299) ──
    pub const UNEXPECTED_TOKEN: Self = Self(200);
    pub const EXPECTED_DIRECTION: Self = Self(201);
    pub const TOO_MANY_ARGUMENTS: Self = Self(202);
    pub const NESTING_TOO_DEEP: Self = Self(203);

    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Lex,
            _ => ErrorCategory::Parse,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => write!(f, "lex"),
            Self::Parse => write!(f, "parse"),
        }
    }
}

/// A structured lex or parse error.
///
/// Hosts render these in their console; the fields are stable JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeeError {
    /// Script name.
    pub file: String,
    pub code: ErrorCode,
    /// Derived from `code`.
    pub category: ErrorCategory,
    /// Human-readable message, e.g. `expected ';' after assignment, got '}'`.
    pub message: String,
    #[serde(flatten)]
    pub span: Span,
    /// The offending source line, for display under the message.
    pub source_line: String,
}

impl BeeError {
    pub fn new(
        file: impl Into<String>,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            code,
            category: code.category(),
            message: message.into(),
            span,
            source_line: source_line.into(),
        }
    }

    /// The run-outcome tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self.category {
            ErrorCategory::Lex => ErrorKind::Lex,
            ErrorCategory::Parse => ErrorKind::Parse,
        }
    }
}

impl fmt::Display for BeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.span, self.code, self.category, self.message
        )
    }
}

impl std::error::Error for BeeError {}

/// All errors collected by one front-end pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompileErrors {
    pub errors: Vec<BeeError>,
    pub total_errors: usize,
}

impl CompileErrors {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Add an error, respecting the [`MAX_ERRORS`] limit.
    pub fn push_error(&mut self, error: BeeError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }

    /// The first error reported, if any.
    pub fn first(&self) -> Option<&BeeError> {
        self.errors.first()
    }
}

impl fmt::Display for CompileErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.errors {
            writeln!(f, "{e}")?;
        }
        if self.total_errors > self.errors.len() {
            writeln!(f, "... and {} more", self.total_errors - self.errors.len())?;
        }
        Ok(())
    }
}

/// Why a run stopped early.
///
/// Flat tag shared by compile-time and runtime failures so a host can
/// switch on it without caring which stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Lex,
    Parse,
    UndefinedVariable,
    TypeMismatch,
    DivisionByZero,
    ArithmeticOverflow,
    UnknownFunction,
    InvalidArgumentCount,
    InvalidTarget,
    NegativeRepeatCount,
    InfiniteLoopGuardTripped,
    Cancelled,
}

impl ErrorKind {
    /// `true` for kinds raised before any statement executes.
    pub fn is_compile_time(self) -> bool {
        matches!(self, Self::Lex | Self::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::UNEXPECTED_CHARACTER.category(), ErrorCategory::Lex);
        assert_eq!(ErrorCode::INTEGER_OUT_OF_RANGE.category(), ErrorCategory::Lex);
        assert_eq!(ErrorCode::UNEXPECTED_TOKEN.category(), ErrorCategory::Parse);
        assert_eq!(ErrorCode::NESTING_TOO_DEEP.category(), ErrorCategory::Parse);
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::UNEXPECTED_TOKEN.to_string(), "E200");
        assert_eq!(ErrorCode::UNEXPECTED_CHARACTER.to_string(), "E100");
    }

    #[test]
    fn test_bee_error_kind_follows_category() {
        let lex = BeeError::new(
            "t.bee",
            ErrorCode::UNEXPECTED_CHARACTER,
            "unexpected character '#'",
            Span::point(1, 3),
            "x #= 1;",
        );
        assert_eq!(lex.kind(), ErrorKind::Lex);
        let parse = BeeError::new(
            "t.bee",
            ErrorCode::UNEXPECTED_TOKEN,
            "expected ';'",
            Span::point(1, 6),
            "x = 1",
        );
        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert_eq!(parse.to_string(), "1:6: E200 [parse] expected ';'");
    }

    #[test]
    fn test_bee_error_json() {
        let err = BeeError::new(
            "maze.bee",
            ErrorCode::UNEXPECTED_TOKEN,
            "expected ')' after condition, got '{'",
            Span::new(3, 12, 3, 12),
            "if (x == 1 {",
        );
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains(r#""code":200"#));
        assert!(json.contains(r#""category":"parse""#));
        assert!(json.contains(r#""line":3"#));
        assert!(json.contains(r#""column":12"#));

        let back: BeeError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_compile_errors_max_limit() {
        let mut errs = CompileErrors::empty();
        for i in 0..25 {
            errs.push_error(BeeError::new(
                "t.bee",
                ErrorCode::UNEXPECTED_CHARACTER,
                format!("Error {i}"),
                Span::point(i as u32 + 1, 1),
                "",
            ));
        }
        assert_eq!(errs.errors.len(), MAX_ERRORS);
        assert_eq!(errs.total_errors, 25);
        assert!(errs.has_errors());
        assert_eq!(errs.first().map(|e| e.message.as_str()), Some("Error 0"));
        assert!(errs.to_string().ends_with("... and 5 more\n"));
    }

    #[test]
    fn test_compile_errors_empty() {
        let errs = CompileErrors::empty();
        assert!(!errs.has_errors());
        assert!(errs.first().is_none());
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InfiniteLoopGuardTripped).unwrap();
        assert_eq!(json, r#""infinite_loop_guard_tripped""#);
        assert!(ErrorKind::Parse.is_compile_time());
        assert!(!ErrorKind::DivisionByZero.is_compile_time());
    }
}

//! Runtime error types for the BeeScript interpreter.

use bee_types::ast::{BinOp, UnaryOp};
use bee_types::{ErrorKind, Value};
use thiserror::Error;

use crate::schedule::MAX_WHILE_ITERATIONS;

/// Evaluation error. Every variant aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    /// Operator/operand or argument type mismatch.
    #[error("{0}")]
    TypeMismatch(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Checked integer arithmetic overflowed; holds the operator.
    #[error("integer overflow in '{0}'")]
    ArithmeticOverflow(&'static str),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("'{name}' expects {expected} argument(s), got {got}")]
    InvalidArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A value used as an entity was something else.
    #[error("{0}")]
    InvalidTarget(String),

    #[error("repeat count must not be negative, got {0}")]
    NegativeRepeatCount(i64),

    #[error("infinite loop: 'while' ran {} iterations and its condition is still true", MAX_WHILE_ITERATIONS)]
    InfiniteLoopGuardTripped,

    #[error("run cancelled")]
    Cancelled,
}

impl EvalError {
    /// `cannot apply '+' to int and bool`
    pub fn binary_mismatch(op: BinOp, left: &Value, right: &Value) -> Self {
        Self::TypeMismatch(format!(
            "cannot apply '{}' to {} and {}",
            op.as_str(),
            left.type_name(),
            right.type_name()
        ))
    }

    /// `cannot apply unary '-' to bool`
    pub fn unary_mismatch(op: UnaryOp, operand: &Value) -> Self {
        Self::TypeMismatch(format!(
            "cannot apply unary '{}' to {}",
            op.as_str(),
            operand.type_name()
        ))
    }

    /// `'isPathBlocked' expects a direction argument, got int`
    pub fn argument_mismatch(context: &str, expected: &str, got: &Value) -> Self {
        Self::TypeMismatch(format!(
            "{context} expects {expected}, got {}",
            got.type_name()
        ))
    }

    /// The flat tag reported in a run outcome.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedVariable(_) => ErrorKind::UndefinedVariable,
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::ArithmeticOverflow(_) => ErrorKind::ArithmeticOverflow,
            Self::UnknownFunction(_) => ErrorKind::UnknownFunction,
            Self::InvalidArgumentCount { .. } => ErrorKind::InvalidArgumentCount,
            Self::InvalidTarget(_) => ErrorKind::InvalidTarget,
            Self::NegativeRepeatCount(_) => ErrorKind::NegativeRepeatCount,
            Self::InfiniteLoopGuardTripped => ErrorKind::InfiniteLoopGuardTripped,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;

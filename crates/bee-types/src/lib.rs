//! Shared types for BeeScript.
//!
//! This crate defines the AST node types, runtime values, source spans and
//! error types used by the lexer, parser and interpreter.

mod error;
mod span;
mod value;
pub mod ast;

pub use error::{BeeError, CompileErrors, ErrorCategory, ErrorCode, ErrorKind, MAX_ERRORS};
pub use span::{SourceFile, Span};
pub use value::{Direction, EntityRef, Value, Vec3};

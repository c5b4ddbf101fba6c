//! BeeScript runner: orchestrates the full pipeline.
//!
//! ```text
//! BeeScript source → Lexer → Parser → Interpreter → World effects
//! ```
//!
//! A script that fails to lex or parse never executes a statement; the
//! failure is reported through the same [`RunOutcome`] a runtime abort uses.

use std::collections::BTreeMap;

use bee_eval::{Console, Interpreter, RunOutcome, World};
use bee_lexer::Lexer;
use bee_parser::Parser;
use bee_types::ast::Program;
use bee_types::{CompileErrors, SourceFile, Value};
use serde::{Deserialize, Serialize};

/// Everything a host needs to show after a run, serialisable to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// `true` when the run completed.
    pub success: bool,
    pub outcome: RunOutcome,
    /// Console lines after the run.
    pub console: Console,
    /// Environment after the run, sorted by name.
    pub bindings: BTreeMap<String, Value>,
    /// Lex or parse errors (empty when the script compiled).
    pub errors: CompileErrors,
}

impl RunReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Lex and parse `source`. Lex errors stop the pipeline before parsing.
pub fn compile(source: &str, file_name: &str) -> Result<Program, CompileErrors> {
    let sf = SourceFile::new(file_name, source);

    let lex = Lexer::new(&sf).lex();
    if lex.errors.has_errors() {
        tracing::debug!(file = file_name, errors = lex.errors.total_errors, "lex failed");
        return Err(lex.errors);
    }

    let result = Parser::new(lex.tokens, &sf).parse();
    match result.program {
        Some(program) if !result.errors.has_errors() => {
            tracing::debug!(file = file_name, statements = program.stmts.len(), "compiled");
            Ok(program)
        }
        _ => {
            tracing::debug!(file = file_name, errors = result.errors.total_errors, "parse failed");
            Err(result.errors)
        }
    }
}

/// Compile and run `source` to completion on `interp`.
pub fn run<W: World>(source: &str, file_name: &str, interp: &mut Interpreter<W>) -> RunOutcome {
    match compile(source, file_name) {
        Ok(program) => interp.interpret(&program),
        Err(errors) => reject(&errors, interp),
    }
}

/// Like [`run`], sleeping for the configured pacing delay between steps.
pub fn run_paced<W: World>(
    source: &str,
    file_name: &str,
    interp: &mut Interpreter<W>,
) -> RunOutcome {
    match compile(source, file_name) {
        Ok(program) => interp.interpret_paced(&program),
        Err(errors) => reject(&errors, interp),
    }
}

/// Run `source` and collect a [`RunReport`].
pub fn run_report<W: World>(
    source: &str,
    file_name: &str,
    interp: &mut Interpreter<W>,
) -> RunReport {
    let (outcome, errors) = match compile(source, file_name) {
        Ok(program) => (interp.interpret(&program), CompileErrors::empty()),
        Err(errors) => (reject(&errors, interp), errors),
    };
    RunReport {
        success: outcome.is_completed(),
        outcome,
        console: interp.console().clone(),
        bindings: interp.env().bindings().clone(),
        errors,
    }
}

/// Report the first compile error as the run's outcome.
fn reject<W: World>(errors: &CompileErrors, interp: &mut Interpreter<W>) -> RunOutcome {
    match errors.first() {
        Some(first) => interp.reject(first.kind(), first.message.clone()),
        None => interp.reject(bee_types::ErrorKind::Parse, "script did not compile"),
    }
}

//! Cooperative stepping of a run.
//!
//! An [`Execution`] performs one atomic unit of work per [`Execution::step`]:
//! either one statement, or entering one loop iteration. Between steps the
//! host may pause, pace or cancel the run. Nothing is ever suspended in the
//! middle of a statement.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bee_types::ast::*;
use bee_types::{Span, Value};

use crate::error::{EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::outcome::{RunOutcome, RunState};
use crate::world::World;

/// Body executions allowed per `while` statement. Not configurable.
pub const MAX_WHILE_ITERATIONS: usize = 1000;

// ── Cancellation ──────────────────────────────────────────────────────────

/// Thread-safe request to abort a run at its next suspension point.
///
/// Effects already applied to the world stay applied. The flag is cleared
/// whenever the interpreter starts a new run.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub(crate) fn rearm(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// ── Step results ──────────────────────────────────────────────────────────

/// Where a run paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendPoint {
    /// A statement finished executing.
    Statement(Span),
    /// A loop is about to run its body for the `iteration`-th time (1-based).
    LoopIteration { span: Span, iteration: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Suspended(SuspendPoint),
    Finished(RunOutcome),
}

// ── Execution ─────────────────────────────────────────────────────────────

/// Pending work, innermost last.
#[derive(Debug)]
enum Frame<'a> {
    Block { stmts: &'a [Stmt], next: usize },
    While { stmt: &'a WhileStmt, iterations: usize },
    Repeat { stmt: &'a RepeatStmt, remaining: i64, iteration: usize },
}

/// A resumable run of one program.
///
/// Dropping an unfinished execution aborts the run as cancelled, with the
/// same feedback an explicit cancel gives.
pub struct Execution<'a, W: World> {
    interp: &'a mut Interpreter<W>,
    frames: Vec<Frame<'a>>,
    outcome: Option<RunOutcome>,
}

impl<'a, W: World> Execution<'a, W> {
    pub(crate) fn new(interp: &'a mut Interpreter<W>, program: &'a Program) -> Self {
        interp.cancel.rearm();
        interp.state = RunState::Running;
        tracing::debug!(statements = program.stmts.len(), "run started");
        Self {
            interp,
            frames: vec![Frame::Block {
                stmts: &program.stmts,
                next: 0,
            }],
            outcome: None,
        }
    }

    /// The interpreter being driven, for inspecting state between steps.
    pub fn interpreter(&self) -> &Interpreter<W> {
        self.interp
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Perform one unit of work. Once finished, keeps returning the same
    /// outcome.
    pub fn step(&mut self) -> Step {
        if let Some(outcome) = &self.outcome {
            return Step::Finished(outcome.clone());
        }
        if self.interp.cancel.is_cancelled() {
            return self.finish(Err(EvalError::Cancelled));
        }
        match self.advance() {
            Ok(Some(point)) => Step::Suspended(point),
            Ok(None) => self.finish(Ok(())),
            Err(err) => self.finish(Err(err)),
        }
    }

    /// Step until the run finishes.
    pub fn run_to_end(mut self) -> RunOutcome {
        loop {
            if let Step::Finished(outcome) = self.step() {
                return outcome;
            }
        }
    }

    fn advance(&mut self) -> EvalResult<Option<SuspendPoint>> {
        loop {
            let Some(frame) = self.frames.last_mut() else {
                return Ok(None);
            };
            match frame {
                Frame::Block { stmts, next } => {
                    let stmts: &'a [Stmt] = *stmts;
                    let Some(stmt) = stmts.get(*next) else {
                        self.frames.pop();
                        continue;
                    };
                    *next += 1;
                    return self.execute(stmt).map(Some);
                }
                Frame::While { stmt, iterations } => {
                    let stmt: &'a WhileStmt = *stmt;
                    if !self.interp.eval_expr(&stmt.condition)?.is_truthy() {
                        self.frames.pop();
                        continue;
                    }
                    if *iterations >= MAX_WHILE_ITERATIONS {
                        return Err(EvalError::InfiniteLoopGuardTripped);
                    }
                    *iterations += 1;
                    let iteration = *iterations;
                    self.frames.push(Frame::Block {
                        stmts: &stmt.body.stmts,
                        next: 0,
                    });
                    return Ok(Some(SuspendPoint::LoopIteration {
                        span: stmt.span,
                        iteration,
                    }));
                }
                Frame::Repeat {
                    stmt,
                    remaining,
                    iteration,
                } => {
                    let stmt: &'a RepeatStmt = *stmt;
                    if *remaining <= 0 {
                        self.frames.pop();
                        continue;
                    }
                    *remaining -= 1;
                    *iteration += 1;
                    let iteration = *iteration;
                    self.frames.push(Frame::Block {
                        stmts: &stmt.body.stmts,
                        next: 0,
                    });
                    return Ok(Some(SuspendPoint::LoopIteration {
                        span: stmt.span,
                        iteration,
                    }));
                }
            }
        }
    }

    /// Run one statement. Compound statements only evaluate their header
    /// here and push a frame for their body.
    fn execute(&mut self, stmt: &'a Stmt) -> EvalResult<SuspendPoint> {
        let span = stmt.span();
        tracing::trace!(stmt = stmt.label(), line = span.start_line, "execute");
        match stmt {
            Stmt::If(if_stmt) => {
                let branch = if self.interp.eval_expr(&if_stmt.condition)?.is_truthy() {
                    Some(&if_stmt.then_block)
                } else {
                    if_stmt.else_block.as_ref()
                };
                if let Some(block) = branch {
                    self.frames.push(Frame::Block {
                        stmts: &block.stmts,
                        next: 0,
                    });
                }
            }
            Stmt::While(while_stmt) => self.frames.push(Frame::While {
                stmt: while_stmt,
                iterations: 0,
            }),
            Stmt::Repeat(repeat) => {
                let remaining = match self.interp.eval_expr(&repeat.count)? {
                    Value::Int(n) if n < 0 => return Err(EvalError::NegativeRepeatCount(n)),
                    Value::Int(n) => n,
                    other => {
                        return Err(EvalError::argument_mismatch(
                            "'repeat' count",
                            "int",
                            &other,
                        ))
                    }
                };
                self.frames.push(Frame::Repeat {
                    stmt: repeat,
                    remaining,
                    iteration: 0,
                });
            }
            simple => self.interp.exec_simple(simple)?,
        }
        Ok(SuspendPoint::Statement(span))
    }

    fn finish(&mut self, result: EvalResult<()>) -> Step {
        self.frames.clear();
        let outcome = match result {
            Ok(()) => RunOutcome::Completed,
            Err(err) => RunOutcome::from(&err),
        };
        let outcome = self.interp.conclude(outcome);
        self.outcome = Some(outcome.clone());
        Step::Finished(outcome)
    }
}

impl<W: World> Drop for Execution<'_, W> {
    fn drop(&mut self) {
        if self.outcome.is_none() {
            tracing::debug!("unfinished run dropped");
            self.finish(Err(EvalError::Cancelled));
        }
    }
}

//! `Interpreter`, the host-facing runtime.
//!
//! Owns the environment, the world, the console and the audio sink.
//! Runs are started with [`Interpreter::start`] (step by step) or
//! [`Interpreter::interpret`] (to completion).

use std::fmt;

use bee_types::ast::*;
use bee_types::{EntityRef, ErrorKind, Value, Vec3};

use crate::config::InterpreterConfig;
use crate::env::Environment;
use crate::error::{EvalError, EvalResult};
use crate::host::{AudioSink, Console, Cue, Silent};
use crate::outcome::{RunOutcome, RunState};
use crate::schedule::{CancelHandle, Execution, Step};
use crate::world::World;

/// Tree-walking interpreter bound to one world.
///
/// Bindings persist across sequential runs. Only one run can be active at
/// a time: [`Interpreter::start`] borrows the interpreter mutably for the
/// lifetime of the [`Execution`].
pub struct Interpreter<W: World> {
    pub(crate) env: Environment,
    pub(crate) world: W,
    pub(crate) config: InterpreterConfig,
    pub(crate) console: Console,
    pub(crate) audio: Box<dyn AudioSink + Send>,
    pub(crate) state: RunState,
    pub(crate) cancel: CancelHandle,
}

impl<W: World> Interpreter<W> {
    pub fn new(world: W) -> Self {
        Self::with_config(world, InterpreterConfig::default())
    }

    pub fn with_config(world: W, config: InterpreterConfig) -> Self {
        Self {
            env: Environment::new(),
            world,
            config,
            console: Console::new(),
            audio: Box::new(Silent),
            state: RunState::Idle,
            cancel: CancelHandle::default(),
        }
    }

    /// Replace the audio sink (defaults to [`Silent`]).
    pub fn with_audio(mut self, sink: impl AudioSink + Send + 'static) -> Self {
        self.audio = Box::new(sink);
        self
    }

    // ── Host API ──────────────────────────────────────────────────────────

    /// Seed or overwrite a binding before a run.
    pub fn set_global(&mut self, name: &str, value: impl Into<Value>) {
        self.env.assign(name, value.into());
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.env.get(name).copied()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// A handle another thread can use to stop the current or next run.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Begin a run that the caller advances with [`Execution::step`].
    pub fn start<'a>(&'a mut self, program: &'a Program) -> Execution<'a, W> {
        Execution::new(self, program)
    }

    /// Run `program` to completion with no pacing.
    pub fn interpret(&mut self, program: &Program) -> RunOutcome {
        self.start(program).run_to_end()
    }

    /// Run `program`, sleeping for the configured pacing delay at every
    /// suspension point so world effects can be watched.
    pub fn interpret_paced(&mut self, program: &Program) -> RunOutcome {
        let delay = self.config.pacing_delay();
        let mut execution = self.start(program);
        loop {
            match execution.step() {
                Step::Suspended(_) => std::thread::sleep(delay),
                Step::Finished(outcome) => return outcome,
            }
        }
    }

    /// Record a run that failed before its first statement, such as a
    /// script that did not lex or parse.
    pub fn reject(&mut self, kind: ErrorKind, message: impl Into<String>) -> RunOutcome {
        self.conclude(RunOutcome::aborted(kind, message))
    }

    /// Apply the end-of-run feedback for `outcome` and update the state.
    pub(crate) fn conclude(&mut self, outcome: RunOutcome) -> RunOutcome {
        match &outcome {
            RunOutcome::Completed => {
                tracing::debug!("run completed");
                self.audio.play(Cue::Success);
            }
            RunOutcome::Aborted { kind, message } => {
                tracing::warn!(?kind, %message, "run aborted");
                self.console.log(message.clone());
                self.audio.play(Cue::Failure);
            }
        }
        self.state = RunState::from(&outcome);
        outcome
    }

    // ══════════════════════════════════════════════════════════════════════
    // Simple statements
    // ══════════════════════════════════════════════════════════════════════

    /// Execute a statement that has no body. Blocks and loops are driven by
    /// the scheduler.
    pub(crate) fn exec_simple(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Assign(assign) => {
                let value = self.eval_expr(&assign.value)?;
                self.env.assign(&assign.name.name, value);
            }
            Stmt::Expr(expr_stmt) => {
                self.eval_expr(&expr_stmt.expr)?;
            }
            Stmt::Move(stmt) => self.exec_move(stmt)?,
            Stmt::MoveTo(stmt) => self.exec_moveto(stmt)?,
            Stmt::Attack(stmt) => self.exec_attack(stmt)?,
            Stmt::If(_) | Stmt::While(_) | Stmt::Repeat(_) => {
                tracing::warn!(stmt = stmt.label(), "compound statement passed to exec_simple");
            }
        }
        Ok(())
    }

    // ── Domain statements ─────────────────────────────────────────────────

    fn exec_move(&mut self, stmt: &MoveStmt) -> EvalResult<()> {
        let entity = match &stmt.target {
            Some(target) => {
                let value = self.eval_expr(target)?;
                expect_entity(value, "move target")?
            }
            None => self.actor()?,
        };

        let delta = match &stmt.motion {
            Motion::Step(dir) => self.world.direction_vector(*dir),
            Motion::Offset(coords) => match coords.as_slice() {
                [single] => match self.eval_expr(single)? {
                    Value::Direction(dir) => self.world.direction_vector(dir),
                    Value::Int(x) => Vec3::new(x, 0, 0),
                    other => {
                        return Err(EvalError::argument_mismatch(
                            "'move'",
                            "a direction or int coordinates",
                            &other,
                        ))
                    }
                },
                _ => self.eval_coords(coords, "'move'")?,
            },
        };

        tracing::debug!(%entity, %delta, "move");
        self.world.translate(entity, delta);
        Ok(())
    }

    fn exec_moveto(&mut self, stmt: &MoveToStmt) -> EvalResult<()> {
        let entity = self.actor()?;
        let position = self.eval_coords(&stmt.coords, "'moveto'")?;
        tracing::debug!(%entity, %position, "moveto");
        self.world.set_position(entity, position);
        Ok(())
    }

    fn exec_attack(&mut self, stmt: &AttackStmt) -> EvalResult<()> {
        let attacker = match &stmt.attacker {
            Some(expr) => {
                let value = self.eval_expr(expr)?;
                expect_entity(value, "attacker")?
            }
            None => self.actor()?,
        };
        let target = self.eval_expr(&stmt.target)?;
        let target = expect_entity(target, "attack target")?;
        tracing::debug!(%attacker, %target, "attack");
        self.world.report_attack(attacker, target);
        Ok(())
    }

    /// Evaluate 1–3 int coordinates; missing trailing ones are 0.
    fn eval_coords(&self, coords: &[Expr], context: &str) -> EvalResult<Vec3> {
        let mut values = Vec::with_capacity(coords.len());
        for coord in coords {
            match self.eval_expr(coord)? {
                Value::Int(n) => values.push(n),
                other => {
                    return Err(EvalError::argument_mismatch(
                        &format!("{context} coordinate"),
                        "int",
                        &other,
                    ))
                }
            }
        }
        Ok(Vec3::from_partial(&values))
    }

    /// The entity bound to `config.actor_binding`.
    pub(crate) fn actor(&self) -> EvalResult<EntityRef> {
        let name = &self.config.actor_binding;
        match self.lookup(name) {
            Ok(value) => expect_entity(value, format_args!("'{name}'")),
            Err(_) => Err(EvalError::InvalidTarget(format!(
                "'{name}' is not bound to an entity"
            ))),
        }
    }
}

impl<W: World> fmt::Debug for Interpreter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("env", &self.env)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// `value` as an entity, or `InvalidTarget` naming `what`.
fn expect_entity(value: Value, what: impl fmt::Display) -> EvalResult<EntityRef> {
    value.as_entity().ok_or_else(|| {
        EvalError::InvalidTarget(format!(
            "{what} is not an entity (found {})",
            value.type_name()
        ))
    })
}

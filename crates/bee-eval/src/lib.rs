//! BeeScript interpreter: walks a parsed [`Program`](bee_types::ast::Program)
//! against a host [`World`].

pub mod config;
pub mod env;
pub mod error;
mod evaluator;
pub mod grid_world;
pub mod host;
pub mod interpreter;
pub mod outcome;
pub mod schedule;
pub mod world;

pub use config::{ConfigError, InterpreterConfig};
pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use grid_world::{GridWorld, WorldEvent};
pub use host::{AudioSink, Console, Cue, Silent};
pub use interpreter::Interpreter;
pub use outcome::{RunOutcome, RunState};
pub use schedule::{CancelHandle, Execution, Step, SuspendPoint, MAX_WHILE_ITERATIONS};
pub use world::{EntityFilter, World};

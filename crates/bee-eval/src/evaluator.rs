//! Expression evaluation and the builtin function table.

use bee_types::ast::*;
use bee_types::Value;

use crate::error::{EvalError, EvalResult};
use crate::interpreter::Interpreter;
use crate::world::{EntityFilter, World};

/// Functions callable from scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    /// `isPathBlocked(dir) -> bool`
    IsPathBlocked,
    /// `getNumEnemies() -> int`
    GetNumEnemies,
    /// `getNumEntities() -> int`
    GetNumEntities,
}

impl Builtin {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "isPathBlocked" => Self::IsPathBlocked,
            "getNumEnemies" => Self::GetNumEnemies,
            "getNumEntities" => Self::GetNumEntities,
            _ => return None,
        })
    }

    fn arity(self) -> usize {
        match self {
            Self::IsPathBlocked => 1,
            Self::GetNumEnemies | Self::GetNumEntities => 0,
        }
    }
}

impl<W: World> Interpreter<W> {
    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate an expression to a Value.
    pub(crate) fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(*value),
            ExprKind::Variable(name) => self.lookup(name),
            ExprKind::Binary { left, op, right } => {
                let lv = self.eval_expr(left)?;
                let rv = self.eval_expr(right)?;
                eval_binary(*op, lv, rv)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                eval_unary(*op, value)
            }
            ExprKind::Call { callee, args } => self.eval_call(&callee.name, args),
        }
    }

    /// Environment first, then entities the world knows by name.
    pub(crate) fn lookup(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.env.get(name) {
            return Ok(*value);
        }
        self.world
            .resolve(name)
            .map(Value::Entity)
            .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
    }

    // ── Calls ─────────────────────────────────────────────────────────────

    fn eval_call(&self, name: &str, args: &[Expr]) -> EvalResult<Value> {
        let builtin =
            Builtin::from_name(name).ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        if args.len() != builtin.arity() {
            return Err(EvalError::InvalidArgumentCount {
                name: name.to_string(),
                expected: builtin.arity(),
                got: args.len(),
            });
        }

        match builtin {
            Builtin::IsPathBlocked => {
                let dir = match self.eval_expr(&args[0])? {
                    Value::Direction(dir) => dir,
                    other => {
                        return Err(EvalError::argument_mismatch(
                            "'isPathBlocked'",
                            "a direction argument",
                            &other,
                        ))
                    }
                };
                let actor = self.actor()?;
                Ok(Value::Bool(self.world.path_blocked(actor, dir)))
            }
            Builtin::GetNumEnemies => Ok(Value::Int(self.world.entity_count(EntityFilter::Enemies))),
            Builtin::GetNumEntities => Ok(Value::Int(self.world.entity_count(EntityFilter::All))),
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════

/// Int arithmetic and equality, bool equality. Everything else is a
/// type mismatch.
pub(crate) fn eval_binary(op: BinOp, left: Value, right: Value) -> EvalResult<Value> {
    use Value::{Bool, Int};

    let overflow = || EvalError::ArithmeticOverflow(op.as_str());
    match (op, left, right) {
        (BinOp::Add, Int(a), Int(b)) => a.checked_add(b).map(Int).ok_or_else(overflow),
        (BinOp::Sub, Int(a), Int(b)) => a.checked_sub(b).map(Int).ok_or_else(overflow),
        (BinOp::Mul, Int(a), Int(b)) => a.checked_mul(b).map(Int).ok_or_else(overflow),
        (BinOp::Div, Int(_), Int(0)) => Err(EvalError::DivisionByZero),
        (BinOp::Div, Int(a), Int(b)) => a.checked_div(b).map(Int).ok_or_else(overflow),
        (BinOp::Eq, Int(a), Int(b)) => Ok(Bool(a == b)),
        (BinOp::Eq, Bool(a), Bool(b)) => Ok(Bool(a == b)),
        _ => Err(EvalError::binary_mismatch(op, &left, &right)),
    }
}

pub(crate) fn eval_unary(op: UnaryOp, operand: Value) -> EvalResult<Value> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(EvalError::ArithmeticOverflow(op.as_str())),
        _ => Err(EvalError::unary_mismatch(op, &operand)),
    }
}

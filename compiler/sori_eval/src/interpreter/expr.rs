//! Expression evaluation and operator semantics.

use std::rc::Rc;

use sori_ir::{BinaryOp, ExprId, ExprKind, Literal, LogicalOp, UnaryOp};

use super::Interpreter;
use crate::error::EvalResult;
use crate::value::format_number;
use crate::{RuntimeError, Value};

impl Interpreter {
    /// Evaluate one expression to a value or the first runtime error.
    pub(crate) fn evaluate(&mut self, id: ExprId) -> EvalResult {
        let arena = Rc::clone(&self.context.arena);
        let expr = arena.get(id);
        let line = expr.line;
        match &expr.kind {
            ExprKind::Literal(literal) => Ok(literal_value(literal)),
            ExprKind::Grouping(inner) => self.evaluate(*inner),
            ExprKind::Unary { op, operand } => {
                let operand = self.evaluate(*operand)?;
                apply_unary(*op, operand, line)
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.evaluate(*left)?;
                let right = self.evaluate(*right)?;
                apply_binary(*op, left, right, line)
            }
            ExprKind::Logical { op, left, right } => {
                let left = self.evaluate(*left)?;
                // Short-circuit: the left value itself is the result when it
                // decides the answer.
                match op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    _ => self.evaluate(*right),
                }
            }
            ExprKind::Variable { name } => self.look_up_variable(name, id, line),
            ExprKind::This => self.look_up_variable("this", id, line),
            ExprKind::Assign { name, value } => {
                let value = self.evaluate(*value)?;
                let assigned = match self.context.locals.distance(id) {
                    Some(distance) => crate::environment::assign_at(
                        &self.environment,
                        distance,
                        name,
                        value.clone(),
                    ),
                    None => self.globals.borrow_mut().assign(name, value.clone()),
                };
                if assigned {
                    Ok(value)
                } else {
                    Err(RuntimeError::undefined_variable(name, line))
                }
            }
            ExprKind::Call { callee, args } => {
                let callee = self.evaluate(*callee)?;
                let mut arguments = Vec::with_capacity(args.len());
                for arg in args {
                    arguments.push(self.evaluate(*arg)?);
                }
                self.call_value(callee, arguments, line)
            }
            ExprKind::Get { object, name } => {
                let object = self.evaluate(*object)?;
                self.property_get(&object, name, line)
            }
            ExprKind::Set {
                object,
                name,
                value,
            } => {
                let object = self.evaluate(*object)?;
                let Value::Instance(instance) = object else {
                    return Err(RuntimeError::no_fields(line));
                };
                let value = self.evaluate(*value)?;
                instance.borrow_mut().set(name.clone(), value.clone());
                Ok(value)
            }
            ExprKind::IndexGet { object, index } => {
                let object = self.evaluate(*object)?;
                let index = self.evaluate(*index)?;
                let Value::Array(items) = object else {
                    return Err(RuntimeError::not_indexable(line));
                };
                let len = items.borrow().len();
                let idx = check_index(&index, len, line)?;
                let value = items.borrow()[idx].clone();
                Ok(value)
            }
            ExprKind::IndexSet {
                object,
                index,
                value,
            } => {
                let object = self.evaluate(*object)?;
                let index = self.evaluate(*index)?;
                let Value::Array(items) = object else {
                    return Err(RuntimeError::not_indexable(line));
                };
                let value = self.evaluate(*value)?;
                let len = items.borrow().len();
                let idx = check_index(&index, len, line)?;
                items.borrow_mut()[idx] = value.clone();
                Ok(value)
            }
            ExprKind::Array { elements } => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.evaluate(*element)?);
                }
                Ok(Value::array(items))
            }
        }
    }
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Nil => Value::Nil,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Number(n) => Value::Number(*n),
        Literal::Str(s) => Value::string(s.as_str()),
    }
}

fn apply_unary(op: UnaryOp, operand: Value, line: u32) -> EvalResult {
    match op {
        UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::operand_must_be_number(line)),
        },
    }
}

fn apply_binary(op: BinaryOp, left: Value, right: Value, line: u32) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => apply_add(left, right, line),
        BinaryOp::Sub => {
            let (a, b) = as_numbers(left, right, line)?;
            Ok(Value::Number(a - b))
        }
        BinaryOp::Mul => {
            let (a, b) = as_numbers(left, right, line)?;
            Ok(Value::Number(a * b))
        }
        BinaryOp::Div => {
            let (a, b) = as_numbers(left, right, line)?;
            if b == 0.0 {
                return Err(RuntimeError::division_by_zero(line));
            }
            Ok(Value::Number(a / b))
        }
        BinaryOp::Rem => {
            let (a, b) = as_numbers(left, right, line)?;
            if b == 0.0 {
                return Err(RuntimeError::modulo_by_zero(line));
            }
            Ok(Value::Number(a % b))
        }
        BinaryOp::Lt => {
            let (a, b) = as_numbers(left, right, line)?;
            Ok(Value::Bool(a < b))
        }
        BinaryOp::LtEq => {
            let (a, b) = as_numbers(left, right, line)?;
            Ok(Value::Bool(a <= b))
        }
        BinaryOp::Gt => {
            let (a, b) = as_numbers(left, right, line)?;
            Ok(Value::Bool(a > b))
        }
        BinaryOp::GtEq => {
            let (a, b) = as_numbers(left, right, line)?;
            Ok(Value::Bool(a >= b))
        }
    }
}

/// `+` is the one coercing operator: number addition, string concatenation,
/// and the two mixed number/string combinations (number rendered in its
/// canonical text). Anything else is a type error.
fn apply_add(left: Value, right: Value, line: u32) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::string(format!("{a}{b}"))),
        (Value::Number(a), Value::Str(b)) => {
            Ok(Value::string(format!("{}{b}", format_number(a))))
        }
        (Value::Str(a), Value::Number(b)) => {
            Ok(Value::string(format!("{a}{}", format_number(b))))
        }
        _ => Err(RuntimeError::add_type_mismatch(line)),
    }
}

fn as_numbers(left: Value, right: Value, line: u32) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),
        _ => Err(RuntimeError::operands_must_be_numbers(line)),
    }
}

/// Validate an index value against an array length: it must be a finite,
/// whole, non-negative number strictly below the length.
fn check_index(index: &Value, length: usize, line: u32) -> Result<usize, RuntimeError> {
    let Value::Number(n) = index else {
        return Err(RuntimeError::index_not_whole_number(line));
    };
    if !n.is_finite() || n.fract() != 0.0 {
        return Err(RuntimeError::index_not_whole_number(line));
    }
    if *n < 0.0 || *n >= length as f64 {
        return Err(RuntimeError::index_out_of_range(line));
    }
    Ok(*n as usize)
}

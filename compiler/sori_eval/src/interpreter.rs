//! The tree-walking interpreter.
//!
//! Statement execution is a total function from (statement, environment) to
//! a [`Flow`] outcome or a runtime error; expression evaluation lives in
//! `expr`, call/property/index dispatch in `dispatch`.

mod dispatch;
mod expr;

use std::rc::Rc;

use rustc_hash::FxHashMap;
use sori_ir::{ExprId, Stmt};

use crate::callable::FunctionValue;
use crate::class::ClassValue;
use crate::environment::{self, EnvRef, Environment};
use crate::error::EvalResult;
use crate::{builtins, EvalContext, Flow, PrintHandler, RuntimeError, Value};

/// Interpreter state: the global environment, the current-environment
/// cursor, and the evaluation context of the program being run.
///
/// One interpreter can run many programs in sequence; global declarations
/// persist between [`Interpreter::interpret`] calls, which is what a REPL
/// host relies on.
pub struct Interpreter {
    globals: EnvRef,
    environment: EnvRef,
    pub(crate) context: EvalContext,
    printer: PrintHandler,
}

impl Interpreter {
    /// An interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(PrintHandler::Stdout)
    }

    /// An interpreter with a custom print destination.
    pub fn with_print_handler(printer: PrintHandler) -> Self {
        let globals = Environment::root();
        builtins::install(&globals);
        Interpreter {
            environment: globals.clone(),
            globals,
            context: EvalContext::empty(),
            printer,
        }
    }

    /// The global environment (host embedding hook).
    pub fn globals(&self) -> &EnvRef {
        &self.globals
    }

    /// Execute a resolved program. The first runtime error aborts the
    /// remaining statements.
    pub fn interpret(
        &mut self,
        statements: &[Stmt],
        context: EvalContext,
    ) -> Result<(), RuntimeError> {
        self.context = context;
        for statement in statements {
            // Non-normal outcomes cannot escape to the top level: the
            // resolver rejects return/break/continue outside their
            // constructs before evaluation runs.
            self.execute(statement)?;
        }
        Ok(())
    }

    pub(crate) fn execute(&mut self, statement: &Stmt) -> Result<Flow, RuntimeError> {
        match statement {
            Stmt::Expression(expr) => {
                self.evaluate(*expr)?;
                Ok(Flow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(*expr)?;
                self.printer.println(&value.to_string());
                Ok(Flow::Normal)
            }
            Stmt::Var {
                name, initializer, ..
            } => {
                let value = match initializer {
                    Some(initializer) => self.evaluate(*initializer)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name.clone(), value);
                Ok(Flow::Normal)
            }
            Stmt::Block(statements) => {
                let child = Environment::child_of(self.environment.clone());
                self.execute_block(statements, child)
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(*condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(*condition)?.is_truthy() {
                    match self.execute(body)? {
                        Flow::Break => break,
                        Flow::Continue | Flow::Normal => {}
                        ret @ Flow::Return(_) => return Ok(ret),
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Function(decl) => {
                let function = FunctionValue::new(
                    Rc::clone(decl),
                    self.environment.clone(),
                    false,
                    self.context.clone(),
                );
                self.environment
                    .borrow_mut()
                    .define(decl.name.clone(), Value::Function(Rc::new(function)));
                Ok(Flow::Normal)
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(value) => self.evaluate(*value)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }
            Stmt::Class(decl) => {
                let mut methods = FxHashMap::default();
                for method in &decl.methods {
                    let is_initializer = method.name == "init";
                    let function = FunctionValue::new(
                        Rc::clone(method),
                        self.environment.clone(),
                        is_initializer,
                        self.context.clone(),
                    );
                    methods.insert(method.name.clone(), Rc::new(function));
                }
                let class = ClassValue::new(decl.name.clone(), methods);
                self.environment
                    .borrow_mut()
                    .define(decl.name.clone(), Value::Class(Rc::new(class)));
                Ok(Flow::Normal)
            }
            Stmt::Break { .. } => Ok(Flow::Break),
            Stmt::Continue { .. } => Ok(Flow::Continue),
        }
    }

    /// Execute `statements` in `env`, restoring the previous environment on
    /// every exit path. Stops at the first non-normal outcome and propagates
    /// it.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        env: EnvRef,
    ) -> Result<Flow, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, env);
        let mut flow = Flow::Normal;
        for statement in statements {
            match self.execute(statement) {
                Ok(Flow::Normal) => {}
                Ok(other) => {
                    flow = other;
                    break;
                }
                Err(error) => {
                    self.environment = previous;
                    return Err(error);
                }
            }
        }
        self.environment = previous;
        Ok(flow)
    }

    /// Resolved references read the scope at their recorded distance;
    /// unresolved ones fall back to the global environment. (`this` is never
    /// resolved in this language revision, so inside a method body it lands
    /// here and fails as an undefined global.)
    pub(crate) fn look_up_variable(&self, name: &str, id: ExprId, line: u32) -> EvalResult {
        let found = match self.context.locals.distance(id) {
            Some(distance) => environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        };
        found.ok_or_else(|| RuntimeError::undefined_variable(name, line))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

//! Static scope resolution for the Sori interpreter.
//!
//! A single pass over the parsed program that computes, for every local
//! variable reference, how many enclosing lexical scopes to traverse to reach
//! its binding. The result is a side table keyed by expression identity
//! (arena id); references that hit no scope are left out and fall back to a
//! global-environment lookup at run time — which is also how forward
//! references to global functions work.
//!
//! The pass is purely advisory: it never changes program meaning, only
//! annotates it and reports static errors (same-scope redeclaration, reading
//! a local inside its own initializer, `return` outside a function, a value
//! `return` inside an initializer, `break`/`continue` outside a loop).


use rustc_hash::FxHashMap;
use sori_diagnostic::Diagnostic;
use sori_ir::{ExprArena, ExprId, ExprKind, FunctionDecl, Program, Stmt};

/// Resolved lexical distances, keyed by expression arena id.
///
/// `0` means the innermost scope at the reference site. Absence means the
/// reference must be looked up in the global environment.
#[derive(Debug, Default)]
pub struct Resolution {
    locals: FxHashMap<ExprId, usize>,
}

impl Resolution {
    /// Distance recorded for a reference, if it resolved to a local.
    #[inline]
    pub fn distance(&self, id: ExprId) -> Option<usize> {
        self.locals.get(&id).copied()
    }

    /// Number of resolved references.
    pub fn len(&self) -> usize {
        self.locals.len()
    }

    /// Whether no reference resolved to a local.
    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

/// What kind of function body is being resolved, for `return` validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FunctionKind {
    None,
    Function,
    Method,
    Initializer,
}

/// Resolve a parsed program, producing the distance side table and any
/// static-semantic diagnostics.
pub fn resolve(program: &Program) -> (Resolution, Vec<Diagnostic>) {
    let mut resolver = Resolver {
        arena: &program.arena,
        scopes: Vec::new(),
        locals: FxHashMap::default(),
        diagnostics: Vec::new(),
        current_function: FunctionKind::None,
        loop_depth: 0,
    };
    resolver.resolve_statements(&program.statements);
    tracing::debug!(
        resolved = resolver.locals.len(),
        errors = resolver.diagnostics.len(),
        "resolution finished"
    );
    (
        Resolution {
            locals: resolver.locals,
        },
        resolver.diagnostics,
    )
}

struct Resolver<'a> {
    arena: &'a ExprArena,
    /// Lexical scope stack; each scope maps a name to its "fully
    /// initialized" flag. Empty at global scope — globals are not tracked.
    scopes: Vec<FxHashMap<String, bool>>,
    locals: FxHashMap<ExprId, usize>,
    diagnostics: Vec<Diagnostic>,
    current_function: FunctionKind,
    /// Loops enclosing the current statement *within the current function*.
    loop_depth: usize,
}

impl Resolver<'_> {
    fn resolve_statements(&mut self, statements: &[Stmt]) {
        for statement in statements {
            self.resolve_stmt(statement);
        }
    }

    fn resolve_stmt(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Expression(expr) | Stmt::Print(expr) => self.resolve_expr(*expr),
            Stmt::Var {
                name,
                line,
                initializer,
            } => {
                self.declare(name, *line);
                if let Some(initializer) = initializer {
                    self.resolve_expr(*initializer);
                }
                self.define(name);
            }
            Stmt::Block(statements) => {
                self.begin_scope();
                self.resolve_statements(statements);
                self.end_scope();
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(*condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.resolve_expr(*condition);
                self.loop_depth += 1;
                self.resolve_stmt(body);
                self.loop_depth -= 1;
            }
            Stmt::Function(decl) => {
                self.declare(&decl.name, decl.line);
                self.define(&decl.name);
                self.resolve_function(decl, FunctionKind::Function);
            }
            Stmt::Return { line, value } => {
                if self.current_function == FunctionKind::None {
                    self.diagnostics.push(Diagnostic::at_lexeme(
                        *line,
                        "return",
                        "Can't return from top-level code.",
                    ));
                }
                if let Some(value) = value {
                    if self.current_function == FunctionKind::Initializer {
                        self.diagnostics.push(Diagnostic::at_lexeme(
                            *line,
                            "return",
                            "Can't return a value from an initializer.",
                        ));
                    }
                    self.resolve_expr(*value);
                }
            }
            Stmt::Class(decl) => {
                self.declare(&decl.name, decl.line);
                self.define(&decl.name);
                // No scope binding the receiver is opened here: `this` inside
                // a method body stays unresolved and falls through to a
                // global lookup at run time.
                for method in &decl.methods {
                    let kind = if method.name == "init" {
                        FunctionKind::Initializer
                    } else {
                        FunctionKind::Method
                    };
                    self.resolve_function(method, kind);
                }
            }
            Stmt::Break { line } => {
                if self.loop_depth == 0 {
                    self.diagnostics.push(Diagnostic::at_lexeme(
                        *line,
                        "break",
                        "Can't use 'break' outside of a loop.",
                    ));
                }
            }
            Stmt::Continue { line } => {
                if self.loop_depth == 0 {
                    self.diagnostics.push(Diagnostic::at_lexeme(
                        *line,
                        "continue",
                        "Can't use 'continue' outside of a loop.",
                    ));
                }
            }
        }
    }

    /// Resolve a function body in a fresh scope. The loop depth resets for
    /// the body: a `break` inside a function declared inside a loop is still
    /// outside any loop.
    fn resolve_function(&mut self, decl: &FunctionDecl, kind: FunctionKind) {
        let enclosing_function = self.current_function;
        let enclosing_loop_depth = self.loop_depth;
        self.current_function = kind;
        self.loop_depth = 0;

        self.begin_scope();
        for param in &decl.params {
            self.declare(&param.name, param.line);
            self.define(&param.name);
        }
        self.resolve_statements(&decl.body);
        self.end_scope();

        self.current_function = enclosing_function;
        self.loop_depth = enclosing_loop_depth;
    }

    fn resolve_expr(&mut self, id: ExprId) {
        match &self.arena.get(id).kind {
            ExprKind::Literal(_) | ExprKind::This => {}
            ExprKind::Grouping(inner) => self.resolve_expr(*inner),
            ExprKind::Unary { operand, .. } => self.resolve_expr(*operand),
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(*left);
                self.resolve_expr(*right);
            }
            ExprKind::Variable { name } => {
                if self
                    .scopes
                    .last()
                    .is_some_and(|scope| scope.get(name) == Some(&false))
                {
                    self.diagnostics.push(Diagnostic::at_lexeme(
                        self.arena.get(id).line,
                        name.clone(),
                        "Can't read local variable in its own initializer.",
                    ));
                }
                self.resolve_local(id, name);
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(*value);
                self.resolve_local(id, name);
            }
            ExprKind::Call { callee, args } => {
                self.resolve_expr(*callee);
                for arg in args {
                    self.resolve_expr(*arg);
                }
            }
            ExprKind::Get { object, .. } => self.resolve_expr(*object),
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(*value);
                self.resolve_expr(*object);
            }
            ExprKind::IndexGet { object, index } => {
                self.resolve_expr(*object);
                self.resolve_expr(*index);
            }
            ExprKind::IndexSet {
                object,
                index,
                value,
            } => {
                self.resolve_expr(*object);
                self.resolve_expr(*index);
                self.resolve_expr(*value);
            }
            ExprKind::Array { elements } => {
                for element in elements {
                    self.resolve_expr(*element);
                }
            }
        }
    }

    /// Walk the scope stack innermost-out; record the distance of the first
    /// scope containing `name`. No hit means a global (or undefined) name,
    /// left for the runtime lookup.
    fn resolve_local(&mut self, id: ExprId, name: &str) {
        for (distance, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(name) {
                self.locals.insert(id, distance);
                return;
            }
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Record `name` in the innermost scope as declared-but-uninitialized.
    /// Redeclaring a name already present in the same scope is an error;
    /// shadowing an outer scope is the normal closure mechanism.
    fn declare(&mut self, name: &str, line: u32) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };
        if scope.contains_key(name) {
            self.diagnostics.push(Diagnostic::at_lexeme(
                line,
                name,
                "Already a variable with this name in this scope.",
            ));
        }
        scope.insert(name.to_string(), false);
    }

    /// Flip `name` to fully initialized.
    fn define(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), true);
        }
    }
}

//! Runtime error types.
//!
//! Every runtime failure carries a structured kind plus the source line of
//! the token that triggered it. The first runtime error aborts evaluation of
//! the remaining statements — there is no user-level catch construct, so
//! these are host-visible failures, not values.
//!
//! Factory functions populate the kind; the message string always comes from
//! the kind's `Display`, so matching on kinds and reading messages agree.

use std::fmt;

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, RuntimeError>;

/// Typed category of a runtime failure.
#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeErrorKind {
    // Operators
    OperandMustBeNumber,
    OperandsMustBeNumbers,
    AddTypeMismatch,
    DivisionByZero,
    ModuloByZero,

    // Names and properties
    UndefinedVariable { name: String },
    UndefinedProperty { name: String },

    // Calls
    NotCallable,
    ArityMismatch { expected: usize, got: usize },

    // Property / index receivers
    NoProperties,
    NoFields,
    NotIndexable,
    IndexNotWholeNumber,
    IndexOutOfRange,

    // Native function failure, message supplied by the native.
    Native { message: String },
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeErrorKind::OperandMustBeNumber => f.write_str("Operand must be a number."),
            RuntimeErrorKind::OperandsMustBeNumbers => f.write_str("Operands must be numbers."),
            RuntimeErrorKind::AddTypeMismatch => {
                f.write_str("Operands must be two numbers or two strings.")
            }
            RuntimeErrorKind::DivisionByZero => f.write_str("Division by zero."),
            RuntimeErrorKind::ModuloByZero => f.write_str("Modulo by zero."),
            RuntimeErrorKind::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{name}'.")
            }
            RuntimeErrorKind::UndefinedProperty { name } => {
                write!(f, "Undefined property '{name}'.")
            }
            RuntimeErrorKind::NotCallable => f.write_str("Can only call functions and classes."),
            RuntimeErrorKind::ArityMismatch { expected, got } => {
                write!(f, "Expected {expected} arguments but got {got}.")
            }
            RuntimeErrorKind::NoProperties => {
                f.write_str("Only instances and arrays have properties.")
            }
            RuntimeErrorKind::NoFields => f.write_str("Only instances have fields."),
            RuntimeErrorKind::NotIndexable => f.write_str("Only arrays can be indexed."),
            RuntimeErrorKind::IndexNotWholeNumber => {
                f.write_str("Array index must be a whole number.")
            }
            RuntimeErrorKind::IndexOutOfRange => f.write_str("Array index out of range."),
            RuntimeErrorKind::Native { message } => f.write_str(message),
        }
    }
}

/// A runtime failure at a source line.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    /// 1-based line of the triggering token.
    pub line: u32,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, line: u32) -> Self {
        RuntimeError { kind, line }
    }

    /// The human-readable message for this error.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn operand_must_be_number(line: u32) -> Self {
        Self::new(RuntimeErrorKind::OperandMustBeNumber, line)
    }

    pub fn operands_must_be_numbers(line: u32) -> Self {
        Self::new(RuntimeErrorKind::OperandsMustBeNumbers, line)
    }

    pub fn add_type_mismatch(line: u32) -> Self {
        Self::new(RuntimeErrorKind::AddTypeMismatch, line)
    }

    pub fn division_by_zero(line: u32) -> Self {
        Self::new(RuntimeErrorKind::DivisionByZero, line)
    }

    pub fn modulo_by_zero(line: u32) -> Self {
        Self::new(RuntimeErrorKind::ModuloByZero, line)
    }

    pub fn undefined_variable(name: impl Into<String>, line: u32) -> Self {
        Self::new(
            RuntimeErrorKind::UndefinedVariable { name: name.into() },
            line,
        )
    }

    pub fn undefined_property(name: impl Into<String>, line: u32) -> Self {
        Self::new(
            RuntimeErrorKind::UndefinedProperty { name: name.into() },
            line,
        )
    }

    pub fn not_callable(line: u32) -> Self {
        Self::new(RuntimeErrorKind::NotCallable, line)
    }

    pub fn arity_mismatch(expected: usize, got: usize, line: u32) -> Self {
        Self::new(RuntimeErrorKind::ArityMismatch { expected, got }, line)
    }

    pub fn no_properties(line: u32) -> Self {
        Self::new(RuntimeErrorKind::NoProperties, line)
    }

    pub fn no_fields(line: u32) -> Self {
        Self::new(RuntimeErrorKind::NoFields, line)
    }

    pub fn not_indexable(line: u32) -> Self {
        Self::new(RuntimeErrorKind::NotIndexable, line)
    }

    pub fn index_not_whole_number(line: u32) -> Self {
        Self::new(RuntimeErrorKind::IndexNotWholeNumber, line)
    }

    pub fn index_out_of_range(line: u32) -> Self {
        Self::new(RuntimeErrorKind::IndexOutOfRange, line)
    }

    pub fn native(message: impl Into<String>, line: u32) -> Self {
        Self::new(
            RuntimeErrorKind::Native {
                message: message.into(),
            },
            line,
        )
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.kind, self.line)
    }
}

impl std::error::Error for RuntimeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_matches_kind() {
        let err = RuntimeError::arity_mismatch(2, 3, 4);
        assert_eq!(err.message(), "Expected 2 arguments but got 3.");
        assert_eq!(err.to_string(), "Expected 2 arguments but got 3.\n[line 4]");
    }

    #[test]
    fn undefined_variable_names_the_variable() {
        let err = RuntimeError::undefined_variable("빈값", 9);
        assert_eq!(err.message(), "Undefined variable '빈값'.");
    }
}

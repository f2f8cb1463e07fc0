//! Diagnostic reporting for the Sori interpreter.
//!
//! Every stage of the pipeline reports problems as [`Diagnostic`] values:
//! a 1-based source line, an optional location phrase, and a message. The
//! host decides how to surface them; [`Diagnostic`]'s `Display` renders the
//! canonical `[line N] Error at 'x': message` form.

use std::fmt;

/// Where in the line the diagnostic points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// No location phrase (lexical and runtime errors).
    None,
    /// The error is at the end of input.
    AtEnd,
    /// The error is at a specific lexeme.
    At(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::None => Ok(()),
            Location::AtEnd => f.write_str(" at end"),
            Location::At(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// A reported problem, tied to a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: u32,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic with no location phrase (scanner and runtime errors).
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    /// Diagnostic pointing at a lexeme (parser and resolver errors).
    pub fn at_lexeme(line: u32, lexeme: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            location: Location::At(lexeme.into()),
            message: message.into(),
        }
    }

    /// Diagnostic pointing at the end of input.
    pub fn at_end(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            location: Location::AtEnd,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
    }
}

//! Diagnostic types for the replay engine
//!
//! This module defines [`DiagnosticKind`], the statement-level problems the
//! engine can find, and [`Diagnostic`], a kind tagged with a severity and the
//! source line it came from.
//!
//! None of these are fatal. The engine records the diagnostic, skips or
//! trims the offending statement, and carries on with the next one.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Which array operation hit a bad index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOp {
    Update,
    Insert,
    Delete,
}

impl fmt::Display for ArrayOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayOp::Update => write!(f, "update"),
            ArrayOp::Insert => write!(f, "insert"),
            ArrayOp::Delete => write!(f, "delete"),
        }
    }
}

/// Statement-level problems found during a replay
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticKind {
    /// Declared size below zero; the declaration is ignored
    #[error("Array '{name}' cannot have a negative size ({size})")]
    NegativeSize { name: String, size: i64 },

    /// More initializers than the declared size; the extra values are dropped
    #[error("Too many initializers for '{name}[{declared}]': got {given}, keeping the first {declared}")]
    TooManyInitializers {
        name: String,
        declared: usize,
        given: usize,
    },

    /// Fewer initializers than the declared size; the declaration is ignored
    #[error("Too few initializers for '{name}[{declared}]': got {given}")]
    TooFewInitializers {
        name: String,
        declared: usize,
        given: usize,
    },

    /// Index outside the valid range for the operation
    #[error("Index {index} out of range for {op} on '{name}' (length {len})")]
    IndexOutOfRange {
        name: String,
        op: ArrayOp,
        index: i64,
        len: usize,
    },

    /// Statement-shaped line without its terminating `;`
    #[error("Missing ';' at the end of \"{text}\"")]
    SyntaxHint { text: String },
}

/// How loudly a diagnostic should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Hint,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::TooManyInitializers { .. } => Severity::Warning,
            DiagnosticKind::SyntaxHint { .. } => Severity::Hint,
            DiagnosticKind::NegativeSize { .. }
            | DiagnosticKind::TooFewInitializers { .. }
            | DiagnosticKind::IndexOutOfRange { .. } => Severity::Error,
        }
    }
}

/// A diagnostic raised while replaying one statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, location: SourceLocation) -> Self {
        Diagnostic {
            severity: kind.severity(),
            kind,
            location,
        }
    }

    /// User-facing message without the line prefix
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}: {}",
            self.severity, self.location.line, self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line() {
        let diag = Diagnostic::new(
            DiagnosticKind::IndexOutOfRange {
                name: "a".to_string(),
                op: ArrayOp::Update,
                index: 5,
                len: 3,
            },
            SourceLocation::new(4, 1),
        );
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(
            diag.to_string(),
            "error at line 4: Index 5 out of range for update on 'a' (length 3)"
        );
    }
}

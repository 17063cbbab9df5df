// Replay engine: folds statements into an array environment

use crate::interpreter::diagnostics::{DiagnosticSink, SilentSink};
use crate::interpreter::errors::{ArrayOp, Diagnostic, DiagnosticKind};
use crate::memory::{ArrayEnvironment, IndexError, TypedArray};
use crate::parser::ast::*;
use tracing::trace;

/// Result of replaying a statement prefix with diagnostics collected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replay {
    pub environment: ArrayEnvironment,
    pub diagnostics: Vec<Diagnostic>,
}

/// Replay `lines` in order from an empty environment, reporting to `sink`.
///
/// Pure with respect to its inputs: the same lines always produce the same
/// environment and the same diagnostics in the same order.
pub fn run(lines: &[SourceLine], sink: &mut dyn DiagnosticSink) -> ArrayEnvironment {
    let mut env = ArrayEnvironment::new();
    for line in lines {
        execute_statement(&mut env, line, sink);
    }
    env
}

/// Replay `lines` and collect the diagnostics
pub fn replay(lines: &[SourceLine]) -> Replay {
    let mut diagnostics = Vec::new();
    let environment = run(lines, &mut diagnostics);
    Replay {
        environment,
        diagnostics,
    }
}

/// Replay `lines` without reporting anything
pub fn replay_silent(lines: &[SourceLine]) -> ArrayEnvironment {
    run(lines, &mut SilentSink)
}

/// Apply one statement to `env`
pub fn execute_statement(
    env: &mut ArrayEnvironment,
    line: &SourceLine,
    sink: &mut dyn DiagnosticSink,
) {
    let location = line.location;
    trace!(line = location.line, statement = ?line.statement, "execute");

    match &line.statement {
        Statement::Declare {
            kind,
            name,
            declared_size,
            values,
        } => execute_declaration(env, *kind, name, *declared_size, values, location, sink),

        Statement::Update { name, index, value } => {
            if let Some(arr) = env.get_mut(name) {
                if let Err(err) = arr.set(*index, *value) {
                    sink.report(out_of_range(name, ArrayOp::Update, err, location));
                }
            }
        }

        Statement::Insert { name, index, value } => {
            if let Some(arr) = env.get_mut(name) {
                if let Err(err) = arr.insert(*index, *value) {
                    sink.report(out_of_range(name, ArrayOp::Insert, err, location));
                }
            }
        }

        Statement::Delete { name, index } => {
            if let Some(arr) = env.get_mut(name) {
                if let Err(err) = arr.remove(*index) {
                    sink.report(out_of_range(name, ArrayOp::Delete, err, location));
                }
            }
        }

        Statement::MissingTerminator(text) => {
            sink.report(Diagnostic::new(
                DiagnosticKind::SyntaxHint { text: text.clone() },
                location,
            ));
        }

        Statement::Unparsed(_) => {}
    }
}

/// Size policy:
/// - negative size: rejected, any earlier array of that name is kept
/// - more values than the size: truncated to the size
/// - fewer values than the size: rejected
/// - size 0 (unsized): the values as written
fn execute_declaration(
    env: &mut ArrayEnvironment,
    kind: ElementKind,
    name: &str,
    declared_size: i64,
    values: &[Literal],
    location: SourceLocation,
    sink: &mut dyn DiagnosticSink,
) {
    let declared = match usize::try_from(declared_size) {
        Ok(size) => size,
        Err(_) => {
            sink.report(Diagnostic::new(
                DiagnosticKind::NegativeSize {
                    name: name.to_string(),
                    size: declared_size,
                },
                location,
            ));
            return;
        }
    };

    let given = values.len();
    let values = if declared == 0 || given == declared {
        values
    } else if given > declared {
        sink.report(Diagnostic::new(
            DiagnosticKind::TooManyInitializers {
                name: name.to_string(),
                declared,
                given,
            },
            location,
        ));
        &values[..declared]
    } else {
        sink.report(Diagnostic::new(
            DiagnosticKind::TooFewInitializers {
                name: name.to_string(),
                declared,
                given,
            },
            location,
        ));
        return;
    };

    env.declare(name, TypedArray::from_literals(kind, values));
}

fn out_of_range(name: &str, op: ArrayOp, err: IndexError, location: SourceLocation) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::IndexOutOfRange {
            name: name.to_string(),
            op,
            index: err.index,
            len: err.len,
        },
        location,
    )
}

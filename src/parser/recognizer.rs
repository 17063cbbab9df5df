//! Statement recognition for single lines
//!
//! [`recognize_line`] classifies one trimmed, non-comment line into exactly
//! one [`Statement`]. Every recognized shape must end in `;`. Shapes are
//! disjoint, so the order in which they are tried only matters for speed:
//!
//! ```text
//! int    <name>[<size>] = { <literal>, ... };
//! double <name>[<size>] = { <literal>, ... };
//! char   <name>[<size>] = "<characters>";
//! <name>[<index>] = <literal>;
//! <name>.insert(<index>, <literal>);
//! <name>.remove(<index>);  |  <name>.delete(<index>);
//! ```
//!
//! A line that only fails because the trailing `;` is missing comes back as
//! [`Statement::MissingTerminator`] so a targeted hint can be shown.

use super::ast::{ElementKind, Literal, Statement};
use super::scanner::{ScanError, ScanResult, Scanner};
use tracing::trace;

/// Classify one line. Never fails: unknown text becomes
/// [`Statement::Unparsed`].
pub fn recognize_line(line: &str) -> Statement {
    let line = line.trim();

    match scan_statement(line) {
        Ok(statement) => statement,
        Err(err) => {
            trace!(line, error = %err, "line not recognized");
            if resembles_unterminated(line) {
                Statement::MissingTerminator(line.to_string())
            } else {
                Statement::Unparsed(line.to_string())
            }
        }
    }
}

/// True when appending `;` would turn the line into an update, insert or
/// delete statement
fn resembles_unterminated(line: &str) -> bool {
    if line.ends_with(';') {
        return false;
    }
    let terminated = format!("{};", line);
    matches!(
        scan_statement(&terminated),
        Ok(Statement::Update { .. } | Statement::Insert { .. } | Statement::Delete { .. })
    )
}

fn scan_statement(line: &str) -> ScanResult<Statement> {
    let mut scanner = Scanner::new(line);
    let first = scanner.identifier()?;

    let statement = match ElementKind::from_keyword(&first) {
        Some(kind) => scan_declaration(&mut scanner, kind)?,
        None if scanner.check('[') => scan_update(&mut scanner, first)?,
        None if scanner.check('.') => scan_method_call(&mut scanner, first)?,
        None => {
            return Err(ScanError {
                message: format!("'{}' does not start a statement", first),
                column: 1,
            })
        }
    };

    scanner.expect(';')?;
    scanner.finish()?;
    Ok(statement)
}

/// `<name>[<size>] = <initializer>` after the type keyword
fn scan_declaration(scanner: &mut Scanner, kind: ElementKind) -> ScanResult<Statement> {
    let name = scanner.identifier()?;
    scanner.expect('[')?;
    let declared_size = if scanner.check(']') {
        0
    } else {
        scanner.signed_integer()?
    };
    scanner.expect(']')?;
    scanner.expect('=')?;

    let values = match kind {
        ElementKind::Char => scanner
            .string_literal()?
            .chars()
            .map(Literal::Char)
            .collect(),
        ElementKind::Int | ElementKind::Double => scan_braced_list(scanner)?,
    };

    Ok(Statement::Declare {
        kind,
        name,
        declared_size,
        values,
    })
}

/// `{ <literal>, ... }`; `{}` is an empty list
fn scan_braced_list(scanner: &mut Scanner) -> ScanResult<Vec<Literal>> {
    scanner.expect('{')?;
    let mut values = Vec::new();
    if scanner.eat('}') {
        return Ok(values);
    }

    loop {
        values.push(scanner.literal()?);
        if scanner.eat(',') {
            continue;
        }
        scanner.expect('}')?;
        return Ok(values);
    }
}

/// `[<index>] = <literal>` after the array name
fn scan_update(scanner: &mut Scanner, name: String) -> ScanResult<Statement> {
    scanner.expect('[')?;
    let index = scanner.signed_integer()?;
    scanner.expect(']')?;
    scanner.expect('=')?;
    let value = scanner.literal()?;
    Ok(Statement::Update { name, index, value })
}

/// `.insert(<index>, <literal>)`, `.remove(<index>)` or `.delete(<index>)`
fn scan_method_call(scanner: &mut Scanner, name: String) -> ScanResult<Statement> {
    scanner.expect('.')?;
    let method = scanner.identifier()?;
    scanner.expect('(')?;
    let index = scanner.signed_integer()?;

    let statement = match method.as_str() {
        "insert" => {
            scanner.expect(',')?;
            let value = scanner.literal()?;
            Statement::Insert { name, index, value }
        }
        "remove" | "delete" => Statement::Delete { name, index },
        _ => {
            return Err(ScanError {
                message: format!("unknown array method '{}'", method),
                column: 1,
            })
        }
    };

    scanner.expect(')')?;
    Ok(statement)
}

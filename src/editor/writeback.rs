//! Write-back of element edits into the text buffer
//!
//! When the chart changes an element, the text stays the source of truth:
//! the edit becomes an update statement. The last `name[index] = ...;` line
//! gets its literal replaced in place, unless a later insert, delete or
//! re-declaration of `name` moves elements around after it. In that case,
//! or when no such line exists, a new update line is inserted after the
//! last statement line so it runs against the final shape of the array.

use crate::memory::Element;
use crate::parser::ast::Statement;
use crate::parser::parse::is_blank_or_comment;
use crate::parser::recognizer::recognize_line;
use tracing::debug;

/// Return `source` with `name[index]` set to `value`
pub fn write_element(source: &str, name: &str, index: usize, value: Element) -> String {
    let literal = value.to_literal().to_string();
    let mut lines: Vec<String> = source.split('\n').map(str::to_string).collect();

    let statements: Vec<Option<Statement>> = lines
        .iter()
        .map(|line| (!is_blank_or_comment(line)).then(|| recognize_line(line.trim())))
        .collect();

    let existing = statements.iter().rposition(|statement| {
        matches!(
            statement,
            Some(Statement::Update { name: target, index: i, .. })
                if target == name && usize::try_from(*i).ok() == Some(index)
        )
    });

    // An update followed by a reshape of the same array no longer addresses
    // the element shown at `index`
    let existing = existing.filter(|&row| {
        !statements[row + 1..]
            .iter()
            .flatten()
            .any(|statement| reshapes(statement, name))
    });

    match existing {
        Some(row) => {
            debug!(row, name, index, %literal, "replacing update literal");
            lines[row] = replace_literal(&lines[row], &literal);
        }
        None => {
            let statement = format!("{}[{}] = {};", name, index, literal);
            let insert_at = lines
                .iter()
                .rposition(|line| !is_blank_or_comment(line))
                .map(|row| row + 1);
            debug!(?insert_at, %statement, "appending update statement");
            match insert_at {
                Some(row) => lines.insert(row, statement),
                None if source.trim().is_empty() => return statement,
                None => lines.push(statement),
            }
        }
    }

    lines.join("\n")
}

/// True when `statement` can move the elements of `name` to other indices
fn reshapes(statement: &Statement, name: &str) -> bool {
    matches!(
        statement,
        Statement::Declare { .. } | Statement::Insert { .. } | Statement::Delete { .. }
    ) && statement.target() == Some(name)
}

/// Swap the literal after `=` in an update line, keeping everything else
fn replace_literal(line: &str, literal: &str) -> String {
    let Some(eq) = line.find('=') else {
        return line.to_string();
    };

    let after_eq = &line[eq + 1..];
    let start = eq + 1 + (after_eq.len() - after_eq.trim_start().len());
    let rest = &line[start..];

    let len = if rest.starts_with('\'') {
        // quote, one character, quote
        rest.char_indices()
            .nth(3)
            .map(|(offset, _)| offset)
            .unwrap_or(rest.len())
    } else {
        rest.find(|c: char| c == ';' || c.is_whitespace())
            .unwrap_or(rest.len())
    };

    format!("{}{}{}", &line[..start], literal, &rest[len..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_existing_update_in_place() {
        let source = "int a[3] = {1,2,3};\n  a[1] = 9;  // tweak\nint b[1] = {0};";
        let updated = write_element(source, "a", 1, Element::Int(42));
        assert_eq!(
            updated,
            "int a[3] = {1,2,3};\n  a[1] = 42;  // tweak\nint b[1] = {0};"
        );
    }

    #[test]
    fn test_replaces_last_matching_update() {
        let source = "int a[2] = {1,2};\na[0] = 5;\na[0] = 6;";
        let updated = write_element(source, "a", 0, Element::Int(7));
        assert_eq!(updated, "int a[2] = {1,2};\na[0] = 5;\na[0] = 7;");
    }

    #[test]
    fn test_appends_after_last_statement_line() {
        let source = "int a[2] = {1,2};\n// trailing comment\n\n";
        let updated = write_element(source, "a", 1, Element::Int(3));
        assert_eq!(
            updated,
            "int a[2] = {1,2};\na[1] = 3;\n// trailing comment\n\n"
        );
    }

    #[test]
    fn test_appends_when_array_reshaped_later() {
        let source = "int a[3] = {1, 2, 3};\na[0] = 5;\na.insert(0, 9);";
        let updated = write_element(source, "a", 0, Element::Int(10));
        assert_eq!(
            updated,
            "int a[3] = {1, 2, 3};\na[0] = 5;\na.insert(0, 9);\na[0] = 10;"
        );

        let source = "int a[2] = {1, 2};\na[1] = 5;\nint a[3] = {0, 0, 0};";
        let updated = write_element(source, "a", 1, Element::Int(4));
        assert!(updated.ends_with("int a[3] = {0, 0, 0};\na[1] = 4;"));
    }

    #[test]
    fn test_other_array_reshape_keeps_in_place_edit() {
        let source = "int a[2] = {1, 2};\nint b[1] = {0};\na[0] = 5;\nb.remove(0);";
        let updated = write_element(source, "a", 0, Element::Int(6));
        assert_eq!(
            updated,
            "int a[2] = {1, 2};\nint b[1] = {0};\na[0] = 6;\nb.remove(0);"
        );
    }

    #[test]
    fn test_char_literal_replacement() {
        let source = "char w[4] = \"byte\";\nw[0] = 'j';";
        let updated = write_element(source, "w", 0, Element::Char('k'));
        assert_eq!(updated, "char w[4] = \"byte\";\nw[0] = 'k';");
    }

    #[test]
    fn test_double_literal_format() {
        let updated = write_element("double d[1] = {1.5};", "d", 0, Element::Double(2.0));
        assert_eq!(updated, "double d[1] = {1.5};\nd[0] = 2.0;");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(write_element("", "a", 0, Element::Int(1)), "a[0] = 1;");
    }
}

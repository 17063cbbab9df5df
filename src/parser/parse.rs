//! Program extraction from a text buffer
//!
//! Splits the buffer into lines, drops blank lines and `//` comment lines,
//! and runs the recognizer on what is left. Every remaining line becomes one
//! [`SourceLine`], recognized or not, so step mode walks the same sequence the
//! user sees in the editor.

use crate::parser::ast::*;
use crate::parser::recognizer::recognize_line;

/// True for lines that never count as statements
pub fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}

/// Parse a full text buffer into its ordered statement lines
pub fn parse_program(source: &str) -> Program {
    let mut program = Program::new();

    for (idx, line) in source.lines().enumerate() {
        if is_blank_or_comment(line) {
            continue;
        }

        let column = line.len() - line.trim_start().len() + 1;
        program.lines.push(SourceLine {
            location: SourceLocation::new(idx + 1, column),
            statement: recognize_line(line),
        });
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let source = "// header\n\nint a[1] = {4};\n   // note\n  a[0] = 5;\n";
        let program = parse_program(source);

        assert_eq!(program.len(), 2);
        assert_eq!(program.lines[0].location, SourceLocation::new(3, 1));
        assert_eq!(program.lines[1].location, SourceLocation::new(5, 3));
        assert!(matches!(program.lines[1].statement, Statement::Update { .. }));
    }

    #[test]
    fn test_unrecognized_lines_are_kept() {
        let program = parse_program("int a[1] = {4};\nwhat is this\na[0] = 1");

        assert_eq!(program.len(), 3);
        assert!(matches!(program.lines[1].statement, Statement::Unparsed(_)));
        assert!(matches!(
            program.lines[2].statement,
            Statement::MissingTerminator(_)
        ));
    }

    #[test]
    fn test_prefix_is_clamped() {
        let program = parse_program("int a[1] = {4};");
        assert_eq!(program.prefix(0).len(), 0);
        assert_eq!(program.prefix(10).len(), 1);
    }
}

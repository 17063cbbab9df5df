// Integration tests for recognizing and replaying array statements

use arraytty::interpreter::engine::{self, Replay};
use arraytty::interpreter::errors::{ArrayOp, DiagnosticKind, Severity};
use arraytty::memory::{ArrayEnvironment, Element};
use arraytty::parser::ast::Statement;
use arraytty::parser::parse::parse_program;
use assert_matches::assert_matches;

fn replay(source: &str) -> Replay {
    engine::replay(&parse_program(source).lines)
}

fn values(env: &ArrayEnvironment, name: &str) -> Vec<Element> {
    env.get(name)
        .map(|arr| arr.elements().to_vec())
        .unwrap_or_default()
}

fn ints(values: &[i64]) -> Vec<Element> {
    values.iter().map(|&n| Element::Int(n)).collect()
}

#[test]
fn test_exact_size_declaration() {
    let result = replay("int a[3] = {4, 5, 6};");
    assert!(result.diagnostics.is_empty());
    assert_eq!(values(&result.environment, "a"), ints(&[4, 5, 6]));
}

#[test]
fn test_negative_size_rejected() {
    let result = replay("int a[-2] = {1, 2};");
    assert!(!result.environment.contains("a"));
    assert_eq!(result.diagnostics.len(), 1);
    assert_matches!(
        &result.diagnostics[0].kind,
        DiagnosticKind::NegativeSize { name, size: -2 } if name == "a"
    );
    assert_eq!(result.diagnostics[0].severity, Severity::Error);
}

#[test]
fn test_negative_size_keeps_prior_array() {
    let result = replay("int a[2] = {1, 2};\nint a[-1] = {9};");
    assert_eq!(values(&result.environment, "a"), ints(&[1, 2]));
}

#[test]
fn test_update_and_scenario() {
    let result = replay("int a[3] = {1,2,3};\na[1] = 9;");
    assert!(result.diagnostics.is_empty());
    assert_eq!(values(&result.environment, "a"), ints(&[1, 9, 3]));
}

#[test]
fn test_update_leaves_other_arrays_unchanged() {
    let result = replay("int a[2] = {1, 2};\nint b[2] = {3, 4};\na[0] = 9;\nb[1] = 8;\na[1] = 7;");
    assert!(result.diagnostics.is_empty());
    assert_eq!(values(&result.environment, "a"), ints(&[9, 7]));
    assert_eq!(values(&result.environment, "b"), ints(&[3, 8]));

    let result = replay("int a[2] = {1, 2};\nint b[2] = {3, 4};\na[0] = 9;");
    assert_eq!(values(&result.environment, "b"), ints(&[3, 4]));
    assert_eq!(result.environment.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_update_coerces_to_array_kind() {
    let result = replay("int a[2] = {1, 2};\na[0] = 2.9;\ndouble d[1] = {0.5};\nd[0] = 3;");
    assert_eq!(values(&result.environment, "a"), ints(&[2, 2]));
    assert_eq!(values(&result.environment, "d"), vec![Element::Double(3.0)]);
}

#[test]
fn test_too_many_initializers_truncates() {
    let result = replay("int a[2] = {1,2,3};");
    assert_eq!(values(&result.environment, "a"), ints(&[1, 2]));
    assert_eq!(result.diagnostics.len(), 1);
    assert_matches!(
        result.diagnostics[0].kind,
        DiagnosticKind::TooManyInitializers { declared: 2, given: 3, .. }
    );
    assert_eq!(result.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn test_too_few_initializers_rejected_for_every_kind() {
    for source in [
        "int a[3] = {1};",
        "double a[3] = {1.5};",
        "char a[5] = \"ab\";",
    ] {
        let result = replay(source);
        assert!(!result.environment.contains("a"), "{source}");
        assert_matches!(
            result.diagnostics.as_slice(),
            [d] if matches!(d.kind, DiagnosticKind::TooFewInitializers { .. })
        );
    }
}

#[test]
fn test_char_array_scenario() {
    let result = replay("char w[4] = \"byte\";\nw[0] = 'j';");
    assert!(result.diagnostics.is_empty());
    let chars: String = values(&result.environment, "w")
        .into_iter()
        .map(|e| match e {
            Element::Char(c) => c,
            other => panic!("expected char, got {other:?}"),
        })
        .collect();
    assert_eq!(chars, "jyte");
}

#[test]
fn test_update_of_undeclared_array_is_silent() {
    let result = replay("a[5] = 2;");
    assert!(result.environment.is_empty());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_unsized_declaration_then_insert() {
    let result = replay("int a[0] = {1,2,3};\na.insert(1, 7);");
    assert!(result.diagnostics.is_empty());
    assert_eq!(values(&result.environment, "a"), ints(&[1, 7, 2, 3]));

    let result = replay("int b[] = {1,2};");
    assert_eq!(values(&result.environment, "b"), ints(&[1, 2]));
}

#[test]
fn test_insert_at_bounds() {
    let result = replay("int a[2] = {1, 2};\na.insert(2, 3);\na.insert(0, 0);");
    assert_eq!(values(&result.environment, "a"), ints(&[0, 1, 2, 3]));
}

#[test]
fn test_delete_shifts_left() {
    let result = replay("int a[4] = {1, 2, 3, 4};\na.remove(1);\na.delete(0);");
    assert_eq!(values(&result.environment, "a"), ints(&[3, 4]));
}

#[test]
fn test_out_of_range_operations_leave_array_unchanged() {
    let cases = [
        ("a[2] = 5;", ArrayOp::Update),
        ("a[-1] = 5;", ArrayOp::Update),
        ("a.insert(3, 5);", ArrayOp::Insert),
        ("a.remove(2);", ArrayOp::Delete),
        ("a.delete(-1);", ArrayOp::Delete),
    ];

    for (statement, expected_op) in cases {
        let result = replay(&format!("int a[2] = {{1, 2}};\n{statement}"));
        assert_eq!(values(&result.environment, "a"), ints(&[1, 2]), "{statement}");
        assert_eq!(result.diagnostics.len(), 1, "{statement}");
        assert_matches!(
            result.diagnostics[0].kind,
            DiagnosticKind::IndexOutOfRange { op, len: 2, .. } if op == expected_op
        );
        assert_eq!(result.diagnostics[0].location.line, 2);
    }
}

#[test]
fn test_missing_terminator_hint() {
    let program = parse_program("int a[2] = {1, 2};\na[0] = 5");
    assert_matches!(program.lines[1].statement, Statement::MissingTerminator(_));

    let result = engine::replay(&program.lines);
    assert_eq!(values(&result.environment, "a"), ints(&[1, 2]));
    assert_matches!(
        result.diagnostics.as_slice(),
        [d] if d.severity == Severity::Hint && matches!(d.kind, DiagnosticKind::SyntaxHint { .. })
    );
}

#[test]
fn test_unparsed_lines_are_silent() {
    let result = replay("hello world\nint a[1] = {x};\nint a[1] = {1};");
    assert!(result.diagnostics.is_empty());
    assert_eq!(values(&result.environment, "a"), ints(&[1]));
}

#[test]
fn test_comments_and_blank_lines_keep_line_numbers() {
    let result = replay("// header\n\nint a[1] = {1};\n  a[4] = 2;");
    assert_eq!(result.diagnostics[0].location.line, 4);
}

#[test]
fn test_redeclaration_replaces_array() {
    let result = replay("int a[2] = {1, 2};\nint b[1] = {5};\ndouble a[1] = {0.5};");
    assert_eq!(values(&result.environment, "a"), vec![Element::Double(0.5)]);
    let names: Vec<&str> = result.environment.names().collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_first_declared_array_is_current() {
    let result = replay("int b[1] = {1};\nint a[1] = {2};");
    assert_eq!(result.environment.current(None).map(|(n, _)| n), Some("b"));
    assert_eq!(result.environment.current(Some("a")).map(|(n, _)| n), Some("a"));
    assert_eq!(result.environment.current(Some("zzz")).map(|(n, _)| n), Some("b"));
}

#[test]
fn test_replay_is_deterministic() {
    let source = "int a[2] = {1,2,3};\na[7] = 1;\na.insert(0, 4);\nchar w[] = \"hi\";";
    assert_eq!(replay(source), replay(source));
}

#[test]
fn test_prefix_replay_matches_incremental_execution() {
    let program = parse_program("int a[3] = {1,2,3};\na[0] = 7;\na.remove(2);\na.insert(1, 4);");
    let mut env = ArrayEnvironment::new();
    let mut sink = Vec::new();

    for (i, line) in program.lines.iter().enumerate() {
        engine::execute_statement(&mut env, line, &mut sink);
        assert_eq!(env, engine::replay_silent(program.prefix(i + 1)));
    }
}

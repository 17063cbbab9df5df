// Statement definitions for the array notation

use std::fmt;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Element kinds an array can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Int,
    Double,
    Char,
}

impl ElementKind {
    /// The type keyword used in declarations
    pub fn keyword(self) -> &'static str {
        match self {
            ElementKind::Int => "int",
            ElementKind::Double => "double",
            ElementKind::Char => "char",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(ElementKind::Int),
            "double" => Some(ElementKind::Double),
            "char" => Some(ElementKind::Char),
            _ => None,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A literal value as written in the source.
///
/// The surface form decides the variant: `5` is an [`Literal::Int`], `5.0`
/// is a [`Literal::Double`] and `'x'` is a [`Literal::Char`]. Coercion to an
/// array's element kind happens at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Double(f64),
    Char(char),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Double(x) => {
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Literal::Char(c) => write!(f, "'{}'", c),
        }
    }
}

/// One recognized line of the notation
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `int a[3] = {1, 2, 3};`, `double d[] = {...};`, `char w[4] = "byte";`
    ///
    /// `declared_size` is 0 when the brackets are empty.
    Declare {
        kind: ElementKind,
        name: String,
        declared_size: i64,
        values: Vec<Literal>,
    },

    /// `a[1] = 9;`
    Update {
        name: String,
        index: i64,
        value: Literal,
    },

    /// `a.insert(1, 7);`
    Insert {
        name: String,
        index: i64,
        value: Literal,
    },

    /// `a.remove(0);` or `a.delete(0);`
    Delete { name: String, index: i64 },

    /// Looks like an update/insert/delete but lacks the trailing `;`
    MissingTerminator(String),

    /// Anything else
    Unparsed(String),
}

impl Statement {
    /// Name of the array this statement refers to, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Statement::Declare { name, .. }
            | Statement::Update { name, .. }
            | Statement::Insert { name, .. }
            | Statement::Delete { name, .. } => Some(name),
            Statement::MissingTerminator(_) | Statement::Unparsed(_) => None,
        }
    }
}

/// A statement together with the line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub location: SourceLocation,
    pub statement: Statement,
}

/// All candidate statement lines of a text buffer, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub lines: Vec<SourceLine>,
}

impl Program {
    pub fn new() -> Self {
        Program { lines: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The first `count` statements (clamped to the program length)
    pub fn prefix(&self, count: usize) -> &[SourceLine] {
        &self.lines[..count.min(self.lines.len())]
    }
}

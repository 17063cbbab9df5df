//! Character scanner for a single statement line
//!
//! The notation is line oriented, so instead of producing a token stream the
//! recognizer drives a [`Scanner`] directly: each method consumes one
//! syntactic piece (identifier, signed integer, literal, punctuation) and
//! whitespace between pieces is skipped implicitly.

use super::ast::Literal;

/// Why a line did not scan as the expected shape
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("column {column}: {message}")]
pub struct ScanError {
    pub message: String,
    pub column: usize,
}

pub type ScanResult<T> = Result<T, ScanError>;

/// Cursor over the characters of one line
pub struct Scanner {
    input: Vec<char>,
    position: usize,
}

impl Scanner {
    pub fn new(line: &str) -> Self {
        Self {
            input: line.chars().collect(),
            position: 0,
        }
    }

    /// Consume `expected` (after whitespace) or fail
    pub fn expect(&mut self, expected: char) -> ScanResult<()> {
        self.skip_whitespace();
        match self.peek() {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(self.error(format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(format!("expected '{}', found end of line", expected))),
        }
    }

    /// Consume `expected` if it is next (after whitespace)
    pub fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check the next non-whitespace character without consuming it
    pub fn check(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        self.peek() == Some(expected)
    }

    /// Consume an identifier: `[A-Za-z_][A-Za-z0-9_]*`
    pub fn identifier(&mut self) -> ScanResult<String> {
        self.skip_whitespace();
        match self.peek() {
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
            _ => return Err(self.error("expected identifier".to_string())),
        }

        let mut ident = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Ok(ident)
    }

    /// Consume an integer with an optional leading `-`
    pub fn signed_integer(&mut self) -> ScanResult<i64> {
        self.skip_whitespace();
        let start = self.position;
        let negative = self.peek() == Some('-');
        if negative {
            self.advance();
        }

        let digits = self.digits();
        if digits.is_empty() {
            return Err(ScanError {
                message: "expected integer".to_string(),
                column: start + 1,
            });
        }

        let text = if negative {
            format!("-{}", digits)
        } else {
            digits
        };
        text.parse::<i64>().map_err(|_| ScanError {
            message: format!("integer out of range: {}", text),
            column: start + 1,
        })
    }

    /// Consume a value literal: integer, decimal or single-quoted character.
    ///
    /// Integers win over decimals: a number without a `.` is always
    /// [`Literal::Int`].
    pub fn literal(&mut self) -> ScanResult<Literal> {
        self.skip_whitespace();
        match self.peek() {
            Some('\'') => self.char_literal(),
            Some(ch) if ch == '-' || ch == '.' || ch.is_ascii_digit() => self.number_literal(),
            Some(ch) => Err(self.error(format!("expected literal, found '{}'", ch))),
            None => Err(self.error("expected literal, found end of line".to_string())),
        }
    }

    /// Consume a double-quoted string; no escape sequences
    pub fn string_literal(&mut self) -> ScanResult<String> {
        self.expect('"')?;
        let start = self.position;
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                return Ok(string);
            }
            string.push(ch);
        }

        Err(ScanError {
            message: "unterminated string literal".to_string(),
            column: start,
        })
    }

    /// Consume the rest of the line: only whitespace and an optional
    /// trailing `//` comment may remain
    pub fn finish(&mut self) -> ScanResult<()> {
        self.skip_whitespace();
        if self.peek() == Some('/') && self.peek_ahead(1) == Some('/') {
            self.position = self.input.len();
        }
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.error("unexpected trailing text".to_string()))
        }
    }

    fn char_literal(&mut self) -> ScanResult<Literal> {
        self.advance(); // opening quote
        let value = self
            .advance()
            .ok_or_else(|| self.error("unterminated character literal".to_string()))?;
        if self.advance() != Some('\'') {
            return Err(self.error("character literal must hold exactly one character".to_string()));
        }
        Ok(Literal::Char(value))
    }

    fn number_literal(&mut self) -> ScanResult<Literal> {
        let start = self.position;
        let negative = self.peek() == Some('-');
        if negative {
            self.advance();
        }

        let whole = self.digits();
        let is_decimal = self.peek() == Some('.');
        let fraction = if is_decimal {
            self.advance();
            self.digits()
        } else {
            String::new()
        };

        let bad_number = |message: &str| ScanError {
            message: message.to_string(),
            column: start + 1,
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(bad_number("expected digits"));
        }

        let sign = if negative { "-" } else { "" };
        if is_decimal {
            let text = format!(
                "{}{}.{}",
                sign,
                if whole.is_empty() { "0" } else { &whole },
                if fraction.is_empty() { "0" } else { &fraction }
            );
            text.parse::<f64>()
                .map(Literal::Double)
                .map_err(|_| bad_number("invalid decimal literal"))
        } else {
            format!("{}{}", sign, whole)
                .parse::<i64>()
                .map(Literal::Int)
                .map_err(|_| bad_number("integer literal out of range"))
        }
    }

    fn digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        digits
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t') | Some('\r')) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, message: String) -> ScanError {
        ScanError {
            message,
            column: self.position + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_and_punctuation() {
        let mut scanner = Scanner::new("  arr_1 [ 3 ]");
        assert_eq!(scanner.identifier().unwrap(), "arr_1");
        scanner.expect('[').unwrap();
        assert_eq!(scanner.signed_integer().unwrap(), 3);
        scanner.expect(']').unwrap();
        assert!(scanner.finish().is_ok());
    }

    #[test]
    fn test_signed_integer() {
        assert_eq!(Scanner::new("-12").signed_integer().unwrap(), -12);
        assert!(Scanner::new("-").signed_integer().is_err());
        assert!(Scanner::new("99999999999999999999").signed_integer().is_err());
    }

    #[test]
    fn test_literal_shapes() {
        assert_eq!(Scanner::new("5").literal().unwrap(), Literal::Int(5));
        assert_eq!(Scanner::new("5.0").literal().unwrap(), Literal::Double(5.0));
        assert_eq!(Scanner::new("-2.5").literal().unwrap(), Literal::Double(-2.5));
        assert_eq!(Scanner::new(".5").literal().unwrap(), Literal::Double(0.5));
        assert_eq!(Scanner::new("'x'").literal().unwrap(), Literal::Char('x'));
        assert!(Scanner::new("'xy'").literal().is_err());
        assert!(Scanner::new(".").literal().is_err());
        assert!(Scanner::new("abc").literal().is_err());
    }

    #[test]
    fn test_string_literal() {
        let mut scanner = Scanner::new(r#""byte";"#);
        assert_eq!(scanner.string_literal().unwrap(), "byte");
        scanner.expect(';').unwrap();

        assert!(Scanner::new(r#""open"#).string_literal().is_err());
    }

    #[test]
    fn test_finish_allows_trailing_comment() {
        let mut scanner = Scanner::new(";   // done");
        scanner.expect(';').unwrap();
        assert!(scanner.finish().is_ok());

        let mut scanner = Scanner::new("; extra");
        scanner.expect(';').unwrap();
        assert!(scanner.finish().is_err());
    }
}

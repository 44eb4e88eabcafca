use crate::error::{ParseError, Position};
use crate::tree::Value;

/// Parser state: tracks position in the input string.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

/// Parse a single tree expression into a `Value`.
///
/// Grammar: `hempty`, number literals, `"..."` strings, `#t`/`#f`
/// booleans, and `( expr expr expr )` nodes. `;` starts a line comment.
/// Anything but whitespace after the expression is an error.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser { input, pos: 0 };

    parser.skip_ws();
    let value = parser.parse_expr()?;
    parser.skip_ws();
    if parser.pos < parser.input.len() {
        return Err(parser.error_point("Expected end of input".to_string()));
    }

    Ok(value)
}

impl<'a> Parser<'a> {
    // ── Helpers ──────────────────────────────────────────────────────

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn eat_char(&mut self, ch: char) -> bool {
        if self.peek_char() == Some(ch) {
            self.advance(ch.len_utf8());
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, ch: char) -> Result<(), ParseError> {
        if self.eat_char(ch) {
            Ok(())
        } else {
            Err(self.error_point(format!("Expected '{}'", ch)))
        }
    }

    /// Current position in the source.
    fn position(&self) -> Position {
        let consumed = &self.input[..self.pos];
        let line = consumed.matches('\n').count();
        let last_newline = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = self.pos - last_newline;
        Position {
            line,
            column,
            offset: self.pos,
        }
    }

    /// Create an error at a single point (current position).
    fn error_point(&self, message: String) -> ParseError {
        let pos = self.position();
        ParseError::syntax_error(message, pos, pos)
    }

    /// Create an error spanning from `begin` to the current position.
    fn error_span(&self, message: String, begin: Position) -> ParseError {
        ParseError::syntax_error(message, begin, self.position())
    }

    // ── Whitespace & Comments ───────────────────────────────────────

    fn skip_ws(&mut self) {
        loop {
            // Skip whitespace characters
            while let Some(ch) = self.peek_char() {
                if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                    self.advance(ch.len_utf8());
                } else {
                    break;
                }
            }
            // Skip line comments: ; to end of line
            if self.peek_char() == Some(';') {
                while let Some(ch) = self.peek_char() {
                    if ch == '\r' || ch == '\n' {
                        break;
                    }
                    self.advance(ch.len_utf8());
                }
            } else {
                break;
            }
        }
    }

    // ── Expression Dispatch ─────────────────────────────────────────

    fn parse_expr(&mut self) -> Result<Value, ParseError> {
        match self.peek_char() {
            Some('(') => self.parse_node(),
            Some('"') => self.parse_string().map(Value::String),
            Some('#') => self.parse_hash_constant(),
            Some(ch) if ch == '-' || ch == '.' || ch.is_ascii_digit() => self.parse_number(),
            Some(ch) if is_bare_char(ch) => self.parse_keyword(),
            _ => Err(self.error_point("Expected a value".to_string())),
        }
    }

    /// Parse `( expr expr expr )`: exactly three children.
    fn parse_node(&mut self) -> Result<Value, ParseError> {
        let begin = self.position();
        self.expect_char('(')?;

        self.skip_ws();
        let left = self.parse_expr()?;
        self.skip_ws();
        let mid = self.parse_expr()?;
        self.skip_ws();
        let right = self.parse_expr()?;
        self.skip_ws();

        if self.eat_char(')') {
            Ok(Value::node(left, mid, right))
        } else if self.pos < self.input.len() {
            Err(self.error_span(
                "A node takes exactly three children; expected ')'".to_string(),
                begin,
            ))
        } else {
            Err(self.error_span("Unclosed '('".to_string(), begin))
        }
    }

    /// Parse the bare keyword `hempty`.
    fn parse_keyword(&mut self) -> Result<Value, ParseError> {
        let begin = self.position();
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if is_bare_char(ch) {
                self.advance(ch.len_utf8());
            } else {
                break;
            }
        }
        let word = &self.input[start..self.pos];
        if word == "hempty" {
            Ok(Value::Empty)
        } else {
            Err(self.error_span(
                format!("Unknown keyword \"{}\"; expected hempty", word),
                begin,
            ))
        }
    }

    /// Parse `#t` or `#f`.
    fn parse_hash_constant(&mut self) -> Result<Value, ParseError> {
        let begin = self.position();
        self.expect_char('#')?;
        if self.remaining().starts_with('t') && !self.is_bare_char_at(1) {
            self.advance(1);
            return Ok(Value::Boolean(true));
        }
        if self.remaining().starts_with('f') && !self.is_bare_char_at(1) {
            self.advance(1);
            return Ok(Value::Boolean(false));
        }
        // Consume the bad token for a better span
        while let Some(ch) = self.peek_char() {
            if is_bare_char(ch) {
                self.advance(ch.len_utf8());
            } else {
                break;
            }
        }
        let token = &self.input[begin.offset..self.pos];
        Err(self.error_span(
            format!("Illegal constant {}; expected #t or #f", token),
            begin,
        ))
    }

    fn is_bare_char_at(&self, offset: usize) -> bool {
        self.remaining()
            .chars()
            .nth(offset)
            .map_or(false, is_bare_char)
    }

    /// Parse a number literal: optional `-`, digits, optional `.digits`.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let begin = self.position();
        let start = self.pos;

        self.eat_char('-');
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.advance(1);
            } else {
                break;
            }
        }
        if self.eat_char('.') {
            while let Some(ch) = self.peek_char() {
                if ch.is_ascii_digit() {
                    self.advance(1);
                } else {
                    break;
                }
            }
        }

        let token = &self.input[start..self.pos];
        match token.parse::<f64>() {
            Ok(n) => Ok(Value::Number(n)),
            Err(_) => Err(self.error_span(format!("Invalid number \"{}\"", token), begin)),
        }
    }

    /// Parse a double-quoted string with escapes.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let begin = self.position();
        self.expect_char('"')?;

        let mut out = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance(1);
                    return Ok(out);
                }
                Some('\\') => {
                    self.advance(1);
                    match self.peek_char() {
                        Some('"') => out.push('"'),
                        Some('\\') => out.push('\\'),
                        Some('n') => out.push('\n'),
                        Some('r') => out.push('\r'),
                        Some('t') => out.push('\t'),
                        Some(ch) => {
                            return Err(self.error_span(
                                format!("Invalid escape '\\{}'", ch),
                                begin,
                            ));
                        }
                        None => {
                            return Err(
                                self.error_span("Unterminated string".to_string(), begin)
                            );
                        }
                    }
                    self.advance(1);
                }
                Some('\n') | None => {
                    return Err(self.error_span("Unterminated string".to_string(), begin));
                }
                Some(ch) => {
                    out.push(ch);
                    self.advance(ch.len_utf8());
                }
            }
        }
    }
}

/// Characters allowed in bare keyword tokens.
fn is_bare_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

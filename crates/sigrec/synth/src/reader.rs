//! Reader for representation expressions.
//!
//! A record's `Display` output is a construction expression,
//! `TypeName(v1, v2, name=v3)`. This module parses that grammar back into
//! a callee plus positional and keyword values, which
//! [`RecordType::reconstruct`](crate::record::RecordType::reconstruct)
//! feeds through the ordinary constructor.

use indexmap::IndexMap;

use sigrec_types::Value;

use crate::error::RecordError;

/// A parsed construction expression.
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    /// The type name the expression constructs.
    pub callee: String,
    /// Positional values, in order.
    pub args: Vec<Value>,
    /// Keyword values, in order.
    pub kwargs: Vec<(String, Value)>,
}

/// Parse a construction expression.
///
/// # Errors
///
/// Returns [`RecordError::Parse`] on malformed input: unbalanced
/// delimiters, a positional value after a keyword value, a reserved word
/// used as a keyword name, or trailing characters.
pub fn parse_call(input: &str) -> Result<CallExpr, RecordError> {
    let mut cur = Cursor::new(input);
    cur.skip_ws();
    let callee = cur.ident()?;
    cur.skip_ws();
    cur.expect('(')?;

    let mut args = Vec::new();
    let mut kwargs: Vec<(String, Value)> = Vec::new();
    loop {
        cur.skip_ws();
        if cur.eat(')') {
            break;
        }

        let checkpoint = cur.pos;
        let mut parsed_kwarg = false;
        if matches!(cur.peek(), Some(c) if c.is_alphabetic() || c == '_') {
            let name = cur.ident()?;
            cur.skip_ws();
            if cur.eat('=') {
                if matches!(name.as_str(), "None" | "True" | "False" | "inf" | "NaN") {
                    return Err(cur.error(format!("reserved word `{}` as keyword name", name)));
                }
                let value = cur.value()?;
                kwargs.push((name, value));
                parsed_kwarg = true;
            } else {
                cur.pos = checkpoint;
            }
        }
        if !parsed_kwarg {
            if !kwargs.is_empty() {
                return Err(cur.error("positional value follows keyword value".into()));
            }
            args.push(cur.value()?);
        }

        cur.skip_ws();
        if cur.eat(',') {
            continue;
        }
        cur.skip_ws();
        cur.expect(')')?;
        break;
    }

    cur.skip_ws();
    if cur.peek().is_some() {
        return Err(cur.error("trailing characters after expression".into()));
    }
    Ok(CallExpr {
        callee,
        args,
        kwargs,
    })
}

/// Parse a single value literal, consuming the whole input.
pub fn parse_value(input: &str) -> Result<Value, RecordError> {
    let mut cur = Cursor::new(input);
    let value = cur.value()?;
    cur.skip_ws();
    if cur.peek().is_some() {
        return Err(cur.error("trailing characters after value".into()));
    }
    Ok(value)
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, ch: char) -> Result<(), RecordError> {
        if self.eat(ch) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{}`", ch)))
        }
    }

    fn error(&self, message: String) -> RecordError {
        RecordError::Parse(format!("{} at offset {}", message, self.pos))
    }

    fn ident(&mut self) -> Result<String, RecordError> {
        let mut name = String::new();
        match self.peek() {
            Some(c) if c.is_alphabetic() || c == '_' => {
                name.push(c);
                self.pos += 1;
            }
            _ => return Err(self.error("expected identifier".into())),
        }
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                name.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(name)
    }

    fn value(&mut self) -> Result<Value, RecordError> {
        self.skip_ws();
        match self.peek() {
            Some('\'') => Ok(Value::Str(self.string_literal()?)),
            Some('(') => {
                self.pos += 1;
                Ok(Value::Tuple(self.seq(')')?))
            }
            Some('[') => {
                self.pos += 1;
                Ok(Value::List(self.seq(']')?))
            }
            Some('{') => {
                self.pos += 1;
                self.map()
            }
            Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => self.number(),
            Some(c) if c.is_alphabetic() || c == '_' => {
                let word = self.ident()?;
                match word.as_str() {
                    "None" => Ok(Value::Unit),
                    "True" => Ok(Value::Bool(true)),
                    "False" => Ok(Value::Bool(false)),
                    "inf" => Ok(Value::Float(f64::INFINITY)),
                    "NaN" => Ok(Value::Float(f64::NAN)),
                    _ => Err(self.error(format!("unexpected identifier `{}`", word))),
                }
            }
            Some(c) => Err(self.error(format!("unexpected character `{}`", c))),
            None => Err(self.error("unexpected end of input".into())),
        }
    }

    fn string_literal(&mut self) -> Result<String, RecordError> {
        self.expect('\'')?;
        let mut text = String::new();
        loop {
            match self.advance() {
                Some('\'') => return Ok(text),
                Some('\\') => match self.advance() {
                    Some('\\') => text.push('\\'),
                    Some('\'') => text.push('\''),
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some('r') => text.push('\r'),
                    Some(c) => return Err(self.error(format!("unknown escape `\\{}`", c))),
                    None => return Err(self.error("unterminated string".into())),
                },
                Some(c) => text.push(c),
                None => return Err(self.error("unterminated string".into())),
            }
        }
    }

    fn number(&mut self) -> Result<Value, RecordError> {
        let mut text = String::new();
        if self.eat('-') {
            if matches!(self.peek(), Some(c) if c.is_alphabetic()) {
                let word = self.ident()?;
                if word == "inf" {
                    return Ok(Value::Float(f64::NEG_INFINITY));
                }
                return Err(self.error(format!("unexpected identifier `-{}`", word)));
            }
            text.push('-');
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    text.push(c);
                    self.pos += 1;
                }
                '.' => {
                    is_float = true;
                    text.push(c);
                    self.pos += 1;
                }
                'e' | 'E' => {
                    is_float = true;
                    text.push(c);
                    self.pos += 1;
                    if let Some(sign @ ('+' | '-')) = self.peek() {
                        text.push(sign);
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
        if is_float {
            text.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.error(format!("invalid float literal `{}`", text)))
        } else {
            text.parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.error(format!("invalid integer literal `{}`", text)))
        }
    }

    fn seq(&mut self, close: char) -> Result<Vec<Value>, RecordError> {
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.eat(close) {
                return Ok(items);
            }
            items.push(self.value()?);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.skip_ws();
            self.expect(close)?;
            return Ok(items);
        }
    }

    fn map(&mut self) -> Result<Value, RecordError> {
        let mut entries = IndexMap::new();
        loop {
            self.skip_ws();
            if self.eat('}') {
                return Ok(Value::Map(entries));
            }
            let key = self.string_literal()?;
            self.skip_ws();
            self.expect(':')?;
            let value = self.value()?;
            entries.insert(key, value);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.skip_ws();
            self.expect('}')?;
            return Ok(Value::Map(entries));
        }
    }
}

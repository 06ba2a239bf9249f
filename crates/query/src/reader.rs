//! Tokenizer and reader for query text.
//!
//! The reader turns UTF-8 text into exactly one `Expression`. Tokens are
//! parentheses, a quote marker, double-quoted strings with backslash
//! escaping, and maximal runs of other non-delimiter characters. `;` starts
//! a comment running to end of line; commas count as whitespace.

use alloc::string::String;
use alloc::vec::Vec;
use lispel_core::{Error, Expression, Result};

/// Reads one expression from `input`.
///
/// Empty input, an unterminated list, and an unmatched `)` are syntax
/// errors. Tokens after the first complete expression are ignored.
pub fn read(input: &str) -> Result<Expression> {
    let tokens = tokenize(input);
    let mut cursor = Cursor {
        tokens: &tokens,
        pos: 0,
    };
    read_form(&mut cursor)
}

/// Splits `input` into tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() || c == ',' {
            i += 1;
            continue;
        }
        if c == ';' {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }
        if c == '(' || c == ')' || c == '\'' {
            tokens.push(String::from(c));
            i += 1;
            continue;
        }
        if c == '"' {
            let mut token = String::from('"');
            i += 1;
            while i < chars.len() {
                let c = chars[i];
                token.push(c);
                i += 1;
                if c == '\\' && i < chars.len() {
                    token.push(chars[i]);
                    i += 1;
                } else if c == '"' {
                    break;
                }
            }
            tokens.push(token);
            continue;
        }
        let mut token = String::new();
        while i < chars.len() && !is_delimiter(chars[i]) {
            token.push(chars[i]);
            i += 1;
        }
        tokens.push(token);
    }
    tokens
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '(' | ')' | '\'' | '"')
}

/// Classifies an atom token.
fn atom(token: &str) -> Expression {
    match token {
        "#t" => return Expression::Bool(true),
        "#f" => return Expression::Bool(false),
        "nil" => return Expression::Nil,
        _ => {}
    }
    if token.starts_with('"') {
        let inner = token.trim_matches('"');
        return Expression::Str(inner.replace("\\\"", "\""));
    }
    if let Ok(n) = token.parse::<f64>() {
        return Expression::Number(n);
    }
    Expression::Symbol(token.into())
}

struct Cursor<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token.as_str())
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }
}

fn read_form(cursor: &mut Cursor<'_>) -> Result<Expression> {
    let token = cursor
        .next()
        .ok_or_else(|| Error::syntax("unexpected end of input"))?;
    match token {
        "(" => {
            let mut items = Vec::new();
            loop {
                match cursor.peek() {
                    None => {
                        return Err(Error::syntax(
                            "unexpected end of input; missing `)`?",
                        ))
                    }
                    Some(")") => {
                        cursor.next();
                        return Ok(Expression::List(items));
                    }
                    Some(_) => items.push(read_form(cursor)?),
                }
            }
        }
        ")" => Err(Error::syntax("unexpected `)`")),
        _ => Ok(atom(token)),
    }
}

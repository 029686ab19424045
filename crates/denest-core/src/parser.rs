//! Parser — token stream into a [`Value`] tree by recursive descent.
//!
//! The grammar is dispatched one token at a time: `{` opens an object,
//! `[` opens an array, scalars map directly to their `Value` variants.
//! Recursion depth equals input nesting depth; the grammar itself imposes
//! no limit (see the crate docs for the resource implications).
//!
//! Errors are all-or-nothing: the first offense aborts the parse with a
//! positioned [`ParseError`], and no partial tree is returned.

use crate::error::{ParseError, Result};
use crate::lexer::{Token, TokenKind};
use crate::value::Value;

/// One-token-lookahead cursor over the lexer's output.
///
/// Reading past the end never fails: the lexer guarantees a terminal `Eof`
/// token, and once the real tokens run out the cursor keeps handing that
/// sentinel back, so the parser never special-cases exhaustion.
struct TokenStream {
    iter: std::vec::IntoIter<Token>,
    peeked: Option<Token>,
    eof: Token,
}

impl TokenStream {
    fn new(tokens: Vec<Token>) -> Self {
        let eof_offset = tokens.last().map_or(0, |t| t.offset);
        Self {
            iter: tokens.into_iter(),
            peeked: None,
            eof: Token {
                kind: TokenKind::Eof,
                offset: eof_offset,
            },
        }
    }

    /// Consume and return the next token, or `Eof` once exhausted.
    fn next(&mut self) -> Token {
        self.peeked
            .take()
            .or_else(|| self.iter.next())
            .unwrap_or_else(|| self.eof.clone())
    }

    /// Look at the next token without consuming it.
    fn peek(&mut self) -> &Token {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.as_ref().unwrap_or(&self.eof)
    }
}

/// Parse a token sequence into a single JSON value.
///
/// Exactly one value must span the whole input: anything left over after
/// it (other than `Eof`) fails with [`ParseError::TrailingTokens`] at the
/// offset where the extra material begins.
pub fn parse(tokens: Vec<Token>) -> Result<Value> {
    let mut stream = TokenStream::new(tokens);
    let value = parse_value(&mut stream)?;
    let trailing = stream.peek();
    if !matches!(trailing.kind, TokenKind::Eof) {
        return Err(ParseError::TrailingTokens {
            offset: trailing.offset,
            found: trailing.kind.describe(),
        });
    }
    Ok(value)
}

/// Consume one token and dispatch on it.
fn parse_value(stream: &mut TokenStream) -> Result<Value> {
    let token = stream.next();
    match token.kind {
        TokenKind::ObjectStart => parse_object(stream),
        TokenKind::ArrayStart => parse_array(stream),
        TokenKind::String(s) => Ok(Value::String(s)),
        TokenKind::Number(n) => Ok(Value::Number(n)),
        TokenKind::True => Ok(Value::Bool(true)),
        TokenKind::False => Ok(Value::Bool(false)),
        TokenKind::Null => Ok(Value::Null),
        other => Err(ParseError::UnexpectedToken {
            offset: token.offset,
            found: other.describe(),
        }),
    }
}

/// Parse object members after the `{` has been consumed.
///
/// `key : value` entries separated by commas, closed by `}`. Empty objects
/// are fine; a comma directly before `}` is not (it reads as a missing
/// key, matching the rest of the grammar's no-trailing-comma stance).
fn parse_object(stream: &mut TokenStream) -> Result<Value> {
    let mut members: Vec<(String, Value)> = Vec::new();
    let mut first = true;
    loop {
        if matches!(stream.peek().kind, TokenKind::ObjectEnd) {
            stream.next();
            return Ok(Value::Object(members));
        }
        if !first {
            let sep = stream.peek();
            if !matches!(sep.kind, TokenKind::Comma) {
                return Err(ParseError::ExpectedCommaOrBrace { offset: sep.offset });
            }
            stream.next();
        }
        let token = stream.next();
        let key = match token.kind {
            TokenKind::String(s) => s,
            _ => return Err(ParseError::ExpectedKey {
                offset: token.offset,
            }),
        };
        let colon = stream.next();
        if !matches!(colon.kind, TokenKind::Colon) {
            return Err(ParseError::ExpectedColon {
                offset: colon.offset,
            });
        }
        let value = parse_value(stream)?;
        insert_member(&mut members, key, value);
        first = false;
    }
}

/// Parse array elements after the `[` has been consumed.
fn parse_array(stream: &mut TokenStream) -> Result<Value> {
    let mut elements = Vec::new();
    let mut first = true;
    loop {
        if matches!(stream.peek().kind, TokenKind::ArrayEnd) {
            stream.next();
            return Ok(Value::Array(elements));
        }
        if !first {
            let sep = stream.peek();
            if !matches!(sep.kind, TokenKind::Comma) {
                return Err(ParseError::ExpectedCommaOrBracket { offset: sep.offset });
            }
            stream.next();
        }
        elements.push(parse_value(stream)?);
        first = false;
    }
}

/// Insert a member with last-write-wins semantics: a duplicate key keeps
/// its original position and has its value overwritten.
fn insert_member(members: &mut Vec<(String, Value)>, key: String, value: Value) {
    if let Some(member) = members.iter_mut().find(|(k, _)| *k == key) {
        member.1 = value;
    } else {
        members.push((key, value));
    }
}

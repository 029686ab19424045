//! Lexer — raw JSON text into an ordered token sequence.
//!
//! The lexer is a single forward pass over the input bytes. Whitespace
//! outside string literals is skipped; everything else dispatches on the
//! first significant character:
//!
//! - `{ } [ ] : ,` become single-character structural tokens
//! - `"` enters the string sub-lexer (escape and `\uXXXX` decoding)
//! - a digit or `-` enters the number sub-lexer (greedy scan, then `f64`)
//! - `t`/`f`/`n` must spell out `true`/`false`/`null` exactly
//! - anything else is an `UnexpectedCharacter` error
//!
//! A terminal [`TokenKind::Eof`] token is always appended, even for empty
//! input, so the parser's cursor can treat exhaustion as just another
//! token.
//!
//! # Unicode escapes
//!
//! Each `\uXXXX` escape decodes independently to one code point; surrogate
//! pairs are **not** joined, and a code point that is not a Unicode scalar
//! value (a lone surrogate) decodes to U+FFFD. Text that requires paired
//! escapes will therefore not survive a decode. This matches the engine's
//! printer, which never emits paired escapes either.

use crate::error::{ParseError, Result};

/// Classification of a single lexical unit, with its decoded payload for
/// strings and numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string literal, fully unescaped.
    String(String),
    /// A number literal, parsed as a double.
    Number(f64),
    /// The literal `true`.
    True,
    /// The literal `false`.
    False,
    /// The literal `null`.
    Null,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short description used in parser diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::ObjectStart => "'{'",
            TokenKind::ObjectEnd => "'}'",
            TokenKind::ArrayStart => "'['",
            TokenKind::ArrayEnd => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::String(_) => "string",
            TokenKind::Number(_) => "number",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token plus the byte offset of its first character in the input.
/// The `Eof` token's offset is the input length.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Tokenize a JSON document into a flat token sequence.
///
/// Returns the tokens (terminated by `Eof`) or the first lexical error
/// with its byte offset.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).run()
}

/// Byte cursor over the input. `pos` always sits on a UTF-8 character
/// boundary: the lexer only advances past ASCII bytes it has matched, or
/// past whole characters inside string literals.
struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let kind = match self.bytes[start] {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.pos += 1;
                    continue;
                }
                b'{' => self.structural(TokenKind::ObjectStart),
                b'}' => self.structural(TokenKind::ObjectEnd),
                b'[' => self.structural(TokenKind::ArrayStart),
                b']' => self.structural(TokenKind::ArrayEnd),
                b':' => self.structural(TokenKind::Colon),
                b',' => self.structural(TokenKind::Comma),
                b'"' => TokenKind::String(self.scan_string()?),
                b'0'..=b'9' | b'-' => TokenKind::Number(self.scan_number()?),
                b't' => self.scan_literal("true", TokenKind::True)?,
                b'f' => self.scan_literal("false", TokenKind::False)?,
                b'n' => self.scan_literal("null", TokenKind::Null)?,
                _ => {
                    // Report the whole character, not its first UTF-8 byte.
                    let found = self.src[start..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(ParseError::UnexpectedCharacter {
                        offset: start,
                        found,
                    });
                }
            };
            tokens.push(Token {
                kind,
                offset: start,
            });
        }
        tokens.push(Token {
            kind: TokenKind::Eof,
            offset: self.bytes.len(),
        });
        Ok(tokens)
    }

    fn structural(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    /// Scan a string literal. `pos` sits on the opening quote on entry and
    /// just past the closing quote on success.
    ///
    /// Unescaped stretches are copied as whole `&str` slices; escape
    /// sequences are decoded to their real characters, so the result
    /// carries no residual backslashes.
    fn scan_string(&mut self) -> Result<String> {
        let open = self.pos;
        self.pos += 1;
        let mut out = String::new();
        let mut run_start = self.pos;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'"' => {
                    out.push_str(&self.src[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.src[run_start..self.pos]);
                    self.pos += 1;
                    self.scan_escape(open, &mut out)?;
                    run_start = self.pos;
                }
                _ => self.pos += 1,
            }
        }
        Err(ParseError::UnterminatedString { offset: open })
    }

    /// Decode one escape sequence. `pos` sits on the character after the
    /// backslash on entry.
    fn scan_escape(&mut self, open: usize, out: &mut String) -> Result<()> {
        if self.pos >= self.bytes.len() {
            return Err(ParseError::UnterminatedString { offset: open });
        }
        let esc = self.pos;
        match self.bytes[esc] {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{0008}'),
            b'f' => out.push('\u{000C}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                self.pos += 1;
                let cp = self.scan_hex4(esc)?;
                // Lone surrogates are not scalar values; decode to U+FFFD
                // rather than fail (see module docs).
                out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
                return Ok(());
            }
            _ => return Err(ParseError::InvalidEscape { offset: esc }),
        }
        self.pos += 1;
        Ok(())
    }

    /// Read exactly four hex digits after `\u`. `esc` is the offset of the
    /// `u`, used for error reporting.
    fn scan_hex4(&mut self, esc: usize) -> Result<u32> {
        if self.pos + 4 > self.bytes.len() {
            return Err(ParseError::InvalidUnicodeEscape { offset: esc });
        }
        let mut cp = 0u32;
        for i in 0..4 {
            let digit = (self.bytes[self.pos + i] as char)
                .to_digit(16)
                .ok_or(ParseError::InvalidUnicodeEscape { offset: esc })?;
            cp = cp * 16 + digit;
        }
        self.pos += 4;
        Ok(cp)
    }

    /// Scan a number: greedily take the maximal run of number-ish
    /// characters, then let the `f64` parser judge it. The greedy run can
    /// admit garbage like `1.2.3`; the second stage rejects it. This is a
    /// deliberate two-stage check, not a grammar-level number matcher.
    fn scan_number(&mut self) -> Result<f64> {
        let start = self.pos;
        while self.pos < self.bytes.len()
            && matches!(
                self.bytes[self.pos],
                b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-'
            )
        {
            self.pos += 1;
        }
        self.src[start..self.pos]
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber { offset: start })
    }

    /// Match an exact keyword (`true`, `false`, `null`).
    fn scan_literal(&mut self, word: &'static str, kind: TokenKind) -> Result<TokenKind> {
        if self.bytes[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            Ok(kind)
        } else {
            Err(ParseError::InvalidLiteral {
                offset: self.pos,
                expected: word,
            })
        }
    }
}

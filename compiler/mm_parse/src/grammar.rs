//! Recursive descent over pattern text.
//!
//! One method per grammar production. Every method starts with the cursor on
//! the first byte of its production and leaves it on the first byte after.

use mm_ir::{ensure_sufficient_stack, Literal, Name, PatternKind, PatternNode, Span};
use tracing::trace;

use crate::cursor::{Cursor, SourceBuffer};
use crate::{ParseError, ParseErrorKind};

/// Binding names: ASCII letters.
#[inline]
fn is_binding_byte(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Member names: ASCII letters, digits and `_`.
#[inline]
fn is_member_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

/// Parse one complete pattern, rejecting anything but whitespace after it.
pub(crate) fn parse_source(source: &str) -> Result<PatternNode, ParseError> {
    trace!(pattern = source, "parse");
    if source.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyPattern, Span::point(0)));
    }

    let buffer = SourceBuffer::new(source);
    let mut parser = Parser {
        cursor: buffer.cursor(),
    };
    let node = parser.parse_expr()?;

    parser.cursor.eat_whitespace();
    if let Some(found) = parser.cursor.current_char() {
        return Err(parser.error_here(ParseErrorKind::TrailingInput { found }));
    }
    Ok(node)
}

impl Parser<'_> {
    fn parse_expr(&mut self) -> Result<PatternNode, ParseError> {
        ensure_sufficient_stack(|| match self.cursor.current() {
            b'a' => self.parse_list(),
            b'o' => self.parse_map(),
            b'n' => self.parse_leaf(b'n', PatternKind::Numeric),
            b's' => self.parse_leaf(b's', PatternKind::Textual),
            b'b' => self.parse_leaf(b'b', PatternKind::Boolean),
            b'f' => self.parse_leaf(b'f', PatternKind::Callable),
            b'_' => self.parse_leaf(b'_', PatternKind::Any),
            quote @ (b'"' | b'\'') => self.parse_quoted(quote),
            _ => {
                let found = self.cursor.current_char();
                Err(self.error_here(ParseErrorKind::UnexpectedToken { found }))
            }
        })
    }

    /// `a`, `a@x`, `a(expr, ...)`, `a(expr, ... | @rest)@x`
    fn parse_list(&mut self) -> Result<PatternNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // 'a'

        match self.cursor.current() {
            b'@' => {
                let binding = self.parse_binding()?;
                return Ok(self.finish(PatternKind::List(Vec::new()), start, Some(binding)));
            }
            b'(' => self.cursor.advance(),
            // Bare `a`: any list.
            _ => return Ok(self.finish(PatternKind::List(Vec::new()), start, None)),
        }

        let mut elements = Vec::new();
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Err(self.unclosed(b')'));
            }
            elements.push(self.parse_expr()?);
            self.cursor.eat_whitespace();
            if self.cursor.current() == b',' {
                self.cursor.advance();
            } else {
                break;
            }
        }

        if self.cursor.current() == b'|' {
            let rest_start = self.cursor.pos();
            self.cursor.advance(); // '|'
            self.cursor.eat_whitespace();
            let binding = self.parse_optional_binding()?;
            elements.push(self.finish(PatternKind::Rest, rest_start, binding));
            self.cursor.eat_whitespace();
        }

        self.expect_close(b')')?;
        let binding = self.parse_optional_binding()?;
        Ok(self.finish(PatternKind::List(elements), start, binding))
    }

    /// `o`, `o@x`, `o(.member, .member:expr@x, ...)@x`
    fn parse_map(&mut self) -> Result<PatternNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // 'o'

        match self.cursor.current() {
            b'@' => {
                let binding = self.parse_binding()?;
                return Ok(self.finish(PatternKind::Map(Vec::new()), start, Some(binding)));
            }
            b'(' => self.cursor.advance(),
            // Bare `o`: any map.
            _ => return Ok(self.finish(PatternKind::Map(Vec::new()), start, None)),
        }

        let mut entries = Vec::new();
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Err(self.unclosed(b')'));
            }
            if self.cursor.current() != b'.' {
                let found = self.cursor.current_char();
                return Err(self.error_here(ParseErrorKind::ExpectedMember { found }));
            }
            entries.push(self.parse_entry()?);
            self.cursor.eat_whitespace();
            if self.cursor.current() == b',' {
                self.cursor.advance();
            } else {
                break;
            }
        }

        self.expect_close(b')')?;
        let binding = self.parse_optional_binding()?;
        Ok(self.finish(PatternKind::Map(entries), start, binding))
    }

    /// `.member`, `.member:expr`, optionally followed by `@x`.
    fn parse_entry(&mut self) -> Result<PatternNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // '.'

        let member = self.cursor.eat_while(is_member_byte);
        if member.is_empty() {
            return Err(self.error_here(ParseErrorKind::MissingMemberName));
        }
        let member = Name::from(member);

        let pattern = if self.cursor.current() == b':' {
            self.cursor.advance();
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };

        let binding = self.parse_optional_binding()?;
        Ok(self.finish(PatternKind::MapEntry { member, pattern }, start, binding))
    }

    /// One-letter descriptors with an optional literal: `n`, `n(4.5)`, `s(foo)`.
    fn parse_leaf(&mut self, descriptor: u8, kind: PatternKind) -> Result<PatternNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // descriptor

        let kind = if self.cursor.current() == b'(' {
            match descriptor {
                b'n' | b's' | b'b' => PatternKind::Equals(self.parse_literal(descriptor)?),
                _ => {
                    return Err(self.error_here(ParseErrorKind::LiteralNotAllowed {
                        descriptor: char::from(descriptor),
                    }))
                }
            }
        } else {
            kind
        };

        let binding = self.parse_optional_binding()?;
        Ok(self.finish(kind, start, binding))
    }

    /// `(body)` after `n`, `s` or `b`. The body is everything up to the next `)`.
    fn parse_literal(&mut self, descriptor: u8) -> Result<Literal, ParseError> {
        self.cursor.advance(); // '('
        let body_start = self.cursor.pos();

        let Some(body) = self.cursor.eat_until(b')') else {
            return Err(self.unclosed(b')'));
        };
        let body_span = Span::new(body_start, self.cursor.pos());
        self.cursor.advance(); // ')'

        if body.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyLiteral, body_span));
        }

        match descriptor {
            b'n' => body.parse::<f64>().map(Literal::number).map_err(|_| {
                ParseError::new(
                    ParseErrorKind::InvalidNumber {
                        text: body.to_owned(),
                    },
                    body_span,
                )
            }),
            b'b' => match body {
                "true" => Ok(Literal::Bool(true)),
                "false" => Ok(Literal::Bool(false)),
                _ => Err(ParseError::new(
                    ParseErrorKind::InvalidBoolean {
                        text: body.to_owned(),
                    },
                    body_span,
                )),
            },
            _ => Ok(Literal::text(body)),
        }
    }

    /// `"text"` or `'text'`: shorthand for `s(text)`.
    fn parse_quoted(&mut self, quote: u8) -> Result<PatternNode, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(); // opening quote

        let Some(body) = self.cursor.eat_until(quote) else {
            return Err(self.unclosed(quote));
        };
        let literal = Literal::text(body);
        self.cursor.advance(); // closing quote

        let binding = self.parse_optional_binding()?;
        Ok(self.finish(PatternKind::Equals(literal), start, binding))
    }

    /// `@name` with the cursor on `@`.
    fn parse_binding(&mut self) -> Result<Name, ParseError> {
        self.cursor.advance(); // '@'
        let name = self.cursor.eat_while(is_binding_byte);
        if name.is_empty() {
            return Err(self.error_here(ParseErrorKind::MissingBindingName));
        }
        Ok(Name::from(name))
    }

    /// A binding directly at the cursor, with no whitespace before `@`.
    fn parse_optional_binding(&mut self) -> Result<Option<Name>, ParseError> {
        if self.cursor.current() == b'@' {
            self.parse_binding().map(Some)
        } else {
            Ok(None)
        }
    }

    fn expect_close(&mut self, delimiter: u8) -> Result<(), ParseError> {
        if self.cursor.current() == delimiter {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.unclosed(delimiter))
        }
    }

    #[cold]
    fn unclosed(&self, delimiter: u8) -> ParseError {
        let found = self.cursor.current_char();
        self.error_here(ParseErrorKind::Unclosed {
            expected: char::from(delimiter),
            found,
        })
    }

    fn finish(&self, kind: PatternKind, start: u32, binding: Option<Name>) -> PatternNode {
        PatternNode {
            kind,
            binding,
            span: Span::new(start, self.cursor.pos()),
        }
    }

    #[cold]
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, Span::point(self.cursor.pos()))
    }
}

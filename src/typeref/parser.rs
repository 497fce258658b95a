//! Recursive-descent parser for CLR type strings.
//!
//! Grammar (informal):
//!
//! ```text
//! type     := segment (('.' | '+') segment)* array* modifier?
//! segment  := ident ('<' type (',' type)* '>')?
//! array    := '[' ','* ']'
//! modifier := '*' | '&'
//! ```

use super::{TypeDesc, TypeModifier, TypeSegment};

/// Parse a type string. Returns `None` when the string is not well formed.
pub fn parse_type(input: &str) -> Option<TypeDesc> {
    let mut parser = Parser {
        chars: input.trim().chars().collect(),
        pos: 0,
    };
    let desc = parser.parse_type()?;
    parser.skip_ws();
    parser.at_end().then_some(desc)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn parse_type(&mut self) -> Option<TypeDesc> {
        self.skip_ws();
        let mut segments = vec![self.parse_segment(false)?];
        loop {
            let nested = match self.peek() {
                Some('.') => false,
                Some('+') => true,
                _ => break,
            };
            self.pos += 1;
            segments.push(self.parse_segment(nested)?);
        }

        let mut array_ranks = Vec::new();
        while self.eat('[') {
            let mut rank = 1;
            loop {
                self.skip_ws();
                match self.bump()? {
                    ',' => rank += 1,
                    ']' => break,
                    _ => return None,
                }
            }
            array_ranks.push(rank);
        }

        let modifier = if self.eat('*') {
            Some(TypeModifier::Pointer)
        } else if self.eat('&') {
            Some(TypeModifier::Ref)
        } else {
            None
        };

        Some(TypeDesc {
            segments,
            array_ranks,
            modifier,
        })
    }

    fn parse_segment(&mut self, nested: bool) -> Option<TypeSegment> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '`')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let name: String = self.chars[start..self.pos].iter().collect();

        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.parse_type()?);
                self.skip_ws();
                match self.bump()? {
                    ',' => continue,
                    '>' => break,
                    _ => return None,
                }
            }
        }

        Some(TypeSegment { name, args, nested })
    }
}

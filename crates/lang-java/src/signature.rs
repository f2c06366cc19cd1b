//! Parser for human-written Java type signatures, used to declare seed types.
//!
//! Grammar:
//!
//! ```text
//! type      := name type_args? dims
//! type_args := '<' type (',' type)* '>'
//! dims      := ('[' ']')*
//! ```
//!
//! `void` and the eight primitive names map to their own kinds; any other name is a
//! class reference. Wildcards are rejected: a seed always names a concrete type.

use crate::naming::{is_identifier_part, is_primitive, is_valid_binary_name};
use reflscope_api::TypeRef;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("empty type signature")]
    Empty,
    #[error("unexpected '{found}' at offset {offset} in `{signature}`")]
    Unexpected {
        signature: String,
        offset: usize,
        found: char,
    },
    #[error("unexpected end of `{0}`")]
    UnexpectedEnd(String),
    #[error("invalid type name `{name}` in `{signature}`")]
    InvalidName { signature: String, name: String },
    #[error("wildcard type arguments are not supported in `{0}`")]
    Wildcard(String),
    #[error("`{name}` cannot be used here in `{signature}`")]
    Misplaced { signature: String, name: String },
}

pub fn parse_signature(signature: &str) -> Result<TypeRef, SignatureError> {
    if signature.trim().is_empty() {
        return Err(SignatureError::Empty);
    }

    let mut parser = SignatureParser::new(signature);
    let ty = parser.parse_type(Position::TopLevel)?;
    parser.skip_whitespace();
    match parser.peek() {
        None => Ok(ty),
        Some(found) => Err(parser.unexpected(found)),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    TopLevel,
    Argument,
}

struct SignatureParser<'a> {
    signature: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
}

impl<'a> SignatureParser<'a> {
    fn new(signature: &'a str) -> Self {
        Self {
            signature,
            chars: signature.char_indices().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn offset(&self) -> usize {
        self.chars
            .get(self.pos)
            .map(|(offset, _)| *offset)
            .unwrap_or(self.signature.len())
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn unexpected(&self, found: char) -> SignatureError {
        SignatureError::Unexpected {
            signature: self.signature.to_string(),
            offset: self.offset(),
            found,
        }
    }

    fn end(&self) -> SignatureError {
        SignatureError::UnexpectedEnd(self.signature.to_string())
    }

    fn misplaced(&self, name: &str) -> SignatureError {
        SignatureError::Misplaced {
            signature: self.signature.to_string(),
            name: name.to_string(),
        }
    }

    fn parse_type(&mut self, position: Position) -> Result<TypeRef, SignatureError> {
        self.skip_whitespace();
        match self.peek() {
            None => return Err(self.end()),
            Some('?') => return Err(SignatureError::Wildcard(self.signature.to_string())),
            Some(_) => {}
        }

        let name = self.parse_name()?;
        self.skip_whitespace();

        let mut ty = if self.peek() == Some('<') {
            self.bump();
            if name == "void" || is_primitive(&name) {
                return Err(self.misplaced(&name));
            }
            TypeRef::parameterized(name.as_str(), self.parse_arguments()?)
        } else if name == "void" {
            TypeRef::Void
        } else if is_primitive(&name) {
            TypeRef::primitive(name.as_str())
        } else {
            TypeRef::class(name.as_str())
        };

        let dims = self.parse_dims()?;
        let bare_primitive = matches!(ty, TypeRef::Primitive(_)) && dims == 0;
        if (ty.is_void() && (dims > 0 || position == Position::Argument))
            || (bare_primitive && position == Position::Argument)
        {
            return Err(self.misplaced(&name));
        }

        for _ in 0..dims {
            ty = TypeRef::array(ty);
        }
        Ok(ty)
    }

    fn parse_name(&mut self) -> Result<String, SignatureError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| is_identifier_part(c) || c == '.')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(match self.peek() {
                Some(found) => self.unexpected(found),
                None => self.end(),
            });
        }

        let name: String = self.chars[start..self.pos].iter().map(|(_, c)| c).collect();
        if !is_valid_binary_name(&name) {
            return Err(SignatureError::InvalidName {
                signature: self.signature.to_string(),
                name,
            });
        }
        Ok(name)
    }

    fn parse_arguments(&mut self) -> Result<Vec<TypeRef>, SignatureError> {
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.parse_type(Position::Argument)?);
            self.skip_whitespace();
            match self.bump() {
                Some(',') => continue,
                Some('>') => return Ok(arguments),
                Some(found) => {
                    self.pos -= 1;
                    return Err(self.unexpected(found));
                }
                None => return Err(self.end()),
            }
        }
    }

    fn parse_dims(&mut self) -> Result<usize, SignatureError> {
        let mut dims = 0;
        loop {
            self.skip_whitespace();
            if self.peek() != Some('[') {
                return Ok(dims);
            }
            self.bump();
            self.skip_whitespace();
            match self.bump() {
                Some(']') => dims += 1,
                Some(found) => {
                    self.pos -= 1;
                    return Err(self.unexpected(found));
                }
                None => return Err(self.end()),
            }
        }
    }
}

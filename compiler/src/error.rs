use std::fmt::{self, Display};

use crate::{
    pos::BytePos,
    token::{Token, TokenKind},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexErrorKind {
    InvalidCharacter,
}

#[derive(Debug, PartialEq, Clone)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub pos: BytePos,
    pub line: usize,
    pub ch: char,
}

impl LexError {
    pub fn invalid_character(ch: char, pos: BytePos, line: usize) -> LexError {
        LexError {
            kind: LexErrorKind::InvalidCharacter,
            pos,
            line,
            ch,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::InvalidCharacter => write!(
                f,
                "Unexpected character {:?} at Ln {}, byte {}",
                self.ch, self.line, self.pos
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// What the parser was looking for when it gave up.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Expected {
    Kind(TokenKind),
    PrimaryExpression,
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::PrimaryExpression => f.write_str("an identifier, number, 'null' or '('"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ParseError {
    UnexpectedToken {
        expected: Expected,
        found: Token,
        message: String,
    },
}

impl ParseError {
    pub fn unexpected(expected: Expected, found: &Token, message: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: found.clone(),
            message: message.to_owned(),
        }
    }

    pub fn expected(&self) -> Expected {
        match self {
            ParseError::UnexpectedToken { expected, .. } => *expected,
        }
    }

    pub fn found(&self) -> &Token {
        match self {
            ParseError::UnexpectedToken { found, .. } => found,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken {
                expected,
                found,
                message,
            } => write!(
                f,
                "{}; expected {} but found {} at {}",
                message, expected, found, found.span
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, PartialEq)]
pub enum CompilerError {
    Lex(LexError),
    Parse(ParseError),
}

impl From<LexError> for CompilerError {
    fn from(value: LexError) -> Self {
        CompilerError::Lex(value)
    }
}

impl From<ParseError> for CompilerError {
    fn from(value: ParseError) -> Self {
        CompilerError::Parse(value)
    }
}

impl Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompilerError::Lex(e) => write!(f, "Lexer error: {}", e),
            CompilerError::Parse(e) => write!(f, "Parser error: {}", e),
        }
    }
}

impl std::error::Error for CompilerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompilerError::Lex(e) => Some(e),
            CompilerError::Parse(e) => Some(e),
        }
    }
}

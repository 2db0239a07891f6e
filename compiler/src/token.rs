use std::collections::HashMap;
use std::fmt::Display;

use lazy_static::lazy_static;

use crate::pos::Span;

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("let", TokenKind::Let);
        m.insert("null", TokenKind::Null);
        m
    };
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Let,
    Equals,
    OpenParen,
    CloseParen,
    BinaryOperator,
    Null,
    EndOfInput,
}

impl TokenKind {
    /// Looks up a full identifier run in the reserved word table.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS.get(word).copied()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Let => "'let'",
            TokenKind::Equals => "'='",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::BinaryOperator => "binary operator",
            TokenKind::Null => "'null'",
            TokenKind::EndOfInput => "end of input",
        })
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Token {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    pub const fn end_of_input(span: Span) -> Token {
        Token {
            kind: TokenKind::EndOfInput,
            text: String::new(),
            span,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&Token> for Operator {
    type Error = String;

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if token.kind != TokenKind::BinaryOperator {
            return Err(format!("Expected a binary operator but got {}", token));
        }

        Ok(match token.text.as_str() {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "/" => Operator::Div,
            "%" => Operator::Mod,
            v => return Err(format!("Not a valid operator: {}", v)),
        })
    }
}

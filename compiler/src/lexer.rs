use crate::{
    error::LexError,
    pos::{BytePos, Span},
    scanner::Scanner,
    token::{Token, TokenKind},
};

pub struct Lexer<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(buf: &'a str) -> Lexer<'a> {
        Lexer {
            scanner: Scanner::new(buf),
        }
    }

    /// Scans the whole buffer. The returned tokens always end with exactly
    /// one `EndOfInput`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens: Vec<Token> = Vec::new();

        loop {
            let start = self.scanner.pos();
            let line = self.scanner.line();

            let c = match self.scanner.next() {
                Some(c) => c,
                None => break,
            };

            if let Some((kind, text)) = self.match_token(c, start, line)? {
                tokens.push(Token::new(
                    kind,
                    text,
                    Span::new(start, self.scanner.pos(), line),
                ));
            }
        }

        let end = self.scanner.pos();
        tokens.push(Token::end_of_input(Span::new(end, end, self.scanner.line())));

        Ok(tokens)
    }

    fn match_token(
        &mut self,
        c: char,
        start: BytePos,
        line: usize,
    ) -> Result<Option<(TokenKind, String)>, LexError> {
        Ok(match c {
            ' ' | '\t' | '\r' | '\n' => None,
            '+' | '-' | '*' | '/' | '%' => Some((TokenKind::BinaryOperator, c.to_string())),
            '=' => Some((TokenKind::Equals, c.to_string())),
            '(' => Some((TokenKind::OpenParen, c.to_string())),
            ')' => Some((TokenKind::CloseParen, c.to_string())),
            c if c.is_ascii_digit() => Some(self.tokenize_number(c)),
            c if c.is_ascii_alphabetic() => Some(self.tokenize_ident(c)),
            c => return Err(LexError::invalid_character(c, start, line)),
        })
    }

    fn tokenize_number(&mut self, start: char) -> (TokenKind, String) {
        let mut number = String::new();
        number.push(start);
        number.push_str(&self.scanner.consume_while(|c| c.is_ascii_digit()));

        (TokenKind::Number, number)
    }

    fn tokenize_ident(&mut self, start: char) -> (TokenKind, String) {
        let mut word = String::new();
        word.push(start);
        word.push_str(&self.scanner.consume_while(|c| c.is_ascii_alphabetic()));

        match TokenKind::keyword(&word) {
            Some(kind) => (kind, word),
            None => (TokenKind::Identifier, word),
        }
    }
}

use crate::{
    ast::{Expr, Program, Stmt},
    error::{Expected, ParseError},
    pos::Span,
    token::{Operator, Token, TokenKind},
};

static EOF_TOKEN: Token = Token::end_of_input(Span::empty());

static ADDITIVE_OPERATORS: [&str; 2] = ["+", "-"];
static MULTIPLICATIVE_OPERATORS: [&str; 3] = ["*", "/", "%"];

/// Recursive descent over a token buffer produced by the lexer. The buffer is
/// never mutated; `cursor` indexes the next unread token.
pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Parser {
        Parser { tokens, cursor: 0 }
    }

    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut program = Program::default();

        while self.not_eof() {
            program.body.push(self.parse_stmt()?);
        }

        Ok(program)
    }

    fn not_eof(&self) -> bool {
        !self.at().is(TokenKind::EndOfInput)
    }

    fn at(&self) -> &Token {
        match self.tokens.get(self.cursor) {
            Some(t) => t,
            None => &EOF_TOKEN,
        }
    }

    fn eat(&mut self) -> &Token {
        match self.tokens.get(self.cursor) {
            Some(t) => {
                self.cursor += 1;

                t
            }
            None => &EOF_TOKEN,
        }
    }

    fn expect(&mut self, kind: TokenKind, msg: &str) -> Result<&Token, ParseError> {
        if self.at().is(kind) {
            Ok(self.eat())
        } else {
            Err(ParseError::unexpected(Expected::Kind(kind), self.at(), msg))
        }
    }

    /// Looks at the operator text of the current token without consuming it.
    fn at_operator(&self, ops: &[&str]) -> bool {
        let token = self.at();
        token.is(TokenKind::BinaryOperator) && ops.contains(&token.text.as_str())
    }

    fn eat_operator(&mut self) -> Result<Operator, ParseError> {
        let token = self.eat();

        Operator::try_from(token).map_err(|e| {
            ParseError::unexpected(Expected::Kind(TokenKind::BinaryOperator), token, &e)
        })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        Ok(Stmt::Expr(self.parse_expr()?))
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_additive_expr()
    }

    fn parse_additive_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative_expr()?;

        while self.at_operator(&ADDITIVE_OPERATORS) {
            let operator = self.eat_operator()?;
            let right = self.parse_multiplicative_expr()?;
            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_multiplicative_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary_expr()?;

        while self.at_operator(&MULTIPLICATIVE_OPERATORS) {
            let operator = self.eat_operator()?;
            let right = self.parse_primary_expr()?;
            left = Expr::binary(operator, left, right);
        }

        Ok(left)
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, ParseError> {
        let kind = self.at().kind;
        match kind {
            TokenKind::Identifier => Ok(Expr::identifier(&self.eat().text)),
            TokenKind::Number => {
                let token = self.eat();
                match token.text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(Expr::number(value)),
                    _ => Err(ParseError::unexpected(
                        Expected::PrimaryExpression,
                        token,
                        "Numeric literal is out of range",
                    )),
                }
            }
            TokenKind::OpenParen => {
                self.eat();
                let expr = self.parse_expr()?;
                self.expect(
                    TokenKind::CloseParen,
                    "Expected ')' after parenthesised expression",
                )?;

                Ok(expr)
            }
            TokenKind::Null => {
                self.eat();
                Ok(Expr::NullLiteral)
            }
            _ => Err(ParseError::unexpected(
                Expected::PrimaryExpression,
                self.at(),
                "Unexpected token found during parsing",
            )),
        }
    }
}

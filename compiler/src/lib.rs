use ast::Program;
use error::CompilerError;
use lexer::Lexer;
use parser::Parser;
use token::Token;

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pos;
mod scanner;
pub mod token;

/// Splits `buf` into tokens, terminated by a single `EndOfInput`.
pub fn tokenize(buf: &str) -> Result<Vec<Token>, CompilerError> {
    Ok(Lexer::new(buf).tokenize()?)
}

/// Lexes and parses `buf` into a fresh `Program`.
pub fn produce_ast(buf: &str) -> Result<Program, CompilerError> {
    Ok(Parser::new(Lexer::new(buf).tokenize()?).parse()?)
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Stmt},
        error::CompilerError,
        token::Operator,
    };

    use super::produce_ast;

    #[test]
    fn test_produce_ast_surfaces_lex_errors() {
        match produce_ast("1 + #").unwrap_err() {
            CompilerError::Lex(e) => assert_eq!(e.ch, '#'),
            e => panic!("expected lex error, got {:?}", e),
        }
    }

    #[test]
    fn test_produce_ast_is_independent_per_call() {
        assert!(produce_ast("(1 +").is_err());

        let program = produce_ast("2 * 3").expect("expected valid program");
        assert_eq!(program.body.len(), 1);
        assert_eq!(
            program.body[0],
            Stmt::Expr(Expr::binary(
                Operator::Mul,
                Expr::number(2.0),
                Expr::number(3.0)
            ))
        );
    }

    #[test]
    fn test_produce_ast_long_chain() {
        let source = vec!["1"; 200_000].join(" + ");

        let program = produce_ast(&source).expect("expected valid program");
        assert_eq!(program.body.len(), 1);
        drop(program);
    }
}

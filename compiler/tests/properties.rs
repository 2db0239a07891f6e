//! Property-based tests for the lexer and parser.

use compiler::ast::{Expr, Program, Stmt};
use compiler::error::CompilerError;
use compiler::token::{Operator, TokenKind};
use compiler::{produce_ast, tokenize};
use proptest::prelude::*;

fn is_accepted(c: char) -> bool {
    c.is_ascii_alphanumeric() || " \t\r\n+-*/%=()".contains(c)
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}".prop_filter("reserved word", |s| s != "let" && s != "null")
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Sub),
        Just(Operator::Mul),
        Just(Operator::Div),
        Just(Operator::Mod),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        identifier_strategy().prop_map(|s| Expr::identifier(&s)),
        any::<u32>().prop_map(|n| Expr::number(n as f64)),
        Just(Expr::NullLiteral),
    ];

    leaf.prop_recursive(6, 48, 2, |inner| {
        (operator_strategy(), inner.clone(), inner)
            .prop_map(|(op, left, right)| Expr::binary(op, left, right))
    })
}

proptest! {
    #[test]
    fn digit_runs_are_one_number(s in "[0-9]{1,40}") {
        let tokens = tokenize(&s).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].text, &s);
        prop_assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn letter_runs_are_one_identifier(s in identifier_strategy()) {
        let tokens = tokenize(&s).unwrap();

        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].text, &s);
    }

    #[test]
    fn unknown_characters_are_rejected(
        prefix in "[a-z0-9 +*()]{0,10}",
        c in any::<char>().prop_filter("accepted", |c| !is_accepted(*c)),
    ) {
        let source = format!("{}{}", prefix, c);

        match tokenize(&source) {
            Err(CompilerError::Lex(e)) => {
                prop_assert_eq!(e.ch, c);
                prop_assert_eq!(e.pos.0 as usize, prefix.len());
            }
            other => prop_assert!(false, "expected lex error, got {:?}", other),
        }
    }

    #[test]
    fn rendered_source_reparses(exprs in prop::collection::vec(expr_strategy(), 0..4)) {
        let program = Program { body: exprs.into_iter().map(Stmt::Expr).collect() };

        let reparsed = produce_ast(&program.to_string()).unwrap();
        prop_assert_eq!(reparsed, program);
    }

    #[test]
    fn token_texts_reparse(expr in expr_strategy()) {
        let source = Program { body: vec![Stmt::Expr(expr)] }.to_string();
        let first = produce_ast(&source).unwrap();

        let joined = tokenize(&source)
            .unwrap()
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(produce_ast(&joined).unwrap(), first);
    }
}

use std::fmt::{self, Display, Write};
use std::mem;

use crate::token::Operator;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NodeKind {
    Program,
    Identifier,
    NumericLiteral,
    NullLiteral,
    BinaryExpr,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Program => "Program",
            NodeKind::Identifier => "Identifier",
            NodeKind::NumericLiteral => "NumericLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::BinaryExpr => "BinaryExpr",
        })
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    Expr(Expr),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    NullLiteral,
    Binary(BinaryExpr),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub symbol: String,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct NumericLiteral {
    pub value: f64,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BinaryExpr {
    pub operator: Operator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl Program {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Indented one-node-per-line view of the whole tree.
    pub fn tree(&self) -> String {
        let mut out = String::new();
        out.push_str("Program\n");
        for stmt in &self.body {
            match stmt {
                Stmt::Expr(expr) => write_tree(&mut out, expr, 1),
            }
        }

        out
    }
}

fn write_tree(out: &mut String, expr: &Expr, depth: usize) {
    let line = match expr {
        Expr::Identifier(ident) => format!("Identifier {}", ident.symbol),
        Expr::NumericLiteral(num) => format!("NumericLiteral {}", num.value),
        Expr::NullLiteral => "NullLiteral".to_owned(),
        Expr::Binary(bin) => format!("BinaryExpr {}", bin.operator),
    };
    out.push_str(&"  ".repeat(depth));
    out.push_str(&line);
    out.push('\n');

    if let Expr::Binary(bin) = expr {
        write_tree(out, &bin.left, depth + 1);
        write_tree(out, &bin.right, depth + 1);
    }
}

/// Tears the tree down with an explicit work stack; long operator chains are
/// deeper than the call stack allows.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending: Vec<Expr> = Vec::new();
        if let Expr::Binary(bin) = self {
            pending.push(mem::replace(&mut *bin.left, Expr::NullLiteral));
            pending.push(mem::replace(&mut *bin.right, Expr::NullLiteral));
        }

        while let Some(mut expr) = pending.pop() {
            if let Expr::Binary(bin) = &mut expr {
                pending.push(mem::replace(&mut *bin.left, Expr::NullLiteral));
                pending.push(mem::replace(&mut *bin.right, Expr::NullLiteral));
            }
        }
    }
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::Expr(expr) => expr.kind(),
        }
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::NumericLiteral(_) => NodeKind::NumericLiteral,
            Expr::NullLiteral => NodeKind::NullLiteral,
            Expr::Binary(_) => NodeKind::BinaryExpr,
        }
    }

    pub fn identifier(symbol: &str) -> Expr {
        Expr::Identifier(Identifier {
            symbol: symbol.to_owned(),
        })
    }

    pub fn number(value: f64) -> Expr {
        Expr::NumericLiteral(NumericLiteral { value })
    }

    pub fn binary(operator: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Renders back to source; binary expressions are always parenthesised so the
/// output re-parses to the same tree.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => f.write_str(&ident.symbol),
            Expr::NumericLiteral(num) => write!(f, "{}", num.value),
            Expr::NullLiteral => f.write_str("null"),
            Expr::Binary(bin) => write!(f, "({} {} {})", bin.left, bin.operator, bin.right),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::token::Operator;

    use super::{Expr, NodeKind, Program, Stmt};

    fn sample() -> Program {
        Program {
            body: vec![
                Stmt::Expr(Expr::binary(
                    Operator::Add,
                    Expr::number(1.0),
                    Expr::binary(Operator::Mul, Expr::identifier("x"), Expr::NullLiteral),
                )),
                Stmt::Expr(Expr::number(7.0)),
            ],
        }
    }

    #[test]
    fn test_kinds() {
        let program = sample();

        assert_eq!(program.kind(), NodeKind::Program);
        assert_eq!(program.body[0].kind(), NodeKind::BinaryExpr);
        assert_eq!(program.body[1].kind(), NodeKind::NumericLiteral);
        assert_eq!(Expr::identifier("a").kind(), NodeKind::Identifier);
        assert_eq!(Expr::NullLiteral.kind(), NodeKind::NullLiteral);
        assert_eq!(NodeKind::BinaryExpr.to_string(), "BinaryExpr");
    }

    #[test]
    fn test_display_source() {
        assert_eq!(sample().to_string(), "(1 + (x * null))\n7");
        assert_eq!(Program::default().to_string(), "");
        assert_eq!(Expr::number(120.0).to_string(), "120");
    }

    #[test]
    fn test_drop_long_left_spine() {
        let mut expr = Expr::number(1.0);
        for _ in 0..200_000 {
            expr = Expr::binary(Operator::Add, expr, Expr::number(1.0));
        }

        assert_eq!(expr.kind(), NodeKind::BinaryExpr);
        drop(expr);
    }

    #[test]
    fn test_drop_long_right_spine() {
        let mut expr = Expr::identifier("x");
        for _ in 0..200_000 {
            expr = Expr::binary(Operator::Mul, Expr::NullLiteral, expr);
        }

        drop(Program {
            body: vec![Stmt::Expr(expr)],
        });
    }

    #[test]
    fn test_tree() {
        assert_eq!(
            sample().tree(),
            "Program\n  BinaryExpr +\n    NumericLiteral 1\n    BinaryExpr *\n      Identifier x\n      NullLiteral\n  NumericLiteral 7\n"
        );
        assert_eq!(Program::default().tree(), "Program\n");
    }
}

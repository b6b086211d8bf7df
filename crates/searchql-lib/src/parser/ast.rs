//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Term, Term);
ast_node!(Phrase, Phrase);
ast_node!(Group, Group);
ast_node!(Not, Not);
ast_node!(Field, Field);
ast_node!(FieldName, FieldName);
ast_node!(Or, Or);

/// A clause of the query, or a part of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Term(Term),
    Phrase(Phrase),
    Group(Group),
    Not(Not),
    Field(Field),
    Or(Or),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Term => Term::cast(node).map(Expr::Term),
            SyntaxKind::Phrase => Phrase::cast(node).map(Expr::Phrase),
            SyntaxKind::Group => Group::cast(node).map(Expr::Group),
            SyntaxKind::Not => Not::cast(node).map(Expr::Not),
            SyntaxKind::Field => Field::cast(node).map(Expr::Field),
            SyntaxKind::Or => Or::cast(node).map(Expr::Or),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Term(n) => n.as_cst(),
            Expr::Phrase(n) => n.as_cst(),
            Expr::Group(n) => n.as_cst(),
            Expr::Not(n) => n.as_cst(),
            Expr::Field(n) => n.as_cst(),
            Expr::Or(n) => n.as_cst(),
        }
    }
}

impl Root {
    /// Top-level clauses, implicitly joined by AND.
    pub fn clauses(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl Term {
    /// The term exactly as written. Phrase terms may span several tokens.
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl Phrase {
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.0.children().filter_map(Term::cast)
    }
}

impl Group {
    pub fn clauses(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl Not {
    pub fn operand(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl Field {
    pub fn name(&self) -> Option<FieldName> {
        self.0.children().find_map(FieldName::cast)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl FieldName {
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::Word)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }
}

impl Or {
    pub fn left(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    /// Clauses after the `or` keyword, implicitly joined by AND.
    pub fn right(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast).skip(1)
    }
}

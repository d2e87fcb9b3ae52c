//! Lexical units of a boolean expression.

use std::fmt::{Display, Formatter};

use crate::error::Result;
use crate::types::Var;

pub const AND: char = '*';
pub const OR: char = '+';
pub const NOT: char = '\'';
pub const LEFT_PAREN: char = '(';
pub const RIGHT_PAREN: char = ')';

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Literal,
    And,
    Or,
    Not,
    LeftParen,
    RightParen,
}

/// A token, compared by kind and value.
///
/// Only [`TokenKind::Literal`] tokens carry a variable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    var: Option<Var>,
}

impl Token {
    pub const fn new(kind: TokenKind) -> Self {
        Self { kind, var: None }
    }

    pub const fn and() -> Self {
        Self::new(TokenKind::And)
    }
    pub const fn or() -> Self {
        Self::new(TokenKind::Or)
    }
    pub const fn not() -> Self {
        Self::new(TokenKind::Not)
    }
    pub const fn left_paren() -> Self {
        Self::new(TokenKind::LeftParen)
    }
    pub const fn right_paren() -> Self {
        Self::new(TokenKind::RightParen)
    }

    /// Creates a literal token, failing if `c` is not a variable letter.
    pub fn literal(c: char) -> Result<Self> {
        Self::literal_at(c, 0)
    }

    pub(crate) fn literal_at(c: char, position: usize) -> Result<Self> {
        let var = Var::at(c, position)?;
        Ok(Self::var(var))
    }

    pub const fn var(var: Var) -> Self {
        Self {
            kind: TokenKind::Literal,
            var: Some(var),
        }
    }

    /// Classifies an operator character, `None` for anything else.
    pub fn operator(c: char) -> Option<Self> {
        let kind = match c {
            AND => TokenKind::And,
            OR => TokenKind::Or,
            NOT => TokenKind::Not,
            LEFT_PAREN => TokenKind::LeftParen,
            RIGHT_PAREN => TokenKind::RightParen,
            _ => return None,
        };
        Some(Self::new(kind))
    }

    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The variable of a literal token.
    pub const fn value(&self) -> Option<Var> {
        self.var
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::And | TokenKind::Or | TokenKind::Not)
    }

    /// The character this token is written as.
    pub fn as_char(&self) -> char {
        match self.kind {
            TokenKind::Literal => self.var.map(|v| v.letter()).unwrap_or('?'),
            TokenKind::And => AND,
            TokenKind::Or => OR,
            TokenKind::Not => NOT,
            TokenKind::LeftParen => LEFT_PAREN,
            TokenKind::RightParen => RIGHT_PAREN,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_operator_tokens() {
        let and = Token::operator('*').unwrap();
        assert_eq!(and, Token::and());
        assert_eq!(and.as_char(), '*');
        assert!(and.is_operator());
        assert!(!Token::left_paren().is_operator());
        assert_eq!(Token::operator('A'), None);
    }

    #[test]
    fn test_literal_valid() {
        let a = Token::literal('A').unwrap();
        let z = Token::literal('Z').unwrap();
        assert_eq!(a.kind(), TokenKind::Literal);
        assert_eq!(a.value().map(|v| v.letter()), Some('A'));
        assert_eq!(z.to_string(), "Z");
    }

    #[test]
    fn test_literal_invalid() {
        assert!(matches!(
            Token::literal(' '),
            Err(Error::InvalidCharacter { character: ' ', .. })
        ));
    }

    #[test]
    fn test_literal_equality() {
        let a1 = Token::literal('A').unwrap();
        let a2 = Token::literal('A').unwrap();
        let b = Token::literal('B').unwrap();
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_ne!(Token::and(), Token::or());
    }
}

//! Lexical analysis with implicit conjunction.
//!
//! Multiplication may be elided in the input: `AB'(C+D)` means `A*B'*(C+D)`.
//! The lexer puts the missing [`TokenKind::And`] tokens back, so the parser
//! only ever sees explicit operators.

use log::debug;

use crate::error::Result;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Scans the whole input into tokens.
    ///
    /// Before a `(` or a literal, an `And` is inserted when the previous token
    /// was a `)`, a literal or a `'`. Fails on the first character that is
    /// neither an operator nor a variable.
    pub fn tokenize(&self) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::with_capacity(self.input.len());

        for (position, c) in self.input.chars().enumerate() {
            let token = match Token::operator(c) {
                Some(op) => op,
                None => Token::literal_at(c, position)?,
            };

            if matches!(token.kind(), TokenKind::LeftParen | TokenKind::Literal)
                && tokens.last().is_some_and(implies_and)
            {
                tokens.push(Token::and());
            }
            tokens.push(token);
        }

        debug!("tokenize({:?}) -> {} tokens", self.input, tokens.len());
        Ok(tokens)
    }
}

/// Whether an operand directly after `prev` is an implicit conjunction.
fn implies_and(prev: &Token) -> bool {
    matches!(
        prev.kind(),
        TokenKind::RightParen | TokenKind::Literal | TokenKind::Not
    )
}

/// Shorthand for `Lexer::new(input).tokenize()`.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).tokenize()
}

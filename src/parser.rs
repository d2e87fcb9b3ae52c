//! Recursive descent parser.
//!
//! Grammar (left-associative, precedence NOT > AND > OR):
//!
//! ```text
//! expression := term ('+' term)*
//! term       := factor ('*' factor)*
//! factor     := atom ("'")*
//! atom       := LITERAL | '(' expression ')'
//! ```
//!
//! Implicit conjunction is already resolved by the [lexer](crate::lexer),
//! so `AB` arrives here as `A * B`.
//!
//! Every later pass walks the tree recursively, so the parser rejects trees
//! deeper than [`MAX_DEPTH`] and parentheses nested deeper than [`MAX_DEPTH`].
//! A chain `A+A+...` of `n` terms is `n` levels deep.

use std::collections::BTreeSet;

use log::debug;

use crate::ast::Node;
use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};
use crate::types::{Alphabet, Var};

const END_OF_INPUT: &str = "end of input";

/// Maximum depth of the parsed tree, and of parenthesis nesting.
pub const MAX_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Currently open parentheses.
    nesting: usize,
    variables: BTreeSet<Var>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
            variables: BTreeSet::new(),
        }
    }

    /// Parses the whole token stream.
    ///
    /// Returns the tree and the sorted alphabet of its variables.
    /// Fails with [`Error::MalformedExpression`] on the first unexpected token,
    /// including tokens left over after a complete expression, and on input
    /// nested deeper than [`MAX_DEPTH`].
    pub fn parse(mut self) -> Result<(Node, Alphabet)> {
        let (root, depth) = self.expression()?;
        if let Some(token) = self.current() {
            return Err(Error::malformed_expression(END_OF_INPUT, describe(Some(token))));
        }
        let alphabet = Alphabet::new(self.variables);
        debug!("parse -> {} over {} (depth {})", root, alphabet, depth);
        Ok((root, alphabet))
    }

    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.is(kind))
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.current();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // Each production returns the node together with its depth.

    fn expression(&mut self) -> Result<(Node, usize)> {
        let (mut node, mut depth) = self.term()?;
        while self.at(TokenKind::Or) {
            self.advance();
            let (rhs, rhs_depth) = self.term()?;
            depth = deeper(depth.max(rhs_depth))?;
            node = Node::or(node, rhs);
        }
        Ok((node, depth))
    }

    fn term(&mut self) -> Result<(Node, usize)> {
        let (mut node, mut depth) = self.factor()?;
        while self.at(TokenKind::And) {
            self.advance();
            let (rhs, rhs_depth) = self.factor()?;
            depth = deeper(depth.max(rhs_depth))?;
            node = Node::and(node, rhs);
        }
        Ok((node, depth))
    }

    fn factor(&mut self) -> Result<(Node, usize)> {
        let (mut node, mut depth) = self.atom()?;
        while self.at(TokenKind::Not) {
            self.advance();
            depth = deeper(depth)?;
            node = Node::not(node);
        }
        Ok((node, depth))
    }

    fn atom(&mut self) -> Result<(Node, usize)> {
        let token = self.advance();
        match token.map(|t| (t.kind(), t.value())) {
            Some((TokenKind::LeftParen, _)) => {
                self.nesting = deeper(self.nesting)?;
                let inner = self.expression()?;
                if self.at(TokenKind::RightParen) {
                    self.advance();
                    self.nesting -= 1;
                    Ok(inner)
                } else {
                    Err(Error::malformed_expression("')'", describe(self.current())))
                }
            }
            Some((TokenKind::Literal, Some(var))) => {
                self.variables.insert(var);
                Ok((Node::literal(var), 1))
            }
            _ => Err(Error::malformed_expression("literal or '('", describe(token))),
        }
    }
}

/// One level below `depth`, failing past [`MAX_DEPTH`].
fn deeper(depth: usize) -> Result<usize> {
    let depth = depth + 1;
    if depth > MAX_DEPTH {
        return Err(Error::malformed_expression(
            format!("nesting depth at most {}", MAX_DEPTH),
            format!("depth {}", depth),
        ));
    }
    Ok(depth)
}

fn describe(token: Option<Token>) -> String {
    match token {
        Some(t) => format!("'{}'", t),
        None => END_OF_INPUT.to_string(),
    }
}

/// Tokenizes and parses `input` in one go.
pub fn parse(input: &str) -> Result<(Node, Alphabet)> {
    Parser::new(tokenize(input)?).parse()
}

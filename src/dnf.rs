//! Disjunctive normal form.
//!
//! A parsed tree is brought to DNF in two passes:
//!
//! 1. [`push_negations`] applies De Morgan's laws until negation only
//!    appears on variables, as [`Node::Complement`] leaves.
//! 2. [`distribute`] rewrites `(p + q) * r` into `p*r + q*r` until no
//!    `And` has an `Or` below it.
//!
//! The result is rendered as `term+term+...`, each term `factor*factor*...`.
//! That string is what the [reducer](crate::reduce) reads implicants from.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::ast::Node;
use crate::error::{Error, Result};
use crate::implicant::Implicant;
use crate::parser::parse;
use crate::token::OR;
use crate::types::Alphabet;

/// Eliminates every `Not` node.
pub fn push_negations(node: Node) -> Node {
    match node {
        Node::Not(inner) => negate(*inner),
        Node::And(a, b) => Node::and(push_negations(*a), push_negations(*b)),
        Node::Or(a, b) => Node::or(push_negations(*a), push_negations(*b)),
        terminal => terminal,
    }
}

/// De Morgan dual of `node`, with negations pushed all the way down.
fn negate(node: Node) -> Node {
    match node {
        Node::Literal(v) => Node::Complement(v),
        Node::Complement(v) => Node::Literal(v),
        Node::And(a, b) => Node::or(negate(*a), negate(*b)),
        Node::Or(a, b) => Node::and(negate(*a), negate(*b)),
        // Double negation cancels, but the exposed subtree may hold more.
        Node::Not(inner) => push_negations(*inner),
    }
}

/// Distributes `And` over `Or`.
///
/// `(p + q) * r` and `r * (p + q)` both become `p*r + q*r`; the left child is
/// checked first. Expects a tree without `Not` above an `And`/`Or`.
pub fn distribute(node: Node) -> Node {
    match node {
        Node::And(a, b) => distribute_and(*a, *b),
        Node::Or(a, b) => Node::or(distribute(*a), distribute(*b)),
        Node::Not(a) => Node::not(distribute(*a)),
        terminal => terminal,
    }
}

fn distribute_and(lhs: Node, rhs: Node) -> Node {
    match (lhs, rhs) {
        (Node::Or(p, q), r) | (r, Node::Or(p, q)) => Node::or(
            distribute(Node::and(*p, r.clone())),
            distribute(Node::and(*q, r)),
        ),
        (lhs, rhs) => {
            let lhs = distribute(lhs);
            let rhs = distribute(rhs);
            // A child may only turn into an `Or` after its own distribution.
            if lhs.is_or() || rhs.is_or() {
                distribute_and(lhs, rhs)
            } else {
                Node::and(lhs, rhs)
            }
        }
    }
}

/// Runs both passes.
pub fn to_dnf(node: Node) -> Node {
    distribute(push_negations(node))
}

/// A boolean expression expanded into a (non-canonical) sum of products.
///
/// Terms do not necessarily mention every variable, and may repeat or
/// contradict themselves (`A*A'`).
#[derive(Debug, Clone)]
pub struct ExpandedExpression {
    root: Node,
    alphabet: Alphabet,
    text: String,
}

impl ExpandedExpression {
    /// Parses `input` and expands it into DNF.
    pub fn parse(input: &str) -> Result<Self> {
        let (root, alphabet) = parse(input)?;
        Ok(Self::from_tree(root, alphabet))
    }

    /// Expands an already parsed tree over `alphabet`.
    pub fn from_tree(root: Node, alphabet: Alphabet) -> Self {
        let root = to_dnf(root);
        let text = root.interpret();
        debug!("dnf -> {}", text);
        Self { root, alphabet, text }
    }

    /// The DNF string, e.g. `B*A+C*A`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The distinct variables in ascending order.
    pub fn all_variables(&self) -> Vec<char> {
        self.alphabet.letters()
    }

    pub fn variable_count(&self) -> usize {
        self.alphabet.len()
    }

    /// The product terms, in rendering order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.text.split(OR)
    }

    /// One implicant per term, contradictory terms dropped.
    pub fn implicants(&self) -> Result<Vec<Implicant>> {
        let mut implicants = Vec::new();
        for term in self.terms() {
            let implicant = Implicant::from_term(&self.alphabet, term)?;
            if implicant.is_contradiction() {
                debug!("dropping contradictory term {}", term);
                continue;
            }
            implicants.push(implicant);
        }
        Ok(implicants)
    }

    /// Every minterm on which the expression is true.
    pub fn minterms(&self) -> Result<BTreeSet<u32>> {
        Ok(self
            .implicants()?
            .iter()
            .flat_map(|i| i.minterms().iter().copied())
            .collect())
    }
}

impl Display for ExpandedExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for ExpandedExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

use std::fmt::{Display, Formatter};

use crate::token::{AND, NOT, OR};
use crate::types::Var;

/// Expression tree node.
///
/// Children are owned exclusively, so the tree is never shared or cyclic.
/// `Not` only appears in freshly parsed trees; [`push_negations`] replaces it
/// by [`Node::Complement`] leaves.
///
/// [`push_negations`]: crate::dnf::push_negations
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Literal(Var),
    Complement(Var),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

impl Node {
    pub fn literal(var: Var) -> Self {
        Node::Literal(var)
    }

    pub fn complement(var: Var) -> Self {
        Node::Complement(var)
    }

    pub fn not(value: Self) -> Self {
        Node::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Node::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Node::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::Complement(_))
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Node::Or(..))
    }

    /// Checks the DNF shape: an `Or` tree over `And` chains of terminals, with no `Not`.
    pub fn is_dnf(&self) -> bool {
        fn is_product(node: &Node) -> bool {
            match node {
                Node::Literal(_) | Node::Complement(_) => true,
                Node::And(a, b) => is_product(a) && is_product(b),
                Node::Or(..) | Node::Not(_) => false,
            }
        }
        match self {
            Node::Or(a, b) => a.is_dnf() && b.is_dnf(),
            _ => is_product(self),
        }
    }

    /// Evaluates the expression under `assignment`.
    pub fn eval<F>(&self, assignment: &F) -> bool
    where
        F: Fn(Var) -> bool,
    {
        match self {
            Node::Literal(v) => assignment(*v),
            Node::Complement(v) => !assignment(*v),
            Node::Not(a) => !a.eval(assignment),
            Node::And(a, b) => a.eval(assignment) && b.eval(assignment),
            Node::Or(a, b) => a.eval(assignment) || b.eval(assignment),
        }
    }

    /// Renders the tree as text.
    ///
    /// `And` renders as `l*r`, `Or` as `l+r`, a complement as the letter followed by `'`.
    /// On a DNF tree this is exactly the sum-of-products string read by the reducer.
    /// A `Not` over a compound child is parenthesized so the text parses back.
    pub fn interpret(&self) -> String {
        self.to_string()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Literal(v) => write!(f, "{}", v),
            Node::Complement(v) => write!(f, "{}{}", v, NOT),
            Node::Not(a) if a.is_terminal() => write!(f, "{}{}", a, NOT),
            Node::Not(a) => write!(f, "({}){}", a, NOT),
            Node::And(a, b) => write!(f, "{}{}{}", a, AND, b),
            Node::Or(a, b) => write!(f, "{}{}{}", a, OR, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn var(c: char) -> Var {
        Var::new(c).unwrap()
    }

    #[test]
    fn test_interpret_terminals() {
        assert_eq!(Node::literal(var('A')).interpret(), "A");
        assert_eq!(Node::complement(var('Z')).interpret(), "Z'");
    }

    #[test]
    fn test_interpret_operators() {
        let expr = Node::or(
            Node::and(Node::literal(var('A')), Node::complement(var('B'))),
            Node::literal(var('C')),
        );
        assert_eq!(expr.interpret(), "A*B'+C");
    }

    #[test]
    fn test_interpret_not() {
        assert_eq!(Node::not(Node::literal(var('A'))).interpret(), "A'");
        let expr = Node::not(Node::and(Node::literal(var('A')), Node::literal(var('B'))));
        assert_eq!(expr.interpret(), "(A*B)'");
    }

    #[test]
    fn test_is_dnf() {
        let a = Node::literal(var('A'));
        let b = Node::complement(var('B'));
        let c = Node::literal(var('C'));
        assert!(a.is_dnf());
        assert!(Node::and(a.clone(), b.clone()).is_dnf());
        assert!(Node::or(Node::and(a.clone(), b.clone()), c.clone()).is_dnf());
        assert!(!Node::and(Node::or(a.clone(), b.clone()), c.clone()).is_dnf());
        assert!(!Node::not(a).is_dnf());
    }

    #[test]
    fn test_eval() {
        // A*(B+C')
        let expr = Node::and(
            Node::literal(var('A')),
            Node::or(Node::literal(var('B')), Node::complement(var('C'))),
        );
        assert!(expr.eval(&|v: Var| v.letter() == 'A'));
        assert!(!expr.eval(&|v: Var| v.letter() != 'B'));
        assert!(!expr.eval(&|_: Var| false));
        assert!(Node::not(expr).eval(&|_: Var| false));
    }
}

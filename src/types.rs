//! Type-safe wrappers for propositional variables and their positions.
//!
//! A [`Var`] is a variable letter as written in the input; a [`Position`] is
//! the index of that variable in the sorted [`Alphabet`] of one expression.
//! Positions fix the bit order of every implicant and minterm in a reduction.
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

/// First character reserved for variables.
pub const FIRST_VAR: char = 'A';
/// Last character reserved for variables.
pub const LAST_VAR: char = 'Z';
/// Maximum number of distinct variables in one expression.
pub const MAX_VARS: usize = (LAST_VAR as usize) - (FIRST_VAR as usize) + 1;

/// A propositional variable, one of `A`..=`Z`.
///
/// # Invariants
///
/// - The wrapped character is always inside the reserved variable range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(char);

impl Var {
    /// Creates a variable from its letter.
    ///
    /// Fails with [`Error::InvalidCharacter`] (at position 0) if `c` is not in `A`..=`Z`.
    /// Use [`Var::at`] when the position in the input is known.
    pub fn new(c: char) -> Result<Self> {
        Self::at(c, 0)
    }

    /// Creates a variable from its letter found at `position` in the input.
    pub fn at(c: char, position: usize) -> Result<Self> {
        if Self::is_valid(c) {
            Ok(Var(c))
        } else {
            Err(Error::InvalidCharacter { character: c, position })
        }
    }

    /// Returns `true` if `c` is in the reserved variable range.
    pub const fn is_valid(c: char) -> bool {
        c >= FIRST_VAR && c <= LAST_VAR
    }

    /// Returns the variable letter.
    pub const fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

impl TryFrom<char> for Var {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Var::new(c)
    }
}

/// A position in the sorted alphabet (0-indexed).
///
/// Position 0 is the most significant bit of every minterm.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(usize);

impl Position {
    pub fn new(index: usize) -> Self {
        Position(index)
    }

    /// Returns the raw index as a `usize`.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.0
    }
}

/// The distinct variables of one expression, in ascending letter order.
///
/// Built once from the parser's variable set and immutable afterwards.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Alphabet {
    vars: Vec<Var>,
    /// Letter offset (from [`FIRST_VAR`]) to position, `None` if absent.
    lookup: [Option<Position>; MAX_VARS],
}

impl Alphabet {
    pub fn new(vars: impl IntoIterator<Item = Var>) -> Self {
        let vars: Vec<Var> = vars.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let mut lookup = [None; MAX_VARS];
        for (i, var) in vars.iter().enumerate() {
            lookup[Self::offset(*var)] = Some(Position(i));
        }
        Self { vars, lookup }
    }

    fn offset(var: Var) -> usize {
        (var.letter() as usize) - (FIRST_VAR as usize)
    }

    /// Number of variables (the width of every implicant).
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the position of `var`, or `None` if it does not occur.
    pub fn position(&self, var: Var) -> Option<Position> {
        self.lookup[Self::offset(var)]
    }

    /// Returns the variable at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn var(&self, position: Position) -> Var {
        self.vars[position.0]
    }

    pub fn vars(&self) -> &[Var] {
        &self.vars
    }

    /// Returns the variable letters in ascending order.
    pub fn letters(&self) -> Vec<char> {
        self.vars.iter().map(|v| v.letter()).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.vars {
            write!(f, "{}", var)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_var_creation() {
        let a = Var::new('A').unwrap();
        let z = Var::new('Z').unwrap();
        assert_eq!(a.letter(), 'A');
        assert_eq!(z.letter(), 'Z');
        assert!(a < z);
    }

    #[test]
    fn test_var_invalid() {
        assert_eq!(
            Var::new(' '),
            Err(Error::InvalidCharacter {
                character: ' ',
                position: 0
            })
        );
        assert!(Var::new('a').is_err());
        assert!(Var::at('[', 7).is_err());
    }

    #[test]
    fn test_alphabet_sorted_and_dense() {
        let vars = ['S', 'P', 'R', 'Q', 'P'].map(|c| Var::new(c).unwrap());
        let alphabet = Alphabet::new(vars);
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.to_string(), "PQRS");
        assert_eq!(alphabet.position(Var::new('P').unwrap()), Some(Position::new(0)));
        assert_eq!(alphabet.position(Var::new('S').unwrap()), Some(Position::new(3)));
        assert_eq!(alphabet.position(Var::new('A').unwrap()), None);
        assert_eq!(alphabet.var(Position::new(2)).letter(), 'R');
    }

    #[test]
    fn test_alphabet_empty() {
        let alphabet = Alphabet::default();
        assert!(alphabet.is_empty());
        assert_eq!(alphabet.to_string(), "");
    }
}

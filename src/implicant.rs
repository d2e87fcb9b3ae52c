//! Implicants as ternary vectors over the alphabet.
//!
//! An implicant is a product term where each variable is either required true
//! ([`Cell::One`]), required false ([`Cell::Zero`]) or free ([`Cell::DontCare`]).
//! Each implicant knows the minterms it covers: a vector with `d` don't-cares
//! covers exactly `2^d` of them.
//!
//! Implicants are ordered by (don't-cares, ones, canonical string). The
//! reducer relies on this order to group mergeable implicants next to each other.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

use log::trace;

use crate::error::{Error, Result};
use crate::token::{AND, NOT};
use crate::types::{Alphabet, Var};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    Zero,
    One,
    DontCare,
}

impl Cell {
    pub fn is_dont_care(self) -> bool {
        self == Cell::DontCare
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Cell::Zero => '0',
            Cell::One => '1',
            Cell::DontCare => '-',
        };
        write!(f, "{}", c)
    }
}

#[derive(Debug, Clone)]
pub struct Implicant {
    cells: Vec<Cell>,
    ones: usize,
    dont_cares: usize,
    /// Covered minterms, in worklist expansion order.
    minterms: Vec<u32>,
    contradiction: bool,
    canonical: String,
}

impl Implicant {
    fn from_cells(alphabet: &Alphabet, cells: Vec<Cell>) -> Self {
        let ones = cells.iter().filter(|&&c| c == Cell::One).count();
        let dont_cares = cells.iter().filter(|c| c.is_dont_care()).count();
        let canonical = render(&cells, alphabet);
        let minterms = expand_minterms(&cells);
        Self {
            cells,
            ones,
            dont_cares,
            minterms,
            contradiction: false,
            canonical,
        }
    }

    fn contradiction(alphabet: &Alphabet) -> Self {
        let cells = vec![Cell::DontCare; alphabet.len()];
        Self {
            dont_cares: cells.len(),
            cells,
            ones: 0,
            minterms: Vec::new(),
            contradiction: true,
            canonical: String::new(),
        }
    }

    /// Builds an implicant from one DNF term such as `A*B'*D`.
    ///
    /// Each factor is a variable of `alphabet`, optionally followed by `'`.
    /// A term that asks for both polarities of one variable yields an implicant
    /// flagged as [contradiction](Self::is_contradiction) instead of an error.
    /// Empty or otherwise malformed factors fail with [`Error::MalformedImplicant`].
    pub fn from_term(alphabet: &Alphabet, term: &str) -> Result<Self> {
        let mut cells = vec![Cell::DontCare; alphabet.len()];

        for factor in term.split(AND) {
            let mut chars = factor.chars();
            let (letter, value) = match (chars.next(), chars.next(), chars.next()) {
                (Some(letter), None, None) => (letter, Cell::One),
                (Some(letter), Some(NOT), None) => (letter, Cell::Zero),
                _ => return Err(Error::malformed_implicant(term)),
            };
            let position = Var::new(letter)
                .ok()
                .and_then(|var| alphabet.position(var))
                .ok_or_else(|| Error::malformed_implicant(term))?;

            let cell = &mut cells[position.index()];
            if !cell.is_dont_care() && *cell != value {
                trace!("term {} is a contradiction", term);
                return Ok(Self::contradiction(alphabet));
            }
            *cell = value;
        }

        Ok(Self::from_cells(alphabet, cells))
    }

    /// Combines two implicants differing in exactly one concrete position.
    ///
    /// Both must have the same number of don't-cares and their one-counts must
    /// differ by less than two. Returns `None` if they cannot be merged. The
    /// result has that position set to don't-care and covers the union of both
    /// minterm sets. `alphabet` is the one both were built over.
    pub fn merge(&self, other: &Implicant, alphabet: &Alphabet) -> Option<Implicant> {
        if self.cells.len() != other.cells.len()
            || self.dont_cares != other.dont_cares
            || self.ones.abs_diff(other.ones) >= 2
            || self == other
        {
            return None;
        }

        let mut merged = self.cells.clone();
        let mut differing = None;
        for (i, (&a, &b)) in self.cells.iter().zip(&other.cells).enumerate() {
            if a == b {
                continue;
            }
            if a.is_dont_care() || b.is_dont_care() || differing.is_some() {
                return None;
            }
            differing = Some(i);
        }

        let i = differing?;
        merged[i] = Cell::DontCare;
        let ones = self.ones.min(other.ones);
        let dont_cares = self.dont_cares + 1;
        let canonical = render(&merged, alphabet);
        let minterms = expand_minterms(&merged);
        Some(Self {
            cells: merged,
            ones,
            dont_cares,
            minterms,
            contradiction: false,
            canonical,
        })
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn ones(&self) -> usize {
        self.ones
    }

    pub fn dont_cares(&self) -> usize {
        self.dont_cares
    }

    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    pub fn minterm_count(&self) -> usize {
        self.minterms.len()
    }

    pub fn is_contradiction(&self) -> bool {
        self.contradiction
    }

    /// Whether every variable is a don't-care, i.e. the constant true.
    pub fn is_universal(&self) -> bool {
        !self.contradiction && self.dont_cares == self.cells.len()
    }

    /// Whether `minterm` satisfies this implicant.
    pub fn covers(&self, minterm: u32) -> bool {
        if self.contradiction {
            return false;
        }
        let width = self.cells.len();
        self.cells.iter().enumerate().all(|(i, cell)| {
            let bit = (minterm >> (width - 1 - i)) & 1;
            match cell {
                Cell::DontCare => true,
                Cell::One => bit == 1,
                Cell::Zero => bit == 0,
            }
        })
    }

    /// The product as letters, e.g. `AB'D`; `1` for the universal implicant.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The product with an explicit `*` between factors, e.g. `A*B'*D`.
    pub fn to_explicit_string(&self) -> String {
        let mut text = String::with_capacity(2 * self.canonical.len());
        for (i, c) in self.canonical.chars().enumerate() {
            if i > 0 && c != NOT {
                text.push(AND);
            }
            text.push(c);
        }
        text
    }

    /// The vector as `0`/`1`/`-` characters in alphabet order.
    pub fn to_bit_string(&self) -> String {
        self.cells.iter().map(|c| c.to_string()).collect()
    }
}

fn render(cells: &[Cell], alphabet: &Alphabet) -> String {
    let factors: Vec<String> = cells
        .iter()
        .zip(alphabet.vars())
        .filter_map(|(cell, var)| match cell {
            Cell::One => Some(var.to_string()),
            Cell::Zero => Some(format!("{}{}", var, NOT)),
            Cell::DontCare => None,
        })
        .collect();
    if factors.is_empty() {
        "1".to_string()
    } else {
        factors.concat()
    }
}

/// Enumerates the minterms of a ternary vector.
///
/// Works through a FIFO of partially fixed vectors: the first don't-care of
/// an entry is replaced by `1` and by `0` and both are queued again, while an
/// entry without don't-cares is a minterm. Position 0 is the most significant bit.
fn expand_minterms(cells: &[Cell]) -> Vec<u32> {
    let mut minterms = Vec::new();
    // (bits fixed so far, next position to read)
    let mut queue: VecDeque<(u32, usize)> = VecDeque::from([(0, 0)]);

    while let Some((mut bits, start)) = queue.pop_front() {
        let mut forked = false;
        for (i, cell) in cells.iter().enumerate().skip(start) {
            match cell {
                Cell::One => bits = (bits << 1) | 1,
                Cell::Zero => bits <<= 1,
                Cell::DontCare => {
                    queue.push_back(((bits << 1) | 1, i + 1));
                    queue.push_back((bits << 1, i + 1));
                    forked = true;
                    break;
                }
            }
        }
        if !forked {
            minterms.push(bits);
        }
    }

    minterms
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Implicant {}

impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dont_cares
            .cmp(&other.dont_cares)
            .then(self.ones.cmp(&other.ones))
            .then_with(|| self.canonical.cmp(&other.canonical))
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Implicant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_explicit_string())
        } else {
            write!(f, "{}", self.canonical)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn alphabet(letters: &str) -> Alphabet {
        Alphabet::new(letters.chars().map(|c| Var::new(c).unwrap()))
    }

    fn implicant(letters: &str, term: &str) -> Implicant {
        Implicant::from_term(&alphabet(letters), term).unwrap()
    }

    #[test]
    fn test_from_term() {
        let i = implicant("ABCD", "B'*A*D");
        assert_eq!(i.to_bit_string(), "10-1");
        assert_eq!(i.canonical(), "AB'D");
        assert_eq!(format!("{:#}", i), "A*B'*D");
        assert_eq!(i.ones(), 2);
        assert_eq!(i.dont_cares(), 1);
        assert_eq!(i.minterms(), &[0b1011, 0b1001]);
        assert!(!i.is_contradiction());
    }

    #[test]
    fn test_explicit_string() {
        assert_eq!(implicant("ABC", "C'*B'*A'").to_explicit_string(), "A'*B'*C'");
        assert_eq!(implicant("ABC", "B").to_explicit_string(), "B");
        assert_eq!(implicant("ABC", "C*A'").to_explicit_string(), "A'*C");
    }

    #[test]
    fn test_repeated_factor_is_fine() {
        let i = implicant("AB", "A*A*B");
        assert_eq!(i.canonical(), "AB");
        assert_eq!(i.minterms(), &[0b11]);
    }

    #[test]
    fn test_contradiction() {
        let i = implicant("AB", "A*B*A'");
        assert!(i.is_contradiction());
        assert!(i.minterms().is_empty());
        assert!(!i.covers(0b11));
        assert!(!i.is_universal());
    }

    #[test]
    fn test_malformed_terms() {
        let ab = alphabet("AB");
        for term in ["", "A**B", "AB", "A'B", "a", "A\"", "C", "A*"] {
            assert_eq!(
                Implicant::from_term(&ab, term).unwrap_err(),
                Error::malformed_implicant(term),
                "term: {:?}",
                term
            );
        }
    }

    #[test]
    fn test_minterm_count_is_power_of_two() {
        let letters = "ABCDE";
        for (term, d) in [("A*B*C*D*E", 0), ("A*B'*C", 2), ("E'", 4)] {
            let i = implicant(letters, term);
            assert_eq!(i.dont_cares(), d);
            assert_eq!(i.minterm_count(), 1 << d);
            for &m in i.minterms() {
                assert!(i.covers(m));
            }
        }
    }

    #[test]
    fn test_expansion_order() {
        // 1 branch before 0 branch, breadth first.
        let i = implicant("ABC", "B");
        assert_eq!(i.minterms(), &[0b111, 0b110, 0b011, 0b010]);
    }

    #[test]
    fn test_merge() {
        let a = implicant("ABC", "A*B*C");
        let b = implicant("ABC", "A*B*C'");
        let m = a.merge(&b, &alphabet("ABC")).unwrap();
        assert_eq!(m.to_bit_string(), "11-");
        assert_eq!(m.canonical(), "AB");
        assert_eq!(m.ones(), 2);
        assert_eq!(m.dont_cares(), 1);

        let mut union: Vec<u32> = a.minterms().iter().chain(b.minterms()).copied().collect();
        let mut merged: Vec<u32> = m.minterms().to_vec();
        union.sort();
        merged.sort();
        assert_eq!(merged, union);
    }

    #[test]
    fn test_merge_rejections() {
        let abc = |t| implicant("ABC", t);
        let letters = alphabet("ABC");
        let merge = |a: Implicant, b: Implicant| a.merge(&b, &letters);
        // two differing positions
        assert!(merge(abc("A*B*C"), abc("A*B'*C'")).is_none());
        // differing in a don't-care position
        assert!(merge(abc("A*B"), abc("A*B'*C")).is_none());
        assert!(merge(abc("A*B"), abc("A*C")).is_none());
        // equal implicants
        assert!(merge(abc("A*B"), abc("B*A")).is_none());
        // one-counts too far apart
        assert!(merge(abc("A*B*C"), abc("A'*B'*C")).is_none());
    }

    #[test]
    fn test_universal() {
        let a = implicant("A", "A");
        let not_a = implicant("A", "A'");
        let one = a.merge(&not_a, &alphabet("A")).unwrap();
        assert!(one.is_universal());
        assert_eq!(one.canonical(), "1");
        assert_eq!(format!("{:#}", one), "1");
        assert_eq!(one.minterms(), &[1, 0]);
    }

    #[test]
    fn test_ordering() {
        let abc = |t| implicant("ABC", t);
        let mut implicants = vec![abc("A"), abc("B*C"), abc("A'*B*C"), abc("A*B'"), abc("A'*B'*C'")];
        implicants.sort();
        let order: Vec<&str> = implicants.iter().map(|i| i.canonical()).collect();
        assert_eq!(order, vec!["A'B'C'", "A'BC", "AB'", "BC", "A"]);
    }

    #[test]
    fn test_equality_by_rendering() {
        assert_eq!(implicant("AB", "A*B'"), implicant("AB", "B'*A"));
        assert_ne!(implicant("AB", "A*B'"), implicant("AB", "A'*B"));
    }
}

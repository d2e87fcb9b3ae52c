//! Quine–McCluskey reduction.
//!
//! A [`Reduction`] runs the whole pipeline on one input:
//!
//! 1. expand the expression into DNF and read one implicant per term,
//!    dropping contradictions;
//! 2. merge implicants round by round until nothing merges; what is left
//!    are the prime implicants;
//! 3. tabulate, for every minterm, the primes that cover it;
//! 4. pick the essential primes, then cover whatever is left greedily.
//!
//! The greedy step does not guarantee a minimal cover. Ties go to the first
//! candidate in table order, so results are reproducible.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::reduce::reduce;
//!
//! assert_eq!(reduce("ABC+A'BC+CD+CD'").unwrap(), "C");
//! assert_eq!(reduce("(P+Q)(R+S)").unwrap(), "PR+PS+QR+QS");
//! ```

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::{debug, trace};

use crate::bitset::MintermSet;
use crate::dnf::ExpandedExpression;
use crate::error::Result;
use crate::implicant::Implicant;
use crate::token::OR;
use crate::types::Alphabet;

/// Options for rendering a reduction.
#[derive(Debug, Clone, Default)]
pub struct ReduceConfig {
    /// Write `*` between factors (`A*B'+C`) instead of juxtaposing them (`AB'+C`).
    pub explicit_and: bool,
}

impl ReduceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explicit_and(mut self, explicit_and: bool) -> Self {
        self.explicit_and = explicit_and;
        self
    }
}

/// The state of one reduction run.
///
/// Nothing is shared between runs; every intermediate stays available for inspection.
#[derive(Debug, Clone)]
pub struct Reduction {
    expanded: ExpandedExpression,
    config: ReduceConfig,
    implicants: Vec<Implicant>,
    primes: Vec<Implicant>,
    /// Minterm to indices into `primes`, in first-insertion order.
    table: Vec<(u32, Vec<usize>)>,
    essentials: Vec<usize>,
    selected: Vec<usize>,
}

impl Reduction {
    pub fn new(input: &str) -> Result<Self> {
        Self::with_config(input, ReduceConfig::default())
    }

    pub fn with_config(input: &str, config: ReduceConfig) -> Result<Self> {
        let expanded = ExpandedExpression::parse(input)?;
        Self::from_expanded(expanded, config)
    }

    /// Reduces an already expanded expression.
    pub fn from_expanded(expanded: ExpandedExpression, config: ReduceConfig) -> Result<Self> {
        let implicants = expanded.implicants()?;
        debug!("{} initial implicants over {}", implicants.len(), expanded.alphabet());

        let primes = prime_implicants(implicants.clone(), expanded.alphabet());
        debug!("{} prime implicants", primes.len());

        let table = build_table(&primes);
        let (essentials, selected) = select_cover(&primes, &table, expanded.alphabet().len());
        debug!(
            "{} essential, {} selected over {} minterms",
            essentials.len(),
            selected.len(),
            table.len()
        );

        Ok(Self {
            expanded,
            config,
            implicants,
            primes,
            table,
            essentials,
            selected,
        })
    }

    pub fn expanded(&self) -> &ExpandedExpression {
        &self.expanded
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.expanded.alphabet()
    }

    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// Implicants read from the DNF terms, contradictions dropped.
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Prime implicants, sorted and deduplicated.
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.primes
    }

    /// Every minterm of the expression, in table order.
    pub fn minterms(&self) -> impl Iterator<Item = u32> + '_ {
        self.table.iter().map(|(m, _)| *m)
    }

    /// Each minterm with the primes covering it, in table order.
    pub fn table(&self) -> impl Iterator<Item = (u32, Vec<&Implicant>)> + '_ {
        self.table
            .iter()
            .map(|(m, coverers)| (*m, coverers.iter().map(|&i| &self.primes[i]).collect()))
    }

    /// Primes that are the only cover of some minterm.
    pub fn essential_implicants(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.essentials.iter().map(|&i| &self.primes[i])
    }

    pub fn is_essential(&self, implicant: &Implicant) -> bool {
        self.essential_implicants().any(|e| e == implicant)
    }

    /// The chosen cover, in selection order.
    pub fn selected(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.selected.iter().map(|&i| &self.primes[i])
    }
}

impl Display for Reduction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.selected.is_empty() {
            return write!(f, "0");
        }
        for (k, implicant) in self.selected().enumerate() {
            if k > 0 {
                write!(f, "{}", OR)?;
            }
            if self.config.explicit_and {
                write!(f, "{:#}", implicant)?;
            } else {
                write!(f, "{}", implicant)?;
            }
        }
        Ok(())
    }
}

/// Merges implicants round by round until a round merges nothing.
///
/// Each round sorts its generation, then tries every pair `(i, j)`, `i < j`,
/// stopping the inner scan once one-counts are two or more apart. Both members
/// of a successful pair are retired. The next generation is the round's merge
/// products plus the implicants it did not retire.
fn prime_implicants(initial: Vec<Implicant>, alphabet: &Alphabet) -> Vec<Implicant> {
    let mut generation = initial;
    let mut round = 0;

    loop {
        round += 1;
        generation.sort();
        generation.dedup();

        let n = generation.len();
        let mut retired = vec![false; n];
        let mut merged = Vec::new();

        for i in 0..n {
            for j in (i + 1)..n {
                if generation[i].ones().abs_diff(generation[j].ones()) > 1 {
                    break;
                }
                if let Some(m) = generation[i].merge(&generation[j], alphabet) {
                    trace!("{} + {} -> {}", generation[i], generation[j], m);
                    retired[i] = true;
                    retired[j] = true;
                    merged.push(m);
                }
            }
        }

        let survivors: Vec<Implicant> = generation
            .into_iter()
            .zip(retired)
            .filter(|(_, r)| !r)
            .map(|(i, _)| i)
            .collect();
        debug!(
            "round {}: {} merged, {} unmerged",
            round,
            merged.len(),
            survivors.len()
        );

        if merged.is_empty() {
            // Sorted and deduplicated already.
            return survivors;
        }

        generation = merged;
        generation.extend(survivors);
    }
}

fn build_table(primes: &[Implicant]) -> Vec<(u32, Vec<usize>)> {
    let mut rows: Vec<(u32, Vec<usize>)> = Vec::new();
    let mut index: HashMap<u32, usize> = HashMap::new();

    for (p, prime) in primes.iter().enumerate() {
        for &m in prime.minterms() {
            let row = *index.entry(m).or_insert_with(|| {
                rows.push((m, Vec::new()));
                rows.len() - 1
            });
            rows[row].1.push(p);
        }
    }

    rows
}

/// Returns (essentials, selected) as indices into `primes`.
fn select_cover(primes: &[Implicant], table: &[(u32, Vec<usize>)], width: usize) -> (Vec<usize>, Vec<usize>) {
    let mut covered = MintermSet::for_width(width);
    let mut chosen = vec![false; primes.len()];
    let mut selected = Vec::new();

    for (_, coverers) in table {
        if let [only] = coverers.as_slice() {
            if !chosen[*only] {
                chosen[*only] = true;
                selected.push(*only);
            }
            covered.extend(primes[*only].minterms().iter().copied());
        }
    }
    let essentials = selected.clone();

    if covered.len() < table.len() {
        for (m, coverers) in table {
            if covered.contains(*m) {
                continue;
            }
            let mut best = coverers[0];
            for &c in &coverers[1..] {
                if primes[c].minterm_count() > primes[best].minterm_count() {
                    best = c;
                }
            }
            trace!("minterm {} uncovered, picking {}", m, primes[best]);
            selected.push(best);
            covered.extend(primes[best].minterms().iter().copied());
            if covered.len() == table.len() {
                break;
            }
        }
    }

    (essentials, selected)
}

/// Reduces `expression` to a sum of products.
///
/// One-shot shorthand for `Reduction::new(expression)?.to_string()`.
pub fn reduce(expression: &str) -> Result<String> {
    Ok(Reduction::new(expression)?.to_string())
}

//! # qmc-rs: Quine–McCluskey minimization in Rust
//!
//! **`qmc-rs`** turns a textual boolean expression over single-letter variables
//! into a small sum of products, using the Quine–McCluskey method.
//!
//! ## Input Syntax
//!
//! - Variables are the letters `A`..=`Z`.
//! - `'` is postfix complement and can be stacked: `A''` is `A`.
//! - `*` is AND and may be omitted: `AB(C+D)` is `A*B*(C+D)`.
//! - `+` is OR; parentheses group.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::reduce;
//!
//! let reduced = reduce("AB+AB'+BC+B'C'+A'D+AD").unwrap();
//! assert_eq!(reduced, "B'C'+BC+A+D");
//! ```
//!
//! Every stage is also available on its own:
//!
//! ```rust
//! use qmc_rs::dnf::ExpandedExpression;
//! use qmc_rs::reduce::Reduction;
//!
//! let expanded = ExpandedExpression::parse("A(B+C)").unwrap();
//! assert_eq!(expanded.as_str(), "B*A+C*A");
//! assert_eq!(expanded.all_variables(), vec!['A', 'B', 'C']);
//!
//! let r = Reduction::new("A(B+C)").unwrap();
//! assert_eq!(r.prime_implicants().len(), 2);
//! assert_eq!(r.to_string(), "AB+AC");
//! ```
//!
//! ## Pipeline
//!
//! - **[`lexer`]**: characters to [`token`]s, inserting elided `*`.
//! - **[`parser`]**: recursive descent into an [`ast::Node`] tree.
//! - **[`dnf`]**: De Morgan pushdown and distribution into a sum of products.
//! - **[`implicant`]**: product terms as ternary vectors with their minterms.
//! - **[`reduce`]**: prime implicants, covering table, and the final cover.
//!
//! The final cover is essential primes plus a greedy pick, so it is small
//! but not guaranteed minimal.

pub mod ast;
pub mod bitset;
pub mod dnf;
pub mod error;
pub mod implicant;
pub mod lexer;
pub mod parser;
pub mod reduce;
pub mod token;
pub mod types;

pub use crate::error::{Error, Result};
pub use crate::reduce::reduce;

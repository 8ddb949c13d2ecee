//! # Thurber Chain
//!
//! Shortest addition-chain length for an integer or vector target, via
//! Thurber's vector generalization of the classical addition-chain problem.
//!
//! ## Overview
//!
//! An addition chain for `x` is a sequence of vectors starting at the unit
//! basis where every later entry is the sum of two earlier ones (not
//! necessarily distinct) and some entry equals `x`. This crate finds the
//! length of the shortest such chain by depth-first search with
//! iteratively-increasing depth budgets, pruned by necessary-condition
//! bounds on how fast a chain's sum can grow.
//!
//! The pipeline is: **target vector → basis seed → depth-bounded DFS,
//! deepening on exhaustion → chain length**.

/// Vector algebra, componentwise dominance, and the `sum`-then-lex total order.
pub mod vector;
/// Pruning bounds (`lowerbound`, `bounds`, `retain`) and the stack mutator `backup`.
pub mod oracles;
/// The segment stack representation and the `stackchildren` candidate generator.
pub mod stack;
/// The iteratively-deepening search driver and its integer/vector front ends.
pub mod thurber;
/// Enumeration of the integer lattice, for batch-driving the search over a region.
pub mod space;
/// The crate's error type.
pub mod error;

pub use error::{Result, ThurberError};
pub use thurber::thurber;
pub use vector::Vector;

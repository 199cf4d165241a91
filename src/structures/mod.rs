//! Key structures: symbols, literals, and clauses.
//!
//! ## Formulas
//!
//! A formula is a sequence of [clauses](clause), interpreted as the conjunction of those clauses.
//! Each clause has at most two literals.
//!
//! Formulas do not have an implementation beyond a sequence of clauses.
//! The order of clauses matters, as a [refutation](crate::procedures::refutation) folds over the clauses in the order given.

pub mod clause;
pub mod literal;
pub mod symbol;

//! Procedures which derive clauses from clauses.
//!
//! - [resolution] computes the resolvent of two clauses.
//! - [refutation] folds resolution over a formula and the negation of a query.

pub mod refutation;
pub mod resolution;

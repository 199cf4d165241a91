//! A library for refuting the negation of a literal against a formula of short clauses.
//!
//! A formula is a sequence of clauses, each with at most two literals, written compactly, e.g. `C|P`, `!C|R`, or `!H`.
//! A literal is entailed by the formula if the negation of the literal, together with the formula, resolves to the empty clause.
//!
//! # Orientation
//!
//! The library is built around a [context].
//!
//! - Clauses are [parsed](builder) from text, and stored in a [clause database](db).
//! - A refutation [folds](procedures::refutation) [resolution](procedures::resolution) over the formula and the negated query.
//! - Each step of a refutation may be recorded in a [derivation].
//! - The outcome of a refutation is a [report](reports).
//!
//! Useful starting points, then, may be:
//! - The [resolution procedure](procedures::resolution), as the core of the library.
//! - The [structures] to familiarise yourself with literals and clauses.
//!
//! # Examples
//!
//! + Check whether `R` is entailed.
//!
//! ```rust
//! # use refute::config::Config;
//! # use refute::context::Context;
//! # use refute::reports::Report;
//! # use refute::structures::literal::Literal;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.add_clauses(["C|P", "!C|R", "!P|H", "!H"]).is_ok());
//!
//! let query = "R".parse::<Literal>().expect("a literal");
//! assert_eq!(the_context.refute(query), Ok(Report::Entailed));
//! ```
//!
//! + Resolve a pair of clauses directly.
//!
//! ```rust
//! # use refute::builder::parse_clause;
//! # use refute::procedures::resolution::resolvent;
//! let mut a = parse_clause("!A|B").expect("a clause");
//! let mut b = parse_clause("A|C").expect("a clause");
//!
//! assert_eq!(resolvent(&mut a, &mut b).to_string(), "B|C");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made, with targets to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//! No logger is provided by the library.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod derivation;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

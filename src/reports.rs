//! Reports on the outcome of a refutation.

use crate::structures::clause::Clause;

/// The outcome of a refutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// The negated query together with the formula resolved to the empty clause.
    Entailed,

    /// Resolution ended with the given, non-empty, clause.
    NotEntailed(Clause),
}

impl Report {
    /// The report of a refutation which ended with the given clause.
    pub fn from_final(clause: Clause) -> Self {
        match clause.is_empty() {
            true => Self::Entailed,
            false => Self::NotEntailed(clause),
        }
    }

    /// Whether the query is entailed.
    pub fn is_entailed(&self) -> bool {
        matches!(self, Self::Entailed)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed(clause) => write!(f, "Not entailed, with remainder {clause}"),
        }
    }
}

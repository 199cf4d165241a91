//! Clauses, aka. a pair of literal slots, interpreted as the disjunction of the literals present.
//!
//! Each slot holds a literal or is vacant, and so a clause has zero, one, or two literals.
//!
//! ```rust
//! # use refute::structures::clause::{Clause, Connective};
//! let clause = "!C|R".parse::<Clause>().expect("a clause");
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.connective(), Connective::Or);
//!
//! assert!(clause.contains_symbol('C'));
//! assert!(clause.contains_negation_of('C'));
//! assert!(!clause.contains_negation_of('R'));
//! ```
//!
//! - The empty clause has both slots vacant, and is always false (never true).
//! - Single literal clauses have the second slot vacant, when parsed.
//!   A clause derived by [resolution](crate::procedures::resolution) keeps whichever slot a literal survived in.
//! - The connective is recorded when a clause is parsed, and is not otherwise consulted.

use crate::{
    structures::{literal::Literal, symbol::Symbol},
    types::err::ParseError,
};

/// The character read between the two literals of a clause.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum Connective {
    /// No connective, as the clause has fewer than two literals.
    #[default]
    Empty,
    Or,
    And,
    Not,
}

impl Connective {
    /// The character of the connective, if any.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Or => Some('|'),
            Self::And => Some('&'),
            Self::Not => Some('!'),
        }
    }
}

impl TryFrom<char> for Connective {
    type Error = ParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '|' => Ok(Self::Or),
            '&' => Ok(Self::And),
            '!' => Ok(Self::Not),
            _ => Err(ParseError::Connective(Some(ch))),
        }
    }
}

/// A clause of at most two literals.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Clause {
    first: Option<Literal>,
    second: Option<Literal>,
    connective: Connective,
}

impl Clause {
    /// A clause from the given slots and connective.
    pub fn new(first: Option<Literal>, second: Option<Literal>, connective: Connective) -> Self {
        Self {
            first,
            second,
            connective,
        }
    }

    /// The clause containing only the given literal.
    pub fn unit(literal: Literal) -> Self {
        Self::new(Some(literal), None, Connective::Empty)
    }

    /// The clause containing exactly the two given literals.
    pub fn pair(first: Literal, second: Literal, connective: Connective) -> Self {
        Self::new(Some(first), Some(second), connective)
    }

    /// The empty clause.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The literal in the first slot, if any.
    pub fn first(&self) -> Option<Literal> {
        self.first
    }

    /// The literal in the second slot, if any.
    pub fn second(&self) -> Option<Literal> {
        self.second
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    /// The symbols of the first and second slot.
    pub fn symbols(&self) -> [Option<Symbol>; 2] {
        [
            self.first.map(|literal| literal.symbol()),
            self.second.map(|literal| literal.symbol()),
        ]
    }

    /// An iterator over the literals present, first slot first.
    pub fn literals(&self) -> impl Iterator<Item = Literal> {
        self.first.into_iter().chain(self.second)
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals().count()
    }

    /// The literal of the first occupied slot, if any.
    pub fn survivor(&self) -> Option<Literal> {
        self.first.or(self.second)
    }

    /// Whether some slot holds a literal with the given symbol, negated or not.
    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        self.literals().any(|literal| literal == symbol)
    }

    /// Whether some slot holds the negated literal of the given symbol.
    pub fn contains_negation_of(&self, symbol: Symbol) -> bool {
        self.literals()
            .any(|literal| literal == symbol && literal.is_negated())
    }

    /// Whether both slots are vacant.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// Vacates each slot holding the given symbol, regardless of negation.
    pub(crate) fn remove_symbol(&mut self, symbol: Symbol) {
        if self.first.is_some_and(|literal| literal == symbol) {
            self.first = None;
        }
        if self.second.is_some_and(|literal| literal == symbol) {
            self.second = None;
        }
    }
}

impl std::str::FromStr for Clause {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::builder::parse_clause(text)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.first, self.second) {
            (Some(first), Some(second)) => match self.connective.as_char() {
                Some(connective) => write!(f, "{first}{connective}{second}"),
                // Only a pair built with `Connective::Empty` reaches this.
                None => write!(f, "{first} {second}"),
            },
            (Some(literal), None) | (None, Some(literal)) => write!(f, "{literal}"),
            (None, None) => write!(f, "{{}}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_or_p() -> Clause {
        Clause::pair(
            Literal::new('C', false),
            Literal::new('P', false),
            Connective::Or,
        )
    }

    #[test]
    fn containment() {
        let clause = Clause::pair(
            Literal::new('C', true),
            Literal::new('R', false),
            Connective::Or,
        );

        assert!(clause.contains_symbol('C'));
        assert!(clause.contains_symbol('R'));
        assert!(!clause.contains_symbol('P'));

        assert!(clause.contains_negation_of('C'));
        assert!(!clause.contains_negation_of('R'));
        assert!(!clause.contains_negation_of('P'));
    }

    #[test]
    fn vacant_slots_never_match() {
        let empty = Clause::empty();

        for symbol in ['C', 'P', 'x', '_'] {
            assert!(!empty.contains_symbol(symbol));
            assert!(!empty.contains_negation_of(symbol));
        }

        let unit = Clause::unit(Literal::new('H', true));
        assert!(unit.second().is_none());
        assert!(unit.contains_negation_of('H'));
        assert!(!unit.contains_negation_of('P'));
    }

    #[test]
    fn removal_ignores_polarity() {
        let mut clause = Clause::pair(
            Literal::new('p', true),
            Literal::new('p', false),
            Connective::Or,
        );

        clause.remove_symbol('p');
        assert!(clause.is_empty());
    }

    #[test]
    fn removal_keeps_slots() {
        let mut clause = c_or_p();

        clause.remove_symbol('C');
        assert_eq!(clause.first(), None);
        assert_eq!(clause.second(), Some(Literal::new('P', false)));
        assert_eq!(clause.survivor(), Some(Literal::new('P', false)));
        assert_eq!(clause.size(), 1);

        clause.remove_symbol('Q');
        assert_eq!(clause.size(), 1);

        clause.remove_symbol('P');
        assert!(clause.is_empty());
        assert_eq!(clause.survivor(), None);
    }

    #[test]
    fn display() {
        assert_eq!(c_or_p().to_string(), "C|P");
        assert_eq!(Clause::unit(Literal::new('H', true)).to_string(), "!H");
        assert_eq!(Clause::empty().to_string(), "{}");

        let vacated_first = Clause::new(None, Some(Literal::new('R', false)), Connective::Or);
        assert_eq!(vacated_first.to_string(), "R");

        let unjoined = Clause::pair(
            Literal::new('C', false),
            Literal::new('P', true),
            Connective::Empty,
        );
        assert_eq!(unjoined.to_string(), "C !P");
    }

    #[test]
    fn connective_characters() {
        for ch in ['|', '&', '!'] {
            let connective = Connective::try_from(ch).expect("a connective");
            assert_eq!(connective.as_char(), Some(ch));
        }

        assert_eq!(Connective::try_from('^'), Err(ParseError::Connective(Some('^'))));
        assert_eq!(Connective::Empty.as_char(), None);
    }
}

//! Literals are symbols paired with a negation flag.
//!
//! A literal is written as zero or more negation markers (`!`) followed by exactly one symbol.
//! Any number of negation markers negates the literal, so `!!p` is read as `!p`.
//!
//! ```rust
//! # use refute::structures::literal::Literal;
//! let literal = "!C".parse::<Literal>().expect("a literal");
//!
//! assert_eq!(literal.symbol(), 'C');
//! assert!(literal.is_negated());
//!
//! assert!(!literal.negate().is_negated());
//! assert!(literal == 'C');
//! ```
//!
//! Literals are values, and each clause owns copies of its literals.
//! So, negating the literal under test is done either through [negate](Literal::negate), which returns a fresh literal, or by setting the flag of an owned literal with [set_negated](Literal::set_negated).

use crate::{
    structures::symbol::{is_symbol, Symbol, NEGATION},
    types::err::ParseError,
};

/// The representation of a literal as a symbol paired with a boolean.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Literal {
    /// The symbol of the literal.
    symbol: Symbol,

    /// Whether the literal is negated.
    negated: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a symbol with a negation flag.
    pub fn new(symbol: Symbol, negated: bool) -> Self {
        Self { symbol, negated }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Self {
            symbol: self.symbol,
            negated: !self.negated,
        }
    }

    /// The symbol of the literal.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Whether the literal is negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Sets the negation flag of the literal, leaving the symbol unchanged.
    pub fn set_negated(&mut self, negated: bool) {
        self.negated = negated
    }
}

/// Literals match a symbol regardless of negation.
impl PartialEq<Symbol> for Literal {
    fn eq(&self, other: &Symbol) -> bool {
        self.symbol == *other
    }
}

impl std::str::FromStr for Literal {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unmarked = token.trim_start_matches(NEGATION);
        let negated = unmarked.len() < token.len();

        let mut characters = unmarked.chars();
        match (characters.next(), characters.next()) {
            (None, _) if negated => Err(ParseError::Negation),
            (None, _) => Err(ParseError::Empty),
            (Some(symbol), None) if is_symbol(symbol) => Ok(Literal::new(symbol, negated)),
            _ => Err(ParseError::Symbol),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "{NEGATION}{}", self.symbol),
            false => write!(f, "{}", self.symbol),
        }
    }
}

//! Error types used in the library.
//!
//! - Parse errors are external, and arise from text which does not describe a literal or clause.
//! - Clause database errors are internal, and are unlikely to occur during use.
//!
//! Names of the error enums, for the most part, overlap with the structures they concern.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The kind of an error, wrapping the specific error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    ClauseDB(ClauseDBError),
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No literal was found, where some literal was required.
    Empty,

    /// A negation character was read, but no candidate for negation was found.
    Negation,

    /// Something other than a single symbol character followed the negation markers of a literal.
    Symbol,

    /// The character between the literals of a clause is not a connective.
    /// `None` if there was no such character.
    Connective(Option<char>),

    /// More than two literals were found in a clause.
    TooManyLiterals,

    /// Some issue reading a specific line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A key with no corresponding clause.
    MissingKey,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

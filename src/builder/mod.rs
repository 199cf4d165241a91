/*!
Parsing clauses from text.

A clause is written as one literal, or two literals with a connective character between them:

```text
clause     := literal [ connective literal ]
literal    := "!"* symbol
connective := "|" | "&" | "!"
```

Text is first scanned for literal tokens.
The first token gives the first literal, and the second token (if any) the second literal.
The connective is the first character of the text outside of both tokens.

```rust
# use refute::builder::parse_clause;
# use refute::structures::clause::Connective;
# use refute::types::err::ParseError;
let clause = parse_clause("!C|R").expect("a clause");
assert_eq!(clause.connective(), Connective::Or);

assert_eq!(parse_clause("||"), Err(ParseError::Empty));
assert_eq!(parse_clause("C^R"), Err(ParseError::Connective(Some('^'))));
```

As negation markers directly before a symbol belong to the literal, `p!q` is read as the literals `p` and `!q` with no connective, and so fails to parse.
*/

mod read;
mod tokens;

pub use read::read_clauses;

use crate::{
    misc::log::targets,
    structures::{
        clause::{Clause, Connective},
        literal::Literal,
    },
    types::err::ParseError,
};

/// Parses a literal, e.g. `!C`.
pub fn parse_literal(text: &str) -> Result<Literal, ParseError> {
    text.parse()
}

/// Parses a clause of at most two literals, e.g. `C|P` or `!H`.
pub fn parse_clause(text: &str) -> Result<Clause, ParseError> {
    let the_tokens = tokens::tokens(text);

    let clause = match the_tokens.as_slice() {
        [] => return Err(ParseError::Empty),

        [only] => Clause::unit(only.text.parse::<Literal>()?),

        [first, second] => {
            let connective = match tokens::first_untokened(text, &the_tokens) {
                Some(ch) => Connective::try_from(ch)?,
                None => return Err(ParseError::Connective(None)),
            };
            Clause::pair(
                first.text.parse::<Literal>()?,
                second.text.parse::<Literal>()?,
                connective,
            )
        }

        _ => return Err(ParseError::TooManyLiterals),
    };

    log::trace!(target: targets::PARSE, "Parsed '{text}' as {clause}");
    Ok(clause)
}

/// Parses each text as a clause, preserving order.
///
/// The first failure to parse is returned, and no clauses are.
pub fn parse_clause_list<S: AsRef<str>>(
    texts: impl IntoIterator<Item = S>,
) -> Result<Vec<Clause>, ParseError> {
    texts
        .into_iter()
        .map(|text| parse_clause(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negated_disjunction() {
        let clause = parse_clause("!C|R").expect("a clause");

        let first = clause.first().expect("a first literal");
        assert_eq!(first.symbol(), 'C');
        assert!(first.is_negated());

        let second = clause.second().expect("a second literal");
        assert_eq!(second.symbol(), 'R');
        assert!(!second.is_negated());

        assert_eq!(clause.connective(), Connective::Or);
    }

    #[test]
    fn unit() {
        let clause = parse_clause("!H").expect("a clause");

        assert_eq!(clause.first(), Some(Literal::new('H', true)));
        assert_eq!(clause.second(), None);
        assert_eq!(clause.connective(), Connective::Empty);
    }

    #[test]
    fn connectives() {
        assert_eq!(parse_clause("a&b").map(|c| c.connective()), Ok(Connective::And));
        assert_eq!(parse_clause("a! b").map(|c| c.connective()), Ok(Connective::Not));
        assert_eq!(parse_clause("a|!b").map(|c| c.connective()), Ok(Connective::Or));
    }

    #[test]
    fn connective_errors() {
        assert_eq!(parse_clause("a b"), Err(ParseError::Connective(Some(' '))));
        assert_eq!(parse_clause("ab"), Err(ParseError::Connective(None)));
        assert_eq!(parse_clause("a!b"), Err(ParseError::Connective(None)));
    }

    #[test]
    fn no_literal() {
        assert_eq!(parse_clause("||"), Err(ParseError::Empty));
        assert_eq!(parse_clause(""), Err(ParseError::Empty));
        assert_eq!(parse_clause("!!"), Err(ParseError::Empty));
    }

    #[test]
    fn too_many_literals() {
        assert_eq!(parse_clause("a|b|c"), Err(ParseError::TooManyLiterals));
    }

    #[test]
    fn repeated_symbol() {
        let clause = parse_clause("!C|C").expect("a clause");
        assert_eq!(clause.first(), Some(Literal::new('C', true)));
        assert_eq!(clause.second(), Some(Literal::new('C', false)));
    }

    #[test]
    fn list_preserves_order() {
        let clauses = parse_clause_list(["C|P", "!C|R", "!P|H", "!H"]).expect("clauses");

        let symbols = clauses
            .iter()
            .map(|clause| clause.first().map(|literal| literal.symbol()))
            .collect::<Vec<_>>();
        assert_eq!(symbols, vec![Some('C'), Some('C'), Some('P'), Some('H')]);
    }

    #[test]
    fn list_aborts() {
        assert_eq!(
            parse_clause_list(vec!["C|P", "||", "!H"]),
            Err(ParseError::Empty)
        );
    }
}

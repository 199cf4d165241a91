/*!
The clause database.

Clauses are stored against [keys](ClauseKey) together with their [source](ClauseSource).
Keys are stable: storing or removing some clause does not invalidate the key of any other clause.

The clauses of a formula are stored once, and are never mutated.
Refutations take copies, and store each resolvent as a fresh clause.
*/

use slotmap::{new_key_type, SlotMap};

use crate::{misc::log::targets, structures::clause::Clause, types::err::ClauseDBError};

new_key_type! {
    /// The key to a clause in the clause database.
    pub struct ClauseKey;
}

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause of the formula.
    Original,

    /// The (unit) clause of a negated query.
    Query,

    /// A clause derived via resolution.
    Resolution,
}

/// A clause, paired with its source.
#[derive(Clone, Debug)]
pub struct StoredClause {
    clause: Clause,
    source: ClauseSource,
}

impl StoredClause {
    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn source(&self) -> ClauseSource {
        self.source
    }
}

#[derive(Default)]
pub struct ClauseDB {
    clauses: SlotMap<ClauseKey, StoredClause>,
}

impl ClauseDB {
    /// Stores the clause, returning its key.
    pub fn store(&mut self, clause: Clause, source: ClauseSource) -> ClauseKey {
        let key = self.clauses.insert(StoredClause { clause, source });
        log::trace!(target: targets::CLAUSE_DB, "Stored {clause} ({source:?}) as {key:?}");
        key
    }

    pub fn get(&self, key: ClauseKey) -> Result<&StoredClause, ClauseDBError> {
        self.clauses.get(key).ok_or(ClauseDBError::MissingKey)
    }

    /// The count of all stored clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The count of stored clauses from the given source.
    pub fn count(&self, source: ClauseSource) -> usize {
        self.clauses
            .values()
            .filter(|stored| stored.source == source)
            .count()
    }

    /// Removes every clause which is not original.
    pub fn clear_derived(&mut self) {
        self.clauses
            .retain(|_, stored| stored.source == ClauseSource::Original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn store_and_get() {
        let mut clause_db = ClauseDB::default();
        let clause = Clause::unit(Literal::new('p', false));

        let key = clause_db.store(clause, ClauseSource::Original);

        let stored = clause_db.get(key).expect("a stored clause");
        assert_eq!(stored.clause(), &clause);
        assert_eq!(stored.source(), ClauseSource::Original);
    }

    #[test]
    fn clear_derived() {
        let mut clause_db = ClauseDB::default();
        let p = Clause::unit(Literal::new('p', false));

        let original = clause_db.store(p, ClauseSource::Original);
        let query = clause_db.store(p, ClauseSource::Query);
        let derived = clause_db.store(Clause::empty(), ClauseSource::Resolution);
        assert_eq!(clause_db.len(), 3);

        clause_db.clear_derived();

        assert_eq!(clause_db.len(), 1);
        assert_eq!(clause_db.count(ClauseSource::Original), 1);
        assert!(clause_db.get(original).is_ok());
        assert_eq!(clause_db.get(query).err(), Some(ClauseDBError::MissingKey));
        assert_eq!(clause_db.get(derived).err(), Some(ClauseDBError::MissingKey));
    }
}

/*!
The context, to which formulas are added and within which refutations take place.

A context owns:
- A [configuration](crate::config).
- A [clause database](crate::db), holding the formula and any derived clauses.
- A [derivation](crate::derivation), recording the steps of the most recent refutation.

# Example
```rust
# use refute::config::Config;
# use refute::context::Context;
# use refute::reports::Report;
# use refute::structures::literal::Literal;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_clauses(["C|P", "!C|R", "!P|H", "!H"]).is_ok());

let r = Literal::new('R', false);
assert_eq!(the_context.refute(r), Ok(Report::Entailed));
assert_eq!(the_context.derivation.step_count(), 4);

// The formula is unchanged by a refutation, and so may be queried again.
let c = Literal::new('C', false);
assert!(the_context.refute(c).is_ok_and(|report| !report.is_entailed()));
```
*/

use std::io::BufRead;

use crate::{
    builder::{parse_clause, parse_clause_list, read_clauses},
    config::Config,
    db::{ClauseDB, ClauseKey, ClauseSource},
    derivation::Derivation,
    misc::log::targets,
    procedures::refutation::{refute_with, Operand},
    reports::Report,
    structures::{clause::Clause, literal::Literal},
    types::err::ErrorKind,
};

pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The derivation of the most recent refutation.
    pub derivation: Derivation,

    /// Keys to the clauses of the formula, in order of addition.
    formula: Vec<ClauseKey>,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            clause_db: ClauseDB::default(),
            derivation: Derivation::default(),
            formula: Vec::default(),
        }
    }

    /// Parses and adds a clause to the formula.
    pub fn add_clause(&mut self, text: &str) -> Result<ClauseKey, ErrorKind> {
        let clause = parse_clause(text)?;
        Ok(self.add_parsed_clause(clause))
    }

    /// Adds a clause to the formula.
    pub fn add_parsed_clause(&mut self, clause: Clause) -> ClauseKey {
        let key = self.clause_db.store(clause, ClauseSource::Original);
        self.formula.push(key);
        key
    }

    /// Parses and adds each clause to the formula, in order.
    ///
    /// If some text fails to parse, no clause is added.
    pub fn add_clauses<S: AsRef<str>>(
        &mut self,
        texts: impl IntoIterator<Item = S>,
    ) -> Result<Vec<ClauseKey>, ErrorKind> {
        let clauses = parse_clause_list(texts)?;
        Ok(clauses
            .into_iter()
            .map(|clause| self.add_parsed_clause(clause))
            .collect())
    }

    /// Reads clauses, one per line, and adds each to the formula.
    ///
    /// See [read_clauses] for details on the format.
    pub fn read_clauses(&mut self, reader: impl BufRead) -> Result<Vec<ClauseKey>, ErrorKind> {
        let texts = read_clauses(reader)?;
        self.add_clauses(&texts)
    }

    /// Keys to the clauses of the formula, in order of addition.
    pub fn formula_keys(&self) -> &[ClauseKey] {
        &self.formula
    }

    /// Copies of the clauses of the formula, in order of addition.
    pub fn formula(&self) -> Result<Vec<Clause>, ErrorKind> {
        self.formula
            .iter()
            .map(|key| -> Result<Clause, ErrorKind> { Ok(*self.clause_db.get(*key)?.clause()) })
            .collect()
    }

    /// Refutes the negation of `query` against (a copy of) the formula.
    ///
    /// Clauses derived during any previous refutation are removed.
    /// If derivations are recorded, the clause of the negated query and each resolvent are stored.
    pub fn refute(&mut self, query: Literal) -> Result<Report, ErrorKind> {
        let formula = self.formula()?;

        self.clause_db.clear_derived();
        self.derivation = Derivation::default();

        if !self.config.record_derivation {
            return Ok(refute_with(formula, query, |_| {}));
        }

        let query_key = self
            .clause_db
            .store(Clause::unit(query.negate()), ClauseSource::Query);

        let formula_keys = &self.formula;
        let clause_db = &mut self.clause_db;
        let derivation = &mut self.derivation;
        let mut resolvent_keys: Vec<ClauseKey> = Vec::default();

        let report = refute_with(formula, query, |step| {
            let key_of = |operand: Operand| match operand {
                Operand::Given(index) => formula_keys[index],
                Operand::Query => query_key,
                Operand::Resolvent(index) => resolvent_keys[index],
            };
            let left = key_of(step.left);
            let right = key_of(step.right);

            let resolvent = clause_db.store(*step.resolvent, ClauseSource::Resolution);
            resolvent_keys.push(resolvent);
            derivation.add_resolution(left, right, resolvent);
        });

        log::debug!(target: targets::REFUTATION, "Recorded {} steps", self.derivation.step_count());
        Ok(report)
    }

    /// The clauses of each step of the most recent refutation, as left operand, right operand, and resolvent.
    pub fn resolution_steps(&self) -> Result<Vec<[Clause; 3]>, ErrorKind> {
        self.derivation
            .steps()
            .into_iter()
            .map(|step| -> Result<[Clause; 3], ErrorKind> {
                Ok([
                    *self.clause_db.get(step.left)?.clause(),
                    *self.clause_db.get(step.right)?.clause(),
                    *self.clause_db.get(step.resolvent)?.clause(),
                ])
            })
            .collect()
    }

    /// The clauses from which the final resolvent of the most recent refutation descends.
    pub fn premises(&self) -> Result<Vec<Clause>, ErrorKind> {
        let Some(last) = self.derivation.steps().last().copied() else {
            return Ok(Vec::default());
        };

        let mut keys = self.derivation.ancestors(last.resolvent);
        keys.sort_by_key(|key| self.position_of(*key));

        keys.into_iter()
            .map(|key| -> Result<Clause, ErrorKind> { Ok(*self.clause_db.get(key)?.clause()) })
            .collect()
    }

    /// Formula clauses by order of addition, followed by the negated query.
    fn position_of(&self, key: ClauseKey) -> usize {
        self.formula
            .iter()
            .position(|formula_key| *formula_key == key)
            .unwrap_or(self.formula.len())
    }
}

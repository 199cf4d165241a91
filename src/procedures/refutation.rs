/*!
Refutation of the negation of a query.

A query literal is entailed by a formula if the negation of the literal, together with the formula, resolves to the empty clause.

Resolution is folded over the formula from left to right:
- The first two clauses are resolved, with the first clause as the left operand.
- Each later clause is resolved with the running resolvent, with the clause as the left operand.
- Finally, the (unit) clause of the negated query is resolved with the running resolvent, again as the left operand.

A formula of a single clause begins with that clause as the running resolvent, and an empty formula leaves the negated query clause unresolved.

```rust
# use refute::builder::parse_clause_list;
# use refute::procedures::refutation::refute;
# use refute::structures::literal::Literal;
let formula = parse_clause_list(["C|P", "!C|R", "!P|H", "!H"]).expect("clauses");

let report = refute(formula, Literal::new('R', false));
assert!(report.is_entailed());
```

No search takes place, and so the refutation succeeds or fails on the order of the formula.
*/

use crate::{
    misc::log::targets,
    procedures::resolution::resolvent,
    reports::Report,
    structures::{clause::Clause, literal::Literal},
};

/// An operand of a resolution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The clause of the formula at the given index.
    Given(usize),

    /// The clause of the negated query.
    Query,

    /// The resolvent of the step at the given index.
    Resolvent(usize),
}

/// A resolution step, as observed during a refutation.
#[derive(Debug)]
pub struct Step<'s> {
    /// The index of the step, from zero.
    pub index: usize,

    pub left: Operand,

    pub right: Operand,

    pub resolvent: &'s Clause,
}

/// Refutes the negation of `query` against `formula`.
pub fn refute(formula: Vec<Clause>, query: Literal) -> Report {
    refute_with(formula, query, |_| {})
}

/// Refutes the negation of `query` against `formula`, calling `on_step` after each resolution.
pub fn refute_with(formula: Vec<Clause>, query: Literal, mut on_step: impl FnMut(Step)) -> Report {
    log::debug!(target: targets::REFUTATION, "Refuting {} against {} clauses", query.negate(), formula.len());

    let mut step_count = 0;
    let mut resolve = |(left, mut left_clause): (Operand, Clause),
                       (right, mut right_clause): (Operand, Clause)| {
        let the_resolvent = resolvent(&mut left_clause, &mut right_clause);
        on_step(Step {
            index: step_count,
            left,
            right,
            resolvent: &the_resolvent,
        });
        step_count += 1;
        (Operand::Resolvent(step_count - 1), the_resolvent)
    };

    let mut given = formula
        .into_iter()
        .enumerate()
        .map(|(index, clause)| (Operand::Given(index), clause));

    let running = match (given.next(), given.next()) {
        (Some(first), Some(second)) => {
            let initial = resolve(first, second);
            Some(given.fold(initial, |running, clause| resolve(clause, running)))
        }
        (first, _) => first,
    };

    let negated_query = (Operand::Query, Clause::unit(query.negate()));
    let (_, last) = match running {
        Some(running) => resolve(negated_query, running),
        None => negated_query,
    };

    let report = Report::from_final(last);
    log::debug!(target: targets::REFUTATION, "{report}");
    report
}

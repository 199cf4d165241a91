/*!
The resolvent of two clauses.

Given clauses *a* and *b*, a complementary pair is a literal of one clause and the negation of that literal in the other.
Resolution removes complementary pairs and combines whatever literals remain into a fresh disjunction.

The procedure is made of two passes, each of which eliminates at most one symbol:
1. The symbols of *a* are checked, first slot then second, for a negated occurrence in *b*.
   On the first match, the symbol is removed from both clauses.
2. The symbols of *b* (after the first pass) are checked, first slot then second, for a negated occurrence in *a*.
   Again, on the first match, the symbol is removed from both clauses.

Removal is by symbol, and vacates every slot of a clause holding the symbol, negated or not.
The resolvent is then the first surviving literal of *a* together with the first surviving literal of *b*.

```rust
# use refute::procedures::resolution::resolvent;
# use refute::structures::clause::Clause;
let mut a = "C|P".parse::<Clause>().expect("a clause");
let mut b = "!C|R".parse::<Clause>().expect("a clause");

let the_resolvent = resolvent(&mut a, &mut b);
assert_eq!(the_resolvent.to_string(), "P|R");
```

# Notes
- Both passes may fire, and so resolving `!p|q` with `p|!q` gives the empty clause rather than a tautology.
- At most one literal of each clause survives into the resolvent, so resolving clauses with no complementary pair drops the second literal of each.
- The operands are mutated, and are left holding whatever was not removed.
*/

use crate::{
    misc::log::targets,
    structures::{
        clause::{Clause, Connective},
        symbol::Symbol,
    },
};

/// The first present symbol of `symbols` which occurs negated in `other`.
fn complement_in(symbols: [Option<Symbol>; 2], other: &Clause) -> Option<Symbol> {
    symbols
        .into_iter()
        .flatten()
        .find(|symbol| other.contains_negation_of(*symbol))
}

fn eliminate(a: &mut Clause, b: &mut Clause, symbol: Symbol) {
    log::trace!(target: targets::RESOLUTION, "Eliminating {symbol} from {a} and {b}");
    a.remove_symbol(symbol);
    b.remove_symbol(symbol);
}

/// The resolvent of `a` and `b`, vacating eliminated slots of both.
pub fn resolvent(a: &mut Clause, b: &mut Clause) -> Clause {
    if let Some(symbol) = complement_in(a.symbols(), b) {
        eliminate(a, b, symbol);
    }

    if let Some(symbol) = complement_in(b.symbols(), a) {
        eliminate(a, b, symbol);
    }

    let the_resolvent = Clause::new(a.survivor(), b.survivor(), Connective::Or);
    log::trace!(target: targets::RESOLUTION, "Resolvent: {the_resolvent}");
    the_resolvent
}

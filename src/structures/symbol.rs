/*!
Symbols, aka. the names of propositional variables.

A symbol is a single character from the word class: alphanumeric, or an underscore.

```rust
# use refute::structures::symbol::is_symbol;
assert!(is_symbol('p'));
assert!(is_symbol('7'));
assert!(!is_symbol('|'));
assert!(!is_symbol('!'));
```
*/

/// A symbol, aka. a 'propositional variable'.
pub type Symbol = char;

/// The marker of a negated literal.
pub const NEGATION: char = '!';

/// Whether the character is a symbol.
pub fn is_symbol(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

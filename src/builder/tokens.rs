//! A scan of clause text for literal tokens.
//!
//! A token is a (possibly empty) run of negation markers directly followed by a symbol.
//! Tokens do not overlap, and are found from left to right, so `!p!!q` has the tokens `!p` and `!!q` and `pq` has the tokens `p` and `q`.
//! Negation markers not directly followed by a symbol belong to no token.

use std::ops::Range;

use crate::structures::symbol::{is_symbol, NEGATION};

/// A literal token, with its byte span in the scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub text: &'t str,
    pub span: Range<usize>,
}

/// The literal tokens of the text, in order.
pub(crate) fn tokens(text: &str) -> Vec<Token<'_>> {
    let mut the_tokens = Vec::default();
    let mut marker_start = None;

    for (index, ch) in text.char_indices() {
        match ch {
            NEGATION => {
                marker_start.get_or_insert(index);
            }

            _ if is_symbol(ch) => {
                let start = marker_start.take().unwrap_or(index);
                let end = index + ch.len_utf8();
                the_tokens.push(Token {
                    text: &text[start..end],
                    span: start..end,
                });
            }

            _ => marker_start = None,
        }
    }

    the_tokens
}

/// The first character of the text outside every token, if any.
pub(crate) fn first_untokened(text: &str, tokens: &[Token]) -> Option<char> {
    text.char_indices()
        .find(|(index, _)| !tokens.iter().any(|token| token.span.contains(index)))
        .map(|(_, ch)| ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        tokens(text).into_iter().map(|token| token.text).collect()
    }

    #[test]
    fn pairs() {
        assert_eq!(texts("C|P"), vec!["C", "P"]);
        assert_eq!(texts("!C|R"), vec!["!C", "R"]);
        assert_eq!(texts("!!a&!b"), vec!["!!a", "!b"]);
    }

    #[test]
    fn adjacent_symbols() {
        assert_eq!(texts("pq"), vec!["p", "q"]);
        assert_eq!(texts("p!q"), vec!["p", "!q"]);
    }

    #[test]
    fn stray_markers() {
        assert_eq!(texts("!|p"), vec!["p"]);
        assert_eq!(texts("p!"), vec!["p"]);
        assert!(texts("||").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn spans() {
        let the_tokens = tokens("!C|R");
        assert_eq!(the_tokens[0].span, 0..2);
        assert_eq!(the_tokens[1].span, 3..4);
    }

    #[test]
    fn untokened() {
        let text = "!C|R";
        assert_eq!(first_untokened(text, &tokens(text)), Some('|'));

        let text = "p! q";
        assert_eq!(first_untokened(text, &tokens(text)), Some('!'));

        let text = "p!q";
        assert_eq!(first_untokened(text, &tokens(text)), None);
    }
}

use std::io::BufRead;

use crate::{misc::log::targets, types::err::ParseError};

/// Lines beginning with this character are skipped.
const COMMENT: char = '#';

/// Reads clause texts, one per line.
///
/// Blank lines and comment lines (beginning with `#`) are skipped, and surrounding whitespace is trimmed.
/// The texts are not parsed.
///
/// ```rust
/// # use refute::builder::read_clauses;
/// let input = b"
/// ## The demonstration formula
/// C|P
///   !C|R
/// ";
///
/// let texts = read_clauses(input.as_slice()).expect("texts");
/// assert_eq!(texts, vec!["C|P", "!C|R"]);
/// ```
pub fn read_clauses(mut reader: impl BufRead) -> Result<Vec<String>, ParseError> {
    let mut buffer = String::with_capacity(64);
    let mut texts = Vec::default();
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(ParseError::Line(line_counter + 1)),
        }

        let line = buffer.trim();
        match line.chars().next() {
            None | Some(COMMENT) => {}
            Some(_) => texts.push(line.to_owned()),
        }
    }

    log::debug!(target: targets::PARSE, "Read {} clauses from {line_counter} lines", texts.len());
    Ok(texts)
}

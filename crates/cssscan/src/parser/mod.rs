//! Small parsers over selector and value text.
//!
//! The engine never parses whole stylesheets; the host hands it rules that
//! are already split into selectors and declarations. What remains is:
//!
//! - [`split_top_level`]: comma splitting that respects `()`, `[]` and quotes
//! - [`selectors`]: a tokenizer for the selector subset used by specificity
//!   counting and by the test fixture's matcher
//! - [`values`]: `var()` extraction and the zero-length default pattern

pub mod selectors;
pub mod values;

use crate::error::ScanError;

/// Splits `input` on `separator` at nesting depth zero.
///
/// Separators inside parentheses, brackets or quoted strings do not split,
/// so `a:not(.b, .c), d` yields `["a:not(.b, .c)", "d"]`. Pieces are trimmed
/// and empty pieces are dropped.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' | '\'' => match quote {
                Some(q) if q == c => quote = None,
                None => quote = Some(c),
                _ => {}
            },
            _ if quote.is_some() => {}
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if c == separator && depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Returns the text between a leading `open` and its matching `close`, plus
/// the input after the closing delimiter.
///
/// `input` must start with `open`. Quoted strings are skipped over.
pub(crate) fn take_balanced(
    input: &str,
    open: char,
    close: char,
) -> Result<(&str, &str), ScanError> {
    if !input.starts_with(open) {
        return Err(ScanError::InvalidSelector(input.to_string()));
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if let Some(q) = quote {
            match c {
                '\\' => escaped = true,
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' | '\'' => quote = Some(c),
            _ if c == open => depth += 1,
            _ if c == close => {
                depth -= 1;
                if depth == 0 {
                    let inner = &input[open.len_utf8()..i];
                    return Ok((inner, &input[i + close.len_utf8()..]));
                }
            }
            _ => {}
        }
    }

    Err(ScanError::UnterminatedFunction(input.to_string()))
}

//! Specificity counting over tokenized selectors.
//!
//! Functional pseudo-classes use a simplified model:
//!
//! - `:not(X)` and `:has(X)` count as if `X` were written in place
//!   (every branch of `X` is summed, not maximised)
//! - `:is(X)` is unwrapped the same way instead of counting as one
//!   pseudo-class, so `:is(.a .b)` is `(0,2,0)` and not `(0,1,0)`. This is an
//!   intentional departure from the scanner's earlier behaviour.
//! - `:where(X)` counts nothing
//!
//! Every other token follows the usual (ids, classes, elements) rules.

use crate::error::ScanError;
use crate::parser::selectors::{SelectorToken, tokenize};
use crate::parser::split_top_level;
use crate::types::Specificity;

const TRANSPARENT_PSEUDOS: [&str; 3] = ["not", "is", "has"];
const LEAKED_KEYWORDS: [&str; 4] = ["not", "where", "is", "has"];

fn count_argument(argument: &str) -> Result<Specificity, ScanError> {
    let mut total = Specificity::ZERO;
    for branch in split_top_level(argument, ',') {
        // Relative selectors inside :has() start with a combinator.
        let branch = branch.trim_start_matches(['>', '+', '~']).trim_start();
        total += try_calculate(branch)?;
    }
    Ok(total)
}

fn token_specificity(token: &SelectorToken) -> Result<Specificity, ScanError> {
    let specificity = match token {
        SelectorToken::Id(_) => Specificity::new(1, 0, 0),
        SelectorToken::Class(_) | SelectorToken::Attribute { .. } => Specificity::new(0, 1, 0),
        SelectorToken::PseudoClass { name, argument } => match (name.as_str(), argument) {
            ("where", _) => Specificity::ZERO,
            (name, Some(argument)) if TRANSPARENT_PSEUDOS.contains(&name) => {
                count_argument(argument)?
            }
            _ => Specificity::new(0, 1, 0),
        },
        SelectorToken::PseudoElement(_) => Specificity::new(0, 0, 1),
        SelectorToken::Type(name) => {
            if LEAKED_KEYWORDS
                .iter()
                .any(|keyword| name.eq_ignore_ascii_case(keyword))
            {
                Specificity::ZERO
            } else {
                Specificity::new(0, 0, 1)
            }
        }
        SelectorToken::Universal | SelectorToken::Combinator(_) => Specificity::ZERO,
    };
    Ok(specificity)
}

/// Computes the specificity of one selector branch.
pub fn try_calculate(branch: &str) -> Result<Specificity, ScanError> {
    let mut total = Specificity::ZERO;
    for token in tokenize(branch)? {
        total += token_specificity(&token)?;
    }
    Ok(total)
}

/// Like [`try_calculate`], but a malformed branch counts as `(0,0,0)`.
///
/// ```
/// use cssscan::{Specificity, calculate};
///
/// assert_eq!(calculate("#a.b.c div"), Specificity::new(1, 2, 1));
/// assert_eq!(calculate("a[href"), Specificity::ZERO);
/// ```
pub fn calculate(branch: &str) -> Specificity {
    try_calculate(branch).unwrap_or_else(|err| {
        log::trace!("specificity: treating '{}' as (0,0,0): {}", branch, err);
        Specificity::ZERO
    })
}

/// The highest specificity among the comma-separated branches of `selector_text`.
pub fn max_specificity(selector_text: &str) -> Specificity {
    split_top_level(selector_text, ',')
        .into_iter()
        .map(calculate)
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn where_contributes_nothing() {
        assert_eq!(calculate("a:where(#x, .y)"), Specificity::new(0, 0, 1));
    }

    #[test]
    fn transparent_pseudos_sum_their_arguments() {
        assert_eq!(calculate("a:not(.x, #y)"), Specificity::new(1, 1, 1));
        assert_eq!(calculate("li:has(> img.icon)"), Specificity::new(0, 1, 2));
    }

    #[test]
    fn is_unwraps_like_not() {
        assert_eq!(calculate(":is(.a .b)"), Specificity::new(0, 2, 0));
        assert_eq!(calculate(":is(.a .b)"), calculate(":not(.a .b)"));
    }

    #[test]
    fn max_over_branches() {
        assert_eq!(max_specificity("p, #main .x"), Specificity::new(1, 1, 0));
        assert_eq!(max_specificity(""), Specificity::ZERO);
    }
}

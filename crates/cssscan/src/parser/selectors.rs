//! Selector tokenizer.
//!
//! Covers the subset of selector grammar that specificity counting and the
//! headless fixture need: type, universal, `#id`, `.class`, `[attr]`,
//! `:pseudo-class`, `:pseudo-class(arg)`, `::pseudo-element`,
//! `::pseudo-element(arg)` and the four combinators. Arguments of functional
//! pseudo-classes are kept as raw text; callers tokenize them again when they
//! need to look inside. Pseudo-element arguments (`::part(label)`) are
//! consumed and dropped.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{anychar, char, multispace0},
    combinator::{map, opt, recognize},
    error::ErrorKind,
    multi::many1,
    sequence::{pair, preceded},
};

use crate::error::ScanError;
use crate::parser::take_balanced;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    /// Marks the last part of a complex selector.
    None,
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

/// How an attribute selector compares the attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeOperator {
    Exists,
    Equals,    // =
    Includes,  // ~=
    DashMatch, // |=
    Prefix,    // ^=
    Suffix,    // $=
    Substring, // *=
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorToken {
    Type(String),
    Universal,
    Id(String),
    Class(String),
    Attribute {
        name: String,
        operator: AttributeOperator,
        value: String,
    },
    PseudoClass {
        name: String,
        argument: Option<String>,
    },
    PseudoElement(String),
    Combinator(Combinator),
}

/// A run of simple selectors with no combinator between them (`a.b:hover`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<SelectorToken>,
}

/// A compound plus the combinator linking it to the next part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    pub combinator: Combinator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

/// Parses an identifier, resolving backslash escapes (`md\:flex` -> `md:flex`).
pub fn parse_ident(input: &str) -> IResult<&str, String> {
    map(
        recognize(many1(alt((
            take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()),
            recognize(pair(char('\\'), anychar)),
        )))),
        unescape,
    )(input)
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Takes a delimited block. Not starting with `open` is a recoverable
/// error; an unterminated block is a failure so `alt`/`opt` stop there.
pub(crate) fn delimited_block(input: &str, open: char, close: char) -> IResult<&str, &str> {
    if !input.starts_with(open) {
        return Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Char)));
    }
    take_balanced(input, open, close)
        .map(|(inner, rest)| (rest, inner))
        .map_err(|_| nom::Err::Failure(nom::error::Error::new(input, ErrorKind::Char)))
}

fn parenthesized(input: &str) -> IResult<&str, &str> {
    delimited_block(input, '(', ')')
}

fn bracketed(input: &str) -> IResult<&str, &str> {
    delimited_block(input, '[', ']')
}

fn parse_attribute(input: &str) -> IResult<&str, SelectorToken> {
    let (rest, content) = bracketed(input)?;
    let content = content.trim();

    const OPERATORS: [(&str, AttributeOperator); 6] = [
        ("~=", AttributeOperator::Includes),
        ("|=", AttributeOperator::DashMatch),
        ("^=", AttributeOperator::Prefix),
        ("$=", AttributeOperator::Suffix),
        ("*=", AttributeOperator::Substring),
        ("=", AttributeOperator::Equals),
    ];

    let found = content.find('=').map(|eq| {
        let op_start = if content[..eq].ends_with(|c| "~|^$*".contains(c)) {
            eq - 1
        } else {
            eq
        };
        let op_text = &content[op_start..eq + 1];
        let operator = OPERATORS
            .iter()
            .find(|(text, _)| *text == op_text)
            .map(|(_, op)| *op)
            .unwrap_or(AttributeOperator::Equals);
        (op_start, eq, operator)
    });

    let token = match found {
        Some((op_start, eq, operator)) => {
            let mut value = content[eq + 1..].trim();
            // Drop a trailing case-sensitivity flag: [type="a" i]
            if let Some(stripped) = value
                .strip_suffix(" i")
                .or_else(|| value.strip_suffix(" s"))
            {
                value = stripped.trim_end();
            }
            let value = value.trim_matches(|c| c == '"' || c == '\'');
            SelectorToken::Attribute {
                name: content[..op_start].trim().to_string(),
                operator,
                value: value.to_string(),
            }
        }
        None => SelectorToken::Attribute {
            name: content.to_string(),
            operator: AttributeOperator::Exists,
            value: String::new(),
        },
    };

    Ok((rest, token))
}

fn parse_pseudo(input: &str) -> IResult<&str, SelectorToken> {
    alt((
        map(
            preceded(tag("::"), pair(parse_ident, opt(parenthesized))),
            |(name, _)| SelectorToken::PseudoElement(name),
        ),
        map(
            preceded(char(':'), pair(parse_ident, opt(parenthesized))),
            |(name, argument)| SelectorToken::PseudoClass {
                name: name.to_ascii_lowercase(),
                argument: argument.map(|a| a.trim().to_string()),
            },
        ),
    ))(input)
}

/// Parses one simple selector.
pub fn parse_simple_selector(input: &str) -> IResult<&str, SelectorToken> {
    alt((
        map(preceded(char('#'), parse_ident), SelectorToken::Id),
        map(preceded(char('.'), parse_ident), SelectorToken::Class),
        parse_pseudo,
        parse_attribute,
        map(char('*'), |_| SelectorToken::Universal),
        map(parse_ident, SelectorToken::Type),
    ))(input)
}

fn parse_combinator(input: &str) -> IResult<&str, Combinator> {
    alt((
        map(char('>'), |_| Combinator::Child),
        map(char('+'), |_| Combinator::AdjacentSibling),
        map(char('~'), |_| Combinator::GeneralSibling),
    ))(input)
}

/// Tokenizes a single selector branch.
///
/// The branch must not contain top-level commas; split with
/// [`split_top_level`](crate::parser::split_top_level) first.
pub fn tokenize(input: &str) -> Result<Vec<SelectorToken>, ScanError> {
    let invalid = || ScanError::InvalidSelector(input.to_string());
    let mut rest = input.trim();
    let mut tokens: Vec<SelectorToken> = Vec::new();

    if rest.is_empty() {
        return Err(invalid());
    }

    while !rest.is_empty() {
        let (after_ws, ws) =
            multispace0::<&str, nom::error::Error<&str>>(rest).map_err(|_| invalid())?;
        let after_combinator = matches!(tokens.last(), Some(SelectorToken::Combinator(_)));

        if let Ok((after, combinator)) = parse_combinator(after_ws) {
            if tokens.is_empty() || after_combinator {
                return Err(invalid());
            }
            tokens.push(SelectorToken::Combinator(combinator));
            rest = after.trim_start();
            continue;
        }

        if !ws.is_empty() && !tokens.is_empty() && !after_combinator {
            tokens.push(SelectorToken::Combinator(Combinator::Descendant));
        }

        let (after, token) = parse_simple_selector(after_ws).map_err(|_| invalid())?;
        tokens.push(token);
        rest = after;
    }

    if matches!(tokens.last(), Some(SelectorToken::Combinator(_))) {
        return Err(invalid());
    }

    Ok(tokens)
}

/// Parses a branch into compounds linked by combinators.
pub fn parse_complex_selector(input: &str) -> Result<ComplexSelector, ScanError> {
    let mut parts = Vec::new();
    let mut current = CompoundSelector::default();

    for token in tokenize(input)? {
        match token {
            SelectorToken::Combinator(combinator) => {
                parts.push(SelectorPart {
                    compound: std::mem::take(&mut current),
                    combinator,
                });
            }
            other => current.selectors.push(other),
        }
    }

    parts.push(SelectorPart {
        compound: current,
        combinator: Combinator::None,
    });
    Ok(ComplexSelector { parts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_compound_with_descendant() {
        let tokens = tokenize("#a.b.c div").unwrap();
        assert_eq!(
            tokens,
            vec![
                SelectorToken::Id("a".into()),
                SelectorToken::Class("b".into()),
                SelectorToken::Class("c".into()),
                SelectorToken::Combinator(Combinator::Descendant),
                SelectorToken::Type("div".into()),
            ]
        );
    }

    #[test]
    fn explicit_combinator_swallows_whitespace() {
        let tokens = tokenize("ul  >  li + li").unwrap();
        assert_eq!(tokens[1], SelectorToken::Combinator(Combinator::Child));
        assert_eq!(tokens[3], SelectorToken::Combinator(Combinator::AdjacentSibling));
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn functional_pseudo_keeps_argument() {
        let tokens = tokenize("a:not(.x, [href])::before").unwrap();
        assert_eq!(
            tokens[1],
            SelectorToken::PseudoClass {
                name: "not".into(),
                argument: Some(".x, [href]".into()),
            }
        );
        assert_eq!(tokens[2], SelectorToken::PseudoElement("before".into()));
    }

    #[test]
    fn functional_pseudo_element_drops_argument() {
        let tokens = tokenize("my-card::part(label)").unwrap();
        assert_eq!(
            tokens,
            vec![
                SelectorToken::Type("my-card".into()),
                SelectorToken::PseudoElement("part".into()),
            ]
        );
        assert!(tokenize("::slotted(.x)").is_ok());
        assert!(tokenize("::highlight(x").is_err());
    }

    #[test]
    fn attribute_operators() {
        let tokens = tokenize("[data-kind^=\"card\" i]").unwrap();
        assert_eq!(
            tokens[0],
            SelectorToken::Attribute {
                name: "data-kind".into(),
                operator: AttributeOperator::Prefix,
                value: "card".into(),
            }
        );
    }

    #[test]
    fn escaped_class_names() {
        let tokens = tokenize(".md\\:flex").unwrap();
        assert_eq!(tokens, vec![SelectorToken::Class("md:flex".into())]);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(tokenize("").is_err());
        assert!(tokenize("> a").is_err());
        assert!(tokenize("a >").is_err());
        assert!(tokenize("a:not(b").is_err());
        assert!(tokenize("a, b").is_err());
    }

    #[test]
    fn complex_selector_parts() {
        let complex = parse_complex_selector("nav > a.active").unwrap();
        assert_eq!(complex.parts.len(), 2);
        assert_eq!(complex.parts[0].combinator, Combinator::Child);
        assert_eq!(complex.parts[1].combinator, Combinator::None);
        assert_eq!(complex.parts[1].compound.selectors.len(), 2);
    }
}

//! Scanners over computed value text.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0, multispace1, one_of},
    combinator::{all_consuming, opt, recognize, rest},
    multi::separated_list1,
    sequence::{pair, preceded, tuple},
};

use crate::error::ScanError;
use crate::parser::take_balanced;

/// One `var(--name[, fallback])` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarReference {
    pub name: String,
    pub fallback: Option<String>,
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn custom_property_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("--"), take_while(is_ident_char)))(input)
}

fn var_arguments(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    let (input, name) = preceded(multispace0, custom_property_name)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, fallback) = opt(preceded(char(','), rest))(input)?;
    Ok((input, (name, fallback)))
}

/// Finds every `var()` reference in `value`, including references nested in
/// another reference's fallback.
///
/// ```
/// use cssscan::parser::values::var_references;
///
/// let refs = var_references("calc(var(--gap, 8px) * 2)").unwrap();
/// assert_eq!(refs[0].name, "--gap");
/// assert_eq!(refs[0].fallback.as_deref(), Some("8px"));
/// ```
pub fn var_references(value: &str) -> Result<Vec<VarReference>, ScanError> {
    let mut refs = Vec::new();
    let mut offset = 0;

    while let Some(found) = value[offset..].find("var(") {
        let start = offset + found;
        offset = start + "var(".len();

        // `somevar(` is a different function.
        if value[..start].ends_with(is_ident_char) {
            continue;
        }

        let (inner, _) = take_balanced(&value[start + "var".len()..], '(', ')')
            .map_err(|_| ScanError::UnterminatedFunction(value.to_string()))?;

        if let Ok((_, (name, fallback))) = var_arguments(inner) {
            refs.push(VarReference {
                name: name.to_string(),
                fallback: fallback
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(str::to_string),
            });
        }
    }

    Ok(refs)
}

fn length_unit(input: &str) -> IResult<&str, &str> {
    alt((
        tag("px"),
        tag("%"),
        tag("rem"),
        tag("em"),
        tag("vmin"),
        tag("vmax"),
        tag("vh"),
        tag("vw"),
        tag("pt"),
        tag("ch"),
        tag("ex"),
    ))(input)
}

fn zero_length(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        take_while1(|c| c == '0'),
        opt(pair(char('.'), take_while1(|c| c == '0'))),
        length_unit,
    )))(input)
}

/// True for values made only of zero lengths: `0px`, `0% 0%`, `0px 0px 0px`.
///
/// A bare `0` is not a length and does not match.
pub fn is_zero_length(value: &str) -> bool {
    all_consuming(separated_list1(multispace1, zero_length))(value.trim()).is_ok()
}

//! A headless [`Document`] for tests.
//!
//! [`FixtureDocument`] is a small element tree with its own selector matcher
//! and a simplified cascade, so the engine can be exercised without a
//! browser. The cascade covers what the engine's tests need:
//!
//! - matched rules in specificity/source order, then the inline style
//! - shorthand declarations expanded to longhands
//! - `inherit`, inherited properties and custom properties inherited from
//!   the parent
//! - initial values from the default table, with bare `0` lengths reported
//!   as `0px` the way browsers serialize them
//!
//! `var()` is not substituted; computed values keep the declared text.
//!
//! # Example
//!
//! ```
//! use cssscan::Document;
//! use cssscan::testing::FixtureDocument;
//!
//! let mut doc = FixtureDocument::new();
//! doc.add_css("nav > a.active { color: red; }");
//! let nav = doc.append(doc.root(), "nav");
//! let link = doc.append(nav, "a.active");
//!
//! assert!(doc.matches(&link, "nav > a").unwrap());
//! assert_eq!(doc.computed_value(&link, "color").as_deref(), Some("red"));
//! ```

use std::collections::{HashMap, HashSet};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize, verify},
    multi::many0,
    sequence::{delimited, pair, terminated, tuple},
};

use crate::document::{CssRule, Document, GroupKind, Keyframe, Stylesheet};
use crate::engine::collector::collect;
use crate::engine::defaults::initial_value;
use crate::engine::matcher::matched_rules;
use crate::engine::shorthand::expand_shorthand;
use crate::error::ScanError;
use crate::parser::selectors::{
    AttributeOperator, Combinator, CompoundSelector, SelectorPart, SelectorToken,
    delimited_block, parse_complex_selector, parse_simple_selector,
};
use crate::parser::split_top_level;

/// Handle to a node in a [`FixtureDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct FixtureNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    inline: Vec<(String, String)>,
    states: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

const INHERITED_PROPERTIES: [&str; 16] = [
    "color",
    "cursor",
    "direction",
    "font-family",
    "font-size",
    "font-style",
    "font-variant",
    "font-weight",
    "letter-spacing",
    "line-height",
    "list-style-type",
    "text-align",
    "text-indent",
    "text-transform",
    "visibility",
    "white-space",
];

fn is_inherited(property: &str) -> bool {
    property.starts_with("--") || INHERITED_PROPERTIES.contains(&property)
}

/// An in-memory element tree implementing [`Document`].
#[derive(Debug, Clone)]
pub struct FixtureDocument {
    nodes: Vec<FixtureNode>,
    sheets: Vec<Stylesheet>,
    inactive_conditions: HashSet<String>,
    computed_overrides: HashMap<(NodeId, String), String>,
}

impl Default for FixtureDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureDocument {
    /// Creates a document holding only the `html` root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![FixtureNode {
                tag: "html".to_string(),
                ..FixtureNode::default()
            }],
            sheets: Vec::new(),
            inactive_conditions: HashSet::new(),
            computed_overrides: HashMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends an element described by a compound selector such as
    /// `div#main.card.active`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is not a tag optionally followed by `#id` and `.class`es.
    pub fn append(&mut self, parent: NodeId, element: &str) -> NodeId {
        let mut node = FixtureNode {
            parent: Some(parent),
            ..FixtureNode::default()
        };

        let mut rest = element.trim();
        while !rest.is_empty() {
            let (after, token) = parse_simple_selector(rest)
                .unwrap_or_else(|_| panic!("invalid fixture element: {element}"));
            match token {
                SelectorToken::Type(tag) => node.tag = tag,
                SelectorToken::Id(id) => node.id = Some(id),
                SelectorToken::Class(class) => node.classes.push(class),
                other => panic!("unsupported token {other:?} in fixture element: {element}"),
            }
            rest = after;
        }
        if node.tag.is_empty() {
            node.tag = "div".to_string();
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let attributes = &mut self.nodes[node.0].attributes;
        attributes.retain(|(n, _)| n != name);
        attributes.push((name.to_string(), value.to_string()));
    }

    /// Sets the `style` attribute, e.g. `"color: red; margin: 0"`.
    pub fn set_inline_style(&mut self, node: NodeId, style: &str) {
        self.nodes[node.0].inline = parse_declarations(style);
    }

    /// Marks a dynamic pseudo-class (`hover`, `focus`, ...) as active.
    pub fn set_state(&mut self, node: NodeId, state: &str) {
        self.nodes[node.0].states.push(state.to_string());
    }

    /// Forces the computed value of a property, bypassing the cascade.
    pub fn set_computed(&mut self, node: NodeId, property: &str, value: &str) {
        self.computed_overrides
            .insert((node, property.to_string()), value.to_string());
    }

    /// Makes a grouping condition evaluate to `matches`. Conditions hold by default.
    pub fn set_condition(&mut self, condition_text: &str, matches: bool) {
        if matches {
            self.inactive_conditions.remove(condition_text);
        } else {
            self.inactive_conditions.insert(condition_text.to_string());
        }
    }

    pub fn add_stylesheet(&mut self, sheet: Stylesheet) {
        self.sheets.push(sheet);
    }

    /// Adds an inline `<style>` sheet parsed from CSS text.
    ///
    /// # Panics
    ///
    /// Panics if the text has unbalanced braces.
    pub fn add_css(&mut self, css: &str) {
        let rules = parse_css(css).unwrap_or_else(|err| panic!("invalid fixture css: {err}"));
        self.sheets.push(Stylesheet::inline(rules));
    }

    /// Adds an external sheet parsed from CSS text.
    pub fn add_css_file(&mut self, href: &str, css: &str) {
        let rules = parse_css(css).unwrap_or_else(|err| panic!("invalid fixture css: {err}"));
        self.sheets.push(Stylesheet::external(href, rules));
    }

    fn node(&self, id: NodeId) -> &FixtureNode {
        &self.nodes[id.0]
    }

    fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        let node = self.node(id);
        match name {
            "id" => node.id.clone(),
            "class" if !node.classes.is_empty() => Some(node.classes.join(" ")),
            _ => node
                .attributes
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
        }
    }

    fn previous_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let Some(parent) = self.node(id).parent else {
            return Vec::new();
        };
        let siblings = &self.node(parent).children;
        let position = siblings.iter().position(|s| *s == id).unwrap_or(0);
        siblings[..position].iter().rev().copied().collect()
    }

    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.node(parent).parent;
        }
        ancestors
    }

    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.node(next).children.iter().rev().copied());
        }
        out
    }

    fn matches_attribute(
        &self,
        id: NodeId,
        name: &str,
        operator: AttributeOperator,
        expected: &str,
    ) -> bool {
        let Some(actual) = self.attribute(id, name) else {
            return false;
        };
        match operator {
            AttributeOperator::Exists => true,
            AttributeOperator::Equals => actual == expected,
            AttributeOperator::Includes => actual.split_whitespace().any(|w| w == expected),
            AttributeOperator::DashMatch => {
                actual == expected || actual.starts_with(&format!("{expected}-"))
            }
            AttributeOperator::Prefix => !expected.is_empty() && actual.starts_with(expected),
            AttributeOperator::Suffix => !expected.is_empty() && actual.ends_with(expected),
            AttributeOperator::Substring => !expected.is_empty() && actual.contains(expected),
        }
    }

    fn matches_pseudo_class(
        &self,
        id: NodeId,
        name: &str,
        argument: Option<&str>,
    ) -> Result<bool, ScanError> {
        let node = self.node(id);
        let matched = match (name, argument) {
            ("root", None) => node.parent.is_none(),
            ("not", Some(arg)) => !self.matches_any(id, arg)?,
            ("is" | "where", Some(arg)) => self.matches_any(id, arg)?,
            ("has", Some(arg)) => {
                let mut found = false;
                for branch in split_top_level(arg, ',') {
                    let (candidates, branch) = match branch.strip_prefix('>') {
                        Some(rest) => (node.children.clone(), rest.trim_start()),
                        None => (self.descendants(id), branch),
                    };
                    for candidate in candidates {
                        if self.matches_branch(candidate, branch)? {
                            found = true;
                        }
                    }
                }
                found
            }
            ("first-child", None) => self.previous_siblings(id).is_empty(),
            ("last-child", None) => node.parent.is_some_and(|p| {
                self.node(p).children.last() == Some(&id)
            }),
            ("only-child", None) => node
                .parent
                .is_some_and(|p| self.node(p).children.len() == 1),
            ("empty", None) => node.children.is_empty(),
            (state, None) => node.states.iter().any(|s| s == state),
            _ => false,
        };
        Ok(matched)
    }

    fn matches_compound(
        &self,
        id: NodeId,
        compound: &CompoundSelector,
    ) -> Result<bool, ScanError> {
        let node = self.node(id);
        for selector in &compound.selectors {
            let matched = match selector {
                SelectorToken::Type(tag) => node.tag.eq_ignore_ascii_case(tag),
                SelectorToken::Universal => true,
                SelectorToken::Id(name) => node.id.as_deref() == Some(name.as_str()),
                SelectorToken::Class(class) => node.classes.contains(class),
                SelectorToken::Attribute {
                    name,
                    operator,
                    value,
                } => self.matches_attribute(id, name, *operator, value),
                SelectorToken::PseudoClass { name, argument } => {
                    self.matches_pseudo_class(id, name, argument.as_deref())?
                }
                SelectorToken::PseudoElement(_) => false,
                SelectorToken::Combinator(_) => false,
            };
            if !matched {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Right-to-left match of `parts[..=last]` with `parts[last]` on `id`.
    fn matches_parts(
        &self,
        id: NodeId,
        parts: &[SelectorPart],
        last: usize,
    ) -> Result<bool, ScanError> {
        if !self.matches_compound(id, &parts[last].compound)? {
            return Ok(false);
        }
        if last == 0 {
            return Ok(true);
        }

        let previous = last - 1;
        let candidates: Vec<NodeId> = match parts[previous].combinator {
            Combinator::Child => self.node(id).parent.into_iter().collect(),
            Combinator::Descendant => self.ancestors(id),
            Combinator::AdjacentSibling => {
                self.previous_siblings(id).into_iter().take(1).collect()
            }
            Combinator::GeneralSibling => self.previous_siblings(id),
            Combinator::None => Vec::new(),
        };

        for candidate in candidates {
            if self.matches_parts(candidate, parts, previous)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn matches_branch(&self, id: NodeId, branch: &str) -> Result<bool, ScanError> {
        let complex = parse_complex_selector(branch)?;
        self.matches_parts(id, &complex.parts, complex.parts.len() - 1)
    }

    fn matches_any(&self, id: NodeId, selector_list: &str) -> Result<bool, ScanError> {
        for branch in split_top_level(selector_list, ',') {
            if self.matches_branch(id, branch)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn cascaded_value(&self, id: NodeId, property: &str) -> Option<String> {
        let index = collect(self);
        let node = self.node(id);

        let declared = matched_rules(self, &id, &index)
            .into_iter()
            .flat_map(|m| m.rule.declarations.clone())
            .chain(node.inline.iter().cloned());

        let mut winner = None;
        for (prop, value) in declared {
            for longhand in expand_shorthand(&prop, &value) {
                if longhand.prop == property {
                    winner = Some(longhand.value);
                }
            }
        }
        winner
    }
}

impl Document for FixtureDocument {
    type Node = NodeId;

    fn stylesheets(&self) -> Vec<Stylesheet> {
        self.sheets.clone()
    }

    fn matches(&self, node: &NodeId, selector: &str) -> Result<bool, ScanError> {
        self.matches_branch(*node, selector)
    }

    fn computed_value(&self, node: &NodeId, property: &str) -> Option<String> {
        if let Some(value) = self.computed_overrides.get(&(*node, property.to_string())) {
            return Some(value.clone());
        }

        let parent = self.node(*node).parent;
        let from_parent = || parent.and_then(|p| self.computed_value(&p, property));

        let value = match self.cascaded_value(*node, property) {
            Some(value) if value == "inherit" => from_parent(),
            Some(value) => Some(value),
            None if is_inherited(property) => {
                from_parent().or_else(|| initial_value(property).map(str::to_string))
            }
            None => initial_value(property).map(str::to_string),
        }?;

        let is_length = initial_value(property).is_some_and(|initial| initial.ends_with("px"));
        if value == "0" && is_length {
            return Some("0px".to_string());
        }
        Some(value)
    }

    fn inline_style(&self, node: &NodeId) -> Vec<(String, String)> {
        self.node(*node).inline.clone()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.node(*node).parent
    }

    fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.node(*node).children.clone()
    }

    fn tag_name(&self, node: &NodeId) -> String {
        self.node(*node).tag.clone()
    }

    fn id(&self, node: &NodeId) -> Option<String> {
        self.node(*node).id.clone()
    }

    fn classes(&self, node: &NodeId) -> Vec<String> {
        self.node(*node).classes.clone()
    }

    fn condition_matches(&self, condition_text: &str) -> bool {
        !self.inactive_conditions.contains(condition_text)
    }
}

/// `/* ... */`
fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("/*"), take_until("*/"), tag("*/"))(input)
}

fn source_pieces(input: &str) -> IResult<&str, Vec<&str>> {
    many0(alt((
        map(comment, |_| ""),
        take_till1(|c| c == '/'),
        tag("/"),
    )))(input)
}

fn strip_comments(source: &str) -> String {
    match source_pieces(source) {
        Ok((_, pieces)) => pieces.concat(),
        Err(_) => source.to_string(),
    }
}

/// A `{ ... }` block with balanced nested braces.
fn braced(input: &str) -> IResult<&str, &str> {
    delimited_block(input, '{', '}')
}

/// Takes a value up to the next `;` outside parentheses and quotes.
fn declared_value(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => return Ok((&input[i..], &input[..i])),
            _ => {}
        }
    }
    Ok((&input[input.len()..], input))
}

/// `prop: value;`. Empty properties or values yield `None`.
fn declaration(input: &str) -> IResult<&str, Option<(String, String)>> {
    let (input, _) = multispace0(input)?;
    let (input, property) =
        take_till1(|c: char| c == ':' || c == ';' || c.is_whitespace())(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, raw) = terminated(declared_value, opt(char(';')))(input)?;

    let raw = raw.trim();
    let raw = raw.strip_suffix("!important").unwrap_or(raw).trim();
    if raw.is_empty() {
        return Ok((input, None));
    }
    Ok((input, Some((property.to_string(), raw.to_string()))))
}

/// Skips text that is not a declaration, up to and including the next `;`.
fn skipped_declaration(input: &str) -> IResult<&str, Option<(String, String)>> {
    map(
        verify(
            recognize(pair(declared_value, opt(char(';')))),
            |skipped: &str| !skipped.is_empty(),
        ),
        |_| None,
    )(input)
}

fn declaration_list(input: &str) -> IResult<&str, Vec<Option<(String, String)>>> {
    many0(alt((declaration, skipped_declaration)))(input)
}

/// Parses `prop: value; prop: value` into pairs, dropping `!important`.
pub fn parse_declarations(block: &str) -> Vec<(String, String)> {
    match declaration_list(block) {
        Ok((_, declarations)) => declarations.into_iter().flatten().collect(),
        Err(_) => Vec::new(),
    }
}

/// `50% { opacity: 0.5 }`
fn keyframe(input: &str) -> IResult<&str, Keyframe> {
    let (input, _) = multispace0(input)?;
    let (input, key_text) = take_till1(|c| c == '{' || c == '}')(input)?;
    let (input, body) = braced(input)?;
    Ok((
        input,
        Keyframe {
            key_text: key_text.trim().to_string(),
            declarations: parse_declarations(body),
        },
    ))
}

fn group_kind(prelude: &str) -> Option<(GroupKind, &str)> {
    [
        GroupKind::Media,
        GroupKind::Supports,
        GroupKind::Container,
        GroupKind::Other,
    ]
    .into_iter()
    .find_map(|kind| {
        prelude
            .strip_prefix(kind.keyword())
            .map(|condition| (kind, condition.trim()))
    })
}

/// A block-less at-rule such as `@import url(a.css);` or `@layer a, b;`.
fn at_statement(input: &str) -> IResult<&str, CssRule> {
    map(
        recognize(tuple((
            char('@'),
            take_till(|c| c == ';' || c == '{' || c == '}'),
            char(';'),
        ))),
        |_| CssRule::Other,
    )(input)
}

fn block_rule(input: &str) -> IResult<&str, CssRule> {
    let (input, prelude) = take_till1(|c| c == '{' || c == '}' || c == ';')(input)?;
    let (input, body) = braced(input)?;
    let prelude = prelude.trim();

    let rule = if let Some(name) = prelude.strip_prefix("@keyframes") {
        let (_, frames) = terminated(many0(keyframe), multispace0)(body)?;
        CssRule::Keyframes {
            name: name.trim().to_string(),
            frames,
        }
    } else if let Some((kind, condition)) = group_kind(prelude) {
        let (_, rules) = rule_list(body)?;
        CssRule::Group {
            kind,
            condition_text: condition.to_string(),
            rules,
        }
    } else if prelude.starts_with('@') {
        CssRule::Other
    } else {
        CssRule::Style {
            selector_text: prelude.to_string(),
            declarations: parse_declarations(body),
        }
    };
    Ok((input, rule))
}

fn rule(input: &str) -> IResult<&str, CssRule> {
    let (input, _) = multispace0(input)?;
    alt((at_statement, block_rule))(input)
}

fn rule_list(input: &str) -> IResult<&str, Vec<CssRule>> {
    terminated(many0(rule), multispace0)(input)
}

/// Parses CSS text into host rules. Only what fixtures need: style rules,
/// grouping rules and `@keyframes`.
///
/// An unclosed block is an error; trailing text without a block is ignored.
pub fn parse_css(css: &str) -> Result<Vec<CssRule>, ScanError> {
    let source = strip_comments(css);
    match rule_list(&source) {
        Ok((_, rules)) => Ok(rules),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            Err(ScanError::UnterminatedFunction(err.input.trim().to_string()))
        }
        Err(nom::Err::Incomplete(_)) => Err(ScanError::UnterminatedFunction(css.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_groups_and_keyframes() {
        let rules = parse_css(
            "/* c */ a { color: red !important; }
             @media (min-width: 600px) { .x { margin: 0 } }
             @keyframes fade { from { opacity: 0 } to { opacity: 1 } }",
        )
        .unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0], CssRule::style("a", &[("color", "red")]));
        assert_eq!(
            rules[1],
            CssRule::media(
                "(min-width: 600px)",
                vec![CssRule::style(".x", &[("margin", "0")])]
            )
        );
        match &rules[2] {
            CssRule::Keyframes { name, frames } => {
                assert_eq!(name, "fade");
                assert_eq!(frames.len(), 2);
                assert_eq!(frames[1].key_text, "to");
            }
            other => panic!("expected keyframes, got {other:?}"),
        }
    }

    #[test]
    fn parses_statements_and_awkward_values() {
        let rules = parse_css(
            r#"@import url("base.css");
               @layer reset, theme;
               a::after { content: "{ ; }"; background: url(data:a;b) /* x */; }
               p { color; margin:  ; padding: 2px !important }
               @font-face { font-family: x; }"#,
        )
        .unwrap();
        assert_eq!(rules.len(), 5);
        assert_eq!(rules[0], CssRule::Other);
        assert_eq!(rules[1], CssRule::Other);
        assert_eq!(
            rules[2],
            CssRule::style(
                "a::after",
                &[("content", "\"{ ; }\""), ("background", "url(data:a;b)")]
            )
        );
        assert_eq!(rules[3], CssRule::style("p", &[("padding", "2px")]));
        assert_eq!(rules[4], CssRule::Other);
    }

    #[test]
    fn layer_blocks_become_plain_groups() {
        let rules = parse_css("@layer base { .x { color: red } }").unwrap();
        assert!(matches!(
            &rules[0],
            CssRule::Group { kind: GroupKind::Other, condition_text, rules }
                if condition_text == "base" && rules.len() == 1
        ));
    }

    #[test]
    fn unclosed_block_is_an_error() {
        assert!(matches!(
            parse_css("a { color: red; } b { color: blue;"),
            Err(ScanError::UnterminatedFunction(_))
        ));
        assert_eq!(parse_css("  ").unwrap(), Vec::new());
    }

    #[test]
    fn sibling_and_child_combinators() {
        let mut doc = FixtureDocument::new();
        let list = doc.append(doc.root(), "ul");
        let first = doc.append(list, "li.a");
        let second = doc.append(list, "li.b");

        assert!(doc.matches(&second, "li.a + li").unwrap());
        assert!(doc.matches(&second, "li.a ~ .b").unwrap());
        assert!(!doc.matches(&first, "li + li").unwrap());
        assert!(doc.matches(&first, "html ul > li:first-child").unwrap());
        assert!(doc.matches(&list, "ul:has(> li.b)").unwrap());
        assert!(doc.matches(&second, "li:not(.a)").unwrap());
        assert!(doc.matches(&doc.root(), ":root").unwrap());
        assert!(doc.matches(&first, "li::before").is_ok_and(|m| !m));
        assert!(doc.matches(&first, "li[").is_err());
    }

    #[test]
    fn attribute_selectors() {
        let mut doc = FixtureDocument::new();
        let link = doc.append(doc.root(), "a");
        doc.set_attribute(link, "href", "https://example.com/docs");
        doc.set_attribute(link, "lang", "en-US");

        assert!(doc.matches(&link, "a[href^=\"https\"]").unwrap());
        assert!(doc.matches(&link, "[href$=docs]").unwrap());
        assert!(doc.matches(&link, "[lang|=en]").unwrap());
        assert!(!doc.matches(&link, "[title]").unwrap());
    }

    #[test]
    fn cascade_prefers_specificity_then_order_then_inline() {
        let mut doc = FixtureDocument::new();
        doc.add_css("#x { color: blue; } p { color: red; } p { color: green; }");
        let para = doc.append(doc.root(), "p");
        let identified = doc.append(doc.root(), "p#x");

        assert_eq!(doc.computed_value(&para, "color").as_deref(), Some("green"));
        assert_eq!(doc.computed_value(&identified, "color").as_deref(), Some("blue"));

        doc.set_inline_style(identified, "color: black");
        assert_eq!(doc.computed_value(&identified, "color").as_deref(), Some("black"));
    }

    #[test]
    fn inheritance_and_initial_values() {
        let mut doc = FixtureDocument::new();
        doc.add_css(":root { --gap: 8px; color: navy; } div { margin: 0; }");
        let div = doc.append(doc.root(), "div");

        assert_eq!(doc.computed_value(&div, "--gap").as_deref(), Some("8px"));
        assert_eq!(doc.computed_value(&div, "color").as_deref(), Some("navy"));
        assert_eq!(doc.computed_value(&div, "margin-left").as_deref(), Some("0px"));
        assert_eq!(doc.computed_value(&div, "position").as_deref(), Some("static"));
        assert_eq!(doc.computed_value(&div, "outline-color"), None);
    }
}

use cssscan::engine::specificity::max_specificity;
use cssscan::parser::selectors::{Combinator, SelectorToken, parse_complex_selector, tokenize};
use cssscan::{ScanError, Specificity, calculate, try_calculate};

// ============================================================================
// Basic counting
// ============================================================================

#[test]
fn test_single_tokens() {
    assert_eq!(calculate("div"), Specificity::new(0, 0, 1));
    assert_eq!(calculate(".card"), Specificity::new(0, 1, 0));
    assert_eq!(calculate("#main"), Specificity::new(1, 0, 0));
    assert_eq!(calculate("*"), Specificity::ZERO);
    assert_eq!(calculate("[href]"), Specificity::new(0, 1, 0));
}

#[test]
fn test_compound_and_complex() {
    assert_eq!(calculate("#a .b c"), Specificity::new(1, 1, 1));
    assert_eq!(calculate("ul > li + li ~ li"), Specificity::new(0, 0, 4));
    assert_eq!(
        calculate("nav#top a.link[target=_blank]:hover"),
        Specificity::new(1, 3, 2)
    );
}

#[test]
fn test_pseudo_elements_count_as_elements() {
    assert_eq!(calculate("p::first-line"), Specificity::new(0, 0, 2));
    assert_eq!(calculate("a:hover::after"), Specificity::new(0, 1, 2));
}

#[test]
fn test_functional_pseudo_elements() {
    assert_eq!(calculate("my-card::part(label)"), Specificity::new(0, 0, 2));
    assert_eq!(calculate("::slotted(.x)"), Specificity::new(0, 0, 1));
    assert_eq!(calculate("::highlight(x)"), Specificity::new(0, 0, 1));
    assert!(try_calculate("::part(label").is_err());
}

// ============================================================================
// Functional pseudo-classes
// ============================================================================

#[test]
fn test_is_and_not_sum_branches() {
    assert_eq!(calculate("li:is(.a, #b)"), Specificity::new(1, 1, 1));
    assert_eq!(calculate(":not(p)"), Specificity::new(0, 0, 1));
}

#[test]
fn test_where_is_zero() {
    assert_eq!(calculate(":where(#x) p"), Specificity::new(0, 0, 1));
    assert_eq!(calculate(":where(.a, .b)"), Specificity::ZERO);
}

#[test]
fn test_nested_functions() {
    assert_eq!(
        calculate("div:not(:is(.a, .b))"),
        Specificity::new(0, 2, 1)
    );
}

#[test]
fn test_escaped_identifiers() {
    assert_eq!(calculate(".md\\:flex"), Specificity::new(0, 1, 0));
    let tokens = tokenize(".md\\:flex").unwrap();
    assert_eq!(tokens, vec![SelectorToken::Class("md:flex".to_string())]);
}

// ============================================================================
// Selector lists and errors
// ============================================================================

#[test]
fn test_max_over_selector_list() {
    assert_eq!(
        max_specificity("a, .b .c, #d"),
        Specificity::new(1, 0, 0)
    );
    assert_eq!(max_specificity("a:is(.x, .y), p"), Specificity::new(0, 2, 1));
}

#[test]
fn test_malformed_selectors() {
    assert!(matches!(
        try_calculate("a[href"),
        Err(ScanError::InvalidSelector(_)) | Err(ScanError::UnterminatedFunction(_))
    ));
    assert!(try_calculate("a >").is_err());
    assert!(try_calculate("").is_err());
    assert_eq!(calculate("a >"), Specificity::ZERO);
}

#[test]
fn test_ordering_is_lexicographic() {
    let mut all = vec![
        calculate("#x"),
        calculate("div div div div"),
        calculate(".a.b"),
        calculate(".a div"),
    ];
    all.sort();
    assert_eq!(
        all.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["(0,0,4)", "(0,1,1)", "(0,2,0)", "(1,0,0)"]
    );
}

#[test]
fn test_complex_selector_parts() {
    let complex = parse_complex_selector("main > .card p").unwrap();
    let combinators: Vec<Combinator> = complex.parts.iter().map(|p| p.combinator).collect();
    assert_eq!(
        combinators,
        vec![Combinator::Child, Combinator::Descendant, Combinator::None]
    );
}

use cssscan::document::{CssRule, GroupKind, Stylesheet};
use cssscan::report::source_report;
use cssscan::testing::{FixtureDocument, parse_css};
use cssscan::{ScanError, Specificity, collect, matched_rules, matches_selector};

fn page() -> FixtureDocument {
    let mut doc = FixtureDocument::new();
    doc.add_css(
        r#"
        .card { color: red; }
        @media (max-width: 600px) {
            .card { color: blue; }
        }
        @supports (display: grid) {
            .card { display: grid; }
        }
        @font-face { font-family: x; src: url(x.woff); }
        "#,
    );
    doc.add_stylesheet(Stylesheet::cross_origin("https://cdn.example.com/lib.css"));
    doc.add_css_file(
        "/app.css",
        r#"
        div.card { padding: 4px; }
        @keyframes pulse { from { opacity: 1 } to { opacity: 0.5 } }
        "#,
    );
    doc
}

// ============================================================================
// Flattening
// ============================================================================

#[test]
fn test_rules_are_flattened_in_order() {
    let index = collect(&page());
    let selectors: Vec<&str> = index.rules.iter().map(|r| r.selector_text.as_str()).collect();
    assert_eq!(selectors, vec![".card", ".card", ".card", "div.card"]);

    let orders: Vec<usize> = index.rules.iter().map(|r| r.source_order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3]);
}

#[test]
fn test_condition_text_is_recorded() {
    let index = collect(&page());
    assert_eq!(index.rules[0].condition_text, None);
    assert_eq!(
        index.rules[1].condition_text.as_deref(),
        Some("(max-width: 600px)")
    );
    assert_eq!(
        index.rules[2].condition_text.as_deref(),
        Some("(display: grid)")
    );
    assert!(index.rules.iter().all(|r| r.condition_matches));
}

#[test]
fn test_nearest_condition_text_is_recorded() {
    let rules = parse_css(
        "@media print { @supports (display: grid) { .x { display: grid; } } }",
    )
    .unwrap();
    assert!(matches!(
        &rules[0],
        CssRule::Group { kind: GroupKind::Media, rules, .. } if rules.len() == 1
    ));

    let mut doc = FixtureDocument::new();
    doc.add_stylesheet(Stylesheet::inline(rules));
    let index = collect(&doc);
    assert_eq!(
        index.rules[0].condition_text.as_deref(),
        Some("(display: grid)")
    );
    assert!(index.rules[0].condition_matches);
}

#[test]
fn test_failed_outer_condition_excludes_nested_rule() {
    let mut doc = FixtureDocument::new();
    doc.add_css("@media print { @supports (display: grid) { .x { display: grid; } } }");
    doc.set_condition("print", false);
    let node = doc.append(doc.root(), "div.x");

    let index = collect(&doc);
    assert_eq!(
        index.rules[0].condition_text.as_deref(),
        Some("(display: grid)")
    );
    assert!(!index.rules[0].condition_matches);
    assert!(matched_rules(&doc, &node, &index).is_empty());
}

#[test]
fn test_layer_passes_the_enclosing_condition_through() {
    let mut doc = FixtureDocument::new();
    doc.add_css(
        "@layer base { .x { color: red; } } \
         @media (max-width: 600px) { @layer base { .x { color: blue; } } }",
    );
    doc.set_condition("(max-width: 600px)", false);

    let index = collect(&doc);
    assert_eq!(index.rules[0].condition_text, None);
    assert!(index.rules[0].condition_matches);
    assert_eq!(
        index.rules[1].condition_text.as_deref(),
        Some("(max-width: 600px)")
    );
    assert!(!index.rules[1].condition_matches);
}

#[test]
fn test_sheet_labels() {
    let index = collect(&page());
    assert_eq!(index.rules[0].sheet.label(), "inline");
    assert_eq!(index.rules[3].sheet.label(), "/app.css");
    assert_eq!(index.rules[3].sheet.index, 2);
}

// ============================================================================
// Unreadable sheets and keyframes
// ============================================================================

#[test]
fn test_cross_origin_sheet_becomes_a_stub() {
    let index = collect(&page());
    assert_eq!(index.unreadable.len(), 1);
    assert!(index.unreadable[0].cross_origin);
    assert!(matches!(
        Stylesheet::cross_origin("https://cdn.example.com/lib.css").readable_rules(),
        Err(ScanError::SheetAccess(_))
    ));
    assert_eq!(
        index.unreadable[0].sheet.href.as_deref(),
        Some("https://cdn.example.com/lib.css")
    );
}

#[test]
fn test_keyframes_are_indexed() {
    let index = collect(&page());
    let pulse = index.keyframes_named("pulse").unwrap();
    assert_eq!(pulse.frames.len(), 2);
    assert_eq!(pulse.frames[0].key_text, "from");
    assert!(index.keyframes_named("missing").is_none());
}

// ============================================================================
// Conditions and matching
// ============================================================================

#[test]
fn test_failed_condition_excludes_rule() {
    let mut doc = page();
    doc.set_condition("(max-width: 600px)", false);
    let card = doc.append(doc.root(), "div.card");

    let index = collect(&doc);
    assert!(!index.rules[1].condition_matches);

    let matched = matched_rules(&doc, &card, &index);
    let orders: Vec<usize> = matched.iter().map(|m| m.rule.source_order).collect();
    assert_eq!(orders, vec![0, 2, 3]);
}

#[test]
fn test_matched_rules_are_in_cascade_order() {
    let mut doc = FixtureDocument::new();
    doc.add_css("#hero { color: red; } .a, .a.b { color: blue; } div { color: green; }");
    let node = doc.append(doc.root(), "div#hero.a.b");

    let index = collect(&doc);
    let matched = matched_rules(&doc, &node, &index);
    let summary: Vec<(String, Specificity)> = matched
        .iter()
        .map(|m| (m.rule.selector_text.clone(), m.specificity))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("div".to_string(), Specificity::new(0, 0, 1)),
            (".a, .a.b".to_string(), Specificity::new(0, 2, 0)),
            ("#hero".to_string(), Specificity::new(1, 0, 0)),
        ]
    );
    assert_eq!(matched[1].branches, vec![".a", ".a.b"]);
}

#[test]
fn test_invalid_selector_is_a_non_match() {
    let mut doc = FixtureDocument::new();
    doc.add_stylesheet(Stylesheet::inline(vec![
        CssRule::style("p[", &[("color", "red")]),
        CssRule::style("p", &[("color", "blue")]),
    ]));
    let para = doc.append(doc.root(), "p");

    let index = collect(&doc);
    let matched = matched_rules(&doc, &para, &index);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].rule.selector_text, "p");
}

// ============================================================================
// Source listing
// ============================================================================

#[test]
fn test_source_report_groups_by_sheet() {
    let mut doc = page();
    let card = doc.append(doc.root(), "div.card");
    let index = collect(&doc);
    let matched = matched_rules(&doc, &card, &index);
    let sources = source_report(&index, &matched);

    let urls: Vec<&str> = sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["inline", "https://cdn.example.com/lib.css", "/app.css"]
    );

    assert_eq!(sources[0].rule_count, 3);
    // Equal specificity: the later rule is listed first
    assert_eq!(
        sources[0].rules[0].condition_text.as_deref(),
        Some("(display: grid)")
    );
    assert!(sources[1].unreadable);
    assert!(sources[1].rules.is_empty());
    assert_eq!(sources[2].rules[0].specificity, Specificity::new(0, 1, 1));
}

#[test]
fn test_selector_lists_against_the_host() {
    let mut doc = FixtureDocument::new();
    let nav = doc.append(doc.root(), "nav");
    let link = doc.append(nav, "a.active");

    assert!(matches_selector(&doc, &link, "p, nav > a"));
    assert!(matches_selector(&doc, &link, "a:not(.x, .y)"));
    assert!(!matches_selector(&doc, &link, "p, a:not(.active)"));
    // A broken branch does not hide a valid one
    assert!(matches_selector(&doc, &link, "a >, .active"));
}

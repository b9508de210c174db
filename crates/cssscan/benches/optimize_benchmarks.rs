use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use cssscan::testing::FixtureDocument;
use cssscan::{PropertyFilters, PropertyValue, calculate, collect, inspect, matched_rules, optimize};

fn box_model(sides: &str) -> Vec<PropertyValue> {
    ["margin", "padding"]
        .iter()
        .flat_map(|group| {
            ["top", "right", "bottom", "left"]
                .iter()
                .map(move |side| PropertyValue::new(format!("{group}-{side}"), sides))
        })
        .collect()
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");

    // Foldable groups plus unrelated properties
    for extra in [0, 10, 50, 200] {
        let mut properties = box_model("4px");
        properties.extend((0..extra).map(|i| PropertyValue::new(format!("--var-{i}"), "1px")));

        group.throughput(Throughput::Elements(properties.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("box_model_plus", extra),
            &properties,
            |b, props| b.iter(|| optimize(black_box(props))),
        );
    }

    // Nothing folds, everything is checked against the default table
    let defaults = box_model("0px");
    group.bench_function("all_defaults", |b| b.iter(|| optimize(black_box(&defaults))));

    group.finish();
}

fn bench_specificity(c: &mut Criterion) {
    let mut group = c.benchmark_group("specificity");

    for selector in [
        "div",
        "#main .card > p:first-child",
        "ul li:not(.a, #b) a[href^='http']::after",
        "section:is(.x, .y) :where(article) li:has(> img.icon)",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(selector), selector, |b, s| {
            b.iter(|| calculate(black_box(s)))
        });
    }

    group.finish();
}

fn fixture(rule_count: usize) -> (FixtureDocument, cssscan::testing::NodeId) {
    let mut css = String::new();
    for i in 0..rule_count {
        css.push_str(&format!(".c{i} {{ margin: {i}px; }}\n"));
    }
    css.push_str(".card { padding: 0 8px; color: red; }");

    let mut doc = FixtureDocument::new();
    doc.add_css(&css);
    let body = doc.append(doc.root(), "body");
    let card = doc.append(body, "div.card.c1");
    (doc, card)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    for rules in [10, 100] {
        let (doc, card) = fixture(rules);

        group.bench_with_input(BenchmarkId::new("collect", rules), &doc, |b, doc| {
            b.iter(|| collect(black_box(doc)))
        });

        let index = collect(&doc);
        group.bench_with_input(BenchmarkId::new("matched_rules", rules), &index, |b, index| {
            b.iter(|| matched_rules(&doc, black_box(&card), index).len())
        });
        group.bench_with_input(BenchmarkId::new("inspect", rules), &index, |b, index| {
            b.iter(|| inspect(&doc, black_box(&card), index, PropertyFilters::default()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_optimize, bench_specificity, bench_pipeline);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use values_compass_spec::compass::parse_locale_source;
use values_compass_spec::compass::generator::SpecBuilder;
use values_compass_spec::compass::types::Localized;
use values_compass_spec::error::ErrorLog;
use values_compass_spec::SpecMeta;

const EN: &str = include_str!("../tests/fixtures/values_compass/en.md");
const ES: &str = include_str!("../tests/fixtures/values_compass/es.md");
const PT_BR: &str = include_str!("../tests/fixtures/values_compass/pt-BR.md");

fn bench_parse_locale(c: &mut Criterion) {
    c.bench_function("parse_locale_en", |b| {
        b.iter(|| {
            let mut errors = ErrorLog::new();
            let doc = parse_locale_source(black_box(EN), "en", &mut errors);
            black_box((doc, errors))
        })
    });
}

fn bench_build_spec(c: &mut Criterion) {
    let sources = Localized {
        en: EN,
        es: ES,
        pt_br: PT_BR,
    };
    let mut errors = ErrorLog::new();
    let docs = sources.map(|locale, text| parse_locale_source(text, locale.tag(), &mut errors));
    let builder = SpecBuilder::new(SpecMeta::new("test-values-compass", "values-compass", "values", 1));

    c.bench_function("build_spec", |b| b.iter(|| black_box(builder.build(black_box(&docs)))));
}

criterion_group!(benches, bench_parse_locale, bench_build_spec);
criterion_main!(benches);

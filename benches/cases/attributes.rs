use atomic_markup::html::{AtomicHtmlToken, AttributeSettings, HtmlToken};
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn fill_tag(token: &mut HtmlToken, attr_count: usize) {
    token.clear();
    token.begin_start_tag();
    token.append_to_name("div");

    for i in 0..attr_count {
        token.begin_attribute();
        // NOTE: every third attribute repeats an earlier name.
        token.append_to_attribute_name(&format!("data-attr-{}", i - i % 3 / 2));
        token.append_to_attribute_value("value");
        token.end_attribute();
    }
}

pub fn attribute_dedup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribute_dedup");

    for attr_count in [4, 16, 64, 256] {
        group.throughput(Throughput::Elements(attr_count as u64));

        for (strategy, threshold) in [("linear", usize::MAX), ("hash", 0)] {
            let settings = AttributeSettings {
                hash_dedup_threshold: threshold,
            };

            group.bench_with_input(
                BenchmarkId::new(strategy, attr_count),
                &attr_count,
                |b, &attr_count| {
                    let mut token = HtmlToken::new();

                    b.iter(|| {
                        fill_tag(&mut token, attr_count);

                        let atomic = AtomicHtmlToken::with_settings(&mut token, &settings);

                        black_box(atomic.map(|t| t.attributes().len()))
                    })
                },
            );
        }
    }

    group.finish();
}

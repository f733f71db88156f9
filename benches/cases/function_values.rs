use atomic_markup::css::{CssValue, CssValueList, CustomPropertyValue, CustomPropertyValueMap};
use atomic_markup::Atom;
use criterion::Criterion;
use std::hint::black_box;

const VALUE: &str = "linear-gradient(to right, rgba(var(--r), var(--g), var(--b), 0.5) 0%, \
                     hsl(calc(var(--hue) + 30), 100%, 50%) 100%)";

fn functions() -> Vec<CssValue> {
    CssValueList::parse(VALUE)
        .map(|list| list.iter().cloned().collect())
        .unwrap_or_default()
}

pub fn serialization_benchmark(c: &mut Criterion) {
    let values = functions();

    c.bench_function("function_value_css_text", |b| {
        b.iter(|| {
            for value in &values {
                black_box(value.css_text());
            }
        })
    });
}

pub fn substitution_benchmark(c: &mut Criterion) {
    let list = CssValueList::parse(VALUE).unwrap_or_else(|_| CssValueList::create_space_separated());
    let mut custom_properties = CustomPropertyValueMap::new();

    for (name, value) in [("--r", "10"), ("--g", "20"), ("--b", "30"), ("--hue", "var(--r)")] {
        if let Ok(value) = CustomPropertyValue::parse(value) {
            custom_properties.insert(Atom::from(name), value);
        }
    }

    c.bench_function("function_value_substitution", |b| {
        b.iter(|| black_box(list.build_parser_value_list_substituting_variables(&custom_properties)))
    });
}

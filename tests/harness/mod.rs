use atomic_markup::css::{CustomPropertyValue, CustomPropertyValueMap};
use atomic_markup::html::HtmlToken;
use atomic_markup::Atom;

/// Token description used by fixtures: `(name, [(attr_name, attr_value)])`.
pub type TagDescr<'a> = (&'a str, &'a [(&'a str, &'a str)]);

/// Feeds a start tag into `token` the way a tokenizer does: character
/// runs appended one by one.
pub fn feed_start_tag(token: &mut HtmlToken, (name, attrs): TagDescr<'_>) {
    token.clear();
    token.begin_start_tag();

    for ch in name.split_inclusive(|_| true) {
        token.append_to_name(ch);
    }

    for (attr_name, attr_value) in attrs {
        token.begin_attribute();

        for ch in attr_name.split_inclusive(|_| true) {
            token.append_to_attribute_name(ch);
        }

        token.append_to_attribute_value(attr_value);
        token.end_attribute();
    }
}

pub fn custom_properties(entries: &[(&str, &str)]) -> CustomPropertyValueMap {
    entries
        .iter()
        .map(|&(name, value)| {
            let value = CustomPropertyValue::parse(value)
                .unwrap_or_else(|e| panic!("Invalid custom property value {value:?}: {e}"));

            (Atom::from(name), value)
        })
        .collect()
}

macro_rules! assert_attrs {
    ($token:expr, [$(($name:expr, $value:expr)),* $(,)?]) => {{
        let actual: Vec<(String, String)> = $token
            .attributes()
            .iter()
            .map(|a| (a.local_name().to_string(), a.value().to_string()))
            .collect();

        let expected: Vec<(String, String)> = vec![$(($name.to_string(), $value.to_string())),*];

        assert_eq!(actual, expected);
    }};
}

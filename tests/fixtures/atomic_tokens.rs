use crate::harness::feed_start_tag;
use atomic_markup::html::{
    find_attribute, AtomicHtmlToken, AtomicTokenError, AttributeSettings, Characters, HtmlToken,
    QualifiedName, TokenKind,
};
use atomic_markup::{Atom, Error};
use itertools::Itertools;
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(AtomicHtmlToken<'static>: Clone, std::fmt::Debug, PartialEq);
assert_not_impl_any!(Atom: Send, Sync);
assert_impl_all!(AtomicTokenError: std::error::Error, Send, Sync, Copy);

#[test]
fn token_stream_conversion() {
    let mut token = HtmlToken::new();
    let mut kinds = Vec::new();

    token.begin_doctype();
    token.append_to_name("html");
    kinds.push(AtomicHtmlToken::try_from(&mut token).unwrap().kind());

    feed_start_tag(&mut token, ("body", &[("class", "home")]));
    kinds.push(AtomicHtmlToken::try_from(&mut token).unwrap().kind());

    token.clear();
    token.append_to_character("Hi!");
    kinds.push(AtomicHtmlToken::try_from(&mut token).unwrap().kind());

    token.clear();
    token.begin_end_tag();
    token.append_to_name("body");
    kinds.push(AtomicHtmlToken::try_from(&mut token).unwrap().kind());

    token.clear();
    token.make_end_of_file();
    kinds.push(AtomicHtmlToken::try_from(&mut token).unwrap().kind());

    assert_eq!(
        kinds,
        [
            TokenKind::Doctype,
            TokenKind::StartTag,
            TokenKind::Character,
            TokenKind::EndTag,
            TokenKind::EndOfFile
        ]
    );
}

#[test]
fn duplicate_and_empty_attributes() {
    let mut token = HtmlToken::new();

    feed_start_tag(
        &mut token,
        (
            "input",
            &[
                ("type", "text"),
                ("", "dangling"),
                ("value", "first"),
                ("type", "password"),
                ("value", "second"),
                ("required", ""),
            ],
        ),
    );

    let atomic = AtomicHtmlToken::try_from(&mut token).unwrap();

    assert_attrs!(
        atomic,
        [("type", "text"), ("value", "first"), ("required", "")]
    );

    assert_eq!(
        find_attribute(atomic.attributes(), &QualifiedName::local("type"))
            .map(|a| a.value().to_string()),
        Some("text".to_string())
    );
}

#[test]
fn dedup_strategy_does_not_change_the_result() {
    let names = (0..64).map(|i| format!("a{}", i % 20)).collect_vec();
    let attrs = names.iter().map(|n| (n.as_str(), n.as_str())).collect_vec();

    let results = [0, 8, 64, usize::MAX]
        .into_iter()
        .map(|threshold| {
            let mut token = HtmlToken::new();

            feed_start_tag(&mut token, ("div", &attrs));

            AtomicHtmlToken::with_settings(
                &mut token,
                &AttributeSettings {
                    hash_dedup_threshold: threshold,
                },
            )
            .unwrap()
            .into_owned()
        })
        .collect_vec();

    assert_eq!(results[0].attributes().len(), 20);
    assert!(results.iter().all_equal());
}

#[test]
fn attribute_names_are_interned() {
    let mut first = HtmlToken::new();
    let mut second = HtmlToken::new();

    feed_start_tag(&mut first, ("a", &[("href", "/one")]));
    feed_start_tag(&mut second, ("a", &[("href", "/two")]));

    let first = AtomicHtmlToken::try_from(&mut first).unwrap();
    let second = AtomicHtmlToken::try_from(&mut second).unwrap();

    assert_eq!(first.name(), second.name());
    assert_eq!(
        first.attributes()[0].local_name(),
        second.attributes()[0].local_name()
    );
    assert_ne!(first.attributes()[0].value(), second.attributes()[0].value());
}

#[test]
fn characters_outlive_the_source_token_once_owned() {
    let owned = {
        let mut token = HtmlToken::new();

        token.append_to_character("na\u{ef}ve");

        AtomicHtmlToken::try_from(&mut token).unwrap().into_owned()
    };

    assert_eq!(owned.characters(), Some("na\u{ef}ve"));
    assert!(owned.characters_is_all_8bit());
    assert_eq!(
        owned,
        AtomicHtmlToken::Character(Characters::new("na\u{ef}ve"))
    );
}

#[test]
fn errors_convert_into_crate_error() {
    let mut token = HtmlToken::new();

    let err: Error = AtomicHtmlToken::try_from(&mut token).unwrap_err().into();

    assert_eq!(err, Error::AtomicToken(AtomicTokenError::Uninitialized));
    assert_eq!(
        err.to_string(),
        "Uninitialized token can't be converted to an atomic token."
    );
}

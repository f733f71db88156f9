use crate::harness::custom_properties;
use atomic_markup::css::{
    resolve_variables, CssFunctionValue, CssParseError, CssParserValue, CssValue, CssValueId,
    CssValueList, CustomPropertyValue, SubstitutionError, SubstitutionSettings,
};
use atomic_markup::{Atom, Error};

fn function(text: &str) -> CssFunctionValue {
    match CssValueList::parse(text).unwrap().get(0) {
        Some(CssValue::Function(function)) => function.clone(),
        other => panic!("Function expected, got {other:?}"),
    }
}

#[test]
fn serialization_is_stable() {
    for text in [
        "rgb(0, 0, 0)",
        "hsla(120, 100%, 50%, 0.3)",
        "cubic-bezier(0.1, 0.7, 1.0, 0.1)",
        "url(\"image.png\")",
        "image-set(\"a.png\" 1x, \"a-2x.png\" 2x)",
        "clamp(1rem, 2.5vw, 2rem)",
        "steps(4, jump-end)",
    ] {
        let serialized = function(text).css_text();

        assert_eq!(function(&serialized).css_text(), serialized, "Input: {text}");
    }
}

#[test]
fn float_and_escaping_details() {
    assert_eq!(
        function("cubic-bezier(0.1, 0.7, 1.0, 0.1)").css_text(),
        "cubic-bezier(0.1, 0.7, 1.0, 0.1)"
    );
    assert_eq!(function("f(url(  a.png  ))").css_text(), "f(url(a.png))");
    assert_eq!(function("attr(data-x string)").css_text(), "attr(data-x string)");
}

#[test]
fn keyword_lookup() {
    assert_eq!(function("Linear-Gradient(red, blue)").keyword(), Some(CssValueId::LinearGradient));
    assert_eq!(function("my-paint(red)").keyword(), None);
}

#[test]
fn substituting_from_map() {
    let map = custom_properties(&[
        ("--size", "12px"),
        ("--scale", "var(--size) * 2"),
        ("--colors", "red, blue"),
    ]);

    let calc = function("calc(var(--scale) + 1px)");
    let gradient = function("linear-gradient(to top, var(--colors))");

    let rebuilt = |f: &CssFunctionValue| {
        let value = f.build_parser_value_substituting_variables(&map).unwrap();

        assert!(matches!(value, CssParserValue::Function(_)));

        CssValue::from_parser_value(&value).css_text()
    };

    assert_eq!(rebuilt(&calc), "calc(12px * 2 + 1px)");
    assert_eq!(rebuilt(&gradient), "linear-gradient(to top, red, blue)");
}

#[test]
fn substitution_errors() {
    let mut map = custom_properties(&[("--a", "var(--b)"), ("--b", "var(--c)"), ("--c", "var(--a)")]);

    map.insert(Atom::from("--void"), CustomPropertyValue::Invalid);

    let failure = |text: &str| {
        function(text)
            .build_parser_value_substituting_variables(&map)
            .unwrap_err()
    };

    assert_eq!(failure("f(var(--a))"), SubstitutionError::Cycle("--a".into()));
    assert_eq!(failure("f(var(--void))"), SubstitutionError::InvalidCustomProperty("--void".into()));
    assert_eq!(failure("f(var(--nope))"), SubstitutionError::UndefinedVariable("--nope".into()));

    // NOTE: fallbacks don't help when the referenced property exists
    // but its own expansion fails.
    assert_eq!(failure("f(var(--a, 0))"), SubstitutionError::Cycle("--a".into()));
}

#[test]
fn nesting_depth_setting() {
    let map = custom_properties(&[("--one", "var(--two)"), ("--two", "var(--three)"), ("--three", "3")]);
    let f = function("f(var(--one))");

    assert!(f.build_parser_value_substituting_variables(&map).is_ok());

    assert_eq!(
        f.build_parser_value_substituting_variables_with_settings(
            &map,
            &SubstitutionSettings {
                max_nesting_depth: 1
            }
        ),
        Err(SubstitutionError::TooDeep { max: 1 })
    );
}

#[test]
fn resolving_text() {
    let map = custom_properties(&[("--accent", "rgb(10, 20, 30)")]);

    assert_eq!(
        resolve_variables("1px solid var(--accent)", &map).as_deref(),
        Ok("1px solid rgb(10, 20, 30)")
    );

    assert!(matches!(
        resolve_variables("var(--other)", &map),
        Err(Error::Substitution(SubstitutionError::UndefinedVariable(_)))
    ));

    assert!(matches!(
        resolve_variables("var(accent)", &map),
        Err(Error::CssParse(_))
    ));
}

#[test]
fn grouped_arguments() {
    let map = custom_properties(&[("--half", "(100% - 10px) / 2"), ("--track", "[main] 1fr")]);

    assert_eq!(
        function("calc((var(--w) + 2px) * 2)").css_text(),
        "calc((var(--w) + 2px) * 2)"
    );

    assert_eq!(
        resolve_variables("calc(var(--half)) repeat(2, var(--track))", &map).as_deref(),
        Ok("calc((100% - 10px) / 2) repeat(2, [main] 1fr)")
    );
}

#[test]
fn deeply_nested_text_is_rejected() {
    let text = "a(".repeat(50_000);

    assert!(matches!(
        resolve_variables(&text, &custom_properties(&[])),
        Err(Error::CssParse(CssParseError::TooDeep { .. }))
    ));
}

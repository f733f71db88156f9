//! CSS values that serialize back to text and substitute custom
//! property references.
//!
//! Text is tokenized by `cssparser` into a [`CssParserValueList`], which
//! is turned into [`CssValue`]s. Values can be serialized with
//! `css_text()` or rebuilt into parser values with every `var()`
//! reference replaced by the value of the referenced custom property.

mod error;
mod function_value;
mod parser_values;
mod primitive_value;
mod substitution;
mod value;
mod value_id;
mod value_list;
mod variables;

pub use self::error::{CssParseError, SubstitutionError};
pub use self::function_value::{CssFunctionValue, FunctionName};
pub use self::parser_values::{
    BlockKind, CssParserBlock, CssParserFunction, CssParserValue, CssParserValueList,
    CssParserVariable,
};
pub use self::primitive_value::CssPrimitiveValue;
pub use self::substitution::SubstitutionSettings;
pub use self::value::{CssBlockValue, CssValue};
pub use self::value_id::CssValueId;
pub use self::value_list::{CssValueList, ValueListSeparator};
pub use self::variables::{CssVariableReference, CustomPropertyValue, CustomPropertyValueMap};

/// Parses `text` as a component value list, substitutes all `var()`
/// references and serializes the result.
pub fn resolve_variables(
    text: &str,
    custom_properties: &CustomPropertyValueMap,
) -> Result<String, crate::Error> {
    let list = CssValueList::parse(text)?;
    let resolved = list.build_parser_value_list_substituting_variables(custom_properties)?;

    Ok(CssValueList::create_from_parser_value_list(&resolved).css_text())
}

use super::substitution::Substitution;
use super::{
    CssParserFunction, CssParserValue, CssParserValueList, CssValue, CssValueId, CssValueList,
    CustomPropertyValueMap, SubstitutionError, SubstitutionSettings,
};
use crate::base::Atom;
use cssparser::{serialize_identifier, ToCss};
use std::fmt;

/// Name of a function value: either a known keyword or an arbitrary
/// identifier taken from the source.
#[derive(Clone, Debug)]
pub enum FunctionName {
    Keyword(CssValueId),
    Named(Atom),
}

impl FunctionName {
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            FunctionName::Keyword(id) => id.name(),
            FunctionName::Named(name) => name.as_str(),
        }
    }
}

/// Function names are ASCII case-insensitive.
impl PartialEq for FunctionName {
    #[inline]
    fn eq(&self, other: &FunctionName) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

/// Function call value, e.g. `rgb(0, 0, 0)` or `translate(10px)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CssFunctionValue {
    name: FunctionName,
    args: Option<CssValueList>,
}

impl CssFunctionValue {
    /// Creates a function value from a name and an argument list. A
    /// trailing `(` in the name is ignored.
    pub fn new(name: &str, args: CssValueList) -> Self {
        let name = name.strip_suffix('(').unwrap_or(name);

        CssFunctionValue {
            name: FunctionName::Named(Atom::from(name)),
            args: Some(args),
        }
    }

    /// Keyword function without arguments. Arguments can be added
    /// later with [`CssFunctionValue::append`].
    #[inline]
    pub fn from_keyword(keyword: CssValueId) -> Self {
        CssFunctionValue {
            name: FunctionName::Keyword(keyword),
            args: None,
        }
    }

    pub fn from_parser_function(function: &CssParserFunction) -> Self {
        CssFunctionValue {
            name: FunctionName::Named(Atom::from(function.name.as_str())),
            args: function
                .args
                .as_ref()
                .map(CssValueList::create_from_parser_value_list),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn function_name(&self) -> &FunctionName {
        &self.name
    }

    /// Keyword of the function, looked up by name if it was created from
    /// an arbitrary identifier.
    #[inline]
    pub fn keyword(&self) -> Option<CssValueId> {
        match &self.name {
            FunctionName::Keyword(id) => Some(*id),
            FunctionName::Named(name) => CssValueId::from_name(name),
        }
    }

    #[inline]
    pub fn args(&self) -> Option<&CssValueList> {
        self.args.as_ref()
    }

    #[inline]
    pub fn css_text(&self) -> String {
        self.to_css_string()
    }

    #[inline]
    pub fn equals(&self, other: &CssFunctionValue) -> bool {
        self == other
    }

    /// Appends an argument, creating a comma separated argument list if
    /// the function has none yet.
    pub fn append(&mut self, value: impl Into<CssValue>) {
        self.args
            .get_or_insert_with(CssValueList::create_comma_separated)
            .append(value);
    }

    /// Rebuilds the function as a parser value with every `var()`
    /// reference in its arguments replaced by the referenced value.
    #[inline]
    pub fn build_parser_value_substituting_variables(
        &self,
        custom_properties: &CustomPropertyValueMap,
    ) -> Result<CssParserValue, SubstitutionError> {
        self.build_parser_value_substituting_variables_with_settings(
            custom_properties,
            &SubstitutionSettings::default(),
        )
    }

    pub fn build_parser_value_substituting_variables_with_settings(
        &self,
        custom_properties: &CustomPropertyValueMap,
        settings: &SubstitutionSettings,
    ) -> Result<CssParserValue, SubstitutionError> {
        self.build_parser_value(&mut Substitution::new(custom_properties, settings))
    }

    pub(crate) fn build_parser_value(
        &self,
        substitution: &mut Substitution<'_>,
    ) -> Result<CssParserValue, SubstitutionError> {
        let args = match &self.args {
            Some(args) => {
                let mut list = CssParserValueList::new();

                args.append_parser_values(&mut list, substitution)?;

                Some(list)
            }
            None => None,
        };

        Ok(CssParserValue::Function(Box::new(CssParserFunction {
            name: self.name().to_string(),
            args,
        })))
    }
}

impl ToCss for CssFunctionValue {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        match &self.name {
            FunctionName::Keyword(id) => dest.write_str(id.name())?,
            FunctionName::Named(name) => serialize_identifier(name, dest)?,
        }

        dest.write_char('(')?;

        if let Some(args) = &self.args {
            args.to_css(dest)?;
        }

        dest.write_char(')')
    }
}

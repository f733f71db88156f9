use super::{CssParseError, CssParserVariable, CssValueList};
use crate::base::Atom;
use cssparser::{serialize_identifier, ToCss};
use hashbrown::HashMap;
use std::fmt;

/// `var()` reference to a custom property.
#[derive(Clone, Debug, PartialEq)]
pub struct CssVariableReference {
    name: Atom,
    fallback: Option<CssValueList>,
}

impl CssVariableReference {
    #[inline]
    pub fn new(name: impl Into<Atom>, fallback: Option<CssValueList>) -> Self {
        CssVariableReference {
            name: name.into(),
            fallback,
        }
    }

    pub fn from_parser_variable(variable: &CssParserVariable) -> Self {
        CssVariableReference {
            name: Atom::from(variable.name.as_str()),
            fallback: variable
                .fallback
                .as_ref()
                .map(CssValueList::create_from_parser_value_list),
        }
    }

    /// Name of the referenced custom property, including the leading `--`.
    #[inline]
    pub fn name(&self) -> &Atom {
        &self.name
    }

    #[inline]
    pub fn fallback(&self) -> Option<&CssValueList> {
        self.fallback.as_ref()
    }

    #[inline]
    pub fn css_text(&self) -> String {
        self.to_css_string()
    }
}

impl ToCss for CssVariableReference {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_str("var(")?;
        serialize_identifier(&self.name, dest)?;

        if let Some(fallback) = &self.fallback {
            dest.write_char(',')?;

            if !fallback.is_empty() {
                dest.write_char(' ')?;
                fallback.to_css(dest)?;
            }
        }

        dest.write_char(')')
    }
}

/// Computed value of a custom property.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomPropertyValue {
    Valid(CssValueList),
    /// The guaranteed-invalid value: references to the property fall back
    /// or fail.
    Invalid,
}

impl CustomPropertyValue {
    #[inline]
    pub fn parse(text: &str) -> Result<Self, CssParseError> {
        Ok(CustomPropertyValue::Valid(CssValueList::parse(text)?))
    }
}

/// Custom property values keyed by property name (with the leading `--`).
pub type CustomPropertyValueMap = HashMap<Atom, CustomPropertyValue>;

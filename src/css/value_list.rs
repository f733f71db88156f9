use super::substitution::Substitution;
use super::{
    CssParseError, CssParserValue, CssParserValueList, CssValue, CustomPropertyValueMap, SubstitutionError,
    SubstitutionSettings,
};
use cssparser::ToCss;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueListSeparator {
    Space,
    Comma,
    Slash,
}

impl ValueListSeparator {
    #[inline]
    fn operator(self) -> Option<char> {
        match self {
            ValueListSeparator::Space => None,
            ValueListSeparator::Comma => Some(','),
            ValueListSeparator::Slash => Some('/'),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CssValueList {
    separator: ValueListSeparator,
    values: Vec<CssValue>,
}

impl CssValueList {
    #[inline]
    fn new(separator: ValueListSeparator) -> Self {
        CssValueList {
            separator,
            values: Vec::new(),
        }
    }

    #[inline]
    pub fn create_space_separated() -> Self {
        CssValueList::new(ValueListSeparator::Space)
    }

    #[inline]
    pub fn create_comma_separated() -> Self {
        CssValueList::new(ValueListSeparator::Comma)
    }

    #[inline]
    pub fn create_slash_separated() -> Self {
        CssValueList::new(ValueListSeparator::Slash)
    }

    /// Space separated list with one value per parser value. Commas and
    /// other operators are kept as operator values.
    pub fn create_from_parser_value_list(list: &CssParserValueList) -> Self {
        CssValueList {
            separator: ValueListSeparator::Space,
            values: list.iter().map(CssValue::from_parser_value).collect(),
        }
    }

    #[inline]
    pub fn parse(text: &str) -> Result<Self, CssParseError> {
        Ok(Self::create_from_parser_value_list(&CssParserValueList::parse(text)?))
    }

    #[inline]
    pub fn separator(&self) -> ValueListSeparator {
        self.separator
    }

    #[inline]
    pub fn append(&mut self, value: impl Into<CssValue>) {
        self.values.push(value.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CssValue> {
        self.values.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CssValue> {
        self.values.iter()
    }

    #[inline]
    pub fn css_text(&self) -> String {
        self.to_css_string()
    }

    #[inline]
    pub fn build_parser_value_list_substituting_variables(
        &self,
        custom_properties: &CustomPropertyValueMap,
    ) -> Result<CssParserValueList, SubstitutionError> {
        self.build_parser_value_list_substituting_variables_with_settings(
            custom_properties,
            &SubstitutionSettings::default(),
        )
    }

    pub fn build_parser_value_list_substituting_variables_with_settings(
        &self,
        custom_properties: &CustomPropertyValueMap,
        settings: &SubstitutionSettings,
    ) -> Result<CssParserValueList, SubstitutionError> {
        let mut substitution = Substitution::new(custom_properties, settings);
        let mut result = CssParserValueList::new();

        self.append_parser_values(&mut result, &mut substitution)?;

        Ok(result)
    }

    pub(crate) fn append_parser_values(
        &self,
        output: &mut CssParserValueList,
        substitution: &mut Substitution<'_>,
    ) -> Result<(), SubstitutionError> {
        let operator = self.separator.operator();

        for (idx, value) in self.values.iter().enumerate() {
            match operator {
                Some(op) if idx > 0 => output.append(CssParserValue::Operator(op)),
                _ => (),
            }

            value.append_parser_values(output, substitution)?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a CssValueList {
    type Item = &'a CssValue;
    type IntoIter = std::slice::Iter<'a, CssValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl ToCss for CssValueList {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                match self.separator {
                    // NOTE: comma operators stick to the preceding value.
                    ValueListSeparator::Space if !value.is_operator(',') => dest.write_char(' ')?,
                    ValueListSeparator::Space => (),
                    ValueListSeparator::Comma => dest.write_str(", ")?,
                    ValueListSeparator::Slash => dest.write_str(" / ")?,
                }
            }

            value.to_css(dest)?;
        }

        Ok(())
    }
}

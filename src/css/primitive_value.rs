use super::{CssParserValue, CssValue};
use crate::base::Atom;
use cssparser::{serialize_identifier, serialize_string, ToCss, Token};
use std::fmt;

/// Single, non-composite CSS value.
#[derive(Clone, Debug, PartialEq)]
pub enum CssPrimitiveValue {
    Ident(Atom),
    Number {
        value: f32,
        int_value: Option<i32>,
    },
    Percentage {
        unit_value: f32,
        int_value: Option<i32>,
    },
    Dimension {
        value: f32,
        int_value: Option<i32>,
        unit: Atom,
    },
    String(String),
    Url(String),
    Hash(String),
    /// Separator or arithmetic operator between other values.
    Operator(char),
}

impl CssPrimitiveValue {
    #[inline]
    pub fn is_operator(&self, ch: char) -> bool {
        matches!(self, CssPrimitiveValue::Operator(op) if *op == ch)
    }

    /// Returns `None` for parser values that aren't primitive.
    pub fn from_parser_value(value: &CssParserValue) -> Option<Self> {
        match value {
            CssParserValue::Function(_) | CssParserValue::Variable(_) | CssParserValue::Block(_) => {
                None
            }
            _ => match CssValue::from_parser_value(value) {
                CssValue::Primitive(primitive) => Some(primitive),
                _ => None,
            },
        }
    }

    pub fn to_parser_value(&self) -> CssParserValue {
        match self {
            CssPrimitiveValue::Ident(ident) => CssParserValue::Ident(ident.to_string()),
            &CssPrimitiveValue::Number { value, int_value } => {
                CssParserValue::Number { value, int_value }
            }
            &CssPrimitiveValue::Percentage {
                unit_value,
                int_value,
            } => CssParserValue::Percentage {
                unit_value,
                int_value,
            },
            CssPrimitiveValue::Dimension {
                value,
                int_value,
                unit,
            } => CssParserValue::Dimension {
                value: *value,
                int_value: *int_value,
                unit: unit.to_string(),
            },
            CssPrimitiveValue::String(s) => CssParserValue::String(s.clone()),
            CssPrimitiveValue::Url(url) => CssParserValue::Url(url.clone()),
            CssPrimitiveValue::Hash(hash) => CssParserValue::Hash(hash.clone()),
            &CssPrimitiveValue::Operator(op) => CssParserValue::Operator(op),
        }
    }

    #[inline]
    pub fn css_text(&self) -> String {
        self.to_css_string()
    }
}

impl ToCss for CssPrimitiveValue {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        // NOTE: numeric values are serialized through `cssparser` tokens,
        // so they come out exactly the way the tokenizer would print them.
        match self {
            CssPrimitiveValue::Ident(ident) => serialize_identifier(ident, dest),
            &CssPrimitiveValue::Number { value, int_value } => Token::Number {
                has_sign: false,
                value,
                int_value,
            }
            .to_css(dest),
            &CssPrimitiveValue::Percentage {
                unit_value,
                int_value,
            } => Token::Percentage {
                has_sign: false,
                unit_value,
                int_value,
            }
            .to_css(dest),
            CssPrimitiveValue::Dimension {
                value,
                int_value,
                unit,
            } => Token::Dimension {
                has_sign: false,
                value: *value,
                int_value: *int_value,
                unit: unit.as_str().into(),
            }
            .to_css(dest),
            CssPrimitiveValue::String(s) => serialize_string(s, dest),
            CssPrimitiveValue::Url(url) => Token::UnquotedUrl(url.as_str().into()).to_css(dest),
            CssPrimitiveValue::Hash(hash) => Token::Hash(hash.as_str().into()).to_css(dest),
            CssPrimitiveValue::Operator(op) => dest.write_char(*op),
        }
    }
}

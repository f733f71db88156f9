use super::substitution::Substitution;
use super::{
    BlockKind, CssFunctionValue, CssParserBlock, CssParserValue, CssParserValueList,
    CssPrimitiveValue, CssValueList, CssVariableReference, SubstitutionError,
};
use crate::base::Atom;
use cssparser::ToCss;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    Primitive(CssPrimitiveValue),
    List(CssValueList),
    Function(CssFunctionValue),
    Variable(CssVariableReference),
    Block(CssBlockValue),
}

impl CssValue {
    pub fn from_parser_value(value: &CssParserValue) -> Self {
        let primitive = match value {
            CssParserValue::Function(function) => {
                return CssValue::Function(CssFunctionValue::from_parser_function(function))
            }
            CssParserValue::Variable(variable) => {
                return CssValue::Variable(CssVariableReference::from_parser_variable(variable))
            }
            CssParserValue::Block(block) => {
                return CssValue::Block(CssBlockValue::from_parser_block(block))
            }
            CssParserValue::Ident(ident) => CssPrimitiveValue::Ident(Atom::from(ident)),
            &CssParserValue::Number { value, int_value } => {
                CssPrimitiveValue::Number { value, int_value }
            }
            &CssParserValue::Percentage {
                unit_value,
                int_value,
            } => CssPrimitiveValue::Percentage {
                unit_value,
                int_value,
            },
            CssParserValue::Dimension {
                value,
                int_value,
                unit,
            } => CssPrimitiveValue::Dimension {
                value: *value,
                int_value: *int_value,
                unit: Atom::from(unit),
            },
            CssParserValue::String(s) => CssPrimitiveValue::String(s.clone()),
            CssParserValue::Url(url) => CssPrimitiveValue::Url(url.clone()),
            CssParserValue::Hash(hash) => CssPrimitiveValue::Hash(hash.clone()),
            &CssParserValue::Operator(op) => CssPrimitiveValue::Operator(op),
        };

        CssValue::Primitive(primitive)
    }

    #[inline]
    pub fn is_operator(&self, ch: char) -> bool {
        matches!(self, CssValue::Primitive(primitive) if primitive.is_operator(ch))
    }

    #[inline]
    pub fn css_text(&self) -> String {
        self.to_css_string()
    }

    #[inline]
    pub fn equals(&self, other: &CssValue) -> bool {
        self == other
    }

    pub(crate) fn append_parser_values(
        &self,
        output: &mut CssParserValueList,
        substitution: &mut Substitution<'_>,
    ) -> Result<(), SubstitutionError> {
        match self {
            CssValue::Primitive(primitive) => output.append(primitive.to_parser_value()),
            CssValue::List(list) => list.append_parser_values(output, substitution)?,
            CssValue::Function(function) => {
                output.append(function.build_parser_value(substitution)?)
            }
            CssValue::Variable(variable) => substitution.substitute(variable, output)?,
            CssValue::Block(block) => output.append(block.build_parser_value(substitution)?),
        }

        Ok(())
    }
}

impl ToCss for CssValue {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        match self {
            CssValue::Primitive(primitive) => primitive.to_css(dest),
            CssValue::List(list) => list.to_css(dest),
            CssValue::Function(function) => function.to_css(dest),
            CssValue::Variable(variable) => variable.to_css(dest),
            CssValue::Block(block) => block.to_css(dest),
        }
    }
}

/// Simple block, e.g. `(1px + 2px)` in `calc((1px + 2px) * 2)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CssBlockValue {
    kind: BlockKind,
    contents: CssValueList,
}

impl CssBlockValue {
    #[inline]
    pub fn new(kind: BlockKind, contents: CssValueList) -> Self {
        CssBlockValue { kind, contents }
    }

    pub fn from_parser_block(block: &CssParserBlock) -> Self {
        CssBlockValue {
            kind: block.kind,
            contents: CssValueList::create_from_parser_value_list(&block.values),
        }
    }

    #[inline]
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    #[inline]
    pub fn contents(&self) -> &CssValueList {
        &self.contents
    }

    #[inline]
    pub fn css_text(&self) -> String {
        self.to_css_string()
    }

    pub(crate) fn build_parser_value(
        &self,
        substitution: &mut Substitution<'_>,
    ) -> Result<CssParserValue, SubstitutionError> {
        let mut values = CssParserValueList::new();

        self.contents.append_parser_values(&mut values, substitution)?;

        Ok(CssParserValue::Block(Box::new(CssParserBlock {
            kind: self.kind,
            values,
        })))
    }
}

impl ToCss for CssBlockValue {
    fn to_css<W: fmt::Write>(&self, dest: &mut W) -> fmt::Result {
        dest.write_char(self.kind.open())?;
        self.contents.to_css(dest)?;
        dest.write_char(self.kind.close())
    }
}

impl From<CssPrimitiveValue> for CssValue {
    #[inline]
    fn from(value: CssPrimitiveValue) -> Self {
        CssValue::Primitive(value)
    }
}

impl From<CssValueList> for CssValue {
    #[inline]
    fn from(value: CssValueList) -> Self {
        CssValue::List(value)
    }
}

impl From<CssFunctionValue> for CssValue {
    #[inline]
    fn from(value: CssFunctionValue) -> Self {
        CssValue::Function(value)
    }
}

impl From<CssBlockValue> for CssValue {
    #[inline]
    fn from(value: CssBlockValue) -> Self {
        CssValue::Block(value)
    }
}

impl From<CssVariableReference> for CssValue {
    #[inline]
    fn from(value: CssVariableReference) -> Self {
        CssValue::Variable(value)
    }
}

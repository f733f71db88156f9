use super::error::ValueParseErrorKind;
use super::CssParseError;
use cssparser::{ParseError, Parser, ParserInput, Token};

/// Component value as produced by the parser. This is the form values
/// take before they are turned into [`CssValue`]s, and again after
/// custom property references have been substituted.
///
/// [`CssValue`]: super::CssValue
#[derive(Clone, Debug, PartialEq)]
pub enum CssParserValue {
    Ident(String),
    Number {
        value: f32,
        int_value: Option<i32>,
    },
    /// `unit_value` is the fraction, i.e. `50%` is `0.5`.
    Percentage {
        unit_value: f32,
        int_value: Option<i32>,
    },
    Dimension {
        value: f32,
        int_value: Option<i32>,
        unit: String,
    },
    String(String),
    Url(String),
    Hash(String),
    Operator(char),
    Function(Box<CssParserFunction>),
    Variable(Box<CssParserVariable>),
    Block(Box<CssParserBlock>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CssParserFunction {
    /// Function name without the opening parenthesis.
    pub name: String,
    pub args: Option<CssParserValueList>,
}

/// `var(--name)` or `var(--name, fallback)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CssParserVariable {
    pub name: String,
    pub fallback: Option<CssParserValueList>,
}

/// Kind of a simple block, i.e. `(...)`, `[...]` or `{...}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Parenthesis,
    SquareBracket,
    CurlyBracket,
}

impl BlockKind {
    #[inline]
    pub fn open(self) -> char {
        match self {
            BlockKind::Parenthesis => '(',
            BlockKind::SquareBracket => '[',
            BlockKind::CurlyBracket => '{',
        }
    }

    #[inline]
    pub fn close(self) -> char {
        match self {
            BlockKind::Parenthesis => ')',
            BlockKind::SquareBracket => ']',
            BlockKind::CurlyBracket => '}',
        }
    }
}

/// Balanced block, e.g. the grouping in `calc((1px + 2px) * 2)` or the
/// line name in `repeat(2, [col] 1fr)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CssParserBlock {
    pub kind: BlockKind,
    pub values: CssParserValueList,
}

/// Functions and blocks nested deeper than this are rejected.
const MAX_NESTING_DEPTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct CssParserValueList {
    values: Vec<CssParserValue>,
}

impl CssParserValueList {
    #[inline]
    pub fn new() -> Self {
        CssParserValueList::default()
    }

    pub fn parse(text: &str) -> Result<Self, CssParseError> {
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);

        Self::parse_with(&mut parser, 0).map_err(CssParseError::from_parse_error)
    }

    pub(crate) fn parse_with<'i>(
        input: &mut Parser<'i, '_>,
        depth: usize,
    ) -> Result<Self, ParseError<'i, ValueParseErrorKind>> {
        if depth > MAX_NESTING_DEPTH {
            return Err(input.new_custom_error(ValueParseErrorKind::TooDeep {
                max: MAX_NESTING_DEPTH,
            }));
        }

        let mut list = CssParserValueList::new();

        // NOTE: `next` skips whitespace and comments and only fails
        // at the end of the input.
        while let Ok(token) = input.next() {
            let token = token.clone();

            let value = match token {
                Token::Ident(ref ident) => CssParserValue::Ident(ident.to_string()),
                Token::Number {
                    value, int_value, ..
                } => CssParserValue::Number { value, int_value },
                Token::Percentage {
                    unit_value,
                    int_value,
                    ..
                } => CssParserValue::Percentage {
                    unit_value,
                    int_value,
                },
                Token::Dimension {
                    value,
                    int_value,
                    ref unit,
                    ..
                } => CssParserValue::Dimension {
                    value,
                    int_value,
                    unit: unit.to_string(),
                },
                Token::QuotedString(ref s) => CssParserValue::String(s.to_string()),
                Token::UnquotedUrl(ref url) => CssParserValue::Url(url.to_string()),
                Token::Hash(ref hash) | Token::IDHash(ref hash) => {
                    CssParserValue::Hash(hash.to_string())
                }
                Token::Comma => CssParserValue::Operator(','),
                Token::Colon => CssParserValue::Operator(':'),
                Token::Delim(ch) => CssParserValue::Operator(ch),
                Token::Function(ref name) if name.eq_ignore_ascii_case("var") => {
                    CssParserValue::Variable(Box::new(input.parse_nested_block(|input| {
                        CssParserVariable::parse_arguments(input, depth + 1)
                    })?))
                }
                Token::Function(ref name) => {
                    let args = input.parse_nested_block(|input| Self::parse_with(input, depth + 1))?;

                    CssParserValue::Function(Box::new(CssParserFunction {
                        name: name.to_string(),
                        args: Some(args),
                    }))
                }
                Token::ParenthesisBlock => Self::parse_block(input, BlockKind::Parenthesis, depth)?,
                Token::SquareBracketBlock => {
                    Self::parse_block(input, BlockKind::SquareBracket, depth)?
                }
                Token::CurlyBracketBlock => Self::parse_block(input, BlockKind::CurlyBracket, depth)?,
                other => return Err(input.new_unexpected_token_error(other)),
            };

            list.append(value);
        }

        Ok(list)
    }

    fn parse_block<'i>(
        input: &mut Parser<'i, '_>,
        kind: BlockKind,
        depth: usize,
    ) -> Result<CssParserValue, ParseError<'i, ValueParseErrorKind>> {
        let values = input.parse_nested_block(|input| Self::parse_with(input, depth + 1))?;

        Ok(CssParserValue::Block(Box::new(CssParserBlock { kind, values })))
    }

    #[inline]
    pub fn append(&mut self, value: CssParserValue) {
        self.values.push(value);
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
    pub fn iter(&self) -> std::slice::Iter<'_, CssParserValue> {
        self.values.iter()
    }
}

impl FromIterator<CssParserValue> for CssParserValueList {
    fn from_iter<I: IntoIterator<Item = CssParserValue>>(iter: I) -> Self {
        CssParserValueList {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CssParserValueList {
    type Item = &'a CssParserValue;
    type IntoIter = std::slice::Iter<'a, CssParserValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl CssParserVariable {
    fn parse_arguments<'i>(
        input: &mut Parser<'i, '_>,
        depth: usize,
    ) -> Result<Self, ParseError<'i, ValueParseErrorKind>> {
        let name = input.expect_ident()?.to_string();

        if !name.starts_with("--") {
            return Err(input.new_custom_error(ValueParseErrorKind::InvalidVariableName(name)));
        }

        let fallback = if input.try_parse(|input| input.expect_comma()).is_ok() {
            Some(CssParserValueList::parse_with(input, depth)?)
        } else {
            input.expect_exhausted()?;
            None
        };

        Ok(CssParserVariable { name, fallback })
    }
}

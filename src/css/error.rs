use cssparser::{BasicParseErrorKind, ParseError, ParseErrorKind, ToCss};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum CssParseError {
    #[error("Unexpected token `{token}` at {line}:{column}.")]
    UnexpectedToken {
        token: String,
        line: u32,
        column: u32,
    },
    #[error("Unexpected end of the value.")]
    UnexpectedEnd,
    #[error("Expected a custom property name in `var()`, got `{0}`.")]
    InvalidVariableName(String),
    #[error("Unsupported syntax in the value.")]
    UnsupportedSyntax,
    #[error("Functions and blocks are nested deeper than {max} levels.")]
    TooDeep { max: usize },
}

/// Custom error kinds raised while building parser values.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValueParseErrorKind {
    InvalidVariableName(String),
    TooDeep { max: usize },
}

impl CssParseError {
    pub(crate) fn from_parse_error(err: ParseError<'_, ValueParseErrorKind>) -> Self {
        match err.kind {
            ParseErrorKind::Basic(kind) => match kind {
                BasicParseErrorKind::UnexpectedToken(token) => CssParseError::UnexpectedToken {
                    token: token.to_css_string(),
                    line: err.location.line + 1,
                    column: err.location.column,
                },
                BasicParseErrorKind::EndOfInput => CssParseError::UnexpectedEnd,
                _ => CssParseError::UnsupportedSyntax,
            },
            ParseErrorKind::Custom(ValueParseErrorKind::InvalidVariableName(name)) => {
                CssParseError::InvalidVariableName(name)
            }
            ParseErrorKind::Custom(ValueParseErrorKind::TooDeep { max }) => {
                CssParseError::TooDeep { max }
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SubstitutionError {
    #[error("Custom property `{0}` is not defined and the reference has no fallback.")]
    UndefinedVariable(String),
    #[error("Custom property `{0}` has an invalid value and the reference has no fallback.")]
    InvalidCustomProperty(String),
    #[error("Custom property `{0}` references itself.")]
    Cycle(String),
    #[error("Custom property references are nested deeper than {max} levels.")]
    TooDeep { max: usize },
}

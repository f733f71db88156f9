use crate::css::{CssParseError, SubstitutionError};
use crate::html::AtomicTokenError;
use thiserror::Error;

/// Any error produced by this crate.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error(transparent)]
    AtomicToken(#[from] AtomicTokenError),

    #[error(transparent)]
    CssParse(#[from] CssParseError),

    #[error(transparent)]
    Substitution(#[from] SubstitutionError),
}

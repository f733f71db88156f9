//! Stable, queryable HTML tokens and serializable CSS function values.
//!
//! The [`html`] module turns the transient token a tokenizer fills in place
//! ([`html::HtmlToken`]) into an [`html::AtomicHtmlToken`] with interned
//! names and deduplicated attributes. The [`css`] module provides
//! [`css::CssFunctionValue`], which serializes back to CSS text and can be
//! rebuilt into parser values with custom property references substituted.

#[macro_use]
mod debug_trace;

pub mod base;
pub mod css;
mod errors;
pub mod html;

pub use self::base::Atom;
pub use self::errors::Error;

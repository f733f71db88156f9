use super::{
    find_attribute, Attribute, AttributeSettings, DoctypeData, HtmlToken, QualifiedName,
    RawAttribute, TokenKind,
};
use crate::base::Atom;
use encoding_rs::mem::is_str_latin1;
use hashbrown::HashSet;
use std::borrow::Cow;
use std::fmt::{self, Debug};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum AtomicTokenError {
    #[error("Uninitialized token can't be converted to an atomic token.")]
    Uninitialized,
    #[error("Expected start or end tag token kind, got {0:?}.")]
    NotATag(TokenKind),
    #[error("{0:?} token doesn't have a name.")]
    Nameless(TokenKind),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tag {
    name: Atom,
    self_closing: bool,
    attributes: Vec<Attribute>,
}

impl Tag {
    #[inline]
    pub fn name(&self) -> &Atom {
        &self.name
    }

    #[inline]
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// Character data of a character token. Borrows the buffer of the
/// [`HtmlToken`] it was created from until [`Characters::into_owned`]
/// is called.
#[derive(Clone, PartialEq, Eq)]
pub struct Characters<'t> {
    text: Cow<'t, str>,
    is_all_8bit: bool,
}

impl<'t> Characters<'t> {
    #[inline]
    pub fn new(text: impl Into<Cow<'t, str>>) -> Self {
        let text = text.into();
        let is_all_8bit = is_str_latin1(&text);

        Characters { text, is_all_8bit }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.text, Cow::Borrowed(_))
    }

    #[inline]
    pub fn into_owned(self) -> Characters<'static> {
        Characters {
            text: Cow::Owned(self.text.into_owned()),
            is_all_8bit: self.is_all_8bit,
        }
    }
}

impl Debug for Characters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Characters")
            .field("text", &self.as_str())
            .field("is_all_8bit", &self.is_all_8bit)
            .finish()
    }
}

/// Stable version of [`HtmlToken`]: names are interned and attributes
/// are normalized (no empty names, first occurrence of a name wins).
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AtomicHtmlToken<'t> {
    Doctype { name: Atom, data: Box<DoctypeData> },
    StartTag(Tag),
    EndTag(Tag),
    Comment(String),
    Character(Characters<'t>),
    EndOfFile,
}

impl<'t> AtomicHtmlToken<'t> {
    /// Converts the token using the given attribute normalization settings.
    ///
    /// Doctype data is moved out of `token`. Character tokens borrow the
    /// character buffer of `token`.
    pub fn with_settings(
        token: &'t mut HtmlToken,
        settings: &AttributeSettings,
    ) -> Result<Self, AtomicTokenError> {
        Ok(match token.kind() {
            TokenKind::Uninitialized => return Err(AtomicTokenError::Uninitialized),
            TokenKind::Doctype => AtomicHtmlToken::Doctype {
                name: Atom::from(token.name()),
                data: token.release_doctype_data().unwrap_or_default(),
            },
            TokenKind::EndOfFile => AtomicHtmlToken::EndOfFile,
            kind @ (TokenKind::StartTag | TokenKind::EndTag) => {
                let tag = Tag {
                    name: Atom::from(token.name()),
                    self_closing: token.self_closing(),
                    attributes: normalize_attributes(token.attributes(), settings),
                };

                if kind == TokenKind::StartTag {
                    AtomicHtmlToken::StartTag(tag)
                } else {
                    AtomicHtmlToken::EndTag(tag)
                }
            }
            TokenKind::Comment => AtomicHtmlToken::Comment(token.comment().to_owned()),
            TokenKind::Character => {
                let token: &'t HtmlToken = token;

                AtomicHtmlToken::Character(Characters {
                    text: Cow::Borrowed(token.characters()),
                    is_all_8bit: token.characters_is_all_8bit(),
                })
            }
        })
    }

    /// Creates a start or end tag token from already normalized parts.
    pub fn new_tag(
        kind: TokenKind,
        name: Atom,
        attributes: Vec<Attribute>,
    ) -> Result<Self, AtomicTokenError> {
        let tag = Tag {
            name,
            self_closing: false,
            attributes,
        };

        match kind {
            TokenKind::StartTag => Ok(AtomicHtmlToken::StartTag(tag)),
            TokenKind::EndTag => Ok(AtomicHtmlToken::EndTag(tag)),
            _ => Err(AtomicTokenError::NotATag(kind)),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        match self {
            AtomicHtmlToken::Doctype { .. } => TokenKind::Doctype,
            AtomicHtmlToken::StartTag(_) => TokenKind::StartTag,
            AtomicHtmlToken::EndTag(_) => TokenKind::EndTag,
            AtomicHtmlToken::Comment(_) => TokenKind::Comment,
            AtomicHtmlToken::Character(_) => TokenKind::Character,
            AtomicHtmlToken::EndOfFile => TokenKind::EndOfFile,
        }
    }

    #[inline]
    fn tag(&self) -> Option<&Tag> {
        match self {
            AtomicHtmlToken::StartTag(tag) | AtomicHtmlToken::EndTag(tag) => Some(tag),
            _ => None,
        }
    }

    #[inline]
    fn doctype_data(&self) -> Option<&DoctypeData> {
        match self {
            AtomicHtmlToken::Doctype { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Name of a start tag, an end tag or a doctype.
    #[inline]
    pub fn name(&self) -> Option<&Atom> {
        match self {
            AtomicHtmlToken::Doctype { name, .. } => Some(name),
            AtomicHtmlToken::StartTag(tag) | AtomicHtmlToken::EndTag(tag) => Some(&tag.name),
            _ => None,
        }
    }

    pub fn set_name(&mut self, new_name: Atom) -> Result<(), AtomicTokenError> {
        match self {
            AtomicHtmlToken::Doctype { name, .. } => *name = new_name,
            AtomicHtmlToken::StartTag(tag) | AtomicHtmlToken::EndTag(tag) => tag.name = new_name,
            _ => return Err(AtomicTokenError::Nameless(self.kind())),
        }

        Ok(())
    }

    #[inline]
    pub fn self_closing(&self) -> bool {
        self.tag().is_some_and(|tag| tag.self_closing)
    }

    /// Attributes of a start or end tag. Empty for other kinds.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        self.tag().map(Tag::attributes).unwrap_or_default()
    }

    #[inline]
    pub fn attributes_mut(&mut self) -> Option<&mut Vec<Attribute>> {
        match self {
            AtomicHtmlToken::StartTag(tag) | AtomicHtmlToken::EndTag(tag) => {
                Some(&mut tag.attributes)
            }
            _ => None,
        }
    }

    #[inline]
    pub fn force_quirks(&self) -> Option<bool> {
        self.doctype_data().map(|data| data.force_quirks)
    }

    #[inline]
    pub fn public_identifier(&self) -> Option<&str> {
        self.doctype_data()
            .filter(|data| data.has_public_identifier)
            .map(|data| data.public_identifier.as_str())
    }

    #[inline]
    pub fn system_identifier(&self) -> Option<&str> {
        self.doctype_data()
            .filter(|data| data.has_system_identifier)
            .map(|data| data.system_identifier.as_str())
    }

    #[inline]
    pub fn characters(&self) -> Option<&str> {
        match self {
            AtomicHtmlToken::Character(chars) => Some(chars.as_str()),
            _ => None,
        }
    }

    /// Length of the character data in bytes.
    #[inline]
    pub fn characters_len(&self) -> Option<usize> {
        self.characters().map(str::len)
    }

    #[inline]
    pub fn characters_is_all_8bit(&self) -> bool {
        matches!(self, AtomicHtmlToken::Character(chars) if chars.is_all_8bit)
    }

    #[inline]
    pub fn comment(&self) -> Option<&str> {
        match self {
            AtomicHtmlToken::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    /// Copies borrowed character data, so the token outlives the
    /// [`HtmlToken`] it was created from.
    pub fn into_owned(self) -> AtomicHtmlToken<'static> {
        match self {
            AtomicHtmlToken::Doctype { name, data } => AtomicHtmlToken::Doctype { name, data },
            AtomicHtmlToken::StartTag(tag) => AtomicHtmlToken::StartTag(tag),
            AtomicHtmlToken::EndTag(tag) => AtomicHtmlToken::EndTag(tag),
            AtomicHtmlToken::Comment(comment) => AtomicHtmlToken::Comment(comment),
            AtomicHtmlToken::Character(chars) => AtomicHtmlToken::Character(chars.into_owned()),
            AtomicHtmlToken::EndOfFile => AtomicHtmlToken::EndOfFile,
        }
    }
}

impl<'t> TryFrom<&'t mut HtmlToken> for AtomicHtmlToken<'t> {
    type Error = AtomicTokenError;

    #[inline]
    fn try_from(token: &'t mut HtmlToken) -> Result<Self, Self::Error> {
        AtomicHtmlToken::with_settings(token, &AttributeSettings::default())
    }
}

fn normalize_attributes(raw: &[RawAttribute], settings: &AttributeSettings) -> Vec<Attribute> {
    let mut attributes = Vec::with_capacity(raw.len());

    if raw.len() > settings.hash_dedup_threshold {
        // NOTE: names built here never have a prefix or a namespace, so
        // `QualifiedName::matches` boils down to local name equality.
        let mut seen = HashSet::with_capacity(raw.len());

        for attr in raw.iter().filter(|attr| !attr.name.is_empty()) {
            let local_name = Atom::from(attr.name.as_str());

            if seen.insert(local_name.clone()) {
                attributes.push(Attribute::new(
                    QualifiedName::local(local_name),
                    Atom::from(attr.value.as_str()),
                ));
            } else {
                trace!(@dedup "dropping duplicate attribute `{}`", attr.name);
            }
        }
    } else {
        for attr in raw.iter().filter(|attr| !attr.name.is_empty()) {
            let name = QualifiedName::local(attr.name.as_str());

            if find_attribute(&attributes, &name).is_none() {
                attributes.push(Attribute::new(name, Atom::from(attr.value.as_str())));
            } else {
                trace!(@dedup "dropping duplicate attribute `{}`", attr.name);
            }
        }
    }

    if attributes.len() < raw.len() {
        log::debug!(
            "normalized attribute list: {} of {} attributes kept",
            attributes.len(),
            raw.len()
        );
    }

    attributes
}

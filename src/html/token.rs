use encoding_rs::mem::is_str_latin1;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum TokenKind {
    #[default]
    Uninitialized,
    Doctype,
    StartTag,
    EndTag,
    Comment,
    Character,
    EndOfFile,
}

impl TokenKind {
    #[inline]
    pub fn is_tag(self) -> bool {
        self == TokenKind::StartTag || self == TokenKind::EndTag
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DoctypeData {
    pub force_quirks: bool,
    pub has_public_identifier: bool,
    pub public_identifier: String,
    pub has_system_identifier: bool,
    pub system_identifier: String,
}

/// Attribute exactly as the tokenizer saw it: names may be empty or
/// repeated.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RawAttribute {
    pub name: String,
    pub value: String,
}

impl RawAttribute {
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        RawAttribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Token filled in place by a tokenizer. The token is reused for the
/// next lexeme after [`HtmlToken::clear`], so consumers that need to
/// keep it around convert it into an [`AtomicHtmlToken`].
///
/// [`AtomicHtmlToken`]: super::AtomicHtmlToken
#[derive(Debug)]
pub struct HtmlToken {
    kind: TokenKind,
    name: String,
    self_closing: bool,
    attributes: Vec<RawAttribute>,
    in_attribute: bool,
    // NOTE: comment text or character data, depending on the kind.
    data: String,
    data_is_all_8bit: bool,
    doctype_data: Option<Box<DoctypeData>>,
}

impl Default for HtmlToken {
    fn default() -> Self {
        HtmlToken {
            kind: TokenKind::Uninitialized,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
            in_attribute: false,
            data: String::new(),
            data_is_all_8bit: true,
            doctype_data: None,
        }
    }
}

impl HtmlToken {
    #[inline]
    pub fn new() -> Self {
        HtmlToken::default()
    }

    /// Resets the token to the uninitialized state keeping the allocated
    /// buffers.
    pub fn clear(&mut self) {
        self.kind = TokenKind::Uninitialized;
        self.name.clear();
        self.self_closing = false;
        self.attributes.clear();
        self.in_attribute = false;
        self.data.clear();
        self.data_is_all_8bit = true;
        self.doctype_data = None;
    }

    #[inline]
    fn begin(&mut self, kind: TokenKind) {
        debug_assert_eq!(self.kind, TokenKind::Uninitialized);

        self.clear();
        self.kind = kind;
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    // Start and end tags

    #[inline]
    pub fn begin_start_tag(&mut self) {
        self.begin(TokenKind::StartTag);
    }

    #[inline]
    pub fn begin_end_tag(&mut self) {
        self.begin(TokenKind::EndTag);
    }

    #[inline]
    pub fn append_to_name(&mut self, chars: &str) {
        debug_assert!(matches!(
            self.kind,
            TokenKind::StartTag | TokenKind::EndTag | TokenKind::Doctype
        ));

        self.name.push_str(chars);
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn set_self_closing(&mut self) {
        debug_assert!(self.kind.is_tag());

        self.self_closing = true;
    }

    #[inline]
    pub fn self_closing(&self) -> bool {
        self.self_closing
    }

    #[inline]
    pub fn begin_attribute(&mut self) {
        debug_assert!(self.kind.is_tag());
        debug_assert!(!self.in_attribute);

        self.attributes.push(RawAttribute::default());
        self.in_attribute = true;
    }

    #[inline]
    pub fn append_to_attribute_name(&mut self, chars: &str) {
        debug_assert!(self.in_attribute);

        if let Some(attr) = self.current_attribute() {
            attr.name.push_str(chars);
        }
    }

    #[inline]
    pub fn append_to_attribute_value(&mut self, chars: &str) {
        debug_assert!(self.in_attribute);

        if let Some(attr) = self.current_attribute() {
            attr.value.push_str(chars);
        }
    }

    #[inline]
    pub fn end_attribute(&mut self) {
        debug_assert!(self.in_attribute);

        self.in_attribute = false;
    }

    #[inline]
    fn current_attribute(&mut self) -> Option<&mut RawAttribute> {
        if self.in_attribute {
            self.attributes.last_mut()
        } else {
            None
        }
    }

    #[inline]
    pub fn attributes(&self) -> &[RawAttribute] {
        &self.attributes
    }

    // Doctype

    #[inline]
    pub fn begin_doctype(&mut self) {
        self.begin(TokenKind::Doctype);
        self.doctype_data = Some(Box::default());
    }

    #[inline]
    fn doctype_data_mut(&mut self) -> Option<&mut DoctypeData> {
        debug_assert_eq!(self.kind, TokenKind::Doctype);

        self.doctype_data.as_deref_mut()
    }

    #[inline]
    pub fn set_force_quirks(&mut self) {
        if let Some(data) = self.doctype_data_mut() {
            data.force_quirks = true;
        }
    }

    #[inline]
    pub fn set_public_identifier(&mut self, identifier: &str) {
        if let Some(data) = self.doctype_data_mut() {
            data.has_public_identifier = true;
            data.public_identifier.clear();
            data.public_identifier.push_str(identifier);
        }
    }

    #[inline]
    pub fn set_system_identifier(&mut self, identifier: &str) {
        if let Some(data) = self.doctype_data_mut() {
            data.has_system_identifier = true;
            data.system_identifier.clear();
            data.system_identifier.push_str(identifier);
        }
    }

    #[inline]
    pub fn doctype_data(&self) -> Option<&DoctypeData> {
        self.doctype_data.as_deref()
    }

    /// Moves the doctype data out of the token. Subsequent calls return
    /// `None` until the next doctype begins.
    #[inline]
    pub fn release_doctype_data(&mut self) -> Option<Box<DoctypeData>> {
        self.doctype_data.take()
    }

    // Comment

    #[inline]
    pub fn begin_comment(&mut self) {
        self.begin(TokenKind::Comment);
    }

    #[inline]
    pub fn append_to_comment(&mut self, chars: &str) {
        debug_assert_eq!(self.kind, TokenKind::Comment);

        self.append_to_data(chars);
    }

    #[inline]
    pub fn comment(&self) -> &str {
        debug_assert_eq!(self.kind, TokenKind::Comment);

        &self.data
    }

    #[inline]
    pub fn comment_is_all_8bit(&self) -> bool {
        self.data_is_all_8bit
    }

    // Character

    /// Appends character data, starting a character token if the token
    /// is uninitialized.
    #[inline]
    pub fn append_to_character(&mut self, chars: &str) {
        if self.kind == TokenKind::Uninitialized {
            self.begin(TokenKind::Character);
        }

        debug_assert_eq!(self.kind, TokenKind::Character);

        self.append_to_data(chars);
    }

    #[inline]
    pub fn characters(&self) -> &str {
        debug_assert_eq!(self.kind, TokenKind::Character);

        &self.data
    }

    #[inline]
    pub fn characters_is_all_8bit(&self) -> bool {
        self.data_is_all_8bit
    }

    // End of file

    #[inline]
    pub fn make_end_of_file(&mut self) {
        self.begin(TokenKind::EndOfFile);
    }

    #[inline]
    fn append_to_data(&mut self, chars: &str) {
        self.data_is_all_8bit &= is_str_latin1(chars);
        self.data.push_str(chars);
    }
}

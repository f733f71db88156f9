mod atomic_token;
mod attribute;
mod qualified_name;
mod settings;
mod token;

pub use self::atomic_token::{AtomicHtmlToken, AtomicTokenError, Characters, Tag};
pub use self::attribute::{find_attribute, find_attribute_mut, Attribute};
pub use self::qualified_name::QualifiedName;
pub use self::settings::AttributeSettings;
pub use self::token::{DoctypeData, HtmlToken, RawAttribute, TokenKind};

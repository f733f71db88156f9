use crate::base::Atom;
use std::fmt::{self, Display};

/// Attribute or element name with an optional prefix and namespace.
/// Absent prefix and namespace are the "null" atoms of the DOM.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct QualifiedName {
    prefix: Option<Atom>,
    local_name: Atom,
    namespace: Option<Atom>,
}

impl QualifiedName {
    #[inline]
    pub fn new(prefix: Option<Atom>, local_name: Atom, namespace: Option<Atom>) -> Self {
        QualifiedName {
            prefix,
            local_name,
            namespace,
        }
    }

    /// Name without a prefix and a namespace, as produced by the tokenizer.
    #[inline]
    pub fn local(local_name: impl Into<Atom>) -> Self {
        QualifiedName::new(None, local_name.into(), None)
    }

    #[inline]
    pub fn prefix(&self) -> Option<&Atom> {
        self.prefix.as_ref()
    }

    #[inline]
    pub fn local_name(&self) -> &Atom {
        &self.local_name
    }

    #[inline]
    pub fn namespace(&self) -> Option<&Atom> {
        self.namespace.as_ref()
    }

    #[inline]
    pub fn has_prefix_or_namespace(&self) -> bool {
        self.prefix.is_some() || self.namespace.is_some()
    }

    /// Loose name comparison used for attribute lookup: local names
    /// must be equal, and then either prefixes or namespaces.
    #[inline]
    pub fn matches(&self, other: &QualifiedName) -> bool {
        self == other
            || (self.local_name == other.local_name
                && (self.prefix == other.prefix || self.namespace == other.namespace))
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}:")?;
        }

        f.write_str(&self.local_name)
    }
}

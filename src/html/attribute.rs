use super::QualifiedName;
use crate::base::Atom;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Attribute {
    name: QualifiedName,
    value: Atom,
}

impl Attribute {
    #[inline]
    pub fn new(name: QualifiedName, value: Atom) -> Self {
        Attribute { name, value }
    }

    #[inline]
    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    #[inline]
    pub fn local_name(&self) -> &Atom {
        self.name.local_name()
    }

    #[inline]
    pub fn value(&self) -> &Atom {
        &self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: Atom) {
        self.value = value;
    }
}

/// Returns the first attribute whose name matches `name`.
#[inline]
pub fn find_attribute<'a>(attributes: &'a [Attribute], name: &QualifiedName) -> Option<&'a Attribute> {
    attributes.iter().find(|attr| attr.name.matches(name))
}

#[inline]
pub fn find_attribute_mut<'a>(
    attributes: &'a mut [Attribute],
    name: &QualifiedName,
) -> Option<&'a mut Attribute> {
    attributes.iter_mut().find(|attr| attr.name.matches(name))
}

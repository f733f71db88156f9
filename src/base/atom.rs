//! Interned strings.
//!
//! Tag names, attribute names and values, CSS identifiers and custom
//! property names repeat a lot, so they are stored once per thread and
//! shared. Two atoms with the same text always point to the same
//! allocation, which makes equality a pointer comparison. The hash is
//! computed once at interning time.
//!
//! Interned strings are never released.
use hashbrown::DefaultHashBuilder;
use hashbrown::HashMap;
use precomputed_hash::PrecomputedHash;
use std::cell::RefCell;
use std::fmt::{self, Debug, Display};
use std::hash::{BuildHasher, Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

#[derive(Default)]
struct AtomTable {
    entries: HashMap<Rc<str>, u32>,
    hash_builder: DefaultHashBuilder,
}

impl AtomTable {
    fn intern(&mut self, text: &str) -> Atom {
        if let Some((text, &hash)) = self.entries.get_key_value(text) {
            return Atom {
                text: Rc::clone(text),
                hash,
            };
        }

        // NOTE: only the low 32 bits are kept, that's what selectors
        // and bloom filters consume.
        let hash = self.hash_builder.hash_one(text) as u32;
        let text: Rc<str> = Rc::from(text);

        self.entries.insert(Rc::clone(&text), hash);

        Atom { text, hash }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

thread_local! {
    static ATOMS: RefCell<AtomTable> = RefCell::new(AtomTable::default());
}

#[derive(Clone)]
pub struct Atom {
    text: Rc<str>,
    hash: u32,
}

impl Atom {
    #[inline]
    pub fn new(text: &str) -> Self {
        ATOMS.with(|atoms| atoms.borrow_mut().intern(text))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the interned ASCII-lowercase version of the atom. Doesn't
    /// touch the table if the atom is already lowercase.
    pub fn to_ascii_lowercase(&self) -> Atom {
        if self.text.bytes().any(|b| b.is_ascii_uppercase()) {
            Atom::new(&self.text.to_ascii_lowercase())
        } else {
            self.clone()
        }
    }

    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &str) -> bool {
        self.text.eq_ignore_ascii_case(other)
    }
}

impl Default for Atom {
    #[inline]
    fn default() -> Self {
        Atom::new("")
    }
}

impl From<&str> for Atom {
    #[inline]
    fn from(text: &str) -> Self {
        Atom::new(text)
    }
}

impl From<String> for Atom {
    #[inline]
    fn from(text: String) -> Self {
        Atom::new(&text)
    }
}

impl From<&String> for Atom {
    #[inline]
    fn from(text: &String) -> Self {
        Atom::new(text)
    }
}

impl Deref for Atom {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Atom {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Atom {
    #[inline]
    fn eq(&self, other: &Atom) -> bool {
        // NOTE: atoms are `!Send`, so both sides come from the
        // same thread-local table.
        Rc::ptr_eq(&self.text, &other.text)
    }
}

impl Eq for Atom {}

impl PartialEq<str> for Atom {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.text == other
    }
}

impl PartialEq<&str> for Atom {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.text == *other
    }
}

impl Hash for Atom {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}

impl PrecomputedHash for Atom {
    #[inline]
    fn precomputed_hash(&self) -> u32 {
        self.hash
    }
}

impl Display for Atom {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Debug for Atom {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.text, f)
    }
}

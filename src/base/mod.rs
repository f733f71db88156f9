mod atom;

pub use self::atom::Atom;

//! Labels: compile-time field and alternative names.
//!
//! A label is a zero-sized marker type that carries its text as an
//! associated constant. Records use labels to name fields, unions use them to
//! name alternatives, and the same label type can serve both.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::model::Field;

/// A compile-time field or alternative name.
///
/// Implement with the [`labels!`](crate::labels) macro rather than by hand.
pub trait Label: Copy + Default + Eq + Hash + fmt::Debug + 'static {
    /// The label text.
    const NAME: &'static str;

    /// Returns the label text.
    fn name(self) -> &'static str {
        Self::NAME
    }

    /// Pairs this label with a value, forming a single-field record.
    fn field<V>(self, value: V) -> Field<Self, V> {
        Field::new(self, value)
    }

    /// Returns the symbol token for this label.
    fn symbol(self) -> Symbol<Self> {
        Symbol::new()
    }
}

/// Something that selects a single label.
///
/// Both a bare label and a single-field record select their label, so
/// accessors accept either `Name` or `field!(Name = ..)`.
pub trait Selector {
    /// The selected label.
    type Label: Label;
}

impl<L: Label> Selector for L {
    type Label = L;
}

impl<L: Label, V> Selector for Field<L, V> {
    type Label = L;
}

/// A label token with no runtime payload.
pub struct Symbol<L>(PhantomData<L>);

impl<L: Label> Symbol<L> {
    /// Creates the token for `L`.
    pub const fn new() -> Self {
        Symbol(PhantomData)
    }

    /// Returns the label text.
    pub fn name(self) -> &'static str {
        L::NAME
    }
}

impl<L: Label> Default for Symbol<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Clone for Symbol<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Symbol<L> {}

impl<L> PartialEq for Symbol<L> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<L> Eq for Symbol<L> {}

impl<L: Label> fmt::Debug for Symbol<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", L::NAME)
    }
}

impl<L: Label> fmt::Display for Symbol<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(L::NAME)
    }
}

/// Extracts the label token from a selector.
pub fn symbol<S: Selector>(_selector: &S) -> Symbol<S::Label> {
    Symbol::new()
}

/// Declares label marker types.
///
/// Each label's text defaults to its type name; `Name = "name"` overrides it.
///
/// ```rust
/// rowkit::labels! {
///     pub Name = "name",
///     pub Nickname = "nickname",
///     Active,
/// }
///
/// use rowkit::Label;
/// assert_eq!(Name::NAME, "name");
/// assert_eq!(Active::NAME, "Active");
/// ```
#[macro_export]
macro_rules! labels {
    ($($(#[$meta:meta])* $vis:vis $name:ident $(= $text:literal)?),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            $vis struct $name;

            impl $crate::Label for $name {
                const NAME: &'static str = $crate::__label_text!($name $(, $text)?);
            }
        )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __label_text {
    ($name:ident) => {
        ::core::stringify!($name)
    };
    ($name:ident, $text:literal) => {
        $text
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::labels! {
        Name = "name",
        Age,
    }

    #[test]
    fn test_label_text() {
        assert_eq!(Name::NAME, "name");
        assert_eq!(Age::NAME, "Age");
        assert_eq!(Name.name(), "name");
    }

    #[test]
    fn test_symbol_from_selectors() {
        assert_eq!(symbol(&Name).name(), "name");
        assert_eq!(symbol(&Name.field(42)).name(), "name");
        assert_eq!(Age.symbol().to_string(), "Age");
        assert_eq!(format!("{:?}", Symbol::<Name>::new()), "Symbol(name)");
    }
}

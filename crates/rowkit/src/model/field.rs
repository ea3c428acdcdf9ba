//! Single-field records.

use crate::access::{HasOptional, HasRequired, SetOptional};
use crate::model::Label;

/// A record with exactly one field: `{ label: value }`.
///
/// Used to inject union values (the label picks the alternative) and as a
/// selector. It is also the smallest required-fields record: it has the field
/// for its own label and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Field<L, V> {
    /// The field's label.
    pub label: L,
    /// The field's value.
    pub value: V,
}

impl<L: Label, V> Field<L, V> {
    /// Creates a single-field record.
    pub fn new(label: L, value: V) -> Self {
        Self { label, value }
    }

    /// Returns the label text.
    pub fn name(&self) -> &'static str {
        L::NAME
    }

    /// Consumes the record, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Maps the value, keeping the label.
    pub fn map<W, F>(self, f: F) -> Field<L, W>
    where
        F: FnOnce(V) -> W,
    {
        Field {
            label: self.label,
            value: f(self.value),
        }
    }
}

impl<L: Label, V> HasRequired<L> for Field<L, V> {
    type Value = V;

    fn required(&self) -> &V {
        &self.value
    }

    fn required_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<L: Label, V> HasOptional<L> for Field<L, Option<V>> {
    type Value = V;

    fn optional(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

impl<L: Label, V> SetOptional<L> for Field<L, Option<V>> {
    fn set_optional(&mut self, value: Option<V>) -> Option<V> {
        std::mem::replace(&mut self.value, value)
    }
}

/// Builds a [`Field`] from `Label = value`.
///
/// ```rust
/// rowkit::labels! { Error = "error" }
///
/// let field = rowkit::field!(Error = "boom");
/// assert_eq!(field.name(), "error");
/// assert_eq!(field.value, "boom");
/// ```
#[macro_export]
macro_rules! field {
    ($label:path = $value:expr) => {
        $crate::Field::new($label, $value)
    };
}

//! Typed field accessors.
//!
//! Containers declare which labels they carry through two capability traits:
//! - [`HasRequired`]: the field is always present
//! - [`HasOptional`]: the field may be absent (optional record fields, and
//!   union alternatives that may not be the active one)
//!
//! The container and the label together determine the value type through the
//! traits' associated `Value`. Asking a container for a label it does not
//! carry is a compile error, so none of the accessors here can fail at runtime.
//!
//! # Example
//!
//! ```rust
//! use rowkit::{get_optional, get_required, FieldAccess};
//!
//! rowkit::labels! {
//!     Name = "name",
//!     Nickname = "nickname",
//! }
//!
//! rowkit::record! {
//!     #[derive(Debug, Clone)]
//!     pub struct Person {
//!         required { Name => name: String }
//!         optional { Nickname => nickname: String }
//!     }
//! }
//!
//! let person = Person::new("Margaret".to_string()).with(Nickname, "Peggy".to_string());
//!
//! assert_eq!(get_required(Name, &person), "Margaret");
//! assert_eq!(get_optional(Nickname, &person).map(String::as_str), Some("Peggy"));
//! assert_eq!(person.req(Name), get_required(Name, &person));
//! ```

mod record;

use crate::model::{Label, Selector};

/// Marks `L` as declared by a record; one impl per label rejects duplicates.
#[doc(hidden)]
pub trait DeclaresLabel<L: Label> {}

/// A container whose field `L` is always present.
pub trait HasRequired<L: Label> {
    /// The field's value type.
    type Value;

    /// Returns the field.
    fn required(&self) -> &Self::Value;

    /// Returns the field mutably.
    fn required_mut(&mut self) -> &mut Self::Value;
}

/// A container whose field `L` may be absent.
pub trait HasOptional<L: Label> {
    /// The field's value type, without the absence wrapper.
    type Value;

    /// Returns the field if present.
    fn optional(&self) -> Option<&Self::Value>;
}

/// A container whose optional field `L` can be replaced.
pub trait SetOptional<L: Label>: HasOptional<L> {
    /// Replaces the field, returning the previous value.
    fn set_optional(&mut self, value: Option<Self::Value>) -> Option<Self::Value>;
}

/// Reads a possibly-absent field.
///
/// Returns `None` when an optional field is unset, or when the container is a
/// union whose active label is not the selected one.
pub fn get_optional<S, C>(_selector: S, container: &C) -> Option<&<C as HasOptional<S::Label>>::Value>
where
    S: Selector,
    C: HasOptional<S::Label> + ?Sized,
{
    <C as HasOptional<S::Label>>::optional(container)
}

/// Reads an always-present field.
pub fn get_required<S, C>(_selector: S, container: &C) -> &<C as HasRequired<S::Label>>::Value
where
    S: Selector,
    C: HasRequired<S::Label> + ?Sized,
{
    <C as HasRequired<S::Label>>::required(container)
}

/// Mutably borrows an always-present field.
pub fn get_required_mut<S, C>(
    _selector: S,
    container: &mut C,
) -> &mut <C as HasRequired<S::Label>>::Value
where
    S: Selector,
    C: HasRequired<S::Label> + ?Sized,
{
    <C as HasRequired<S::Label>>::required_mut(container)
}

/// Replaces an optional field, returning what was there before.
///
/// Passing `None` clears the field.
pub fn set_optional<S, C>(
    _selector: S,
    container: &mut C,
    value: Option<<C as HasOptional<S::Label>>::Value>,
) -> Option<<C as HasOptional<S::Label>>::Value>
where
    S: Selector,
    C: SetOptional<S::Label> + ?Sized,
{
    <C as SetOptional<S::Label>>::set_optional(container, value)
}

/// Accessors with the container first.
///
/// `container.opt(sel)` is `get_optional(sel, &container)` and
/// `container.req(sel)` is `get_required(sel, &container)`.
pub trait FieldAccess {
    /// Reads a possibly-absent field.
    fn opt<S>(&self, selector: S) -> Option<&<Self as HasOptional<S::Label>>::Value>
    where
        S: Selector,
        Self: HasOptional<S::Label>,
    {
        get_optional(selector, self)
    }

    /// Reads an always-present field.
    fn req<S>(&self, selector: S) -> &<Self as HasRequired<S::Label>>::Value
    where
        S: Selector,
        Self: HasRequired<S::Label>,
    {
        get_required(selector, self)
    }

    /// Mutably borrows an always-present field.
    fn req_mut<S>(&mut self, selector: S) -> &mut <Self as HasRequired<S::Label>>::Value
    where
        S: Selector,
        Self: HasRequired<S::Label>,
    {
        get_required_mut(selector, self)
    }

    /// Sets an optional field and returns the container.
    fn with<S>(mut self, selector: S, value: <Self as HasOptional<S::Label>>::Value) -> Self
    where
        S: Selector,
        Self: SetOptional<S::Label> + Sized,
    {
        set_optional(selector, &mut self, Some(value));
        self
    }
}

impl<T: ?Sized> FieldAccess for T {}

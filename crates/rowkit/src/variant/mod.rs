//! Labelled unions: injection, projection and exhaustive matching.
//!
//! A union is an enum declared with [`variant!`](crate::variant), where every
//! alternative is tied to a [`Label`]. The macro generates:
//! - [`Inject`] per label, so [`inj`] can build a value from a single-field
//!   record and [`project`] can read it back
//! - [`HasOptional`](crate::HasOptional) per label, so the field accessors work
//!   on unions (absent unless the label is the active one)
//! - [`Tagged`], naming the active label
//! - a handler record with one field per label, consumed by [`match_variant`]
//! - `From<Single<L, V>>` per label, so a failure raised with [`throw`]
//!   widens into the union through `?`
//!
//! # Example
//!
//! ```rust
//! use rowkit::{field, inj, match_variant, Tagged};
//!
//! rowkit::labels! {
//!     Success = "ok",
//!     Failure = "error",
//! }
//!
//! rowkit::variant! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Outcome with OutcomeCases {
//!         Done(i32) as ok: Success,
//!         Failed(String) as error: Failure,
//!     }
//! }
//!
//! let outcome: Outcome = inj(field!(Failure = "boom".to_string()));
//! assert_eq!(outcome.label(), "error");
//!
//! let message = match_variant(
//!     OutcomeCases {
//!         ok: |n: i32| format!("got {n}"),
//!         error: |e: String| format!("failed: {e}"),
//!     },
//!     outcome,
//! );
//! assert_eq!(message, "failed: boom");
//! ```

mod macros;

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::access::HasOptional;
use crate::error::ProjectError;
use crate::model::{Field, Label, Selector};

/// A union with an alternative labelled `L`.
pub trait Inject<L: Label>: Sized {
    /// The payload carried under `L`.
    type Payload;

    /// Builds the union value for `L`.
    fn inject(payload: Self::Payload) -> Self;

    /// Returns the payload if `L` is the active label.
    fn project(&self) -> Option<&Self::Payload>;

    /// Takes the payload if `L` is the active label, handing the value back
    /// otherwise.
    fn project_into(self) -> Result<Self::Payload, Self>;
}

/// A union that knows its labels.
pub trait Tagged {
    /// Every declared label, in declaration order.
    const LABELS: &'static [&'static str];

    /// Returns the active label.
    fn label(&self) -> &'static str;
}

/// Exhaustive case analysis against a handler record.
///
/// Implemented by [`variant!`](crate::variant) for the union (handlers take
/// payloads by value) and for references to it (handlers take `&payload`).
pub trait Match<Cases, Out> {
    /// Dispatches to the handler for the active label.
    fn match_with(self, cases: Cases) -> Out;
}

/// Builds a union value from a single-field record.
///
/// The record's label picks the alternative and its value becomes the payload.
/// The target union is usually inferred from context.
pub fn inj<L, V, U>(field: Field<L, V>) -> U
where
    L: Label,
    U: Inject<L, Payload = V>,
{
    U::inject(field.value)
}

/// Same as [`inj`].
pub fn variant<L, V, U>(field: Field<L, V>) -> U
where
    L: Label,
    U: Inject<L, Payload = V>,
{
    inj(field)
}

/// Dispatches `value` to the handler in `cases` whose name is its active label.
///
/// Handler records are generated by [`variant!`](crate::variant) and must
/// name exactly the union's labels: a missing or unknown handler fails to
/// compile.
///
/// ```compile_fail
/// rowkit::labels! { A = "a", B = "b" }
///
/// rowkit::variant! {
///     enum AB with AbCases {
///         First(u8) as a: A,
///         Second(u8) as b: B,
///     }
/// }
///
/// let value: AB = rowkit::inj(rowkit::field!(A = 1));
/// // No handler for `b`.
/// let _ = rowkit::match_variant(AbCases { a: |n: u8| n }, value);
/// ```
///
/// ```compile_fail
/// rowkit::labels! { A = "a", B = "b" }
///
/// rowkit::variant! {
///     enum AB with AbCases {
///         First(u8) as a: A,
///         Second(u8) as b: B,
///     }
/// }
///
/// let value: AB = rowkit::inj(rowkit::field!(A = 1));
/// // `c` is not a label of `AB`.
/// let _ = rowkit::match_variant(
///     AbCases { a: |n: u8| n, b: |n: u8| n, c: |n: u8| n },
///     value,
/// );
/// ```
pub fn match_variant<V, C, R>(cases: C, value: V) -> R
where
    V: Match<C, R>,
{
    value.match_with(cases)
}

/// Returns the payload under the selected label, if it is the active one.
pub fn project<S, U>(_selector: S, value: &U) -> Option<&<U as Inject<S::Label>>::Payload>
where
    S: Selector,
    U: Inject<S::Label>,
{
    <U as Inject<S::Label>>::project(value)
}

/// Returns the payload under the selected label, or an error naming the
/// label that is actually active.
pub fn expect_label<S, U>(
    _selector: S,
    value: &U,
) -> Result<&<U as Inject<S::Label>>::Payload, ProjectError>
where
    S: Selector,
    U: Inject<S::Label> + Tagged,
{
    <U as Inject<S::Label>>::project(value).ok_or_else(|| ProjectError::LabelMismatch {
        expected: <S::Label as Label>::NAME,
        found: value.label(),
    })
}

/// Fails with a labelled value as a single-alternative union.
///
/// Every [`variant!`](crate::variant) union with the same label and payload
/// converts from [`Single`], so `throw(..)?` lands in the caller's union.
///
/// ```rust
/// use rowkit::{field, throw, Tagged};
///
/// rowkit::labels! { NotFound = "not_found", Invalid = "invalid" }
///
/// rowkit::variant! {
///     #[derive(Debug)]
///     pub enum LookupError with LookupCases {
///         Missing(u64) as not_found: NotFound,
///         Bad(String) as invalid: Invalid,
///     }
/// }
///
/// fn lookup(id: u64) -> Result<&'static str, LookupError> {
///     if id == 0 {
///         return Ok(throw(field!(NotFound = id))?);
///     }
///     Ok("found")
/// }
///
/// assert_eq!(lookup(0).unwrap_err().label(), "not_found");
/// ```
pub fn throw<T, L, E>(field: Field<L, E>) -> Result<T, Single<L, E>>
where
    L: Label,
{
    raise(field)
}

/// Fails with a labelled value injected straight into the union `U`.
pub fn raise<T, L, E, U>(field: Field<L, E>) -> Result<T, U>
where
    L: Label,
    U: Inject<L, Payload = E>,
{
    debug!(label = L::NAME, "raising labelled failure");
    Err(inj(field))
}

/// A union with exactly one alternative, labelled `L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Single<L, V> {
    value: V,
    label: PhantomData<L>,
}

impl<L: Label, V> Single<L, V> {
    /// Wraps a payload.
    pub fn new(value: V) -> Self {
        Self {
            value,
            label: PhantomData,
        }
    }

    /// Returns the payload.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the union, returning the payload.
    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<L: Label, V> Inject<L> for Single<L, V> {
    type Payload = V;

    fn inject(payload: V) -> Self {
        Self::new(payload)
    }

    fn project(&self) -> Option<&V> {
        Some(&self.value)
    }

    fn project_into(self) -> Result<V, Self> {
        Ok(self.value)
    }
}

impl<L: Label, V> HasOptional<L> for Single<L, V> {
    type Value = V;

    fn optional(&self) -> Option<&V> {
        Some(&self.value)
    }
}

impl<L: Label, V> Tagged for Single<L, V> {
    const LABELS: &'static [&'static str] = &[L::NAME];

    fn label(&self) -> &'static str {
        L::NAME
    }
}

impl<L: Label, V: fmt::Display> fmt::Display for Single<L, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", L::NAME, self.value)
    }
}

impl<L: Label, V: Error + 'static> Error for Single<L, V> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.value)
    }
}

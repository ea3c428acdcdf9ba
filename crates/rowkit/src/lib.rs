//! rowkit: typed accessors for optional records and labelled unions.
//!
//! This crate provides small, statically-checked helpers over four shapes of
//! data:
//! - **Optional records**: structs whose fields are partitioned into required
//!   and optional groups, read through labels
//! - **Labelled unions**: enums whose alternatives are named by labels, with
//!   injection from single-field records and exhaustive matching
//! - **Keep-first folds**: sequences folded into keyed maps where the first
//!   value seen for a key wins
//! - **Non-empty vectors**: sequences that always hold at least one element
//!
//! # Quick Start
//!
//! ```rust
//! use rowkit::prelude::*;
//! use rowkit::{field, labels, record, variant};
//!
//! labels! {
//!     Name = "name",
//!     Nickname = "nickname",
//!     Success = "ok",
//!     Failure = "error",
//! }
//!
//! record! {
//!     #[derive(Debug, Clone)]
//!     pub struct Person {
//!         required { Name => name: String }
//!         optional { Nickname => nickname: String }
//!     }
//! }
//!
//! variant! {
//!     #[derive(Debug, PartialEq)]
//!     pub enum Outcome with OutcomeCases {
//!         Done(i32) as ok: Success,
//!         Failed(String) as error: Failure,
//!     }
//! }
//!
//! // Records: required fields are plain references, optional ones are Options.
//! let person = Person::new("Grace".to_string());
//! assert_eq!(person.req(Name), "Grace");
//! assert_eq!(person.opt(Nickname), None);
//!
//! // Unions: the label of the single-field record picks the alternative.
//! let outcome: Outcome = inj(field!(Failure = "boom".to_string()));
//! assert_eq!(get_optional(Success, &outcome), None);
//!
//! let handled = match_variant(
//!     OutcomeCases {
//!         ok: |n: i32| n.to_string(),
//!         error: |e: String| e.to_uppercase(),
//!     },
//!     outcome,
//! );
//! assert_eq!(handled, "BOOM");
//!
//! // Folds: the first value for a key wins.
//! let map = fold_map_first([("k", "a"), ("k", "b")], Some);
//! assert_eq!(map["k"], "a");
//!
//! // Non-empty vectors from a head and a tail.
//! let xs = non_empty_vec(HeadTail { head: 1, tail: vec![2, 3] });
//! assert_eq!(xs.as_slice(), &[1, 2, 3]);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Labels, single-field records and non-empty vectors
//! - [`access`]: Required/optional field accessors and [`record!`]
//! - [`variant`]: Labelled unions and [`variant!`](macro@variant)
//! - [`fold`]: Semigroups and keep-first map folds
//! - [`error`]: Error types
//!
//! # Static checking
//!
//! Asking a record for a field it does not have, reading an optional field as
//! required, injecting a label a union does not declare, or leaving a label
//! without a handler are all compile errors. The only runtime failures are the
//! explicit fallible conversions ([`NonEmptyVec::from_vec`], [`expect_label`]).

pub mod access;
pub mod error;
pub mod fold;
pub mod model;
pub mod variant;

// Re-export commonly used types at crate root
pub use access::{
    get_optional, get_required, get_required_mut, set_optional, FieldAccess, HasOptional,
    HasRequired, SetOptional,
};
pub use error::{NonEmptyError, ProjectError};
pub use fold::{
    fold_map, fold_map_first, fold_map_first_unordered, fold_map_with_index_first, First, Last,
    Semigroup, SemigroupMap,
};
pub use model::{non_empty_vec, symbol, Field, HeadTail, Label, NonEmptyVec, Selector, Symbol};
pub use variant::{
    expect_label, inj, match_variant, project, raise, throw, variant, Inject, Match, Single,
    Tagged,
};

/// Everything needed to work with records and unions, in one import.
pub mod prelude {
    pub use crate::access::{
        get_optional, get_required, get_required_mut, set_optional, FieldAccess, HasOptional,
        HasRequired, SetOptional,
    };
    pub use crate::fold::{
        fold_map, fold_map_first, fold_map_first_unordered, fold_map_with_index_first, First, Last,
        Semigroup,
    };
    pub use crate::model::{non_empty_vec, symbol, Field, HeadTail, Label, NonEmptyVec, Selector};
    pub use crate::variant::{inj, match_variant, project, raise, throw, Inject, Match, Single, Tagged};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

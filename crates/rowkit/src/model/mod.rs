//! Core types for rowkit.
//!
//! This module contains the building blocks the accessors and unions work on:
//! - Labels (compile-time field and alternative names)
//! - Single-field records
//! - Non-empty sequences

pub mod field;
pub mod label;
pub mod nonempty;

pub use field::Field;
pub use label::{symbol, Label, Selector, Symbol};
pub use nonempty::{non_empty_vec, HeadTail, NonEmptyVec};

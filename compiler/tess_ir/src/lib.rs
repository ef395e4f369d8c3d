//! Tessera IR - declaration-site types for the binder.
//!
//! This crate contains the immutable shapes a declaration site builds once
//! and hands to the binder:
//! - `Name` for bound identifiers
//! - `Literal` and `DefaultExpr` for lazily evaluated defaults
//! - `BindingPattern` and friends for destructuring shapes
//!
//! Every type is `Clone + Eq + Hash + Debug`. Floats are stored as `u64` bits
//! so literals stay hashable.

mod default_expr;
mod name;
mod pattern;

pub use default_expr::{DefaultExpr, Literal};
pub use name::Name;
pub use pattern::{
    BindingPattern, MappingEntry, PatternKind, RestNotLast, SequenceElement, SequenceItem,
    SequencePattern,
};

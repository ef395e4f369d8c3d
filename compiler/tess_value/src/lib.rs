//! Tessera Value - runtime values and evaluation errors.
//!
//! This crate provides:
//! - The closed runtime value type (`Value`) with its explicit absent marker
//! - Shared heap payloads (`Heap<T>`) enforced through `Value::` factories
//! - The error taxonomy (`EvalError`, `EvalErrorKind`) and its factory functions
//!
//! # Absent vs Null
//!
//! `Value::Absent` means "nothing was supplied here" and is the only value
//! that triggers a default. `Value::Null` is a supplied value like any other.

mod errors;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalNote, EvalResult};
pub use value::{Heap, Mapping, Value};

// Error constructors, grouped by where they are raised
pub use errors::{
    // Binding errors
    shape_mismatch,
    // Pattern construction errors
    rest_not_last,
    // Template errors
    segment_arity_mismatch,
    // Scope errors
    cannot_assign_immutable,
    undefined_variable,
};

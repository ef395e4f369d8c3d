//! Tessera Eval - destructuring, defaults, rest/spread and template literals.
//!
//! This crate provides the runtime half of Tessera's binding forms:
//!
//! - `bind` / `bind_with`: match a `BindingPattern` against a `Value`,
//!   applying defaults where the value is absent
//! - `assemble_args` / `bind_arguments`: expand spread arguments and bind
//!   them against a parameter list (rest parameters included)
//! - `marshal`: evaluate template literals, tagged or untagged
//! - `Environment`: block-scoped declaration sites with `const` bindings
//!
//! Default expressions are evaluated through the `DefaultEvaluator` trait.
//! `ConstEvaluator` covers literals, name references and constructors; a
//! host interpreter supplies its own evaluator for anything richer.
//!
//! # Re-exports
//!
//! Value and error types from `tess_value`, and the pattern types from
//! `tess_ir`, are re-exported for convenience.

mod binder;
mod bindings;
mod call;
mod environment;
mod template;

use std::sync::Once;

pub use binder::{bind, bind_with, eval_const, ConstEvaluator, DefaultEvaluator, ScopeView};
pub use bindings::Bindings;
pub use call::{assemble_args, bind_arguments, CallArg};
pub use environment::{AssignError, Environment, LocalScope, Mutability, Scope};
pub use template::{interpolate, marshal, TagHandler, TemplateStrings};

pub use tess_ir::{
    BindingPattern, DefaultExpr, Literal, MappingEntry, Name, PatternKind, RestNotLast,
    SequenceElement, SequenceItem, SequencePattern,
};
pub use tess_value::{EvalError, EvalErrorKind, EvalNote, EvalResult, Mapping, Value};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for binder and marshaller diagnostics.
///
/// Does nothing unless `RUST_LOG` is set, so embedding hosts that manage
/// their own subscriber are unaffected. Safe to call more than once.
///
/// ```text
/// RUST_LOG=tess_eval=trace cargo test -p tess_eval
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

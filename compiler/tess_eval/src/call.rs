//! Call assembly: spread expansion and parameter binding.
//!
//! Spread is a pure rewrite of the argument list before the call;
//! `f(...[1, 2, 3])` and `f(1, 2, 3)` reach the callee identically.
//! Rest parameters are the binding-side counterpart and are handled by the
//! binder's sequence matching.

use tess_ir::SequencePattern;
use tess_value::{shape_mismatch, EvalError, EvalNote, Value};

use crate::binder::{Binder, DefaultEvaluator};
use crate::{Bindings, Environment};

/// One argument expression at a call site, already evaluated.
#[derive(Clone, Debug, PartialEq)]
pub enum CallArg {
    /// `f(x)`
    Positional(Value),
    /// `f(...xs)`
    Spread(Value),
}

/// Flatten `args` into the positional argument list seen by the callee.
///
/// Spreads expand in place, left to right. A spread string expands into its
/// characters. Spreading anything else that is not a sequence fails with
/// `ShapeMismatch`.
#[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
pub fn assemble_args(args: &[CallArg]) -> Result<Vec<Value>, EvalError> {
    let mut assembled = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg {
            CallArg::Positional(value) => assembled.push(value.clone()),
            CallArg::Spread(Value::Sequence(items)) => assembled.extend(items.iter().cloned()),
            CallArg::Spread(Value::Str(s)) => {
                assembled.extend(s.chars().map(|c| Value::string(c.to_string())));
            }
            CallArg::Spread(other) => {
                return Err(shape_mismatch("sequence", other.type_name())
                    .with_note(EvalNote::new(format!("while spreading argument {index}"))));
            }
        }
    }
    tracing::debug!(assembled = assembled.len(), "arguments assembled");
    Ok(assembled)
}

/// Bind an assembled argument list against a parameter list.
///
/// Parameters are a sequence pattern: missing arguments are `Absent` (and
/// take the parameter's default), surplus arguments are ignored unless the
/// parameter list has a rest parameter.
#[tracing::instrument(level = "debug", skip_all, fields(params = params.elements().len(), args = args.len()))]
pub fn bind_arguments(
    params: &SequencePattern,
    args: &[Value],
    env: Option<&Environment>,
    evaluator: &mut dyn DefaultEvaluator,
) -> Result<Bindings, EvalError> {
    let mut binder = Binder::new(env, evaluator);
    binder.bind_sequence(params, args)?;
    Ok(binder.finish())
}

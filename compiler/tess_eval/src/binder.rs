//! Pattern binder.
//!
//! Matches a `BindingPattern` against a `Value` and produces `Bindings`.
//!
//! # Rules
//!
//! - An identifier binds the value verbatim, `Absent` included.
//! - A sequence pattern reads items by position; positions past the end read
//!   as `Absent`; `Skip` consumes a position without binding; rest captures
//!   the remaining items as a new sequence (empty when exhausted).
//! - A mapping pattern reads each key; missing keys read as `Absent`.
//! - Before matching any node, an `Absent` value is replaced by the node's
//!   default if it has one. Only `Absent` does this: `Null`, `0`, `false`
//!   and `""` are kept as supplied.
//! - Defaults are evaluated left to right and see every name bound so far,
//!   then the caller's environment.
//! - The first failure aborts the call. Bindings made before it are dropped.

use tess_ir::{
    BindingPattern, DefaultExpr, MappingEntry, PatternKind, SequenceElement, SequencePattern,
};
use tess_stack::ensure_sufficient_stack;
use tess_value::{
    shape_mismatch, undefined_variable, EvalError, EvalNote, EvalResult, Mapping, Value,
};

use crate::{Bindings, Environment};

/// Names visible to a default expression.
///
/// Names bound earlier in the current pattern shadow the caller's
/// environment.
pub struct ScopeView<'a> {
    bindings: &'a Bindings,
    env: Option<&'a Environment>,
}

impl<'a> ScopeView<'a> {
    /// View over `bindings`, falling back to `env`.
    pub fn new(bindings: &'a Bindings, env: Option<&'a Environment>) -> Self {
        ScopeView { bindings, env }
    }

    /// Look up `name`, pattern bindings first.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.env.and_then(|env| env.lookup(name))
    }
}

/// Evaluates default expressions on behalf of the binder.
///
/// The binder calls this only when a node with a default resolved to
/// `Absent`, so implementations observe exactly the defaults that fire.
pub trait DefaultEvaluator {
    fn eval_default(&mut self, expr: &DefaultExpr, scope: &ScopeView<'_>) -> EvalResult;
}

/// Evaluator for the constant subset of `DefaultExpr`: literals, name
/// references, and sequence/mapping constructors over them.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstEvaluator;

impl DefaultEvaluator for ConstEvaluator {
    fn eval_default(&mut self, expr: &DefaultExpr, scope: &ScopeView<'_>) -> EvalResult {
        eval_const(expr, scope)
    }
}

/// Evaluate a default expression against `scope`.
pub fn eval_const(expr: &DefaultExpr, scope: &ScopeView<'_>) -> EvalResult {
    ensure_sufficient_stack(|| match expr {
        DefaultExpr::Literal(literal) => Ok(Value::from(literal)),
        DefaultExpr::Name(name) => scope
            .lookup(name.as_str())
            .ok_or_else(|| undefined_variable(name.as_str())),
        DefaultExpr::Sequence(items) => {
            let values = items
                .iter()
                .map(|item| eval_const(item, scope))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::sequence(values))
        }
        DefaultExpr::Mapping(entries) => {
            let mut map = Mapping::new();
            for (key, item) in entries {
                map.insert(key.clone(), eval_const(item, scope)?);
            }
            Ok(Value::from_map(map))
        }
    })
}

/// Bind `value` to `pattern` with constant defaults and no enclosing scope.
pub fn bind(pattern: &BindingPattern, value: Value) -> Result<Bindings, EvalError> {
    bind_with(pattern, value, None, &mut ConstEvaluator)
}

/// Bind `value` to `pattern`.
///
/// `env` is the caller's environment, visible to default expressions after
/// the names already bound by this pattern.
#[tracing::instrument(level = "debug", skip_all)]
pub fn bind_with(
    pattern: &BindingPattern,
    value: Value,
    env: Option<&Environment>,
    evaluator: &mut dyn DefaultEvaluator,
) -> Result<Bindings, EvalError> {
    let mut binder = Binder::new(env, evaluator);
    binder.bind_node(pattern, value)?;
    Ok(binder.finish())
}

/// Recursive matcher state for one bind call.
pub(crate) struct Binder<'a> {
    env: Option<&'a Environment>,
    evaluator: &'a mut dyn DefaultEvaluator,
    bindings: Bindings,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(
        env: Option<&'a Environment>,
        evaluator: &'a mut dyn DefaultEvaluator,
    ) -> Self {
        Binder {
            env,
            evaluator,
            bindings: Bindings::new(),
        }
    }

    pub(crate) fn finish(self) -> Bindings {
        self.bindings
    }

    pub(crate) fn bind_node(
        &mut self,
        pattern: &BindingPattern,
        value: Value,
    ) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| {
            let value = self.resolve_default(pattern, value)?;
            match &pattern.kind {
                PatternKind::Identifier(name) => {
                    self.bindings.insert(name.clone(), value);
                    Ok(())
                }
                PatternKind::Sequence(seq) => {
                    let Some(items) = value.as_sequence() else {
                        return Err(shape_mismatch("sequence", value.type_name()));
                    };
                    self.bind_sequence(seq, items)
                }
                PatternKind::Mapping(entries) => {
                    let Some(map) = value.as_mapping() else {
                        return Err(shape_mismatch("mapping", value.type_name()));
                    };
                    self.bind_mapping(entries, map)
                }
            }
        })
    }

    /// Positional match of `items` against `seq`, then rest capture.
    pub(crate) fn bind_sequence(
        &mut self,
        seq: &SequencePattern,
        items: &[Value],
    ) -> Result<(), EvalError> {
        for (index, element) in seq.elements().iter().enumerate() {
            let SequenceElement::Pattern(pattern) = element else {
                continue;
            };
            let item = items.get(index).cloned().unwrap_or(Value::Absent);
            self.bind_node(pattern, item).map_err(|e| {
                e.with_note(EvalNote::new(format!("while binding position {index}")))
            })?;
        }

        if let Some(rest) = seq.rest() {
            let start = seq.elements().len().min(items.len());
            let captured = items[start..].to_vec();
            tracing::trace!(start, captured = captured.len(), "rest capture");
            self.bind_node(rest, Value::sequence(captured))
                .map_err(|e| e.with_note(EvalNote::new("while binding rest element")))?;
        }
        Ok(())
    }

    fn bind_mapping(&mut self, entries: &[MappingEntry], map: &Mapping) -> Result<(), EvalError> {
        for entry in entries {
            let item = map.get(&entry.key).cloned().unwrap_or(Value::Absent);
            self.bind_node(&entry.target, item).map_err(|e| {
                e.with_note(EvalNote::new(format!("while binding key `{}`", entry.key)))
            })?;
        }
        Ok(())
    }

    /// Replace `Absent` with the node's default, if it has one.
    fn resolve_default(&mut self, pattern: &BindingPattern, value: Value) -> EvalResult {
        match (&pattern.default, value) {
            (Some(default), Value::Absent) => {
                tracing::trace!(?default, "default fires");
                let scope = ScopeView::new(&self.bindings, self.env);
                self.evaluator.eval_default(default, &scope)
            }
            (_, value) => Ok(value),
        }
    }
}

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use tess_ir::{DefaultExpr, MappingEntry, SequencePattern};
use tess_value::EvalErrorKind;

use super::*;
use crate::binder::ConstEvaluator;

#[test]
fn inner_scope_shadows_outer() {
    // let a = 30; { let a = 40; } a
    let mut env = Environment::new();
    env.define(Name::new("a"), Value::int(30), Mutability::Mutable);
    env.push_scope();
    env.define(Name::new("a"), Value::int(40), Mutability::Mutable);
    assert_eq!(env.lookup("a"), Some(Value::int(40)));
    env.pop_scope();
    assert_eq!(env.lookup("a"), Some(Value::int(30)));
}

#[test]
fn block_bindings_do_not_leak() {
    let mut env = Environment::new();
    env.push_scope();
    env.define(Name::new("inner"), Value::int(1), Mutability::Mutable);
    assert_eq!(env.depth(), 2);
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("inner"), None);
}

#[test]
fn global_scope_is_never_popped() {
    let mut env = Environment::new();
    env.define_global(Name::new("PI"), Value::float(3.5));
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup("PI"), Some(Value::float(3.5)));
}

#[test]
fn assignment_reaches_enclosing_scope() {
    let mut env = Environment::new();
    env.define(Name::new("count"), Value::int(0), Mutability::Mutable);
    env.push_scope();
    env.assign("count", Value::int(1)).unwrap();
    env.pop_scope();
    assert_eq!(env.lookup("count"), Some(Value::int(1)));
}

#[test]
fn const_binding_rejects_assignment() {
    let mut env = Environment::new();
    env.define(Name::new("PI"), Value::float(3.5), Mutability::Immutable);
    let err = env.assign("PI", Value::int(3)).unwrap_err();
    assert_eq!(err, AssignError::Immutable);
    assert_eq!(env.lookup("PI"), Some(Value::float(3.5)));

    let eval_err = err.into_eval_error("PI");
    assert_eq!(
        eval_err.kind,
        EvalErrorKind::ImmutableBinding {
            name: "PI".to_string()
        }
    );
    assert_eq!(eval_err.message, "cannot assign to immutable variable: PI");
}

#[test]
fn assigning_an_unknown_name_fails() {
    let mut env = Environment::new();
    let err = env.assign("missing", Value::Null).unwrap_err();
    assert_eq!(err, AssignError::Undefined);
    assert_eq!(
        err.into_eval_error("missing").kind,
        EvalErrorKind::UndefinedVariable {
            name: "missing".to_string()
        }
    );
}

#[test]
fn bind_pattern_defines_every_name() {
    // const { flavour, weight = 500 } = { flavour: 'Chocolate' }
    let pattern = BindingPattern::mapping(vec![
        MappingEntry::shorthand("flavour"),
        MappingEntry::shorthand_with_default("weight", DefaultExpr::int(500)),
    ]);
    let mut env = Environment::new();
    env.bind_pattern(
        &pattern,
        Value::mapping([("flavour", Value::string("Chocolate"))]),
        Mutability::Immutable,
        &mut ConstEvaluator,
    )
    .unwrap();
    assert_eq!(env.lookup("flavour"), Some(Value::string("Chocolate")));
    assert_eq!(env.lookup("weight"), Some(Value::int(500)));
    assert_eq!(
        env.assign("weight", Value::int(1)),
        Err(AssignError::Immutable)
    );
}

#[test]
fn bind_pattern_is_all_or_nothing() {
    // [a, { b }] = [1, 2] fails at `{ b }`; `a` must not be defined.
    let pattern = BindingPattern::sequence(SequencePattern::of([
        BindingPattern::identifier("a"),
        BindingPattern::mapping(vec![MappingEntry::shorthand("b")]),
    ]));
    let mut env = Environment::new();
    let err = env
        .bind_pattern(
            &pattern,
            Value::sequence(vec![Value::int(1), Value::int(2)]),
            Mutability::Mutable,
            &mut ConstEvaluator,
        )
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ShapeMismatch { .. }));
    assert_eq!(env.lookup("a"), None);
    assert_eq!(env.lookup("b"), None);
}

#[test]
fn bind_pattern_defaults_see_the_environment() {
    let mut env = Environment::new();
    env.define_global(Name::new("fallback"), Value::string("Vanilla"));
    let pattern = BindingPattern::identifier("flavour").with_default(DefaultExpr::name("fallback"));
    env.bind_pattern(&pattern, Value::Absent, Mutability::Mutable, &mut ConstEvaluator)
        .unwrap();
    assert_eq!(env.lookup("flavour"), Some(Value::string("Vanilla")));
}

#[test]
fn bind_pattern_targets_the_current_block() {
    let mut env = Environment::new();
    env.push_scope();
    env.bind_pattern(
        &BindingPattern::identifier("x"),
        Value::int(20),
        Mutability::Mutable,
        &mut ConstEvaluator,
    )
    .unwrap();
    assert_eq!(env.lookup("x"), Some(Value::int(20)));
    env.pop_scope();
    assert_eq!(env.lookup("x"), None);
}

//! Lexical environment for declaration sites.
//!
//! A scope stack (not cloning) models block scoping: `push_scope` on block
//! entry, `pop_scope` on exit, inner definitions shadow outer ones.
//! `Mutability::Immutable` gives read-only (`const`) bindings.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tess_ir::{BindingPattern, Name};
use tess_value::{cannot_assign_immutable, undefined_variable, EvalError, Value};

use crate::binder::{bind_with, DefaultEvaluator};

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// Binding can be reassigned (`let x = ...`).
    Mutable,
    /// Binding cannot be reassigned (`const x = ...`).
    Immutable,
}

impl Mutability {
    /// Returns `true` if this is `Mutable`.
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Error returned by `Environment::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable exists but is immutable.
    Immutable,
    /// Variable not found in any scope.
    Undefined,
}

impl AssignError {
    /// Convert to an `EvalError` naming the target variable.
    pub fn into_eval_error(self, name: &str) -> EvalError {
        match self {
            AssignError::Immutable => cannot_assign_immutable(name),
            AssignError::Undefined => undefined_variable(name),
        }
    }
}

/// Single-threaded shared scope handle (`Rc<RefCell<T>>`).
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Wrap a value in a new shared scope.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// A single scope containing variable bindings.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<LocalScope<Scope>>,
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new scope with a parent.
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Define a variable in this scope, replacing any same-scope binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        self.bindings.insert(name, Binding { value, mutability });
    }

    /// Look up a variable here or in an enclosing scope.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.value.clone());
        }
        self.parent.as_ref()?.borrow().lookup(name)
    }

    /// Assign to the innermost visible binding of `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.bindings.get_mut(name) {
            if !binding.mutability.is_mutable() {
                return Err(AssignError::Immutable);
            }
            binding.value = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }
}

/// Environment using a scope stack.
pub struct Environment {
    /// Stack of scopes, with the current scope at the top.
    scopes: Vec<LocalScope<Scope>>,
    /// Global scope (always at the bottom).
    global: LocalScope<Scope>,
}

impl Environment {
    /// Create a new environment with only a global scope.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::new());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Current scope depth (1 = global only).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Enter a block.
    #[inline]
    pub fn push_scope(&mut self) {
        let parent = self.current_scope().clone();
        self.scopes.push(LocalScope::new(Scope::with_parent(parent)));
    }

    /// Leave a block. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[inline]
    fn current_scope(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Define a variable in the current scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value, mutability: Mutability) {
        self.current_scope()
            .borrow_mut()
            .define(name, value, mutability);
    }

    /// Define an immutable global.
    pub fn define_global(&mut self, name: Name, value: Value) {
        self.global
            .borrow_mut()
            .define(name, value, Mutability::Immutable);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.current_scope().borrow().lookup(name)
    }

    /// Assign to a variable.
    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        self.current_scope().borrow_mut().assign(name, value)
    }

    /// Destructure `value` with `pattern` and define every resulting name in
    /// the current scope.
    ///
    /// Defaults see this environment. Nothing is defined unless the whole
    /// pattern binds.
    pub fn bind_pattern(
        &mut self,
        pattern: &BindingPattern,
        value: Value,
        mutability: Mutability,
        evaluator: &mut dyn DefaultEvaluator,
    ) -> Result<(), EvalError> {
        let bindings = bind_with(pattern, value, Some(&*self), evaluator)?;
        for (name, value) in bindings {
            self.define(name, value, mutability);
        }
        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;

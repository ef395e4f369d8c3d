//! Flat name → value result of one binder invocation.

use rustc_hash::FxHashMap;

use tess_ir::Name;
use tess_value::Value;

/// Bindings produced by a single `bind` call.
///
/// Iterates in the order names were first bound, so two runs over the same
/// pattern and value compare equal entry by entry. Binding a name a second
/// time replaces its value in place.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    entries: Vec<(Name, Value)>,
    index: FxHashMap<Name, usize>,
}

impl Bindings {
    /// Empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing an earlier binding of the same name.
    pub fn insert(&mut self, name: Name, value: Value) {
        if let Some(&slot) = self.index.get(&name) {
            self.entries[slot].1 = value;
        } else {
            self.index.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
        }
    }

    /// Value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Whether `name` was bound (possibly to `Absent`).
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of distinct names bound.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// `(name, value)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }
}

impl PartialEq for Bindings {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl IntoIterator for Bindings {
    type Item = (Name, Value);
    type IntoIter = std::vec::IntoIter<(Name, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N: Into<Name>> FromIterator<(N, Value)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name.into(), value);
        }
        bindings
    }
}

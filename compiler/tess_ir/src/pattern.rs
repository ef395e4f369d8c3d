//! Binding patterns.
//!
//! Patterns describe how a declaration site decomposes a value into named
//! bindings:
//!
//! ```text
//! let x = v                        // Identifier
//! let [, b, ...rest] = v           // Sequence with Skip and rest
//! let { flavour: f, weight = 500 } // Mapping, renamed target, default
//! ```
//!
//! Every node may carry a default expression, used only when the value
//! resolved for that node is the absent marker.

use std::fmt;

use crate::{DefaultExpr, Name};

/// A binding pattern node together with its optional default.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BindingPattern {
    /// The shape this node matches.
    pub kind: PatternKind,
    /// Evaluated when the resolved value is absent.
    pub default: Option<DefaultExpr>,
}

/// Shape matched by a [`BindingPattern`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    /// Binds one name to the value.
    Identifier(Name),
    /// Positional destructuring of an ordered sequence.
    Sequence(SequencePattern),
    /// Keyed destructuring of a mapping.
    Mapping(Vec<MappingEntry>),
}

/// One positional slot of a [`SequencePattern`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SequenceElement {
    /// Hole: consumes a position without binding (`[, x]`).
    Skip,
    /// Binds the item at this position.
    Pattern(BindingPattern),
}

/// Ordered-sequence pattern: `[a, , c, ...rest]`.
///
/// The rest capture is stored apart from the positional elements, so a
/// constructed `SequencePattern` always has rest in last position.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SequencePattern {
    elements: Vec<SequenceElement>,
    rest: Option<Box<BindingPattern>>,
}

/// One item of a sequence pattern as written in source order.
///
/// Used with [`SequencePattern::from_items`], which checks that `Rest`
/// only appears last.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SequenceItem {
    /// Hole: `[, x]`.
    Skip,
    /// Positional binding.
    Pattern(BindingPattern),
    /// Rest capture: `...rest`.
    Rest(BindingPattern),
}

/// A `key: target` entry of a mapping pattern.
///
/// Shorthand `{ weight }` is `key = "weight"` with an identifier target of
/// the same name. A default written on the entry (`{ weight = 500 }`) lives
/// on the target node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MappingEntry {
    /// Key read from the matched mapping.
    pub key: String,
    /// Pattern the read value is bound to.
    pub target: BindingPattern,
}

/// A rest element was written before the end of a sequence pattern.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct RestNotLast {
    /// Index of the offending rest item.
    pub position: usize,
    /// Number of items in the pattern.
    pub len: usize,
}

impl fmt::Display for RestNotLast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rest element must be last in a sequence pattern (found at position {} of {})",
            self.position, self.len
        )
    }
}

impl std::error::Error for RestNotLast {}

impl BindingPattern {
    /// `name`
    pub fn identifier(name: impl Into<Name>) -> Self {
        Self::from_kind(PatternKind::Identifier(name.into()))
    }

    /// `[elements...]`
    pub fn sequence(pattern: SequencePattern) -> Self {
        Self::from_kind(PatternKind::Sequence(pattern))
    }

    /// `{ entries... }`
    pub fn mapping(entries: Vec<MappingEntry>) -> Self {
        Self::from_kind(PatternKind::Mapping(entries))
    }

    fn from_kind(kind: PatternKind) -> Self {
        BindingPattern {
            kind,
            default: None,
        }
    }

    /// Attach a default expression to this node.
    #[must_use]
    pub fn with_default(mut self, default: DefaultExpr) -> Self {
        self.default = Some(default);
        self
    }

    /// Names this pattern binds, in left-to-right declaration order.
    ///
    /// A name written twice appears twice.
    pub fn bound_names(&self) -> Vec<Name> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names(&self, names: &mut Vec<Name>) {
        match &self.kind {
            PatternKind::Identifier(name) => names.push(name.clone()),
            PatternKind::Sequence(seq) => {
                for element in &seq.elements {
                    if let SequenceElement::Pattern(p) = element {
                        p.collect_names(names);
                    }
                }
                if let Some(rest) = &seq.rest {
                    rest.collect_names(names);
                }
            }
            PatternKind::Mapping(entries) => {
                for entry in entries {
                    entry.target.collect_names(names);
                }
            }
        }
    }
}

impl SequencePattern {
    /// Positional pattern without rest.
    pub fn new(elements: Vec<SequenceElement>) -> Self {
        SequencePattern {
            elements,
            rest: None,
        }
    }

    /// Positional pattern where every slot binds (no holes).
    pub fn of(patterns: impl IntoIterator<Item = BindingPattern>) -> Self {
        Self::new(patterns.into_iter().map(SequenceElement::Pattern).collect())
    }

    /// Attach a rest capture after the positional elements.
    #[must_use]
    pub fn with_rest(mut self, rest: BindingPattern) -> Self {
        self.rest = Some(Box::new(rest));
        self
    }

    /// Build from items in source order, rejecting a rest that is not last.
    pub fn from_items(items: Vec<SequenceItem>) -> Result<Self, RestNotLast> {
        let len = items.len();
        let mut pattern = SequencePattern::default();
        for (position, item) in items.into_iter().enumerate() {
            match item {
                SequenceItem::Skip => pattern.elements.push(SequenceElement::Skip),
                SequenceItem::Pattern(p) => pattern.elements.push(SequenceElement::Pattern(p)),
                SequenceItem::Rest(p) => {
                    if position + 1 != len {
                        return Err(RestNotLast { position, len });
                    }
                    pattern.rest = Some(Box::new(p));
                }
            }
        }
        Ok(pattern)
    }

    /// Positional elements, excluding rest.
    #[inline]
    pub fn elements(&self) -> &[SequenceElement] {
        &self.elements
    }

    /// The rest capture, if any.
    #[inline]
    pub fn rest(&self) -> Option<&BindingPattern> {
        self.rest.as_deref()
    }
}

impl MappingEntry {
    /// `key: target`
    pub fn new(key: impl Into<String>, target: BindingPattern) -> Self {
        MappingEntry {
            key: key.into(),
            target,
        }
    }

    /// `{ name }` shorthand.
    pub fn shorthand(name: &str) -> Self {
        Self::new(name, BindingPattern::identifier(name))
    }

    /// `{ name = default }` shorthand.
    pub fn shorthand_with_default(name: &str, default: DefaultExpr) -> Self {
        Self::new(name, BindingPattern::identifier(name).with_default(default))
    }
}

//! Default expressions attached to pattern nodes.
//!
//! A default is evaluated only when the binder resolves the absent marker at
//! the node carrying it. The IR only describes the expression; evaluation
//! lives behind the `DefaultEvaluator` seam in `tess_eval`.

use crate::Name;

/// A constant scalar written at the declaration site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Float literal, stored as bits for `Hash`.
    Float(u64),
    /// String literal.
    Str(String),
}

impl Literal {
    /// Create a float literal.
    #[inline]
    pub fn float(value: f64) -> Self {
        Literal::Float(value.to_bits())
    }

    /// Create a string literal.
    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Literal::Str(value.into())
    }
}

/// Expression producing a default value.
///
/// Literals, references to names visible at the
/// declaration site (including names bound earlier in the same pattern),
/// and sequence/mapping constructors over those.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DefaultExpr {
    /// A constant.
    Literal(Literal),
    /// Reference to a name in scope: `{ a, b = a }`.
    Name(Name),
    /// Sequence constructor: `[1, 2]`.
    Sequence(Vec<DefaultExpr>),
    /// Mapping constructor: `{ weight: 500 }`.
    Mapping(Vec<(String, DefaultExpr)>),
}

impl DefaultExpr {
    /// `null` default.
    pub fn null() -> Self {
        DefaultExpr::Literal(Literal::Null)
    }

    /// Boolean default.
    pub fn bool(value: bool) -> Self {
        DefaultExpr::Literal(Literal::Bool(value))
    }

    /// Integer default.
    pub fn int(value: i64) -> Self {
        DefaultExpr::Literal(Literal::Int(value))
    }

    /// Float default.
    pub fn float(value: f64) -> Self {
        DefaultExpr::Literal(Literal::float(value))
    }

    /// String default.
    pub fn string(value: impl Into<String>) -> Self {
        DefaultExpr::Literal(Literal::string(value))
    }

    /// Reference to another name.
    pub fn name(name: impl Into<Name>) -> Self {
        DefaultExpr::Name(name.into())
    }

    /// Sequence default.
    pub fn sequence(items: Vec<DefaultExpr>) -> Self {
        DefaultExpr::Sequence(items)
    }

    /// Mapping default. Later duplicate keys win on evaluation.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, DefaultExpr)>) -> Self {
        DefaultExpr::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

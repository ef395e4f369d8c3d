//! Runtime values seen by the binder and the template marshaller.
//!
//! # Heap Enforcement
//!
//! Heap payloads (`Str`, `Sequence`, `Mapping`) are wrapped in `Heap<T>`,
//! whose constructor is private to this module:
//!
//! ```text
//! let s = Value::string("White Forest");                  // OK
//! let xs = Value::sequence(vec![Value::int(1)]);          // OK
//! let m = Value::mapping([("weight", Value::int(1000))]); // OK
//! let bad = Value::Str(Heap::new(...));                   // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Thread Safety
//!
//! `Heap` is `Arc`-backed, so values are `Send + Sync` and cheap to clone.

mod heap;

use std::collections::BTreeMap;
use std::fmt;

use tess_ir::Literal;

pub use heap::Heap;

/// Keyed payload of `Value::Mapping`. Ordered by key for deterministic output.
pub type Mapping = BTreeMap<String, Value>;

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent marker: nothing was supplied at this position or key.
    ///
    /// Distinct from `Null`; only `Absent` triggers a default.
    Absent,
    /// An explicitly supplied null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),

    // Heap Types (use Heap<T> for enforced sharing)
    /// String value.
    Str(Heap<String>),
    /// Ordered, indexable sequence.
    Sequence(Heap<Vec<Value>>),
    /// Keyed mapping from string keys to values.
    Mapping(Heap<Mapping>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a sequence value.
    ///
    /// ```text
    /// let empty = Value::sequence(vec![]);
    /// let nums = Value::sequence(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Heap::new(items))
    }

    /// Create a mapping value. Later duplicate keys overwrite earlier ones.
    ///
    /// ```text
    /// let cake = Value::mapping([("flavour", Value::string("White Forest"))]);
    /// ```
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Mapping(Heap::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Create a mapping value from an already built map.
    #[inline]
    pub fn from_map(map: Mapping) -> Self {
        Value::Mapping(Heap::new(map))
    }
}

// Value Methods

impl Value {
    /// Whether this is the absent marker.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Try to convert to an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to convert to a float. Integers widen.
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers share one representation in the source language"
    )]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Try to convert to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Sequence capability: the indexable items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Mapping capability: the keyed entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Read `key` from a mapping. Missing keys read as `Absent`.
    ///
    /// Returns `None` when `self` is not a mapping.
    pub fn get_key(&self, key: &str) -> Option<Value> {
        self.as_mapping()
            .map(|map| map.get(key).cloned().unwrap_or(Value::Absent))
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Canonical string conversion, as used by untagged template marshalling.
    ///
    /// Follows the conversion of the source language: `Absent` prints as
    /// `undefined`, integral floats drop the fractional part, sequences join
    /// their items with `,` (absent and null items print empty), mappings
    /// print as `[object Object]`.
    pub fn display_value(&self) -> String {
        match self {
            Value::Absent => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => display_float(*f),
            Value::Str(s) => s.to_string(),
            Value::Sequence(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::Absent | Value::Null => String::new(),
                        other => other.display_value(),
                    })
                    .collect();
                parts.join(",")
            }
            Value::Mapping(_) => "[object Object]".to_string(),
        }
    }
}

/// Render a float the way the source language prints numbers.
///
/// Uses the shortest digits that round-trip. Decimal exponents in
/// `[-6, 21)` print in positional form, anything else as `d.ddde+x`.
fn display_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. `1.2345e20`.
    let scientific = format!("{:e}", f.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    // Position of the decimal point relative to the first digit.
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = match point {
        1..=21 => {
            let point = point.unsigned_abs() as usize;
            if digits.len() <= point {
                format!("{digits}{}", "0".repeat(point - digits.len()))
            } else {
                format!("{}.{}", &digits[..point], &digits[point..])
            }
        }
        -5..=0 => format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize)),
        _ => {
            let (first, rest) = digits.split_at(1);
            let exp = point - 1;
            let exp_sign = if exp < 0 { '-' } else { '+' };
            if rest.is_empty() {
                format!("{first}e{exp_sign}{}", exp.unsigned_abs())
            } else {
                format!("{first}.{rest}e{exp_sign}{}", exp.unsigned_abs())
            }
        }
    };
    format!("{sign}{body}")
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(bits) => Value::Float(f64::from_bits(*bits)),
            Literal::Str(s) => Value::string(s.clone()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{}", display_float(*n)),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests;

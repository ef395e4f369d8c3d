//! Error types for binding and template marshalling.
//!
//! All errors are programming errors surfaced synchronously to the caller;
//! there is no retry or recovery. Factory functions (e.g. `shape_mismatch()`)
//! are the public API and populate both `kind` and `message`.

use std::fmt;

use tess_ir::RestNotLast;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// Lets callers match on the failure instead of parsing messages. The
/// `Display` impl produces the message stored on `EvalError`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Binding
    /// A sequence or mapping pattern met an incompatible value.
    ShapeMismatch {
        expected: String,
        got: String,
    },

    // Pattern construction
    RestNotLast {
        position: usize,
        len: usize,
    },

    // Templates
    SegmentArityMismatch {
        segments: usize,
        expressions: usize,
    },

    // Scope
    UndefinedVariable {
        name: String,
    },
    ImmutableBinding {
        name: String,
    },

    /// Failure reported by a caller-supplied evaluator or tag handler.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "cannot destructure {got} as a {expected}")
            }
            Self::RestNotLast { position, len } => {
                write!(
                    f,
                    "rest element must be last in a sequence pattern (found at position {position} of {len})"
                )
            }
            Self::SegmentArityMismatch {
                segments,
                expressions,
            } => write!(
                f,
                "template has {segments} segments for {expressions} expressions (expected {})",
                expressions.saturating_add(1)
            ),
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::ImmutableBinding { name } => {
                write!(f, "cannot assign to immutable variable: {name}")
            }
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Additional context attached to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalNote {
    pub message: String,
}

impl EvalNote {
    /// Create a note.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory errors.
    pub message: String,
    /// Context notes, innermost first.
    pub notes: Vec<EvalNote>,
}

impl EvalError {
    /// Create an error with just a message (`Custom` kind).
    ///
    /// Prefer the factory functions when a structured kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            notes: Vec::new(),
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Add a context note to this error.
    #[must_use]
    pub fn with_note(mut self, note: EvalNote) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {}", note.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

impl From<RestNotLast> for EvalError {
    fn from(err: RestNotLast) -> Self {
        rest_not_last(err.position, err.len)
    }
}

// Binding Errors

/// A pattern expected a sequence or mapping but got `got`.
#[cold]
pub fn shape_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ShapeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

// Pattern Construction Errors

/// Rest element written before the end of a sequence pattern.
#[cold]
pub fn rest_not_last(position: usize, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RestNotLast { position, len })
}

// Template Errors

/// `segments.len() != expressions.len() + 1`.
#[cold]
pub fn segment_arity_mismatch(segments: usize, expressions: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SegmentArityMismatch {
        segments,
        expressions,
    })
}

// Scope Errors

/// Name not bound in the pattern so far nor in the environment.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Assignment to a read-only binding.
#[cold]
pub fn cannot_assign_immutable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImmutableBinding {
        name: name.to_string(),
    })
}

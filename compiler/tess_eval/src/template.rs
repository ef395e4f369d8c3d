//! Template literal marshalling.
//!
//! A template `` `${x} + ${y} = ${x + y}` `` arrives here already split into
//! constant segments `["", " + ", " = ", ""]` and evaluated expressions
//! `[5, 25, 30]`. There is always one more segment than expressions.
//!
//! Untagged templates join the two sequences into a string. Tagged templates
//! hand both sequences, unjoined, to a `TagHandler` and return its result.

use tess_value::{segment_arity_mismatch, EvalError, EvalResult, Value};

/// Constant segments of a template literal.
///
/// `cooked` is the processed text of each segment; `raw` is the text as
/// written in source, before escape processing. Callers that do not track
/// escapes can omit `raw`, in which case it mirrors `cooked`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateStrings {
    cooked: Vec<String>,
    raw: Option<Vec<String>>,
}

impl TemplateStrings {
    /// Segments with processed text only.
    pub fn new<S: Into<String>>(cooked: impl IntoIterator<Item = S>) -> Self {
        TemplateStrings {
            cooked: cooked.into_iter().map(Into::into).collect(),
            raw: None,
        }
    }

    /// Attach the raw view. Must have one entry per cooked segment.
    pub fn with_raw<S: Into<String>>(
        mut self,
        raw: impl IntoIterator<Item = S>,
    ) -> Result<Self, EvalError> {
        let raw: Vec<String> = raw.into_iter().map(Into::into).collect();
        if raw.len() != self.cooked.len() {
            return Err(EvalError::new(format!(
                "raw template view has {} segments, cooked view has {}",
                raw.len(),
                self.cooked.len()
            )));
        }
        self.raw = Some(raw);
        Ok(self)
    }

    /// Processed segment text.
    #[inline]
    pub fn cooked(&self) -> &[String] {
        &self.cooked
    }

    /// Source segment text.
    #[inline]
    pub fn raw(&self) -> &[String] {
        self.raw.as_deref().unwrap_or(&self.cooked)
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.cooked.len()
    }

    /// Whether there are no segments. Never true for a well-formed template.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cooked.is_empty()
    }
}

/// Consumer of a tagged template.
///
/// Receives the constant segments as one argument and the expression values
/// as a second, in source order.
pub trait TagHandler {
    fn call(&mut self, strings: &TemplateStrings, values: &[Value]) -> EvalResult;
}

impl<F> TagHandler for F
where
    F: FnMut(&TemplateStrings, &[Value]) -> EvalResult,
{
    fn call(&mut self, strings: &TemplateStrings, values: &[Value]) -> EvalResult {
        self(strings, values)
    }
}

/// Evaluate a template literal.
///
/// Without a tag, returns the interleaved string. With a tag, returns
/// whatever the handler returns.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(segments = strings.len(), expressions = expressions.len(), tagged = tag.is_some())
)]
pub fn marshal(
    strings: &TemplateStrings,
    expressions: &[Value],
    tag: Option<&mut dyn TagHandler>,
) -> EvalResult {
    check_arity(strings, expressions)?;
    match tag {
        Some(handler) => handler.call(strings, expressions),
        None => Ok(Value::string(join_segments(strings.cooked(), expressions))),
    }
}

/// Untagged evaluation as a plain `String`.
pub fn interpolate(strings: &TemplateStrings, expressions: &[Value]) -> Result<String, EvalError> {
    check_arity(strings, expressions)?;
    Ok(join_segments(strings.cooked(), expressions))
}

fn check_arity(strings: &TemplateStrings, expressions: &[Value]) -> Result<(), EvalError> {
    if strings.len() == expressions.len().saturating_add(1) {
        Ok(())
    } else {
        Err(segment_arity_mismatch(strings.len(), expressions.len()))
    }
}

/// `segments[0] + str(e0) + segments[1] + ... + segments[n]`
///
/// Caller guarantees `segments.len() == expressions.len() + 1`.
fn join_segments(segments: &[String], expressions: &[Value]) -> String {
    let mut out = String::new();
    let mut values = expressions.iter();
    for segment in segments {
        out.push_str(segment);
        if let Some(value) = values.next() {
            out.push_str(&value.display_value());
        }
    }
    out
}

#[cfg(test)]
mod tests;

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use tess_value::EvalErrorKind;

use super::*;

/// `` `${x} + ${y} = ${x + y}` `` with x = 5, y = 25
fn sum_template() -> (TemplateStrings, Vec<Value>) {
    (
        TemplateStrings::new(["", " + ", " = ", ""]),
        vec![Value::int(5), Value::int(25), Value::int(30)],
    )
}

/// Joins segments and values with `|`, mirroring a tag that inspects both.
fn pipe_tag(strings: &TemplateStrings, values: &[Value]) -> EvalResult {
    let joined_strings = strings.cooked().join("|");
    let joined_values = values
        .iter()
        .map(Value::display_value)
        .collect::<Vec<_>>()
        .join("|");
    Ok(Value::sequence(vec![
        Value::string(joined_strings),
        Value::string(format!("{joined_values}|")),
    ]))
}

#[test]
fn untagged_interleaves_segments_and_values() {
    let (strings, values) = sum_template();
    let result = marshal(&strings, &values, None).unwrap();
    assert_eq!(result, Value::string("5 + 25 = 30"));
}

#[test]
fn untagged_with_space_separator() {
    let strings = TemplateStrings::new(["", " ", ""]);
    let values = [Value::int(5), Value::int(25)];
    assert_eq!(interpolate(&strings, &values).unwrap(), "5 25");
}

#[test]
fn untagged_without_expressions_is_the_single_segment() {
    let strings = TemplateStrings::new(["plain text"]);
    assert_eq!(interpolate(&strings, &[]).unwrap(), "plain text");
}

#[test]
fn untagged_uses_canonical_conversion() {
    let strings = TemplateStrings::new(["", " ", " ", " ", " ", ""]);
    let values = [
        Value::Absent,
        Value::Null,
        Value::Bool(true),
        Value::float(2.0),
        Value::sequence(vec![Value::int(1), Value::Null, Value::int(3)]),
    ];
    assert_eq!(
        interpolate(&strings, &values).unwrap(),
        "undefined null true 2 1,,3"
    );
}

#[test]
fn trailing_whitespace_survives_marshalling() {
    // `${greeting} ${name}` with name = '' yields "hello " before any trim.
    let strings = TemplateStrings::new(["", " ", ""]);
    let values = [Value::string("hello"), Value::string("")];
    let text = interpolate(&strings, &values).unwrap();
    assert_eq!(text, "hello ");
    assert_eq!(text.trim(), "hello");
}

#[test]
fn tag_receives_strings_and_values_separately() {
    let (strings, values) = sum_template();
    let mut tag = pipe_tag;
    let result = marshal(&strings, &values, Some(&mut tag)).unwrap();
    assert_eq!(
        result,
        Value::sequence(vec![
            Value::string("| + | = |"),
            Value::string("5|25|30|"),
        ])
    );
}

#[test]
fn tag_result_is_returned_unmodified() {
    let strings = TemplateStrings::new(["", " is ", ""]);
    let values = [Value::int(1), Value::int(2)];
    let mut seen = Vec::new();
    let mut tag = |strings: &TemplateStrings, values: &[Value]| -> EvalResult {
        seen.push((strings.len(), values.len()));
        Ok(Value::int(42))
    };
    let result = marshal(&strings, &values, Some(&mut tag)).unwrap();
    assert_eq!(result, Value::int(42));
    assert_eq!(seen, vec![(3, 2)]);
}

#[test]
fn tag_errors_propagate() {
    let (strings, values) = sum_template();
    let mut tag =
        |_: &TemplateStrings, _: &[Value]| -> EvalResult { Err(EvalError::new("tag failed")) };
    let err = marshal(&strings, &values, Some(&mut tag)).unwrap_err();
    assert_eq!(err.message, "tag failed");
}

#[test]
fn segment_arity_is_checked_before_the_tag_runs() {
    let strings = TemplateStrings::new(["a", "b"]);
    let values = [Value::int(1), Value::int(2)];
    let mut calls = 0;
    let mut tag = |_: &TemplateStrings, _: &[Value]| -> EvalResult {
        calls += 1;
        Ok(Value::Null)
    };
    let err = marshal(&strings, &values, Some(&mut tag)).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::SegmentArityMismatch {
            segments: 2,
            expressions: 2,
        }
    );
    assert_eq!(calls, 0);
}

#[test]
fn untagged_arity_mismatch_fails() {
    let strings = TemplateStrings::new(["only"]);
    let err = interpolate(&strings, &[Value::int(1)]).unwrap_err();
    assert_eq!(
        err.message,
        "template has 1 segments for 1 expressions (expected 2)"
    );
}

#[test]
fn raw_view_defaults_to_cooked() {
    let strings = TemplateStrings::new(["a\n", "b"]);
    assert_eq!(strings.raw(), strings.cooked());

    let strings = strings.with_raw(["a\\n", "b"]).unwrap();
    assert_eq!(strings.cooked(), ["a\n".to_string(), "b".to_string()]);
    assert_eq!(strings.raw(), ["a\\n".to_string(), "b".to_string()]);
}

#[test]
fn raw_view_must_match_segment_count() {
    let err = TemplateStrings::new(["a", "b"])
        .with_raw(["a"])
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Custom { .. }));
}

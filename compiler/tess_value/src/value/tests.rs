#![allow(
    clippy::approx_constant,
    reason = "3.1416 is a test value, not an approximation of PI"
)]

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_absent_is_distinct_from_null() {
    assert!(Value::Absent.is_absent());
    assert!(!Value::Null.is_absent());
    assert_ne!(Value::Absent, Value::Null);
    assert_eq!(Value::Absent.type_name(), "undefined");
    assert_eq!(Value::Null.type_name(), "null");
}

#[test]
fn test_capability_checks() {
    let seq = Value::sequence(vec![Value::int(1), Value::int(2)]);
    assert_eq!(seq.as_sequence().map(<[Value]>::len), Some(2));
    assert!(seq.as_mapping().is_none());

    let cake = Value::mapping([("weight", Value::int(1000))]);
    assert!(cake.as_sequence().is_none());
    assert_eq!(cake.get_key("weight"), Some(Value::int(1000)));
    assert_eq!(cake.get_key("eggless"), Some(Value::Absent));

    assert_eq!(Value::int(42).get_key("weight"), None);
}

#[test]
fn test_display_value_scalars() {
    assert_eq!(Value::Absent.display_value(), "undefined");
    assert_eq!(Value::Null.display_value(), "null");
    assert_eq!(Value::Bool(false).display_value(), "false");
    assert_eq!(Value::int(-7).display_value(), "-7");
    assert_eq!(Value::string("hi ES6").display_value(), "hi ES6");
}

#[test]
fn test_display_value_numbers() {
    assert_eq!(Value::float(2.0).display_value(), "2");
    assert_eq!(Value::float(5.5).display_value(), "5.5");
    assert_eq!(Value::float(-0.0).display_value(), "0");
    assert_eq!(Value::float(3.1416).display_value(), "3.1416");
    assert_eq!(Value::float(f64::NAN).display_value(), "NaN");
    assert_eq!(Value::float(f64::NEG_INFINITY).display_value(), "-Infinity");
}

#[test]
fn test_display_value_uses_shortest_round_trip_digits() {
    assert_eq!(
        Value::float(1.234_567_890_123_456_8e20).display_value(),
        "123456789012345680000"
    );
    assert_eq!(Value::float(1e20).display_value(), "100000000000000000000");
    assert_eq!(Value::float(0.1 + 0.2).display_value(), "0.30000000000000004");
    assert_eq!(Value::float(-123.0).display_value(), "-123");
    assert_eq!(Value::float(0.5).display_value(), "0.5");
}

#[test]
fn test_display_value_switches_to_exponent_form() {
    assert_eq!(Value::float(1e21).display_value(), "1e+21");
    assert_eq!(Value::float(1.5e300).display_value(), "1.5e+300");
    assert_eq!(Value::float(-2.5e22).display_value(), "-2.5e+22");
    assert_eq!(Value::float(1e-6).display_value(), "0.000001");
    assert_eq!(Value::float(1.5e-6).display_value(), "0.0000015");
    assert_eq!(Value::float(1e-7).display_value(), "1e-7");
    assert_eq!(Value::float(1.25e-10).display_value(), "1.25e-10");
}

#[test]
fn test_display_value_composites() {
    let seq = Value::sequence(vec![
        Value::int(1),
        Value::Absent,
        Value::Null,
        Value::sequence(vec![Value::int(2), Value::int(3)]),
    ]);
    assert_eq!(seq.display_value(), "1,,,2,3");
    assert_eq!(Value::sequence(vec![]).display_value(), "");
    assert_eq!(
        Value::mapping([("flavour", Value::string("Vanilla"))]).display_value(),
        "[object Object]"
    );
}

#[test]
fn test_display_debug_form() {
    let cake = Value::mapping([
        ("weight", Value::int(500)),
        ("flavour", Value::string("Vanilla")),
    ]);
    assert_eq!(format!("{cake}"), "{flavour: \"Vanilla\", weight: 500}");
    let seq = Value::sequence(vec![Value::Absent, Value::Bool(true)]);
    assert_eq!(format!("{seq}"), "[undefined, true]");
}

#[test]
fn test_from_literal() {
    assert_eq!(Value::from(&Literal::Null), Value::Null);
    assert_eq!(Value::from(&Literal::Int(500)), Value::int(500));
    assert_eq!(Value::from(&Literal::float(0.5)), Value::float(0.5));
    assert_eq!(Value::from(&Literal::string("Vanilla")), Value::string("Vanilla"));
}

#[test]
fn test_as_float_widens_ints() {
    assert_eq!(Value::int(3).as_float(), Some(3.0));
    assert_eq!(Value::float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::string("3").as_float(), None);
}

#[test]
fn test_clone_shares_payload() {
    let seq = Value::sequence(vec![Value::int(1)]);
    let copy = seq.clone();
    match (&seq, &copy) {
        (Value::Sequence(a), Value::Sequence(b)) => assert!(Heap::ptr_eq(a, b)),
        _ => panic!("expected sequences"),
    }
}

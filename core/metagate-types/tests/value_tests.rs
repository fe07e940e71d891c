use metagate_types::{Cardinality, MetaValue, ValueType};
use proptest::prelude::*;

// ── Untagged deserialization ─────────────────────────────────────

#[test]
fn json_string_becomes_string_value() {
    let v: MetaValue = serde_json::from_str("\"New Title\"").unwrap();
    assert_eq!(v, MetaValue::String("New Title".to_string()));
}

#[test]
fn json_whole_number_stays_integer() {
    let v: MetaValue = serde_json::from_str("42").unwrap();
    assert_eq!(v, MetaValue::Integer(42));
}

#[test]
fn json_fraction_becomes_number() {
    let v: MetaValue = serde_json::from_str("1.5").unwrap();
    assert_eq!(v, MetaValue::Number(1.5));
}

#[test]
fn json_array_becomes_list() {
    let v: MetaValue = serde_json::from_str("[\"a\", \"b\"]").unwrap();
    assert_eq!(v, MetaValue::List(vec!["a".into(), "b".into()]));
}

// ── Shape checks ─────────────────────────────────────────────────

#[test]
fn single_string_accepts_string() {
    let v = MetaValue::from("hello");
    assert!(v.check_shape(ValueType::String, Cardinality::Single).is_ok());
}

#[test]
fn single_string_rejects_integer() {
    let v = MetaValue::from(7);
    assert!(v.check_shape(ValueType::String, Cardinality::Single).is_err());
}

#[test]
fn single_rejects_list() {
    let v = MetaValue::List(vec!["a".into()]);
    assert!(v.check_shape(ValueType::String, Cardinality::Single).is_err());
}

#[test]
fn multiple_requires_list() {
    let scalar = MetaValue::from("a");
    assert!(scalar.check_shape(ValueType::String, Cardinality::Multiple).is_err());

    let list = MetaValue::List(vec!["a".into(), "b".into()]);
    assert!(list.check_shape(ValueType::String, Cardinality::Multiple).is_ok());
}

#[test]
fn multiple_checks_every_element() {
    let mixed = MetaValue::List(vec!["a".into(), MetaValue::Integer(1)]);
    assert!(mixed.check_shape(ValueType::String, Cardinality::Multiple).is_err());
}

#[test]
fn empty_list_is_valid_multiple() {
    let empty = MetaValue::List(vec![]);
    assert!(empty.check_shape(ValueType::String, Cardinality::Multiple).is_ok());
}

#[test]
fn integer_satisfies_number() {
    let v = MetaValue::Integer(3);
    assert!(v.check_shape(ValueType::Number, Cardinality::Single).is_ok());
}

#[test]
fn boolean_shape() {
    let v = MetaValue::from(true);
    assert!(v.check_shape(ValueType::Boolean, Cardinality::Single).is_ok());
    assert!(v.check_shape(ValueType::Integer, Cardinality::Single).is_err());
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    /// Any JSON string is a valid Single String and survives serde.
    #[test]
    fn string_values_roundtrip(s in ".{0,64}") {
        let v = MetaValue::from(s.clone());
        prop_assert!(v.check_shape(ValueType::String, Cardinality::Single).is_ok());

        let json = serde_json::to_string(&v).unwrap();
        let back: MetaValue = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, MetaValue::String(s));
    }

    /// A scalar satisfies exactly one of Single/Multiple for its own type.
    #[test]
    fn scalars_never_satisfy_multiple(n in any::<i64>()) {
        let v = MetaValue::from(n);
        prop_assert!(v.check_shape(ValueType::Integer, Cardinality::Single).is_ok());
        prop_assert!(v.check_shape(ValueType::Integer, Cardinality::Multiple).is_err());
    }
}

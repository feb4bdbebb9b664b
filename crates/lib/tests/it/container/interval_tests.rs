use dotarray::{Container, Interval, Value};

use crate::helpers::*;

#[test]
fn test_interval_on_positional_keys() {
    let arr = positional(11);
    let slice = arr.get_array("2:6").unwrap().unwrap();
    assert_json(&slice, "[2,3,4,5]");
    assert_json(&slice.values(), "[2,3,4,5]");
}

#[test]
fn test_interval_on_associative_keys() {
    let arr = spelled_numbers();
    let slice = arr.get_array("2:5").unwrap().unwrap();
    assert_json(&slice, r#"{"two":2,"three":3,"four":4}"#);
}

#[test]
fn test_open_and_negative_bounds() {
    let arr = positional(5);
    assert_json(&arr.get_array(":2").unwrap().unwrap(), "[0,1]");
    assert_json(&arr.get_array("3:").unwrap().unwrap(), "[3,4]");
    assert_json(&arr.get_array(":").unwrap().unwrap(), "[0,1,2,3,4]");
    assert_json(&arr.get_array("-2:").unwrap().unwrap(), "[3,4]");
    assert_json(&arr.get_array("1:-1").unwrap().unwrap(), "[1,2,3]");
}

#[test]
fn test_out_of_range_interval_is_empty() {
    let arr = positional(3);
    assert_json(&arr.get_array("5:9").unwrap().unwrap(), "[]");
    assert_json(&arr.get_array("2:1").unwrap().unwrap(), "[]");
    assert!(!arr.has("5:9").unwrap());
    assert!(arr.has("0:1").unwrap());
    assert!(arr.is_empty_at("2:1").unwrap());
}

#[test]
fn test_interval_result_is_a_copy() {
    let arr = positional(4);
    let mut slice = arr.get_array("0:2").unwrap().unwrap().into_owned();
    slice.push(99);
    assert_eq!(arr.len(), 4);
    assert_eq!(slice.len(), 3);
}

#[test]
fn test_malformed_interval_on_get() {
    let arr = Container::new();
    let err = arr.get("3:4:5").unwrap_err();
    assert!(err.is_invalid_expression());
    assert_eq!(err.expression(), Some("3:4:5"));
}

#[test]
fn test_malformed_interval_on_set() {
    let mut arr = Container::new();
    assert!(arr.set("3:4:5", 10).unwrap_err().is_invalid_expression());
    assert!(arr.is_empty());
}

#[test]
fn test_malformed_interval_on_has() {
    let arr = Container::new();
    assert!(arr.has("3:4:5").unwrap_err().is_invalid_expression());
    assert!(arr.is_absent("3:4:5").is_err());
    assert!(arr.is_filled("3:4:5").is_err());
}

#[test]
fn test_malformed_interval_on_unset() {
    let mut arr = positional(3);
    assert!(arr.unset("3:4:5").unwrap_err().is_invalid_expression());
    assert!(arr.unset("a:b").unwrap_err().is_invalid_expression());
    assert_eq!(arr.len(), 3);
}

#[test]
fn test_interval_wins_over_path() {
    let arr = positional(3);
    assert!(arr.get("a.b:c").is_err());
    assert!(arr.get("0.1:2").is_err());
}

#[test]
fn test_typed_interval_matches_parsed() {
    let arr = spelled_numbers();
    let typed = arr.get(Interval::new(Some(-3), Some(-1))).unwrap().unwrap();
    let parsed = arr.get("-3:-1").unwrap().unwrap();
    assert_eq!(typed, parsed);
    assert_eq!(
        typed.into_owned(),
        Value::Array(Container::from([("eight", 8), ("nine", 9)]))
    );
}

#[test]
fn test_slice_reindexes_positional_only() {
    let arr = positional(6);
    assert_json(&arr.slice(Interval::new(Some(4), None)), "[4,5]");

    let mut sparse = positional(6);
    sparse.unset(0).unwrap();
    assert_json(&sparse.slice(Interval::new(Some(3), None)), r#"{"4":4,"5":5}"#);
}

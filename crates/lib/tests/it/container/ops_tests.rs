use dotarray::{Container, Key, Text, Value};

use crate::helpers::*;

#[test]
fn test_pushing_several_values() {
    let mut arr = Container::new();
    arr.push_all([
        Value::from("lorem"),
        Value::from(Container::from([("amet", "consectetur")])),
        Value::from("ipsum"),
        Value::from(2222),
    ]);
    assert_json(&arr, r#"["lorem",{"amet":"consectetur"},"ipsum",2222]"#);
}

#[test]
fn test_push_after_sparse_keys() {
    let mut arr = Container::from([(5usize, "a"), (2usize, "b")]);
    assert_eq!(arr.push("c"), Key::Index(6));
}

#[test]
fn test_unshifting_several_values() {
    let mut arr = Container::list([Value::from("ipsum"), Value::from(2222)]);
    arr.unshift_all([
        Value::from("lorem"),
        Value::from(Container::from([("amet", "consectetur")])),
    ]);
    assert_json(&arr, r#"["lorem",{"amet":"consectetur"},"ipsum",2222]"#);
}

#[test]
fn test_unshift_keeps_names() {
    let mut arr = Container::from([("name", "x")]);
    arr.unshift("first");
    assert_json(&arr, r#"{"0":"first","name":"x"}"#);
}

#[test]
fn test_shift() {
    let mut arr = Container::from(vec!["lorem", "ipsum", "dolor"]);
    assert_eq!(arr.shift(), Some(Value::from("lorem")));
    assert_json(&arr, r#"["ipsum","dolor"]"#);
}

#[test]
fn test_pop() {
    let mut arr = Container::from(vec!["lorem", "ipsum", "dolor"]);
    assert_eq!(arr.pop(), Some(Value::from("dolor")));
    assert_json(&arr, r#"["lorem","ipsum"]"#);
}

#[test]
fn test_first_and_last() {
    let arr = Container::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(arr.first(), Some(&Value::Int(1)));
    assert_eq!(arr.last(), Some(&Value::Int(5)));
    assert_eq!(Container::new().last(), None);
}

#[test]
fn test_stride_forward() {
    let arr = Container::from(vec!["lorem", "ipsum", "dolor", "sit"]);
    let mut seen = Vec::new();
    arr.stride(0, 1, |key, value| {
        assert_eq!(arr.get(key).unwrap().as_deref(), Some(value));
        seen.push(key.clone());
    })
    .unwrap();
    assert_eq!(seen, (0..4).map(Key::Index).collect::<Vec<_>>());
}

#[test]
fn test_stride_backward() {
    let arr = Container::from(vec!["lorem", "ipsum", "dolor", "sit"]);
    let mut seen = Vec::new();
    arr.stride(arr.count() as isize - 1, -1, |_, value| {
        seen.push(value.to_string());
    })
    .unwrap();
    assert_eq!(seen, ["sit", "dolor", "ipsum", "lorem"]);
}

#[test]
fn test_stride_uses_positions_not_keys() {
    let arr = Container::from([("a", 1), ("b", 2), ("c", 3)]);
    let mut total = 0;
    arr.stride(0, 2, |_, value| total += value.as_int().unwrap_or(0))
        .unwrap();
    assert_eq!(total, 4);
}

#[test]
fn test_map_values() {
    let mut arr = Container::from(vec!["lorem", "ipsum", "dolor"]);
    arr.map(|key, value| (key, value.to_string().to_uppercase()));
    assert_json(&arr, r#"["LOREM","IPSUM","DOLOR"]"#);
}

#[test]
fn test_map_only_keys() {
    let mut arr = Container::from(vec!["lorem", "ipsum", "dolor"]);
    arr.map(|key, value| (key.as_index().map_or(0, |i| i + 1), value));
    assert_json(&arr, r#"{"1":"lorem","2":"ipsum","3":"dolor"}"#);
    assert!(!arr.is_positional());
}

#[test]
fn test_chunk() {
    let arr = Container::from(vec![1, 2, 3, 4, 5]);
    assert_json(&arr.chunk(2).unwrap(), "[[1,2],[3,4],[5]]");
    assert_json(&arr.chunk(10).unwrap(), "[[1,2,3,4,5]]");
    assert_json(&Container::new().chunk(3).unwrap(), "[]");
}

#[test]
fn test_chunk_zero_is_rejected() {
    let err = Container::from(vec![1]).chunk(0).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_getting_keys() {
    let keys = unsorted_numbers().keys();
    assert_json(&keys, r#"["three","eight","two"]"#);
    assert_json(&positional(3).keys(), "[0,1,2]");
}

#[test]
fn test_getting_values() {
    assert_json(&unsorted_numbers().values(), "[3,8,2]");
}

#[test]
fn test_join() {
    let arr = Container::from(vec![1, 2, 3, 4, 5, 6]);
    let joined = arr.join("|");
    assert_eq!(joined, Text::from("1|2|3|4|5|6"));
    assert_eq!(joined.get(), "1|2|3|4|5|6");
}

#[test]
fn test_join_mixed_values() {
    let arr = Container::list([
        Value::Null,
        Value::Bool(true),
        Value::Float(1.5),
        Value::from("x"),
        Value::from(vec![1, 2]),
    ]);
    assert_eq!(arr.join(",").get(), "null,true,1.5,x,[1,2]");
}

#[test]
fn test_column() {
    let arr = Container::try_from(serde_json::json!({
        "lorem1": {"ipsum": "dolor1", "sit": "amet1"},
        "lorem2": {"ipsum": "dolor2", "sit": "amet2"},
        "lorem3": {"sit": "amet3"},
        "scalar": "skipped"
    }))
    .unwrap();
    assert_json(&arr.column("ipsum"), r#"["dolor1","dolor2"]"#);
}

#[test]
fn test_combine() {
    let mut arr = Container::new();
    arr.set("KEYS", vec!["lorem", "ipsum"]).unwrap();
    arr.set("VALUES", vec!["dolor", "amet"]).unwrap();

    let keys = arr.get_array("KEYS").unwrap().unwrap();
    let values = arr.get_array("VALUES").unwrap().unwrap();
    let combined = Container::combine(&keys, &values).unwrap();
    assert_json(&combined, r#"{"lorem":"dolor","ipsum":"amet"}"#);
}

#[test]
fn test_combine_truncates_and_converts_keys() {
    let keys = Container::list([Value::Int(3), Value::Bool(false), Value::from("x")]);
    let values = Container::from(vec!["a", "b"]);
    let combined = Container::combine(&keys, &values).unwrap();
    assert_json(&combined, r#"{"3":"a","0":"b"}"#);

    let nested = Container::list([Value::from(vec![1])]);
    assert!(Container::combine(&nested, &values).unwrap_err().is_invalid_argument());
}

#[test]
fn test_key_case() {
    let mut arr = Container::from([("Hello", 5)]);
    arr.lower_keys();
    assert_json(&arr, r#"{"hello":5}"#);
    arr.upper_keys();
    assert_json(&arr, r#"{"HELLO":5}"#);
}

#[test]
fn test_key_case_leaves_nested_levels() {
    let mut arr = Container::new();
    arr.set("Outer.Inner", 1).unwrap();
    arr.lower_keys();
    assert_json(&arr, r#"{"outer":{"Inner":1}}"#);
}

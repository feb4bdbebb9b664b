use dotarray::{Container, Key, KeyExpr, KeySyntax, Value, path};

use crate::helpers::*;

#[test]
fn test_creating_from_list() {
    let words = [
        "lorem", "ipsum", "dolor", "sit", "amet,", "consectetur", "adipiscing", "elit",
    ];
    let arr = Container::from(words.to_vec());
    assert!(arr.is_positional());
    assert_eq!(arr.len(), 8);
    assert_eq!(value_at(&arr, "4"), "amet,");
}

#[test]
fn test_successive_get() {
    let arr = Container::try_from(serde_json::json!({
        "lorem": {"ipsum": "dolor"},
        "sit": "amet"
    }))
    .unwrap();

    let lorem = arr.get_array("lorem").unwrap().unwrap();
    assert_eq!(lorem.get("ipsum").unwrap().as_deref(), Some(&Value::from("dolor")));
}

#[test]
fn test_get_in_several_keys() {
    let arr = Container::try_from(serde_json::json!({
        "lorem": {"ipsum": {"dolor": "sit"}},
        "0": "amet"
    }))
    .unwrap();

    assert_eq!(arr.get_in(["lorem", "ipsum", "dolor"]), Some(&Value::from("sit")));
    assert_eq!(arr.get_in([0usize]), Some(&Value::from("amet")));
    assert_eq!(arr.get_in(["lorem", "missing"]), None);
    assert_eq!(arr.get_in(Vec::<Key>::new()), None);
}

#[test]
fn test_building_like_array_syntax() {
    let mut arr = Container::new();
    arr.set("lorem", "ipsum").unwrap();
    arr.push("dolor");
    arr.set("sit.amet", "amet").unwrap();

    assert_json(&arr, r#"{"lorem":"ipsum","0":"dolor","sit":{"amet":"amet"}}"#);
}

#[test]
fn test_missing_key_returns_none() {
    let arr = Container::new();
    assert!(arr.get("ipsum").unwrap().is_none());
    assert!(arr.get("ipsum.dolor.sit").unwrap().is_none());
    assert!(arr.get(7).unwrap().is_none());
}

#[test]
fn test_dot_notation_writes() {
    let mut arr = Container::new();
    arr.set("lorem.ipsum.dolor.sit", "amet").unwrap();
    arr.container_mut("lorem.ipsum.dolor")
        .unwrap()
        .push("consectetur");
    arr.container_mut("lorem.ipsum.dolor")
        .unwrap()
        .push(Container::from([("sit", "amet")]));
    let dolor = value_at(&arr, "lorem.ipsum.dolor");
    arr.container_mut("lorem.ipsum").unwrap().push(dolor);

    let dolor = r#"{"sit":"amet","0":"consectetur","1":{"sit":"amet"}}"#;
    assert_json(
        &arr,
        &format!(r#"{{"lorem":{{"ipsum":{{"dolor":{dolor},"0":{dolor}}}}}}}"#),
    );
}

#[test]
fn test_reads_never_create_entries() {
    let mut arr = Container::new();
    arr.set("a", 1).unwrap();
    let before = arr.clone();

    assert!(arr.get("x.y.z").unwrap().is_none());
    assert!(!arr.has("x.y").unwrap());
    assert!(arr.is_empty_at("x.y").unwrap());
    assert!(arr.get_mut("x.y").unwrap().is_none());
    assert!(arr.unset("x.y").unwrap().is_none());

    assert_eq!(arr, before);
}

#[test]
fn test_set_returns_previous_value() {
    let mut arr = Container::new();
    assert_eq!(arr.set("a.b", 1).unwrap(), None);
    assert_eq!(arr.set("a.b", 2).unwrap(), Some(Value::Int(1)));
    assert_eq!(value_at(&arr, "a.b"), 2);
}

#[test]
fn test_get_mut_edits_in_place() {
    let mut arr = Container::new();
    arr.set("counter.hits", 1).unwrap();
    if let Some(Value::Int(hits)) = arr.get_mut("counter.hits").unwrap() {
        *hits += 1;
    }
    assert_eq!(value_at(&arr, "counter.hits"), 2);
}

#[test]
fn test_numeric_strings_address_integer_keys() {
    let mut arr = Container::from(vec!["a", "b"]);
    arr.set("1", "B").unwrap();
    assert_json(&arr, r#"["a","B"]"#);
    assert!(arr.has(1).unwrap());
    assert!(!arr.has("01").unwrap());
}

#[test]
fn test_path_macro_keeps_dots_inside_parts() {
    let mut arr = Container::new();
    arr.set(path!("hosts", "example.com", "port"), 443).unwrap();

    assert_json(&arr, r#"{"hosts":{"example.com":{"port":443}}}"#);
    assert!(arr.has(path!("hosts", "example.com")).unwrap());
    assert!(!arr.has("hosts.example.com").unwrap());
}

#[test]
fn test_custom_key_syntax() {
    let syntax = KeySyntax::new('/', '~').unwrap();
    let mut arr = Container::new();

    arr.set(KeyExpr::parse_with("a/b.c", &syntax).unwrap(), 1)
        .unwrap();
    assert_json(&arr, r#"{"a":{"b.c":1}}"#);

    let expr = KeyExpr::parse_with("0~1", &syntax).unwrap();
    assert!(expr.is_interval());
    assert!(KeySyntax::new('.', '.').is_err());
}

#[test]
fn test_has_and_is_absent() {
    let mut arr = Container::new();
    arr.set("lorem", "ipsum").unwrap();
    arr.set("dolor.sit", "amet").unwrap();

    assert!(arr.has("lorem").unwrap());
    assert!(!arr.has("ipsum").unwrap());
    assert!(arr.has("dolor.sit").unwrap());
    assert!(!arr.has("dolor.amet").unwrap());

    assert!(!arr.is_absent("lorem").unwrap());
    assert!(arr.is_absent("ipsum").unwrap());
    assert!(arr.is_absent("dolor.amet").unwrap());
    assert!(!arr.is_absent("dolor.sit").unwrap());
}

#[test]
fn test_present_but_empty_values() {
    let mut arr = Container::new();
    arr.set("lorem", "ipsum").unwrap();
    arr.set("dolor.sit", false).unwrap();
    arr.set("nothing", Value::Null).unwrap();

    assert!(!arr.is_empty_at("lorem").unwrap());
    assert!(arr.is_empty_at("ipsum").unwrap());
    assert!(arr.is_empty_at("dolor.sit").unwrap());
    assert!(arr.has("dolor.sit").unwrap());
    assert!(arr.has("nothing").unwrap());
    assert!(arr.is_empty_at("nothing").unwrap());

    assert!(arr.is_filled("lorem").unwrap());
    assert!(!arr.is_filled("ipsum").unwrap());
    assert!(!arr.is_filled("dolor.sit").unwrap());
}

#[test]
fn test_empty_values() {
    let mut arr = Container::new();
    for (key, value) in [
        ("zero", Value::Int(0)),
        ("zero_float", Value::Float(0.0)),
        ("blank", Value::from("")),
        ("zero_text", Value::from("0")),
        ("empty", Value::Array(Container::new())),
    ] {
        arr.set(key, value).unwrap();
    }
    arr.set("space", " ").unwrap();
    arr.set("nested", vec![0]).unwrap();

    for key in ["zero", "zero_float", "blank", "zero_text", "empty"] {
        assert!(arr.is_empty_at(key).unwrap(), "{key} should be empty");
    }
    assert!(arr.is_filled("space").unwrap());
    assert!(arr.is_filled("nested").unwrap());
}

#[test]
fn test_unset_with_dot_notation() {
    let mut arr = Container::new();
    arr.set("lorem.ipsum", "sit").unwrap();
    assert_eq!(arr.unset("lorem.ipsum").unwrap(), Some(Value::from("sit")));
    assert!(!arr.has("lorem.ipsum").unwrap());
    assert!(arr.has("lorem").unwrap());
    assert!(arr.unset("lorem.ipsum").unwrap().is_none());
}

#[test]
fn test_unset_keeps_other_keys() {
    let mut arr = Container::from(vec!["a", "b", "c"]);
    arr.unset(1).unwrap();
    assert_json(&arr, r#"{"0":"a","2":"c"}"#);
    assert!(!arr.is_positional());
}

#[test]
fn test_iteration_visits_every_entry() {
    let arr = Container::from(vec!["lorem", "ipsum", "dolor", "sit"]);
    for (key, value) in &arr {
        assert_eq!(arr.get(key).unwrap().as_deref(), Some(value));
    }

    let mut visited = 0;
    arr.each(|key, value| {
        assert_eq!(arr.get(key).unwrap().as_deref(), Some(value));
        visited += 1;
    });
    assert_eq!(visited, 4);
}

#[test]
fn test_length_is_recomputed() {
    let mut arr = Container::from(vec![1, 2, 3, 4, 5, 6]);
    arr.unset(0).unwrap();
    arr.unset(1).unwrap();
    arr.set("lorem.ipsum", Container::from([("lorem", "ipsum")]))
        .unwrap();
    arr.push("dolor");
    arr.push_all([1, 2, 3]);
    arr.shift();
    arr.unshift_all([4, 5, 6]);
    arr.pop();
    assert_eq!(arr.len(), 10);
    assert_eq!(arr.count(), 10);
    assert_eq!(arr.chunk(2).unwrap().len(), 5);
}

#[test]
fn test_count_nested() {
    let mut arr = Container::from(vec![1, 2, 3, 4, 5]);
    arr.set(2, vec![1, 2, 3]).unwrap();

    assert_eq!(arr.count(), 5);
    assert_eq!(arr.get_array(2).unwrap().unwrap().count(), 3);
}

#[test]
fn test_value_is_array() {
    assert!(Value::from(vec![1, 2, 3, 4, 5]).is_array());
    assert!(!Value::from("1,2,3,4,5").is_array());
}

#[test]
fn test_spelled_numbers_fixture_is_associative() {
    let arr = spelled_numbers();
    assert_eq!(arr.len(), 11);
    assert!(!arr.is_positional());
    assert_eq!(value_at(&arr, "ten"), 10);
}

#[test]
fn test_hand_built_numeric_names_share_integer_slot() {
    let arr: Container = [(Key::Name("1".into()), "x")].into_iter().collect();
    assert_json(&arr, r#"{"1":"x"}"#);
    assert_eq!(value_at(&arr, "1"), "x");
    assert!(arr.has(1usize).unwrap());

    let mut arr = Container::from(vec!["a", "b"]);
    arr.set(Key::Name("1".into()), "B").unwrap();
    arr.extend([(Key::Name("2".into()), "c")]);
    assert_json(&arr, r#"["a","B","c"]"#);
}

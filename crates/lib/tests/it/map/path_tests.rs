//! Path resolution through nested attribute maps, plain mappings and
//! indexable objects

use std::{cell::RefCell, rc::Rc};

use attrmap::{AttrMap, AttrMapError, AttrRef, Key, Value, attr_map};

use crate::helpers::*;

// ===== GET THROUGH PATHS =====

#[test]
fn test_get_multilevel() {
    let map = nested_map();
    assert_eq!(map.get_item("one.two").unwrap(), "one->two");
    assert_eq!(
        map.get_item("a.b").unwrap(),
        attr_map! { "c" => "a->b->c" }
    );
    assert_eq!(map.get_item("a.b.c").unwrap(), "a->b->c");
}

#[test]
fn test_path_get_equals_stepwise_get() {
    let map = nested_map();
    let a = map.get_item("a").unwrap();
    let stepwise = a.as_attr_map().unwrap().borrow().get_item("b").unwrap();
    assert_eq!(map.get_item("a.b").unwrap(), stepwise);
    assert!(same_map(&map.get_item("a.b").unwrap(), &stepwise));
}

#[test]
fn test_get_multilevel_reports_first_failing_token() {
    let map = nested_map();

    let err = map.get_item("one.three").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("three")));

    let err = map.get_item("a.b.x").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("x")));

    let err = map.get_item("x.b.c").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("x")));

    // "a.b.c" is text and cannot be indexed by key
    assert!(map.get_item("a.b.c.d").unwrap_err().is_type_error());
}

#[test]
fn test_get_through_leaf_is_type_error() {
    let map = attr_map! { "one" => attr_map! { "two" => 2 } };
    let err = map.get_item("one.two.three").unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.to_string(), "type mismatch: expected indexable value, found int");
}

#[test]
fn test_get_through_list_is_type_error() {
    let map = attr_map! { "items" => vec![Value::from(1), Value::from(2)] };
    assert!(map.get_item("items.0").unwrap_err().is_type_error());
}

#[test]
fn test_literal_dotted_key_is_not_found_by_path() {
    let map = AttrMap::from(mapping([("a.b", Value::from("literal"))]));

    let err = map.get_item("a.b").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("a")));
    assert_eq!(map.get_attr("a.b").unwrap(), "literal");
}

#[test]
fn test_path_shadows_literal_dotted_key() {
    let map = dotted_map();
    assert_eq!(map.get_item("a.b").unwrap(), "a->b");
    assert_eq!(map.get_attr("a.b").unwrap(), "a.b");
}

#[test]
fn test_empty_segments_are_empty_keys() {
    let map = attr_map! {
        "a" => attr_map! { "" => "a->empty", "b" => attr_map! { "" => 1 } },
        "" => attr_map! { "a" => "empty->a" },
        "x" => attr_map! { "y" => 2 },
    };

    assert_eq!(map.get_item("a.").unwrap(), "a->empty");
    assert_eq!(map.get_item("a.b.").unwrap(), 1);
    assert_eq!(map.get_item(".a").unwrap(), "empty->a");
    assert_eq!(map.get_item("x..y").unwrap_err().key(), Some(&Key::from("")));
    assert_eq!(map.get_item("...").unwrap_err().key(), Some(&Key::from("")));
}

#[test]
fn test_trailing_delimiter_writes_one_level_down() {
    let mut map = attr_map! { "a" => attr_map! { "b" => 1 } };

    map.set_item("a.", 99).unwrap();
    assert_eq!(map.get_item("a.b").unwrap(), 1);
    assert_eq!(map.get_item("a.").unwrap(), 99);
    assert_eq!(sorted_keys(&map), keys(&["a"]));

    assert_eq!(map.del_item("a.").unwrap(), 99);
    assert_eq!(map.get_item("a").unwrap(), attr_map! { "b" => 1 });
}

#[test]
fn test_leading_delimiter_does_not_touch_top_level() {
    let mut map = attr_map! { "a" => 1 };

    let err = map.del_item(".a").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("")));
    assert!(map.set_item(".a", 2).unwrap_err().is_missing_key());
    assert_eq!(map, attr_map! { "a" => 1 });
}

// ===== PLAIN MAPPINGS AND OBJECTS =====

#[test]
fn test_get_through_plain_mapping() {
    let map = AttrMap::from(mapping([(
        "a",
        Value::from(mapping([("b", Value::from(mapping([("c", Value::from(3))])))])),
    )]));

    assert_eq!(map.get_item("a.b.c").unwrap(), 3);
    assert_eq!(map.get_item("a.x").unwrap_err().key(), Some(&Key::from("x")));
}

#[test]
fn test_get_through_object_missing_key() {
    let map = attr_map! { "a" => Lookup::default().into_value() };
    let err = map.get_item("a.b").unwrap_err();
    assert!(err.is_missing_key());
    assert_eq!(err.key(), Some(&Key::from("b")));
}

#[test]
fn test_get_through_object_success() {
    let inner = attr_map! { "c" => "a->b->c" };
    let map = attr_map! { "a" => Lookup::default().with("b", inner).into_value() };

    assert_eq!(map.get_item("a.b").unwrap(), attr_map! { "c" => "a->b->c" });
    assert_eq!(map.get_item("a.b.c").unwrap(), "a->b->c");
}

#[test]
fn test_cannot_write_into_object() {
    let mut map = attr_map! { "a" => Lookup::default().into_value() };
    assert!(map.set_item("a.b", 1).unwrap_err().is_type_error());
    assert!(map.del_item("a.b").unwrap_err().is_type_error());
}

// ===== SET THROUGH PATHS =====

#[test]
fn test_set_second_level_first_exists() {
    let mut map = attr_map! { "one" => AttrMap::new() };
    map.set_item("one.two", 2).unwrap();
    assert_eq!(map, attr_map! { "one" => attr_map! { "two" => 2 } });
}

#[test]
fn test_set_second_level_first_missing() {
    let mut map = AttrMap::new();
    let err = map.set_item("one.two", 2).unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("one")));
    assert!(map.is_empty());
}

#[test]
fn test_set_deep_intermediate_missing() {
    let mut map = attr_map! { "a" => attr_map! { "b" => AttrMap::new() } };
    let err = map.set_item("a.x.y", 1).unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("x")));
}

#[test]
fn test_set_into_plain_mapping_is_type_error() {
    let mut map = AttrMap::from(mapping([("a", Value::from(mapping([])))]));
    assert!(map.set_item("a.b", 1).unwrap_err().is_type_error());
}

#[test]
fn test_set_through_plain_mapping_into_nested_map() {
    let mut map = AttrMap::from(mapping([(
        "a",
        Value::from(mapping([("b", Value::from(AttrMap::new()))])),
    )]));

    map.set_item("a.b.c", 1).unwrap();
    assert_eq!(map.get_item("a.b.c").unwrap(), 1);
}

#[test]
fn test_self_referencing_handle() {
    let handle: AttrRef = Rc::new(RefCell::new(AttrMap::new()));
    handle.borrow_mut().raw_insert("me", Rc::clone(&handle));

    handle.borrow_mut().set_item("me.k", 1).unwrap();
    assert_eq!(handle.borrow().get_item("k").unwrap(), 1);
    assert_eq!(handle.borrow_mut().get_item("me.me.k").unwrap(), 1);
    assert_eq!(handle.borrow_mut().pop("me.k").unwrap(), 1);
    assert!(!handle.borrow().contains_key("k").unwrap());

    handle.borrow_mut().clear();
}

#[test]
fn test_nested_map_borrowed_elsewhere() {
    let child: AttrRef = Rc::new(RefCell::new(AttrMap::new()));
    let mut map = attr_map! { "c" => Rc::clone(&child) };

    let held = child.borrow_mut();
    assert_eq!(map.set_item("c.x", 1).unwrap_err(), AttrMapError::Borrowed);
    assert_eq!(map.get_item("c.x").unwrap_err(), AttrMapError::Borrowed);
    drop(held);

    map.set_item("c.x", 1).unwrap();
    assert_eq!(child.borrow().get_item("x").unwrap(), 1);
}

#[test]
fn test_writes_are_visible_through_shared_handles() {
    let mut map = attr_map! { "a" => AttrMap::new() };
    let handle = map.get_item("a").unwrap();

    map.set_item("a.c", 2).unwrap();
    assert_eq!(handle, attr_map! { "c" => 2 });
}

// ===== DELETE THROUGH PATHS =====

#[test]
fn test_delete_scenario() {
    let mut map = AttrMap::from_mapping(&mapping([(
        "a",
        Value::from(mapping([("b", Value::from(mapping([("c", Value::from("a->b->c"))])))])),
    )]));

    assert_eq!(map.get_item("a.b.c").unwrap(), "a->b->c");
    map.del_item("a.b").unwrap();
    assert_eq!(map.get_item("a").unwrap(), AttrMap::from_mapping(&mapping([])));
}

#[test]
fn test_delete_second_level_first_missing() {
    let mut map = attr_map! { "one" => 1 };
    let err = map.del_item("two.three").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("two")));
}

#[test]
fn test_delete_second_level_missing_terminal() {
    let mut map = nested_map();
    let err = map.del_item("one.three").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("three")));
}

#[test]
fn test_delete_second_level_success() {
    let mut map = attr_map! {
        "one" => attr_map! { "two" => "one->two" },
        "three" => 3,
    };
    assert_eq!(map.del_item("one.two").unwrap(), "one->two");
    assert_eq!(
        map,
        attr_map! { "one" => AttrMap::new(), "three" => 3 }
    );
}

#[test]
fn test_delete_literal_dotted_key_by_path_fails() {
    let source = mapping([("a.b", Value::from(""))]);
    let mut map = AttrMap::from(source.clone());

    assert!(map.del_item("a").unwrap_err().is_missing_key());
    let err = map.del_item("a.b").unwrap_err();
    assert_eq!(err.key(), Some(&Key::from("a")));
    assert_eq!(map, source);
}

#[test]
fn test_delete_path_leaves_literal_dotted_key() {
    let mut map = AttrMap::from_mapping(&mapping([
        ("one.two", Value::from("one.two")),
        ("one", Value::from(mapping([("two", Value::from("one->two"))]))),
    ]));

    map.del_item("one.two").unwrap();
    assert_eq!(sorted_keys(&map), keys(&["one", "one.two"]));
    assert_eq!(map.get_item("one").unwrap(), AttrMap::new());
    assert_eq!(map.get_attr("one.two").unwrap(), "one.two");
}

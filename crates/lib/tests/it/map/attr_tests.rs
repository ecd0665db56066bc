//! Attribute-style access never decomposes names

use attrmap::{AttrMap, AttrMapError, Value, attr_map};

use crate::helpers::*;

#[test]
fn test_get_attr_top_level_success() {
    let map = attr_map! { "one" => 1 };
    assert_eq!(map.get_attr("one").unwrap(), 1);
    assert!(map.has_attr("one"));
}

#[test]
fn test_get_attr_top_level_fail() {
    let map = attr_map! { "one" => 1 };
    let err = map.get_attr("two").unwrap_err();

    assert_eq!(
        err,
        AttrMapError::NoAttribute {
            name: "two".to_string()
        }
    );
    assert_eq!(err.to_string(), "no attribute 'two'");
    assert_eq!(err.name(), Some("two"));
    assert!(err.is_attribute_error());
    assert!(!map.has_attr("two"));
}

#[test]
fn test_get_attr_dotted_key() {
    let nested = attr_map! { "b" => "abab" };
    let map = attr_map! {
        "a.b" => "abab",
        "a" => nested.clone(),
    };

    assert_eq!(map.get_attr("a.b").unwrap(), "abab");
    assert_eq!(map.get_attr("a").unwrap(), nested);
    assert_eq!(map.get_attr("a").unwrap().get_attr("b").unwrap(), "abab");
}

#[test]
fn test_get_attr_on_leaf_value() {
    let map = attr_map! { "one" => 1 };
    let err = map.get_attr("one").unwrap().get_attr("two").unwrap_err();
    assert_eq!(err.name(), Some("two"));
}

#[test]
fn test_set_attr_object_style() {
    let mut map = AttrMap::new();
    map.set_attr("one", AttrMap::new());
    map.get_attr("one")
        .unwrap()
        .as_attr_map()
        .unwrap()
        .borrow_mut()
        .set_attr("two", 2);

    assert_eq!(map.len(), 1);
    assert_eq!(map.get_attr("one").unwrap().get_attr("two").unwrap(), 2);
    assert_eq!(map.get_item("one.two").unwrap(), 2);
}

#[test]
fn test_set_attr_dotted_key() {
    let mut map = AttrMap::new();
    map.set_attr("one", attr_map! { "two" => 2 });
    map.set_attr("one.two", "onetwo");

    assert_eq!(map.get_item("one.two").unwrap(), 2);
    assert_eq!(map.get_attr("one.two").unwrap(), "onetwo");
    assert_eq!(map.get_item("one").unwrap(), attr_map! { "two" => 2 });
    assert_eq!(map.get_attr("one").unwrap(), attr_map! { "two" => 2 });
}

#[test]
fn test_set_attr_returns_previous() {
    let mut map = AttrMap::new();
    assert_eq!(map.set_attr("one", 1), None);
    assert_eq!(map.set_attr("one", 2), Some(Value::Int(1)));
}

#[test]
fn test_del_attr_success() {
    let mut map = attr_map! { "one" => 1 };
    assert_eq!(map.del_attr("one").unwrap(), 1);
    assert_eq!(map.len(), 0);
}

#[test]
fn test_del_attr_fail() {
    let mut map = attr_map! { "one" => 1 };
    let err = map.del_attr("two").unwrap_err();
    assert_eq!(err.to_string(), "no attribute 'two'");
    assert_eq!(map.len(), 1);
}

#[test]
fn test_del_attr_dotted_only_removes_literal() {
    let mut map = dotted_map();

    assert_eq!(map.del_attr("a.b").unwrap(), "a.b");
    assert_eq!(sorted_keys(&map), keys(&["a", "c"]));
    assert_eq!(map.get_item("a.b").unwrap(), "a->b");

    let err = map.del_attr("a.b").unwrap_err();
    assert!(err.is_attribute_error());
}

#[test]
fn test_attribute_errors_convert_to_crate_errors() {
    fn lookup(map: &AttrMap, name: &str) -> attrmap::Result<Value> {
        Ok(map.get_attr(name)?)
    }

    let err = lookup(&AttrMap::new(), "missing").unwrap_err();
    assert_eq!(err.module(), "map");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "no attribute 'missing'");
}

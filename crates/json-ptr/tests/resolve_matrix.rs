use json_ptr::{resolve, JsonPointerExt, NodeKind, ResolutionErrorKind};
use serde_json::{json, Value};

fn valid_cases() -> Vec<(Value, &'static str, Value)> {
    vec![
        // Simple object
        (json!({"name": "John"}), "/name", json!("John")),
        (json!({"age": 30}), "/age", json!(30)),
        (json!({"isStudent": true}), "/isStudent", json!(true)),
        (json!({"data": null}), "/data", json!(null)),
        // Array
        (json!([1, 2, 3]), "/0", json!(1)),
        (json!(["a", "b"]), "/1", json!("b")),
        // Nested structures
        (json!({"person": {"name": "John"}}), "/person/name", json!("John")),
        (json!({"array": [{"id": 1}, {"id": 2}]}), "/array/1/id", json!(2)),
        // Escaped characters
        (json!({"foo/bar": "baz"}), "/foo~1bar", json!("baz")),
        (json!({"~foo": "tilde"}), "/~0foo", json!("tilde")),
        (
            json!({"foo/bar": {"baz~1qux": "value"}}),
            "/foo~1bar/baz~01qux",
            json!("value"),
        ),
        // Numeric key on an object is a plain property name
        (json!({"0": "zero"}), "/0", json!("zero")),
    ]
}

fn invalid_cases() -> Vec<(Value, &'static str, ResolutionErrorKind, &'static str)> {
    use ResolutionErrorKind::*;
    vec![
        (json!({"name": "John"}), "/age", PropertyNotFound, "Property 'age' not found."),
        (
            json!({"person": {"name": "John"}}),
            "/person/age",
            PropertyNotFound,
            "Property 'age' not found.",
        ),
        (json!({"Name": "John"}), "/name", PropertyNotFound, "Property 'name' not found."),
        (json!({"name": "John"}), "/Name", PropertyNotFound, "Property 'Name' not found."),
        (json!([1, 2, 3]), "/3", ArrayIndexOutOfRange, "Array index 3 is out of range."),
        (json!([]), "/0", ArrayIndexOutOfRange, "Array index 0 is out of range."),
        (
            json!({"data": "hello"}),
            "/data/foo",
            NonTraversableElement,
            "The current JSON element is not an object or array.",
        ),
        (
            json!({"n": 1}),
            "/n/x",
            NonTraversableElement,
            "The current JSON element is not an object or array.",
        ),
        (
            json!({"b": true}),
            "/b/0",
            NonTraversableElement,
            "The current JSON element is not an object or array.",
        ),
        (
            json!(null),
            "/a",
            NonTraversableElement,
            "The current JSON element is not an object or array.",
        ),
        (json!({"data": [{"id": 1}]}), "/data/id", InvalidArrayIndex, "Invalid array index: id."),
        (json!({"data": {"id": 1}}), "/data/0", PropertyNotFound, "Property '0' not found."),
        (json!([1, 2, 3]), "/a", InvalidArrayIndex, "Invalid array index: a."),
        (json!([1, 2, 3]), "/-", InvalidArrayIndex, "Invalid array index: -."),
        // Unescaped slash splits the key
        (json!({"foo/bar": "baz"}), "/foo/bar", PropertyNotFound, "Property 'foo' not found."),
        (
            json!({"name": "John"}),
            "name",
            PointerMustStartWithSlash,
            "A JSON pointer must start with a '/'",
        ),
    ]
}

#[test]
fn resolve_valid_matrix() {
    for (doc, pointer, expected) in valid_cases() {
        assert_eq!(resolve(&doc, pointer), Ok(&expected), "pointer {pointer:?}");
    }
}

#[test]
fn adapters_valid_matrix() {
    for (doc, pointer, expected) in valid_cases() {
        assert_eq!(doc.get_element(pointer).ok(), Some(&expected), "pointer {pointer:?}");
        assert_eq!(doc.get_element_or_none(pointer), Some(&expected), "pointer {pointer:?}");
        let found = doc.try_get_element(pointer);
        assert!(found.is_ok(), "pointer {pointer:?}");
        assert_eq!(found.ok(), Some(&expected));
    }
}

#[test]
fn resolve_invalid_matrix() {
    for (doc, pointer, kind, message) in invalid_cases() {
        let err = resolve(&doc, pointer).unwrap_err();
        assert_eq!(err.kind(), kind, "pointer {pointer:?}");
        assert_eq!(err.message(), message, "pointer {pointer:?}");
    }
}

#[test]
fn adapters_invalid_matrix() {
    for (doc, pointer, kind, message) in invalid_cases() {
        let err = doc.get_element(pointer).unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(
            err.to_string(),
            format!("Error resolving JSON pointer '{pointer}': {message}")
        );

        assert_eq!(doc.get_element_or_none(pointer), None, "pointer {pointer:?}");

        let err = doc.try_get_element(pointer).unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(err.message(), message);
    }
}

#[test]
fn empty_pointer_returns_root_of_any_kind() {
    let docs = [
        json!({"name": "John"}),
        json!([]),
        json!("text"),
        json!(1),
        json!(false),
        json!(null),
    ];
    for doc in &docs {
        assert!(std::ptr::eq(resolve(doc, "").unwrap(), doc));
        assert!(std::ptr::eq(doc.get_element("").unwrap(), doc));
        assert!(std::ptr::eq(doc.get_element_or_none("").unwrap(), doc));
    }
}

#[test]
fn error_carries_failure_context() {
    let doc = json!({"data": "hello"});
    let err = resolve(&doc, "/data/foo").unwrap_err();
    assert_eq!(err.token(), "foo");
    assert!(std::ptr::eq(err.current(), &doc["data"]));
    assert_eq!(err.current_kind(), NodeKind::String);

    let err = resolve(&doc, "data").unwrap_err();
    assert_eq!(err.token(), "data");
    assert!(std::ptr::eq(err.current(), &doc));
}

#[test]
fn scalar_descent_stops_at_the_scalar() {
    let doc = json!({"n": 1, "b": true, "z": null});
    for (pointer, key, kind) in [
        ("/n/x", "n", NodeKind::Number),
        ("/b/0", "b", NodeKind::Boolean),
        ("/z/a", "z", NodeKind::Null),
    ] {
        let err = resolve(&doc, pointer).unwrap_err();
        assert_eq!(err.kind(), ResolutionErrorKind::NonTraversableElement);
        assert!(std::ptr::eq(err.current(), &doc[key]), "pointer {pointer:?}");
        assert_eq!(err.current_kind(), kind);
    }
}

#[test]
fn get_element_error_unwraps_to_resolution_error() {
    let doc = json!({"items": [1, 2]});
    let err = doc.get_element("/items/5").unwrap_err();
    assert_eq!(err.pointer(), "/items/5");

    let inner = err.into_resolution_error();
    assert_eq!(inner.kind(), ResolutionErrorKind::ArrayIndexOutOfRange);
    assert_eq!(inner.message(), "Array index 5 is out of range.");
    assert_eq!(inner.token(), "5");
    assert!(std::ptr::eq(inner.current(), &doc["items"]));
    assert_eq!(inner, doc.try_get_element("/items/5").unwrap_err());
}

#[test]
fn lookup_is_independent_of_member_order() {
    let doc: Value = serde_json::from_str(r#"{"b": 2, "a": 1, "A": 3}"#).unwrap();
    assert_eq!(resolve(&doc, "/a"), Ok(&json!(1)));
    assert_eq!(resolve(&doc, "/A"), Ok(&json!(3)));
}

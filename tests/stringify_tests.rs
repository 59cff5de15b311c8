use chrono::{TimeZone, Utc};
use logvalue::host::{
    ArrayBuffer, DataView, ElementType, ErrorObject, HostObject, Instance, MapObject, RegExp,
    SetObject, TypedArray, Url, UrlSearchParams,
};
use logvalue::{
    escape, render_array, render_record, render_timestamp, stringify, stringify_with_options,
    to_value, ArrayRef, Callable, CycleGuard, FormatOptions, PlaceholderStyle, RecordRef, Symbol,
    Value,
};
use num_bigint::BigInt;
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize)]
struct Order {
    order_id: u32,
    customer: User,
    note: Option<String>,
    total: f64,
}

#[derive(Debug)]
struct Socket;

impl HostObject for Socket {}

#[test]
fn test_primitives() {
    assert_eq!(stringify(&Value::Null), "null");
    assert_eq!(stringify(&Value::Undefined), "undefined");
    assert_eq!(stringify(&Value::Bool(false)), "false");
    assert_eq!(stringify(&Value::from(42)), "42");
    assert_eq!(stringify(&Value::from(-0.0)), "0");
    assert_eq!(stringify(&Value::from(0.1)), "0.1");
    assert_eq!(stringify(&Value::from(1e21)), "1e+21");
    assert_eq!(stringify(&Value::from("hello")), "\"hello\"");
    assert_eq!(stringify(&Value::from(Symbol::new("id"))), "Symbol(id)");
    assert_eq!(stringify(&Value::from(Symbol::anonymous())), "Symbol()");
    assert_eq!(
        stringify(&Value::from(BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap())),
        "123456789012345678901234567890"
    );
}

#[test]
fn test_special_numbers() {
    assert_eq!(stringify(&Value::from(f64::NAN)), "NaN");
    assert_eq!(stringify(&Value::from(f64::INFINITY)), "Infinity");
    assert_eq!(stringify(&Value::from(f64::NEG_INFINITY)), "-Infinity");
    assert_eq!(
        stringify(&Value::array(vec![f64::NAN, f64::INFINITY])),
        "[NaN, Infinity]"
    );
}

#[test]
fn test_string_escaping_in_containers() {
    let value = Value::array(vec!["tab\there", "quote\"", "back\\slash"]);
    assert_eq!(
        stringify(&value),
        r#"["tab\there", "quote\"", "back\\slash"]"#
    );
}

#[test]
fn test_escape_preserves_unicode() {
    assert_eq!(escape("日本語 🦀"), "\"日本語 🦀\"");
}

#[test]
fn test_empty_containers() {
    assert_eq!(stringify(&Value::array(Vec::<Value>::new())), "[]");
    assert_eq!(stringify(&Value::from(RecordRef::new())), "{}");
    assert_eq!(
        stringify(&Value::array(vec![Value::array(Vec::<Value>::new()), Value::from(RecordRef::new())])),
        "[[], {}]"
    );
}

#[test]
fn test_array_cycle() {
    let a = ArrayRef::from(vec![Value::from(1)]);
    a.push(Value::from(a.clone()));

    let mut guard = CycleGuard::new();
    assert_eq!(
        render_array(&a, &FormatOptions::default(), &mut guard),
        "[1, [<Circular>]]"
    );
    assert!(guard.is_empty());
    a.clear();
}

#[test]
fn test_record_cycle() {
    let o = RecordRef::new();
    o.insert("a", Value::from(1));
    o.insert("self", Value::from(o.clone()));

    let mut guard = CycleGuard::new();
    assert_eq!(
        render_record(&o, &FormatOptions::default(), &mut guard),
        r#"{"a": 1, "self": {<Circular>}}"#
    );
    o.clear();
}

#[test]
fn test_sibling_aliases_are_not_circular() {
    let shared = ArrayRef::from(vec![Value::from(1)]);
    let outer = Value::array(vec![Value::from(shared.clone()), Value::from(shared.clone())]);
    assert_eq!(stringify(&outer), "[[1], [1]]");

    let record = RecordRef::new();
    record.insert("k", Value::from("v"));
    let both = Value::record(vec![
        ("left", Value::from(record.clone())),
        ("right", Value::from(record)),
    ]);
    assert_eq!(stringify(&both), r#"{"left": {"k": "v"}, "right": {"k": "v"}}"#);
}

#[test]
fn test_deep_cycle_is_reported_at_reentry() {
    let root = RecordRef::new();
    let child = RecordRef::new();
    let grandchild = ArrayRef::new();
    root.insert("child", Value::from(child.clone()));
    child.insert("items", Value::from(grandchild.clone()));
    grandchild.push(Value::from(2));
    grandchild.push(Value::from(root.clone()));

    assert_eq!(
        stringify(&Value::from(root.clone())),
        r#"{"child": {"items": [2, {<Circular>}]}}"#
    );
    root.clear();
}

#[test]
fn test_empty_self_reference_is_not_circular() {
    // A container that is empty renders as empty before any cycle check.
    let empty = ArrayRef::new();
    let outer = Value::array(vec![Value::from(empty.clone()), Value::from(empty)]);
    assert_eq!(stringify(&outer), "[[], []]");
}

#[test]
fn test_timestamps() {
    let instant = Utc.timestamp_millis_opt(1000).unwrap();
    assert_eq!(render_timestamp(&instant, true), "1970-01-01T00:00:01.000Z");
    assert_eq!(render_timestamp(&instant, false), "1970-01-01T00:00:01Z");
    assert_eq!(stringify(&Value::from(instant)), "1970-01-01T00:00:01.000Z");
}

#[test]
fn test_opaque_placeholders() {
    assert_eq!(stringify(&Value::object(MapObject::new())), "<Map>");
    assert_eq!(stringify(&Value::object(SetObject::new())), "<Set>");
    assert_eq!(stringify(&Value::object(RegExp::new("x"))), "<RegExp>");
    assert_eq!(stringify(&Value::object(ErrorObject::new("boom"))), "<Error>");
    assert_eq!(
        stringify(&Value::object(ErrorObject::new("bad").with_name("TypeError"))),
        "<Error>"
    );
    assert_eq!(stringify(&Value::object(Url::new("https://a.example/"))), "<URL>");
    assert_eq!(
        stringify(&Value::object(UrlSearchParams::new())),
        "<URLSearchParams>"
    );
    assert_eq!(
        stringify(&Value::object(TypedArray::zeroed(ElementType::Int32, 3))),
        "<TypedArray>"
    );
    assert_eq!(stringify(&Value::object(ArrayBuffer::zeroed(8))), "<ArrayBuffer>");
    assert_eq!(
        stringify(&Value::object(DataView::new(ArrayBuffer::zeroed(8), 2, 4))),
        "<DataView>"
    );
    assert_eq!(stringify(&Value::object(Instance::new("Foo"))), "<Foo>");
}

#[test]
fn test_instance_contents_are_hidden() {
    let person = Instance::new("Person").with_field("name", Value::from("Ada"));
    let value = Value::record(vec![("who", Value::object(person))]);
    assert_eq!(stringify(&value), r#"{"who": <Person>}"#);
}

#[test]
fn test_unnamed_host_object_uses_generic_coercion() {
    assert_eq!(stringify(&Value::object(Socket)), "[object Object]");
}

#[test]
fn test_callables() {
    assert_eq!(stringify(&Value::from(Callable::function("myFunc"))), "[Function: myFunc]");
    assert_eq!(stringify(&Value::from(Callable::method("myMethod"))), "[Method: myMethod]");
    assert_eq!(stringify(&Value::from(Callable::arrow())), "[Function:]");
    assert_eq!(
        stringify(&Value::from(Callable::function("named").with_name(""))),
        "[Function:]"
    );

    fn handler() {}
    assert_eq!(stringify(&Value::from(Callable::of(&handler))), "[Function: handler]");
}

#[test]
fn test_duck_typed_date_is_a_record() {
    let lookalike = Value::record(vec![("getTime", Value::from(Callable::arrow()))]);
    assert_eq!(stringify(&lookalike), r#"{"getTime": [Function:]}"#);
}

#[test]
fn test_record_keys_keep_insertion_order() {
    let record = RecordRef::new();
    record.insert("zeta", Value::from(1));
    record.insert("alpha", Value::from(2));
    record.insert("mid", Value::from(3));
    assert_eq!(
        stringify(&Value::from(record)),
        r#"{"zeta": 1, "alpha": 2, "mid": 3}"#
    );
}

#[test]
fn test_square_placeholder_style() {
    let options = FormatOptions::new().with_placeholder(PlaceholderStyle::Square);
    let record = RecordRef::new();
    record.insert("re", Value::object(RegExp::new("x")));
    record.insert("self", Value::from(record.clone()));
    assert_eq!(
        stringify_with_options(&Value::from(record.clone()), &options),
        r#"{"re": [RegExp], "self": {<Circular>}}"#
    );
    record.clear();
}

#[test]
fn test_caps_combined() {
    let options = FormatOptions::new().with_max_depth(2).with_max_elements(2);
    let value = Value::record(vec![
        ("a", Value::array(vec![Value::array(vec![1]), Value::from(2), Value::from(3)])),
        ("b", Value::from(1)),
        ("c", Value::from(2)),
    ]);
    assert_eq!(
        stringify_with_options(&value, &options),
        r#"{"a": [[...], 2, ...], "b": 1, ...}"#
    );
}

#[test]
fn test_to_value_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 7,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string()],
        },
        note: None,
        total: 99.5,
    };
    let value = to_value(&order).unwrap();
    assert_eq!(
        stringify(&value),
        r#"{"order_id": 12345, "customer": {"id": 7, "name": "Alice", "active": true, "tags": ["admin"]}, "note": null, "total": 99.5}"#
    );
}

#[test]
fn test_to_value_from_json_document() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{"level": "warn", "codes": [404, 500], "meta": {"retry": false, "ratio": 0.25}}"#,
    )
    .unwrap();
    let value = to_value(&json).unwrap();
    // serde_json orders object keys unless built with preserve_order.
    assert_eq!(
        stringify(&value),
        r#"{"codes": [404, 500], "level": "warn", "meta": {"ratio": 0.25, "retry": false}}"#
    );
}

#[derive(Serialize)]
struct AuditEntry {
    event: String,
    at: chrono::DateTime<Utc>,
}

#[test]
fn test_to_value_serializes_datetime_fields_as_text() {
    let entry = AuditEntry {
        event: "deploy".to_string(),
        at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 45).unwrap(),
    };
    let value = to_value(&entry).unwrap();
    assert_eq!(
        stringify(&value),
        r#"{"event": "deploy", "at": "2025-01-15T10:30:45Z"}"#
    );
}

#[test]
fn test_deeply_nested_graph_renders_on_small_stack() {
    let text = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let mut value = Value::from(0);
            for _ in 0..150_000 {
                value = Value::from(vec![value]);
            }
            let text = stringify(&value);
            // Dropping a graph this deep recurses once per level.
            std::mem::forget(value);
            text
        })
        .unwrap()
        .join()
        .unwrap();

    let depth = logvalue::render::MAX_NESTING_DEPTH;
    assert_eq!(
        text,
        format!("{}[...]{}", "[".repeat(depth), "]".repeat(depth))
    );
}

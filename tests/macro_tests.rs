use logvalue::{logvalue, stringify, Number, Value};

#[test]
fn test_logvalue_macro_null_and_undefined() {
    assert_eq!(logvalue!(null), Value::Null);
    assert_eq!(logvalue!(undefined), Value::Undefined);
}

#[test]
fn test_logvalue_macro_booleans() {
    assert_eq!(logvalue!(true), Value::Bool(true));
    assert_eq!(logvalue!(false), Value::Bool(false));
}

#[test]
fn test_logvalue_macro_numbers() {
    assert_eq!(logvalue!(42), Value::Number(Number::Integer(42)));
    assert_eq!(logvalue!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(logvalue!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(logvalue!(f64::NAN), Value::Number(Number::NaN));
}

#[test]
fn test_logvalue_macro_strings() {
    assert_eq!(logvalue!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(logvalue!(""), Value::String(String::new()));
}

#[test]
fn test_logvalue_macro_arrays() {
    assert_eq!(stringify(&logvalue!([])), "[]");
    assert_eq!(stringify(&logvalue!([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(
        stringify(&logvalue!([1, "hello", true, null, undefined])),
        r#"[1, "hello", true, null, undefined]"#
    );
    assert_eq!(stringify(&logvalue!([[1, 2], [], [[3]]])), "[[1, 2], [], [[3]]]");
}

#[test]
fn test_logvalue_macro_records() {
    assert_eq!(stringify(&logvalue!({})), "{}");
    let value = logvalue!({
        "name": "Alice",
        "age": 30,
        "active": true,
    });
    assert_eq!(stringify(&value), r#"{"name": "Alice", "age": 30, "active": true}"#);
}

#[test]
fn test_logvalue_macro_nested() {
    let value = logvalue!({
        "user": {
            "id": 1,
            "roles": ["admin", "dev"]
        },
        "scores": [{ "v": 1 }, { "v": (-2) }]
    });
    assert_eq!(
        stringify(&value),
        r#"{"user": {"id": 1, "roles": ["admin", "dev"]}, "scores": [{"v": 1}, {"v": -2}]}"#
    );
}

#[test]
fn test_logvalue_macro_expressions() {
    let name = String::from("dynamic");
    let count = 7u8;
    let value = logvalue!({ "name": name, "count": count, "list": (vec![Value::from(1)]) });
    assert_eq!(stringify(&value), r#"{"name": "dynamic", "count": 7, "list": [1]}"#);
}

#[test]
fn test_logvalue_macro_records_are_fresh() {
    // Each expansion allocates a new record, so two literals are distinct.
    assert_ne!(logvalue!({ "a": 1 }), logvalue!({ "a": 1 }));
}

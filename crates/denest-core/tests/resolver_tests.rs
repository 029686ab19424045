use denest_core::{parse, pretty, resolve_nested, Value};

/// Helper: parse, resolve, and hand back the tree.
fn resolved(input: &str) -> Value {
    resolve_nested(parse(input).expect("parse failed"))
}

// ============================================================================
// Scalars pass through untouched
// ============================================================================

#[test]
fn non_string_scalars_are_unchanged() {
    assert_eq!(resolve_nested(Value::Null), Value::Null);
    assert_eq!(resolve_nested(Value::Bool(true)), Value::Bool(true));
    assert_eq!(resolve_nested(Value::Number(1.5)), Value::Number(1.5));
}

#[test]
fn plain_strings_are_unchanged() {
    assert_eq!(
        resolve_nested(Value::String("hello".to_string())),
        Value::String("hello".to_string())
    );
}

#[test]
fn string_that_looks_numeric_stays_a_string() {
    // Only '{' and '['-sniffing strings are candidates.
    assert_eq!(
        resolve_nested(Value::String("123".to_string())),
        Value::String("123".to_string())
    );
    assert_eq!(
        resolve_nested(Value::String("null".to_string())),
        Value::String("null".to_string())
    );
}

// ============================================================================
// Embedded documents unfold
// ============================================================================

#[test]
fn embedded_object_string_becomes_object() {
    let value = resolved(r#"{"payload":"{\"x\":1}"}"#);
    assert_eq!(
        value.get("payload").and_then(|p| p.get("x")),
        Some(&Value::Number(1.0))
    );
}

#[test]
fn embedded_array_string_becomes_array() {
    let value = resolve_nested(Value::String("[1, 2, 3]".to_string()));
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ])
    );
}

#[test]
fn empty_object_string_becomes_empty_object() {
    assert_eq!(
        resolve_nested(Value::String("{}".to_string())),
        Value::Object(vec![])
    );
}

#[test]
fn leading_whitespace_does_not_hide_a_document() {
    let value = resolve_nested(Value::String("  \n\t[true]".to_string()));
    assert_eq!(value, Value::Array(vec![Value::Bool(true)]));
}

#[test]
fn strings_inside_arrays_are_resolved() {
    let value = resolved(r#"["{\"a\":1}", "plain"]"#);
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Object(vec![("a".to_string(), Value::Number(1.0))]),
            Value::String("plain".to_string()),
        ])
    );
}

#[test]
fn doubly_encoded_payload_unfolds_all_the_way() {
    // Build a document whose string holds a document whose string holds
    // a document, by printing and re-embedding.
    let inner = r#"{"deep":true}"#;
    let middle = Value::Object(vec![(
        "payload".to_string(),
        Value::String(inner.to_string()),
    )]);
    let outer = Value::Object(vec![(
        "body".to_string(),
        Value::String(pretty(&middle)),
    )]);

    let value = resolve_nested(outer);
    assert_eq!(
        value
            .get("body")
            .and_then(|b| b.get("payload"))
            .and_then(|p| p.get("deep")),
        Some(&Value::Bool(true))
    );
}

#[test]
fn resolution_preserves_sibling_members() {
    let value = resolved(r#"{"id":7,"payload":"[]","note":"keep"}"#);
    assert_eq!(value.get("id"), Some(&Value::Number(7.0)));
    assert_eq!(value.get("payload"), Some(&Value::Array(vec![])));
    assert_eq!(value.get("note"), Some(&Value::String("keep".to_string())));
}

// ============================================================================
// Best-effort: parse failures keep the string
// ============================================================================

#[test]
fn malformed_lookalike_stays_a_string() {
    assert_eq!(
        resolve_nested(Value::String("{not json".to_string())),
        Value::String("{not json".to_string())
    );
    assert_eq!(
        resolve_nested(Value::String("[1, 2".to_string())),
        Value::String("[1, 2".to_string())
    );
}

#[test]
fn document_with_trailing_garbage_stays_a_string() {
    assert_eq!(
        resolve_nested(Value::String("{} null".to_string())),
        Value::String("{} null".to_string())
    );
}

#[test]
fn failure_in_one_leaf_does_not_block_siblings() {
    let value = resolved(r#"{"bad":"{oops","good":"[1]"}"#);
    assert_eq!(value.get("bad"), Some(&Value::String("{oops".to_string())));
    assert_eq!(
        value.get("good"),
        Some(&Value::Array(vec![Value::Number(1.0)]))
    );
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn resolving_twice_is_a_no_op() {
    let once = resolved(r#"{"payload":"{\"x\":[1,2]}","plain":"text"}"#);
    let twice = resolve_nested(once.clone());
    assert_eq!(once, twice);
}

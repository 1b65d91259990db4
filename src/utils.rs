use serde_json::Value;

/// Reads an id that clients may send either as a JSON number or as a numeric
/// string. Anything else, including an unparsable string, is `None`.
pub fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

//! Null-tolerant lookups into loosely-typed JSON.
//!
//! Paths are JSON pointers (`"/_embedded/venues/0"`). A missing key, an
//! out-of-range index, a type mismatch along the way, or an explicit `null`
//! at the end all come back as `None`.

use serde_json::Value;

/// Resolve `pointer` against `value`, treating `null` as absent.
#[must_use]
pub fn lookup<'a>(value: &'a Value, pointer: &str) -> Option<&'a Value> {
    value.pointer(pointer).filter(|v| !v.is_null())
}

#[must_use]
pub fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    lookup(value, pointer).and_then(Value::as_str)
}

/// Numeric field, accepting either a JSON number or a string holding one.
///
/// Non-finite results (`"NaN"`, `"inf"`) are treated as absent.
#[must_use]
pub fn f64_at(value: &Value, pointer: &str) -> Option<f64> {
    let found = lookup(value, pointer)?;
    let number = match found {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[must_use]
pub fn array_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a Vec<Value>> {
    lookup(value, pointer).and_then(Value::as_array)
}

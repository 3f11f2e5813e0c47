//! Reply body decoding.
//!
//! The payload is opaque JSON. No schema is enforced: the only thing read is
//! the `mensaje` field, and it is rendered the way a page script would render
//! `data.mensaje` when handing it to `alert` (JavaScript string conversion).
//!
//! Numbers are kept as written (`arbitrary_precision`), so values outside the
//! `f64` range still decode; they render as `Infinity` like the browser does.

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;

use serde_json::Value;

use crate::error::TriggerError;

pub const MESSAGE_FIELD: &str = "mensaje";

/// Rendering of a field that is not present.
pub const ABSENT_TEXT: &str = "undefined";

/// A decoded reply body. Lives only long enough to produce one notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsePayload {
    body: Value,
}

impl ResponsePayload {
    /// Decode reply body text.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::Parse`] if the text is not JSON, or is JSON
    /// `null` (no fields can be read from it).
    pub fn parse(text: &str) -> Result<Self, TriggerError> {
        let body: Value = serde_json::from_str(text).map_err(|e| TriggerError::Parse(e.to_string()))?;
        if body.is_null() {
            return Err(TriggerError::Parse(format!("cannot read '{MESSAGE_FIELD}' of null")));
        }
        Ok(Self { body })
    }

    /// The raw `mensaje` value, if the body is an object that has one.
    #[must_use]
    pub fn message(&self) -> Option<&Value> {
        self.body.get(MESSAGE_FIELD)
    }

    /// Text to show the user. Strings are shown verbatim, a missing field
    /// as `undefined`, anything else as JavaScript's `String(value)`.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.message().map_or_else(|| ABSENT_TEXT.to_owned(), js_string)
    }
}

fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::String(text) => text.clone(),
        Value::Number(n) => js_number(&n.to_string()),
        // Array.prototype.toString: elements joined by commas, null becomes empty.
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { js_string(item) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

/// `Number.prototype.toString` for a JSON number literal.
fn js_number(literal: &str) -> String {
    let Ok(v) = literal.parse::<f64>() else {
        return literal.to_owned();
    };
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if v == 0.0 {
        return "0".to_owned();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{v}");
    }
    let exp = format!("{v:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

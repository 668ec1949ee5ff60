use reqwest::StatusCode;
use serde_json::Value;

/// Last-resort error text when neither the body nor the status says anything
pub const GENERIC_ERROR_MESSAGE: &str = "Request failed";

/// Interpret a response body: empty is JSON `null`, unparseable text stays a string.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Pick the human-readable message for a failed response.
///
/// Priority: `message`, then `error` (a string or an object with `message`),
/// then the first entry of a validation `errors` map, then the reason phrase.
pub fn error_message(body: &Value, status: StatusCode) -> String {
    body.get("message")
        .and_then(non_empty_str)
        .or_else(|| match body.get("error") {
            Some(Value::Object(error)) => error.get("message").and_then(non_empty_str),
            Some(other) => non_empty_str(other),
            None => None,
        })
        .or_else(|| first_validation_message(body))
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

fn first_validation_message(body: &Value) -> Option<&str> {
    let errors = body.get("errors")?.as_object()?;
    errors.values().find_map(|field| match field {
        Value::Array(messages) => messages.iter().find_map(non_empty_str),
        other => non_empty_str(other),
    })
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

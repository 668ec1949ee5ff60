//! Bearer token normalization.
//!
//! Tokens reach the client from login responses, legacy storage keys and
//! caller-supplied headers, with or without a `Bearer ` prefix and sometimes
//! JSON-quoted. Stored tokens never carry the prefix; it is added only when
//! the `Authorization` header is built.

const BEARER_PREFIX: &str = "bearer ";

/// Normalize a raw token string.
///
/// Trims whitespace and surrounding quotes, strips any number of
/// case-insensitive `bearer ` prefixes, and rejects empty values, a bare
/// `bearer` and the literal strings `null` / `undefined`.
pub fn normalize_token(raw: &str) -> Option<String> {
    let mut token = raw.trim();

    if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
        token = token[1..token.len() - 1].trim();
    }

    while let Some(prefix) = token.get(..BEARER_PREFIX.len()) {
        if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
            break;
        }
        token = token[BEARER_PREFIX.len()..].trim_start();
    }

    let token = token.trim();
    if token.is_empty()
        || token.eq_ignore_ascii_case("null")
        || token.eq_ignore_ascii_case("undefined")
        || token.eq_ignore_ascii_case(BEARER_PREFIX.trim_end())
    {
        return None;
    }

    Some(token.to_string())
}

/// `Authorization` header value for a raw token, `None` when it normalizes away.
pub fn bearer_header_value(raw: &str) -> Option<String> {
    normalize_token(raw).map(|token| format!("Bearer {token}"))
}

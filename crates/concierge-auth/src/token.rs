use http::HeaderMap;

/// Pull a credential from an inbound request's headers
///
/// An `Authorization: Bearer <token>` header wins; otherwise a cookie
/// named `token` is used. Returns `None` when neither is present.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok())
        && let Some(token) = value.strip_prefix("Bearer ")
    {
        return Some(token.to_string());
    }

    headers
        .get(http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| cookie_value(raw, "token"))
}

/// Find a named cookie in a raw `Cookie` header value
///
/// Pairs without an `=` are skipped.
fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

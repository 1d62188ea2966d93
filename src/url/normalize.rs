/// Scheme prefixes accepted as-is; anything else gets `https://` prepended
const RECOGNIZED_SCHEMES: &[&str] = &["http://", "https://"];

/// Prepended when the input carries no recognized scheme
const DEFAULT_SCHEME: &str = "https://";

/// Normalizes a user-supplied target into a fetchable URL string
///
/// Surrounding whitespace is trimmed. If the result does not start with
/// `http://` or `https://` (compared case-insensitively), `https://` is
/// prepended. No other validation happens here: a malformed host surfaces
/// later as a fetch failure.
///
/// # Examples
///
/// ```
/// use site_audit::url::normalize_target;
///
/// assert_eq!(normalize_target("example.com"), "https://example.com");
/// assert_eq!(normalize_target("http://example.com"), "http://example.com");
/// ```
pub fn normalize_target(raw: &str) -> String {
    let trimmed = raw.trim();

    if has_recognized_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    }
}

/// Returns true if the URL is served over HTTPS
pub fn is_https(url: &str) -> bool {
    starts_with_ignore_case(url, "https://")
}

fn has_recognized_scheme(url: &str) -> bool {
    RECOGNIZED_SCHEMES
        .iter()
        .any(|scheme| starts_with_ignore_case(url, scheme))
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

//! Purpose: Cheap, conservative predicates for user-supplied emails and URLs.
//! Exports: `is_valid_email`, `is_valid_url`.
//! Role: Form-level validation; not a full RFC 5322 / RFC 3986 validator.
//! Invariants: Predicates never panic and never allocate on the reject path.
use url::Url;

const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https"];

/// Accepts `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with text on both sides.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Accepts absolute `http`/`https` URLs only.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => ALLOWED_URL_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

// src/core/counter/normalize.rs

/// Normalizes one raw token: strips a single trailing period, then removes
/// every hyphen. Period removal runs first, so a period exposed at the end
/// of the token by hyphen removal stays in place and fails validation.
pub(crate) fn normalize(token: &str) -> String {
    strip_hyphens(strip_trailing_period(token))
}

/// Drops one trailing literal period. Repeated periods lose only the last.
fn strip_trailing_period(token: &str) -> &str {
    token.strip_suffix('.').unwrap_or(token)
}

/// Removes every hyphen in the token, not just at the boundaries.
fn strip_hyphens(token: &str) -> String {
    token.replace('-', "")
}

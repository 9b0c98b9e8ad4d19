//! Package name normalization (PEP 503).

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_.]+").expect("separator pattern is valid"));

/// Normalize a package name so that equivalent spellings compare equal.
///
/// Runs of `-`, `_` and `.` collapse to a single `-` and the result is
/// lower-cased, e.g. `Flask_Example` and `flask.example` both become
/// `flask-example`.
pub fn normalize(name: &str) -> String {
    NAME_SEPARATORS.replace_all(name, "-").to_lowercase()
}

/// Two names are equivalent when they normalize identically.
pub fn is_equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

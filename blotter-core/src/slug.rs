use once_cell::sync::Lazy;
use regex::Regex;

static NOT_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-zA-Z0-9]").expect("valid slug regex"));

/// Builds the file name used for an entry's page and for matching comments.
///
/// Every character that is not an ASCII letter or digit becomes its own `_`
/// (runs are not collapsed), `.html` is appended and the result lowercased.
///
/// ```
/// # use blotter_core::slug::slugify;
/// assert_eq!(slugify("Hello, World!"), "hello__world_.html");
/// ```
pub fn slugify(title: &str) -> String {
    let slug = NOT_ALPHANUMERIC.replace_all(title, "_");
    format!("{slug}.html").to_lowercase()
}

/// Absolute link for an entry. The prefix is used verbatim, so it should
/// already end with `/` if one is wanted.
pub fn link_for(prefix: &str, slug: &str) -> String {
    format!("{prefix}{slug}")
}

use std::str::FromStr;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The closed set of header keys an entry may carry.
///
/// Anything outside this set is rejected when the entry is parsed, so there is
/// no "other" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum HeaderKey {
    Date,
    Title,
    Subject,
    Format,
    Tags,
}

impl HeaderKey {
    /// Looks up a raw header key. Matching is exact: the header-file reader
    /// already lowercases keys.
    pub fn lookup(key: &str) -> Option<Self> {
        HeaderKey::from_str(key).ok()
    }
}

/// How the body of an entry is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BodyFormat {
    /// No `format` header: the body is already HTML and passes through.
    #[default]
    #[strum(disabled)]
    Html,
    Markdown,
}

impl BodyFormat {
    /// Parses the value of a `format` header. Only `markdown` is legal and the
    /// comparison is case-sensitive.
    pub fn from_header(value: &str) -> Option<Self> {
        BodyFormat::from_str(value).ok()
    }
}

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::entities::decode_entities;

/// Attribute signature marking a format string that already carries the
/// storefront currency selector.
pub const CURRENCY_CHANGER_MARKER: &str = "class=\"currency-changer\"";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Display-ready currency formats derived from the shop's raw pair.
/// Transient: computed per page load, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFormats {
    pub with_currency: String,
    pub without_currency: String,
}

impl NormalizedFormats {
    /// Normalize both halves of a raw format pair.
    pub fn from_raw(money_format: &str, money_with_currency_format: &str) -> Self {
        Self {
            with_currency: normalize(money_with_currency_format),
            without_currency: normalize(money_format),
        }
    }
}

/// Normalize a raw currency-format string into a display/copy-ready fragment.
///
/// Decodes HTML entities, then either passes the string through untouched
/// (merchant already added the currency-changer span) or strips all markup
/// and wraps the remaining text in a single currency-changer span. Pure and
/// idempotent: feeding the output back in returns it unchanged via the
/// pass-through case. One exception: decoding is single-pass, so
/// double-encoded input (`&amp;lt;`) sheds one entity layer per call; this
/// matches what merchants see today and is kept as is.
pub fn normalize(raw: &str) -> String {
    let decoded = decode_entities(raw);
    if decoded.contains(CURRENCY_CHANGER_MARKER) {
        return decoded;
    }
    format!(
        "<span class=\"currency-changer\">{}</span>",
        strip_tags(&decoded)
    )
}

/// Remove all HTML tags, keeping the visible text between them.
///
/// The pattern is deliberately permissive: anything from `<` to the next `>`
/// is a tag. A literal unescaped `>` in plain text after a `<` truncates at
/// that `>`; this matches the behavior merchants see today and is kept as is.
pub fn strip_tags(decoded: &str) -> String {
    TAG_RE.replace_all(decoded, "").into_owned()
}

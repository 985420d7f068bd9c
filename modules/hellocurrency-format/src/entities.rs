/// Decode HTML entity escapes to their literal characters.
///
/// Handles the standard named entities that show up in Shopify money formats
/// (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`), the currency
/// symbols (`&euro;`, `&pound;`, `&yen;`, `&cent;`, `&curren;`), plus decimal
/// (`&#38;`) and hex (`&#x26;`) character references. Anything that does not
/// form a complete entity is passed through as literal text.
pub fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        // Entities are short; ignore a semicolon more than a few bytes out
        // so a stray '&' in a long string is not paired with a distant ';'.
        let semi = rest.find(';').filter(|&i| i <= 11);
        match semi {
            Some(semi) if semi > 1 => {
                let body = &rest[1..semi];
                match decode_one(body) {
                    Some(decoded) => {
                        out.push_str(&decoded);
                        rest = &rest[semi + 1..];
                    }
                    None => {
                        out.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode a single entity body (the text between `&` and `;`).
fn decode_one(body: &str) -> Option<String> {
    let ch = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        // Currency symbols, the most likely named entities in a money format
        "euro" => '€',
        "pound" => '£',
        "yen" => '¥',
        "cent" => '¢',
        "curren" => '¤',
        _ => {
            let code = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some(ch.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&quot;x&quot;"), "\"x\"");
        assert_eq!(decode_entities("&apos;x&apos;"), "'x'");
    }

    #[test]
    fn decodes_currency_entities() {
        assert_eq!(decode_entities("&euro;{{amount}}"), "€{{amount}}");
        assert_eq!(decode_entities("&pound;{{amount}}"), "£{{amount}}");
        assert_eq!(decode_entities("&yen;{{amount}}"), "¥{{amount}}");
        assert_eq!(decode_entities("{{amount}}&cent;"), "{{amount}}¢");
        assert_eq!(decode_entities("&curren;{{amount}}"), "¤{{amount}}");
    }

    #[test]
    fn decodes_numeric_references() {
        assert_eq!(decode_entities("&#36;100"), "$100");
        assert_eq!(decode_entities("&#x24;100"), "$100");
        assert_eq!(decode_entities("&#X24;100"), "$100");
        assert_eq!(decode_entities("&#39;"), "'");
    }

    #[test]
    fn leaves_unknown_entities_literal() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("fish &chips"), "fish &chips");
        assert_eq!(decode_entities("a & b"), "a & b");
    }

    #[test]
    fn handles_trailing_and_bare_ampersand() {
        assert_eq!(decode_entities("&"), "&");
        assert_eq!(decode_entities("100&"), "100&");
        assert_eq!(decode_entities("&;"), "&;");
    }

    #[test]
    fn decodes_adjacent_entities() {
        assert_eq!(decode_entities("&lt;&lt;&gt;&gt;"), "<<>>");
    }

    #[test]
    fn invalid_codepoint_left_literal() {
        // Surrogate range is not a valid char.
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#xFFFFFFFF;"), "&#xFFFFFFFF;");
    }

    #[test]
    fn empty_input() {
        assert_eq!(decode_entities(""), "");
    }
}

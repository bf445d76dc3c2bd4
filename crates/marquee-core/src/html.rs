//! Helpers for the HTML renderings produced by `Brick::to_html`.

/// Escape text for use in HTML element content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Join the class names that are present, skipping empty ones.
#[must_use]
pub fn classes<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a boolean attribute (` disabled`) when `on`.
#[must_use]
pub const fn flag(name: &'static str, on: bool) -> &'static str {
    if on {
        name
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("Arjun Sharma"), "Arjun Sharma");
    }

    #[test]
    fn test_classes_skips_missing() {
        let invalid = false;
        assert_eq!(
            classes([Some("field"), invalid.then_some("field--invalid"), Some("")]),
            "field"
        );
        assert_eq!(classes([Some("a"), Some("b")]), "a b");
    }

    #[test]
    fn test_flag() {
        assert_eq!(flag(" disabled", true), " disabled");
        assert_eq!(flag(" disabled", false), "");
    }
}

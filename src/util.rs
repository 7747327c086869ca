//! HTML escaping helpers.

/// Escapes HTML special characters in text and attribute values.
///
/// # Arguments
///
/// * `text`: Plain text to escape
///
/// # Returns
///
/// HTML safe string
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a URL for use in an `href` or `src` attribute.
///
/// Only characters that would break out of a double quoted attribute or
/// start an entity are replaced; the URL is otherwise left as written.
pub fn escape_href(url: &str) -> String {
    url.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Heading 1"), "Heading 1");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_href() {
        assert_eq!(escape_href("/search?q=a&b=\"c\""), "/search?q=a&amp;b=&quot;c&quot;");
        assert_eq!(escape_href("#"), "#");
    }
}

//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::Namespace;

/// Wraps rendered markdown with standard HTML page structure
///
/// Provides DOCTYPE, html, head and the GOV.UK width container and main
/// wrapper. The fragment is inserted unescaped; it is expected to be the
/// output of [`MarkdownRenderer::render`](crate::MarkdownRenderer::render).
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheets`: CSS file paths to link
/// * `namespace`: Namespace used for the template classes
/// * `body`: Rendered HTML fragment
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], namespace: &Namespace, body: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" class=(namespace.class("template")) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body class=(namespace.class("template__body")) {
                div class=(namespace.class("width-container")) {
                    main class=(namespace.class("main-wrapper")) id="main-content" {
                        (PreEscaped(body))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_structure() {
        // Arrange
        let namespace = Namespace::default();

        // Act
        let html = page_wrapper("Guidance", &["style.css"], &namespace, "<p>Body</p>").into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"), "Should start with doctype");
        assert!(html.contains("<title>Guidance</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
        assert!(html.contains("<body class=\"govuk-template__body\">"));
        assert!(html.contains("<main class=\"govuk-main-wrapper\" id=\"main-content\"><p>Body</p></main>"));
    }

    #[test]
    fn test_page_wrapper_escapes_title() {
        // Act
        let html = page_wrapper("A & B", &[], &Namespace::default(), "").into_string();

        // Assert
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(!html.contains("<link"), "No stylesheets should be linked");
    }

    #[test]
    fn test_page_wrapper_custom_namespace() {
        // Act
        let html = page_wrapper("T", &[], &Namespace::new("app", "!"), "").into_string();

        // Assert
        assert!(html.contains("class=\"app-width-container\""));
    }
}

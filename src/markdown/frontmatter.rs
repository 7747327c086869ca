//! Per-document options from YAML front matter.

use serde::Deserialize;

use super::options::{HeadingSize, RenderOptions};

/// Delimiter line opening and closing a front matter block.
pub const DELIMITER: &str = "---";

/// Recognised front matter attributes. Anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default, rename = "headingsStartWith")]
    pub headings_start_with: Option<String>,
}

impl FrontMatter {
    /// Parses a front matter block, delimiters included.
    ///
    /// Malformed YAML is logged and treated as empty front matter.
    pub fn parse(block: &str) -> Self {
        let yaml = strip_delimiters(block);
        if yaml.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str(yaml) {
            Ok(front_matter) => front_matter,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed front matter");
                Self::default()
            }
        }
    }

    /// Applies these attributes on top of `options`.
    ///
    /// A missing `headingsStartWith` leaves the configured value in place;
    /// an unrecognised one falls back to [`HeadingSize::Large`].
    pub fn apply(&self, options: &RenderOptions) -> RenderOptions {
        let mut options = options.clone();
        if let Some(value) = self.headings_start_with.as_deref() {
            options.headings_start_with = HeadingSize::from_option(Some(value));
        }
        options
    }
}

/// Returns the text between the opening and closing delimiter lines.
fn strip_delimiters(block: &str) -> &str {
    let body = match block.trim_start().strip_prefix(DELIMITER) {
        Some(rest) => rest.trim_start_matches(['\r', '\n']),
        None => return block,
    };

    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return &body[..offset];
        }
        offset += line.len();
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headings_start_with() {
        // Arrange
        let block = "---\nheadingsStartWith: xl\n---\n\n";

        // Act
        let front_matter = FrontMatter::parse(block);

        // Assert
        assert_eq!(front_matter.headings_start_with.as_deref(), Some("xl"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        // Arrange
        let block = "---\ntitle: Guidance\nheadingsStartWith: m\nlayout: page\n---\n";

        // Act
        let front_matter = FrontMatter::parse(block);

        // Assert
        assert_eq!(front_matter.headings_start_with.as_deref(), Some("m"));
    }

    #[test]
    fn test_parse_malformed_yaml() {
        // Arrange
        let block = "---\nheadingsStartWith: [unclosed\n---\n";

        // Act
        let front_matter = FrontMatter::parse(block);

        // Assert
        assert_eq!(front_matter, FrontMatter::default());
    }

    #[test]
    fn test_parse_empty_block() {
        assert_eq!(FrontMatter::parse("---\n---\n"), FrontMatter::default());
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("---\na: 1\nb: 2\n---\n\n"), "a: 1\nb: 2\n");
        assert_eq!(strip_delimiters("---\r\na: 1\r\n---\r\n"), "a: 1\r\n");
    }

    #[test]
    fn test_apply_overrides_heading_size() {
        // Arrange
        let front_matter = FrontMatter {
            headings_start_with: Some("xl".to_string()),
        };

        // Act
        let options = front_matter.apply(&RenderOptions::default());

        // Assert
        assert_eq!(options.headings_start_with, HeadingSize::ExtraLarge);
    }

    #[test]
    fn test_apply_unknown_value_falls_back_to_large() {
        // Arrange
        let configured = RenderOptions::new().headings_start_with(HeadingSize::Medium);
        let front_matter = FrontMatter {
            headings_start_with: Some("huge".to_string()),
        };

        // Act
        let options = front_matter.apply(&configured);

        // Assert
        assert_eq!(options.headings_start_with, HeadingSize::Large);
    }

    #[test]
    fn test_apply_without_value_keeps_configured_size() {
        // Arrange
        let configured = RenderOptions::new().headings_start_with(HeadingSize::Small);

        // Act
        let options = FrontMatter::default().apply(&configured);

        // Assert
        assert_eq!(options.headings_start_with, HeadingSize::Small);
    }
}

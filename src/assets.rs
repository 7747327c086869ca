//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::Namespace;
use crate::highlight::stylesheet;

/// Code block and task list checkbox styles, written for the default
/// `govuk` namespace.
const CODE: &str = include_str!("../assets/code.css");

/// Builds the stylesheet for extension classes and highlighter tokens.
///
/// Extension classes follow `namespace`; highlighter token classes always
/// use the fixed highlighter prefix.
///
/// # Errors
///
/// Returns error if the highlight theme does not exist
pub fn css_assets(theme: &str, namespace: &Namespace) -> Result<String> {
    let base = CODE.replace("x-govuk-", &namespace.extension(""));
    let tokens = stylesheet(theme)?;
    Ok([base.as_str(), tokens.as_str()].join("\n"))
}

/// Writes the bundled stylesheet to `path`
///
/// # Errors
///
/// Returns error if the theme does not exist or the file cannot be written
pub fn write_css_assets(path: &Path, theme: &str, namespace: &Namespace) -> Result<()> {
    let css = css_assets(theme, namespace)?;
    fs::write(path, css)
        .with_context(|| format!("Failed to write CSS asset: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_css_assets_default_namespace() {
        // Act
        let css = css_assets("InspiredGitHub", &Namespace::default()).expect("Should build CSS");

        // Assert
        assert!(css.contains(".x-govuk-code--block"));
        assert!(css.contains(".x-govuk-checkbox__pseudo"));
        assert!(css.contains(".x-govuk-code__"), "Should include token styles");
    }

    #[test]
    fn test_css_assets_custom_namespace() {
        // Act
        let css = css_assets("InspiredGitHub", &Namespace::new("app", "!")).expect("Should build CSS");

        // Assert
        assert!(css.contains(".x-app-code--inline"));
        assert!(css.contains(".x-app-checkbox__input"));
    }

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("code.css");

        // Act
        write_css_assets(&path, "InspiredGitHub", &Namespace::default()).expect("Should write CSS");

        // Assert
        let css = fs::read_to_string(&path).expect("Should read CSS");
        assert!(css.contains(".x-govuk-code"));
    }

    #[test]
    fn test_write_css_assets_unknown_theme() {
        // Arrange
        let dir = TempDir::new().expect("Should create temp dir");
        let path = dir.path().join("code.css");

        // Act
        let result = write_css_assets(&path, "Nope", &Namespace::default());

        // Assert
        assert!(result.is_err());
        assert!(!path.exists(), "Nothing should be written");
    }
}

//! Syntax highlighting for fenced code blocks.

use anyhow::{Context, Result};
use std::sync::LazyLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::util::escape_html;

/// Class prefix for highlighter token spans.
///
/// Kept apart from the design system namespace so token classes never
/// collide with layout classes.
pub const CLASS_PREFIX: &str = "x-govuk-code__";

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed {
    prefix: CLASS_PREFIX,
};

/// Syntax definitions, loaded once per process on first use.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Colorizes code block text.
///
/// `highlight` is tried first with the declared language. When it returns
/// `None` the language is unknown and callers use `highlight_auto`.
pub trait Highlighter {
    /// Highlights `code` as `language`, or returns `None` if the language
    /// is not supported.
    fn highlight(&self, code: &str, language: &str) -> Option<String>;

    /// Highlights `code` with a detected language. Returns escaped plain
    /// text when nothing can be detected.
    fn highlight_auto(&self, code: &str) -> String;
}

/// Highlighter backed by syntect's bundled syntax definitions.
///
/// Emits `<span class="x-govuk-code__*">` markup rather than inline styles;
/// see [`stylesheet`] for matching CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self
    }

    fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
        SYNTAX_SET
            .find_syntax_by_token(language)
            .or_else(|| SYNTAX_SET.find_syntax_by_extension(language))
    }

    fn detect_syntax(code: &str) -> Option<&'static SyntaxReference> {
        let first_line = code.lines().next()?;
        SYNTAX_SET
            .find_syntax_by_first_line(first_line)
            .filter(|syntax| syntax.name != "Plain Text")
    }

    fn generate(code: &str, syntax: &SyntaxReference) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    fn generate_or_escape(code: &str, syntax: &SyntaxReference) -> String {
        Self::generate(code, syntax).unwrap_or_else(|e| {
            tracing::warn!(syntax = %syntax.name, error = %e, "Highlighting failed, using plain text");
            escape_html(code)
        })
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        let syntax = Self::find_syntax(language)?;
        Some(Self::generate_or_escape(code, syntax))
    }

    fn highlight_auto(&self, code: &str) -> String {
        match Self::detect_syntax(code) {
            Some(syntax) => {
                tracing::debug!(syntax = %syntax.name, "Detected code block language");
                Self::generate_or_escape(code, syntax)
            }
            None => escape_html(code),
        }
    }
}

/// Names of the bundled themes usable with [`stylesheet`].
pub fn theme_names() -> impl Iterator<Item = &'static str> {
    THEME_SET.themes.keys().map(String::as_str)
}

/// Generates CSS for highlighter token classes from a bundled theme.
///
/// # Errors
///
/// Returns error if the theme does not exist or CSS generation fails.
pub fn stylesheet(theme_name: &str) -> Result<String> {
    let theme = THEME_SET
        .themes
        .get(theme_name)
        .with_context(|| format!("Unknown highlight theme: {}", theme_name))?;

    css_for_theme_with_class_style(theme, CLASS_STYLE)
        .context("Failed to generate highlight stylesheet")
}

//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::highlight::theme_names;
use crate::markdown::{HeadingSize, Namespace, RenderOptions};

/// Command line configuration for govuk-markdown.
#[derive(Debug, Clone, Parser)]
#[command(name = "govuk-markdown", version, about, long_about = None)]
pub struct Config {
    /// Markdown file to render; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Heading size for level 1 headings (xl, l, m or s; anything else is l)
    #[arg(long, default_value = "l", value_parser = parse_heading_size)]
    pub headings_start_with: HeadingSize,

    /// Prefix for generated class names
    #[arg(long, default_value = "govuk")]
    pub prefix: String,

    /// Infix for utility class names
    #[arg(long, default_value = "!")]
    pub utility: String,

    /// Wrap output in a complete HTML page
    #[arg(long)]
    pub standalone: bool,

    /// Page title for standalone output
    #[arg(long)]
    pub title: Option<String>,

    /// Write code block and highlighting styles to this file
    #[arg(long)]
    pub css_output: Option<PathBuf>,

    /// Syntax highlighting theme (InspiredGitHub, base16-ocean.light, etc.)
    #[arg(long, default_value = "InspiredGitHub")]
    pub theme: String,
}

fn parse_heading_size(value: &str) -> Result<HeadingSize, String> {
    Ok(HeadingSize::from_option(Some(value)))
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist or the theme is unknown.
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = self.input_path()
            && !input.exists()
        {
            bail!("Input file does not exist: {}", input.display());
        }

        if !theme_names().any(|name| name == self.theme) {
            let available: Vec<&str> = theme_names().collect();
            bail!(
                "Unknown highlight theme: {} (available: {})",
                self.theme,
                available.join(", ")
            );
        }

        Ok(())
    }

    /// Input file path, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Render options from the command line flags.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .headings_start_with(self.headings_start_with)
            .namespace(Namespace::new(&self.prefix, &self.utility))
    }

    /// Title for standalone output: explicit title, then input file stem.
    pub fn page_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        self.input_path()
            .and_then(|path| path.file_stem())
            .and_then(|stem| stem.to_str())
            .map(String::from)
            .unwrap_or_else(|| "Document".to_string())
    }

    /// Stylesheet href for standalone output.
    ///
    /// Relative to the output file's directory when the stylesheet is
    /// written alongside it.
    pub fn stylesheet_href(&self) -> Option<String> {
        let css = self.css_output.as_deref()?;
        let relative = self
            .output
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .and_then(|dir| css.strip_prefix(dir).ok())
            .unwrap_or(css);
        Some(relative.to_string_lossy().replace('\\', "/"))
    }
}

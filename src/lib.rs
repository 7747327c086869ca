//! Render Markdown to HTML using GOV.UK Design System classes.

mod assets;
pub mod components;
mod config;
mod highlight;
mod markdown;
mod util;

pub use assets::{css_assets, write_css_assets};
pub use config::Config;
pub use highlight::{CLASS_PREFIX, Highlighter, SyntectHighlighter, stylesheet, theme_names};
pub use markdown::{
    Alignment, FrontMatter, HeadingSize, MarkdownRenderer, Namespace, Node, RenderOptions,
    TableCell, Templates, heading_id,
};
pub use util::escape_html;

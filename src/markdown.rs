//! Markdown rendering with GOV.UK Design System classes.
//!
//! This module parses markdown with comrak (GFM tables, task lists,
//! strikethrough, autolinks) and renders every node through the GOV.UK
//! template set, highlighting fenced code blocks with syntect.

mod frontmatter;
mod options;
mod renderer;
mod templates;

pub use frontmatter::FrontMatter;
pub use options::{HeadingSize, Namespace, RenderOptions};
pub use renderer::MarkdownRenderer;
pub use templates::{Alignment, Node, TableCell, Templates, heading_id};

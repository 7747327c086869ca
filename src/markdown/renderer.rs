//! Markdown rendering with GOV.UK templates.

use anyhow::{Context, Result};
use comrak::nodes::{AstNode, ListType, NodeCodeBlock, NodeLink, NodeValue, Sourcepos, TableAlignment};
use comrak::{Arena, Options, parse_document};
use std::path::Path;

use super::frontmatter::{self, FrontMatter};
use super::options::RenderOptions;
use super::templates::{Alignment, TableCell, Templates};
use crate::util::{escape_href, escape_html};

/// Renders markdown to HTML decorated with GOV.UK Design System classes.
///
/// Parsing is delegated to comrak with GitHub Flavored Markdown tables,
/// task lists, strikethrough and autolinks enabled. The parsed tree is
/// walked depth first; each node's children are rendered before the node
/// itself is handed to [`Templates`]. A leading `---` front matter block
/// may override `headingsStartWith` for that document.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    templates: Templates,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with default render options.
    ///
    /// Configures comrak with:
    /// - Tables, strikethrough, autolinks, task lists
    /// - YAML front matter delimited by `---`
    /// - Raw HTML passed through (trusted content)
    pub fn new() -> Self {
        Self::with_templates(Templates::default())
    }

    /// Creates renderer with the given render options.
    pub fn with_options(render_options: RenderOptions) -> Self {
        Self::with_templates(Templates::new(render_options))
    }

    /// Creates renderer using a prepared template set, for example one
    /// with a custom highlighter.
    pub fn with_templates(templates: Templates) -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.front_matter_delimiter = Some(frontmatter::DELIMITER.to_string());

        // Render options (security: we trust)
        options.render.unsafe_ = true;

        Self { options, templates }
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Concatenated HTML fragments for every block in the document
    pub fn render(&self, content: &str) -> String {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        let templates = match Self::front_matter(root) {
            Some(front_matter) => self
                .templates
                .with_options(front_matter.apply(self.templates.options())),
            None => self.templates.clone(),
        };

        let walker = Walker {
            options: &self.options,
            templates: &templates,
            lines: content.lines().collect(),
        };
        walker.render(root)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }

    fn front_matter<'n>(root: &'n AstNode<'n>) -> Option<FrontMatter> {
        root.children().find_map(|child| match &child.data.borrow().value {
            NodeValue::FrontMatter(block) => Some(FrontMatter::parse(block)),
            _ => None,
        })
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// One render pass over a parsed document.
struct Walker<'w, 'c> {
    options: &'w Options<'c>,
    templates: &'w Templates,
    /// Source lines, for recovering heading source from positions.
    lines: Vec<&'w str>,
}

impl Walker<'_, '_> {
    fn render<'n>(&self, node: &'n AstNode<'n>) -> String {
        let ast = node.data.borrow();
        let templates = self.templates;

        match &ast.value {
            NodeValue::Document => self.children(node),
            NodeValue::FrontMatter(_) => String::new(),
            NodeValue::BlockQuote => templates.blockquote(&self.children(node)),
            NodeValue::Heading(heading) => {
                let text = self.children(node);
                let raw = self
                    .heading_source(ast.sourcepos, heading.setext)
                    .unwrap_or_else(|| plain_text(node));
                templates.heading(heading.level, &text, &raw)
            }
            NodeValue::Paragraph => {
                let text = self.children(node);
                if in_tight_list(node) {
                    text
                } else {
                    templates.paragraph(&text)
                }
            }
            NodeValue::Link(link) => self.link(node, link),
            NodeValue::Image(link) => image(node, link),
            NodeValue::List(list) => {
                let items: Vec<String> = node.children().map(|item| self.render(item)).collect();
                templates.list(list.list_type == ListType::Ordered, list.start, &items)
            }
            NodeValue::Item(_) => templates.list_item(&self.children(node), None),
            NodeValue::TaskItem(symbol) => {
                templates.list_item(&self.children(node), Some(symbol.is_some()))
            }
            NodeValue::ThematicBreak => templates.hr(),
            NodeValue::Table(table) => self.table(node, &table.alignments),
            NodeValue::CodeBlock(block) => self.code_block(block),
            NodeValue::Code(code) => templates.codespan(&escape_html(&code.literal)),
            NodeValue::HtmlBlock(html) => html.literal.clone(),
            NodeValue::HtmlInline(html) => html.clone(),
            NodeValue::Text(text) => escape_html(text),
            NodeValue::SoftBreak => "\n".to_string(),
            NodeValue::LineBreak => "<br>".to_string(),
            NodeValue::Emph => format!("<em>{}</em>", self.children(node)),
            NodeValue::Strong => format!("<strong>{}</strong>", self.children(node)),
            NodeValue::Strikethrough => format!("<del>{}</del>", self.children(node)),
            _ => self.fallback(node),
        }
    }

    fn children<'n>(&self, node: &'n AstNode<'n>) -> String {
        node.children().map(|child| self.render(child)).collect()
    }

    fn link<'n>(&self, node: &'n AstNode<'n>, link: &NodeLink) -> String {
        let title = escape_html(&link.title);
        self.templates
            .link(&escape_href(&link.url), Some(title.as_str()), &self.children(node))
    }

    fn table<'n>(&self, node: &'n AstNode<'n>, alignments: &[TableAlignment]) -> String {
        let mut header = Vec::new();
        let mut rows = Vec::new();

        for row in node.children() {
            let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
            let cells: Vec<TableCell> = row
                .children()
                .enumerate()
                .map(|(column, cell)| TableCell {
                    text: self.children(cell),
                    header: is_header,
                    align: alignments
                        .get(column)
                        .map(|a| alignment(*a))
                        .unwrap_or_default(),
                })
                .collect();

            if is_header {
                header = cells;
            } else {
                rows.push(cells);
            }
        }

        self.templates.table(&header, &rows)
    }

    fn code_block(&self, block: &NodeCodeBlock) -> String {
        let text = block.literal.strip_suffix('\n').unwrap_or(&block.literal);
        let language = block.info.split_whitespace().next();

        match language {
            Some(language) => self.templates.code(text, Some(&escape_html(language))),
            // Without a language the text is not highlighted, so escape it here
            None => self.templates.code(&escape_html(text), None),
        }
    }

    /// Recovers the heading as written from its source position.
    ///
    /// Returns `None` when the position does not point at heading source,
    /// in which case the heading's plain text is used instead.
    fn heading_source(&self, sourcepos: Sourcepos, setext: bool) -> Option<String> {
        let (start, end) = (sourcepos.start, sourcepos.end);
        if start.line == 0 || end.line < start.line {
            return None;
        }

        let lines = self.lines.get(start.line - 1..end.line)?;
        let last = lines.len() - 1;
        let mut raw = String::new();

        for (i, line) in lines.iter().enumerate() {
            let from = if i == 0 { start.column.saturating_sub(1) } else { 0 };
            let to = if i == last {
                end.column.min(line.len())
            } else {
                line.len()
            };
            raw.push_str(line.get(from..to.max(from))?);
            if i != last {
                raw.push('\n');
            }
        }

        let looks_like_heading = if setext {
            raw.lines().last().is_some_and(|underline| {
                let underline = underline.trim();
                !underline.is_empty() && underline.chars().all(|c| c == '=' || c == '-')
            })
        } else {
            raw.trim_start().starts_with('#')
        };

        looks_like_heading.then_some(raw)
    }

    /// Renders a node without a GOV.UK template using comrak's formatter.
    fn fallback<'n>(&self, node: &'n AstNode<'n>) -> String {
        let mut html = Vec::new();
        match comrak::format_html(node, self.options, &mut html) {
            Ok(()) => String::from_utf8_lossy(&html).into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to render markdown node");
                String::new()
            }
        }
    }
}

fn image<'n>(node: &'n AstNode<'n>, link: &NodeLink) -> String {
    let alt = escape_html(&plain_text(node));
    let src = escape_href(&link.url);
    if link.title.is_empty() {
        format!("<img src=\"{src}\" alt=\"{alt}\">")
    } else {
        format!(
            "<img src=\"{src}\" alt=\"{alt}\" title=\"{}\">",
            escape_html(&link.title)
        )
    }
}

/// Paragraphs in tight lists render without a wrapper.
fn in_tight_list<'n>(node: &'n AstNode<'n>) -> bool {
    let Some(list) = node.parent().and_then(|item| item.parent()) else {
        return false;
    };
    matches!(&list.data.borrow().value, NodeValue::List(list) if list.tight)
}

/// Concatenated literal text of a node's descendants.
fn plain_text<'n>(node: &'n AstNode<'n>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        match &descendant.data.borrow().value {
            NodeValue::Text(literal) => text.push_str(literal),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::HtmlInline(html) => text.push_str(html),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn alignment(align: TableAlignment) -> Alignment {
    match align {
        TableAlignment::None => Alignment::None,
        TableAlignment::Left => Alignment::Left,
        TableAlignment::Center => Alignment::Center,
        TableAlignment::Right => Alignment::Right,
    }
}

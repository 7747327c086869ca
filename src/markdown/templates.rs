//! GOV.UK HTML templates for parsed Markdown nodes.
//!
//! Each node arrives with its children already rendered to HTML. Templates
//! only decide the wrapping markup and class names; they never parse
//! Markdown or escape the content they are handed.

use regex::Regex;
use std::sync::{Arc, LazyLock};

use super::options::{HeadingSize, RenderOptions};
use crate::highlight::{Highlighter, SyntectHighlighter};

/// Everything that is neither a word character nor whitespace.
static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s]+").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A figure, optionally wrapped in a link. Figures are block content and
/// must not be wrapped in a paragraph.
static FIGURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<a([^>]+)>)?<figure").expect("valid regex"));

/// Table cell text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

impl Alignment {
    fn as_str(&self) -> Option<&'static str> {
        match self {
            Alignment::None => None,
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
        }
    }
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Cell content as inline HTML.
    pub text: String,
    pub header: bool,
    pub align: Alignment,
}

/// A parsed Markdown node with pre-rendered content.
///
/// Strings holding HTML (`body`, `text`, `items`) are inserted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Blockquote {
        body: &'a str,
    },
    Heading {
        depth: u8,
        text: &'a str,
        /// Heading source, used to derive the id.
        raw: &'a str,
    },
    Paragraph {
        text: &'a str,
    },
    Link {
        href: &'a str,
        title: Option<&'a str>,
        text: &'a str,
    },
    List {
        ordered: bool,
        start: usize,
        items: &'a [String],
    },
    ListItem {
        text: &'a str,
        /// `Some(checked)` for task list items.
        task: Option<bool>,
    },
    Checkbox {
        checked: bool,
    },
    Hr,
    Table {
        header: &'a [TableCell],
        rows: &'a [Vec<TableCell>],
    },
    TableRow {
        text: &'a str,
    },
    TableCell(&'a TableCell),
    Code {
        /// Code as written. Passed to the highlighter when a language is
        /// set, emitted as is otherwise.
        text: &'a str,
        language: Option<&'a str>,
    },
    CodeSpan {
        text: &'a str,
    },
}

/// Derives a heading id from the heading source.
///
/// Lowercases, drops everything except word characters and whitespace,
/// trims, then turns each whitespace run into a single hyphen.
///
/// # Examples
///
/// ```
/// use govuk_markdown::heading_id;
///
/// assert_eq!(heading_id("# Heading with *emphasis*"), "heading-with-emphasis");
/// ```
pub fn heading_id(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lower, "");
    WHITESPACE_RE
        .replace_all(stripped.trim(), "-")
        .into_owned()
}

/// The GOV.UK template set.
///
/// Holds the render options and the highlighter used for fenced code.
/// Rendering is a pure function of the node and the options.
#[derive(Clone)]
pub struct Templates {
    options: RenderOptions,
    highlighter: Arc<dyn Highlighter + Send + Sync>,
}

impl Templates {
    /// Creates templates highlighting code with syntect.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_highlighter(options, SyntectHighlighter::new())
    }

    pub fn with_highlighter(
        options: RenderOptions,
        highlighter: impl Highlighter + Send + Sync + 'static,
    ) -> Self {
        Self {
            options,
            highlighter: Arc::new(highlighter),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Same highlighter, different options.
    pub(crate) fn with_options(&self, options: RenderOptions) -> Self {
        Self {
            options,
            highlighter: Arc::clone(&self.highlighter),
        }
    }

    /// Renders any node.
    pub fn render(&self, node: &Node<'_>) -> String {
        match *node {
            Node::Blockquote { body } => self.blockquote(body),
            Node::Heading { depth, text, raw } => self.heading(depth, text, raw),
            Node::Paragraph { text } => self.paragraph(text),
            Node::Link { href, title, text } => self.link(href, title, text),
            Node::List {
                ordered,
                start,
                items,
            } => self.list(ordered, start, items),
            Node::ListItem { text, task } => self.list_item(text, task),
            Node::Checkbox { checked } => self.checkbox(checked),
            Node::Hr => self.hr(),
            Node::Table { header, rows } => self.table(header, rows),
            Node::TableRow { text } => self.table_row(text),
            Node::TableCell(cell) => self.table_cell(cell),
            Node::Code { text, language } => self.code(text, language),
            Node::CodeSpan { text } => self.codespan(text),
        }
    }

    pub fn blockquote(&self, body: &str) -> String {
        let ns = &self.options.namespace;
        format!(
            "<blockquote class=\"{} {}\">{}</blockquote>\n",
            ns.class("inset-text"),
            ns.utility("margin-left-0"),
            body
        )
    }

    pub fn heading(&self, depth: u8, text: &str, raw: &str) -> String {
        // Depth outside 1..=6 is not valid Markdown; clamp rather than emit <h0>
        let depth = depth.clamp(1, 6);
        let size = HeadingSize::for_depth(self.options.headings_start_with, depth);
        let class = self
            .options
            .namespace
            .class(&format!("heading-{}", size.modifier()));

        format!(
            "<h{depth} class=\"{class}\" id=\"{id}\">{text}</h{depth}>",
            id = heading_id(raw)
        )
    }

    pub fn paragraph(&self, text: &str) -> String {
        if FIGURE_RE.is_match(text) {
            return text.to_string();
        }

        format!(
            "<p class=\"{}\">{}</p>\n",
            self.options.namespace.class("body"),
            text
        )
    }

    pub fn link(&self, href: &str, title: Option<&str>, text: &str) -> String {
        let class = self.options.namespace.class("link");
        match title.filter(|t| !t.is_empty()) {
            Some(title) => {
                format!("<a class=\"{class}\" href=\"{href}\" title=\"{title}\">{text}</a>")
            }
            None => format!("<a class=\"{class}\" href=\"{href}\">{text}</a>"),
        }
    }

    pub fn list(&self, ordered: bool, start: usize, items: &[String]) -> String {
        let ns = &self.options.namespace;
        let (element, modifier) = if ordered {
            ("ol", "number")
        } else {
            ("ul", "bullet")
        };
        let start_attr = if ordered && start != 1 {
            format!(" start=\"{start}\"")
        } else {
            String::new()
        };

        format!(
            "<{element}{start_attr} class=\"{} {}\">{}</{element}>\n",
            ns.class("list"),
            ns.class(&format!("list--{modifier}")),
            items.concat()
        )
    }

    pub fn list_item(&self, text: &str, task: Option<bool>) -> String {
        match task {
            Some(checked) => format!("<li>{} {}</li>\n", self.checkbox(checked), text),
            None => format!("<li>{text}</li>\n"),
        }
    }

    pub fn checkbox(&self, checked: bool) -> String {
        let ns = &self.options.namespace;
        format!(
            "<span class=\"{}\"><input class=\"{}\" type=\"checkbox\"{} disabled><span class=\"{}\"></span></span>",
            ns.extension("checkbox"),
            ns.extension("checkbox__input"),
            if checked { " checked" } else { "" },
            ns.extension("checkbox__pseudo"),
        )
    }

    pub fn hr(&self) -> String {
        let ns = &self.options.namespace;
        format!(
            "<hr class=\"{} {} {}\">\n",
            ns.class("section-break"),
            ns.class("section-break--xl"),
            ns.class("section-break--visible"),
        )
    }

    pub fn table(&self, header: &[TableCell], rows: &[Vec<TableCell>]) -> String {
        let ns = &self.options.namespace;

        let head = self.table_row(&self.table_cells(header));

        let body: String = rows
            .iter()
            .map(|row| self.table_row(&self.table_cells(row)))
            .collect();
        let body = if body.is_empty() {
            body
        } else {
            format!("<tbody class=\"{}\">{}</tbody>\n", ns.class("table__body"), body)
        };

        format!(
            "<table class=\"{}\">\n<thead class=\"{}\">\n{}</thead>\n{}</table>\n",
            ns.class("table"),
            ns.class("table__head"),
            head,
            body
        )
    }

    fn table_cells(&self, cells: &[TableCell]) -> String {
        cells.iter().map(|cell| self.table_cell(cell)).collect()
    }

    pub fn table_row(&self, text: &str) -> String {
        format!(
            "<tr class=\"{}\">\n{}</tr>\n",
            self.options.namespace.class("table__row"),
            text
        )
    }

    pub fn table_cell(&self, cell: &TableCell) -> String {
        let ns = &self.options.namespace;
        let (element, class) = if cell.header {
            ("th", ns.class("table__header"))
        } else {
            ("td", ns.class("table__cell"))
        };
        let align_class = cell
            .align
            .as_str()
            .map(|align| format!(" {}", ns.utility(&format!("text-align-{align}"))))
            .unwrap_or_default();

        format!(
            "<{element} class=\"{class}{align_class}\">{}</{element}>\n",
            cell.text
        )
    }

    pub fn code(&self, text: &str, language: Option<&str>) -> String {
        let ns = &self.options.namespace;
        let block_class = format!("{} {}", ns.extension("code"), ns.extension("code--block"));

        match language.filter(|l| !l.is_empty()) {
            Some(language) => {
                let code = self
                    .highlighter
                    .highlight(text, language)
                    .unwrap_or_else(|| {
                        tracing::debug!(language, "Unsupported code language, detecting instead");
                        self.highlighter.highlight_auto(text)
                    });
                format!(
                    "<pre class=\"{block_class} {}\" tabindex=\"0\"><code>{code}</code></pre>\n",
                    ns.extension(&format!("code__language--{language}"))
                )
            }
            None => format!("<pre class=\"{block_class}\" tabindex=\"0\">{text}</pre>\n"),
        }
    }

    pub fn codespan(&self, text: &str) -> String {
        let ns = &self.options.namespace;
        format!(
            "<code class=\"{} {}\">{}</code>",
            ns.extension("code"),
            ns.extension("code--inline"),
            text
        )
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

use anyhow::{Context, Result};
use govuk_markdown::components::layout::page_wrapper;
use govuk_markdown::{Config, MarkdownRenderer, write_css_assets};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Reads markdown from the input file, or stdin when none is given.
fn read_input(config: &Config) -> Result<String> {
    match config.input_path() {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read markdown from stdin")?;
            Ok(markdown)
        }
    }
}

/// Writes HTML to the output file, or stdout when none is given.
fn write_output(config: &Config, html: &str) -> Result<()> {
    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "Wrote HTML");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write HTML to stdout")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let options = config.render_options();
    let markdown = read_input(&config)?;

    let renderer = MarkdownRenderer::with_options(options.clone());
    let fragment = renderer.render(&markdown);
    tracing::debug!(bytes = fragment.len(), "Rendered markdown");

    if let Some(css_path) = &config.css_output {
        if let Some(parent) = css_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create stylesheet directory: {}", parent.display())
            })?;
        }
        write_css_assets(css_path, &config.theme, &options.namespace)?;
        tracing::info!(path = %css_path.display(), theme = %config.theme, "Wrote stylesheet");
    }

    let html = if config.standalone {
        let stylesheet = config.stylesheet_href();
        let stylesheets: Vec<&str> = stylesheet.as_deref().into_iter().collect();
        page_wrapper(&config.page_title(), &stylesheets, &options.namespace, &fragment).into_string()
    } else {
        fragment
    };

    write_output(&config, &html)
}

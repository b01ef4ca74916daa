//! HTML preview of a generated README
//!
//! Renders GitHub-flavored Markdown with `pulldown-cmark`:
//! - Tables, strikethrough and task lists enabled
//! - Single newlines become `<br />` when hard breaks are on
//! - Inline HTML such as the centered badge block is passed through

use crate::markdown_format::escape_html;
use pulldown_cmark::{html, Event, Options, Parser};

/// Title used for the standalone page when none is configured
pub const DEFAULT_PAGE_TITLE: &str = "README Preview";

/// Settings for the standalone preview page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Render single newlines as line breaks, like GitHub does for comments
    pub hard_breaks: bool,

    /// Page title; falls back to [`DEFAULT_PAGE_TITLE`]
    pub title: Option<String>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            title: None,
        }
    }
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render Markdown to an HTML fragment
pub fn render_html_fragment(markdown: &str, hard_breaks: bool) -> String {
    let parser = Parser::new_ext(markdown, parser_options()).map(|event| match event {
        Event::SoftBreak if hard_breaks => Event::HardBreak,
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Render Markdown to a complete HTML page with embedded styles
pub fn render_html_page(markdown: &str, options: &PreviewOptions) -> String {
    let title = options
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_PAGE_TITLE);

    let mut output = String::new();
    write_html_header(&mut output, title);
    output.push_str("<body>\n");
    output.push_str("<article class=\"markdown-body\">\n");
    output.push_str(&render_html_fragment(markdown, options.hard_breaks));
    output.push_str("</article>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");
    output
}

fn write_html_header(output: &mut String, title: &str) {
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// GitHub-like README styling
const CSS_STYLES: &str = r#"
* {
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica,
                 Arial, sans-serif;
    line-height: 1.5;
    color: #1f2328;
    background-color: #f6f8fa;
    margin: 0;
    padding: 32px 16px;
}

.markdown-body {
    max-width: 880px;
    margin: 0 auto;
    background: white;
    padding: 45px;
    border: 1px solid #d0d7de;
    border-radius: 6px;
}

h1, h2 {
    padding-bottom: 0.3em;
    border-bottom: 1px solid #d8dee4;
}

h1, h2, h3 {
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}

p, ul, ol, pre, table {
    margin-top: 0;
    margin-bottom: 16px;
}

ul, ol {
    padding-left: 2em;
}

a {
    color: #0969da;
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}

img {
    max-width: 100%;
    vertical-align: middle;
}

code {
    font-family: ui-monospace, SFMono-Regular, 'SF Mono', Menlo, Consolas, monospace;
    background-color: rgba(175, 184, 193, 0.2);
    padding: 0.2em 0.4em;
    border-radius: 6px;
    font-size: 85%;
}

pre {
    background-color: #f6f8fa;
    border-radius: 6px;
    padding: 16px;
    overflow: auto;
}

pre code {
    background: none;
    padding: 0;
    font-size: 85%;
}

table {
    border-collapse: collapse;
}

th, td {
    padding: 6px 13px;
    border: 1px solid #d0d7de;
}

del {
    color: #656d76;
}

hr {
    height: 0.25em;
    padding: 0;
    margin: 24px 0;
    background-color: #d0d7de;
    border: 0;
}
"#;

//! Escaping and formatting helpers for generated Markdown

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that would end or split a Markdown link destination
const LINK_DESTINATION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>');

/// Fold text onto a single line, collapsing whitespace runs to one space
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape text used inside `[...]`
pub fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in single_line(text).chars() {
        if matches!(c, '\\' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Percent-encode the characters that break `(...)` link destinations
pub fn escape_link_destination(url: &str) -> String {
    utf8_percent_encode(url.trim(), LINK_DESTINATION).to_string()
}

/// `[![alt](image)](link)`
pub fn badge_link(alt: &str, image: &str, link: &str) -> String {
    format!(
        "[![{}]({})]({})",
        escape_link_text(alt),
        escape_link_destination(image),
        escape_link_destination(link)
    )
}

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap content in a fenced code block
///
/// The fence is one backtick longer than any backtick run inside the content
/// (never shorter than three), so the content cannot close it early.
pub fn fenced_block(language: &str, content: &str) -> String {
    let longest_run = content
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat((longest_run + 1).max(3));

    format!("{fence}{language}\n{}\n{fence}", content.trim_end())
}

/// Treat whitespace-only text as absent
pub fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.trim_end())
    }
}

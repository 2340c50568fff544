// src/ports/html.rs
use html_escape::{encode_double_quoted_attribute, encode_text};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Node};
use tracing::instrument;

use crate::constants::{HEADING_MARGIN_STYLE, PARAGRAPH_MARGIN_STYLE};

lazy_static! {
    static ref BARE_URL_REGEX: Regex =
        Regex::new(r"https?://\S+").expect("Failed to compile bare URL regex");
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parents whose text is never auto-linked
const NO_LINKIFY_PARENTS: &[&str] = &["a", "script", "style"];

/// Style properties Keep sprinkles over its HTML that notes should not inherit
const DROPPED_STYLE_PREFIXES: &[&str] = &["font-family", "font-size"];

/// Normalize Keep rich-text HTML into a body-level fragment.
///
/// Headings and paragraphs get spacing appended to their inline style, font
/// declarations are stripped from every style attribute and bare URLs in text
/// become links. Empty input yields an empty string. Top-level text is kept
/// as-is, not wrapped in an implicit `<p>`.
#[instrument(level = "trace", skip(html), ret)]
pub fn sanitize_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.root_element(), &mut out);
    out
}

/// Drop empty and font declarations, re-joining the rest as `a; b;`.
///
/// Returns `None` when nothing survives, meaning the attribute should go.
pub fn clean_style(style: &str) -> Option<String> {
    let kept: Vec<&str> = style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| !DROPPED_STYLE_PREFIXES.iter().any(|p| decl.starts_with(p)))
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(format!("{};", kept.join("; ")))
    }
}

/// Escape `text` and wrap every bare http(s) URL in a link to itself
pub fn linkify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for url in BARE_URL_REGEX.find_iter(text) {
        out.push_str(&encode_text(&text[last..url.start()]));
        out.push_str("<a href=\"");
        out.push_str(&encode_double_quoted_attribute(url.as_str()));
        out.push_str("\">");
        out.push_str(&encode_text(url.as_str()));
        out.push_str("</a>");
        last = url.end();
    }
    out.push_str(&encode_text(&text[last..]));
    out
}

fn spacing_for(name: &str) -> Option<&'static str> {
    match name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(HEADING_MARGIN_STYLE),
        "p" => Some(PARAGRAPH_MARGIN_STYLE),
        _ => None,
    }
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    let parent = element.value().name();

    for child in element.children() {
        match child.value() {
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    write_element(child_element, out);
                }
            }
            Node::Text(text) => write_text(text, parent, out),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let value = element.value();
    let name = value.name();

    out.push('<');
    out.push_str(name);

    let mut style: Option<String> = None;
    for (attr, attr_value) in value.attrs() {
        if attr == "style" {
            style = Some(attr_value.to_string());
            continue;
        }
        push_attribute(out, attr, attr_value);
    }

    if let Some(spacing) = spacing_for(name) {
        style = Some(match style {
            Some(existing) => format!("{existing};{spacing}"),
            None => spacing.to_string(),
        });
    }
    if let Some(cleaned) = style.as_deref().and_then(clean_style) {
        push_attribute(out, "style", &cleaned);
    }

    if VOID_ELEMENTS.contains(&name) {
        out.push_str("/>");
        return;
    }

    out.push('>');
    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_text(text: &str, parent: &str, out: &mut String) {
    match parent {
        "script" | "style" => out.push_str(text),
        _ if NO_LINKIFY_PARENTS.contains(&parent) => out.push_str(&encode_text(text)),
        _ => out.push_str(&linkify(text)),
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

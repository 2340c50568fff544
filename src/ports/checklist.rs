// src/ports/checklist.rs
use html_escape::encode_text;

use crate::domain::{ListItem, NoteColor};
use crate::ports::html::sanitize_html;

const CHECKED_BOX: char = '☑';
const UNCHECKED_BOX: char = '☐';

/// Render Keep list items as one box-prefixed line each, inside a container
/// styled with the note color. Items with blank text are dropped.
pub fn render_checklist(items: &[ListItem], color: &NoteColor) -> String {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!(
        r#"<div style="{}">"#,
        color.style().checklist_style()
    ));

    for item in items {
        let text = item.text.trim();
        if text.is_empty() {
            continue;
        }

        let rich = item.text_html.as_deref().map(sanitize_html).unwrap_or_default();
        let content = if rich.is_empty() {
            encode_text(text).into_owned()
        } else {
            rich
        };
        let glyph = if item.is_checked {
            CHECKED_BOX
        } else {
            UNCHECKED_BOX
        };

        lines.push(format!("<div>{glyph} {content}</div>"));
    }

    lines.push("</div>".to_string());
    lines.join("\n")
}

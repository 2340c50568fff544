// src/ports/enex.rs
use html_escape::encode_text;
use tracing::instrument;

use crate::constants::{
    BODY_CONTAINER_STYLE, EXPORT_APPLICATION, EXPORT_DTD, NOTE_DTD, NOTE_SOURCE,
    PARAGRAPH_MARGIN_STYLE,
};
use crate::domain::{DomainError, KeepNote, NoteContent};
use crate::ports::checklist::render_checklist;
use crate::ports::html::sanitize_html;
use crate::ports::metadata::{note_attributes, note_tags, tag_xml, NoteAttribute};
use crate::util::time::format_usec_timestamp;

pub const ARCHIVE_FOOTER: &str = "\n</en-export>";

/// One converted note, ready to be written as a `<note>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct EnexNote {
    pub title: String,
    pub style: String,
    pub content: String,
    pub created: String,
    pub updated: String,
    pub attributes: Vec<NoteAttribute>,
    pub tags: Vec<String>,
}

impl EnexNote {
    #[instrument(level = "debug", skip(note), fields(title = %note.title))]
    pub fn from_keep(note: &KeepNote) -> Result<Self, DomainError> {
        Ok(Self {
            title: note.title.clone(),
            style: note.color.style().note_style(),
            content: render_content(note),
            created: format_usec_timestamp(note.created_timestamp_usec)?,
            updated: format_usec_timestamp(note.user_edited_timestamp_usec)?,
            attributes: note_attributes(note),
            tags: note_tags(note),
        })
    }

    pub fn to_xml(&self) -> String {
        let attributes = self
            .attributes
            .iter()
            .map(NoteAttribute::to_xml)
            .collect::<Vec<_>>()
            .join("\n            ");

        let tags = if self.tags.is_empty() {
            String::new()
        } else {
            let tags = self
                .tags
                .iter()
                .map(|tag| tag_xml(tag))
                .collect::<Vec<_>>()
                .join("\n        ");
            format!("<tags>\n        {tags}\n    </tags>")
        };

        format!(
            r#"
    <note>
        <title>{title}</title>
        <content>
            <![CDATA[<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE en-note SYSTEM "{note_dtd}">
<en-note style="{style}">
{content}
</en-note>]]>
        </content>
        <created>{created}</created>
        <updated>{updated}</updated>
        <note-attributes>
            <source>{source}</source>
            <source-url></source-url>
            {attributes}
        </note-attributes>
        {tags}
    </note>"#,
            title = encode_text(&self.title),
            note_dtd = NOTE_DTD,
            style = self.style,
            content = escape_cdata(&self.content),
            created = self.created,
            updated = self.updated,
            source = NOTE_SOURCE,
        )
    }
}

/// Body markup for the note's single content representation
pub fn render_content(note: &KeepNote) -> String {
    match note.content() {
        NoteContent::Checklist(items) => render_checklist(items, &note.color),
        NoteContent::Html(html) => {
            format!(
                r#"<div style="{BODY_CONTAINER_STYLE}">{}</div>"#,
                sanitize_html(html)
            )
        }
        NoteContent::Text(text) => render_plain_text(text),
        NoteContent::Empty => String::new(),
    }
}

/// Non-blank lines become paragraphs, blank lines become `<br/>`
pub fn render_plain_text(text: &str) -> String {
    let fragments: Vec<String> = text
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                "<br/>".to_string()
            } else {
                format!(
                    r#"<p style="{PARAGRAPH_MARGIN_STYLE}">{}</p>"#,
                    encode_text(line)
                )
            }
        })
        .collect();

    format!(
        r#"<div style="{BODY_CONTAINER_STYLE}">{}</div>"#,
        fragments.join(" ")
    )
}

pub fn archive_header(export_date: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE en-export SYSTEM "{EXPORT_DTD}">
<en-export export-date="{export_date}" application="{EXPORT_APPLICATION}" version="1.0">"#
    )
}

/// Wrap note fragments in one `<en-export>` document
pub fn render_archive(export_date: &str, fragments: &[String]) -> String {
    let mut archive = archive_header(export_date);
    for fragment in fragments {
        archive.push_str(fragment);
    }
    archive.push_str(ARCHIVE_FOOTER);
    archive
}

/// Keep a literal `]]>` from terminating the surrounding CDATA section
fn escape_cdata(content: &str) -> String {
    content.replace("]]>", "]]]]><![CDATA[>")
}

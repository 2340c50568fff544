// src/ports/metadata.rs
use html_escape::encode_text;
use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::KeepNote;

lazy_static! {
    static ref HASHTAG_REGEX: Regex =
        Regex::new(r"#(\w+)").expect("Failed to compile hashtag regex");
}

/// One element inside `<note-attributes>`, after `<source>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAttribute {
    Pinned,
    Archived,
    Tag(String),
}

impl NoteAttribute {
    pub fn to_xml(&self) -> String {
        match self {
            NoteAttribute::Pinned => "<pinned>true</pinned>".to_string(),
            NoteAttribute::Archived => "<archived>true</archived>".to_string(),
            NoteAttribute::Tag(tag) => tag_xml(tag),
        }
    }
}

pub fn tag_xml(tag: &str) -> String {
    format!("<tag>{}</tag>", encode_text(tag))
}

fn type_tag(note: &KeepNote) -> &'static str {
    if note.is_checklist() {
        "list"
    } else {
        "note"
    }
}

/// Pinned, archived, color tag, type tag; in that order
pub fn note_attributes(note: &KeepNote) -> Vec<NoteAttribute> {
    let mut attributes = Vec::new();
    if note.is_pinned {
        attributes.push(NoteAttribute::Pinned);
    }
    if note.is_archived {
        attributes.push(NoteAttribute::Archived);
    }
    if let Some(color_tag) = note.color.tag() {
        attributes.push(NoteAttribute::Tag(color_tag));
    }
    attributes.push(NoteAttribute::Tag(type_tag(note).to_string()));
    attributes
}

/// Color tag, type tag, then lowercased hashtags of the plain-text body.
///
/// Only `textContent` is scanned, and repeated hashtags are kept.
pub fn note_tags(note: &KeepNote) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(color_tag) = note.color.tag() {
        tags.push(color_tag);
    }
    tags.push(type_tag(note).to_string());
    tags.extend(extract_hashtags(note.text_content.as_deref().unwrap_or_default()));
    tags
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

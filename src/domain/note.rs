// src/domain/note.rs
use serde::Deserialize;

use crate::constants::DEFAULT_TITLE;
use crate::domain::NoteColor;

/// One note of a Google Keep (Takeout) export, defaults applied at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepNote {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub color: NoteColor,
    #[serde(default)]
    pub created_timestamp_usec: i64,
    #[serde(default)]
    pub user_edited_timestamp_usec: i64,
    #[serde(default)]
    pub is_trashed: bool,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub list_content: Option<Vec<ListItem>>,
    #[serde(default)]
    pub text_content_html: Option<String>,
    #[serde(default)]
    pub text_content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_checked: bool,
    #[serde(default)]
    pub text_html: Option<String>,
}

/// The single body representation rendered for a note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteContent<'a> {
    Checklist(&'a [ListItem]),
    Html(&'a str),
    Text(&'a str),
    Empty,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl KeepNote {
    /// Body to render: checklist wins over HTML, HTML over plain text
    pub fn content(&self) -> NoteContent<'_> {
        if let Some(items) = &self.list_content {
            NoteContent::Checklist(items)
        } else if let Some(html) = &self.text_content_html {
            NoteContent::Html(html)
        } else if let Some(text) = &self.text_content {
            NoteContent::Text(text)
        } else {
            NoteContent::Empty
        }
    }

    pub fn is_checklist(&self) -> bool {
        self.list_content.is_some()
    }
}

impl Default for KeepNote {
    fn default() -> Self {
        Self {
            title: default_title(),
            color: NoteColor::Default,
            created_timestamp_usec: 0,
            user_edited_timestamp_usec: 0,
            is_trashed: false,
            is_pinned: false,
            is_archived: false,
            list_content: None,
            text_content_html: None,
            text_content: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_object_when_deserializing_then_applies_defaults() {
        let note: KeepNote = serde_json::from_str("{}").unwrap();

        assert_eq!(note.title, "Untitled");
        assert_eq!(note.color, NoteColor::Default);
        assert_eq!(note.created_timestamp_usec, 0);
        assert_eq!(note.user_edited_timestamp_usec, 0);
        assert!(!note.is_trashed);
        assert!(!note.is_pinned);
        assert!(!note.is_archived);
        assert_eq!(note.content(), NoteContent::Empty);
    }

    #[test]
    fn given_keep_export_when_deserializing_then_reads_camel_case_fields() {
        let json = r#"{
            "title": "Groceries",
            "color": "GREEN",
            "isPinned": true,
            "createdTimestampUsec": 1582955199253000,
            "listContent": [
                {"text": "Milk", "isChecked": true},
                {"text": "Eggs", "textHtml": "<b>Eggs</b>", "isChecked": false}
            ]
        }"#;

        let note: KeepNote = serde_json::from_str(json).unwrap();

        assert_eq!(note.title, "Groceries");
        assert_eq!(note.color, NoteColor::Green);
        assert!(note.is_pinned);
        assert_eq!(note.created_timestamp_usec, 1582955199253000);
        let items = note.list_content.as_deref().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_checked);
        assert_eq!(items[1].text_html.as_deref(), Some("<b>Eggs</b>"));
    }

    #[test]
    fn given_all_bodies_present_when_resolving_content_then_checklist_wins() {
        let note = KeepNote {
            list_content: Some(vec![ListItem::default()]),
            text_content_html: Some("<p>html</p>".to_string()),
            text_content: Some("text".to_string()),
            ..Default::default()
        };

        assert!(matches!(note.content(), NoteContent::Checklist(_)));
        assert!(note.is_checklist());
    }

    #[test]
    fn given_html_and_text_when_resolving_content_then_html_wins() {
        let note = KeepNote {
            text_content_html: Some("<p>html</p>".to_string()),
            text_content: Some("text".to_string()),
            ..Default::default()
        };

        assert_eq!(note.content(), NoteContent::Html("<p>html</p>"));
        assert!(!note.is_checklist());
    }

    #[test]
    fn given_empty_checklist_when_resolving_content_then_still_checklist() {
        let note: KeepNote = serde_json::from_str(r#"{"listContent": []}"#).unwrap();

        assert!(matches!(note.content(), NoteContent::Checklist(items) if items.is_empty()));
    }

    #[test]
    fn given_wrong_field_type_when_deserializing_then_fails() {
        let result = serde_json::from_str::<KeepNote>(r#"{"isPinned": "yes"}"#);

        assert!(result.is_err());
    }
}

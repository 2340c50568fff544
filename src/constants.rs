// src/constants.rs
//
// Fixed values of the ENEX output format and the export policy.

/// Records per archive file when splitting, also the count above which splitting kicks in.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// File name stem of written archives (`<stem>.enex` or `<stem>_<n>.enex`).
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_FILE_STEM: &str = "keep_notes_export";

pub const ENEX_EXTENSION: &str = "enex";

/// Value of the `application` attribute on `<en-export>`.
pub const EXPORT_APPLICATION: &str = "keep-to-notes";

/// Value of `<source>` in every note's attributes.
pub const NOTE_SOURCE: &str = "Google Keep";

pub const DEFAULT_TITLE: &str = "Untitled";

pub const ENEX_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

pub const EXPORT_DTD: &str = "http://xml.evernote.com/pub/evernote-export3.dtd";
pub const NOTE_DTD: &str = "http://xml.evernote.com/pub/enml2.dtd";

/// Spacing appended to heading styles by the HTML normalizer.
pub const HEADING_MARGIN_STYLE: &str = "margin-top: 1.2em; margin-bottom: 0.8em;";

/// Spacing appended to paragraph styles, also used for plain-text paragraphs.
pub const PARAGRAPH_MARGIN_STYLE: &str = "margin-bottom: 0.8em;";

/// Container around HTML and plain-text note bodies.
pub const BODY_CONTAINER_STYLE: &str = "padding: 8px;";

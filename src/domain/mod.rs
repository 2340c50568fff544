// src/domain/mod.rs
pub mod color;
pub mod error;
pub mod note;
pub mod outcome;

pub use color::{ColorStyle, NoteColor};
pub use error::DomainError;
pub use note::{KeepNote, ListItem, NoteContent};
pub use outcome::{RecordOutcome, SkipReason};

// src/ports/mod.rs
pub mod checklist;
pub mod enex;
pub mod html;
pub mod metadata;

pub use enex::EnexNote;

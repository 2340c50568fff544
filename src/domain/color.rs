// src/domain/color.rs
use serde::Deserialize;

/// Background theme of a Keep note.
///
/// Identifiers outside the known palette are kept verbatim in `Other` so the
/// color tag still reflects the source value; they style as `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum NoteColor {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    DarkBlue,
    Purple,
    Pink,
    Brown,
    Gray,
    Other(String),
}

/// Background, border and text color of one palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

const fn style(background: &'static str, border: &'static str, text: &'static str) -> ColorStyle {
    ColorStyle {
        background,
        border,
        text,
    }
}

impl NoteColor {
    pub fn as_str(&self) -> &str {
        match self {
            NoteColor::Default => "DEFAULT",
            NoteColor::Red => "RED",
            NoteColor::Orange => "ORANGE",
            NoteColor::Yellow => "YELLOW",
            NoteColor::Green => "GREEN",
            NoteColor::Teal => "TEAL",
            NoteColor::Blue => "BLUE",
            NoteColor::DarkBlue => "DARK_BLUE",
            NoteColor::Purple => "PURPLE",
            NoteColor::Pink => "PINK",
            NoteColor::Brown => "BROWN",
            NoteColor::Gray => "GRAY",
            NoteColor::Other(name) => name,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, NoteColor::Default)
    }

    pub fn style(&self) -> ColorStyle {
        match self {
            NoteColor::Default | NoteColor::Other(_) => style("#ffffff", "#e0e0e0", "#000000"),
            NoteColor::Red => style("#f28b82", "#d84c3b", "#5c1e18"),
            NoteColor::Orange => style("#fbbc04", "#d69100", "#5c4001"),
            NoteColor::Yellow => style("#fff475", "#f2c600", "#5c4a00"),
            NoteColor::Green => style("#ccff90", "#7cb342", "#2e4014"),
            NoteColor::Teal => style("#a7ffeb", "#00bfa5", "#004c41"),
            NoteColor::Blue => style("#cbf0f8", "#4fc3f7", "#0b5e7c"),
            NoteColor::DarkBlue => style("#aecbfa", "#4285f4", "#0d2c6b"),
            NoteColor::Purple => style("#d7aefb", "#ab47bc", "#42174d"),
            NoteColor::Pink => style("#fdcfe8", "#f06292", "#6e1b3c"),
            NoteColor::Brown => style("#e6c9a8", "#b57d4f", "#4c2b15"),
            NoteColor::Gray => style("#e8eaed", "#9aa0a6", "#3c4043"),
        }
    }

    /// `color-<name>` for every non-default color
    pub fn tag(&self) -> Option<String> {
        if self.is_default() {
            None
        } else {
            Some(format!("color-{}", self.as_str().to_lowercase()))
        }
    }
}

impl From<String> for NoteColor {
    fn from(name: String) -> Self {
        match name.as_str() {
            "DEFAULT" => NoteColor::Default,
            "RED" => NoteColor::Red,
            "ORANGE" => NoteColor::Orange,
            "YELLOW" => NoteColor::Yellow,
            "GREEN" => NoteColor::Green,
            "TEAL" => NoteColor::Teal,
            "BLUE" => NoteColor::Blue,
            "DARK_BLUE" => NoteColor::DarkBlue,
            "PURPLE" => NoteColor::Purple,
            "PINK" => NoteColor::Pink,
            "BROWN" => NoteColor::Brown,
            "GRAY" => NoteColor::Gray,
            _ => NoteColor::Other(name),
        }
    }
}

impl ColorStyle {
    /// Inline style for the whole `<en-note>`
    pub fn note_style(&self) -> String {
        format!(
            "background-color: {}; color: {}; border: 1px solid {};",
            self.background, self.text, self.border
        )
    }

    /// Inline style for the container around checklist items
    pub fn checklist_style(&self) -> String {
        format!(
            "background-color: {}; border: 1px solid {}; border-radius: 8px; padding: 12px; margin-bottom: 15px;",
            self.background, self.border
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("DEFAULT", NoteColor::Default)]
    #[case("RED", NoteColor::Red)]
    #[case("DARK_BLUE", NoteColor::DarkBlue)]
    #[case("GRAY", NoteColor::Gray)]
    fn given_known_identifier_when_parsing_then_maps_to_variant(
        #[case] name: &str,
        #[case] expected: NoteColor,
    ) {
        assert_eq!(NoteColor::from(name.to_string()), expected);
    }

    #[test]
    fn given_unknown_identifier_when_styling_then_falls_back_to_default() {
        let color = NoteColor::from("CERULEAN".to_string());

        assert_eq!(color, NoteColor::Other("CERULEAN".to_string()));
        assert_eq!(color.style(), NoteColor::Default.style());
    }

    #[test]
    fn given_default_color_when_tagging_then_returns_none() {
        assert_eq!(NoteColor::Default.tag(), None);
    }

    #[test]
    fn given_dark_blue_when_tagging_then_lowercases_identifier() {
        assert_eq!(NoteColor::DarkBlue.tag(), Some("color-dark_blue".to_string()));
    }

    #[test]
    fn given_red_when_building_note_style_then_includes_all_three_colors() {
        let style = NoteColor::Red.style().note_style();

        assert_eq!(
            style,
            "background-color: #f28b82; color: #5c1e18; border: 1px solid #d84c3b;"
        );
    }

    #[test]
    fn given_yellow_when_building_checklist_style_then_omits_text_color() {
        let style = NoteColor::Yellow.style().checklist_style();

        assert!(style.starts_with("background-color: #fff475; border: 1px solid #f2c600;"));
        assert!(!style.contains("#5c4a00"));
    }

    #[test]
    fn given_json_string_when_deserializing_then_uses_from_string() {
        let color: NoteColor = serde_json::from_str("\"TEAL\"").unwrap();
        assert_eq!(color, NoteColor::Teal);
    }
}

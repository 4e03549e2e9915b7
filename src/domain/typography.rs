use serde::{Deserialize, Serialize};

/// Default text color outside the sidebar. The sidebar renders on a white
/// background and falls back to black instead; see `render::style`.
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// The closed set of weight steps the admin panel offers. Serialized as the
/// numeric CSS value so blobs saved by older builds load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u16", into = "u16")]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
    Black,
}

impl FontWeight {
    pub fn as_number(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(w: FontWeight) -> u16 {
        w.as_number()
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = String;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        match value {
            100 => Ok(FontWeight::Thin),
            300 => Ok(FontWeight::Light),
            400 => Ok(FontWeight::Regular),
            500 => Ok(FontWeight::Medium),
            700 => Ok(FontWeight::Bold),
            900 => Ok(FontWeight::Black),
            other => Err(format!("unsupported font weight: {}", other)),
        }
    }
}

/// A reusable style descriptor. Every text-bearing site field carries its
/// own independently configurable instance.
///
/// Each field has a serde default, so a partially stored style merges
/// field-by-field over the defaults when loaded. Saved data from before a
/// schema addition therefore never produces an undefined sub-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyle {
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "default_line_height")]
    pub line_height: f32,

    /// Em units; zero or negative is valid (tight tracking).
    #[serde(default)]
    pub letter_spacing: f32,

    #[serde(default)]
    pub font_weight: FontWeight,

    #[serde(default = "default_color")]
    pub color: String,
}

fn default_font_size() -> f32 {
    16.0
}

fn default_line_height() -> f32 {
    1.2
}

fn default_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

impl Default for TypographyStyle {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            line_height: default_line_height(),
            letter_spacing: 0.0,
            font_weight: FontWeight::Regular,
            color: default_color(),
        }
    }
}

impl TypographyStyle {
    pub fn new(font_size: f32, font_weight: FontWeight, color: &str) -> Self {
        Self {
            font_size,
            font_weight,
            color: color.to_string(),
            ..Self::default()
        }
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = TypographyStyle::default();
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.line_height, 1.2);
        assert_eq!(style.letter_spacing, 0.0);
        assert_eq!(style.font_weight, FontWeight::Regular);
        assert_eq!(style.color, "#ffffff");
    }

    #[test]
    fn test_weight_round_trip() {
        for w in [
            FontWeight::Thin,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Bold,
            FontWeight::Black,
        ] {
            let json = serde_json::to_string(&w).unwrap();
            let back: FontWeight = serde_json::from_str(&json).unwrap();
            assert_eq!(w, back);
        }
    }

    #[test]
    fn test_weight_serializes_as_number() {
        let json = serde_json::to_string(&FontWeight::Black).unwrap();
        assert_eq!(json, "900");
    }

    #[test]
    fn test_weight_rejects_off_scale_value() {
        assert!(serde_json::from_str::<FontWeight>("450").is_err());
    }

    #[test]
    fn test_partial_style_fills_defaults() {
        // Saved before letterSpacing/fontWeight existed
        let json = r##"{"fontSize": 64, "color": "#ff4d00"}"##;
        let style: TypographyStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.font_size, 64.0);
        assert_eq!(style.color, "#ff4d00");
        assert_eq!(style.line_height, 1.2);
        assert_eq!(style.letter_spacing, 0.0);
        assert_eq!(style.font_weight, FontWeight::Regular);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_string(&TypographyStyle::default()).unwrap();
        assert!(json.contains("\"fontSize\""));
        assert!(json.contains("\"lineHeight\""));
        assert!(json.contains("\"letterSpacing\""));
        assert!(json.contains("\"fontWeight\""));
    }
}

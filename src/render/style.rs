//! Rendering-time resolution of [`TypographyStyle`] values: falsy-field
//! fallbacks and the narrow-viewport size transform. Stored styles are
//! never modified here.

use crate::domain::TypographyStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

/// Concrete values ready for a renderer: no missing fields, weight as the
/// numeric step.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub font_weight: u16,
    pub color: String,
}

/// Below this configured size the mobile transform does not apply.
const MOBILE_SCALE_THRESHOLD: f32 = 40.0;
const MOBILE_SCALE_FACTOR: f32 = 0.6;
const MOBILE_MIN_SIZE: f32 = 32.0;

/// The narrow-viewport rule: configured sizes above the threshold shrink
/// to `max(32, size * 0.6)`. Applied only to mobile-scalable call sites.
pub fn effective_font_size(size: f32, viewport: Viewport) -> f32 {
    if viewport == Viewport::Mobile && size > MOBILE_SCALE_THRESHOLD {
        (size * MOBILE_SCALE_FACTOR).max(MOBILE_MIN_SIZE)
    } else {
        size
    }
}

fn resolve_with(style: &TypographyStyle, fallback_color: &str, font_size: f32) -> ResolvedStyle {
    ResolvedStyle {
        font_size,
        line_height: if style.line_height > 0.0 {
            style.line_height
        } else {
            1.2
        },
        letter_spacing: style.letter_spacing,
        font_weight: style.font_weight.as_number(),
        color: if style.color.is_empty() {
            fallback_color.to_string()
        } else {
            style.color.clone()
        },
    }
}

/// Resolve a style for a dark-background field; no viewport scaling.
pub fn resolve(style: &TypographyStyle) -> ResolvedStyle {
    resolve_with(style, "#ffffff", style.font_size)
}

/// Resolve a mobile-scalable field for the given viewport.
pub fn resolve_scaled(style: &TypographyStyle, viewport: Viewport) -> ResolvedStyle {
    resolve_with(
        style,
        "#ffffff",
        effective_font_size(style.font_size, viewport),
    )
}

/// Resolve for the sidebar, which sits on a white background and falls
/// back to black.
pub fn resolve_sidebar(style: &TypographyStyle) -> ResolvedStyle {
    resolve_with(style, "#000000", style.font_size)
}

impl ResolvedStyle {
    /// Same style with the color replaced; used where a page section
    /// forces a color regardless of the configured one.
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }
}

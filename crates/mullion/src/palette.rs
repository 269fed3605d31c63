//! Resolved drawing colors.

use mullion_core::color::Color;

use crate::{
    config::{StyleConfig, parse_color},
    params::Axis,
};

/// Every color, opacity and font a frame drawing is painted with.
///
/// Built once from a [`StyleConfig`], so a drawing never has to deal with an
/// unparsable color.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    background: Option<Color>,
    frame: Color,
    vertical_auto: Color,
    vertical_custom: Color,
    horizontal_auto: Color,
    horizontal_custom: Color,
    thickness_line: Color,
    annotation: Color,
    fill_opacity: f32,
    font_family: String,
}

impl Palette {
    /// Resolves the configured colors, falling back to the defaults for unset
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first color string that does not parse.
    pub fn from_style(style: &StyleConfig) -> Result<Self, String> {
        let defaults = Self::default();
        let pick = |field: &str, value: Option<&str>, fallback: Color| {
            parse_color(field, value).map(|color| color.unwrap_or(fallback))
        };

        Ok(Self {
            background: style.background_color()?,
            frame: pick("frame", style.frame(), defaults.frame)?,
            vertical_auto: pick("vertical_auto", style.vertical_auto(), defaults.vertical_auto)?,
            vertical_custom: pick(
                "vertical_custom",
                style.vertical_custom(),
                defaults.vertical_custom,
            )?,
            horizontal_auto: pick(
                "horizontal_auto",
                style.horizontal_auto(),
                defaults.horizontal_auto,
            )?,
            horizontal_custom: pick(
                "horizontal_custom",
                style.horizontal_custom(),
                defaults.horizontal_custom,
            )?,
            thickness_line: pick(
                "thickness_line",
                style.thickness_line(),
                defaults.thickness_line,
            )?,
            annotation: pick("annotation", style.annotation(), defaults.annotation)?,
            fill_opacity: style.fill_opacity().clamp(0.0, 1.0),
            font_family: style.font_family().to_string(),
        })
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Color of the frame outline, center lines and dimension labels.
    pub fn frame(&self) -> Color {
        self.frame
    }

    /// Body color of a divider on `axis`.
    pub fn divider(&self, axis: Axis, is_custom: bool) -> Color {
        match (axis, is_custom) {
            (Axis::Vertical, false) => self.vertical_auto,
            (Axis::Vertical, true) => self.vertical_custom,
            (Axis::Horizontal, false) => self.horizontal_auto,
            (Axis::Horizontal, true) => self.horizontal_custom,
        }
    }

    pub fn thickness_line(&self) -> Color {
        self.thickness_line
    }

    /// Color of spacing and thickness annotations.
    pub fn annotation(&self) -> Color {
        self.annotation
    }

    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

impl Default for Palette {
    fn default() -> Self {
        let parse = |value: &str| Color::new(value).unwrap_or_default();
        Self {
            background: None,
            frame: Color::default(),
            vertical_auto: parse("#ff0000"),
            vertical_custom: parse("#ff6600"),
            horizontal_auto: parse("#0000ff"),
            horizontal_custom: parse("#6600ff"),
            thickness_line: parse("#888888"),
            annotation: parse("#333333"),
            fill_opacity: 0.3,
            font_family: "sans-serif".to_string(),
        }
    }
}

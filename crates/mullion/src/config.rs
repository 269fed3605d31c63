//! Configuration types for frame drawing.
//!
//! This module provides configuration structures that control where a frame
//! drawing is fitted and how it is styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources, and
//! every field falls back to a default when absent.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining viewport and style settings.
//! - [`ViewportConfig`] - The area a drawing is fitted into.
//! - [`StyleConfig`] - Colors, opacity and font of the drawing.
//!
//! # Example
//!
//! ```
//! # use mullion::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.viewport().width(), 800.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use mullion_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

/// Top-level application configuration combining viewport and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Viewport configuration section.
    #[serde(default)]
    viewport: ViewportConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified viewport and style configurations.
    ///
    /// # Arguments
    ///
    /// * `viewport` - Area the drawing is fitted into.
    /// * `style` - Visual styling options.
    pub fn new(viewport: ViewportConfig, style: StyleConfig) -> Self {
        Self { viewport, style }
    }

    /// Returns the viewport configuration.
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// The drawing surface a computed layout is fitted into.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    width: f32,
    height: f32,
    /// Space kept free on every side when the drawing has to be scaled down.
    padding: f32,
}

impl ViewportConfig {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// The viewport as bounds anchored at the origin.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), Size::new(self.width, self.height))
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new(800.0, 600.0, 50.0)
    }
}

/// Visual styling configuration for rendered drawings.
///
/// Color fields hold CSS color strings and are only validated when a
/// [`Palette`](crate::Palette) is built from them. Unset colors fall back to
/// the drawing defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background [`Color`] of the exported document, as a color string.
    background_color: Option<String>,
    /// Opacity of profile bodies.
    fill_opacity: f32,
    font_family: String,
    frame: Option<String>,
    vertical_auto: Option<String>,
    vertical_custom: Option<String>,
    horizontal_auto: Option<String>,
    horizontal_custom: Option<String>,
    thickness_line: Option<String>,
    annotation: Option<String>,
}

impl StyleConfig {
    /// Returns a copy with the given background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = opacity;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Overrides the colors of automatically placed dividers.
    pub fn with_auto_colors(
        mut self,
        vertical: impl Into<String>,
        horizontal: impl Into<String>,
    ) -> Self {
        self.vertical_auto = Some(vertical.into());
        self.horizontal_auto = Some(horizontal.into());
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background_color", self.background_color.as_deref())
    }

    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    pub fn vertical_auto(&self) -> Option<&str> {
        self.vertical_auto.as_deref()
    }

    pub fn vertical_custom(&self) -> Option<&str> {
        self.vertical_custom.as_deref()
    }

    pub fn horizontal_auto(&self) -> Option<&str> {
        self.horizontal_auto.as_deref()
    }

    pub fn horizontal_custom(&self) -> Option<&str> {
        self.horizontal_custom.as_deref()
    }

    pub fn thickness_line(&self) -> Option<&str> {
        self.thickness_line.as_deref()
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            fill_opacity: 0.3,
            font_family: "sans-serif".to_string(),
            frame: None,
            vertical_auto: None,
            vertical_custom: None,
            horizontal_auto: None,
            horizontal_custom: None,
            thickness_line: None,
            annotation: None,
        }
    }
}

/// Parses an optional color string, naming the offending `field` on failure.
pub(crate) fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.viewport().width(), 800.0);
        assert_eq!(config.viewport().height(), 600.0);
        assert_eq!(config.viewport().padding(), 50.0);
        assert_eq!(config.style().fill_opacity(), 0.3);
        assert_eq!(config.style().font_family(), "sans-serif");
        assert_eq!(config.style().background_color(), Ok(None));
        assert!(config.style().frame().is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [viewport]
            width = 1024

            [style]
            background_color = "white"
            vertical_custom = "#00aa00"
        "##,
        )
        .unwrap();

        assert_eq!(config.viewport().width(), 1024.0);
        assert_eq!(config.viewport().height(), 600.0);
        assert!(config.style().background_color().unwrap().is_some());
        assert_eq!(config.style().vertical_custom(), Some("#00aa00"));
        assert_eq!(config.style().fill_opacity(), 0.3);
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::default().with_background_color("not-a-color");
        let err = style.background_color().unwrap_err();
        assert!(err.contains("background_color"));
    }

    #[test]
    fn test_viewport_bounds() {
        let bounds = ViewportConfig::new(200.0, 100.0, 10.0).bounds();
        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.max_x(), 200.0);
        assert_eq!(bounds.max_y(), 100.0);
    }
}

//! Text styling and measurement for drawing annotations.
//!
//! # Overview
//!
//! - [`TextDefinition`] - font family, size, color and horizontal anchor of an annotation
//! - [`TextAnchor`] - which part of the text sits on the anchor point
//! - [`measure_text`] - font-metric based size of a piece of text
//!
//! Measurement uses `cosmic-text` with a lazily initialized, process-wide
//! font system. When no font can shape the text (for example on a machine
//! without system fonts) an estimate derived from the font size is used, so
//! bounding boxes are never empty for non-empty text.

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::{color::Color, geometry::Size};

/// Horizontal alignment of text relative to its anchor point.
///
/// Maps to the SVG `text-anchor` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the anchor point
    Start,
    /// Text is centered on the anchor point
    #[default]
    Middle,
    /// Text ends at the anchor point
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }

    /// Offset from the anchor point to the left edge of text of the given width
    pub fn left_offset(self, width: f32) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Middle => -width / 2.0,
            Self::End => -width,
        }
    }
}

/// Defines the visual style for a text annotation.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Color | black |
/// | Anchor | [`TextAnchor::Middle`] |
///
/// # Examples
///
/// ```
/// # use mullion_core::draw::{TextAnchor, TextDefinition};
/// # use mullion_core::color::Color;
/// let style = TextDefinition::new()
///     .with_font_size(8.0)
///     .with_color(Color::new("#333333").unwrap())
///     .with_anchor(TextAnchor::Start);
/// assert_eq!(style.font_size(), 8.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    color: Color,
    anchor: TextAnchor,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family (e.g., "Arial", "monospace").
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Sets the font size in drawing units.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Sets the text fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Returns a copy with the font size multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            font_size: self.font_size * factor,
            ..self.clone()
        }
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 12.0,
            color: Color::default(),
            anchor: TextAnchor::default(),
        }
    }
}

/// Measures `text` rendered with `definition`.
///
/// Returns a zero size for empty text.
pub fn measure_text(text: &str, definition: &TextDefinition) -> Size {
    TEXT_MANAGER
        .get_or_init(TextManager::new)
        .calculate_text_size(text, definition)
}

/// Ratio of average glyph advance to font size used when shaping yields nothing.
const FALLBACK_ADVANCE_RATIO: f32 = 0.55;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_RATIO: f32 = 1.15;

/// TextManager handles text measurement and font operations.
///
/// It keeps one `FontSystem` alive since creating it scans the system fonts.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() || text_def.font_size().is_nan() || text_def.font_size() <= 0.0 {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = text_def.font_size();
        let metrics = Metrics::new(font_size, font_size * LINE_HEIGHT_RATIO);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width <= 0.0 {
            let longest_line = text.lines().map(|line| line.chars().count()).max();
            let line_count = text.lines().count().max(1);
            max_width = longest_line.unwrap_or(0) as f32 * font_size * FALLBACK_ADVANCE_RATIO;
            total_height = line_count as f32 * metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

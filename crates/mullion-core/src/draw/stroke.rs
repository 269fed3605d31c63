//! Stroke and line-style definitions.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: color, width and dash style of an outline or line
//! - [`StrokeStyle`]: solid or dashed pattern
//! - [`apply_stroke!`](crate::apply_stroke!): Macro for applying stroke attributes to SVG elements
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"`, `"3,3"` |
//!
//! # Examples
//!
//! ```
//! use mullion_core::draw::StrokeDefinition;
//! use mullion_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("#888888").unwrap(), 1.0, 3.0, 3.0);
//! let line = svg_element::Line::new()
//!     .set("x1", 0)
//!     .set("y1", 0);
//!
//! let line = mullion_core::apply_stroke!(line, &stroke);
//! ```

use crate::color::Color;

/// Defines the dash pattern of a stroke.
///
/// # SVG Mapping
///
/// - `Solid`: No dasharray attribute
/// - `Dashed { dash, gap }`: `"{dash},{gap}"`
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Repeating dash of length `dash` followed by a gap of length `gap`
    Dashed { dash: f32, gap: f32 },
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed { dash, gap } => Some(format!("{dash},{gap}")),
        }
    }
}

/// A stroke definition for rendering lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke with the given dash and gap lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use mullion_core::draw::{StrokeDefinition, StrokeStyle};
    /// use mullion_core::color::Color;
    ///
    /// let stroke = StrokeDefinition::dashed(Color::default(), 2.0, 5.0, 5.0);
    /// assert_eq!(stroke.style().to_svg_value().as_deref(), Some("5,5"));
    /// ```
    pub fn dashed(color: Color, width: f32, dash: f32, gap: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed { dash, gap },
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns a copy with the width multiplied by `factor`.
    ///
    /// The dash pattern is left untouched.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            ..*self
        }
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width and, for dashed styles, the dash pattern.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color(), Color::default());
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.0, 3.0, 3.0);
        assert_eq!(
            *dashed.style(),
            StrokeStyle::Dashed {
                dash: 3.0,
                gap: 3.0
            }
        );
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(
            StrokeStyle::Dashed { dash: 5.0, gap: 5.0 }.to_svg_value(),
            Some("5,5".to_string())
        );
        assert_eq!(
            StrokeStyle::Dashed { dash: 2.5, gap: 1.0 }.to_svg_value(),
            Some("2.5,1".to_string())
        );
    }

    #[test]
    fn test_stroke_scaled_keeps_pattern() {
        let stroke = StrokeDefinition::dashed(Color::default(), 2.0, 5.0, 5.0);
        let scaled = stroke.scaled(0.5);
        assert_eq!(scaled.width(), 1.0);
        assert_eq!(scaled.style(), stroke.style());
        assert_eq!(scaled.color(), stroke.color());
    }

    #[test]
    fn test_apply_stroke_sets_dasharray_only_when_dashed() {
        let solid = StrokeDefinition::solid(Color::default(), 2.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &solid);
        assert!(!line.to_string().contains("stroke-dasharray"));

        let dashed = StrokeDefinition::dashed(Color::default(), 1.0, 3.0, 3.0);
        let line = crate::apply_stroke!(svg_element::Line::new(), &dashed);
        let rendered = line.to_string();
        assert!(rendered.contains("stroke-dasharray=\"3,3\""));
        assert!(rendered.contains("stroke-width=\"1\""));
    }
}

//! SVG export.
//!
//! The document's `viewBox` is the configured viewport, so a fitted scene
//! lands exactly where the fitter put it. Shapes and labels are emitted in
//! two `<g data-layer>` groups; no other shape elements are added, so the
//! document holds exactly one `rect`, `line` or `text` element per primitive.

use log::debug;
use svg::Document;

use mullion_core::{color::Color, draw::Scene, geometry::Bounds};

use super::Exporter;

/// Builder for an [`Svg`] exporter.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    viewport: Bounds,
    background: Option<Color>,
}

impl SvgBuilder {
    /// Starts a builder for documents covering `viewport`.
    pub fn new(viewport: Bounds) -> Self {
        Self {
            viewport,
            background: None,
        }
    }

    /// Paints the document background with `color`, if any.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            viewport: self.viewport,
            background: self.background,
        }
    }
}

/// Renders a [`Scene`] into an SVG document.
#[derive(Debug, Clone)]
pub struct Svg {
    viewport: Bounds,
    background: Option<Color>,
}

impl Svg {
    fn document(&self) -> Document {
        let doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    self.viewport.min_x(),
                    self.viewport.min_y(),
                    self.viewport.width(),
                    self.viewport.height()
                ),
            )
            .set("width", self.viewport.width())
            .set("height", self.viewport.height());

        match self.background {
            Some(color) => doc.set("style", format!("background-color: {color}")),
            None => doc,
        }
    }
}

impl Exporter for Svg {
    fn render(&self, scene: &Scene) -> String {
        let mut doc = self.document();
        for node in scene.render_to_layers().render() {
            doc = doc.add(node);
        }
        debug!(primitives = scene.len(); "SVG document rendered");
        doc.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mullion_core::{
        draw::{Label, Line, Rectangle, StrokeDefinition, TextDefinition},
        geometry::{Point, Size},
    };

    fn viewport() -> Bounds {
        Bounds::new_from_top_left(Point::default(), Size::new(800.0, 600.0))
    }

    fn sample_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(Rectangle::new(Bounds::new_from_top_left(
            Point::new(100.0, 100.0),
            Size::new(600.0, 400.0),
        )));
        scene.push(Label::new(
            Point::new(400.0, 80.0),
            "600 mm",
            TextDefinition::new(),
        ));
        scene.push(Line::new(
            Point::new(400.0, 100.0),
            Point::new(400.0, 500.0),
            StrokeDefinition::default(),
        ));
        scene
    }

    #[test]
    fn test_render_document_shape() {
        let svg = SvgBuilder::new(viewport()).build().render(&sample_scene());

        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert_eq!(svg.matches("<line").count(), 1);
        assert_eq!(svg.matches("<text").count(), 1);
        assert!(!svg.contains("background-color"));

        // Shapes paint below labels
        let line_at = svg.find("<line").unwrap();
        let text_at = svg.find("<text").unwrap();
        assert!(line_at < text_at);
    }

    #[test]
    fn test_render_background() {
        let white = Color::new("white").unwrap();
        let svg = SvgBuilder::new(viewport())
            .with_background(Some(white))
            .build()
            .render(&Scene::new());

        assert!(svg.contains("background-color"));
        assert!(!svg.contains("<rect"));
    }
}

//! Absolutely positioned drawing primitives.
//!
//! A frame drawing is made of three kinds of primitive: [`Rectangle`]s for
//! the frame and profile bodies, [`Line`]s for center and thickness
//! references, and [`Label`]s for every text annotation. [`Primitive`] wraps
//! them so a [`Scene`](super::Scene) can keep one ordered list.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, TextDefinition, measure_text},
    geometry::{Bounds, Point, Transform},
};

/// Fraction of a text line's height that sits above the baseline.
const ASCENT_RATIO: f32 = 0.75;

/// An axis-aligned rectangle with optional fill and outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    bounds: Bounds,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    opacity: f32,
}

impl Rectangle {
    /// Creates an unfilled, unstroked, fully opaque rectangle.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the opacity applied to the whole rectangle, fill and outline alike.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl Drawable for Rectangle {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", self.bounds.width())
            .set("height", self.bounds.height());

        rect = match self.fill {
            Some(fill) => rect
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };

        if let Some(stroke) = &self.stroke {
            rect = apply_stroke!(rect, stroke);
        }

        if self.opacity < 1.0 {
            rect = rect.set("opacity", self.opacity);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Drawing, Box::new(rect));
        output
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn transformed(&self, transform: Transform) -> Self {
        Self {
            bounds: transform.apply_bounds(self.bounds),
            stroke: self
                .stroke
                .map(|stroke| stroke.scaled(transform.scale())),
            ..self.clone()
        }
    }
}

/// A straight line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self { from, to, stroke }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for Line {
    fn render_to_layers(&self) -> LayeredOutput {
        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());
        let line = apply_stroke!(line, &self.stroke);

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Drawing, Box::new(line));
        output
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_corners(self.from, self.to)
    }

    fn transformed(&self, transform: Transform) -> Self {
        Self {
            from: transform.apply_point(self.from),
            to: transform.apply_point(self.to),
            stroke: self.stroke.scaled(transform.scale()),
        }
    }
}

/// A single-line text annotation anchored at a baseline point.
///
/// A non-zero `rotation` (degrees, clockwise as in SVG) turns the text about
/// its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    position: Point,
    content: String,
    definition: TextDefinition,
    rotation: f32,
}

impl Label {
    pub fn new(position: Point, content: impl Into<String>, definition: TextDefinition) -> Self {
        Self {
            position,
            content: content.into(),
            definition,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Bounds of the text before rotation.
    fn unrotated_bounds(&self) -> Bounds {
        let size = measure_text(&self.content, &self.definition);
        let top_left = Point::new(
            self.position.x() + self.definition.anchor().left_offset(size.width()),
            self.position.y() - size.height() * ASCENT_RATIO,
        );
        Bounds::new_from_top_left(top_left, size)
    }
}

impl Drawable for Label {
    fn render_to_layers(&self) -> LayeredOutput {
        let color = self.definition.color();
        let mut text = svg_element::Text::new(self.content.as_str())
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("text-anchor", self.definition.anchor().to_svg_value())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());

        if self.rotation != 0.0 {
            text = text.set(
                "transform",
                format!(
                    "rotate({} {} {})",
                    self.rotation,
                    self.position.x(),
                    self.position.y()
                ),
            );
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Labels, Box::new(text));
        output
    }

    fn bounds(&self) -> Bounds {
        let bounds = self.unrotated_bounds();
        if self.rotation == 0.0 {
            return bounds;
        }

        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let pivot = self.position;
        let rotate = |corner: Point| {
            let offset = corner.sub_point(pivot);
            Point::new(
                pivot.x() + offset.x() * cos - offset.y() * sin,
                pivot.y() + offset.x() * sin + offset.y() * cos,
            )
        };

        let corners = [
            Point::new(bounds.min_x(), bounds.min_y()),
            Point::new(bounds.max_x(), bounds.min_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
            Point::new(bounds.max_x(), bounds.max_y()),
        ]
        .map(rotate);

        corners[1..]
            .iter()
            .fold(Bounds::new_from_corners(corners[0], corners[0]), |acc, corner| {
                acc.merge(&Bounds::new_from_corners(*corner, *corner))
            })
    }

    fn transformed(&self, transform: Transform) -> Self {
        Self {
            position: transform.apply_point(self.position),
            definition: self.definition.scaled(transform.scale()),
            ..self.clone()
        }
    }
}

/// Any primitive a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rectangle(Rectangle),
    Line(Line),
    Label(Label),
}

impl Drawable for Primitive {
    fn render_to_layers(&self) -> LayeredOutput {
        match self {
            Self::Rectangle(rect) => rect.render_to_layers(),
            Self::Line(line) => line.render_to_layers(),
            Self::Label(label) => label.render_to_layers(),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Self::Rectangle(rect) => rect.bounds(),
            Self::Line(line) => line.bounds(),
            Self::Label(label) => label.bounds(),
        }
    }

    fn transformed(&self, transform: Transform) -> Self {
        match self {
            Self::Rectangle(rect) => Self::Rectangle(rect.transformed(transform)),
            Self::Line(line) => Self::Line(line.transformed(transform)),
            Self::Label(label) => Self::Label(label.transformed(transform)),
        }
    }
}

impl From<Rectangle> for Primitive {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Label> for Primitive {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

//! The ordered collection of primitives that makes up one drawing.

use crate::{
    draw::{Drawable, LayeredOutput, Primitive},
    geometry::{Bounds, Transform},
};

/// An ordered list of drawing primitives.
///
/// A scene is built from scratch for every layout computation and owned by
/// whoever built it; nothing in it refers back to the inputs.
///
/// # Examples
///
/// ```
/// # use mullion_core::draw::{Rectangle, Scene};
/// # use mullion_core::geometry::{Bounds, Point, Size};
/// let mut scene = Scene::new();
/// assert!(scene.bounds().is_none());
///
/// scene.push(Rectangle::new(Bounds::new_from_top_left(
///     Point::default(),
///     Size::new(600.0, 400.0),
/// )));
/// assert_eq!(scene.len(), 1);
/// assert_eq!(scene.bounds().unwrap().width(), 600.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive; paint order follows insertion order within a layer.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Returns the union of all primitive bounds, or `None` for an empty scene.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.primitives.iter().map(Drawable::bounds);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, bounds| acc.merge(&bounds)))
    }

    /// Maps every primitive through `transform`, in place.
    pub fn apply_transform(&mut self, transform: Transform) {
        for primitive in &mut self.primitives {
            *primitive = primitive.transformed(transform);
        }
    }

    /// Renders every primitive into layered SVG output.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for primitive in &self.primitives {
            output.merge(primitive.render_to_layers());
        }
        output
    }
}

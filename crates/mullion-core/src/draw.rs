//! Drawing primitives and their SVG rendering.
//!
//! This module provides everything a frame drawing is made of:
//!
//! - [`Rectangle`], [`Line`] and [`Label`] - absolutely positioned primitives
//! - [`Primitive`] and [`Scene`] - the ordered list handed to a renderer
//! - [`StrokeDefinition`] and [`TextDefinition`] - visual styles
//! - [`LayeredOutput`] and [`RenderLayer`] - z-ordered SVG output

mod layer;
mod primitive;
mod scene;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{Label, Line, Primitive, Rectangle};
pub use scene::Scene;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{TextAnchor, TextDefinition, measure_text};

use crate::geometry::{Bounds, Transform};

/// A positioned element that can be measured, moved and rendered.
pub trait Drawable {
    /// Renders the element into layered SVG output.
    fn render_to_layers(&self) -> LayeredOutput;

    /// Returns the area the element covers in drawing coordinates.
    fn bounds(&self) -> Bounds;

    /// Returns a copy of the element mapped through `transform`.
    fn transformed(&self, transform: Transform) -> Self
    where
        Self: Sized;
}

//! Layer-based rendering system for SVG output.
//!
//! Every primitive in a drawing belongs to one [`RenderLayer`]. Shapes go to
//! [`RenderLayer::Drawing`] and text annotations to [`RenderLayer::Labels`],
//! so that labels always paint above the profiles they describe.
//!
//! # Example
//!
//! ```
//! # use mullion_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Text};
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Labels, Box::new(Text::new("600 mm")));
//! output.add_to_layer(RenderLayer::Drawing, Box::new(Rectangle::new()));
//!
//! // Drawing renders first even though it was added last
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Frame outline, profile bodies, center and thickness lines
    Drawing,
    /// Dimension, spacing, thickness and custom divider labels
    Labels,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drawing => "drawing",
            Self::Labels => "labels",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order (bottom to top); within a
/// layer they keep the order they were added in.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the total number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        // Stable sort keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current: Option<(RenderLayer, svg_element::Group)> = None;

        for (layer, node) in self.items {
            current = match current {
                Some((current_layer, group)) if current_layer == layer => {
                    Some((current_layer, group.add(node)))
                }
                previous => {
                    if let Some((_, group)) = previous {
                        result.push(Box::new(group) as SvgNode);
                    }
                    let group = svg_element::Group::new()
                        .set("data-layer", layer.name())
                        .add(node);
                    Some((layer, group))
                }
            };
        }

        if let Some((_, group)) = current {
            result.push(Box::new(group) as SvgNode);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Line, Rectangle, Text};

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_add_to_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Drawing, Box::new(Rectangle::new()));
        assert!(!output.is_empty());
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Drawing, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Drawing, Box::new(Line::new()));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_layered_output_render_orders_layers() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Labels, Box::new(Text::new("t:2.5")));
        output.add_to_layer(RenderLayer::Drawing, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Labels, Box::new(Text::new("600 mm")));

        let nodes = output.render();
        assert_eq!(nodes.len(), 2);

        let first = nodes[0].to_string();
        let second = nodes[1].to_string();
        assert!(first.contains("data-layer=\"drawing\""));
        assert!(second.contains("data-layer=\"labels\""));
        assert!(second.find("t:2.5") < second.find("600 mm"));
    }
}

//! Scene composition.
//!
//! Draws a resolved frame layout into a [`Scene`] in drawing order: the frame
//! outline, vertical profiles, horizontal profiles, then every annotation.
//! All coordinates are engine coordinates; fitting into a viewport happens
//! afterwards.

use mullion_core::{
    draw::{Label, Line, Rectangle, Scene, StrokeDefinition, TextAnchor, TextDefinition},
    geometry::{Bounds, Point, Size},
};

use super::position::DividerPlacement;
use crate::{
    palette::Palette,
    params::{Axis, DrawingParameters},
};

const FRAME_STROKE_WIDTH: f32 = 2.0;
const CENTER_LINE_WIDTH: f32 = 2.0;
const CENTER_DASH: f32 = 5.0;
const THICKNESS_LINE_WIDTH: f32 = 1.0;
const THICKNESS_DASH: f32 = 3.0;

const THICKNESS_FONT_SIZE: f32 = 8.0;
const DIMENSION_FONT_SIZE: f32 = 14.0;
const SPACING_FONT_SIZE: f32 = 10.0;
const CUSTOM_LABEL_FONT_SIZE: f32 = 12.0;

/// Distance of the width label above the frame.
const DIMENSION_OFFSET: f32 = 20.0;
/// Distance of the height label left of the frame.
const DIMENSION_SIDE_OFFSET: f32 = 30.0;
const VERTICAL_SPACING_OFFSET: f32 = 40.0;
const HORIZONTAL_SPACING_OFFSET: f32 = 60.0;
const VERTICAL_CUSTOM_LABEL_OFFSET: f32 = 60.0;
const HORIZONTAL_CUSTOM_LABEL_OFFSET: f32 = 100.0;

/// Builds the scene for one layout computation.
pub struct SceneComposer<'a> {
    params: &'a DrawingParameters,
    palette: &'a Palette,
    scene: Scene,
}

impl<'a> SceneComposer<'a> {
    pub fn new(params: &'a DrawingParameters, palette: &'a Palette) -> Self {
        Self {
            params,
            palette,
            scene: Scene::new(),
        }
    }

    /// Draws the complete layout and returns the finished scene.
    pub fn compose(
        mut self,
        vertical: &[DividerPlacement],
        horizontal: &[DividerPlacement],
    ) -> Scene {
        self.draw_frame();
        self.draw_profiles(Axis::Vertical, vertical);
        self.draw_profiles(Axis::Horizontal, horizontal);
        self.draw_dimensions();
        self.draw_spacing(Axis::Vertical, vertical);
        self.draw_spacing(Axis::Horizontal, horizontal);
        self.draw_custom_labels(Axis::Vertical, vertical);
        self.draw_custom_labels(Axis::Horizontal, horizontal);
        self.scene
    }

    fn text(&self, size: f32) -> TextDefinition {
        TextDefinition::new()
            .with_font_family(self.palette.font_family())
            .with_font_size(size)
    }

    fn push_label(&mut self, label: Label) {
        if !label.content().is_empty() {
            self.scene.push(label);
        }
    }

    fn draw_frame(&mut self) {
        let frame = Rectangle::new(Bounds::new_from_top_left(
            Point::default(),
            Size::new(self.params.width, self.params.height),
        ))
        .with_stroke(StrokeDefinition::solid(
            self.palette.frame(),
            FRAME_STROKE_WIDTH,
        ));
        self.scene.push(frame);
    }

    /// Draws the body, center line and wall lines of every profile on `axis`.
    ///
    /// The first profile also carries the wall thickness annotation.
    fn draw_profiles(&mut self, axis: Axis, placements: &[DividerPlacement]) {
        let width = self.params.width;
        let height = self.params.height;
        let size = self.params.profile_size(axis);
        let thickness = self.params.profile_thickness;

        let center_stroke = StrokeDefinition::dashed(
            self.palette.frame(),
            CENTER_LINE_WIDTH,
            CENTER_DASH,
            CENTER_DASH,
        );
        let wall_stroke = StrokeDefinition::dashed(
            self.palette.thickness_line(),
            THICKNESS_LINE_WIDTH,
            THICKNESS_DASH,
            THICKNESS_DASH,
        );

        for (index, placement) in placements.iter().enumerate() {
            let offset = placement.position();
            let color = self.palette.divider(axis, placement.is_custom());

            // Body, then the center line and both inner wall lines
            let (body, guides) = match axis {
                Axis::Vertical => (
                    Bounds::new_from_top_left(Point::new(offset, 0.0), Size::new(size, height)),
                    [offset + size / 2.0, offset + thickness, offset + size - thickness]
                        .map(|x| (Point::new(x, 0.0), Point::new(x, height))),
                ),
                Axis::Horizontal => (
                    Bounds::new_from_top_left(Point::new(0.0, offset), Size::new(width, size)),
                    [offset + size / 2.0, offset + thickness, offset + size - thickness]
                        .map(|y| (Point::new(0.0, y), Point::new(width, y))),
                ),
            };

            self.scene.push(
                Rectangle::new(body)
                    .with_fill(color)
                    .with_stroke(StrokeDefinition::solid(color, 1.0))
                    .with_opacity(self.palette.fill_opacity()),
            );

            let [center, first_wall, second_wall] = guides;
            self.scene
                .push(Line::new(center.0, center.1, center_stroke));
            self.scene
                .push(Line::new(first_wall.0, first_wall.1, wall_stroke));
            self.scene
                .push(Line::new(second_wall.0, second_wall.1, wall_stroke));

            if index == 0 {
                let (position, anchor) = match axis {
                    Axis::Vertical => (
                        Point::new(offset + thickness + 5.0, height - 10.0),
                        TextAnchor::Start,
                    ),
                    Axis::Horizontal => (
                        Point::new(width - 15.0, offset + thickness + 10.0),
                        TextAnchor::End,
                    ),
                };
                let definition = self
                    .text(THICKNESS_FONT_SIZE)
                    .with_color(self.palette.annotation())
                    .with_anchor(anchor);
                self.push_label(Label::new(position, format!("t:{thickness}"), definition));
            }
        }
    }

    fn draw_dimensions(&mut self) {
        let width = self.params.width;
        let height = self.params.height;
        let definition = self
            .text(DIMENSION_FONT_SIZE)
            .with_color(self.palette.frame());

        self.push_label(Label::new(
            Point::new(width / 2.0, -DIMENSION_OFFSET),
            format!("{width} mm"),
            definition.clone(),
        ));
        self.push_label(
            Label::new(
                Point::new(-DIMENSION_SIDE_OFFSET, height / 2.0),
                format!("{height} mm"),
                definition,
            )
            .with_rotation(-90.0),
        );
    }

    /// Annotates the gaps between consecutive profile centers, including the
    /// frame edges at either end.
    fn draw_spacing(&mut self, axis: Axis, placements: &[DividerPlacement]) {
        let extent = self.params.extent(axis);
        let half = self.params.profile_size(axis) / 2.0;

        let centers: Vec<f32> = std::iter::once(0.0)
            .chain(placements.iter().map(|p| p.position() + half))
            .chain(std::iter::once(extent))
            .collect();

        let definition = self
            .text(SPACING_FONT_SIZE)
            .with_color(self.palette.annotation());

        for pair in centers.windows(2) {
            let gap = (pair[1] - pair[0]).round();
            let middle = pair[0] + gap / 2.0;
            let position = match axis {
                Axis::Vertical => Point::new(middle, self.params.height + VERTICAL_SPACING_OFFSET),
                Axis::Horizontal => {
                    Point::new(self.params.width + HORIZONTAL_SPACING_OFFSET, middle)
                }
            };
            self.push_label(Label::new(position, format!("{gap} mm"), definition.clone()));
        }
    }

    /// Writes each custom divider's label next to the frame at the position
    /// the user entered.
    fn draw_custom_labels(&mut self, axis: Axis, placements: &[DividerPlacement]) {
        let definition = self
            .text(CUSTOM_LABEL_FONT_SIZE)
            .with_color(self.palette.divider(axis, true));

        for placement in placements {
            let (Some(label), Some(raw)) = (placement.label(), placement.raw_position()) else {
                continue;
            };
            let position = match axis {
                Axis::Vertical => {
                    Point::new(raw, self.params.height + VERTICAL_CUSTOM_LABEL_OFFSET)
                }
                Axis::Horizontal => Point::new(
                    self.params.width + HORIZONTAL_CUSTOM_LABEL_OFFSET,
                    self.params.height - raw,
                ),
            };
            self.push_label(Label::new(position, label, definition.clone()));
        }
    }
}

//! Input types for a layout computation.
//!
//! [`DrawingParameters`] and [`CustomDivider`] are owned by the caller and
//! passed to [`LayoutEngine::compute_layout`](crate::LayoutEngine::compute_layout)
//! as a consistent snapshot; the engine never mutates them.
//!
//! All lengths are millimetres.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The orientation of a divider.
///
/// A `Vertical` divider spans the frame height and is positioned along the
/// width; a `Horizontal` divider spans the width and is positioned along the
/// height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Returns the lowercase name of the axis.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Overall frame and profile dimensions.
///
/// # Examples
///
/// ```
/// # use mullion::{Axis, DrawingParameters};
/// let params = DrawingParameters::new(600.0, 400.0)
///     .with_dividers(1, 0)
///     .with_profile(50.0, 50.0, 2.5);
/// assert_eq!(params.extent(Axis::Vertical), 600.0);
/// assert_eq!(params.profile_size(Axis::Horizontal), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingParameters {
    /// Frame width
    pub width: f32,
    /// Frame height
    pub height: f32,
    /// Number of automatically placed vertical dividers
    #[serde(default)]
    pub vertical_dividers: u32,
    /// Number of automatically placed horizontal dividers
    #[serde(default)]
    pub horizontal_dividers: u32,
    /// Extent of a vertical divider along the width
    pub profile_width: f32,
    /// Extent of a horizontal divider along the height
    pub profile_height: f32,
    /// Wall thickness of the hollow profile
    pub profile_thickness: f32,
}

impl DrawingParameters {
    /// Creates parameters for a frame with no dividers and a 50 mm profile
    /// with 2.5 mm walls.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            vertical_dividers: 0,
            horizontal_dividers: 0,
            profile_width: 50.0,
            profile_height: 50.0,
            profile_thickness: 2.5,
        }
    }

    pub fn with_dividers(mut self, vertical: u32, horizontal: u32) -> Self {
        self.vertical_dividers = vertical;
        self.horizontal_dividers = horizontal;
        self
    }

    pub fn with_profile(mut self, width: f32, height: f32, thickness: f32) -> Self {
        self.profile_width = width;
        self.profile_height = height;
        self.profile_thickness = thickness;
        self
    }

    /// Frame extent along which dividers of `axis` are positioned.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.width,
            Axis::Horizontal => self.height,
        }
    }

    /// Extent of one divider of `axis` along its positioning direction.
    pub fn profile_size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.profile_width,
            Axis::Horizontal => self.profile_height,
        }
    }

    /// Number of automatically placed dividers on `axis`.
    pub fn divider_count(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.vertical_dividers,
            Axis::Horizontal => self.horizontal_dividers,
        }
    }
}

impl Default for DrawingParameters {
    fn default() -> Self {
        Self::new(600.0, 400.0)
    }
}

/// A divider placed by the user at an explicit offset.
///
/// `position` is user-facing: for a vertical divider it is the distance from
/// the left edge, for a horizontal divider the distance from the **bottom**
/// edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomDivider {
    pub id: String,
    pub axis: Axis,
    pub position: f32,
    pub label: String,
}

impl CustomDivider {
    pub fn new(
        id: impl Into<String>,
        axis: Axis,
        position: f32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            axis,
            position,
            label: label.into(),
        }
    }

    /// Shorthand for a vertical divider.
    pub fn vertical(id: impl Into<String>, position: f32, label: impl Into<String>) -> Self {
        Self::new(id, Axis::Vertical, position, label)
    }

    /// Shorthand for a horizontal divider.
    pub fn horizontal(id: impl Into<String>, position: f32, label: impl Into<String>) -> Self {
        Self::new(id, Axis::Horizontal, position, label)
    }
}

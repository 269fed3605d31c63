//! Geometric primitives for frame layout and positioning.
//!
//! This module provides the geometric types used throughout Mullion for
//! calculating positions, sizes, and bounding boxes of drawing elements.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//! - [`Transform`] - A translate-then-scale mapping pivoted at a fixed point
//!
//! # Coordinate System
//!
//! Mullion uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the frame at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! User-facing horizontal divider offsets are measured from the *bottom*
//! edge instead; the conversion happens in the layout engine, never here.

/// A 2D point representing a position in drawing coordinate space.
///
/// # Examples
///
/// ```
/// # use mullion_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates the smallest bounds containing both points, in any order
    pub fn new_from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mullion_core::geometry::{Bounds, Point, Size};
    /// let frame = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(600.0, 400.0));
    /// let label = Bounds::new_from_top_left(Point::new(280.0, -28.0), Size::new(40.0, 16.0));
    ///
    /// let combined = frame.merge(&label);
    /// assert_eq!(combined.min_y(), -28.0);
    /// assert_eq!(combined.width(), 600.0);
    /// assert_eq!(combined.height(), 428.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Shrinks the bounds by the given insets.
    ///
    /// The result is not normalized: insets larger than the bounds produce a
    /// negative width or height, which callers can detect.
    pub fn shrink(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x + insets.left(),
            min_y: self.min_y + insets.top(),
            max_x: self.max_x - insets.right(),
            max_y: self.max_y - insets.bottom(),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}

/// A translation followed by a uniform scale about a pivot point.
///
/// Mapping a point `p` gives `pivot + (p + translation - pivot) * scale`.
/// Stroke widths and font sizes are multiplied by `scale`.
///
/// # Examples
///
/// ```
/// # use mullion_core::geometry::{Point, Transform};
/// let transform = Transform::new(Point::new(10.0, 0.0), 0.5, Point::new(100.0, 100.0));
/// let mapped = transform.apply_point(Point::new(90.0, 100.0));
/// assert_eq!(mapped, Point::new(100.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Point,
    scale: f32,
    pivot: Point,
}

impl Transform {
    /// Creates a transform from its translation, scale factor and scaling pivot
    pub fn new(translation: Point, scale: f32, pivot: Point) -> Self {
        Self {
            translation,
            scale,
            pivot,
        }
    }

    /// Returns the uniform scale factor
    pub fn scale(self) -> f32 {
        self.scale
    }

    /// Maps a point through the translation and then the pivoted scale
    pub fn apply_point(self, point: Point) -> Point {
        let moved = point.add_point(self.translation);
        self.pivot
            .add_point(moved.sub_point(self.pivot).scale(self.scale))
    }

    /// Maps a bounding box; the result is always normalized
    pub fn apply_bounds(self, bounds: Bounds) -> Bounds {
        Bounds::new_from_corners(
            self.apply_point(bounds.min_point()),
            self.apply_point(Point::new(bounds.max_x(), bounds.max_y())),
        )
    }
}

//! Divider position resolution.
//!
//! Turns the automatic divider counts and the user-placed dividers of one
//! axis into a single ordered list of [`DividerPlacement`]s in engine
//! coordinates (top-left origin, y pointing down).

use std::cmp::Ordering;

use log::trace;

use crate::params::{Axis, CustomDivider, DrawingParameters};

/// Where a placement came from.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementSource {
    /// Placed by the equal-section algorithm; `ordinal` is 1-based.
    Automatic { ordinal: u32 },
    /// Placed by the user, carrying their label and raw position.
    Custom { label: String, raw_position: f32 },
}

/// A resolved divider position on one axis.
///
/// `position` is the leading edge of the profile in engine coordinates and
/// always satisfies `0 <= position <= max(0, extent - profile_size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerPlacement {
    position: f32,
    source: PlacementSource,
}

impl DividerPlacement {
    pub fn automatic(position: f32, ordinal: u32) -> Self {
        Self {
            position,
            source: PlacementSource::Automatic { ordinal },
        }
    }

    pub fn custom(position: f32, label: impl Into<String>, raw_position: f32) -> Self {
        Self {
            position,
            source: PlacementSource::Custom {
                label: label.into(),
                raw_position,
            },
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn source(&self) -> &PlacementSource {
        &self.source
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.source, PlacementSource::Custom { .. })
    }

    /// The user label of a custom placement.
    pub fn label(&self) -> Option<&str> {
        match &self.source {
            PlacementSource::Custom { label, .. } => Some(label),
            PlacementSource::Automatic { .. } => None,
        }
    }

    /// The position the user typed for a custom placement, before clamping
    /// and flipping.
    pub fn raw_position(&self) -> Option<f32> {
        match self.source {
            PlacementSource::Custom { raw_position, .. } => Some(raw_position),
            PlacementSource::Automatic { .. } => None,
        }
    }

    /// Display name used in conflict reports.
    ///
    /// Custom placements are named by their label, automatic ones by axis and
    /// ordinal, e.g. `"Vertical divider 2"`.
    pub fn name(&self, axis: Axis) -> String {
        match &self.source {
            PlacementSource::Custom { label, .. } => label.clone(),
            PlacementSource::Automatic { ordinal } => match axis {
                Axis::Vertical => format!("Vertical divider {ordinal}"),
                Axis::Horizontal => format!("Horizontal divider {ordinal}"),
            },
        }
    }
}

/// Clamps a leading-edge position into `[0, extent - profile_size]`.
///
/// The upper bound is applied first, so a profile larger than the frame
/// collapses to 0. Non-finite input also resolves to 0.
pub fn clamp_position(raw: f32, extent: f32, profile_size: f32) -> f32 {
    if !raw.is_finite() {
        return 0.0;
    }
    let upper = extent - profile_size;
    let clamped = raw.min(upper).max(0.0);
    if clamped.is_finite() { clamped } else { 0.0 }
}

/// Resolves every divider on `axis` into an ordered placement list.
///
/// Automatic dividers split the frame extent into `count + 1` equal sections
/// and sit centred on each section boundary. Custom dividers of other axes are
/// ignored. The result is sorted ascending by position; the sort is stable,
/// so automatic placements precede custom ones at equal positions and custom
/// placements keep their input order.
pub fn resolve(
    axis: Axis,
    params: &DrawingParameters,
    custom_dividers: &[CustomDivider],
) -> Vec<DividerPlacement> {
    let extent = params.extent(axis);
    let profile_size = params.profile_size(axis);
    let count = params.divider_count(axis);

    let mut placements = Vec::new();

    let section = extent / (count as f32 + 1.0);
    for ordinal in 1..=count {
        let raw = section * ordinal as f32 - profile_size / 2.0;
        placements.push(DividerPlacement::automatic(
            clamp_position(raw, extent, profile_size),
            ordinal,
        ));
    }

    for divider in custom_dividers.iter().filter(|d| d.axis == axis) {
        let raw = match axis {
            Axis::Vertical => divider.position,
            // User positions are measured up from the bottom edge
            Axis::Horizontal => extent - divider.position - profile_size,
        };
        placements.push(DividerPlacement::custom(
            clamp_position(raw, extent, profile_size),
            divider.label.as_str(),
            divider.position,
        ));
    }

    placements.sort_by(|a, b| {
        a.position
            .partial_cmp(&b.position)
            .unwrap_or(Ordering::Equal)
    });

    trace!(axis:% = axis, placements:? = placements; "Resolved divider placements");

    placements
}

//! The conflict report returned by a layout computation.

use crate::{
    layout::{overlap::OverlapGroup, thickness::ThicknessWarning},
    params::Axis,
};

/// Everything that is wrong with one layout.
///
/// [`overlap_groups`](Self::overlap_groups) is the merged list hosts usually
/// display: horizontal overlaps, then vertical overlaps, then one group
/// tagged [`Axis::Horizontal`] holding every thickness message. The typed
/// warnings stay available through [`thickness_warnings`](Self::thickness_warnings).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConflictReport {
    overlap_groups: Vec<OverlapGroup>,
    thickness_warnings: Vec<ThicknessWarning>,
    /// Number of leading groups that are positional overlaps.
    positional: usize,
}

impl ConflictReport {
    /// Assembles the report from the per-axis overlaps and the thickness warnings.
    pub fn new(
        horizontal: Vec<OverlapGroup>,
        vertical: Vec<OverlapGroup>,
        thickness_warnings: Vec<ThicknessWarning>,
    ) -> Self {
        let mut overlap_groups = horizontal;
        overlap_groups.extend(vertical);
        let positional = overlap_groups.len();

        if !thickness_warnings.is_empty() {
            let messages = thickness_warnings
                .iter()
                .map(|warning| warning.message().to_string())
                .collect();
            overlap_groups.push(OverlapGroup::new(Axis::Horizontal, messages));
        }

        Self {
            overlap_groups,
            thickness_warnings,
            positional,
        }
    }

    pub fn overlap_groups(&self) -> &[OverlapGroup] {
        &self.overlap_groups
    }

    /// The groups of intersecting dividers, without the thickness group.
    pub fn positional_groups(&self) -> &[OverlapGroup] {
        &self.overlap_groups[..self.positional]
    }

    pub fn thickness_warnings(&self) -> &[ThicknessWarning] {
        &self.thickness_warnings
    }

    /// Returns `true` when the layout has neither overlaps nor thickness warnings.
    pub fn is_clean(&self) -> bool {
        self.overlap_groups.is_empty()
    }
}

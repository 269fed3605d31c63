//! Overlap detection between dividers on one axis.
//!
//! Each divider occupies the half-open interval `[position, position + size)`
//! along its positioning direction. Two dividers conflict when their
//! intervals intersect; dividers that merely touch do not.

use indexmap::IndexSet;
use log::debug;

use super::position::DividerPlacement;
use crate::params::Axis;

/// The half-open extent `[start, end)` a divider occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f32,
    end: f32,
}

impl Interval {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// The interval covered by a profile of `size` whose leading edge is at
    /// `position`.
    pub fn from_profile(position: f32, size: f32) -> Self {
        Self::new(position, position + size)
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A cluster of divider names that intersect on one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapGroup {
    axis: Axis,
    members: Vec<String>,
}

impl OverlapGroup {
    pub fn new(axis: Axis, members: Vec<String>) -> Self {
        Self { axis, members }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }
}

/// Finds the overlapping groups among `placements`.
///
/// For every index `i`, the first later divider `j` that overlaps it seeds a
/// group of both names, extended by every other divider that overlaps either
/// of them. Scanning then moves on to the next `i`, so a divider can appear
/// in several groups and an `i` seeds at most one.
pub fn detect(axis: Axis, placements: &[DividerPlacement], profile_size: f32) -> Vec<OverlapGroup> {
    let intervals: Vec<Interval> = placements
        .iter()
        .map(|placement| Interval::from_profile(placement.position(), profile_size))
        .collect();
    let names: Vec<String> = placements.iter().map(|p| p.name(axis)).collect();

    let mut groups = Vec::new();

    for i in 0..intervals.len() {
        for j in (i + 1)..intervals.len() {
            if !intervals[i].overlaps(&intervals[j]) {
                continue;
            }

            let mut members: IndexSet<&str> = IndexSet::new();
            members.insert(&names[i]);
            members.insert(&names[j]);

            for k in 0..intervals.len() {
                if k == i || k == j {
                    continue;
                }
                if intervals[k].overlaps(&intervals[i]) || intervals[k].overlaps(&intervals[j]) {
                    members.insert(&names[k]);
                }
            }

            groups.push(OverlapGroup::new(
                axis,
                members.into_iter().map(str::to_owned).collect(),
            ));
            break;
        }
    }

    debug!(axis:% = axis, groups = groups.len(); "Overlap detection finished");

    groups
}

//! Profile wall thickness validation.

use std::fmt;

use log::debug;

use crate::params::{Axis, DrawingParameters};

/// A profile whose walls are thicker than half its size.
#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessWarning {
    axis: Axis,
    max_allowed: f32,
    actual: f32,
    message: String,
}

impl ThicknessWarning {
    pub fn new(axis: Axis, max_allowed: f32, actual: f32) -> Self {
        let message = match axis {
            Axis::Vertical => format!(
                "Vertical profile thickness too large! Maximum: {max_allowed:.1}mm (width/2)"
            ),
            Axis::Horizontal => format!(
                "Horizontal profile thickness too large! Maximum: {max_allowed:.1}mm (height/2)"
            ),
        };
        Self {
            axis,
            max_allowed,
            actual,
            message,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn max_allowed(&self) -> f32 {
        self.max_allowed
    }

    pub fn actual(&self) -> f32 {
        self.actual
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ThicknessWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Checks the wall thickness against both profile sizes.
///
/// Each axis is checked independently and warns only when the thickness is
/// strictly greater than half the profile size, so at most two warnings are
/// returned, vertical first.
pub fn validate(params: &DrawingParameters) -> Vec<ThicknessWarning> {
    let thickness = params.profile_thickness;

    let warnings: Vec<_> = [Axis::Vertical, Axis::Horizontal]
        .into_iter()
        .filter_map(|axis| {
            let max_allowed = params.profile_size(axis) / 2.0;
            (thickness > max_allowed).then(|| ThicknessWarning::new(axis, max_allowed, thickness))
        })
        .collect();

    debug!(thickness = thickness, warnings = warnings.len(); "Thickness validated");

    warnings
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_valid_thickness_has_no_warnings() {
        let params = DrawingParameters::new(600.0, 400.0).with_profile(50.0, 50.0, 2.5);
        assert!(validate(&params).is_empty());
    }

    #[test]
    fn test_thickness_at_half_is_accepted() {
        let params = DrawingParameters::new(600.0, 400.0).with_profile(10.0, 10.0, 5.0);
        assert!(validate(&params).is_empty());
    }

    #[test]
    fn test_thin_vertical_profile_warns() {
        let params = DrawingParameters::new(600.0, 400.0).with_profile(10.0, 50.0, 6.0);
        let warnings = validate(&params);

        assert_eq!(warnings.len(), 1);
        let warning = &warnings[0];
        assert_eq!(warning.axis(), Axis::Vertical);
        assert_approx_eq!(f32, warning.max_allowed(), 5.0);
        assert_approx_eq!(f32, warning.actual(), 6.0);
        assert_eq!(
            warning.message(),
            "Vertical profile thickness too large! Maximum: 5.0mm (width/2)"
        );
    }

    #[test]
    fn test_both_axes_warn_vertical_first() {
        let params = DrawingParameters::new(600.0, 400.0).with_profile(10.0, 15.0, 8.0);
        let warnings = validate(&params);

        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].axis(), Axis::Vertical);
        assert_eq!(warnings[1].axis(), Axis::Horizontal);
        assert_eq!(
            warnings[1].to_string(),
            "Horizontal profile thickness too large! Maximum: 7.5mm (height/2)"
        );
    }
}

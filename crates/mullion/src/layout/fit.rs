//! Fitting a drawing into a viewport.

use log::debug;

use mullion_core::geometry::{Bounds, Insets, Transform};

/// Smallest scale handed out for a degenerate padded viewport.
const MIN_SCALE: f32 = 1e-3;

/// Computes the transform that centres `scene` in `viewport`.
///
/// The scene is always translated so its centre lands on the viewport
/// centre. It is scaled down uniformly, about the viewport centre, only when
/// it is wider or taller than the viewport shrunk by `padding` on every side;
/// the scale never exceeds 1. A flat scene is fitted along its one non-zero
/// dimension; an empty scene is only translated.
///
/// # Examples
///
/// ```
/// # use mullion::layout::fit;
/// # use mullion_core::geometry::{Bounds, Point, Size};
/// let scene = Bounds::new_from_top_left(Point::default(), Size::new(400.0, 300.0));
/// let viewport = Bounds::new_from_top_left(Point::default(), Size::new(200.0, 200.0));
/// let transform = fit(scene, viewport, 50.0);
/// assert_eq!(transform.scale(), 0.25);
/// ```
pub fn fit(scene: Bounds, viewport: Bounds, padding: f32) -> Transform {
    let padded = viewport.shrink(Insets::uniform(padding));
    let pivot = viewport.center();
    let translation = pivot.sub_point(scene.center());

    let mut scale = 1.0;
    let is_empty = scene.width() <= 0.0 && scene.height() <= 0.0;
    if !is_empty && (scene.width() > padded.width() || scene.height() > padded.height()) {
        let ratio = axis_ratio(padded.width(), scene.width())
            .min(axis_ratio(padded.height(), scene.height()));
        scale = if ratio.is_finite() && ratio > 0.0 {
            ratio.min(1.0)
        } else {
            MIN_SCALE
        };
    }

    debug!(
        translate_x = translation.x(),
        translate_y = translation.y(),
        scale = scale;
        "Fitted drawing into viewport"
    );

    Transform::new(translation, scale, pivot)
}

/// A zero-length scene dimension never constrains the scale.
fn axis_ratio(available: f32, length: f32) -> f32 {
    if length > 0.0 {
        available / length
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use mullion_core::geometry::{Point, Size};

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn test_small_scene_is_only_centred() {
        let scene = rect(0.0, 0.0, 100.0, 50.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let transform = fit(scene, viewport, 50.0);

        assert_approx_eq!(f32, transform.scale(), 1.0);
        let mapped = transform.apply_bounds(scene);
        assert_approx_eq!(f32, mapped.center().x(), 400.0);
        assert_approx_eq!(f32, mapped.center().y(), 300.0);
        assert_approx_eq!(f32, mapped.width(), 100.0);
    }

    #[test]
    fn test_large_scene_is_scaled_down() {
        let scene = rect(0.0, 0.0, 400.0, 300.0);
        let viewport = rect(0.0, 0.0, 200.0, 200.0);
        let transform = fit(scene, viewport, 50.0);

        assert_approx_eq!(f32, transform.scale(), 0.25);
        let mapped = transform.apply_bounds(scene);
        assert_approx_eq!(f32, mapped.width(), 100.0);
        assert_approx_eq!(f32, mapped.height(), 75.0);
        assert_approx_eq!(f32, mapped.center().x(), 100.0);
        assert_approx_eq!(f32, mapped.center().y(), 100.0);
    }

    #[test]
    fn test_scene_with_negative_origin() {
        let scene = rect(-60.0, -40.0, 760.0, 520.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let transform = fit(scene, viewport, 50.0);

        let mapped = transform.apply_bounds(scene);
        assert!(transform.scale() < 1.0);
        assert!(mapped.min_x() >= 50.0 - 0.01);
        assert!(mapped.max_x() <= 750.0 + 0.01);
        assert!(mapped.min_y() >= 50.0 - 0.01);
        assert!(mapped.max_y() <= 550.0 + 0.01);
    }

    #[test]
    fn test_degenerate_viewport_uses_floor_scale() {
        let scene = rect(0.0, 0.0, 400.0, 300.0);
        let viewport = rect(0.0, 0.0, 80.0, 80.0);
        let transform = fit(scene, viewport, 50.0);

        assert_approx_eq!(f32, transform.scale(), MIN_SCALE);
    }

    #[test]
    fn test_flat_scene_is_scaled_along_its_length() {
        let scene = rect(0.0, 0.0, 0.0, 1000.0);
        let viewport = rect(0.0, 0.0, 200.0, 200.0);
        let transform = fit(scene, viewport, 50.0);

        assert_approx_eq!(f32, transform.scale(), 0.1);
        let mapped = transform.apply_bounds(scene);
        assert!(mapped.height() <= 100.0 + 0.01);
        assert_approx_eq!(f32, mapped.center().y(), 100.0);

        let wide = rect(0.0, 0.0, 500.0, 0.0);
        assert_approx_eq!(f32, fit(wide, viewport, 50.0).scale(), 0.2);
    }

    #[test]
    fn test_empty_scene_is_only_translated() {
        let scene = rect(10.0, 10.0, 0.0, 0.0);
        let viewport = rect(0.0, 0.0, 800.0, 600.0);
        let transform = fit(scene, viewport, 50.0);

        assert_approx_eq!(f32, transform.scale(), 1.0);
        assert_eq!(transform.apply_point(Point::new(10.0, 10.0)), Point::new(400.0, 300.0));
    }
}

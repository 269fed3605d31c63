//! Integration tests for the LayoutEngine API
//!
//! These tests drive the engine through its public surface only.

use float_cmp::assert_approx_eq;

use mullion::{
    Axis, CustomDivider, DrawingParameters, EngineState, LayoutEngine,
    config::{AppConfig, StyleConfig, ViewportConfig},
    draw::Primitive,
    geometry::{Bounds, Point, Size},
    layout::{fit, position},
};

fn engine() -> LayoutEngine {
    LayoutEngine::new(AppConfig::default()).expect("default config is valid")
}

fn count_elements(svg: &str, tag: &str) -> usize {
    svg.matches(&format!("<{tag} ")).count() + svg.matches(&format!("<{tag}>")).count()
}

#[test]
fn test_single_automatic_divider_is_clean() {
    let params = DrawingParameters::new(600.0, 400.0)
        .with_dividers(1, 0)
        .with_profile(50.0, 50.0, 2.5);

    let placements = position::resolve(Axis::Vertical, &params, &[]);
    assert_eq!(placements.len(), 1);
    assert_approx_eq!(f32, placements[0].position(), 275.0);

    let mut engine = engine();
    let report = engine.compute_layout(&params, &[]);
    assert!(report.overlap_groups().is_empty());
    assert!(report.thickness_warnings().is_empty());
}

#[test]
fn test_coincident_custom_dividers_overlap() {
    let params = DrawingParameters::new(600.0, 400.0);
    let dividers = [
        CustomDivider::vertical("a", 100.0, "Mullion A"),
        CustomDivider::vertical("b", 100.0, "Mullion B"),
    ];

    let mut engine = engine();
    let report = engine.compute_layout(&params, &dividers);

    let groups = report.overlap_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].axis(), Axis::Vertical);
    assert_eq!(groups[0].members(), ["Mullion A", "Mullion B"]);
}

#[test]
fn test_thin_profile_reports_thickness() {
    let params = DrawingParameters::new(600.0, 400.0).with_profile(10.0, 50.0, 6.0);

    let mut engine = engine();
    let report = engine.compute_layout(&params, &[]);

    let warnings = report.thickness_warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].axis(), Axis::Vertical);
    assert_approx_eq!(f32, warnings[0].max_allowed(), 5.0);
    assert_approx_eq!(f32, warnings[0].actual(), 6.0);

    // Folded into the merged list as a horizontal group
    let groups = report.overlap_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].axis(), Axis::Horizontal);
    assert_eq!(groups[0].members(), [warnings[0].message()]);
}

#[test]
fn test_thickness_at_exact_half_is_accepted() {
    let params = DrawingParameters::new(600.0, 400.0).with_profile(10.0, 10.0, 5.0);
    let mut engine = engine();
    assert!(engine.compute_layout(&params, &[]).thickness_warnings().is_empty());
}

#[test]
fn test_fit_scales_large_scene() {
    let scene = Bounds::new_from_top_left(Point::default(), Size::new(400.0, 300.0));
    let viewport = Bounds::new_from_top_left(Point::default(), Size::new(200.0, 200.0));
    let transform = fit(scene, viewport, 50.0);
    assert_approx_eq!(f32, transform.scale(), 0.25);
}

#[test]
fn test_horizontal_then_vertical_then_thickness() {
    let params = DrawingParameters::new(600.0, 400.0).with_profile(10.0, 10.0, 6.0);
    let dividers = [
        CustomDivider::vertical("v1", 100.0, "V1"),
        CustomDivider::vertical("v2", 105.0, "V2"),
        CustomDivider::horizontal("h1", 200.0, "H1"),
        CustomDivider::horizontal("h2", 204.0, "H2"),
    ];

    let mut engine = engine();
    let report = engine.compute_layout(&params, &dividers);

    let axes: Vec<Axis> = report.overlap_groups().iter().map(|g| g.axis()).collect();
    assert_eq!(axes, vec![Axis::Horizontal, Axis::Vertical, Axis::Horizontal]);
    assert_eq!(report.overlap_groups()[2].members().len(), 2);
}

#[test]
fn test_export_lifecycle() {
    let mut engine = engine();
    assert_eq!(engine.state(), EngineState::Empty);
    assert_eq!(engine.export_svg(), "");

    let params = DrawingParameters::new(600.0, 400.0).with_dividers(2, 1);
    let dividers = [CustomDivider::horizontal("t", 300.0, "Transom")];
    engine.compute_layout(&params, &dividers);
    assert_eq!(engine.state(), EngineState::Ready);

    let svg = engine.export_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("viewBox=\"0 0 800 600\""));

    let scene = engine.scene().expect("scene after compute");
    let shapes = count_elements(&svg, "rect") + count_elements(&svg, "line") + count_elements(&svg, "text");
    assert_eq!(shapes, scene.len());

    let text_count = scene
        .iter()
        .filter(|primitive| matches!(primitive, Primitive::Label(_)))
        .count();
    assert_eq!(count_elements(&svg, "text"), text_count);

    engine.clear();
    assert_eq!(engine.state(), EngineState::Empty);
    assert!(engine.scene().is_none());
    assert_eq!(engine.export_svg(), "");
}

#[test]
fn test_inputs_are_not_consumed() {
    let params = DrawingParameters::new(600.0, 400.0).with_dividers(1, 1);
    let dividers = vec![CustomDivider::vertical("a", 50.0, "A")];
    let before = (params, dividers.clone());

    let mut engine = engine();
    engine.compute_layout(&params, &dividers);
    engine.compute_layout(&params, &dividers);

    assert_eq!((params, dividers), before);
}

#[test]
fn test_out_of_range_custom_divider_is_clamped() {
    let params = DrawingParameters::new(600.0, 400.0);
    let dividers = [
        CustomDivider::vertical("far", 10_000.0, "Far"),
        CustomDivider::horizontal("low", -500.0, "Low"),
    ];

    let vertical = position::resolve(Axis::Vertical, &params, &dividers);
    let horizontal = position::resolve(Axis::Horizontal, &params, &dividers);
    assert_approx_eq!(f32, vertical[0].position(), 550.0);
    assert_approx_eq!(f32, horizontal[0].position(), 350.0);

    let mut engine = engine();
    assert!(engine.compute_layout(&params, &dividers).is_clean());
}

#[test]
fn test_configured_style_reaches_svg() {
    let style = StyleConfig::default()
        .with_background_color("white")
        .with_font_family("monospace");
    let config = AppConfig::new(ViewportConfig::new(1000.0, 700.0, 40.0), style);
    let mut engine = LayoutEngine::new(config).unwrap();
    engine.compute_layout(&DrawingParameters::default(), &[]);

    let svg = engine.export_svg();
    assert!(svg.contains("viewBox=\"0 0 1000 700\""));
    assert!(svg.contains("background-color"));
    assert!(svg.contains("font-family=\"monospace\""));
}

//! Example: Laying out a frame from code
//!
//! This example builds drawing parameters and custom dividers directly,
//! runs the layout engine and writes the fitted drawing as SVG.

use mullion::{CustomDivider, DrawingParameters, LayoutEngine, config::AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Laying out a 1200 x 800 mm frame...\n");

    // Two automatic mullions and one automatic transom
    let params = DrawingParameters::new(1200.0, 800.0)
        .with_dividers(2, 1)
        .with_profile(60.0, 60.0, 3.0);

    // A user-placed mullion that collides with the first automatic one
    let dividers = vec![
        CustomDivider::vertical("door", 380.0, "Door jamb"),
        CustomDivider::horizontal("sill", 150.0, "Sill"),
    ];

    let mut engine = LayoutEngine::new(AppConfig::default())?;
    let report = engine.compute_layout(&params, &dividers);

    println!("Conflicts:");
    if report.is_clean() {
        println!("  none");
    }
    for group in report.overlap_groups() {
        println!("  [{}] {}", group.axis(), group.members().join(", "));
    }
    println!();

    let svg = engine.export_svg();
    println!("SVG length: {} bytes", svg.len());

    let output_path = "render_frame_output.svg";
    engine.write_svg(output_path)?;
    println!("SVG written to: {output_path}");

    Ok(())
}

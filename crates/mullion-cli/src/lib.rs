//! CLI logic for the Mullion frame drawing tool.
//!
//! [`run`] reads a drawing file, lays it out with [`LayoutEngine`], logs
//! every conflict and writes the SVG.

mod args;
mod config;
mod error;
mod input;

pub use args::Args;
pub use error::CliError;
pub use input::DrawingFile;

use log::{info, warn};

use mullion::{ConflictReport, LayoutEngine};

/// Run the Mullion CLI application
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed drawing files
/// - Invalid style colors
/// - Conflicts, when `--strict` is set
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path:? = args.input,
        output_path:? = args.output;
        "Processing drawing"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let drawing = DrawingFile::load(&args.input)?;

    let mut engine = LayoutEngine::new(app_config)?;
    let report = engine.compute_layout(&drawing.parameters, &drawing.dividers);
    log_conflicts(report);

    let conflicts = report.overlap_groups().len();
    if args.strict && conflicts > 0 {
        return Err(CliError::Conflicts { count: conflicts });
    }

    engine.write_svg(&args.output)?;

    info!(output_file:? = args.output; "SVG exported successfully");

    Ok(())
}

fn log_conflicts(report: &ConflictReport) {
    for warning in report.thickness_warnings() {
        warn!(
            axis:% = warning.axis(),
            max_allowed = warning.max_allowed(),
            actual = warning.actual();
            "{}",
            warning.message()
        );
    }

    for group in report.positional_groups() {
        warn!(
            axis:% = group.axis(),
            members = group.members().join(", ");
            "Overlapping dividers"
        );
    }
}

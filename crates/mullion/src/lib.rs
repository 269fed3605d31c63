//! Mullion - layout, conflict detection and SVG export for subdivided frames.
//!
//! A rectangular frame is subdivided by profiles (bars) that are either
//! spread automatically at equal intervals or placed by the user at explicit
//! offsets. [`LayoutEngine`] resolves every profile position, reports
//! overlapping profiles and impossible wall thicknesses, draws the result
//! into a [`Scene`](draw::Scene) fitted to a viewport, and serializes it to
//! SVG.
//!
//! # Examples
//!
//! ```
//! use mullion::{CustomDivider, DrawingParameters, LayoutEngine, config::AppConfig};
//!
//! let mut engine = LayoutEngine::new(AppConfig::default()).unwrap();
//!
//! let params = DrawingParameters::new(600.0, 400.0)
//!     .with_dividers(1, 0)
//!     .with_profile(50.0, 50.0, 2.5);
//! let dividers = [CustomDivider::vertical("a", 290.0, "Mullion A")];
//!
//! let report = engine.compute_layout(&params, &dividers);
//! assert_eq!(report.overlap_groups().len(), 1);
//!
//! let svg = engine.export_svg();
//! assert!(svg.contains("Mullion A"));
//! ```

pub mod config;
pub mod export;
pub mod layout;

mod engine;
mod error;
mod palette;
mod params;
mod report;

pub use mullion_core::{color, draw, geometry};

pub use engine::{EngineState, LayoutEngine};
pub use error::MullionError;
pub use layout::{
    overlap::OverlapGroup,
    position::{DividerPlacement, PlacementSource},
    thickness::ThicknessWarning,
};
pub use palette::Palette;
pub use params::{Axis, CustomDivider, DrawingParameters};
pub use report::ConflictReport;

//! Export functionality for frame drawings.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! serializing a fitted [`Scene`] into an output format. It is the last stage
//! of the pipeline and only runs on demand.
//!
//! # Pipeline Position
//!
//! ```text
//! DrawingParameters + CustomDividers
//!     ↓ resolve / detect / validate
//! Placements + ConflictReport
//!     ↓ compose + fit
//! Scene
//!     ↓ export (this module)
//! SVG text or file
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::{fs, path::Path};

use log::{error, info};

use mullion_core::draw::Scene;

use crate::MullionError;

/// Abstraction for drawing export backends.
pub trait Exporter {
    /// Serializes `scene` into the backend's output format.
    fn render(&self, scene: &Scene) -> String;

    /// Serializes `scene` and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MullionError::Io`] if the file cannot be written.
    fn write_to(&self, scene: &Scene, path: &Path) -> Result<(), MullionError> {
        info!(path:? = path; "Writing drawing");
        fs::write(path, self.render(scene)).map_err(|err| {
            error!(path:? = path, err:err; "Failed to write drawing");
            MullionError::Io(err)
        })
    }
}

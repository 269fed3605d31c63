//! Drawing file loading.
//!
//! A drawing file is TOML with one `[parameters]` table and any number of
//! `[[dividers]]` entries:
//!
//! ```toml
//! [parameters]
//! width = 600
//! height = 400
//! vertical_dividers = 1
//! profile_width = 50
//! profile_height = 50
//! profile_thickness = 2.5
//!
//! [[dividers]]
//! id = "a"
//! axis = "vertical"
//! position = 100
//! label = "Mullion A"
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use mullion::{CustomDivider, DrawingParameters};

use crate::error::CliError;

/// The contents of one drawing file.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawingFile {
    pub parameters: DrawingParameters,
    #[serde(default)]
    pub dividers: Vec<CustomDivider>,
}

impl DrawingFile {
    /// Parses a drawing from TOML text; `name` is used in diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Input`] pointing at the offending span.
    pub fn parse(name: &str, source: String) -> Result<Self, CliError> {
        let drawing: Self =
            toml::from_str(&source).map_err(|err| CliError::input(name, source.clone(), &err))?;
        debug!(
            name = name,
            dividers = drawing.dividers.len();
            "Drawing file parsed"
        );
        Ok(drawing)
    }

    /// Reads and parses the drawing file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] if the file cannot be read, or
    /// [`CliError::Input`] if it is not a valid drawing.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let source = fs::read_to_string(path).map_err(|err| CliError::io(path, err))?;
        Self::parse(&path.display().to_string(), source)
    }
}

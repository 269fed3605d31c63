//! The layout engine and its drawing session.

use std::path::Path;

use log::{debug, info};

use mullion_core::draw::Scene;

use crate::{
    MullionError,
    config::AppConfig,
    export::{
        Exporter,
        svg::{Svg, SvgBuilder},
    },
    layout::{compose::SceneComposer, fit, overlap, position, thickness},
    palette::Palette,
    params::{Axis, CustomDivider, DrawingParameters},
    report::ConflictReport,
};

/// Where an engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing computed yet, or cleared.
    Empty,
    /// Holds the result of the last computation.
    Ready,
}

/// The result of one computation.
#[derive(Debug)]
struct Session {
    scene: Scene,
    report: ConflictReport,
}

/// Owns one drawing session.
///
/// Every [`compute_layout`](Self::compute_layout) call discards the previous
/// result and rebuilds the scene and conflict report from scratch; the inputs
/// are only borrowed.
///
/// # Examples
///
/// ```
/// # use mullion::{DrawingParameters, LayoutEngine, config::AppConfig};
/// let mut engine = LayoutEngine::new(AppConfig::default()).unwrap();
/// assert!(engine.export_svg().is_empty());
///
/// let params = DrawingParameters::new(600.0, 400.0).with_dividers(1, 0);
/// let report = engine.compute_layout(&params, &[]);
/// assert!(report.is_clean());
/// assert!(engine.export_svg().starts_with("<svg"));
///
/// engine.clear();
/// assert!(engine.export_svg().is_empty());
/// ```
#[derive(Debug)]
pub struct LayoutEngine {
    config: AppConfig,
    palette: Palette,
    exporter: Svg,
    session: Option<Session>,
}

impl LayoutEngine {
    /// Creates an engine in the empty state.
    ///
    /// # Errors
    ///
    /// Returns [`MullionError::Config`] if a configured color cannot be parsed.
    pub fn new(config: AppConfig) -> Result<Self, MullionError> {
        let palette = Palette::from_style(config.style()).map_err(MullionError::Config)?;
        let exporter = SvgBuilder::new(config.viewport().bounds())
            .with_background(palette.background())
            .build();

        Ok(Self {
            config,
            palette,
            exporter,
            session: None,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        match self.session {
            Some(_) => EngineState::Ready,
            None => EngineState::Empty,
        }
    }

    /// The fitted scene of the last computation.
    pub fn scene(&self) -> Option<&Scene> {
        self.session.as_ref().map(|session| &session.scene)
    }

    /// The conflict report of the last computation.
    pub fn report(&self) -> Option<&ConflictReport> {
        self.session.as_ref().map(|session| &session.report)
    }

    /// Lays out the frame, replacing any previous result.
    ///
    /// Never fails: out-of-range positions are clamped and conflicts are
    /// reported rather than rejected.
    pub fn compute_layout(
        &mut self,
        params: &DrawingParameters,
        custom_dividers: &[CustomDivider],
    ) -> &ConflictReport {
        info!(
            width = params.width,
            height = params.height,
            custom_dividers = custom_dividers.len();
            "Computing frame layout"
        );

        let vertical = position::resolve(Axis::Vertical, params, custom_dividers);
        let horizontal = position::resolve(Axis::Horizontal, params, custom_dividers);
        debug!(
            vertical = vertical.len(),
            horizontal = horizontal.len();
            "Dividers resolved"
        );

        let report = ConflictReport::new(
            overlap::detect(Axis::Horizontal, &horizontal, params.profile_height),
            overlap::detect(Axis::Vertical, &vertical, params.profile_width),
            thickness::validate(params),
        );

        let mut scene = SceneComposer::new(params, &self.palette).compose(&vertical, &horizontal);
        if let Some(bounds) = scene.bounds() {
            let viewport = self.config.viewport();
            scene.apply_transform(fit(bounds, viewport.bounds(), viewport.padding()));
        }

        info!(
            primitives = scene.len(),
            conflicts = report.overlap_groups().len();
            "Frame layout computed"
        );

        &self.session.insert(Session { scene, report }).report
    }

    /// Drops the current result and returns to the empty state.
    pub fn clear(&mut self) {
        debug!("Clearing frame layout");
        self.session = None;
    }

    /// Serializes the current scene to SVG, or returns an empty string when
    /// nothing has been computed.
    pub fn export_svg(&self) -> String {
        self.scene()
            .map(|scene| self.exporter.render(scene))
            .unwrap_or_default()
    }

    /// Writes the current scene as an SVG file.
    ///
    /// An empty engine writes an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`MullionError::Io`] if the file cannot be written.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<(), MullionError> {
        match self.scene() {
            Some(scene) => self.exporter.write_to(scene, path.as_ref()),
            None => Ok(std::fs::write(path, "")?),
        }
    }
}

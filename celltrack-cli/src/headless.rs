//! Headless validation: a settings window is built over the store without
//! any display, purely to exercise the panels' validation logic.

use celltrack_core::{SettingsWindow, ValidationError};
use params::TrackingParams;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_params(params: &TrackingParams) -> ValidationReport {
    let window = SettingsWindow::from_params(params);
    let errors = window.error_messages();
    if !errors.is_empty() {
        log::info!("headless validation found {} invalid parameter(s)", errors.len());
    }
    ValidationReport { errors }
}

pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ValidationReport, String> {
    let path = path.as_ref();
    let params = TrackingParams::load_from_file(path)
        .map_err(|e| format!("Failed to load params from {}: {e}", path.display()))?;
    Ok(validate_params(&params))
}

/// Full headless commit round-trip: push the store into drafts, validate,
/// and pull into a copy. The input store is never touched, so a failed
/// validation cannot leave partial writes behind.
pub fn commit_params(params: &TrackingParams) -> Result<TrackingParams, ValidationError> {
    let mut window = SettingsWindow::from_params(params);
    let mut committed = params.clone();
    window.commit(&mut committed)?;
    Ok(committed)
}

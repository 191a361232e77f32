use crate::panel::{AdvancedPanel, ConfigPanel, ControlPanel, HelpPanel, OptionsPanel};
use params::TrackingParams;

/// Fixed tab composition order. Display only; the control strip is not a tab.
pub const TAB_TITLES: [&str; 3] = ["Options", "Advanced", "Help"];

#[derive(thiserror::Error, Debug)]
#[error("invalid parameters:\n{}", .messages.join("\n"))]
pub struct ValidationError {
    pub messages: Vec<String>,
}

/// Composes the config panels and orchestrates the validate-then-commit
/// protocol. The parameter store is owned by the caller and only touched
/// inside `commit`.
#[derive(Debug, Default)]
pub struct SettingsWindow {
    pub options: OptionsPanel,
    pub advanced: AdvancedPanel,
    pub help: HelpPanel,
    pub control: ControlPanel,
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headless construction: the drafts mirror the given store without any
    /// display. This is the seam a run controller uses to validate
    /// programmatically populated parameters.
    pub fn from_params(params: &TrackingParams) -> Self {
        let mut window = Self::new();
        window.load_params(params);
        window
    }

    /// Refresh every draft from the store. Any pending edits are discarded
    /// and the window returns to the editable state.
    pub fn load_params(&mut self, params: &TrackingParams) {
        self.options.push_params(params);
        self.advanced.push_params(params);
        self.control.note_edit();
    }

    fn config_panels(&self) -> [&dyn ConfigPanel; 2] {
        [&self.options, &self.advanced]
    }

    /// Every invalid draft across all panels, in fixed panel order. Pure.
    pub fn error_messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        for panel in self.config_panels() {
            let errors = panel.error_string();
            if !errors.is_empty() {
                messages.extend(errors.lines().map(str::to_string));
            }
        }
        messages
    }

    pub fn error_string(&self) -> String {
        self.error_messages().join("\n")
    }

    /// Would `commit` fail right now. No side effects.
    pub fn has_error(&self) -> bool {
        self.config_panels().iter().any(|panel| panel.has_error())
    }

    /// Aggregate-validate, then pull every panel in fixed order. If any
    /// panel reports an error no panel writes, so the store never sees a
    /// partial commit. Committing twice without intervening edits leaves
    /// the store unchanged.
    pub fn commit(&mut self, params: &mut TrackingParams) -> Result<(), ValidationError> {
        let messages = self.error_messages();
        if !messages.is_empty() {
            self.control.note_rejected(messages.len());
            return Err(ValidationError { messages });
        }

        self.options.pull_params(params);
        self.advanced.pull_params(params);
        self.control.note_committed();
        Ok(())
    }
}

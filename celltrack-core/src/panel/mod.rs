pub mod advanced;
pub mod control;
pub mod help;
pub mod options;

pub use advanced::AdvancedPanel;
pub use control::{CommitState, ControlPanel, RunRequest};
pub use help::{HelpPanel, HelpTopic};
pub use options::OptionsPanel;

use params::TrackingParams;

/// A configuration panel owns the draft state for a disjoint subset of
/// `TrackingParams` fields. Validation and commit are deliberately separate
/// steps: the settings window aggregates `error_string` across every panel
/// before any panel is allowed to write.
pub trait ConfigPanel {
    fn title(&self) -> &'static str;

    /// One message per invalid draft, newline separated, empty when all
    /// drafts are committable. Pure read: never mutates drafts or the store.
    fn error_string(&self) -> String;

    /// Write every draft into the store. Callers must have confirmed that
    /// `error_string` is empty for this panel and all of its siblings; the
    /// panel does not re-validate here.
    fn pull_params(&self, params: &mut TrackingParams);

    /// Load the store's values into the drafts.
    fn push_params(&mut self, params: &TrackingParams);

    fn has_error(&self) -> bool {
        !self.error_string().is_empty()
    }
}

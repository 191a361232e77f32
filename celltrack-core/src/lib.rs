pub mod panel;
pub mod preferences;
pub mod validation;
pub mod window;

pub use panel::{
    AdvancedPanel, CommitState, ConfigPanel, ControlPanel, HelpPanel, HelpTopic, OptionsPanel,
    RunRequest,
};
pub use preferences::{PreferencesManager, ProfileEntry, PREFERENCES_FILE};
pub use window::{SettingsWindow, ValidationError, TAB_TITLES};

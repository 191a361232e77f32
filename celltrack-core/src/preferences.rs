use params::TrackingParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Persists the parameter store between sessions and manages named
/// parameter profiles saved alongside the preferences file.
pub struct PreferencesManager {
    pub params: TrackingParams,
    pub profile_entries: Vec<ProfileEntry>,
    prefs_dir: PathBuf,
}

impl PreferencesManager {
    pub fn new(prefs_dir: PathBuf) -> Self {
        let params = Self::load_preferences_file(&prefs_dir);
        Self {
            params,
            profile_entries: Vec::new(),
            prefs_dir,
        }
    }

    fn preferences_path_for(prefs_dir: &Path) -> PathBuf {
        prefs_dir.join(PREFERENCES_FILE)
    }

    /// A missing preferences file is a first run, not an error. A corrupt
    /// one is logged and replaced by defaults on the next save.
    fn load_preferences_file(prefs_dir: &Path) -> TrackingParams {
        let path = Self::preferences_path_for(prefs_dir);
        if !path.exists() {
            return TrackingParams::default();
        }
        match TrackingParams::load_from_file(&path) {
            Ok(params) => params,
            Err(err) => {
                log::warn!(
                    "failed to load preferences from {}: {err}",
                    path.display()
                );
                TrackingParams::default()
            }
        }
    }

    fn profile_file_path_for(prefs_dir: &Path, name: &str) -> PathBuf {
        let safe = name.trim().replace(' ', "_");
        prefs_dir.join(format!("{safe}.json"))
    }

    pub fn prefs_dir(&self) -> &Path {
        &self.prefs_dir
    }

    pub fn preferences_path(&self) -> PathBuf {
        Self::preferences_path_for(&self.prefs_dir)
    }

    pub fn save_preferences(&self) -> Result<(), String> {
        let _ = std::fs::create_dir_all(&self.prefs_dir);
        self.params
            .save_to_file(self.preferences_path())
            .map_err(|e| format!("Failed to save preferences: {e}"))
    }

    pub fn reload_preferences(&mut self) {
        self.params = Self::load_preferences_file(&self.prefs_dir);
    }

    pub fn profile_file_path(&self, name: &str) -> PathBuf {
        Self::profile_file_path_for(&self.prefs_dir, name)
    }

    pub fn scan_profiles(&mut self) {
        let mut entries = Vec::new();
        if let Ok(dir_entries) = std::fs::read_dir(&self.prefs_dir) {
            for entry in dir_entries.flatten() {
                let path = entry.path();
                if path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }
                if path.file_name().and_then(|s| s.to_str()) == Some(PREFERENCES_FILE) {
                    continue;
                }
                let Ok(data) = std::fs::read(&path) else {
                    continue;
                };
                if serde_json::from_slice::<TrackingParams>(&data).is_err() {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let name = name.to_string();
                entries.push(ProfileEntry { name, path });
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.profile_entries = entries;
    }

    pub fn save_profile_as(&mut self, name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Profile name must not be empty".to_string());
        }
        let path = self.profile_file_path(name);
        if path.file_name().and_then(|s| s.to_str()) == Some(PREFERENCES_FILE) {
            return Err("Profile name is reserved".to_string());
        }
        let _ = std::fs::create_dir_all(&self.prefs_dir);
        self.params
            .save_to_file(&path)
            .map_err(|e| format!("Failed to save profile: {e}"))?;
        self.scan_profiles();
        Ok(())
    }

    pub fn load_profile(&mut self, path: &Path) -> Result<(), String> {
        let loaded = TrackingParams::load_from_file(path)
            .map_err(|e| format!("Failed to load profile: {e}"))?;
        self.params = loaded;
        Ok(())
    }

    pub fn delete_profile(&mut self, name: &str) -> Result<(), String> {
        let path = self.profile_file_path(name);
        if !path.exists() {
            return Err("Profile not found".to_string());
        }
        std::fs::remove_file(&path).map_err(|e| format!("Failed to delete profile: {e}"))?;
        self.scan_profiles();
        Ok(())
    }
}

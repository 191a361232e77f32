use crate::output;
use celltrack_cli::{apply_params_patch, commit_params, parse_set_arg, validate_params};
use celltrack_core::{HelpPanel, PreferencesManager};
use params::TrackingParams;
use std::path::{Path, PathBuf};

pub fn default_prefs_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CELLTRACK_PREFS_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var("HOME") {
        Ok(home) => Path::new(&home).join(".celltrack"),
        Err(_) => PathBuf::from(".celltrack"),
    }
}

fn apply_set_args(params: &mut TrackingParams, set: &[String]) -> Result<(), String> {
    for arg in set {
        let (key, value) = parse_set_arg(arg)?;
        let mut patch = serde_json::Map::new();
        patch.insert(key, value);
        apply_params_patch(params, &serde_json::Value::Object(patch))?;
    }
    Ok(())
}

fn effective_params(
    prefs_dir: &Path,
    params_path: Option<&Path>,
    set: &[String],
) -> Result<TrackingParams, String> {
    let mut params = match params_path {
        Some(path) => TrackingParams::load_from_file(path)
            .map_err(|e| format!("Failed to load params from {}: {e}", path.display()))?,
        None => PreferencesManager::new(prefs_dir.to_path_buf()).params,
    };
    apply_set_args(&mut params, set)?;
    Ok(params)
}

pub fn handle_validate(prefs_dir: &Path, params_path: Option<&Path>, set: &[String]) -> i32 {
    let params = match effective_params(prefs_dir, params_path, set) {
        Ok(params) => params,
        Err(err) => {
            output::print_error(&err);
            return 2;
        }
    };

    let report = validate_params(&params);
    if report.is_ok() {
        output::print_info("All parameters valid");
        0
    } else {
        output::print_error("Invalid parameter(s):");
        for message in &report.errors {
            eprintln!("{message}");
        }
        1
    }
}

pub fn handle_defaults(out: Option<&Path>) -> i32 {
    let defaults = TrackingParams::default();
    match out {
        Some(path) => match defaults.save_to_file(path) {
            Ok(()) => {
                output::print_info(&format!("Defaults written to {}", path.display()));
                0
            }
            Err(err) => {
                output::print_error(&format!("Failed to write defaults: {err}"));
                2
            }
        },
        None => {
            output::print_params(&defaults);
            0
        }
    }
}

pub fn handle_show(prefs_dir: &Path, params_path: Option<&Path>) -> i32 {
    match effective_params(prefs_dir, params_path, &[]) {
        Ok(params) => {
            output::print_params(&params);
            0
        }
        Err(err) => {
            output::print_error(&err);
            2
        }
    }
}

pub fn handle_set(prefs_dir: &Path, set: &[String]) -> i32 {
    let mut manager = PreferencesManager::new(prefs_dir.to_path_buf());
    if let Err(err) = apply_set_args(&mut manager.params, set) {
        output::print_error(&err);
        return 2;
    }

    match commit_params(&manager.params) {
        Ok(committed) => manager.params = committed,
        Err(err) => {
            output::print_error("Invalid parameter(s):");
            for message in &err.messages {
                eprintln!("{message}");
            }
            return 1;
        }
    }

    match manager.save_preferences() {
        Ok(()) => {
            output::print_info("Preferences saved");
            0
        }
        Err(err) => {
            output::print_error(&err);
            2
        }
    }
}

pub fn handle_explain(key: &str) -> i32 {
    let help = HelpPanel::new();
    match help.topic(key) {
        Some(topic) => {
            output::print_topic(topic);
            0
        }
        None => {
            output::print_error(&format!("No such parameter: {key}"));
            let keys: Vec<&str> = help.topics().iter().map(|t| t.key).collect();
            eprintln!("Known parameters: {}", keys.join(", "));
            1
        }
    }
}

pub fn handle_profile_list(prefs_dir: &Path) -> i32 {
    let mut manager = PreferencesManager::new(prefs_dir.to_path_buf());
    manager.scan_profiles();
    output::print_profile_list(&manager.profile_entries);
    0
}

pub fn handle_profile_save(prefs_dir: &Path, name: &str) -> i32 {
    let mut manager = PreferencesManager::new(prefs_dir.to_path_buf());
    match manager.save_profile_as(name) {
        Ok(()) => {
            output::print_info(&format!("Profile '{name}' saved"));
            0
        }
        Err(err) => {
            output::print_error(&err);
            2
        }
    }
}

pub fn handle_profile_delete(prefs_dir: &Path, name: &str) -> i32 {
    let mut manager = PreferencesManager::new(prefs_dir.to_path_buf());
    match manager.delete_profile(name) {
        Ok(()) => {
            output::print_info(&format!("Profile '{name}' deleted"));
            0
        }
        Err(err) => {
            output::print_error(&err);
            2
        }
    }
}

pub fn handle_profile_load(prefs_dir: &Path, name: &str) -> i32 {
    let mut manager = PreferencesManager::new(prefs_dir.to_path_buf());
    let path = manager.profile_file_path(name);
    if let Err(err) = manager.load_profile(&path) {
        output::print_error(&err);
        return 2;
    }
    match manager.save_preferences() {
        Ok(()) => {
            output::print_info(&format!("Profile '{name}' loaded into preferences"));
            0
        }
        Err(err) => {
            output::print_error(&err);
            2
        }
    }
}

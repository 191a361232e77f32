use celltrack_core::{HelpTopic, ProfileEntry};
use params::TrackingParams;

pub fn print_info(message: &str) {
    println!("[CellTrack][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[CellTrack][ERROR]: {message}");
}

pub fn print_params(params: &TrackingParams) {
    match serde_json::to_string_pretty(params) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => print_error(&format!("Failed to render params: {err}")),
    }
}

pub fn print_topic(topic: &HelpTopic) {
    println!("{} ({})", topic.title, topic.key);
    println!("{}", topic.body);
}

pub fn print_profile_list(entries: &[ProfileEntry]) {
    if entries.is_empty() {
        print_info("No profiles saved");
    } else {
        print_info("List of profiles:");
        for entry in entries {
            println!("{} ({})", entry.name, entry.path.display());
        }
    }
}

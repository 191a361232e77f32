pub mod headless;
pub mod patch;

pub use headless::{commit_params, validate_file, validate_params, ValidationReport};
pub use patch::{apply_params_json, apply_params_patch, parse_set_arg};

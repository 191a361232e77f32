//! JSON patches against the parameter store. Type checking happens here,
//! per key; range checking is the headless validation pass's job, so a
//! patched store always goes through validate before it is persisted.

use params::TrackingParams;
use serde_json::Value;

fn expect_str(key: &str, value: &Value) -> Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("{key} must be a string"))
}

fn expect_f64(key: &str, value: &Value) -> Result<f64, String> {
    value
        .as_f64()
        .ok_or_else(|| format!("{key} must be a number"))
}

fn expect_u32(key: &str, value: &Value) -> Result<u32, String> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| format!("{key} must be a non-negative whole number"))
}

fn expect_bool(key: &str, value: &Value) -> Result<bool, String> {
    value
        .as_bool()
        .ok_or_else(|| format!("{key} must be true or false"))
}

pub fn apply_params_patch(params: &mut TrackingParams, patch: &Value) -> Result<(), String> {
    let obj = patch
        .as_object()
        .ok_or_else(|| "Params patch must be a JSON object".to_string())?;

    for (key, value) in obj {
        match key.as_str() {
            "input_directory" => params.input_directory = expect_str(key, value)?,
            "filename_pattern" => params.filename_pattern = expect_str(key, value)?,
            "output_directory" => params.output_directory = expect_str(key, value)?,
            "output_prefix" => params.output_prefix = expect_str(key, value)?,
            "weight_cell_overlap" => params.weight_cell_overlap = expect_f64(key, value)?,
            "weight_centroids" => params.weight_centroids = expect_f64(key, value)?,
            "weight_cell_size" => params.weight_cell_size = expect_f64(key, value)?,
            "max_centroid_distance" => params.max_centroid_distance = expect_f64(key, value)?,
            "enable_cell_division" => params.enable_cell_division = expect_bool(key, value)?,
            "enable_cell_fusion" => params.enable_cell_fusion = expect_bool(key, value)?,
            "min_cell_life" => params.min_cell_life = expect_u32(key, value)?,
            "cell_death_delta_threshold" => {
                params.cell_death_delta_threshold = expect_f64(key, value)?
            }
            "cell_density_affects_ci" => {
                params.cell_density_affects_ci = expect_bool(key, value)?
            }
            "border_cell_affects_ci" => params.border_cell_affects_ci = expect_bool(key, value)?,
            "daughter_size_similarity" => {
                params.daughter_size_similarity = expect_f64(key, value)?
            }
            "daughter_aspect_ratio_similarity" => {
                params.daughter_aspect_ratio_similarity = expect_f64(key, value)?
            }
            "mother_circularity_threshold" => {
                params.mother_circularity_threshold = expect_f64(key, value)?
            }
            "num_frames_check_circularity" => {
                params.num_frames_check_circularity = expect_u32(key, value)?
            }
            "division_overlap_threshold" => {
                params.division_overlap_threshold = expect_f64(key, value)?
            }
            "fusion_overlap_threshold" => {
                params.fusion_overlap_threshold = expect_f64(key, value)?
            }
            "min_division_cell_life" => params.min_division_cell_life = expect_u32(key, value)?,
            _ => return Err(format!("Unknown parameter: {key}")),
        }
    }
    Ok(())
}

pub fn apply_params_json(params: &mut TrackingParams, json: &str) -> Result<(), String> {
    let value: Value = serde_json::from_str(json).map_err(|e| format!("Invalid JSON: {e}"))?;
    apply_params_patch(params, &value)
}

/// `key=value` pairs from the command line. Values parse as JSON scalars
/// so `true`, `0.5`, and `32` keep their types; anything that does not
/// parse is taken as a plain string (paths, prefixes).
pub fn parse_set_arg(arg: &str) -> Result<(String, Value), String> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("Expected key=value, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Expected key=value, got '{arg}'"));
    }
    let raw = raw.trim();
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) if !value.is_array() && !value.is_object() => value,
        Ok(_) => return Err(format!("{key} must be a scalar value")),
        Err(_) => Value::String(raw.to_string()),
    };
    Ok((key.to_string(), value))
}

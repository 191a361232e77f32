use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings consumed by the tracking engine. Mutated only through the
/// settings window commit protocol; range checks live in the panels,
/// not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingParams {
    pub input_directory: String,
    pub filename_pattern: String,
    pub output_directory: String,
    pub output_prefix: String,
    pub weight_cell_overlap: f64,
    pub weight_centroids: f64,
    pub weight_cell_size: f64,
    pub max_centroid_distance: f64,
    pub enable_cell_division: bool,
    pub enable_cell_fusion: bool,
    pub min_cell_life: u32,
    pub cell_death_delta_threshold: f64,
    pub cell_density_affects_ci: bool,
    pub border_cell_affects_ci: bool,
    pub daughter_size_similarity: f64,
    pub daughter_aspect_ratio_similarity: f64,
    pub mother_circularity_threshold: f64,
    pub num_frames_check_circularity: u32,
    pub division_overlap_threshold: f64,
    pub fusion_overlap_threshold: f64,
    pub min_division_cell_life: u32,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            input_directory: String::new(),
            filename_pattern: "img_{iii}.tif".to_string(),
            output_directory: String::new(),
            output_prefix: "trk-".to_string(),
            weight_cell_overlap: 1.0,
            weight_centroids: 0.5,
            weight_cell_size: 0.2,
            max_centroid_distance: 50.0,
            enable_cell_division: true,
            enable_cell_fusion: false,
            min_cell_life: 32,
            cell_death_delta_threshold: 10.0,
            cell_density_affects_ci: true,
            border_cell_affects_ci: true,
            daughter_size_similarity: 0.5,
            daughter_aspect_ratio_similarity: 0.7,
            mother_circularity_threshold: 0.3,
            num_frames_check_circularity: 5,
            division_overlap_threshold: 0.2,
            fusion_overlap_threshold: 0.2,
            min_division_cell_life: 21,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackingParams {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ParamsError> {
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParamsError> {
        let data = fs::read(path)?;
        let params = serde_json::from_slice(&data)?;
        Ok(params)
    }
}

use super::ConfigPanel;
use crate::validation;
use params::TrackingParams;

const INPUT_DIRECTORY: &str = "Input directory";
const FILENAME_PATTERN: &str = "Filename pattern";
const OUTPUT_DIRECTORY: &str = "Output directory";
const WEIGHT_CELL_OVERLAP: &str = "Weight cell overlap";
const WEIGHT_CENTROIDS: &str = "Weight centroids";
const WEIGHT_CELL_SIZE: &str = "Weight cell size";
const MAX_CENTROID_DISTANCE: &str = "Max centroid distance";

/// Main tracking options: image locations and the cost-function weights.
/// Numeric drafts are kept as text-widget state and only parsed on
/// validation and commit.
#[derive(Debug, Clone)]
pub struct OptionsPanel {
    pub input_directory: String,
    pub filename_pattern: String,
    pub output_directory: String,
    pub output_prefix: String,
    pub weight_cell_overlap: String,
    pub weight_centroids: String,
    pub weight_cell_size: String,
    pub max_centroid_distance: String,
    pub enable_cell_division: bool,
    pub enable_cell_fusion: bool,
}

impl OptionsPanel {
    pub fn new() -> Self {
        let mut panel = Self {
            input_directory: String::new(),
            filename_pattern: String::new(),
            output_directory: String::new(),
            output_prefix: String::new(),
            weight_cell_overlap: String::new(),
            weight_centroids: String::new(),
            weight_cell_size: String::new(),
            max_centroid_distance: String::new(),
            enable_cell_division: true,
            enable_cell_fusion: false,
        };
        panel.push_params(&TrackingParams::default());
        panel
    }
}

impl Default for OptionsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPanel for OptionsPanel {
    fn title(&self) -> &'static str {
        "Options"
    }

    fn error_string(&self) -> String {
        let mut errors = Vec::new();
        if let Err(err) = validation::check_nonempty(INPUT_DIRECTORY, &self.input_directory) {
            errors.push(err);
        }
        if let Err(err) =
            validation::check_filename_pattern(FILENAME_PATTERN, &self.filename_pattern)
        {
            errors.push(err);
        }
        if let Err(err) = validation::check_nonempty(OUTPUT_DIRECTORY, &self.output_directory) {
            errors.push(err);
        }
        if let Err(err) =
            validation::parse_fraction(WEIGHT_CELL_OVERLAP, &self.weight_cell_overlap)
        {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(WEIGHT_CENTROIDS, &self.weight_centroids) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(WEIGHT_CELL_SIZE, &self.weight_cell_size) {
            errors.push(err);
        }
        if let Err(err) =
            validation::parse_nonnegative(MAX_CENTROID_DISTANCE, &self.max_centroid_distance)
        {
            errors.push(err);
        }
        errors.join("\n")
    }

    fn pull_params(&self, params: &mut TrackingParams) {
        params.input_directory = self.input_directory.trim().to_string();
        params.filename_pattern = self.filename_pattern.trim().to_string();
        params.output_directory = self.output_directory.trim().to_string();
        params.output_prefix = self.output_prefix.trim().to_string();
        if let Ok(value) =
            validation::parse_fraction(WEIGHT_CELL_OVERLAP, &self.weight_cell_overlap)
        {
            params.weight_cell_overlap = value;
        }
        if let Ok(value) = validation::parse_fraction(WEIGHT_CENTROIDS, &self.weight_centroids) {
            params.weight_centroids = value;
        }
        if let Ok(value) = validation::parse_fraction(WEIGHT_CELL_SIZE, &self.weight_cell_size) {
            params.weight_cell_size = value;
        }
        if let Ok(value) =
            validation::parse_nonnegative(MAX_CENTROID_DISTANCE, &self.max_centroid_distance)
        {
            params.max_centroid_distance = value;
        }
        params.enable_cell_division = self.enable_cell_division;
        params.enable_cell_fusion = self.enable_cell_fusion;
    }

    fn push_params(&mut self, params: &TrackingParams) {
        self.input_directory = params.input_directory.clone();
        self.filename_pattern = params.filename_pattern.clone();
        self.output_directory = params.output_directory.clone();
        self.output_prefix = params.output_prefix.clone();
        self.weight_cell_overlap = params.weight_cell_overlap.to_string();
        self.weight_centroids = params.weight_centroids.to_string();
        self.weight_cell_size = params.weight_cell_size.to_string();
        self.max_centroid_distance = params.max_centroid_distance.to_string();
        self.enable_cell_division = params.enable_cell_division;
        self.enable_cell_fusion = params.enable_cell_fusion;
    }
}

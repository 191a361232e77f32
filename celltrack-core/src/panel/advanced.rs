use super::ConfigPanel;
use crate::validation;
use params::TrackingParams;

const MIN_CELL_LIFE: &str = "Min cell life";
const CELL_DEATH_DELTA_THRESHOLD: &str = "Cell death delta threshold";
const DAUGHTER_SIZE_SIMILARITY: &str = "Daughter size similarity";
const DAUGHTER_ASPECT_RATIO_SIMILARITY: &str = "Daughter aspect ratio similarity";
const MOTHER_CIRCULARITY_THRESHOLD: &str = "Mother circularity threshold";
const NUM_FRAMES_CHECK_CIRCULARITY: &str = "Frames to check circularity";
const DIVISION_OVERLAP_THRESHOLD: &str = "Division overlap threshold";
const FUSION_OVERLAP_THRESHOLD: &str = "Fusion overlap threshold";
const MIN_DIVISION_CELL_LIFE: &str = "Min division cell life";

/// Division, fusion, and confidence-index tuning. Field ownership is
/// disjoint from the options panel.
#[derive(Debug, Clone)]
pub struct AdvancedPanel {
    pub min_cell_life: String,
    pub cell_death_delta_threshold: String,
    pub cell_density_affects_ci: bool,
    pub border_cell_affects_ci: bool,
    pub daughter_size_similarity: String,
    pub daughter_aspect_ratio_similarity: String,
    pub mother_circularity_threshold: String,
    pub num_frames_check_circularity: String,
    pub division_overlap_threshold: String,
    pub fusion_overlap_threshold: String,
    pub min_division_cell_life: String,
}

impl AdvancedPanel {
    pub fn new() -> Self {
        let mut panel = Self {
            min_cell_life: String::new(),
            cell_death_delta_threshold: String::new(),
            cell_density_affects_ci: true,
            border_cell_affects_ci: true,
            daughter_size_similarity: String::new(),
            daughter_aspect_ratio_similarity: String::new(),
            mother_circularity_threshold: String::new(),
            num_frames_check_circularity: String::new(),
            division_overlap_threshold: String::new(),
            fusion_overlap_threshold: String::new(),
            min_division_cell_life: String::new(),
        };
        panel.push_params(&TrackingParams::default());
        panel
    }
}

impl Default for AdvancedPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPanel for AdvancedPanel {
    fn title(&self) -> &'static str {
        "Advanced"
    }

    fn error_string(&self) -> String {
        let mut errors = Vec::new();
        if let Err(err) = validation::parse_count(MIN_CELL_LIFE, &self.min_cell_life, 0) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_nonnegative(
            CELL_DEATH_DELTA_THRESHOLD,
            &self.cell_death_delta_threshold,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(
            DAUGHTER_SIZE_SIMILARITY,
            &self.daughter_size_similarity,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(
            DAUGHTER_ASPECT_RATIO_SIMILARITY,
            &self.daughter_aspect_ratio_similarity,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(
            MOTHER_CIRCULARITY_THRESHOLD,
            &self.mother_circularity_threshold,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_count(
            NUM_FRAMES_CHECK_CIRCULARITY,
            &self.num_frames_check_circularity,
            1,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(
            DIVISION_OVERLAP_THRESHOLD,
            &self.division_overlap_threshold,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_fraction(
            FUSION_OVERLAP_THRESHOLD,
            &self.fusion_overlap_threshold,
        ) {
            errors.push(err);
        }
        if let Err(err) = validation::parse_count(
            MIN_DIVISION_CELL_LIFE,
            &self.min_division_cell_life,
            0,
        ) {
            errors.push(err);
        }
        errors.join("\n")
    }

    fn pull_params(&self, params: &mut TrackingParams) {
        if let Ok(value) = validation::parse_count(MIN_CELL_LIFE, &self.min_cell_life, 0) {
            params.min_cell_life = value;
        }
        if let Ok(value) = validation::parse_nonnegative(
            CELL_DEATH_DELTA_THRESHOLD,
            &self.cell_death_delta_threshold,
        ) {
            params.cell_death_delta_threshold = value;
        }
        params.cell_density_affects_ci = self.cell_density_affects_ci;
        params.border_cell_affects_ci = self.border_cell_affects_ci;
        if let Ok(value) = validation::parse_fraction(
            DAUGHTER_SIZE_SIMILARITY,
            &self.daughter_size_similarity,
        ) {
            params.daughter_size_similarity = value;
        }
        if let Ok(value) = validation::parse_fraction(
            DAUGHTER_ASPECT_RATIO_SIMILARITY,
            &self.daughter_aspect_ratio_similarity,
        ) {
            params.daughter_aspect_ratio_similarity = value;
        }
        if let Ok(value) = validation::parse_fraction(
            MOTHER_CIRCULARITY_THRESHOLD,
            &self.mother_circularity_threshold,
        ) {
            params.mother_circularity_threshold = value;
        }
        if let Ok(value) = validation::parse_count(
            NUM_FRAMES_CHECK_CIRCULARITY,
            &self.num_frames_check_circularity,
            1,
        ) {
            params.num_frames_check_circularity = value;
        }
        if let Ok(value) = validation::parse_fraction(
            DIVISION_OVERLAP_THRESHOLD,
            &self.division_overlap_threshold,
        ) {
            params.division_overlap_threshold = value;
        }
        if let Ok(value) = validation::parse_fraction(
            FUSION_OVERLAP_THRESHOLD,
            &self.fusion_overlap_threshold,
        ) {
            params.fusion_overlap_threshold = value;
        }
        if let Ok(value) = validation::parse_count(
            MIN_DIVISION_CELL_LIFE,
            &self.min_division_cell_life,
            0,
        ) {
            params.min_division_cell_life = value;
        }
    }

    fn push_params(&mut self, params: &TrackingParams) {
        self.min_cell_life = params.min_cell_life.to_string();
        self.cell_death_delta_threshold = params.cell_death_delta_threshold.to_string();
        self.cell_density_affects_ci = params.cell_density_affects_ci;
        self.border_cell_affects_ci = params.border_cell_affects_ci;
        self.daughter_size_similarity = params.daughter_size_similarity.to_string();
        self.daughter_aspect_ratio_similarity =
            params.daughter_aspect_ratio_similarity.to_string();
        self.mother_circularity_threshold = params.mother_circularity_threshold.to_string();
        self.num_frames_check_circularity = params.num_frames_check_circularity.to_string();
        self.division_overlap_threshold = params.division_overlap_threshold.to_string();
        self.fusion_overlap_threshold = params.fusion_overlap_threshold.to_string();
        self.min_division_cell_life = params.min_division_cell_life.to_string();
    }
}

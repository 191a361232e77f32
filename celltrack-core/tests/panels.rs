use celltrack_core::{AdvancedPanel, ConfigPanel, OptionsPanel};
use params::TrackingParams;

fn valid_options_panel() -> OptionsPanel {
    let mut panel = OptionsPanel::new();
    panel.input_directory = "/data/frames".to_string();
    panel.output_directory = "/data/out".to_string();
    panel
}

#[test]
fn default_options_panel_reports_missing_directories() {
    let panel = OptionsPanel::new();
    let errors = panel.error_string();
    assert!(errors.contains("Input directory must not be empty"));
    assert!(errors.contains("Output directory must not be empty"));
    assert!(panel.has_error());
}

#[test]
fn valid_options_panel_has_no_errors() {
    let panel = valid_options_panel();
    assert_eq!(panel.error_string(), "");
    assert!(!panel.has_error());
}

#[test]
fn options_panel_rejects_out_of_range_weight() {
    let mut panel = valid_options_panel();
    panel.weight_centroids = "1.5".to_string();
    assert!(panel
        .error_string()
        .contains("Weight centroids must be between 0 and 1"));

    panel.weight_centroids = "abc".to_string();
    assert!(panel
        .error_string()
        .contains("Weight centroids must be a number"));
}

#[test]
fn options_panel_rejects_pattern_without_placeholder() {
    let mut panel = valid_options_panel();
    panel.filename_pattern = "img_000.tif".to_string();
    assert!(panel.error_string().contains("Filename pattern"));

    panel.filename_pattern = "img_{iiii}.tif".to_string();
    assert_eq!(panel.error_string(), "");
}

#[test]
fn error_string_is_side_effect_free() {
    let mut panel = valid_options_panel();
    panel.weight_cell_size = "2.0".to_string();
    let before = panel.clone();
    for _ in 0..3 {
        let _ = panel.error_string();
        let _ = panel.has_error();
    }
    assert_eq!(format!("{panel:?}"), format!("{before:?}"));

    let params_before = TrackingParams::default();
    let params_after = params_before.clone();
    let _ = panel.error_string();
    assert_eq!(params_before, params_after);
}

#[test]
fn pull_and_push_round_trip_options() {
    let mut panel = valid_options_panel();
    panel.weight_cell_overlap = "0.8".to_string();
    panel.max_centroid_distance = "75".to_string();
    panel.enable_cell_fusion = true;

    let mut params = TrackingParams::default();
    panel.pull_params(&mut params);
    assert_eq!(params.input_directory, "/data/frames");
    assert_eq!(params.weight_cell_overlap, 0.8);
    assert_eq!(params.max_centroid_distance, 75.0);
    assert!(params.enable_cell_fusion);

    let mut fresh = OptionsPanel::new();
    fresh.push_params(&params);
    assert_eq!(fresh.input_directory, "/data/frames");
    assert_eq!(fresh.weight_cell_overlap, "0.8");
    assert!(fresh.enable_cell_fusion);
}

#[test]
fn advanced_panel_validates_counts_and_fractions() {
    let mut panel = AdvancedPanel::new();
    assert_eq!(panel.error_string(), "");

    panel.num_frames_check_circularity = "0".to_string();
    assert!(panel
        .error_string()
        .contains("Frames to check circularity must be at least 1"));

    panel.num_frames_check_circularity = "5".to_string();
    panel.min_cell_life = "-3".to_string();
    assert!(panel
        .error_string()
        .contains("Min cell life must be a whole number"));

    panel.min_cell_life = "10".to_string();
    panel.mother_circularity_threshold = "7".to_string();
    assert!(panel
        .error_string()
        .contains("Mother circularity threshold must be between 0 and 1"));
}

#[test]
fn panel_field_ownership_is_disjoint() {
    // Pulling one panel must leave every field the other panel owns intact.
    let sentinel = TrackingParams {
        input_directory: "sentinel-in".to_string(),
        filename_pattern: "sentinel_{i}.tif".to_string(),
        output_directory: "sentinel-out".to_string(),
        output_prefix: "sentinel-".to_string(),
        weight_cell_overlap: 0.11,
        weight_centroids: 0.12,
        weight_cell_size: 0.13,
        max_centroid_distance: 14.0,
        enable_cell_division: false,
        enable_cell_fusion: true,
        min_cell_life: 101,
        cell_death_delta_threshold: 102.0,
        cell_density_affects_ci: false,
        border_cell_affects_ci: false,
        daughter_size_similarity: 0.21,
        daughter_aspect_ratio_similarity: 0.22,
        mother_circularity_threshold: 0.23,
        num_frames_check_circularity: 24,
        division_overlap_threshold: 0.25,
        fusion_overlap_threshold: 0.26,
        min_division_cell_life: 27,
    };

    let mut params = sentinel.clone();
    valid_options_panel().pull_params(&mut params);
    assert_eq!(params.min_cell_life, sentinel.min_cell_life);
    assert_eq!(
        params.cell_death_delta_threshold,
        sentinel.cell_death_delta_threshold
    );
    assert_eq!(params.cell_density_affects_ci, sentinel.cell_density_affects_ci);
    assert_eq!(params.border_cell_affects_ci, sentinel.border_cell_affects_ci);
    assert_eq!(
        params.daughter_size_similarity,
        sentinel.daughter_size_similarity
    );
    assert_eq!(
        params.daughter_aspect_ratio_similarity,
        sentinel.daughter_aspect_ratio_similarity
    );
    assert_eq!(
        params.mother_circularity_threshold,
        sentinel.mother_circularity_threshold
    );
    assert_eq!(
        params.num_frames_check_circularity,
        sentinel.num_frames_check_circularity
    );
    assert_eq!(
        params.division_overlap_threshold,
        sentinel.division_overlap_threshold
    );
    assert_eq!(
        params.fusion_overlap_threshold,
        sentinel.fusion_overlap_threshold
    );
    assert_eq!(params.min_division_cell_life, sentinel.min_division_cell_life);

    let mut params = sentinel.clone();
    AdvancedPanel::new().pull_params(&mut params);
    assert_eq!(params.input_directory, sentinel.input_directory);
    assert_eq!(params.filename_pattern, sentinel.filename_pattern);
    assert_eq!(params.output_directory, sentinel.output_directory);
    assert_eq!(params.output_prefix, sentinel.output_prefix);
    assert_eq!(params.weight_cell_overlap, sentinel.weight_cell_overlap);
    assert_eq!(params.weight_centroids, sentinel.weight_centroids);
    assert_eq!(params.weight_cell_size, sentinel.weight_cell_size);
    assert_eq!(params.max_centroid_distance, sentinel.max_centroid_distance);
    assert_eq!(params.enable_cell_division, sentinel.enable_cell_division);
    assert_eq!(params.enable_cell_fusion, sentinel.enable_cell_fusion);
}

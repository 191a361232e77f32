use params::TrackingParams;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_path() -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("celltrack_params_{unique}.json"));
    path
}

#[test]
fn save_and_load_params() {
    let path = unique_temp_path();

    let params = TrackingParams {
        input_directory: "/data/frames".to_string(),
        output_directory: "/data/out".to_string(),
        weight_centroids: 0.75,
        enable_cell_fusion: true,
        min_cell_life: 12,
        ..TrackingParams::default()
    };

    params.save_to_file(&path).unwrap();
    let loaded = TrackingParams::load_from_file(&path).unwrap();

    assert_eq!(loaded, params);

    fs::remove_file(&path).unwrap();
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let path = unique_temp_path();
    fs::write(
        &path,
        r#"{"input_directory": "/data/frames", "weight_cell_size": 0.9}"#,
    )
    .unwrap();

    let loaded = TrackingParams::load_from_file(&path).unwrap();
    assert_eq!(loaded.input_directory, "/data/frames");
    assert_eq!(loaded.weight_cell_size, 0.9);
    assert_eq!(
        loaded.filename_pattern,
        TrackingParams::default().filename_pattern
    );
    assert_eq!(loaded.min_cell_life, TrackingParams::default().min_cell_life);

    fs::remove_file(&path).unwrap();
}

#[test]
fn load_missing_file_is_io_error() {
    let path = unique_temp_path();
    let err = TrackingParams::load_from_file(&path).unwrap_err();
    assert!(matches!(err, params::ParamsError::Io(_)));
}

#[test]
fn load_malformed_file_is_json_error() {
    let path = unique_temp_path();
    fs::write(&path, "not json at all").unwrap();
    let err = TrackingParams::load_from_file(&path).unwrap_err();
    assert!(matches!(err, params::ParamsError::Json(_)));
    fs::remove_file(&path).unwrap();
}

#[test]
fn defaults_are_within_documented_ranges() {
    let params = TrackingParams::default();
    for weight in [
        params.weight_cell_overlap,
        params.weight_centroids,
        params.weight_cell_size,
        params.daughter_size_similarity,
        params.daughter_aspect_ratio_similarity,
        params.mother_circularity_threshold,
        params.division_overlap_threshold,
        params.fusion_overlap_threshold,
    ] {
        assert!((0.0..=1.0).contains(&weight));
    }
    assert!(params.max_centroid_distance >= 0.0);
    assert!(params.num_frames_check_circularity >= 1);
}

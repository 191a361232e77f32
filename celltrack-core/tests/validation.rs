use celltrack_core::validation;

#[test]
fn fraction_accepts_bounds_and_rejects_outside() {
    assert_eq!(validation::parse_fraction("W", "0"), Ok(0.0));
    assert_eq!(validation::parse_fraction("W", "1"), Ok(1.0));
    assert_eq!(validation::parse_fraction("W", " 0.25 "), Ok(0.25));
    assert!(validation::parse_fraction("W", "-0.1").is_err());
    assert!(validation::parse_fraction("W", "1.01").is_err());
    assert!(validation::parse_fraction("W", "NaN").is_err());
    assert_eq!(
        validation::parse_fraction("W", "x").unwrap_err(),
        "W must be a number"
    );
}

#[test]
fn nonnegative_rejects_negatives_and_infinities() {
    assert_eq!(validation::parse_nonnegative("D", "12.5"), Ok(12.5));
    assert_eq!(validation::parse_nonnegative("D", "0"), Ok(0.0));
    assert!(validation::parse_nonnegative("D", "-1").is_err());
    assert!(validation::parse_nonnegative("D", "inf").is_err());
}

#[test]
fn count_enforces_minimum() {
    assert_eq!(validation::parse_count("N", "5", 1), Ok(5));
    assert_eq!(
        validation::parse_count("N", "0", 1).unwrap_err(),
        "N must be at least 1"
    );
    assert!(validation::parse_count("N", "3.5", 0).is_err());
    assert!(validation::parse_count("N", "-2", 0).is_err());
}

#[test]
fn filename_pattern_requires_braced_index_run() {
    assert!(validation::check_filename_pattern("P", "img_{iii}.tif").is_ok());
    assert!(validation::check_filename_pattern("P", "{i}.png").is_ok());
    assert!(validation::check_filename_pattern("P", "img_000.tif").is_err());
    assert!(validation::check_filename_pattern("P", "img_{}.tif").is_err());
    assert!(validation::check_filename_pattern("P", "img_{abc}.tif").is_err());
    assert!(validation::check_filename_pattern("P", "").is_err());
}

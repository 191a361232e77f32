//! Draft value checks shared by the config panels. Every helper reports a
//! message naming the field label so the window can aggregate them verbatim.

pub fn parse_fraction(label: &str, text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("{label} must be a number"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{label} must be between 0 and 1"));
    }
    Ok(value)
}

pub fn parse_nonnegative(label: &str, text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("{label} must be a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{label} must be zero or greater"));
    }
    Ok(value)
}

pub fn parse_count(label: &str, text: &str, min: u32) -> Result<u32, String> {
    let value: u32 = text
        .trim()
        .parse()
        .map_err(|_| format!("{label} must be a whole number"))?;
    if value < min {
        return Err(format!("{label} must be at least {min}"));
    }
    Ok(value)
}

pub fn check_nonempty(label: &str, text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err(format!("{label} must not be empty"));
    }
    Ok(())
}

/// The frame index placeholder is a braced run of `i` characters,
/// e.g. `img_{iii}.tif` matches frames `img_000.tif`, `img_001.tif`, ...
pub fn check_filename_pattern(label: &str, text: &str) -> Result<(), String> {
    check_nonempty(label, text)?;
    let has_placeholder = text.match_indices('{').any(|(start, _)| {
        let rest = &text[start + 1..];
        match rest.find('}') {
            Some(end) if end > 0 => rest[..end].chars().all(|c| c == 'i'),
            _ => false,
        }
    });
    if !has_placeholder {
        return Err(format!(
            "{label} must contain a frame index placeholder like {{iii}}"
        ));
    }
    Ok(())
}

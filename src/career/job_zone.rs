pub const UNRATED: &str = "n/a";

/// Renders a job-zone cell. Numbers become whole integers (`"3.0"` is
/// `"3"`); anything else is kept as trimmed text.
pub fn normalize_job_zone(raw: Option<&str>) -> String {
    let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return UNRATED.to_string();
    };
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{}", value.trunc() as i64),
        _ => text.to_string(),
    }
}

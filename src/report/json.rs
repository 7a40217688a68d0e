use crate::types::report::ReportBundle;

pub fn to_json(bundle: &ReportBundle) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(bundle)
}

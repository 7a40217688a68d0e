use crate::error::ReportError;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub report: ReportSection,
    pub sheets: SheetsConfig,
    pub columns: PersonColumns,
    pub catalog: CatalogColumns,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub title: String,
    pub output: String,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: "Holland Career Interest Assessment Report".to_string(),
            output: "interest_report".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub scores: String,
    pub percentiles: String,
    pub codes: String,
    pub introduction: String,
    pub descriptions_dir: String,
    pub images_dir: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            scores: "scores.csv".to_string(),
            percentiles: "percentiles.csv".to_string(),
            codes: "codes.csv".to_string(),
            introduction: "introduction.txt".to_string(),
            descriptions_dir: "descriptions".to_string(),
            images_dir: "images".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PersonColumns {
    pub name: String,
    pub roll: String,
    pub class: String,
    pub section: String,
}

impl Default for PersonColumns {
    fn default() -> Self {
        Self {
            name: "Student Name".to_string(),
            roll: "Roll Number".to_string(),
            class: "Class".to_string(),
            section: "Section".to_string(),
        }
    }
}

/// Column selection for the career catalog sheet.
///
/// The four linking columns are read by position (0, 3, 4 and 7) unless a
/// header name is configured; the descriptive columns are read by header.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    pub code_id: Option<String>,
    pub code: String,
    pub work_field_id: Option<String>,
    pub code_link: Option<String>,
    pub work_field: String,
    pub job: String,
    pub job_zone: String,
    pub work_link: Option<String>,
}

pub const CODE_ID_POSITION: usize = 0;
pub const WORK_FIELD_ID_POSITION: usize = 3;
pub const CODE_LINK_POSITION: usize = 4;
pub const WORK_LINK_POSITION: usize = 7;

impl Default for CatalogColumns {
    fn default() -> Self {
        Self {
            code_id: None,
            code: "Code".to_string(),
            work_field_id: None,
            code_link: None,
            work_field: "Work Field".to_string(),
            job: "Jobs".to_string(),
            job_zone: "job zones".to_string(),
            work_link: None,
        }
    }
}

impl CatalogColumns {
    /// Every header name that will be looked up in the sheet.
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![
            self.code.as_str(),
            self.work_field.as_str(),
            self.job.as_str(),
            self.job_zone.as_str(),
        ];
        names.extend(
            [
                &self.code_id,
                &self.work_field_id,
                &self.code_link,
                &self.work_link,
            ]
            .into_iter()
            .filter_map(|name| name.as_deref()),
        );
        names
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ReportError> {
        let required = [
            ("report.title", &self.report.title),
            ("report.output", &self.report.output),
            ("sheets.scores", &self.sheets.scores),
            ("sheets.percentiles", &self.sheets.percentiles),
            ("sheets.codes", &self.sheets.codes),
            ("columns.name", &self.columns.name),
            ("columns.roll", &self.columns.roll),
        ];
        let empty = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect::<Vec<_>>();
        if !empty.is_empty() {
            return Err(ReportError::ConfigParse(format!(
                "value(s) must not be empty: {}",
                empty.join(", ")
            )));
        }

        let mut seen = HashSet::new();
        for name in self.catalog.names() {
            let normalized = name.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                return Err(ReportError::ConfigParse(
                    "catalog column names must not be empty".to_string(),
                ));
            }
            if !seen.insert(normalized) {
                return Err(ReportError::ConfigParse(format!(
                    "catalog column name used more than once: {}",
                    name.trim()
                )));
            }
        }
        Ok(())
    }
}

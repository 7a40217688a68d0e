use super::riasec::{PercentileSet, RankedCode, RawScoreSet, Trait};
use serde::Serialize;

/// Opaque identity fields carried through to the document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Identity {
    pub name: String,
    pub roll: String,
    pub class: String,
    pub section: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonScores {
    pub identity: Identity,
    pub raw: RawScoreSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobEntry {
    pub job: Option<String>,
    pub job_zone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkFieldGroup {
    pub work_field: String,
    pub jobs: Vec<JobEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    Found {
        work_fields: Vec<String>,
        groups: Vec<WorkFieldGroup>,
    },
    NotFound {
        strongest: Trait,
    },
}

impl MatchResult {
    pub fn job_count(&self) -> usize {
        match self {
            Self::Found { groups, .. } => groups.iter().map(|group| group.jobs.len()).sum(),
            Self::NotFound { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    #[serde(rename = "trait")]
    pub theme: Trait,
    pub percentile: u8,
    pub description: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonReport {
    pub identity: Identity,
    pub raw_scores: RawScoreSet,
    pub percentiles: PercentileSet,
    pub ranking: Vec<(Trait, u8)>,
    pub code: RankedCode,
    pub themes: Vec<Theme>,
    pub careers: MatchResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    pub title: String,
    pub version: String,
    pub generated_at: String,
    pub introduction: Vec<String>,
    pub people: Vec<PersonReport>,
}

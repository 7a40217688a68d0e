pub mod chart;
pub mod json;
pub mod md;
pub mod writer;

use crate::error::ReportError;
use crate::types::report::ReportBundle;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Md => "md",
        }
    }
}

pub fn render(bundle: &ReportBundle, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Json => json::to_json(bundle).map_err(ReportError::Json),
        OutputFormat::Md => Ok(md::to_markdown(bundle)),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::types::report::{
        Identity, JobEntry, MatchResult, PersonReport, ReportBundle, Theme, WorkFieldGroup,
    };
    use crate::types::riasec::{PercentileSet, RawScoreSet, Trait};

    fn person(name: &str, values: [u8; 6], careers: MatchResult) -> PersonReport {
        let percentiles = PercentileSet::from_fn(|t| values[t as usize]);
        let ranking = crate::scoring::rank(&percentiles);
        PersonReport {
            identity: Identity {
                name: name.to_string(),
                roll: format!("R-{name}"),
                class: "9".to_string(),
                section: "B".to_string(),
            },
            raw_scores: RawScoreSet::from_fn(|t| {
                (values[t as usize] != 10).then(|| i64::from(values[t as usize]) / 3)
            }),
            percentiles,
            ranking: ranking.ordered,
            code: ranking.code,
            themes: ranking
                .code
                .traits()
                .into_iter()
                .map(|t| Theme {
                    theme: t,
                    percentile: percentiles.get(t),
                    description: vec![format!("{} paragraph.", t.name())],
                    image: None,
                })
                .collect(),
            careers,
        }
    }

    pub(crate) fn sample_bundle() -> ReportBundle {
        let found = MatchResult::Found {
            work_fields: vec!["Education".to_string()],
            groups: vec![WorkFieldGroup {
                work_field: "Education".to_string(),
                jobs: vec![
                    JobEntry {
                        job: Some("Art Teacher".to_string()),
                        job_zone: "4".to_string(),
                    },
                    JobEntry {
                        job: None,
                        job_zone: "n/a".to_string(),
                    },
                ],
            }],
        };
        let missing = MatchResult::NotFound {
            strongest: Trait::Investigative,
        };

        ReportBundle {
            title: "Holland Career Interest Assessment Report".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            introduction: vec!["Welcome to your report.".to_string()],
            people: vec![
                person("Asha", [10, 60, 85, 92, 20, 30], found),
                person("Dev", [40, 95, 90, 10, 60, 20], missing),
            ],
        }
    }
}

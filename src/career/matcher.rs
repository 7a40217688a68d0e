use super::normalize_job_zone;
use crate::types::catalog::{CareerCatalog, CareerRecord};
use crate::types::report::{JobEntry, MatchResult, WorkFieldGroup};
use crate::types::riasec::RankedCode;
use std::collections::BTreeMap;

pub const UNGROUPED_WORK_FIELD: &str = "Other";

/// Resolves career recommendations for a ranked code.
///
/// Work fields come from rows whose `code_link` names the matched row's
/// `code_id`. Jobs come from rows whose `work_link` names the matched row's
/// `work_field_id`; when that yields nothing the matched row itself is the
/// only job, so an exact code match never produces an empty result.
pub fn match_code(code: &RankedCode, catalog: &CareerCatalog) -> MatchResult {
    let code_text = code.to_string();
    let Some(matched) = catalog.find_code(&code_text) else {
        tracing::debug!(code = %code_text, "no catalog row for code");
        return MatchResult::NotFound {
            strongest: code.strongest(),
        };
    };

    let work_fields = matched
        .code_id
        .as_deref()
        .map(|code_id| {
            let mut names: Vec<String> = Vec::new();
            for record in catalog.linked_to_code(code_id) {
                if let Some(name) = record.work_field.as_deref().map(clean_label) {
                    if !name.is_empty() && !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
            names
        })
        .unwrap_or_default();

    let mut jobs: Vec<&CareerRecord> = matched
        .work_field_id
        .as_deref()
        .map(|work_field_id| catalog.linked_to_work_field(work_field_id).collect())
        .unwrap_or_default();
    if jobs.is_empty() {
        tracing::debug!(code = %code_text, "job linkage empty, using matched row");
        jobs.push(matched);
    }

    MatchResult::Found {
        work_fields,
        groups: group_by_work_field(&jobs),
    }
}

fn group_by_work_field(jobs: &[&CareerRecord]) -> Vec<WorkFieldGroup> {
    let mut grouped: BTreeMap<String, Vec<JobEntry>> = BTreeMap::new();
    for record in jobs {
        let label = record
            .work_field
            .as_deref()
            .map(clean_label)
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| UNGROUPED_WORK_FIELD.to_string());
        grouped.entry(label).or_default().push(JobEntry {
            job: record
                .job
                .as_deref()
                .map(str::trim)
                .filter(|job| !job.is_empty())
                .map(str::to_string),
            job_zone: normalize_job_zone(record.job_zone.as_deref()),
        });
    }
    grouped
        .into_iter()
        .map(|(work_field, jobs)| WorkFieldGroup { work_field, jobs })
        .collect()
}

fn clean_label(label: &str) -> String {
    label.trim().replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::riasec::Trait;

    fn record(
        code_id: &str,
        code: &str,
        work_field_id: &str,
        code_link: &str,
        work_field: &str,
        job: &str,
        job_zone: &str,
        work_link: &str,
    ) -> CareerRecord {
        let cell = |value: &str| (!value.is_empty()).then(|| value.to_string());
        CareerRecord {
            code_id: cell(code_id),
            code: code.to_string(),
            work_field_id: cell(work_field_id),
            code_link: cell(code_link),
            work_field: cell(work_field),
            job: cell(job),
            job_zone: cell(job_zone),
            work_link: cell(work_link),
        }
    }

    fn catalog() -> CareerCatalog {
        CareerCatalog::new(vec![
            record("C1", "SAI", "W1", "", "Education", "Teacher", "4", ""),
            record("C2", "RIE", "W9", "", "Engineering", "Surveyor", "3.0", ""),
            record("C3", "ECS", "", "", "Sales", "Buyer", "2", ""),
            record("", "", "", "C1", "Counseling\nServices", "", "", ""),
            record("", "", "", "C1", "Education", "", "", ""),
            record("", "", "", "C1", "Counseling\nServices", "", "", ""),
            record("", "", "", "", "Education", "Art Teacher", "4.0", "W1"),
            record("", "", "", "", "Counseling\nServices", "School Counselor", "Varies", "W1"),
            record("", "", "", "", "Education", "Librarian", "3", "W1"),
            record("", "", "", "", "", "Tutor", "", "W1"),
        ])
    }

    fn code(traits: [Trait; 3]) -> RankedCode {
        RankedCode::new(traits)
    }

    #[test]
    fn match_collects_work_fields_and_groups_linked_jobs() {
        let result = match_code(
            &code([Trait::Social, Trait::Artistic, Trait::Investigative]),
            &catalog(),
        );
        let MatchResult::Found {
            work_fields,
            groups,
        } = result
        else {
            panic!("SAI should match");
        };

        assert_eq!(work_fields, vec!["Counseling Services", "Education"]);
        let labels = groups
            .iter()
            .map(|group| group.work_field.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Counseling Services", "Education", "Other"]);

        let education = &groups[1];
        assert_eq!(
            education.jobs,
            vec![
                JobEntry {
                    job: Some("Art Teacher".to_string()),
                    job_zone: "4".to_string(),
                },
                JobEntry {
                    job: Some("Librarian".to_string()),
                    job_zone: "3".to_string(),
                },
            ]
        );
        assert_eq!(groups[0].jobs[0].job_zone, "Varies");
        assert_eq!(groups[2].jobs[0].job_zone, "n/a");
    }

    #[test]
    fn match_falls_back_to_matched_row_when_job_linkage_is_empty() {
        let result = match_code(
            &code([Trait::Realistic, Trait::Investigative, Trait::Enterprising]),
            &catalog(),
        );
        assert_eq!(
            result,
            MatchResult::Found {
                work_fields: vec![],
                groups: vec![WorkFieldGroup {
                    work_field: "Engineering".to_string(),
                    jobs: vec![JobEntry {
                        job: Some("Surveyor".to_string()),
                        job_zone: "3".to_string(),
                    }],
                }],
            }
        );
    }

    #[test]
    fn match_falls_back_to_matched_row_when_work_id_is_blank() {
        let result = match_code(
            &code([Trait::Enterprising, Trait::Conventional, Trait::Social]),
            &catalog(),
        );
        assert_eq!(
            result,
            MatchResult::Found {
                work_fields: vec![],
                groups: vec![WorkFieldGroup {
                    work_field: "Sales".to_string(),
                    jobs: vec![JobEntry {
                        job: Some("Buyer".to_string()),
                        job_zone: "2".to_string(),
                    }],
                }],
            }
        );
    }

    #[test]
    fn match_reports_strongest_trait_when_code_is_absent() {
        let result = match_code(
            &code([Trait::Investigative, Trait::Artistic, Trait::Enterprising]),
            &catalog(),
        );
        assert_eq!(
            result,
            MatchResult::NotFound {
                strongest: Trait::Investigative
            }
        );
    }

    #[test]
    fn match_is_order_sensitive() {
        let result = match_code(
            &code([Trait::Artistic, Trait::Investigative, Trait::Social]),
            &catalog(),
        );
        assert!(matches!(result, MatchResult::NotFound { strongest: Trait::Artistic }));
    }

    #[test]
    fn match_never_returns_empty_found_for_exact_code() {
        let catalog = catalog();
        for record in catalog.records().iter().filter(|r| r.code.len() == 3) {
            let traits = record
                .code
                .chars()
                .map(|letter| Trait::from_header(&letter.to_string()))
                .collect::<Option<Vec<_>>>()
                .expect("codes in fixture are valid");
            let result = match_code(&code([traits[0], traits[1], traits[2]]), &catalog);
            assert!(result.job_count() > 0);
        }
    }

    #[test]
    fn match_is_idempotent() {
        let catalog = catalog();
        let sai = code([Trait::Social, Trait::Artistic, Trait::Investigative]);
        assert_eq!(match_code(&sai, &catalog), match_code(&sai, &catalog));
    }
}

use crate::career::match_code;
use crate::ingest::Workbook;
use crate::scoring::{normalize, rank};
use crate::types::report::{MatchResult, PersonReport, PersonScores, ReportBundle, Theme};
use chrono::Utc;

/// Runs the scoring pipeline for one person. Reads only shared reference
/// data, so people can be assessed in any order.
pub fn assess(person: &PersonScores, workbook: &Workbook) -> PersonReport {
    let percentiles = normalize(&person.raw, &workbook.percentiles);
    let ranking = rank(&percentiles);
    let careers = match_code(&ranking.code, &workbook.catalog);

    match &careers {
        MatchResult::Found { .. } => tracing::debug!(
            roll = %person.identity.roll,
            code = %ranking.code,
            jobs = careers.job_count(),
            "career match"
        ),
        MatchResult::NotFound { strongest } => tracing::info!(
            roll = %person.identity.roll,
            code = %ranking.code,
            strongest = %strongest,
            "no career rows for code"
        ),
    }

    let themes = ranking
        .code
        .traits()
        .into_iter()
        .map(|t| {
            let image = workbook.image_for(t);
            if image.is_none() {
                tracing::warn!(theme = %t, "theme image not found");
            }
            Theme {
                theme: t,
                percentile: percentiles.get(t),
                description: workbook.descriptions.get(&t).cloned().unwrap_or_default(),
                image: image.map(|path| path.display().to_string()),
            }
        })
        .collect();

    PersonReport {
        identity: person.identity.clone(),
        raw_scores: person.raw,
        percentiles,
        ranking: ranking.ordered,
        code: ranking.code,
        themes,
        careers,
    }
}

pub fn assess_all(workbook: &Workbook, title: &str) -> ReportBundle {
    ReportBundle {
        title: title.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated_at: Utc::now().to_rfc3339(),
        introduction: workbook.introduction.clone(),
        people: workbook
            .people
            .iter()
            .map(|person| assess(person, workbook))
            .collect(),
    }
}

use super::chart::percentile_chart;
use crate::types::report::{MatchResult, PersonReport, ReportBundle};
use crate::types::riasec::Trait;

pub const PAGE_BREAK: &str = "\n---\n\n";
pub const UNREADABLE_SCORE: &str = "n/a";

const JOB_ZONE_NOTE: &str = "*Note: The Job Zone indicates the level of preparation needed for a job (1 = little preparation, 5 = extensive preparation).*";

const EXPLORE_TIPS: [&str; 3] = [
    "Participate in school clubs, after-school activities, or personal projects that align with your top traits.",
    "Talk to people! Seek guidance from teachers, counselors, or professionals working in fields that interest you.",
    "Volunteer or find a part-time job in an area related to your interests to get real-world experience.",
];

const FINAL_NOTE: &str = "Understanding your interests is a powerful first step toward discovering a fulfilling career path. This report is a snapshot in time. Continue to be curious, keep learning, and trust in your unique potential. Your interests may evolve, and that's a natural part of growth!";

pub fn to_markdown(bundle: &ReportBundle) -> String {
    bundle
        .people
        .iter()
        .map(|person| person_markdown(bundle, person))
        .collect::<Vec<_>>()
        .join(PAGE_BREAK)
}

fn person_markdown(bundle: &ReportBundle, person: &PersonReport) -> String {
    let mut output = String::new();
    let identity = &person.identity;
    output.push_str(&format!("# {}\n\n", bundle.title));
    output.push_str(&format!(
        "Name: {}\n\nClass: {}\n\nSection: {}\n\nRoll Number: {}\n\n",
        identity.name, identity.class, identity.section, identity.roll
    ));

    output.push_str("## 1. Introduction\n\n");
    for paragraph in &bundle.introduction {
        output.push_str(&format!("{paragraph}\n\n"));
    }

    output.push_str("## 2. Score Analysis\n\n");
    output.push_str(&format!("Your Holland Code: **{}**\n\n", person.code));
    output.push_str("| Type | Raw Score | Percentile |\n|---|---|---|\n");
    for t in Trait::ALL {
        let raw = person
            .raw_scores
            .get(t)
            .map_or_else(|| UNREADABLE_SCORE.to_string(), |raw| raw.to_string());
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            t,
            raw,
            person.percentiles.get(t)
        ));
    }
    output.push_str(&format!(
        "\n```text\n{}```\n\n",
        percentile_chart(&person.percentiles)
    ));

    output.push_str("## 3. Your Top 3 Personality Themes (In Order of Strength)\n\n");
    for theme in &person.themes {
        output.push_str(&format!(
            "### {} ({})\n\n",
            theme.theme,
            theme.theme.letter()
        ));
        if let Some(image) = &theme.image {
            output.push_str(&format!("![{}]({})\n\n", theme.theme, image));
        }
        for line in &theme.description {
            output.push_str(&format!("{line}\n\n"));
        }
    }

    output.push_str("## 4. Career Recommendations\n\n");
    push_careers(&mut output, person);

    output.push_str("## 5. How to Explore Your Interests\n\n");
    for tip in EXPLORE_TIPS {
        output.push_str(&format!("- {tip}\n"));
    }
    output.push('\n');

    output.push_str("## 6. Interest Report Summary\n\n");
    let top_names = person
        .code
        .traits()
        .map(|t| t.name())
        .join(", ");
    output.push_str(&format!(
        "Based on your top scores in {} ({}), your interests align with traits and work environments typical for these personality types. Use this report as a starting point to explore, learn, and reflect on what truly motivates you.\n\n",
        top_names, person.code
    ));

    output.push_str("## 7. A Final Note\n\n");
    output.push_str(FINAL_NOTE);
    output.push('\n');
    output
}

fn push_careers(output: &mut String, person: &PersonReport) {
    match &person.careers {
        MatchResult::NotFound { strongest } => {
            output.push_str(&format!(
                "No specific job recommendations were found for your unique code ({}).\n\n",
                person.code
            ));
            output.push_str(&format!(
                "This is a great opportunity to explore careers that align with your strongest personality theme: {} ({}). Consider researching jobs related to this primary interest area.\n\n",
                strongest,
                strongest.letter()
            ));
        }
        MatchResult::Found {
            work_fields,
            groups,
        } => {
            output.push_str(&format!(
                "Based on your Holland Code ({}), here are some career paths to explore:\n\n",
                person.code
            ));
            if !work_fields.is_empty() {
                output.push_str(&format!(
                    "Recommended work fields: {}\n\n",
                    work_fields.join(", ")
                ));
            }
            output.push_str(JOB_ZONE_NOTE);
            output.push_str("\n\n");
            for group in groups {
                output.push_str(&format!("**{}**\n\n", group.work_field));
                for entry in &group.jobs {
                    if let Some(job) = &entry.job {
                        output.push_str(&format!("- {} (Job Zone: {})\n", job, entry.job_zone));
                    }
                }
                output.push('\n');
            }
        }
    }
}
